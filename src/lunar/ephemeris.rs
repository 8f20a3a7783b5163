//! Truncated lunar and solar ephemerides.
//!
//! New-moon instants and the sun's apparent longitude are computed from
//! short trigonometric series, following the algorithms in Jean Meeus,
//! *Astronomical Algorithms*. The coefficients below are part of the
//! calendar definition: a drift of a fraction of a day can move a new moon
//! across a local midnight and shift an entire lunar month.

use std::f64::consts::PI;

use crate::date::Date;

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Julian date of the reference new moon (1900 January 1) that the index
/// `k` counts from.
pub const NEW_MOON_EPOCH: f64 = 2415021.076998695;

/// Julian date, as real-valued universal time, of the `k`-th new moon
/// counted from the reference new moon of 1900 January 1.
///
/// A quadratic-plus-cubic mean phase, corrected by five principal harmonics
/// of the sun's mean anomaly, the moon's mean anomaly and the moon's
/// argument of latitude, then shifted from dynamical to universal time.
pub fn new_moon(k: i32) -> f64 {
    let k = f64::from(k);
    let t = k / 1236.85; // centuries since the 1900 epoch
    let t2 = t * t;
    let t3 = t2 * t;
    let dr = PI / 180.0;
    // mean new moon
    let mut jd1 = 2415020.75933 + 29.53058868 * k + 0.0001178 * t2 - 0.000000155 * t3;
    jd1 += 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * dr).sin();
    // sun's mean anomaly
    let m = 359.2242 + 29.10535608 * k - 0.0000333 * t2 - 0.00000347 * t3;
    // moon's mean anomaly
    let mpr = 306.0253 + 385.81691806 * k + 0.0107306 * t2 + 0.00001236 * t3;
    // moon's argument of latitude
    let f = 21.2964 + 390.67050646 * k - 0.0016528 * t2 - 0.00000239 * t3;
    let mut c1 = (0.1734 - 0.000393 * t) * (m * dr).sin() + 0.0021 * (2.0 * dr * m).sin();
    c1 = c1 - 0.4068 * (mpr * dr).sin() + 0.0161 * (dr * 2.0 * mpr).sin();
    c1 -= 0.0004 * (dr * 3.0 * mpr).sin();
    c1 = c1 + 0.0104 * (dr * 2.0 * f).sin() - 0.0051 * (dr * (m + mpr)).sin();
    c1 = c1 - 0.0074 * (dr * (m - mpr)).sin() + 0.0004 * (dr * (2.0 * f + m)).sin();
    c1 = c1 - 0.0004 * (dr * (2.0 * f - m)).sin() - 0.0006 * (dr * (2.0 * f + mpr)).sin();
    c1 = c1 + 0.0010 * (dr * (2.0 * f - mpr)).sin() + 0.0005 * (dr * (2.0 * mpr + m)).sin();
    let deltat = if t < -11.0 {
        0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t3 - 0.000000081 * t * t3
    } else {
        -0.000278 + 0.000265 * t + 0.000262 * t2
    };
    jd1 + c1 - deltat
}

/// Apparent ecliptic longitude of the sun at Julian date `jd`, in radians
/// reduced into `[0, 2π)`.
///
/// Mean longitude plus the equation of center, three harmonics of the
/// sun's mean anomaly. The reduction subtracts the largest multiple of 2π
/// not exceeding the raw value, so the result stays non-negative even when
/// the longitude polynomial itself is negative for dates before J2000.
pub fn sun_longitude(jd: f64) -> f64 {
    let t = (jd - 2451545.0) / 36525.0; // centuries since J2000
    let t2 = t * t;
    let dr = PI / 180.0;
    // mean anomaly, degrees
    let m = 357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2;
    // mean longitude, degrees
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;
    let mut dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * (dr * m).sin();
    dl += (0.019993 - 0.000101 * t) * (dr * 2.0 * m).sin() + 0.000290 * (dr * 3.0 * m).sin();
    let l = (l0 + dl) * dr;
    l - 2.0 * PI * (l / (2.0 * PI)).floor()
}

/// Index in `0..=11` of the 30° solar-longitude sector the sun occupies at
/// the local midnight starting `date`, for a timezone `tz_offset` whole
/// hours east of UTC.
///
/// Sector 0 opens at the March equinox; the winter solstice is the start
/// of sector 9.
pub fn sun_longitude_sector(date: Date, tz_offset: i32) -> i32 {
    let jd = f64::from(date.jdn()) - 0.5 - f64::from(tz_offset) / 24.0;
    (sun_longitude(jd) / PI * 6.0) as i32
}

/// Local calendar day containing the `k`-th new moon.
pub fn new_moon_day(k: i32, tz_offset: i32) -> Date {
    Date::from_jdn((new_moon(k) + 0.5 + f64::from(tz_offset) / 24.0).floor() as i32)
}
