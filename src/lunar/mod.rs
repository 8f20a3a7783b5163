//! The Vietnamese lunisolar calendar (âm lịch).
//!
//! Months begin on the local calendar day containing a new moon, and the
//! year is anchored on the month containing the winter solstice, month 11.
//! When two successive month-11 anchors lie more than 365 days apart the
//! year has 13 months; the repetition of the first month whose
//! solar-longitude sector fails to advance is the leap (intercalary) month.
//!
//! These are the rules of the traditional Chinese calendar evaluated at the
//! Vietnamese meridian: every function takes the timezone offset in whole
//! hours east of UTC explicitly, +7 for Viet Nam. Passing +8 yields the
//! Chinese calendar instead, which differs from the Vietnamese one in the
//! occasional month whose new moon falls between the two midnights.
//!
//! All functions are pure; the accuracy of the underlying [`ephemeris`]
//! series is validated against known dates roughly within 1800..=2040 and
//! inputs are not range-checked.

pub mod ephemeris;
pub mod fmt;

use serde::{Deserialize, Serialize};

use self::ephemeris::{NEW_MOON_EPOCH, SYNODIC_MONTH, new_moon_day, sun_longitude_sector};
use crate::date::{Date, SolarDate};

/// A date in the Vietnamese lunisolar calendar.
///
/// `leap` marks this date as falling in the intercalary repetition of
/// `month` within a 13-month lunar year. `year` is the lunar year label,
/// which differs from the civil year for dates between 1 January and the
/// lunar new year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    /// Month of the lunar year, `1..=12`.
    pub month: u32,
    /// Day of the lunar month, `1..=30`.
    pub day: u32,
    /// `true` for the intercalary occurrence of `month`.
    pub leap: bool,
}

impl LunarDate {
    /// Creates a lunar date from its components.
    pub fn new(year: i32, month: u32, day: u32, leap: bool) -> Self {
        Self {
            year,
            month,
            day,
            leap,
        }
    }
}

impl std::fmt::Display for LunarDate {
    /// Formats the date in `YYYY-MM-DD` form. The leap flag has no textual
    /// form; two dates a synodic month apart can render identically.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Returned by [`lunar_to_solar`] when the requested leap month is not the
/// intercalary month of the given lunar year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("lunar year {year} has no leap month {month}")]
pub struct InvalidLeapMonth {
    pub year: i32,
    pub month: u32,
}

/// Day on which lunar month 11 of civil year `year` begins: the last new
/// moon before the sun leaves the winter-solstice sector.
///
/// Every other month of the lunar year is numbered from this anchor.
pub fn lunar_month_11(year: i32, tz_offset: i32) -> Date {
    // months elapsed since the 1900-01-01 reference new moon
    let off = Date::from_civil(year, 12, 31).jdn() - 2415021;
    let k = (f64::from(off) / SYNODIC_MONTH).floor() as i32;
    let nm = new_moon_day(k, tz_offset);
    if sun_longitude_sector(nm, tz_offset) >= 9 {
        // sun already past the solstice sector, the estimate overshot
        new_moon_day(k - 1, tz_offset)
    } else {
        nm
    }
}

/// Offset from month 11 of the intercalary month of a 13-month lunar year.
///
/// Starting at the new moon after the anchor `a11`, walks month starts
/// while the sun's longitude sector keeps advancing; the month entered
/// before the first repeat is the intercalary one. Meaningful only when
/// the lunar year beginning at `a11` spans 13 months.
pub fn leap_month_offset(a11: Date, tz_offset: i32) -> i32 {
    let k = ((f64::from(a11.jdn()) - NEW_MOON_EPOCH) / SYNODIC_MONTH + 0.5).floor() as i32;
    let mut last = 0;
    let mut i = 1; // the month following lunar month 11
    let mut arc = sun_longitude_sector(new_moon_day(k + i, tz_offset), tz_offset);
    while arc != last && i < 14 {
        last = arc;
        i += 1;
        arc = sun_longitude_sector(new_moon_day(k + i, tz_offset), tz_offset);
    }
    i - 1
}

/// Converts a civil date to its Vietnamese lunar date.
///
/// `tz_offset` is the timezone in whole hours east of UTC, +7 for Viet
/// Nam.
///
/// # Example
///
/// ```
/// use amlich::{LunarDate, SolarDate, solar_to_lunar};
///
/// let lunar = solar_to_lunar(SolarDate::new(2014, 9, 23), 7);
/// assert_eq!(LunarDate::new(2014, 8, 30, false), lunar);
/// ```
pub fn solar_to_lunar(solar: SolarDate, tz_offset: i32) -> LunarDate {
    let day_number = Date::from(solar);
    let k = ((f64::from(day_number.jdn()) - NEW_MOON_EPOCH) / SYNODIC_MONTH).floor() as i32;
    let mut month_start = new_moon_day(k + 1, tz_offset);
    if month_start > day_number {
        month_start = new_moon_day(k, tz_offset);
    }
    let mut a11 = lunar_month_11(solar.year, tz_offset);
    let mut b11 = a11;
    let mut year;
    if a11 >= month_start {
        year = solar.year;
        a11 = lunar_month_11(solar.year - 1, tz_offset);
    } else {
        year = solar.year + 1;
        b11 = lunar_month_11(solar.year + 1, tz_offset);
    }
    let day = day_number - month_start + 1;
    let diff = (month_start - a11) / 29;
    let mut leap = false;
    let mut month = diff + 11;
    if b11 - a11 > 365 {
        let leap_offset = leap_month_offset(a11, tz_offset);
        if diff >= leap_offset {
            month = diff + 10;
            leap = diff == leap_offset;
        }
    }
    if month > 12 {
        month -= 12;
    }
    if month >= 11 && diff < 4 {
        // months 11 and 12 before the civil new year belong to the
        // previous lunar year
        year -= 1;
    }
    LunarDate {
        year,
        month: month as u32,
        day: day as u32,
        leap,
    }
}

/// Converts a Vietnamese lunar date back to the civil calendar.
///
/// Setting `lunar.leap` requests the intercalary occurrence of
/// `lunar.month`; the conversion fails unless that month really is the
/// intercalary month of `lunar.year`.
///
/// # Example
///
/// ```
/// use amlich::{LunarDate, SolarDate, lunar_to_solar};
///
/// let solar = lunar_to_solar(LunarDate::new(2014, 8, 30, false), 7).unwrap();
/// assert_eq!(SolarDate::new(2014, 9, 23), solar);
///
/// // 2024 has no leap month at all
/// assert!(lunar_to_solar(LunarDate::new(2024, 8, 15, true), 7).is_err());
/// ```
pub fn lunar_to_solar(lunar: LunarDate, tz_offset: i32) -> Result<SolarDate, InvalidLeapMonth> {
    let (a11, b11) = if lunar.month < 11 {
        (
            lunar_month_11(lunar.year - 1, tz_offset),
            lunar_month_11(lunar.year, tz_offset),
        )
    } else {
        (
            lunar_month_11(lunar.year, tz_offset),
            lunar_month_11(lunar.year + 1, tz_offset),
        )
    };
    let k = ((f64::from(a11.jdn()) - NEW_MOON_EPOCH) / SYNODIC_MONTH + 0.5).floor() as i32;
    let month = lunar.month as i32;
    let mut off = month - 11;
    if off < 0 {
        off += 12;
    }
    if b11 - a11 > 365 {
        let leap_offset = leap_month_offset(a11, tz_offset);
        let mut leap_month = leap_offset - 2;
        if leap_month < 0 {
            leap_month += 12;
        }
        if lunar.leap && month != leap_month {
            return Err(InvalidLeapMonth {
                year: lunar.year,
                month: lunar.month,
            });
        }
        if lunar.leap || off >= leap_offset {
            // skip over the inserted month
            off += 1;
        }
    } else if lunar.leap {
        // a 12-month lunar year has no intercalary month
        return Err(InvalidLeapMonth {
            year: lunar.year,
            month: lunar.month,
        });
    }
    let month_start = new_moon_day(k + off, tz_offset);
    Ok((month_start + (lunar.day as i32 - 1)).civil())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_11_anchors() {
        let dataset = [
            ((1999, 12, 8), 1999),
            ((2013, 12, 3), 2013),
            ((2014, 12, 22), 2014),
            ((2017, 12, 18), 2017),
        ];
        for ((y, m, d), year) in dataset {
            assert_eq!(
                SolarDate::new(y, m, d),
                lunar_month_11(year, 7).civil(),
                "anchor {year}"
            );
        }
    }

    #[test]
    fn thirteen_month_years() {
        for (year, has_leap) in [
            (2004, true),
            (2006, true),
            (2009, true),
            (2012, true),
            (2014, true),
            (2015, false),
            (2016, false),
            (2017, true),
            (2020, true),
            (2023, true),
            (2024, false),
        ] {
            let a11 = lunar_month_11(year - 1, 7);
            let b11 = lunar_month_11(year, 7);
            assert_eq!(has_leap, b11 - a11 > 365, "lunar year {year}");
        }
    }

    #[test]
    fn leap_month_offsets() {
        // lunar year 2006 repeats month 7, lunar year 2012 month 4
        assert_eq!(9, leap_month_offset(lunar_month_11(2005, 7), 7));
        assert_eq!(6, leap_month_offset(lunar_month_11(2011, 7), 7));
    }

    #[test]
    fn common_month() {
        let lunar = solar_to_lunar(SolarDate::new(2014, 9, 23), 7);
        assert_eq!(LunarDate::new(2014, 8, 30, false), lunar);
        let solar = lunar_to_solar(lunar, 7).unwrap();
        assert_eq!(SolarDate::new(2014, 9, 23), solar);

        // the same conversion holds at UTC for this date
        let lunar = solar_to_lunar(SolarDate::new(2014, 9, 23), 0);
        assert_eq!(LunarDate::new(2014, 8, 30, false), lunar);
        assert_eq!(
            SolarDate::new(2014, 9, 23),
            lunar_to_solar(lunar, 0).unwrap()
        );
    }

    #[test]
    fn leap_months() {
        let dataset = [
            // (solar, lunar in a 13-month year)
            ((2006, 9, 12), (2006, 7, 20)),
            ((2012, 6, 12), (2012, 4, 23)),
            ((2014, 10, 24), (2014, 9, 1)),
        ];
        for ((sy, sm, sd), (ly, lm, ld)) in dataset {
            let lunar = solar_to_lunar(SolarDate::new(sy, sm, sd), 7);
            assert_eq!(LunarDate::new(ly, lm, ld, true), lunar);
            assert_eq!(
                SolarDate::new(sy, sm, sd),
                lunar_to_solar(lunar, 7).unwrap()
            );
        }
        // the common occurrence lies one synodic month earlier
        assert_eq!(
            SolarDate::new(2006, 8, 13),
            lunar_to_solar(LunarDate::new(2006, 7, 20, false), 7).unwrap()
        );
        assert_eq!(
            SolarDate::new(2012, 5, 13),
            lunar_to_solar(LunarDate::new(2012, 4, 23, false), 7).unwrap()
        );
    }

    #[test]
    fn leap_exclusivity() {
        // every day of leap month 7 of 2006 maps one synodic month after
        // its common sibling and round-trips with the leap flag intact
        for day in 1..=29 {
            let leap = lunar_to_solar(LunarDate::new(2006, 7, day, true), 7).unwrap();
            let common = lunar_to_solar(LunarDate::new(2006, 7, day, false), 7).unwrap();
            let gap = Date::from(leap) - Date::from(common);
            assert!((29..=30).contains(&gap), "day {day} gap {gap}");
            assert_eq!(LunarDate::new(2006, 7, day, true), solar_to_lunar(leap, 7));
            assert_eq!(
                LunarDate::new(2006, 7, day, false),
                solar_to_lunar(common, 7)
            );
        }
    }

    #[test]
    fn invalid_leap_requests() {
        let dataset = [
            // 2014 repeats month 9, not 8
            (2014, 8),
            // 2006 repeats month 7, not 6 or 8
            (2006, 6),
            (2006, 8),
            // 2012 repeats month 4
            (2012, 5),
            // no leap month in 2024 at all
            (2024, 3),
        ];
        for (year, month) in dataset {
            assert_eq!(
                Err(InvalidLeapMonth { year, month }),
                lunar_to_solar(LunarDate::new(year, month, 1, true), 7)
            );
        }
    }

    #[test]
    fn new_year_days() {
        let dataset = [
            (2020, (2020, 1, 25)),
            (2021, (2021, 2, 12)),
            (2022, (2022, 2, 1)),
            (2023, (2023, 1, 22)),
            (2024, (2024, 2, 10)),
            (2025, (2025, 1, 29)),
        ];
        for (lunar_year, (y, m, d)) in dataset {
            assert_eq!(
                SolarDate::new(y, m, d),
                lunar_to_solar(LunarDate::new(lunar_year, 1, 1, false), 7).unwrap(),
                "new year {lunar_year}"
            );
        }
    }

    #[test]
    fn mid_autumn() {
        assert_eq!(
            SolarDate::new(2024, 9, 17),
            lunar_to_solar(LunarDate::new(2024, 8, 15, false), 7).unwrap()
        );
    }

    #[test]
    fn year_boundary() {
        // 1 January belongs to month 11 or 12 of the previous lunar year
        let lunar = solar_to_lunar(SolarDate::new(2000, 1, 1), 7);
        assert_eq!(1999, lunar.year);
        assert_eq!(11, lunar.month);
        let lunar = solar_to_lunar(SolarDate::new(2021, 1, 1), 7);
        assert_eq!(2020, lunar.year);
        assert_eq!(11, lunar.month);
    }

    #[test]
    fn round_trip_dense() {
        let start = Date::from_civil(1995, 1, 1).jdn();
        let end = Date::from_civil(2031, 1, 1).jdn();
        for jdn in start..end {
            let solar = Date::from_jdn(jdn).civil();
            let lunar = solar_to_lunar(solar, 7);
            assert!((1..=12).contains(&lunar.month), "{solar} -> {lunar:?}");
            assert!((1..=30).contains(&lunar.day), "{solar} -> {lunar:?}");
            assert_eq!(Ok(solar), lunar_to_solar(lunar, 7), "{lunar:?}");
        }
    }

    #[test]
    fn round_trip_sparse() {
        let start = Date::from_civil(1800, 1, 1).jdn();
        let end = Date::from_civil(2041, 1, 1).jdn();
        for jdn in (start..end).step_by(17) {
            let solar = Date::from_jdn(jdn).civil();
            let lunar = solar_to_lunar(solar, 7);
            assert_eq!(Ok(solar), lunar_to_solar(lunar, 7), "{lunar:?}");
        }
    }

    #[test]
    fn round_trip_other_timezones() {
        let start = Date::from_civil(2010, 1, 1).jdn();
        let end = Date::from_civil(2014, 1, 1).jdn();
        for tz in [-5, 0, 8] {
            for jdn in start..end {
                let solar = Date::from_jdn(jdn).civil();
                let lunar = solar_to_lunar(solar, tz);
                assert_eq!(Ok(solar), lunar_to_solar(lunar, tz), "tz {tz} {lunar:?}");
            }
        }
    }

    #[test]
    fn lunar_date_format() {
        assert_eq!("2014-08-30", LunarDate::new(2014, 8, 30, false).to_string());
        assert_eq!("2006-07-20", LunarDate::new(2006, 7, 20, true).to_string());
    }

    #[test]
    fn lunar_date_serde() {
        let lunar = LunarDate::new(2006, 7, 20, true);
        let json = serde_json::to_string(&lunar).unwrap();
        assert_eq!(r#"{"year":2006,"month":7,"day":20,"leap":true}"#, json);
        assert_eq!(lunar, serde_json::from_str(&json).unwrap());
    }
}
