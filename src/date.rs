//! Calendar-independent date.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Julian day number of 1582-10-15, the first day of the Gregorian calendar.
const FIRST_GREGORIAN_JDN: i32 = 2299161;

/// A calendar-independent date, stored as a Julian day number (JDN).
///
/// The day number is the interchange currency between the civil and lunar
/// views of a date: both calendars convert through it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: i32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: i32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i32 {
        self.jdn
    }

    /// Creates a `Date` from a civil calendar date.
    ///
    /// The date is read as Gregorian on or after 1582-10-15 and as Julian
    /// before; the branch is selected by the resulting day number alone,
    /// never by the input year. `year` should be an astronomical year
    /// number, i.e. 1 BC is `0`, 2 BC is `-1`, etc.
    ///
    /// Input components are assumed syntactically valid; no range checks
    /// are performed.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_civil(2000, 1, 1);
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_civil(year: i32, month: u32, day: u32) -> Self {
        let (m0, d) = (month as i32, day as i32);
        let a = (14 - m0) / 12;
        let y = year + 4800 - a;
        let m = m0 + 12 * a - 3;
        let jdn = d + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;
        if jdn < FIRST_GREGORIAN_JDN {
            Self::from_jdn(d + (153 * m + 2) / 5 + 365 * y + y / 4 - 32083)
        } else {
            Self::from_jdn(jdn)
        }
    }
    /// Represents the date in the civil calendar, Gregorian from 1582-10-15
    /// onwards and Julian before.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{Date, SolarDate};
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!(SolarDate::new(2000, 1, 1), date.civil());
    /// ```
    pub fn civil(&self) -> SolarDate {
        let jdn = self.jdn;
        let (b, c) = if jdn >= FIRST_GREGORIAN_JDN {
            let a = jdn + 32044;
            let b = (4 * a + 3) / 146097;
            (b, a - (b * 146097) / 4)
        } else {
            (0, jdn + 32082)
        };
        let d = (4 * c + 3) / 1461;
        let e = c - (1461 * d) / 4;
        let m = (5 * e + 2) / 153;
        SolarDate {
            year: b * 100 + d - 4800 + m / 10,
            month: (m + 3 - 12 * (m / 10)) as u32,
            day: (e - (153 * m + 2) / 5 + 1) as u32,
        }
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_civil(2000, 1, 1);
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        self.jdn.rem_euclid(7) + 1
    }
    /// Returns the sexagenary (can chi) day number of the date, numbered
    /// from 1 (Giáp Tý) to 60 (Quý Hợi).
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_civil(2000, 1, 1);
    /// assert_eq!(55, date.sexagenary()); // Mậu Ngọ
    /// ```
    pub fn sexagenary(&self) -> u32 {
        ((self.jdn + 49).rem_euclid(60) + 1) as u32
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn + rhs)
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

impl From<SolarDate> for Date {
    fn from(solar: SolarDate) -> Date {
        Date::from_civil(solar.year, solar.month, solar.day)
    }
}
impl From<Date> for SolarDate {
    fn from(date: Date) -> SolarDate {
        date.civil()
    }
}

/// A civil calendar date: Gregorian from 1582-10-15 onwards, Julian before.
///
/// A plain value record without a time-of-day component. Field values are
/// assumed syntactically valid; construction performs no range checks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarDate {
    /// Creates a civil date from its components.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for SolarDate {
    /// Formats the date in `YYYY-MM-DD` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
