//! Civil days paired with their Vietnamese lunar dates.
//!
//! [`VnDate`] keeps a civil day together with its precomputed lunar date
//! and adds navigation, parsing, validation and enumeration on top of the
//! conversion pair in [`crate::lunar`]. Nothing here re-derives the
//! astronomy: every operation is a thin, bounded walk over
//! [`solar_to_lunar`].

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Datelike, Duration, FixedOffset, NaiveDate, Utc};

use crate::date::SolarDate;
use crate::lunar::{LunarDate, lunar_to_solar, solar_to_lunar};

/// Timezone offset of Viet Nam in whole hours east of UTC, the default for
/// every constructor that does not take an explicit offset.
pub const VIETNAM_TZ_OFFSET: i32 = 7;

/// Years accepted by the lunar-date parser.
///
/// The conversion itself applies no bound; its accuracy is simply
/// unvalidated outside this window.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1800..=2040;

/// Errors from parsing or validating a lunar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseDateError {
    /// The input does not match the `YYYY-MM-DD` pattern.
    #[error("invalid date format, expected YYYY-MM-DD")]
    InvalidFormat,
    /// The year lies outside [`SUPPORTED_YEARS`].
    #[error("year {year} outside supported range 1800..=2040")]
    UnsupportedYear {
        /// The rejected year.
        year: i32,
    },
    /// The month is not in `1..=12`.
    #[error("invalid month {month}")]
    InvalidMonth {
        /// The rejected month.
        month: u32,
    },
    /// The day is not in `1..=31`.
    #[error("invalid day {day}")]
    InvalidDay {
        /// The rejected day.
        day: u32,
    },
    /// The triple is well-formed but names no real lunar date, e.g. day 30
    /// of a 29-day lunar month.
    #[error("no such lunar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// A civil day paired with its Vietnamese lunar date.
///
/// # Example
///
/// ```
/// use amlich::VnDate;
///
/// let date = VnDate::from_solar_ymd(2014, 9, 23).unwrap();
/// assert_eq!(30, date.day());
/// assert_eq!(8, date.month());
/// assert_eq!("2014-08-30 (2014-09-23)", date.to_string());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VnDate {
    solar: NaiveDate,
    lunar: LunarDate,
    tz_offset: i32,
}

impl VnDate {
    /// Pairs `solar` with its lunar date in a timezone `tz_offset` whole
    /// hours east of UTC.
    pub fn new(solar: NaiveDate, tz_offset: i32) -> Self {
        let lunar = solar_to_lunar(
            SolarDate::new(solar.year(), solar.month(), solar.day()),
            tz_offset,
        );
        Self {
            solar,
            lunar,
            tz_offset,
        }
    }

    /// Pairs a civil date with its lunar date in the Vietnamese timezone.
    pub fn from_solar(solar: NaiveDate) -> Self {
        Self::new(solar, VIETNAM_TZ_OFFSET)
    }

    /// Like [`VnDate::from_solar`], from the civil components.
    ///
    /// Returns `None` when the components do not name a civil date.
    pub fn from_solar_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from_solar)
    }

    /// The current day in Viet Nam.
    pub fn today() -> Self {
        let tz = FixedOffset::east_opt(VIETNAM_TZ_OFFSET * 3600).expect("offset in range");
        Self::new(Utc::now().with_timezone(&tz).date_naive(), VIETNAM_TZ_OFFSET)
    }

    /// The civil date.
    pub fn solar(&self) -> NaiveDate {
        self.solar
    }
    /// The lunar date.
    pub fn lunar(&self) -> LunarDate {
        self.lunar
    }
    /// The timezone offset this pairing was computed in.
    pub fn timezone_offset(&self) -> i32 {
        self.tz_offset
    }

    /// Lunar day of month.
    pub fn day(&self) -> u32 {
        self.lunar.day
    }
    /// Lunar month.
    pub fn month(&self) -> u32 {
        self.lunar.month
    }
    /// Lunar year.
    pub fn year(&self) -> i32 {
        self.lunar.year
    }
    /// `true` when the date falls in an intercalary month.
    pub fn is_leap_month(&self) -> bool {
        self.lunar.leap
    }

    /// The date `days` civil days later (earlier when negative).
    pub fn add_days(&self, days: i64) -> Self {
        Self::new(self.solar + Duration::days(days), self.tz_offset)
    }

    /// `true` if `self` is earlier than `other`.
    pub fn before(&self, other: &VnDate) -> bool {
        self.solar < other.solar
    }
    /// `true` if `self` is later than `other`.
    pub fn after(&self, other: &VnDate) -> bool {
        self.solar > other.solar
    }

    /// `true` when tomorrow is the first day of a lunar month.
    pub fn is_first_day_tomorrow(&self) -> bool {
        self.add_days(1).day() == 1
    }
    /// `true` when tomorrow is the 15th, the full-moon day.
    pub fn is_full_moon_tomorrow(&self) -> bool {
        self.add_days(1).day() == 15
    }

    /// First day of this lunar month, found by scanning at most a month
    /// backwards.
    pub fn first_day_of_month(&self) -> Self {
        let mut date = *self;
        for _ in 0..31 {
            if date.day() == 1 {
                break;
            }
            date = date.add_days(-1);
        }
        date
    }
    /// Last day of this lunar month, the day before the next new moon.
    pub fn last_day_of_month(&self) -> Self {
        let mut date = *self;
        for _ in 0..31 {
            let next = date.add_days(1);
            if next.day() == 1 {
                break;
            }
            date = next;
        }
        date
    }
}

impl fmt::Display for VnDate {
    /// Formats as the lunar date followed by the civil date in parentheses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.lunar, self.solar.format("%Y-%m-%d"))
    }
}

impl FromStr for VnDate {
    type Err = ParseDateError;

    /// Parses a *lunar* date in `YYYY-MM-DD` form, see [`parse_lunar`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_lunar(s)
    }
}

fn digits(s: &str, len: usize) -> Option<u32> {
    if s.len() == len && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// Parses a lunar date in `YYYY-MM-DD` form and validates it.
///
/// The year must lie in [`SUPPORTED_YEARS`] and the triple must name a
/// real lunar date: after the syntactic checks it is converted to the
/// civil calendar and back, which rejects e.g. day 30 of a 29-day month.
/// Intercalary months are not addressable in this format; the triple is
/// read as the common occurrence of its month.
///
/// # Example
///
/// ```
/// use amlich::vndate::{ParseDateError, parse_lunar};
///
/// let date = parse_lunar("2014-08-30").unwrap();
/// assert_eq!("2014-08-30 (2014-09-23)", date.to_string());
///
/// assert_eq!(Err(ParseDateError::InvalidMonth { month: 13 }), parse_lunar("2014-13-01"));
/// ```
pub fn parse_lunar(input: &str) -> Result<VnDate, ParseDateError> {
    let mut parts = input.split('-');
    let (y, m, d) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d), None) => (y, m, d),
        _ => return Err(ParseDateError::InvalidFormat),
    };
    let year = digits(y, 4).ok_or(ParseDateError::InvalidFormat)? as i32;
    let month = digits(m, 2).ok_or(ParseDateError::InvalidFormat)?;
    let day = digits(d, 2).ok_or(ParseDateError::InvalidFormat)?;
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(ParseDateError::UnsupportedYear { year });
    }
    if !(1..=12).contains(&month) {
        return Err(ParseDateError::InvalidMonth { month });
    }
    if !(1..=31).contains(&day) {
        return Err(ParseDateError::InvalidDay { day });
    }
    validate(year, month, day)
}

/// Parses a civil date in `YYYY-MM-DD` form and pairs it with its lunar
/// date in the Vietnamese timezone.
pub fn parse_solar(input: &str) -> Result<VnDate, ParseDateError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(VnDate::from_solar)
        .map_err(|_| ParseDateError::InvalidFormat)
}

/// Confirms that `(year, month, day)` names a real common-month lunar date
/// by converting to the civil calendar and back, and returns it paired
/// with its civil day.
pub fn validate(year: i32, month: u32, day: u32) -> Result<VnDate, ParseDateError> {
    let invalid = ParseDateError::InvalidDate { year, month, day };
    let lunar = LunarDate::new(year, month, day, false);
    let solar = lunar_to_solar(lunar, VIETNAM_TZ_OFFSET).map_err(|_| invalid)?;
    let back = solar_to_lunar(solar, VIETNAM_TZ_OFFSET);
    if back.year != year || back.month != month || back.day != day {
        return Err(invalid);
    }
    NaiveDate::from_ymd_opt(solar.year, solar.month, solar.day)
        .map(|d| VnDate::new(d, VIETNAM_TZ_OFFSET))
        .ok_or(invalid)
}

/// Every day from `from` through `to`, inclusive.
pub fn dates_between(from: VnDate, to: VnDate) -> Vec<VnDate> {
    let mut dates = Vec::new();
    let mut cur = from;
    while cur.before(&to) {
        dates.push(cur);
        cur = cur.add_days(1);
    }
    dates.push(cur);
    dates
}

/// Every day of the civil month `year`-`month` with its lunar date, in
/// order. Empty when the components name no civil month.
pub fn month_dates(year: i32, month: u32) -> Vec<VnDate> {
    let mut dates = Vec::new();
    let Some(mut day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return dates;
    };
    while day.month() == month {
        dates.push(VnDate::from_solar(day));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    dates
}

/// The twelve civil months of `year`, keyed by month number.
pub fn year_month_dates(year: i32) -> BTreeMap<u32, Vec<VnDate>> {
    (1..=12).map(|m| (m, month_dates(year, m))).collect()
}
