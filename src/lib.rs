//! Utilities for converting between the civil calendar and the Vietnamese
//! lunisolar calendar (âm lịch).
//!
//! The Vietnamese calendar follows the astronomical rules of the
//! traditional Chinese calendar — months begin on the local day of a new
//! moon, years are anchored on the winter-solstice month — but is computed
//! for UTC+7 rather than UTC+8, which occasionally shifts a month boundary
//! relative to the Chinese calendar. New-moon instants and solar
//! longitudes come from truncated trigonometric series; conversions are
//! validated against known dates roughly within 1800..=2040.
//!
//! # Examples
//!
//! Converting in both directions:
//!
//! ```
//! use amlich::{LunarDate, SolarDate, lunar_to_solar, solar_to_lunar};
//!
//! let lunar = solar_to_lunar(SolarDate::new(2014, 9, 23), 7);
//! assert_eq!(LunarDate::new(2014, 8, 30, false), lunar);
//!
//! let solar = lunar_to_solar(lunar, 7).unwrap();
//! assert_eq!(SolarDate::new(2014, 9, 23), solar);
//! ```
//!
//! Working with [`VnDate`], which carries a civil day together with its
//! lunar date:
//!
//! ```
//! use amlich::VnDate;
//!
//! let date = VnDate::from_solar_ymd(2014, 9, 23).unwrap();
//! assert_eq!("2014-08-30 (2014-09-23)", date.to_string());
//! assert_eq!(1, date.add_days(1).day());
//! ```
//!
//! Lunar dates in intercalary (leap) months carry a flag, and asking for a
//! leap month a year does not have is an error:
//!
//! ```
//! use amlich::{LunarDate, SolarDate, lunar_to_solar, solar_to_lunar};
//!
//! let lunar = solar_to_lunar(SolarDate::new(2006, 9, 12), 7);
//! assert_eq!(LunarDate::new(2006, 7, 20, true), lunar);
//!
//! assert!(lunar_to_solar(LunarDate::new(2006, 6, 20, true), 7).is_err());
//! ```

pub mod date;
pub mod lunar;
pub mod vndate;

pub use date::{Date, SolarDate};
pub use lunar::{InvalidLeapMonth, LunarDate, lunar_to_solar, solar_to_lunar};
pub use vndate::{ParseDateError, VIETNAM_TZ_OFFSET, VnDate};
