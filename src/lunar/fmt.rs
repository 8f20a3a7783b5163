//! Vietnamese names for lunar dates.

/// The ten heavenly stems (can), placed so that stem `num % 10` belongs to
/// sexagenary cycle number `num`.
static CAN: &[&str] = &[
    "Quý", "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm",
];
/// The twelve earthly branches (chi), placed so that branch `num % 12`
/// belongs to sexagenary cycle number `num`.
static CHI: &[&str] = &[
    "Hợi", "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất",
];

/// Sexagenary cycle number to its can-chi name.
///
/// Pairs with [`crate::Date::sexagenary`] for day names.
///
/// # Example
///
/// ```
/// use amlich::lunar::fmt;
///
/// assert_eq!("Giáp Tý", fmt::sexagenary(1));
/// assert_eq!("Quý Hợi", fmt::sexagenary(60));
/// ```
pub fn sexagenary(num: u32) -> String {
    format!(
        "{} {}",
        CAN[(num % 10) as usize],
        CHI[(num % 12) as usize]
    )
}

/// Can-chi name of a lunar year.
///
/// # Example
///
/// ```
/// use amlich::lunar::fmt;
///
/// assert_eq!("Giáp Thìn", fmt::year_name(2024));
/// ```
pub fn year_name(year: i32) -> String {
    sexagenary((year.rem_euclid(60) as u32 + 56) % 60 + 1)
}

/// Name of a lunar month, with the intercalary marker.
///
/// # Example
///
/// ```
/// use amlich::lunar::fmt;
///
/// assert_eq!("Tháng Giêng", fmt::month_name(1, false));
/// assert_eq!("Tháng Hai nhuận", fmt::month_name(2, true));
/// ```
///
/// # Panics
///
/// If `month` is not in `1..=12`.
pub fn month_name(month: u32, leap: bool) -> String {
    static NAMES: &[&str] = &[
        "Giêng",
        "Hai",
        "Ba",
        "Tư",
        "Năm",
        "Sáu",
        "Bảy",
        "Tám",
        "Chín",
        "Mười",
        "Mười Một",
        "Chạp",
    ];
    let name = match month {
        1..=12 => NAMES[(month - 1) as usize],
        _ => panic!("month {month} not in 1..=12"),
    };
    if leap {
        format!("Tháng {name} nhuận")
    } else {
        format!("Tháng {name}")
    }
}

/// Spoken name of a lunar day; the first ten days carry the "mồng" prefix.
///
/// # Panics
///
/// If `day` is not in `1..=30`.
pub fn day_name(day: u32) -> String {
    match day {
        1..=10 => format!("mồng {day}"),
        11..=30 => day.to_string(),
        _ => panic!("day {day} not in 1..=30"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sexagenary() {
        for (std, num) in [("Giáp Tý", 1), ("Canh Dần", 27), ("Quý Hợi", 60)] {
            assert_eq!(std, sexagenary(num));
        }
    }

    #[test]
    fn test_year_name() {
        for (std, year) in [
            ("Canh Thìn", 2000),
            ("Bính Tuất", 2006),
            ("Giáp Thìn", 2024),
            ("Ất Tỵ", 2025),
        ] {
            assert_eq!(std, year_name(year), "{year}");
        }
    }

    #[test]
    fn day_stem_and_branch() {
        use crate::date::Date;
        // 2000-01-01 was a Mậu Ngọ day
        assert_eq!("Mậu Ngọ", sexagenary(Date::from_civil(2000, 1, 1).sexagenary()));
    }

    #[test]
    fn test_month_name() {
        for (std, month, leap) in [
            ("Tháng Giêng", 1, false),
            ("Tháng Tư", 4, false),
            ("Tháng Tư nhuận", 4, true),
            ("Tháng Mười", 10, false),
            ("Tháng Mười Một", 11, false),
            ("Tháng Chạp", 12, false),
        ] {
            assert_eq!(std, month_name(month, leap));
        }
    }

    #[test]
    fn test_day_name() {
        for (std, day) in [("mồng 1", 1), ("mồng 10", 10), ("15", 15), ("30", 30)] {
            assert_eq!(std, day_name(day));
        }
    }
}
