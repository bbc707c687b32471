use chrono::{Datelike, NaiveDate};

// ============================================================================
// Fixed id-ID Locale
// ============================================================================
//
// Every user-facing label and date rendering lives here. The tracker only
// ever speaks Indonesian, so these are plain constants rather than a
// message catalogue.
//
// ============================================================================

/// Tracking reference recorded when goods are handed straight to the user
pub const HANDED_TO_USER: &str = "Serah ke User";

/// Rendering for absent optional values
pub const PLACEHOLDER: &str = "-";

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_CONFIRMED: &str = "Dikonfirmasi";
pub const STATUS_REJECTED: &str = "Ditolak";
pub const FILTER_ALL: &str = "Semua";

const MONTHS_LONG: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

// Monday first, matching chrono's num_days_from_monday
const WEEKDAYS: [&str; 7] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];

/// Table rendering, e.g. `15 Jan 2025`
pub fn format_date_short(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_SHORT[date.month0() as usize],
        date.year()
    )
}

/// Receipt rendering with weekday, e.g. `Rabu, 15 Januari 2025`
pub fn format_date_long(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        WEEKDAYS[date.weekday().num_days_from_monday() as usize],
        date.day(),
        MONTHS_LONG[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_short_format() {
        assert_eq!(format_date_short(date(2025, 1, 15)), "15 Jan 2025");
        assert_eq!(format_date_short(date(2025, 8, 3)), "3 Agu 2025");
        assert_eq!(format_date_short(date(2024, 12, 31)), "31 Des 2024");
    }

    #[test]
    fn test_long_format_includes_weekday() {
        assert_eq!(format_date_long(date(2025, 1, 15)), "Rabu, 15 Januari 2025");
        assert_eq!(format_date_long(date(2025, 1, 16)), "Kamis, 16 Januari 2025");
        assert_eq!(format_date_long(date(2025, 1, 19)), "Minggu, 19 Januari 2025");
    }
}
