#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use taskpad::libs::formatter::{format_created, format_status};
    use taskpad::libs::task::TaskStatus;

    fn dt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_format_created_typical() {
        assert_eq!(format_created(&dt(2025, 1, 15, 14, 30)), "Jan 15, 2025 14:30");
    }

    #[test]
    fn test_format_created_zero_pads_day_and_time() {
        assert_eq!(format_created(&dt(2025, 3, 5, 9, 5)), "Mar 05, 2025 09:05");
    }

    #[test]
    fn test_format_created_midnight() {
        assert_eq!(format_created(&dt(2025, 7, 1, 0, 0)), "Jul 01, 2025 00:00");
    }

    #[test]
    fn test_format_created_end_of_year() {
        assert_eq!(format_created(&dt(2024, 12, 31, 23, 59)), "Dec 31, 2024 23:59");
    }

    #[test]
    fn test_format_created_drops_seconds() {
        let with_seconds = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap().and_hms_opt(8, 15, 42).unwrap();
        assert_eq!(format_created(&with_seconds), "Jun 10, 2025 08:15");
    }

    #[test]
    fn test_format_status_marks_completed_tasks() {
        assert_eq!(format_status(&TaskStatus::Pending), "pending");
        assert_eq!(format_status(&TaskStatus::Complete), "✓ complete");
    }
}
