#[cfg(test)]
mod tests {
    use taskpad::libs::task::{TaskPatch, TaskStatus};

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn test_status_round_trips_through_text() {
        assert_eq!(TaskStatus::Pending.to_string(), "pending");
        assert_eq!(TaskStatus::Complete.to_string(), "complete");

        assert_eq!("pending".parse::<TaskStatus>().unwrap(), TaskStatus::Pending);
        assert_eq!("complete".parse::<TaskStatus>().unwrap(), TaskStatus::Complete);
    }

    #[test]
    fn test_status_parse_ignores_case() {
        assert_eq!("Pending".parse::<TaskStatus>().unwrap(), TaskStatus::Pending);
        assert_eq!("COMPLETE".parse::<TaskStatus>().unwrap(), TaskStatus::Complete);
    }

    #[test]
    fn test_status_parse_rejects_unknown_values() {
        let err = "done".parse::<TaskStatus>().unwrap_err();
        assert!(err.to_string().contains("invalid task status 'done'"));
    }

    #[test]
    fn test_toggled_flips_both_ways() {
        assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Complete);
        assert_eq!(TaskStatus::Complete.toggled(), TaskStatus::Pending);
    }

    #[test]
    fn test_patch_builder() {
        assert!(TaskPatch::new().is_empty());

        let patch = TaskPatch::new().title("renamed");
        assert!(!patch.is_empty());
        assert_eq!(patch.title.as_deref(), Some("renamed"));
        assert_eq!(patch.status, None);

        let patch = TaskPatch::new().status(TaskStatus::Complete);
        assert_eq!(patch.title, None);
        assert_eq!(patch.status, Some(TaskStatus::Complete));
    }
}
