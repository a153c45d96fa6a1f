#[cfg(test)]
mod tests {
    use taskpad::libs::manager::{MutationOutcome, TaskManager};
    use taskpad::libs::task::TaskStatus;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ManagerTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ManagerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ManagerTestContext { _temp_dir: temp_dir }
        }
    }

    fn applied(outcome: MutationOutcome) -> taskpad::libs::task::Task {
        match outcome {
            MutationOutcome::Applied(task) => task,
            other => panic!("expected Applied, got {:?}", other),
        }
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_add_trims_and_caches(_ctx: &mut ManagerTestContext) {
        let mut manager = TaskManager::new().unwrap();

        let task = applied(manager.add("  mgr-add buy milk  ", None).unwrap());
        assert_eq!(task.title, "mgr-add buy milk");
        assert_eq!(task.status, TaskStatus::Pending);

        // The cache was refreshed and contains the new row
        let cached = manager.find(task.id).unwrap();
        assert_eq!(cached.title, "mgr-add buy milk");
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_add_rejects_blank_title(_ctx: &mut ManagerTestContext) {
        let mut manager = TaskManager::new().unwrap();

        assert_eq!(manager.add("", None).unwrap(), MutationOutcome::Rejected);
        assert_eq!(manager.add("   ", None).unwrap(), MutationOutcome::Rejected);

        // Nothing was written
        manager.set_search("mgr-reject");
        assert!(manager.filtered().is_empty());
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_search_matches_case_insensitively(_ctx: &mut ManagerTestContext) {
        let mut manager = TaskManager::new().unwrap();

        applied(manager.add("mgr-find Quarterly REPORT", None).unwrap());
        applied(manager.add("mgr-find pay rent", None).unwrap());

        manager.set_search("qUaRtErLy");
        let matches = manager.filtered();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "mgr-find Quarterly REPORT");

        manager.set_search("MGR-FIND");
        assert_eq!(manager.filtered().len(), 2);

        manager.set_search("mgr-find nothing matches this");
        assert!(manager.filtered().is_empty());

        manager.clear_search();
        assert_eq!(manager.search(), "");
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_search_matches_inner_substring(_ctx: &mut ManagerTestContext) {
        let mut manager = TaskManager::new().unwrap();

        applied(manager.add("mgr-sub Buy Milk", None).unwrap());

        // A substring can span a word boundary
        manager.set_search("y mi");
        assert_eq!(manager.filtered().len(), 1);

        manager.set_search("eggs");
        assert!(manager.filtered().is_empty());
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_edit_applies_title_and_status(_ctx: &mut ManagerTestContext) {
        let mut manager = TaskManager::new().unwrap();

        let task = applied(manager.add("mgr-edit draft", None).unwrap());
        let updated = applied(manager.edit(task.id, "mgr-edit final", TaskStatus::Complete).unwrap());

        assert_eq!(updated.title, "mgr-edit final");
        assert_eq!(updated.status, TaskStatus::Complete);

        // The cache reflects the change
        assert_eq!(manager.find(task.id).unwrap().title, "mgr-edit final");
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_edit_rejects_blank_title(_ctx: &mut ManagerTestContext) {
        let mut manager = TaskManager::new().unwrap();

        let task = applied(manager.add("mgr-keep original", None).unwrap());
        let outcome = manager.edit(task.id, "   ", TaskStatus::Complete).unwrap();

        assert_eq!(outcome, MutationOutcome::Rejected);
        assert_eq!(manager.find(task.id).unwrap().title, "mgr-keep original");
        assert_eq!(manager.find(task.id).unwrap().status, TaskStatus::Pending);
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_edit_missing_id_is_not_found(_ctx: &mut ManagerTestContext) {
        let mut manager = TaskManager::new().unwrap();

        let outcome = manager.edit(999_999, "mgr-ghost", TaskStatus::Pending).unwrap();
        assert_eq!(outcome, MutationOutcome::NotFound);
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_toggle_flips_status_both_ways(_ctx: &mut ManagerTestContext) {
        let mut manager = TaskManager::new().unwrap();

        let task = applied(manager.add("mgr-toggle laundry", None).unwrap());

        let toggled = applied(manager.toggle(task.id).unwrap());
        assert_eq!(toggled.status, TaskStatus::Complete);

        let toggled = applied(manager.toggle(task.id).unwrap());
        assert_eq!(toggled.status, TaskStatus::Pending);
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_toggle_unknown_id_is_not_found(_ctx: &mut ManagerTestContext) {
        let mut manager = TaskManager::new().unwrap();

        let outcome = manager.toggle(999_999).unwrap();
        assert_eq!(outcome, MutationOutcome::NotFound);
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_cancel_delete_leaves_task(_ctx: &mut ManagerTestContext) {
        let mut manager = TaskManager::new().unwrap();

        let task = applied(manager.add("mgr-cancel keep me", None).unwrap());

        manager.request_delete(task.id);
        assert_eq!(manager.pending_delete(), Some(task.id));

        manager.cancel_delete();
        assert_eq!(manager.pending_delete(), None);
        assert!(manager.find(task.id).is_some());
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_confirm_delete_removes_task(_ctx: &mut ManagerTestContext) {
        let mut manager = TaskManager::new().unwrap();

        let task = applied(manager.add("mgr-delete old note", None).unwrap());

        manager.request_delete(task.id);
        let deleted = applied(manager.confirm_delete().unwrap());

        assert_eq!(deleted.title, "mgr-delete old note");
        assert_eq!(manager.pending_delete(), None);
        assert!(manager.find(task.id).is_none());
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_confirm_without_request_is_rejected(_ctx: &mut ManagerTestContext) {
        let mut manager = TaskManager::new().unwrap();

        let outcome = manager.confirm_delete().unwrap();
        assert_eq!(outcome, MutationOutcome::Rejected);
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_confirm_delete_missing_row_clears_flag(_ctx: &mut ManagerTestContext) {
        let mut manager = TaskManager::new().unwrap();

        manager.request_delete(999_999);
        let outcome = manager.confirm_delete().unwrap();

        assert_eq!(outcome, MutationOutcome::NotFound);
        assert_eq!(manager.pending_delete(), None);
    }
}
