#[cfg(test)]
mod tests {
    use taskpad::libs::manager::{MutationOutcome, TaskManager};
    use taskpad::libs::task::TaskStatus;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct WorkflowTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for WorkflowTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            WorkflowTestContext { _temp_dir: temp_dir }
        }
    }

    fn applied(outcome: MutationOutcome) -> taskpad::libs::task::Task {
        match outcome {
            MutationOutcome::Applied(task) => task,
            other => panic!("expected Applied, got {:?}", other),
        }
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_complete_task_management_session(_ctx: &mut WorkflowTestContext) {
        // 1. Start with an empty list
        let mut manager = TaskManager::new().unwrap();
        assert!(manager.tasks().is_empty());

        // 2. Add a day's worth of tasks
        applied(manager.add("Write quarterly report", None).unwrap());
        let review = applied(manager.add("Review open PRs", None).unwrap());
        let rent = applied(manager.add("Pay rent", None).unwrap());
        assert_eq!(manager.tasks().len(), 3);

        // 3. Newest first
        let titles: Vec<&str> = manager.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Pay rent", "Review open PRs", "Write quarterly report"]);

        // 4. Narrow the view with a search
        manager.set_search("re");
        assert_eq!(manager.filtered().len(), 3); // report, review, rent
        manager.set_search("report");
        assert_eq!(manager.filtered().len(), 1);
        manager.clear_search();

        // 5. Finish a task, then rename it and send it back to pending
        let done = applied(manager.toggle(review.id).unwrap());
        assert_eq!(done.status, TaskStatus::Complete);

        let renamed = applied(manager.edit(review.id, "Review and merge open PRs", TaskStatus::Pending).unwrap());
        assert_eq!(renamed.title, "Review and merge open PRs");
        assert_eq!(renamed.status, TaskStatus::Pending);

        // 6. Delete the errand after confirming
        manager.request_delete(rent.id);
        let deleted = applied(manager.confirm_delete().unwrap());
        assert_eq!(deleted.title, "Pay rent");
        assert_eq!(manager.tasks().len(), 2);

        // 7. A fresh session sees the same state
        drop(manager);
        let manager = TaskManager::new().unwrap();
        assert_eq!(manager.tasks().len(), 2);

        let review_again = manager.find(review.id).unwrap();
        assert_eq!(review_again.title, "Review and merge open PRs");
        assert_eq!(review_again.status, TaskStatus::Pending);
        assert!(manager.find(rent.id).is_none());
    }
}
