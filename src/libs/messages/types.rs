#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),               // title
    TaskUpdated(String),               // title
    TaskDeleted(String),               // title
    TaskStatusChanged(String, String), // title, new status
    TaskNotFoundWithId(i64),
    TaskTitleEmpty,
    TasksHeader,
    NoTasksFound,
    NoMatchingTasks(String), // search term

    // === PROMPT MESSAGES ===
    PromptTaskTitle,
    PromptTaskStatus,
    PromptSearchTerm,
    SelectAction,
    SelectTaskToEdit,
    SelectTaskToToggle,
    SelectTaskToDelete,
    ConfirmDeleteTask(String), // title
    OperationCancelled,
    SearchApplied(String), // search term
    SearchCleared,

    // === STORAGE MESSAGES ===
    StorageFault(String),      // error text
    DatabasePathEmpty(String), // setting name

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleDatabase,
    PromptSelectModules,
    PromptDatabasePath,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),
    MigrationFailed(u32, String), // version, error text
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
    NothingToRollback,
    RollingBack(u32, u32), // from, to
    RollbackCompleted(u32),
}
