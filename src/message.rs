use std::path::PathBuf;

/// User intents collected while rendering a frame and applied afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Navigation
    NavigateUp,
    NavigateHome,
    Refresh,
    SubmitPath,
    ChangeRoot(PathBuf),
    Enter(String),
    EnterSelected,
    Select(usize),
    SelectDelta(i32),

    // File operations
    BeginNewFolder,
    CreateFolder,
    BeginDelete,
    ConfirmDelete,

    // Dialogs
    Cancel,
    DismissError,
    Quit,
}
