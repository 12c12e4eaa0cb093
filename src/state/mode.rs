#[derive(Debug, PartialEq, Clone, Default)]
pub enum AppMode {
    #[default]
    Normal,
    NewFolder,
    /// Waiting for the user to confirm deleting `name`.
    DeleteConfirm { name: String },
}
