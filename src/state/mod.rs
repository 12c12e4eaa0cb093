pub mod mode;
pub mod navigation;
pub mod navigator;

pub use mode::AppMode;
pub use navigator::{EnterOutcome, Navigator};
