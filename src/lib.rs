pub mod error;
pub mod logger;
pub mod opener;
pub mod tutorial;

// Re-export commonly used types
pub use error::DiveError;
pub use opener::{ResourceOpener, SystemOpener};
pub use tutorial::TutorialCommand;
