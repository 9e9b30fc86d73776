use crate::error::{DiveError, ErrorContext};
use std::fmt::Debug;

/// Trait for asking the operating system to open a resource
///
/// Given a URL, an implementation asks the OS to launch the registered
/// default handler for it (typically the web browser). Implementations
/// only report whether issuing the request failed; there is no way to
/// confirm the handler actually displayed anything.
pub trait ResourceOpener: Debug {
    /// Request that the OS open `url` with its default handler
    fn open(&self, url: &str) -> Result<(), DiveError>;
}

/// Production opener backed by the platform launcher (`xdg-open`,
/// `open`, `start`, ...)
#[derive(Debug, Default)]
pub struct SystemOpener;

impl ResourceOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), DiveError> {
        open::that(url).dive_launch_err(format!("Failed to open {url}"))
    }
}
