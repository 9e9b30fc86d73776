use crate::error::DiveError;
use crate::opener::ResourceOpener;
use tracing::{error, info};

/// YouTube playlist with the DIVE tutorial videos
pub const TUTORIAL_URL: &str =
    "https://www.youtube.com/playlist?list=PL5Xd9z-fRL1vKtRlOzIlkhROspSSDeGyG";

/// Usage text reported when the command receives arguments
pub const TUTORIAL_USAGE: &str = "Usage: dive tutorial";

/// Redirects the user to the DIVE tutorial playlist
#[derive(Debug)]
pub struct TutorialCommand;

impl TutorialCommand {
    /// Execute the tutorial command.
    ///
    /// Rejects any positional arguments, then asks `opener` to launch the
    /// playlist URL. A launch failure is logged and swallowed: failing to
    /// reach an external tutorial page is not worth a non-zero exit.
    pub fn execute(args: &[String], opener: &dyn ResourceOpener) -> Result<(), DiveError> {
        validate_no_args(args, TUTORIAL_USAGE)?;
        info!("Redirecting to YouTube...");
        if let Err(err) = opener.open(TUTORIAL_URL) {
            error!("Failed to open the DIVE YouTube playlist: {err}");
        }
        Ok(())
    }
}

/// Reject invocations that supplied positional arguments
fn validate_no_args(args: &[String], usage: &str) -> Result<(), DiveError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(DiveError::Usage(format!(
            "expected no arguments, got {}. {usage}",
            args.len()
        )))
    }
}
