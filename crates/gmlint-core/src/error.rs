use std::fmt;
use std::path::PathBuf;

/// The file exists but its contents are not valid UTF-8, so the engine
/// cannot lint it.
#[derive(Debug)]
pub struct InvalidInput {
    pub filename: PathBuf,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File is not valid UTF-8: {}", self.filename.display())
    }
}

impl std::error::Error for InvalidInput {}
