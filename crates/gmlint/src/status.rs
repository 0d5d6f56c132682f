use std::process::ExitCode;

#[derive(Copy, Clone)]
pub enum ExitStatus {
    /// Checking was successful and there were no linting errors.
    Success,
    /// Checking was successful but there were linting errors.
    Failure,
    /// Checking failed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
