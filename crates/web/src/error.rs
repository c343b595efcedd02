//! Process exit codes for startup failures.
//!
//! Invariants:
//! - Every non-zero code is returned before a listener is bound, except
//!   `ServerError` which covers failures of the running server.

use cobj_config::ConfigError;

/// Structured exit codes for cobj-web.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Clean shutdown.
    #[allow(dead_code)]
    Success = 0,

    /// Unexpected failure (client construction, server error).
    GeneralError = 1,

    /// Required configuration missing or invalid.
    ConfigError = 2,

    /// The listen address could not be bound.
    BindError = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(_: &ConfigError) -> Self {
        ExitCode::ConfigError
    }
}
