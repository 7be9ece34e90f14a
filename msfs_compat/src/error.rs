//! Errors returned by the safe wrappers.

use crate::sim_connect::HResult;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A SimConnect call returned a failing `HRESULT`.
    #[error(transparent)]
    HResult(#[from] HResult),

    /// A string handed to the simulator contained an interior NUL byte.
    #[error("string contains an interior NUL byte: {0}")]
    Nul(#[from] std::ffi::NulError),

    #[error("unknown simulation variable `{0}`")]
    UnknownVariable(String),

    #[error("unknown units `{0}`")]
    UnknownUnits(String),

    /// The simulator refused to evaluate a calculator expression.
    #[error("calculator code failed: {0}")]
    Calculator(String),

    /// A `fsVars*` / `fsEvents*` function reported an error code.
    #[error("vars api error {0}")]
    Vars(i32),

    #[error("module is already running")]
    ExecutorRunning,

    #[error("module is not running")]
    ExecutorIdle,

    /// The module did not consume the previous event before the next one arrived.
    #[error("event dropped, module has not consumed the previous one")]
    EventDropped,

    /// The module future returned an error.
    #[error("module failed: {0}")]
    Module(String),

    #[error("network request to `{0}` was rejected")]
    Request(String),

    #[error("failed to load font `{0}`")]
    Font(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nul_errors_convert() {
        let err: Error = std::ffi::CString::new("a\0b").unwrap_err().into();
        assert!(matches!(err, Error::Nul(_)));
    }

    #[test]
    fn messages_name_the_subject() {
        assert_eq!(
            Error::UnknownVariable("PLANE ALTITUDE".into()).to_string(),
            "unknown simulation variable `PLANE ALTITUDE`"
        );
        assert_eq!(Error::Vars(3).to_string(), "vars api error 3");
    }
}
