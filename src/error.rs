//! Errors surfaced by the host shim.

use std::fmt;

/// Error from host-function registration or dispatch.
///
/// The default builtins themselves are total and never fail; errors arise
/// only at the edges the embedder touches: substituting table entries and
/// running registered callbacks.
#[derive(Debug)]
pub enum HostError {
    /// A table substitution or call named a builtin that does not exist.
    UnknownBuiltin {
        /// The name that failed to resolve.
        name: String,
    },
    /// Registered-callback dispatch was invoked without a leading integer id.
    BadCallbackId,
    /// Registered-callback dispatch named an id with no registry entry.
    UnknownCallback {
        /// The unresolved callback id.
        id: u32,
    },
    /// A registered callback returned an error or panicked.
    Callback {
        /// Description of the failure.
        message: String,
    },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::UnknownBuiltin { name } => {
                write!(f, "unknown builtin: {}", name)
            }
            HostError::BadCallbackId => {
                write!(f, "missing or invalid callback id")
            }
            HostError::UnknownCallback { id } => {
                write!(f, "unknown callback id: {}", id)
            }
            HostError::Callback { message } => {
                write!(f, "callback error: {}", message)
            }
        }
    }
}

impl std::error::Error for HostError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = HostError::UnknownBuiltin {
            name: "eval".to_string(),
        };
        assert_eq!(err.to_string(), "unknown builtin: eval");

        assert_eq!(
            HostError::BadCallbackId.to_string(),
            "missing or invalid callback id"
        );
        assert_eq!(
            HostError::UnknownCallback { id: 9 }.to_string(),
            "unknown callback id: 9"
        );
        assert_eq!(
            HostError::Callback {
                message: "boom".to_string()
            }
            .to_string(),
            "callback error: boom"
        );
    }
}
