//! RHI error taxonomy.
//!
//! Every native status code the backend can report collapses into one of
//! these kinds; no other error representation crosses the RHI boundary.

use std::fmt;

/// Errors reported by the rendering hardware interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RhiError {
    /// The operation has not completed yet. Non-fatal, retry later.
    NotReady,
    /// The operation timed out before completing.
    Timeout,
    /// Host or device memory is exhausted.
    OutOfMemory,
    /// The GPU device was lost and must be recreated.
    DeviceRemoved,
    /// A host or driver call failed during platform interaction.
    BadPlatformCall,
    /// A requested feature, extension or format is not supported.
    NotSupported,
    /// A handle table or descriptor pool is exhausted.
    OutOfResource,
    /// An error that does not fit any other kind.
    Unknown,
}

impl RhiError {
    /// Returns true if this error is fatal to the owning device context.
    ///
    /// A fatal error requires full device recreation; all other kinds are
    /// locally recoverable by the caller.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::DeviceRemoved)
    }

    /// Returns true if the failed operation can simply be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NotReady)
    }
}

impl fmt::Display for RhiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "operation not ready"),
            Self::Timeout => write!(f, "operation timed out"),
            Self::OutOfMemory => write!(f, "out of memory"),
            Self::DeviceRemoved => write!(f, "GPU device removed"),
            Self::BadPlatformCall => write!(f, "platform call failed"),
            Self::NotSupported => write!(f, "feature not supported"),
            Self::OutOfResource => write!(f, "out of resource handles"),
            Self::Unknown => write!(f, "unknown error"),
        }
    }
}

impl std::error::Error for RhiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(RhiError::OutOfMemory.to_string(), "out of memory");
        assert_eq!(RhiError::DeviceRemoved.to_string(), "GPU device removed");
    }

    #[test]
    fn test_fatality() {
        assert!(RhiError::DeviceRemoved.is_fatal());
        assert!(!RhiError::OutOfMemory.is_fatal());
        assert!(!RhiError::NotReady.is_fatal());
    }

    #[test]
    fn test_retryable() {
        assert!(RhiError::NotReady.is_retryable());
        assert!(!RhiError::Timeout.is_retryable());
    }
}
