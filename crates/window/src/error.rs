//! Error types for the apex-window crate.

/// Error type for all fallible operations in the apex-window crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// Returned when the configured window length is zero.
    #[error("window length must be >= 1, got {len}")]
    InvalidLen {
        /// The invalid window length.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_len() {
        let e = WindowError::InvalidLen { len: 0 };
        assert_eq!(e.to_string(), "window length must be >= 1, got 0");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<WindowError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<WindowError>();
    }

    #[test]
    fn error_is_clone_and_eq() {
        let a = WindowError::InvalidLen { len: 0 };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
