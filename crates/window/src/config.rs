//! Configuration for window scans.

use crate::error::WindowError;

/// Default window length in samples.
///
/// With one sample per second this corresponds to the 15-second buff
/// duration the scan was built to place.
pub const DEFAULT_WINDOW_LEN: usize = 15;

/// Configuration for a maximum-sum window scan.
///
/// # Example
///
/// ```
/// use apex_window::WindowConfig;
///
/// let config = WindowConfig::new(30);
///
/// assert_eq!(config.len(), 30);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Number of contiguous samples in the window.
    len: usize,
}

impl WindowConfig {
    /// Creates a new configuration with the given window length.
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    /// Returns the window length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the window length is zero.
    pub fn validate(&self) -> Result<(), WindowError> {
        if self.len < 1 {
            return Err(WindowError::InvalidLen { len: self.len });
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_LEN)
    }
}
