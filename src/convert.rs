//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use apex_window::WindowConfig;

use crate::config::WindowToml;

/// Builds a [`WindowConfig`] from the TOML window table, applying the
/// CLI override when present.
pub fn build_window_config(toml: &WindowToml, override_len: Option<usize>) -> Result<WindowConfig> {
    let len = override_len.unwrap_or(toml.len);
    let config = WindowConfig::new(len);
    if let Err(e) = config.validate() {
        bail!("invalid window configuration: {e}");
    }
    Ok(config)
}
