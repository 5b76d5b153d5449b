use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::shared::config::model::{Settings, load_settings};

/// Process-wide settings, loaded on first use. Logging reads these to set itself up,
/// so a malformed config file is reported on stderr and the built-in defaults apply.
pub static CONFIG: Lazy<Arc<Settings>> = Lazy::new(|| {
    let settings = load_settings().unwrap_or_else(|err| {
        eprintln!("warehouse_dash: ignoring invalid configuration: {err}");
        Settings::default()
    });
    Arc::new(settings)
});
