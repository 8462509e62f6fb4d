use std::{fs, path::Path, sync::Once};

use crate::errors::InquiryError;

static TRACING_INIT: Once = Once::new();

/// Creates the directory (and parents) when missing.
pub fn ensure_dir(path: &Path) -> Result<(), InquiryError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("inquiry_core=info"));

        fmt().with_env_filter(filter).init();
    });
}
