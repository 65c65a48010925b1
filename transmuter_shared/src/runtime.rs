//! Mod runtime context.
//!
//! The loader-facing boundary. The game runtime calls
//! [`ModRuntime::initialize`] exactly once at startup with its config
//! directory and hands the returned context to whatever mod code needs
//! settings. There is deliberately no global accessor: use-before-init is
//! unrepresentable because the context has to be passed along, and a second
//! initialization is a loud panic since it can only mean a broken loader
//! integration.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use crate::locator::FileLocator;
use crate::parser::JsonCodec;
use crate::source::ConfigSource;

/// Component name; also the stem of the config file (`transmuter.json`).
pub const MOD_NAME: &str = "transmuter";

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Owns the mod's process-wide services. Constructed at most once.
pub struct ModRuntime {
    config: ConfigSource<FileLocator, JsonCodec>,
}

impl ModRuntime {
    /// Builds the runtime context.
    ///
    /// The loader must call this exactly once, passing the game's config
    /// directory.
    ///
    /// # Panics
    /// Panics if the mod has already been initialized in this process.
    pub fn initialize(config_dir: impl Into<PathBuf>) -> Self {
        if INITIALIZED.swap(true, Ordering::SeqCst) {
            panic!("{MOD_NAME} has already been initialized");
        }

        info!("Initializing mod {MOD_NAME}");

        let locator = FileLocator::new(config_dir.into(), MOD_NAME);
        let config = ConfigSource::new(locator, JsonCodec);

        info!("Finished initializing mod {MOD_NAME}");

        Self { config }
    }

    /// The mod's configuration source.
    pub fn config(&mut self) -> &mut ConfigSource<FileLocator, JsonCodec> {
        &mut self.config
    }
}
