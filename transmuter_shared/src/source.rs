//! Cached configuration source.
//!
//! The one component the rest of the mod talks to. Wires a locator and a
//! codec together, caches the last loaded settings, and absorbs every
//! recoverable failure: the caller always gets *some* usable [`ModConfig`]
//! and never sees an I/O or parse error.

use tracing::{info, warn};

use crate::config::ModConfig;
use crate::locator::ConfigLocator;
use crate::parser::ConfigCodec;

/// Cached `get`/`save` orchestrator over a locator and a codec.
///
/// Once populated (from a successful load or a fallback), the cache stays
/// populated for the lifetime of the source; there is no path back to the
/// unloaded state.
#[derive(Debug)]
pub struct ConfigSource<L, C> {
    locator: L,
    codec: C,
    cache: Option<ModConfig>,
}

impl<L: ConfigLocator, C: ConfigCodec> ConfigSource<L, C> {
    pub fn new(locator: L, codec: C) -> Self {
        Self {
            locator,
            codec,
            cache: None,
        }
    }

    /// Returns the current settings, loading them from disk on first call.
    ///
    /// A missing or corrupt file falls back to defaults without surfacing an
    /// error. Repeated calls hit the cache and perform no I/O. Mutations
    /// through the returned reference stick until the source is dropped.
    pub fn get(&mut self) -> &mut ModConfig {
        if self.cache.is_none() {
            self.cache = Some(self.load_or_default());
        }
        self.cache.as_mut().expect("cache populated above")
    }

    /// Writes the cached settings back to disk, best effort.
    ///
    /// Never touches the cache. An unopenable path, a failed write, or a
    /// failed flush each log a warning and leave things as they were. Called
    /// before any [`get`](Self::get), there is nothing to write and the call
    /// is a no-op.
    pub fn save(&self) {
        let Some(config) = self.cache.as_ref() else {
            warn!("save() called before any settings were loaded, skipping");
            return;
        };

        let mut writer = match self.locator.open_writer() {
            Ok(writer) => writer,
            Err(err) => {
                warn!(%err, "config file not writable, skipping save");
                return;
            }
        };

        if let Err(err) = self.codec.unparse(writer.as_mut(), config) {
            warn!(%err, "failed to write config file");
            return;
        }

        // Close-time errors are non-fatal: the content has been written.
        if let Err(err) = writer.flush() {
            warn!(%err, "error closing config file");
        }
    }

    fn load_or_default(&self) -> ModConfig {
        let mut reader = match self.locator.open_reader() {
            Ok(reader) => reader,
            Err(err) => {
                info!(%err, "no config file, starting from defaults");
                return ModConfig::default();
            }
        };

        match self.codec.parse(reader.as_mut()) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "config file is corrupt, starting from defaults");
                ModConfig::default()
            }
        }
    }
}
