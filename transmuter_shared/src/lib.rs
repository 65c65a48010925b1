//! `transmuter_shared`
//!
//! Shared mod libraries: the settings model, the config file locator, the
//! JSON codec, the cached configuration source, and the runtime context the
//! loader constructs at startup.
//!
//! Design goals:
//! - The rest of the mod only ever talks to [`source::ConfigSource`].
//! - Recoverable failures (missing file, corrupt file, unwritable path)
//!   degrade to defaults or a skipped save and never reach application code.
//! - Traits at the locator/codec seams for dependency injection.
//! - Synchronous throughout; the host guarantees single-threaded access.
//! - No `unsafe`.

pub mod config;
pub mod locator;
pub mod parser;
pub mod runtime;
pub mod source;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::config::{ModConfig, Setting};
    pub use crate::locator::{ConfigLocator, FileLocator};
    pub use crate::parser::{ConfigCodec, JsonCodec};
    pub use crate::runtime::{ModRuntime, MOD_NAME};
    pub use crate::source::ConfigSource;
}
