//! JSON codec for the settings model.
//!
//! Owns the canonical key set and the document layout. Decoding is lenient
//! where the input allows it: absent keys keep their defaults, unrecognized
//! keys are ignored, out-of-range numbers are clamped. It fails only when
//! the document itself is not a well-formed settings object. Encoding always
//! writes every key in declaration order, pretty-printed with 2-space
//! indentation, so repeated saves of unchanged settings are byte-identical.

use std::io::{self, Read, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ModConfig;

/// The document is not a well-formed settings object.
#[derive(Debug, Error)]
#[error("malformed config document: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// Converts between raw config documents and [`ModConfig`] values.
pub trait ConfigCodec {
    /// Decodes a settings object from `reader`.
    fn parse(&self, reader: &mut dyn Read) -> Result<ModConfig, ParseError>;

    /// Encodes the current values of `config` into `writer`.
    fn unparse(&self, writer: &mut dyn Write, config: &ModConfig) -> io::Result<()>;
}

/// On-disk shape. Field order here is the key order in the file; `Option`
/// distinguishes an absent key from a present value on the way in.
#[derive(Debug, Serialize, Deserialize)]
struct ConfigDocument {
    enabled: Option<bool>,
    #[serde(rename = "conversion-rate")]
    conversion_rate: Option<f64>,
}

/// The JSON codec used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl ConfigCodec for JsonCodec {
    fn parse(&self, reader: &mut dyn Read) -> Result<ModConfig, ParseError> {
        let doc: ConfigDocument = serde_json::from_reader(reader)?;

        let mut config = ModConfig::default();
        if let Some(enabled) = doc.enabled {
            config.enabled.set(enabled);
        }
        if let Some(rate) = doc.conversion_rate {
            // Out-of-range values are clamped by the setting itself.
            config.conversion_rate.set(rate);
        }
        Ok(config)
    }

    fn unparse(&self, writer: &mut dyn Write, config: &ModConfig) -> io::Result<()> {
        let doc = ConfigDocument {
            enabled: Some(config.enabled.get()),
            conversion_rate: Some(config.conversion_rate.get()),
        };
        serde_json::to_writer_pretty(writer, &doc).map_err(io::Error::from)
    }
}
