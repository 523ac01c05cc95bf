//! swiftfmt_options: Printer configuration.
//!
//! Options are plain data with serde support so an embedding tool can load
//! them from its own JSON configuration file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options for the type printer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct PrinterOptions {
    /// Which spelling to use for the standard library's wrapper types.
    pub type_syntax: TypeSyntax,
}

impl PrinterOptions {
    /// The options used when none are given.
    pub const DEFAULT: PrinterOptions = PrinterOptions {
        type_syntax: TypeSyntax::Canonical,
    };

    /// Parse options from a JSON object. Missing fields take their default.
    pub fn from_json_str(text: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_string(&self) -> Result<String, OptionsError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Spelling of array, dictionary, optional, metatype, and composition types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeSyntax {
    /// Generic spelling: `Array<Int>`, `Optional<Int>`, `protocol<A, B>`.
    #[default]
    Canonical,
    /// Shorthand spelling: `[Int]`, `Int?`, `A & B`.
    Sugared,
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid printer options: {0}")]
    Json(#[from] serde_json::Error),
}
