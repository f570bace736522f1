//! Shared option types that configure the serializer output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SerializeError;

/// Selects how the finished output is delivered.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Deliver the document as in-memory JSON values once the stream ends.
    #[default]
    Object,
    /// Emit JSON array text to a writer while quads arrive.
    String,
}

impl FromStr for Encoding {
    type Err = SerializeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "object" => Ok(Encoding::Object),
            "string" => Ok(Encoding::String),
            other => Err(SerializeError::UnknownEncoding(other.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Object => write!(f, "object"),
            Encoding::String => write!(f, "string"),
        }
    }
}

/// Controls how a blank node object of rdf:type renders under `@type`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankTypeForm {
    /// Render as a blank node identifier, `_:label`.
    #[default]
    Labeled,
    /// Render the bare label as stored on the term.
    Raw,
}

/// Controls whether xsd:integer literals become native JSON numbers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegerHandling {
    /// Keep the typed value object with the lexical form.
    #[default]
    Lexical,
    /// Render canonical integer lexical forms as bare JSON numbers.
    Native,
}

impl IntegerHandling {
    pub fn is_native(self) -> bool {
        matches!(self, IntegerHandling::Native)
    }
}

impl From<bool> for IntegerHandling {
    fn from(value: bool) -> Self {
        if value {
            IntegerHandling::Native
        } else {
            IntegerHandling::Lexical
        }
    }
}

/// Options accepted when constructing a serializer.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerOptions {
    /// Output delivery strategy.
    pub encoding: Encoding,
    /// `@type` rendering for blank node objects.
    pub blank_types: BlankTypeForm,
    /// Native number coercion for xsd:integer literals.
    pub integers: IntegerHandling,
}

impl SerializerOptions {
    /// Set the encoding from its configuration-surface name.
    ///
    /// Fails with [`SerializeError::UnknownEncoding`] for any name other
    /// than `"object"` or `"string"`, before any quad is consumed.
    pub fn with_encoding_name(mut self, name: &str) -> Result<Self, SerializeError> {
        self.encoding = name.parse()?;
        Ok(self)
    }
}
