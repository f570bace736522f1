use std::fmt;

/// Errors that can arise while serializing a quad stream to JSON-LD.
#[derive(Debug)]
pub enum SerializeError {
    /// The configured output encoding is not recognized.
    UnknownEncoding(String),
    /// The upstream quad producer reported a failure.
    Source(Box<dyn std::error::Error + Send + Sync>),
    /// A quad violated the term-kind contract (e.g. a literal predicate).
    MalformedQuad(&'static str),
    /// Underlying I/O error from the output writer.
    Io(std::io::Error),
    /// JSON text rendering failed.
    Json(serde_json::Error),
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializeError::UnknownEncoding(e) => write!(f, "unknown encoding: {}", e),
            SerializeError::Source(e) => write!(f, "{}", e),
            SerializeError::MalformedQuad(m) => write!(f, "{}", m),
            SerializeError::Io(e) => write!(f, "{}", e),
            SerializeError::Json(e) => write!(f, "{}", e),
        }
    }
}
impl std::error::Error for SerializeError {}
impl From<std::io::Error> for SerializeError {
    fn from(e: std::io::Error) -> Self {
        SerializeError::Io(e)
    }
}
impl From<serde_json::Error> for SerializeError {
    fn from(e: serde_json::Error) -> Self {
        SerializeError::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, SerializeError>;
