//! Output encoders: a buffered in-memory document, or incremental JSON
//! array text with correct comma/bracket placement.

use std::io::Write;

use serde_json::Value;

use crate::errors::Result;

/// Buffers finished entries and returns them as one in-memory document.
#[derive(Debug, Default)]
pub struct ObjectEncoder {
    entries: Vec<Value>,
}

impl ObjectEncoder {
    pub fn new() -> Self {
        ObjectEncoder {
            entries: Vec::new(),
        }
    }

    /// Append one finished top-level entry.
    pub fn push(&mut self, entry: Value) {
        self.entries.push(entry);
    }

    /// Consume the encoder and return the document.
    pub fn end(self) -> Vec<Value> {
        self.entries
    }
}

/// Emits a JSON array incrementally: `[` at construction, a `,` before
/// every entry except the first, `]` on end. The text written so far plus
/// a closing bracket is always valid JSON, so a consumer can start reading
/// before the quad stream finishes.
#[derive(Debug)]
pub struct StringEncoder<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> StringEncoder<W> {
    /// Create the encoder and write the opening bracket immediately.
    pub fn new(mut writer: W) -> Result<Self> {
        writer.write_all(b"[")?;
        Ok(StringEncoder {
            writer,
            first: true,
        })
    }

    /// Write one finished top-level entry.
    pub fn push(&mut self, entry: &Value) -> Result<()> {
        if self.first {
            self.first = false;
        } else {
            self.writer.write_all(b",")?;
        }
        serde_json::to_writer(&mut self.writer, entry)?;
        Ok(())
    }

    /// Write the closing bracket and hand the writer back.
    pub fn end(mut self) -> Result<W> {
        self.writer.write_all(b"]")?;
        Ok(self.writer)
    }
}

/// Encoding dispatch owned by a serializer: object channel or text channel.
#[derive(Debug)]
pub(crate) enum Sink<W: Write> {
    Object(ObjectEncoder),
    Text(StringEncoder<W>),
}

impl<W: Write> Sink<W> {
    pub(crate) fn push(&mut self, entry: Value) -> Result<()> {
        match self {
            Sink::Object(enc) => {
                enc.push(entry);
                Ok(())
            }
            Sink::Text(enc) => enc.push(&entry),
        }
    }

    pub(crate) fn end(self) -> Result<Output<W>> {
        match self {
            Sink::Object(enc) => Ok(Output::Document(enc.end())),
            Sink::Text(enc) => Ok(Output::Text(enc.end()?)),
        }
    }
}

/// Finished output of a serializer run.
#[derive(Debug)]
pub enum Output<W> {
    /// Object encoding: the document as in-memory JSON values.
    Document(Vec<Value>),
    /// String encoding: the writer the JSON array text was written to.
    Text(W),
}

impl<W> Output<W> {
    /// The in-memory document, if this run used the object encoding.
    pub fn into_document(self) -> Option<Vec<Value>> {
        match self {
            Output::Document(doc) => Some(doc),
            Output::Text(_) => None,
        }
    }

    /// The output writer, if this run used the string encoding.
    pub fn into_writer(self) -> Option<W> {
        match self {
            Output::Document(_) => None,
            Output::Text(w) => Some(w),
        }
    }
}
