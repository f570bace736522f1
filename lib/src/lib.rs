//! quadld — Serialize RDF quad streams into JSON-LD expanded documents.
//!
//! Quads are fed one at a time; the engine tracks enough state to place
//! each statement in the output tree without seeing the whole stream in
//! advance. Two engines cover the two useful output shapes: a grouped,
//! deduplicated document, and a per-quad stream of graph wrapper entries.
//!
//! Quick start: build a grouped document
//!
//! ```
//! use quadld::{DocumentSerializer, Quad, SerializerOptions, Term};
//!
//! let mut serializer = DocumentSerializer::new(SerializerOptions::default());
//! serializer
//!     .serialize_quad(&Quad::triple(
//!         Term::Iri("http://example.org/subject".into()),
//!         Term::Iri("http://example.org/predicate".into()),
//!         Term::Literal { lex: "object".into(), dt: None, lang: None },
//!     ))
//!     .expect("serialize");
//! let document = serializer.into_document();
//! assert_eq!(document.len(), 1);
//! ```
//!
//! Stream incremental JSON text, one entry per quad
//!
//! ```
//! use quadld::{Encoding, Quad, QuadSerializer, SerializerOptions, Term};
//!
//! let options = SerializerOptions {
//!     encoding: Encoding::String,
//!     ..Default::default()
//! };
//! let mut serializer = QuadSerializer::for_writer(Vec::new(), options).expect("attach");
//! serializer
//!     .serialize_quad(&Quad::triple(
//!         Term::Iri("http://example.org/subject".into()),
//!         Term::Iri("http://example.org/predicate".into()),
//!         Term::Literal { lex: "object".into(), dt: None, lang: None },
//!     ))
//!     .expect("serialize");
//! let output = serializer.finish().expect("finish");
//! let text = String::from_utf8(output.into_writer().expect("text output")).expect("utf8");
//! assert!(text.starts_with('[') && text.ends_with(']'));
//! ```

pub mod consts;
pub mod encode;
pub mod errors;
pub mod options;
pub mod serializer;
pub mod term;

pub use encode::{ObjectEncoder, Output, StringEncoder};
pub use errors::SerializeError;
pub use options::{BlankTypeForm, Encoding, IntegerHandling, SerializerOptions};
pub use serializer::{
    quad_entry, serialize_document, serialize_document_to_writer, serialize_quads,
    serialize_quads_to_writer, DocumentSerializer, QuadSerializer,
};
pub use term::{canonical_integer, GraphName, Quad, Term};

/// Crate-level result type using the serializer error.
pub type Result<T> = std::result::Result<T, SerializeError>;
