//! Quad-to-JSON-LD serializer engines.
//!
//! Two engines with observably different output shapes are provided; they
//! are never mixed within one run:
//!
//! - [`DocumentSerializer`] aggregates all quads sharing a subject into one
//!   node and deduplicates graphs, producing a minimal document when the
//!   stream ends. Default-graph subjects appear bare at the document root;
//!   each named graph becomes a single `{"@id", "@graph"}` wrapper holding
//!   its subject nodes.
//! - [`QuadSerializer`] emits one wrapper entry per quad as soon as the
//!   quad arrives, keyed by the graph id or the `"@default"` sentinel.
//!   Nothing is merged, so output can stream with bounded state.
//!
//! Both engines honor the configured [`Encoding`](crate::options::Encoding):
//! the object encoding buffers JSON values, the string encoding writes JSON
//! array text through the caller's writer.

use std::collections::HashMap;
use std::io::Write;

use log::debug;
use serde_json::{map::Entry, Map, Value};

use crate::consts::{DEFAULT_GRAPH_ID, RDF_TYPE};
use crate::encode::{ObjectEncoder, Output, Sink, StringEncoder};
use crate::errors::{Result, SerializeError};
use crate::options::{BlankTypeForm, Encoding, SerializerOptions};
use crate::term::{Quad, Term};

/// Routing decision for a predicate: the rdf:type shorthand or a general
/// property key.
enum PredicateSlot<'a> {
    Type,
    Property(&'a str),
}

fn classify_predicate(predicate: &Term) -> Result<PredicateSlot<'_>> {
    match predicate {
        Term::Iri(iri) if iri == RDF_TYPE => Ok(PredicateSlot::Type),
        Term::Iri(iri) => Ok(PredicateSlot::Property(iri)),
        _ => Err(SerializeError::MalformedQuad("predicate must be an IRI")),
    }
}

fn subject_id(subject: &Term) -> Result<String> {
    match subject {
        Term::Iri(_) | Term::BNode(_) => Ok(subject.id_value()),
        Term::Literal { .. } => Err(SerializeError::MalformedQuad(
            "subject must be an IRI or blank node",
        )),
    }
}

fn type_value(object: &Term, form: BlankTypeForm) -> String {
    match (object, form) {
        (Term::BNode(label), BlankTypeForm::Raw) => label.clone(),
        _ => object.id_value(),
    }
}

/// Render the wrapper entry for one quad, as emitted by [`QuadSerializer`].
pub fn quad_entry(quad: &Quad, options: &SerializerOptions) -> Result<Value> {
    let mut node = Map::new();
    node.insert("@id".to_string(), Value::String(subject_id(&quad.subject)?));
    match classify_predicate(&quad.predicate)? {
        PredicateSlot::Type => {
            node.insert(
                "@type".to_string(),
                Value::String(type_value(&quad.object, options.blank_types)),
            );
        }
        PredicateSlot::Property(property) => {
            node.insert(property.to_string(), quad.object.object_value(options));
        }
    }
    let graph_id = quad
        .graph
        .id_value()
        .unwrap_or_else(|| DEFAULT_GRAPH_ID.to_string());
    let mut entry = Map::new();
    entry.insert("@id".to_string(), Value::String(graph_id));
    entry.insert("@graph".to_string(), Value::Object(node));
    Ok(Value::Object(entry))
}

// ---------------- Grouped document serializer ----------------

/// One grouping scope: the default graph or a single named graph.
#[derive(Debug)]
struct Scope {
    graph: Option<String>,
    nodes: Vec<Map<String, Value>>,
    subjects: HashMap<String, usize>,
}

impl Scope {
    fn new(graph: Option<String>) -> Self {
        Scope {
            graph,
            nodes: Vec::new(),
            subjects: HashMap::new(),
        }
    }

    /// Stable index of the node for `id`, appending a fresh `{"@id"}` node
    /// on first sight.
    fn subject_index(&mut self, id: &str) -> usize {
        if let Some(&i) = self.subjects.get(id) {
            return i;
        }
        let mut node = Map::new();
        node.insert("@id".to_string(), Value::String(id.to_string()));
        self.nodes.push(node);
        let i = self.nodes.len() - 1;
        self.subjects.insert(id.to_string(), i);
        i
    }
}

/// Grouped serializer: one aggregated node per (graph, subject) pair.
///
/// All state lives in this value; dropping it discards any partial
/// document, and nothing is written to the output before
/// [`DocumentSerializer::finish`]. Entry order follows first appearance in
/// the input, and values of a repeated predicate keep quad arrival order.
#[derive(Debug)]
pub struct DocumentSerializer<W: Write> {
    options: SerializerOptions,
    writer: W,
    scopes: Vec<Scope>,
    scope_index: HashMap<Option<String>, usize>,
}

impl DocumentSerializer<std::io::Sink> {
    /// Serializer that only assembles an in-memory document; the configured
    /// encoding is ignored in favor of [`DocumentSerializer::into_document`].
    pub fn new(options: SerializerOptions) -> Self {
        Self::for_writer(std::io::sink(), options)
    }
}

impl<W: Write> DocumentSerializer<W> {
    /// Serializer that delivers through `writer` when the options select
    /// the string encoding. Nothing is written until `finish`.
    pub fn for_writer(writer: W, options: SerializerOptions) -> Self {
        DocumentSerializer {
            options,
            writer,
            scopes: Vec::new(),
            scope_index: HashMap::new(),
        }
    }

    fn node_mut(&mut self, graph: Option<String>, id: &str) -> &mut Map<String, Value> {
        let scope_idx = match self.scope_index.get(&graph) {
            Some(&i) => i,
            None => {
                self.scopes.push(Scope::new(graph.clone()));
                let i = self.scopes.len() - 1;
                self.scope_index.insert(graph, i);
                i
            }
        };
        let scope = &mut self.scopes[scope_idx];
        let node_idx = scope.subject_index(id);
        &mut scope.nodes[node_idx]
    }

    /// Fold one quad into the document under construction.
    pub fn serialize_quad(&mut self, quad: &Quad) -> Result<()> {
        let id = subject_id(&quad.subject)?;
        let graph = quad.graph.id_value();
        match classify_predicate(&quad.predicate)? {
            PredicateSlot::Type => {
                let ty = type_value(&quad.object, self.options.blank_types);
                let node = self.node_mut(graph, &id);
                match node.entry("@type") {
                    Entry::Vacant(slot) => {
                        slot.insert(Value::Array(vec![Value::String(ty)]));
                    }
                    Entry::Occupied(mut slot) => {
                        if let Value::Array(types) = slot.get_mut() {
                            types.push(Value::String(ty));
                        }
                    }
                }
            }
            PredicateSlot::Property(property) => {
                let property = property.to_string();
                let value = quad.object.object_value(&self.options);
                let node = self.node_mut(graph, &id);
                match node.entry(property) {
                    Entry::Vacant(slot) => {
                        slot.insert(value);
                    }
                    Entry::Occupied(mut slot) => {
                        let existing = slot.get_mut();
                        if let Value::Array(values) = existing {
                            values.push(value);
                        } else {
                            let first = existing.take();
                            *existing = Value::Array(vec![first, value]);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn assemble(scopes: Vec<Scope>) -> Vec<Value> {
        let mut entries = Vec::new();
        for scope in scopes {
            match scope.graph {
                None => {
                    entries.extend(scope.nodes.into_iter().map(Value::Object));
                }
                Some(graph) => {
                    let nodes: Vec<Value> =
                        scope.nodes.into_iter().map(Value::Object).collect();
                    let mut wrapper = Map::new();
                    wrapper.insert("@id".to_string(), Value::String(graph));
                    wrapper.insert("@graph".to_string(), Value::Array(nodes));
                    entries.push(Value::Object(wrapper));
                }
            }
        }
        entries
    }

    /// Consume the serializer and return the assembled document directly,
    /// bypassing the configured encoding.
    pub fn into_document(self) -> Vec<Value> {
        let entries = Self::assemble(self.scopes);
        debug!("assembled document with {} top-level entries", entries.len());
        entries
    }

    /// Deliver the assembled document through the configured encoding.
    pub fn finish(self) -> Result<Output<W>> {
        let entries = Self::assemble(self.scopes);
        debug!("assembled document with {} top-level entries", entries.len());
        let mut sink = match self.options.encoding {
            Encoding::Object => Sink::Object(ObjectEncoder::new()),
            Encoding::String => Sink::Text(StringEncoder::new(self.writer)?),
        };
        for entry in entries {
            sink.push(entry)?;
        }
        sink.end()
    }
}

// ---------------- Per-quad streaming serializer ----------------

/// Streaming serializer: one top-level entry per quad, emitted as soon as
/// the quad arrives. Repeated subjects and graphs are not merged.
///
/// Under the string encoding the opening bracket is written at
/// construction, each entry as its quad is serialized, so downstream can
/// consume a growing JSON array at the writer's pace.
#[derive(Debug)]
pub struct QuadSerializer<W: Write> {
    options: SerializerOptions,
    sink: Sink<W>,
    count: u64,
}

impl<W: Write> QuadSerializer<W> {
    /// Serializer delivering through `writer` per the configured encoding.
    ///
    /// The string encoding writes the opening bracket here, before any
    /// quad is read.
    pub fn for_writer(writer: W, options: SerializerOptions) -> Result<Self> {
        let sink = match options.encoding {
            Encoding::Object => Sink::Object(ObjectEncoder::new()),
            Encoding::String => Sink::Text(StringEncoder::new(writer)?),
        };
        Ok(QuadSerializer {
            options,
            sink,
            count: 0,
        })
    }

    /// Emit the wrapper entry for one quad.
    pub fn serialize_quad(&mut self, quad: &Quad) -> Result<()> {
        let entry = quad_entry(quad, &self.options)?;
        self.count += 1;
        self.sink.push(entry)
    }

    /// Terminate the output.
    pub fn finish(self) -> Result<Output<W>> {
        debug!("serialized {} per-quad entries", self.count);
        self.sink.end()
    }
}

// ---------------- One-shot drivers ----------------

/// Serialize a fallible quad stream into one grouped in-memory document.
///
/// The first upstream error aborts serialization and is returned as
/// [`SerializeError::Source`]; partial state is discarded and no output is
/// produced.
pub fn serialize_document<I, E>(quads: I, options: SerializerOptions) -> Result<Vec<Value>>
where
    I: IntoIterator<Item = std::result::Result<Quad, E>>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let mut serializer = DocumentSerializer::new(options);
    for quad in quads {
        let quad = quad.map_err(|e| SerializeError::Source(e.into()))?;
        serializer.serialize_quad(&quad)?;
    }
    Ok(serializer.into_document())
}

/// Serialize a fallible quad stream into in-memory per-quad entries.
pub fn serialize_quads<I, E>(quads: I, options: SerializerOptions) -> Result<Vec<Value>>
where
    I: IntoIterator<Item = std::result::Result<Quad, E>>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let mut entries = Vec::new();
    for quad in quads {
        let quad = quad.map_err(|e| SerializeError::Source(e.into()))?;
        entries.push(quad_entry(&quad, &options)?);
    }
    Ok(entries)
}

/// Serialize a fallible quad stream through a grouped serializer writing
/// to `writer`, honoring the configured encoding.
pub fn serialize_document_to_writer<I, E, W>(
    quads: I,
    writer: W,
    options: SerializerOptions,
) -> Result<Output<W>>
where
    I: IntoIterator<Item = std::result::Result<Quad, E>>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
    W: Write,
{
    let mut serializer = DocumentSerializer::for_writer(writer, options);
    for quad in quads {
        let quad = quad.map_err(|e| SerializeError::Source(e.into()))?;
        serializer.serialize_quad(&quad)?;
    }
    serializer.finish()
}

/// Serialize a fallible quad stream through a per-quad serializer writing
/// to `writer`, honoring the configured encoding.
pub fn serialize_quads_to_writer<I, E, W>(
    quads: I,
    writer: W,
    options: SerializerOptions,
) -> Result<Output<W>>
where
    I: IntoIterator<Item = std::result::Result<Quad, E>>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
    W: Write,
{
    let mut serializer = QuadSerializer::for_writer(writer, options)?;
    for quad in quads {
        let quad = quad.map_err(|e| SerializeError::Source(e.into()))?;
        serializer.serialize_quad(&quad)?;
    }
    serializer.finish()
}
