//! Defines the fixed vocabulary IRIs consulted by the quad router and the
//! term encoder.

/// Predicate routed to the `@type` key instead of a general property.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// Datatype elided from literal value objects.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Datatype eligible for native number coercion.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

/// Graph id standing in for the default graph in per-quad wrapper entries.
pub const DEFAULT_GRAPH_ID: &str = "@default";
