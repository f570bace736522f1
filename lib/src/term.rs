//! RDF term and quad model consumed by the serializers, and the rendering
//! of a single term into its JSON-LD fragment.

use serde_json::{json, Map, Value};

use crate::consts::{XSD_INTEGER, XSD_STRING};
use crate::options::SerializerOptions;

/// RDF term in subject, predicate, or object position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// IRI/URI node.
    Iri(String),
    /// Blank node label (without the `_:` prefix).
    BNode(String),
    /// Literal with optional datatype or language tag.
    Literal {
        lex: String,
        dt: Option<String>,
        lang: Option<String>,
    },
}

/// Graph component of a quad.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GraphName {
    /// The unnamed default graph.
    Default,
    /// Named graph identified by an IRI.
    Iri(String),
    /// Named graph identified by a blank node label.
    BNode(String),
}

/// Subject–predicate–object–graph statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quad {
    /// Subject term (IRI or blank node).
    pub subject: Term,
    /// Predicate term (IRI).
    pub predicate: Term,
    /// Object term.
    pub object: Term,
    /// Graph the statement belongs to.
    pub graph: GraphName,
}

impl Quad {
    pub fn new(subject: Term, predicate: Term, object: Term, graph: GraphName) -> Self {
        Quad {
            subject,
            predicate,
            object,
            graph,
        }
    }

    /// Statement in the default graph.
    pub fn triple(subject: Term, predicate: Term, object: Term) -> Self {
        Quad {
            subject,
            predicate,
            object,
            graph: GraphName::Default,
        }
    }
}

impl Term {
    /// Identifier string used in `@id` position.
    ///
    /// Blank nodes render as `_:label`; IRIs render their value. Literals
    /// never appear in id position, but render their lexical form if asked.
    pub fn id_value(&self) -> String {
        match self {
            Term::Iri(v) => v.clone(),
            Term::BNode(v) => format!("_:{}", v),
            Term::Literal { lex, .. } => lex.clone(),
        }
    }

    /// JSON-LD fragment for this term in object position.
    ///
    /// IRIs and blank nodes render as `{"@id": ...}`. A language-tagged
    /// literal renders as `{"@language", "@value"}`; the language tag wins
    /// if upstream also set a datatype. A datatyped literal renders as
    /// `{"@type", "@value"}` unless the datatype is xsd:string, which (like
    /// a plain literal) renders as the bare lexical string.
    pub fn object_value(&self, options: &SerializerOptions) -> Value {
        match self {
            Term::Iri(_) | Term::BNode(_) => {
                let mut obj = Map::new();
                obj.insert("@id".to_string(), Value::String(self.id_value()));
                Value::Object(obj)
            }
            Term::Literal {
                lex,
                lang: Some(lang),
                ..
            } => {
                let mut obj = Map::new();
                obj.insert("@language".to_string(), json!(lang));
                obj.insert("@value".to_string(), json!(lex));
                Value::Object(obj)
            }
            Term::Literal {
                lex,
                dt: Some(dt),
                lang: None,
            } if dt.as_str() != XSD_STRING => {
                if options.integers.is_native() && dt.as_str() == XSD_INTEGER {
                    if let Some(n) = canonical_integer(lex) {
                        return Value::Number(n.into());
                    }
                }
                let mut obj = Map::new();
                obj.insert("@type".to_string(), json!(dt));
                obj.insert("@value".to_string(), json!(lex));
                Value::Object(obj)
            }
            Term::Literal { lex, .. } => Value::String(lex.clone()),
        }
    }
}

impl GraphName {
    /// Identifier for the `@id` position of a graph wrapper.
    ///
    /// `None` for the default graph; the per-quad serializer substitutes
    /// the `"@default"` sentinel.
    pub fn id_value(&self) -> Option<String> {
        match self {
            GraphName::Default => None,
            GraphName::Iri(v) => Some(v.clone()),
            GraphName::BNode(v) => Some(format!("_:{}", v)),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, GraphName::Default)
    }
}

/// Canonical base-10 integer value of an xsd:integer lexical form.
///
/// Returns `None` for non-integers, non-canonical forms (`042`, `+42`,
/// `3.14`), and values outside the `i64` range, so coercion never changes
/// the value a round-tripping consumer would read back.
pub fn canonical_integer(lex: &str) -> Option<i64> {
    let n: i64 = lex.parse().ok()?;
    if n.to_string() == lex {
        Some(n)
    } else {
        None
    }
}

// ---------------- Oxigraph adapters ----------------

#[cfg(feature = "oxigraph")]
fn term_from_ox_term(t: &oxigraph::model::Term) -> Term {
    use oxigraph::model::Term as OxTerm;
    match t {
        OxTerm::NamedNode(n) => Term::Iri(n.as_str().to_string()),
        OxTerm::BlankNode(b) => Term::BNode(b.as_str().to_string()),
        OxTerm::Literal(l) => {
            let lex = l.value().to_string();
            if let Some(lang) = l.language() {
                Term::Literal {
                    lex,
                    dt: None,
                    lang: Some(lang.to_string()),
                }
            } else {
                Term::Literal {
                    lex,
                    dt: Some(l.datatype().as_str().to_string()),
                    lang: None,
                }
            }
        }
        _ => Term::Iri(t.to_string()),
    }
}

#[cfg(feature = "oxigraph")]
impl Quad {
    /// Convert an oxigraph quad into the serializer's quad model.
    pub fn from_oxigraph(q: &oxigraph::model::Quad) -> crate::errors::Result<Self> {
        use oxigraph::model::{GraphName as OxGraphName, Subject};
        let subject = match &q.subject {
            Subject::NamedNode(n) => Term::Iri(n.as_str().to_string()),
            Subject::BlankNode(b) => Term::BNode(b.as_str().to_string()),
            _ => {
                return Err(crate::errors::SerializeError::MalformedQuad(
                    "unsupported subject kind",
                ))
            }
        };
        let predicate = Term::Iri(q.predicate.as_str().to_string());
        let object = term_from_ox_term(&q.object);
        let graph = match &q.graph_name {
            OxGraphName::DefaultGraph => GraphName::Default,
            OxGraphName::NamedNode(n) => GraphName::Iri(n.as_str().to_string()),
            OxGraphName::BlankNode(b) => GraphName::BNode(b.as_str().to_string()),
        };
        Ok(Quad {
            subject,
            predicate,
            object,
            graph,
        })
    }
}
