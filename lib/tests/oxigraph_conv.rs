#![cfg(feature = "oxigraph")]
use oxigraph::model::{
    BlankNode, GraphName as OxGraphName, Literal, NamedNode, Quad as OxQuad,
};
use quadld::{GraphName, Quad, SerializerOptions, Term};
use serde_json::json;

#[test]
fn simple_literal_maps_to_xsd_string_and_renders_bare() {
    let oq = OxQuad::new(
        NamedNode::new("http://ex/s").unwrap(),
        NamedNode::new("http://ex/p").unwrap(),
        Literal::new_simple_literal("object"),
        NamedNode::new("http://ex/g").unwrap(),
    );
    let quad = Quad::from_oxigraph(&oq).expect("convert");
    assert_eq!(quad.subject, Term::Iri("http://ex/s".into()));
    assert_eq!(quad.graph, GraphName::Iri("http://ex/g".into()));
    match &quad.object {
        Term::Literal { lex, dt, lang } => {
            assert_eq!(lex, "object");
            assert_eq!(dt.as_deref(), Some("http://www.w3.org/2001/XMLSchema#string"));
            assert!(lang.is_none());
        }
        other => panic!("expected literal, got {:?}", other),
    }
    // The xsd:string datatype oxigraph attaches to plain literals is elided.
    assert_eq!(
        quad.object.object_value(&SerializerOptions::default()),
        json!("object")
    );
}

#[test]
fn language_literal_and_blank_subject_convert() {
    let oq = OxQuad::new(
        BlankNode::new("b1").unwrap(),
        NamedNode::new("http://ex/p").unwrap(),
        Literal::new_language_tagged_literal("hallo", "de").unwrap(),
        OxGraphName::DefaultGraph,
    );
    let quad = Quad::from_oxigraph(&oq).expect("convert");
    assert_eq!(quad.subject, Term::BNode("b1".into()));
    assert!(quad.graph.is_default());
    assert_eq!(
        quad.object,
        Term::Literal {
            lex: "hallo".into(),
            dt: None,
            lang: Some("de".into()),
        }
    );
    assert_eq!(
        quad.object.object_value(&SerializerOptions::default()),
        json!({ "@language": "de", "@value": "hallo" })
    );
}

#[test]
fn typed_literal_keeps_its_datatype() {
    let oq = OxQuad::new(
        NamedNode::new("http://ex/s").unwrap(),
        NamedNode::new("http://ex/p").unwrap(),
        Literal::new_typed_literal(
            "42",
            NamedNode::new("http://www.w3.org/2001/XMLSchema#integer").unwrap(),
        ),
        OxGraphName::DefaultGraph,
    );
    let quad = Quad::from_oxigraph(&oq).expect("convert");
    assert_eq!(
        quad.object.object_value(&SerializerOptions::default()),
        json!({
            "@type": "http://www.w3.org/2001/XMLSchema#integer",
            "@value": "42"
        })
    );
}
