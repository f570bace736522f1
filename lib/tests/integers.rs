use quadld::{
    canonical_integer, quad_entry, DocumentSerializer, IntegerHandling, Quad, SerializerOptions,
    Term,
};
use serde_json::{json, Value};

const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

fn integer_literal(lex: &str) -> Term {
    Term::Literal {
        lex: lex.into(),
        dt: Some(XSD_INTEGER.into()),
        lang: None,
    }
}

fn quad_with_object(object: Term) -> Quad {
    Quad::triple(
        Term::Iri("http://example.org/subject".into()),
        Term::Iri("http://example.org/predicate".into()),
        object,
    )
}

fn document_with(quad: Quad, options: SerializerOptions) -> Value {
    let mut serializer = DocumentSerializer::new(options);
    serializer.serialize_quad(&quad).expect("serialize");
    Value::Array(serializer.into_document())
}

#[test]
fn canonical_integer_accepts_exact_base10_forms() {
    assert_eq!(canonical_integer("42"), Some(42));
    assert_eq!(canonical_integer("-7"), Some(-7));
    assert_eq!(canonical_integer("0"), Some(0));
    assert_eq!(canonical_integer("1234567890123456"), Some(1234567890123456));
    assert_eq!(
        canonical_integer("9223372036854775807"),
        Some(i64::MAX)
    );
}

#[test]
fn canonical_integer_rejects_non_canonical_forms() {
    assert_eq!(canonical_integer("text"), None);
    assert_eq!(canonical_integer("3.14159"), None);
    assert_eq!(canonical_integer("042"), None);
    assert_eq!(canonical_integer("+42"), None);
    assert_eq!(canonical_integer(""), None);
    assert_eq!(canonical_integer("-0"), None);
    // Out of i64 range: coercion would change the value, so it is refused.
    assert_eq!(canonical_integer("9223372036854775808"), None);
}

#[test]
fn native_handling_coerces_canonical_integers() {
    let options = SerializerOptions {
        integers: IntegerHandling::Native,
        ..Default::default()
    };
    assert_eq!(
        document_with(quad_with_object(integer_literal("42")), options),
        json!([{
            "@id": "http://example.org/subject",
            "http://example.org/predicate": 42
        }])
    );
}

#[test]
fn native_handling_keeps_the_value_object_for_bad_lexical_forms() {
    let options = SerializerOptions {
        integers: IntegerHandling::Native,
        ..Default::default()
    };
    assert_eq!(
        document_with(quad_with_object(integer_literal("text")), options),
        json!([{
            "@id": "http://example.org/subject",
            "http://example.org/predicate": {
                "@type": XSD_INTEGER,
                "@value": "text"
            }
        }])
    );
}

#[test]
fn lexical_handling_is_the_default() {
    assert_eq!(
        document_with(
            quad_with_object(integer_literal("42")),
            SerializerOptions::default()
        ),
        json!([{
            "@id": "http://example.org/subject",
            "http://example.org/predicate": {
                "@type": XSD_INTEGER,
                "@value": "42"
            }
        }])
    );
}

#[test]
fn native_handling_applies_to_per_quad_entries_too() {
    let options = SerializerOptions {
        integers: IntegerHandling::Native,
        ..Default::default()
    };
    let entry = quad_entry(&quad_with_object(integer_literal("42")), &options).expect("entry");
    assert_eq!(entry["@graph"]["http://example.org/predicate"], json!(42));
}
