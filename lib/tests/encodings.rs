use quadld::{
    serialize_document, serialize_document_to_writer, Encoding, ObjectEncoder, Quad,
    SerializeError, SerializerOptions, StringEncoder, Term,
};
use serde_json::{json, Value};

fn sample_quads() -> Vec<Result<Quad, std::convert::Infallible>> {
    vec![
        Ok(Quad::triple(
            Term::Iri("http://example.org/s1".into()),
            Term::Iri("http://example.org/p".into()),
            Term::Literal {
                lex: "a".into(),
                dt: None,
                lang: None,
            },
        )),
        Ok(Quad::triple(
            Term::Iri("http://example.org/s2".into()),
            Term::Iri("http://example.org/p".into()),
            Term::Iri("http://example.org/o".into()),
        )),
    ]
}

#[test]
fn known_encoding_names_parse() {
    assert_eq!("object".parse::<Encoding>().expect("object"), Encoding::Object);
    assert_eq!("string".parse::<Encoding>().expect("string"), Encoding::String);
}

#[test]
fn unknown_encoding_is_rejected_before_any_quad() {
    let err = "array".parse::<Encoding>().expect_err("must fail");
    assert!(matches!(err, SerializeError::UnknownEncoding(_)));
    assert_eq!(err.to_string(), "unknown encoding: array");

    let err = SerializerOptions::default()
        .with_encoding_name("csv")
        .expect_err("must fail");
    assert_eq!(err.to_string(), "unknown encoding: csv");
}

#[test]
fn serde_configuration_surface_rejects_unknown_encodings() {
    let parsed: SerializerOptions =
        serde_json::from_value(json!({ "encoding": "string" })).expect("valid");
    assert_eq!(parsed.encoding, Encoding::String);

    let bogus = serde_json::from_value::<SerializerOptions>(json!({ "encoding": "bogus" }));
    assert!(bogus.is_err());
}

#[test]
fn object_encoder_returns_pushed_entries() {
    let mut encoder = ObjectEncoder::new();
    encoder.push(json!({ "@id": "http://example.org/s" }));
    encoder.push(json!({ "@id": "_:b1" }));
    let document = encoder.end();
    assert_eq!(
        Value::Array(document),
        json!([{ "@id": "http://example.org/s" }, { "@id": "_:b1" }])
    );
}

#[test]
fn string_encoder_emits_an_empty_array_for_no_entries() {
    let encoder = StringEncoder::new(Vec::new()).expect("open");
    let written = encoder.end().expect("close");
    assert_eq!(written, b"[]");
}

#[test]
fn string_encoder_separates_entries_with_commas() {
    let mut encoder = StringEncoder::new(Vec::new()).expect("open");
    encoder.push(&json!({ "@id": "a" })).expect("push");
    encoder.push(&json!({ "@id": "b" })).expect("push");
    let written = encoder.end().expect("close");
    assert_eq!(
        String::from_utf8(written).expect("utf8"),
        r#"[{"@id":"a"},{"@id":"b"}]"#
    );
}

#[test]
fn document_string_encoding_round_trips_to_the_object_document() {
    let document = serialize_document(sample_quads(), SerializerOptions::default()).expect("object");

    let options = SerializerOptions {
        encoding: Encoding::String,
        ..Default::default()
    };
    let output =
        serialize_document_to_writer(sample_quads(), Vec::new(), options).expect("string");
    let text = String::from_utf8(output.into_writer().expect("text output")).expect("utf8");
    let parsed: Value = serde_json::from_str(&text).expect("valid json");

    assert_eq!(parsed, Value::Array(document));
}

#[test]
fn object_encoding_through_a_writer_leaves_the_writer_untouched() {
    let output = serialize_document_to_writer(
        sample_quads(),
        Vec::new(),
        SerializerOptions::default(),
    )
    .expect("serialize");
    let document = output.into_document().expect("document output");
    assert_eq!(document.len(), 2);
}
