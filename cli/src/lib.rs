use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use oxigraph::io::{RdfFormat, RdfParser};
use quadld::{
    serialize_document, serialize_document_to_writer, serialize_quads, serialize_quads_to_writer,
    Encoding, Output, Quad, SerializerOptions,
};
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFmt {
    Nquads,
    Trig,
    Turtle,
    Ntriples,
    Rdfxml,
}

impl InputFmt {
    fn as_rdf_format(self) -> RdfFormat {
        match self {
            InputFmt::Nquads => RdfFormat::NQuads,
            InputFmt::Trig => RdfFormat::TriG,
            InputFmt::Turtle => RdfFormat::Turtle,
            InputFmt::Ntriples => RdfFormat::NTriples,
            InputFmt::Rdfxml => RdfFormat::RdfXml,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "quadld")]
#[command(about = "RDF dataset to JSON-LD converter")]
struct Cli {
    /// Input dataset files; reads stdin when omitted
    #[clap(long, short, num_args = 1..)]
    input: Vec<PathBuf>,
    /// Input format; defaults to the file extension, or N-Quads for stdin
    #[clap(long, short, value_enum)]
    format: Option<InputFmt>,
    /// Output encoding: "object" buffers a pretty-printed document, "string" emits incremental JSON array text
    #[clap(long, short, default_value = "object")]
    encoding: String,
    /// Emit one entry per quad instead of a grouped document
    #[clap(long, action)]
    per_quad: bool,
    /// Render canonical xsd:integer literals as JSON numbers
    #[clap(long, action)]
    integers: bool,
    /// Output file; writes stdout when omitted
    #[clap(long, short)]
    output: Option<PathBuf>,
    /// Verbose mode - sets the RUST_LOG level to info, defaults to warning level
    #[clap(long, short, action, default_value = "false")]
    verbose: bool,
    /// Debug mode - sets the RUST_LOG level to debug, defaults to warning level
    #[clap(long, action, default_value = "false")]
    debug: bool,
}

pub fn run() -> Result<()> {
    let cmd = Cli::parse();
    execute(cmd)
}

pub fn run_from_args<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cmd = Cli::try_parse_from(args).map_err(anyhow::Error::from)?;
    execute(cmd)
}

fn format_for_path(path: &Path) -> RdfFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("nq") => RdfFormat::NQuads,
        Some("trig") => RdfFormat::TriG,
        Some("ttl") | Some("n3") => RdfFormat::Turtle,
        Some("nt") => RdfFormat::NTriples,
        Some("xml") | Some("rdf") => RdfFormat::RdfXml,
        _ => RdfFormat::NQuads,
    }
}

fn parse_quads<R: Read>(reader: R, format: RdfFormat) -> Result<Vec<Quad>> {
    let parser = RdfParser::from_format(format);
    let mut quads = Vec::new();
    for quad in parser.for_reader(reader) {
        let quad = quad?;
        quads.push(Quad::from_oxigraph(&quad)?);
    }
    Ok(quads)
}

fn execute(cmd: Cli) -> Result<()> {
    // CLI flags for verbosity take precedence over RUST_LOG; default to "warn".
    if cmd.debug {
        std::env::set_var("RUST_LOG", "debug");
    } else if cmd.verbose {
        std::env::set_var("RUST_LOG", "info");
    } else if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "warn");
    }
    let _ = env_logger::try_init();

    // Unknown encodings fail here, before any input is read.
    let options = SerializerOptions {
        integers: cmd.integers.into(),
        ..Default::default()
    }
    .with_encoding_name(&cmd.encoding)?;

    let mut quads = Vec::new();
    if cmd.input.is_empty() {
        let format = cmd
            .format
            .map(InputFmt::as_rdf_format)
            .unwrap_or(RdfFormat::NQuads);
        quads.extend(parse_quads(std::io::stdin().lock(), format)?);
    } else {
        for path in &cmd.input {
            let format = cmd
                .format
                .map(InputFmt::as_rdf_format)
                .unwrap_or_else(|| format_for_path(path));
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            quads.extend(parse_quads(BufReader::new(file), format)?);
        }
    }
    info!("parsed {} quads", quads.len());

    let writer: Box<dyn Write> = match &cmd.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };
    write_output(quads, writer, cmd.per_quad, options)
}

fn write_output<W: Write>(
    quads: Vec<Quad>,
    mut writer: W,
    per_quad: bool,
    options: SerializerOptions,
) -> Result<()> {
    let stream = quads.into_iter().map(Ok::<_, std::convert::Infallible>);
    match options.encoding {
        Encoding::Object => {
            let document = if per_quad {
                serialize_quads(stream, options)?
            } else {
                serialize_document(stream, options)?
            };
            serde_json::to_writer_pretty(&mut writer, &document)?;
            writeln!(writer)?;
        }
        Encoding::String => {
            let output = if per_quad {
                serialize_quads_to_writer(stream, writer, options)?
            } else {
                serialize_document_to_writer(stream, writer, options)?
            };
            if let Output::Text(mut writer) = output {
                writeln!(writer)?;
            }
        }
    }
    Ok(())
}
