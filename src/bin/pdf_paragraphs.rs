//! Extract paragraphs from a PDF as JSON
//!
//! Writes the parsed document envelope to stdout (or a file). On failure the
//! error payload is written to stderr and the process exits with status 1.
//!
//! Usage:
//!   cargo run --release --bin pdf_paragraphs -- report.pdf
//!   cargo run --release --bin pdf_paragraphs -- report.pdf --output report.json --pretty
//!   RUST_LOG=debug cargo run --bin pdf_paragraphs -- report.pdf --sequential

use pdf_paragraphs::api::DocumentParser;
use pdf_paragraphs::config::ExtractionConfig;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

struct CliConfig {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    extraction: ExtractionConfig,
    verbose: bool,
}

impl CliConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut output = None;
        let mut extraction = ExtractionConfig::default();
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    i += 1;
                    let path = args.get(i).ok_or("--output requires a path")?;
                    output = Some(PathBuf::from(path));
                },
                "--max-bytes" => {
                    i += 1;
                    let value = args.get(i).ok_or("--max-bytes requires a number")?;
                    let bytes = value
                        .parse::<usize>()
                        .map_err(|e| format!("invalid --max-bytes '{}': {}", value, e))?;
                    extraction = extraction.with_max_input_bytes(bytes);
                },
                "--pretty" => {
                    extraction = extraction.with_pretty_json(true);
                },
                "--sequential" => {
                    extraction = extraction.with_parallel(false);
                },
                "--verbose" | "-v" => {
                    verbose = true;
                },
                other if other.starts_with('-') => {
                    return Err(format!("unknown option '{}'", other));
                },
                other => {
                    input = Some(PathBuf::from(other));
                },
            }
            i += 1;
        }

        Ok(Self {
            input,
            output,
            extraction,
            verbose,
        })
    }
}

fn usage() {
    eprintln!(
        "Usage: pdf_paragraphs <input.pdf> [--output <file.json>] [--pretty] [--sequential] \
         [--max-bytes N] [--verbose]"
    );
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match CliConfig::from_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            usage();
            return ExitCode::from(2);
        },
    };

    let Some(input) = config.input else {
        usage();
        return ExitCode::from(2);
    };

    let start = Instant::now();
    let parser = DocumentParser::with_config(config.extraction);

    let result = parser.parse_file(&input).and_then(|doc| {
        let json = if config.extraction.pretty_json {
            doc.to_json_pretty()?
        } else {
            doc.to_json()?
        };
        Ok((doc, json))
    });

    let (doc, json) = match result {
        Ok(ok) => ok,
        Err(e) => {
            log::error!("Failed to parse {}: {}", input.display(), e);
            let payload = serde_json::to_string(&e.to_response())
                .unwrap_or_else(|_| format!("{{\"error\":\"{}\"}}", e));
            eprintln!("{}", payload);
            return ExitCode::FAILURE;
        },
    };

    match &config.output {
        Some(path) => {
            if let Err(e) = fs::write(path, json.as_bytes()) {
                eprintln!("Error writing {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => println!("{}", json),
    }

    if config.verbose {
        eprintln!("📄 Pages: {}", doc.page_count);
        eprintln!("📝 Paragraphs: {}", doc.texts.len());
        eprintln!("⏱  Time: {:?}", start.elapsed());
        if let Some(path) = &config.output {
            eprintln!("✅ Written to: {}", path.display());
        }
    }

    ExitCode::SUCCESS
}
