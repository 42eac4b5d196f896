//! `scilex` - lex a file and print it with syntax colours and a fold gutter.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p scilex-cli -- src/Main.java
//! cargo run -p scilex-cli -- --lang vim --keywords my-words.yaml ~/.vimrc
//! cargo run -p scilex-cli -- --regions src/Main.java
//! ```
//!
//! Set `RUST_LOG=scilex=trace` to see every lex and fold invocation.

mod args;
mod render;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use std::sync::Arc;

use scilex::{Document, DocumentProcessor, LexerProcessor, ProcessingEdit};
use scilex_lang::{KeywordConfig, LANGUAGES, LanguageError, require_by_name, require_by_path};
use thiserror::Error;
use tracing::debug;

use crate::args::{ColorChoice, Command, RenderArgs, USAGE};
use crate::render::{RenderOptions, render, render_regions};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Language(#[from] LanguageError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn use_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal(),
    }
}

fn list_languages<W: Write>(out: &mut W) -> io::Result<()> {
    for lang in LANGUAGES {
        writeln!(
            out,
            "{:<6} {:<12} {}",
            lang.name,
            lang.display_name,
            lang.extensions
                .iter()
                .map(|ext| format!("*.{ext}"))
                .chain(lang.file_names.iter().map(|name| name.to_string()))
                .collect::<Vec<_>>()
                .join(" ")
        )?;
    }
    Ok(())
}

fn run_render(args: RenderArgs) -> Result<(), CliError> {
    let lang = match &args.language {
        Some(name) => require_by_name(name)?,
        None => require_by_path(&args.path)?,
    };
    let keywords = match &args.keywords {
        Some(path) => lang.keywords_with(&KeywordConfig::load_from_path(path)?)?,
        None => lang.default_keywords(),
    };

    let text = std::fs::read_to_string(&args.path)?;
    debug!(path = %args.path.display(), language = lang.name, bytes = text.len(), "lexing file");

    let mut doc = Document::new(&text);
    let mut processor = LexerProcessor::new(lang.lexer, Arc::new(keywords));
    let edits = match processor.process(&mut doc) {
        Ok(edits) => edits,
        Err(never) => match never {},
    };

    let mut out = io::stdout().lock();
    if args.regions {
        for edit in &edits {
            if let ProcessingEdit::ReplaceFoldingRegions { regions, .. } = edit {
                render_regions(&mut out, regions)?;
            }
        }
    } else {
        let options = RenderOptions {
            color: use_color(args.color),
        };
        render(&mut out, &doc, lang.lexer.id(), options)?;
    }
    Ok(())
}

fn run() -> Result<(), CliError> {
    match args::parse(std::env::args().skip(1))? {
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Command::List => Ok(list_languages(&mut io::stdout().lock())?),
        Command::Render(args) => run_render(args),
    }
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(message)) => {
            eprintln!("error: {message}\n\n{USAGE}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
