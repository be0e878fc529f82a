use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::debug;

use complete_line::{complete_line, logging};

/// Run one line-completion request against a source file and print the
/// outcome as JSON.
#[derive(Debug, Parser)]
#[command(name = "complete-line", version, about)]
struct Args {
    /// Source file to analyze
    file: PathBuf,

    /// Zero-based cursor line
    #[arg(long)]
    line: usize,

    /// Language identifier (inferred from the file extension when omitted)
    #[arg(long)]
    language: Option<String>,

    /// Tab width used for indentation columns
    #[arg(long, default_value_t = 4)]
    tab_width: usize,

    /// Override log level (otherwise RUST_LOG or "warn")
    #[arg(long)]
    log_level: Option<String>,

    /// Disable ANSI colors in log output
    #[arg(long)]
    no_color: bool,
}

/// Map a file extension to an editor language identifier.
fn language_for_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "js" | "mjs" | "cjs" => Some("javascript"),
        "jsx" => Some("javascriptreact"),
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" => Some("typescriptreact"),
        "java" => Some("java"),
        "c" | "h" => Some("c"),
        "cc" | "cpp" | "cxx" | "hpp" => Some("cpp"),
        "cs" => Some("csharp"),
        "go" => Some("go"),
        "php" => Some("php"),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logger(args.no_color, args.log_level.as_deref())?;

    let language = match &args.language {
        Some(language) => language.clone(),
        None => {
            let extension = args
                .file
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default();
            match language_for_extension(extension) {
                Some(language) => language.to_string(),
                None => bail!(
                    "cannot infer language from {:?}; pass --language",
                    args.file
                ),
            }
        }
    };

    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {:?}", args.file))?;
    let lines: Vec<&str> = text.lines().collect();
    if args.line >= lines.len() {
        bail!("--line {} is outside the document ({} lines)", args.line, lines.len());
    }

    debug!(file = ?args.file, language = %language, line = args.line, "running completion");
    let outcome = complete_line(&lines, &language, args.line, args.tab_width);

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
