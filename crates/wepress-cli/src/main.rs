//! Command-line frontend: read a Markdown file, write the converted
//! outputs next to it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use wepress::WepressService;

#[derive(Parser, Debug)]
#[command(
    name = "wepress",
    version,
    about = "Convert Markdown to inline-styled HTML for paste-based publishing editors",
    after_help = "By default both outputs are written: <basename>_wechat.html \
                  and <basename>_formatted.md, next to the input file."
)]
struct Args {
    /// Input Markdown file
    input: PathBuf,

    /// Write a full standalone preview document (openable in a browser)
    /// instead of a bare HTML fragment
    #[arg(long)]
    preview: bool,

    /// Only write the HTML output
    #[arg(long)]
    html: bool,

    /// Only write the formatted Markdown output
    #[arg(long)]
    md: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("unable to read {}: {source}", .path.display())]
    FileRead { path: PathBuf, source: io::Error },

    #[error("unable to write {}: {source}", .path.display())]
    FileWrite { path: PathBuf, source: io::Error },
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let markdown = fs::read_to_string(&args.input).map_err(|source| CliError::FileRead {
        path: args.input.clone(),
        source,
    })?;

    let (html_path, md_path) = output_paths(&args.input);
    let service = WepressService::new();

    if !args.md {
        let fragment = service.render_inline_html(&markdown);
        let output = if args.preview {
            service.compose_preview(&fragment, &markdown)
        } else {
            fragment
        };
        write_output(&html_path, &output)?;
        println!("HTML output: {}", html_path.display());
    }

    if !args.html {
        let formatted = service.normalize_markdown(&markdown);
        write_output(&md_path, &formatted)?;
        println!("Markdown output: {}", md_path.display());
    }

    if !args.md {
        println!("Paste the HTML file's content into the publishing editor.");
    }
    if !args.html {
        println!("The formatted Markdown is ready for other platforms.");
    }

    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<(), CliError> {
    fs::write(path, content).map_err(|source| CliError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Sibling output paths for an input file: `<basename>_wechat.html` and
/// `<basename>_formatted.md`.
fn output_paths(input: &Path) -> (PathBuf, PathBuf) {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = input.parent().unwrap_or_else(|| Path::new(""));

    (
        dir.join(format!("{stem}_wechat.html")),
        dir.join(format!("{stem}_formatted.md")),
    )
}
