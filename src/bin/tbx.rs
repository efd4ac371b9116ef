//! Tablix CLI - bidirectional Markdown ↔ HTML table converter

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use tablix::{
    detect_format,
    diagnostics::{check_html, check_markdown, format_diagnostics},
    html_to_markdown_with_options, markdown_to_html_with_options, ConversionError,
    ConversionOutput, HtmlOptions, MarkdownOptions,
};
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tbx")]
#[command(version)]
#[command(about = "Tablix - bidirectional Markdown ↔ HTML table converter", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Conversion direction
    #[arg(short, long, value_enum, default_value_t = Direction::Auto)]
    direction: Direction,

    /// Emit unpadded Markdown cells
    #[arg(long)]
    compact: bool,

    /// Emit HTML with alignment styles only (no borders or padding)
    #[arg(long)]
    minimal: bool,

    /// Print HTML → Markdown results with their warnings as JSON
    #[arg(long)]
    json: bool,

    /// Detect and print the input format without converting
    #[arg(long)]
    detect: bool,

    /// Check mode - explain table problems without converting
    #[arg(long)]
    check: bool,

    /// Use colored output (for check mode)
    #[arg(long, default_value_t = true)]
    color: bool,

    /// Strict mode: exit with error if any conversion warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Check input for table problems
    Check {
        /// Input file to check
        input: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    /// Auto-detect based on file extension or content
    Auto,
    /// Markdown to HTML
    Md2html,
    /// HTML to Markdown
    Html2md,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let (input, filename) = read_input(cli.input_file.as_deref())?;

    // If detect mode, just print format and exit
    if cli.detect {
        println!("{}", detect_format(&input));
        return Ok(());
    }

    let direction = resolve_direction(cli.direction, filename.as_deref(), &input);

    if cli.check {
        let result = match direction {
            Direction::Html2md => check_html(&input),
            _ => check_markdown(&input),
        };
        println!("{}", format_diagnostics(&result, cli.color));
        if result.has_errors() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let converted = match direction {
        Direction::Html2md => {
            let options = if cli.compact {
                MarkdownOptions::compact()
            } else {
                MarkdownOptions::default()
            };
            html_to_markdown_with_options(&input, &options)
                .ok_or(ConversionError::no_table("html"))
        }
        _ => {
            let options = if cli.minimal {
                HtmlOptions::minimal()
            } else {
                HtmlOptions::default()
            };
            markdown_to_html_with_options(&input, &options)
                .map(ConversionOutput::new)
                .ok_or(ConversionError::no_table("markdown"))
        }
    };

    let output = match converted {
        Ok(output) => output,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    // Print warnings to stderr (unless quiet mode)
    if !cli.quiet && output.has_warnings() {
        print_warnings_to_stderr(&output, cli.color);
    }

    // Check strict mode
    if cli.strict && output.has_warnings() {
        eprintln!(
            "Error: {} conversion warning(s) in strict mode",
            output.warnings.len()
        );
        std::process::exit(1);
    }

    let rendered = if cli.json {
        serde_json::to_string_pretty(&output)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    } else {
        output.content.clone()
    };

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", rendered)?;
            if output.has_warnings() {
                eprintln!(
                    "⚠ Output written to: {} ({} warning(s))",
                    path,
                    output.warnings.len()
                );
            } else {
                eprintln!("✓ Output written to: {}", path);
            }
        }
        None => {
            println!("{}", rendered);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> io::Result<()> {
    match cmd {
        Commands::Check { input, no_color } => {
            let (content, filename) = read_input(input.as_deref())?;
            let result = match resolve_direction(Direction::Auto, filename.as_deref(), &content) {
                Direction::Html2md => check_html(&content),
                _ => check_markdown(&content),
            };
            println!("{}", format_diagnostics(&result, !no_color));

            if result.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Info => {
            println!("Tablix - bidirectional Markdown ↔ HTML table converter");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Markdown pipe tables → inline-styled HTML");
            println!("  ✓ Word processor / browser HTML → Markdown");
            println!("  ✓ colspan / rowspan expansion");
            println!("  ✓ Column alignment in both directions");
            println!("  ✓ Input diagnostics and format auto-detection");
            println!();
            println!("Logging: set TABLIX_LOG (e.g. TABLIX_LOG=debug)");
        }
    }

    Ok(())
}

/// Read a file, or stdin when no path is given
#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<(String, Option<String>)> {
    match path {
        Some(path) => Ok((fs::read_to_string(path)?, Some(path.to_string()))),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok((buffer, None))
        }
    }
}

/// Pick a direction from the flag, then the file extension, then the content
#[cfg(feature = "cli")]
fn resolve_direction(requested: Direction, filename: Option<&str>, input: &str) -> Direction {
    if !matches!(requested, Direction::Auto) {
        return requested;
    }

    if let Some(name) = filename {
        let name = name.to_ascii_lowercase();
        if name.ends_with(".html") || name.ends_with(".htm") {
            return Direction::Html2md;
        }
        if name.ends_with(".md") || name.ends_with(".markdown") {
            return Direction::Md2html;
        }
    }

    match detect_format(input) {
        "html" => Direction::Html2md,
        _ => Direction::Md2html,
    }
}

#[cfg(feature = "cli")]
fn init_logging(quiet: bool) {
    let default_level = if quiet { "error" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("TABLIX_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Print warnings to stderr with optional color coding
#[cfg(feature = "cli")]
fn print_warnings_to_stderr(output: &ConversionOutput, use_color: bool) {
    let color = if use_color { "\x1b[33m" } else { "" };
    let reset = if use_color { "\x1b[0m" } else { "" };

    eprintln!();
    eprintln!(
        "{}Conversion Warnings ({}):{}",
        color,
        output.warnings.len(),
        reset
    );
    for warning in &output.warnings {
        eprintln!("  {}", warning.message);
    }
    eprintln!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tablix --features cli");
    eprintln!("  tbx [OPTIONS] [INPUT_FILE]");
}
