use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;

use debugflow::{Formatter, FormattingError, SegmentStyle, StyledLine, DEFAULT_INDENTATION};

/// Re-flow single-line Debug output into an indented multi-line report.
///
/// dflow reads one value's debug text from stdin or files and writes it back
/// split at commas and bracket boundaries, indented to match the nesting.
/// Output can be plain text, ANSI-colored text, or a JSON export of the
/// styled line segments for other tooling to render.
#[derive(Parser, Debug)]
#[command(name = "dflow")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s). If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Number of spaces per indentation level; zero or negative leaves the
    /// input on a single line.
    #[arg(short, long, default_value_t = DEFAULT_INDENTATION, allow_negative_numbers = true)]
    indent: isize,

    /// String prepended to every output line.
    #[arg(short, long, default_value = "")]
    prefix: String,

    /// When to color output.
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorArg,

    /// Emit the styled line segments as JSON instead of rendering them.
    /// Segments stay classified unless --color=never.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("dflow: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(&args)?;
    let value_text = input.trim_end_matches(['\r', '\n']);

    let colored = match args.color {
        ColorArg::Always => true,
        ColorArg::Never => false,
        ColorArg::Auto => args.output.is_none() && !args.json && io::stdout().is_terminal(),
    };

    let mut formatter = Formatter::new();

    let rendered = if args.json {
        let classified = args.color != ColorArg::Never;
        match formatter.format_as_styled_lines(value_text, args.indent, classified, &args.prefix) {
            Ok(lines) => format!("{}\n", serde_json::to_string_pretty(&*lines)?),
            Err(err) => fallback(&args, value_text, &err),
        }
    } else if colored {
        match formatter.format_as_styled_lines(value_text, args.indent, true, &args.prefix) {
            Ok(lines) => format!("{}\n", render_ansi(&lines)),
            Err(err) => fallback(&args, value_text, &err),
        }
    } else {
        match formatter.format_as_string(value_text, args.indent, &args.prefix) {
            Ok(report) => format!("{}\n", report),
            Err(err) => fallback(&args, value_text, &err),
        }
    };

    write_output(&args, &rendered)
}

/// A formatting error is recoverable: show the original single-line text and
/// leave a diagnostic on stderr instead of failing the invocation.
fn fallback(args: &Args, value_text: &str, err: &FormattingError) -> String {
    eprintln!("dflow: cannot re-flow input ({}); passing it through unchanged", err);
    format!("{}{}\n", args.prefix, value_text)
}

fn read_input(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    if args.files.is_empty() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    let mut combined = String::new();
    for path in &args.files {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
        combined.push_str(&content);
    }
    Ok(combined)
}

fn write_output(args: &Args, rendered: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &args.output {
        fs::write(path, rendered)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    } else {
        io::stdout().write_all(rendered.as_bytes())?;
    }

    Ok(())
}

// Conservative 8/16-color palette for broad terminal compatibility.
fn ansi_code(style: SegmentStyle) -> &'static str {
    match style {
        SegmentStyle::Plain => "90",
        SegmentStyle::Name => "36",
        SegmentStyle::Structural => "37",
        SegmentStyle::String => "32",
        SegmentStyle::Number => "33",
        SegmentStyle::Null => "34",
    }
}

fn render_ansi(lines: &[StyledLine]) -> String {
    let mut out = String::new();

    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for segment in &line.segments {
            out.push_str("\x1b[");
            out.push_str(ansi_code(segment.style));
            out.push('m');
            out.push_str(&segment.text);
            out.push_str("\x1b[0m");
        }
    }

    out
}
