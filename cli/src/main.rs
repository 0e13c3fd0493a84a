//! mathblock CLI - render block-delimited content with inline math

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use mathblock::render::{self, JsonFormat};
use mathblock::{
    BlockKind, EditorMode, MathBackend, Mathblock, NormalizePreset, RenderOptions, TextBlock,
};

#[derive(Parser)]
#[command(name = "mathblock")]
#[command(version)]
#[command(about = "Render block-delimited content with inline math to HTML, text, and JSON", long_about = None)]
struct Cli {
    /// Input file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render content to HTML, text, or a JSON fragment tree
    Render {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Editor mode (detected from the file extension if not specified)
        #[arg(short, long, env = "MATHBLOCK_MODE", value_parser = parse_mode)]
        mode: Option<EditorMode>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: OutputFormat,

        /// Client-side math engine to target
        #[arg(long, value_enum, default_value = "katex")]
        backend: Backend,

        /// Input normalization preset
        #[arg(long, value_enum)]
        normalize: Option<NormalizeLevel>,

        /// Do not wrap blocks in containers
        #[arg(long)]
        no_wrap: bool,

        /// Text shown for empty content
        #[arg(long)]
        placeholder: Option<String>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Exit with an error if any formula failed to render
        #[arg(long)]
        strict: bool,
    },

    /// Show block segmentation as JSON
    Blocks {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show inline math extraction of augmented text as JSON
    Math {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show content statistics
    Info {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Editor mode (detected from the file extension if not specified)
        #[arg(short, long, env = "MATHBLOCK_MODE", value_parser = parse_mode)]
        mode: Option<EditorMode>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// HTML fragment
    Html,
    /// Plain text
    Text,
    /// JSON fragment tree
    Json,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// `$...$` delimiters
    Katex,
    /// `\(...\)` delimiters
    Mathjax,
}

impl From<Backend> for MathBackend {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Katex => MathBackend::KaTeX,
            Backend::Mathjax => MathBackend::MathJax,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum NormalizeLevel {
    /// Line endings only
    Minimal,
    /// Line endings, Unicode NFC, invisible characters
    Standard,
}

impl From<NormalizeLevel> for NormalizePreset {
    fn from(level: NormalizeLevel) -> Self {
        match level {
            NormalizeLevel::Minimal => NormalizePreset::Minimal,
            NormalizeLevel::Standard => NormalizePreset::Standard,
        }
    }
}

fn parse_mode(s: &str) -> Result<EditorMode, String> {
    s.parse::<EditorMode>().map_err(|e| e.to_string())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            mode,
            format,
            backend,
            normalize,
            no_wrap,
            placeholder,
            compact,
            strict,
        }) => {
            let mut options = RenderOptions::new().with_block_wrappers(!no_wrap);
            if let Some(level) = normalize {
                options = options.with_normalize_preset(level.into());
            }
            if let Some(text) = placeholder {
                options = options.with_placeholder(text);
            }
            cmd_render(
                &input,
                output.as_deref(),
                mode,
                format,
                backend,
                options,
                json_format(compact),
                strict,
            )
        }
        Some(Commands::Blocks { input, compact }) => cmd_blocks(&input, json_format(compact)),
        Some(Commands::Math { input, compact }) => cmd_math(&input, json_format(compact)),
        Some(Commands::Info { input, mode, json }) => cmd_info(&input, mode, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render to HTML on stdout if input is provided
            if let Some(input) = cli.input {
                cmd_render(
                    &input,
                    None,
                    None,
                    OutputFormat::Html,
                    Backend::Katex,
                    RenderOptions::default(),
                    JsonFormat::Pretty,
                    false,
                )
            } else {
                println!("{}", "Usage: mathblock <FILE>".yellow());
                println!("       mathblock --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn read_input(input: &Path) -> std::io::Result<String> {
    if input == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        fs::read_to_string(input)
    }
}

fn resolve_mode(input: &Path, mode: Option<EditorMode>) -> EditorMode {
    let mode = mode.unwrap_or_else(|| mathblock::mode_from_path(input));
    log::debug!("Using {} mode for {}", mode, input.display());
    mode
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    mode: Option<EditorMode>,
    format: OutputFormat,
    backend: Backend,
    options: RenderOptions,
    json: JsonFormat,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = read_input(input)?;
    let mode = resolve_mode(input, mode);
    let mut mb = Mathblock::new()
        .with_backend(backend.into())
        .with_options(options);

    let (rendered, stats) = match format {
        OutputFormat::Html => {
            let result = mb.render_with_stats(&content, mode);
            (result.content, result.stats)
        }
        OutputFormat::Text | OutputFormat::Json => {
            let mut tree = mathblock::FragmentTree::new();
            let stats = mb.render_into(&content, mode, &mut tree);
            let fragments = tree.into_fragments();
            let rendered = if format == OutputFormat::Text {
                render::to_text(&fragments)
            } else {
                render::to_json(&fragments, json)?
            };
            (rendered, stats)
        }
    };

    write_output(output, &rendered)?;

    if stats.has_errors() {
        eprintln!(
            "{} {} formula(s) failed to render",
            "Warning:".yellow().bold(),
            stats.error_count()
        );
        if strict {
            return Err(format!("{} formula(s) failed to render", stats.error_count()).into());
        }
    }

    Ok(())
}

fn cmd_blocks(input: &Path, format: JsonFormat) -> Result<(), Box<dyn std::error::Error>> {
    let content = read_input(input)?;
    let blocks = mathblock::segment(&content);
    println!("{}", render::to_json_blocks(&blocks, format)?);
    Ok(())
}

fn cmd_math(input: &Path, format: JsonFormat) -> Result<(), Box<dyn std::error::Error>> {
    let content = read_input(input)?;
    let segments: Vec<_> = mathblock::segment(&content)
        .iter()
        .filter(|block| block.kind == BlockKind::Augmented)
        .flat_map(|block| mathblock::extract_math(&block.content))
        .collect();
    println!("{}", render::to_json_segments(&segments, format)?);
    Ok(())
}

fn cmd_info(
    input: &Path,
    mode: Option<EditorMode>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = read_input(input)?;
    let mode = resolve_mode(input, mode);
    let mut mb = Mathblock::new().with_options(RenderOptions::new().with_stats(true));
    let stats = mb.render_with_stats(&content, mode).stats;

    if json {
        let value = serde_json::json!({
            "file": input.display().to_string(),
            "mode": mode,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let blocks: Vec<TextBlock> = if mode.segments_blocks() {
        mathblock::segment(&content)
    } else {
        Vec::new()
    };

    println!("{}", "Content Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Mode".bold(), mode);
    println!("{}: {}", "Bytes".bold(), content.len());
    println!("{}: {}", "Lines".bold(), content.lines().count());

    println!();
    println!("{}", "Blocks".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for kind in BlockKind::ALL {
        println!("{}: {}", kind.to_string().bold(), stats.blocks_of(kind));
    }
    if !blocks.is_empty() {
        let sentinel_blocks = blocks.iter().filter(|b| b.kind.is_explicit()).count();
        println!("{}: {}", "Explicit".bold(), sentinel_blocks);
    }

    println!();
    println!("{}", "Math".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Inline spans".bold(), stats.math_spans);
    let conversion = stats.conversion_errors.to_string();
    let typeset = stats.typeset_errors.to_string();
    println!(
        "{}: {}",
        "Conversion errors".bold(),
        if stats.conversion_errors > 0 {
            conversion.red()
        } else {
            conversion.normal()
        }
    );
    println!(
        "{}: {}",
        "Typeset errors".bold(),
        if stats.typeset_errors > 0 {
            typeset.red()
        } else {
            typeset.normal()
        }
    );

    println!();
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mathblock".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Block-delimited content renderer with inline math");
    println!();
    println!("License: MIT");
}
