//! mdocx CLI - compile markdown sections into a styled document

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mdocx::pack::{blocks_to_markdown, JsonPacker};
use mdocx::{
    compile_markdown, sections_from_json, DocumentStats, JsonFormat, Mdocx, OutputFormat,
    PackerRegistry,
};

#[derive(Parser)]
#[command(name = "mdocx")]
#[command(version)]
#[command(about = "Compile markdown sections into a styled document", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a sections file into a document
    Compile {
        /// Sections JSON file: [{"title": ..., "body": ...}, ...]
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Header logo image (PNG, JPEG, GIF or BMP)
        #[arg(short, long, value_name = "IMAGE")]
        logo: PathBuf,

        /// Flow name, used as title and file name prefix
        #[arg(short, long, env = "MDOCX_FLOW_NAME", default_value = "Dokument")]
        flow_name: String,

        /// Date stamp (YYYY-MM-DD), today if not specified
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: Format,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Compile a markdown body and print it back normalized
    #[command(alias = "md")]
    Preview {
        /// Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show block statistics for a sections file
    Info {
        /// Sections JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// JSON document tree
    Json,
    /// Plain text
    Text,
    /// Normalized Markdown
    Markdown,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Text => OutputFormat::Text,
            Format::Markdown => OutputFormat::Markdown,
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Compile {
            input,
            logo,
            flow_name,
            date,
            output,
            format,
            compact,
        }) => cmd_compile(
            &input,
            &logo,
            flow_name,
            date,
            output.as_deref(),
            format,
            compact,
        ),
        Some(Commands::Preview { input, output }) => cmd_preview(&input, output.as_deref()),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: mdocx compile <FILE> --logo <IMAGE>".yellow());
            println!("       mdocx --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_compile(
    input: &Path,
    logo: &Path,
    flow_name: String,
    date: Option<NaiveDate>,
    output: Option<&Path>,
    format: Format,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading sections...");
    let sections = sections_from_json(&fs::read_to_string(input)?)?;
    let logo = fs::read(logo)?;
    pb.inc(1);

    let json_format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let mut builder = Mdocx::new(flow_name).with_json_format(json_format);
    if let Some(date) = date {
        builder = builder.with_date(date);
    }

    pb.set_message("Assembling document...");
    let export = builder.build(&sections, &logo)?;
    log::info!(
        "Assembled {} block(s) for {}",
        export.document.block_count(),
        export.file_name
    );
    pb.inc(1);

    pb.set_message("Packing...");
    let packed = match OutputFormat::from(format) {
        OutputFormat::Json => export.pack(&JsonPacker::with_format(json_format))?,
        other => {
            let registry = PackerRegistry::with_defaults();
            export.pack(registry.get(other.packer_name())?.as_ref())?
        }
    };
    let path = output_dir.join(&packed.file_name);
    fs::write(&path, &packed.bytes)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output:".green().bold());
    println!("  {} {}", "├─".dimmed(), path.display());
    println!(
        "  {} {} block(s) from {} section(s)",
        "├─".dimmed(),
        export.document.block_count(),
        sections.len()
    );
    println!("  {} document name: {}", "└─".dimmed(), export.file_name);

    Ok(())
}

fn cmd_preview(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let body = fs::read_to_string(input)?;
    let blocks = compile_markdown(&body);
    let markdown = blocks_to_markdown(&blocks);

    if let Some(path) = output {
        fs::write(path, &markdown)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", markdown);
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let sections = sections_from_json(&fs::read_to_string(input)?)?;

    if json {
        let mut total = DocumentStats::new();
        for section in &sections {
            total.merge(&DocumentStats::from_blocks(&compile_markdown(&section.body)));
        }
        println!("{}", serde_json::to_string_pretty(&total)?);
        return Ok(());
    }

    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let mut total = DocumentStats::new();
    for section in &sections {
        let stats = DocumentStats::from_blocks(&compile_markdown(&section.body));
        println!(
            "{}: {} block(s), {} word(s)",
            section.title.bold(),
            stats.block_count(),
            stats.word_count
        );
        total.merge(&stats);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Sections".bold(), sections.len());
    println!("{}: {}", "Headings".bold(), total.heading_count);
    println!("{}: {}", "Paragraphs".bold(), total.paragraph_count);
    println!("{}: {}", "Bullet items".bold(), total.bullet_count);
    println!("{}: {}", "Numbered items".bold(), total.numbered_count);
    println!("{}: {}", "Quotes".bold(), total.quote_count);
    println!("{}: {}", "Tables".bold(), total.table_count);
    println!("{}: {}", "Words".bold(), total.word_count);
    println!("{}: {}", "Characters".bold(), total.char_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mdocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown to styled document compiler");
    println!();
    println!("License: MIT");
}
