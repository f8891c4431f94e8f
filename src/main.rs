use std::path::{Path, PathBuf};

use anyhow::{Result, ensure};
use clap::{Parser, Subcommand};
use console::style;
use tracing::Level;

use samsalvage::external::{self, TestdiskOutcome};
use samsalvage::types::{CHUNK_SIZE, HEX_PREVIEW_BYTES};
use samsalvage::{carving, extraction, io, metadata, segment, text};

#[derive(Parser)]
#[command(name = "samsalvage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Recover text and embedded images from damaged Ami Pro .sam documents")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract printable text from the document
    Text {
        file: PathBuf,

        #[arg(short, long, default_value = "./recovered")]
        output: PathBuf,
    },

    /// Dump readable segments and a hex preview of the raw bytes
    Binary {
        file: PathBuf,

        #[arg(short, long, default_value = "./recovered")]
        output: PathBuf,

        #[arg(long, default_value_t = CHUNK_SIZE)]
        chunk_size: usize,

        #[arg(long, default_value_t = HEX_PREVIEW_BYTES)]
        preview_bytes: usize,
    },

    /// Carve embedded JPEG and PNG images
    Images {
        file: PathBuf,

        #[arg(short, long, default_value = "./recovered")]
        output: PathBuf,
    },

    /// Report filesystem timestamps for the document
    Meta {
        file: PathBuf,

        #[arg(short, long, default_value = "./recovered")]
        output: PathBuf,
    },

    /// Delegate to TestDisk for a file that cannot be located at all
    Testdisk {
        /// Device or path handed to TestDisk as-is
        target: PathBuf,

        #[arg(short, long, default_value = "./recovered")]
        output: PathBuf,
    },

    /// Run every in-process mode: text, binary, images, metadata
    All {
        file: PathBuf,

        #[arg(short, long, default_value = "./recovered")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stamp = extraction::run_stamp();

    match cli.command {
        Commands::Text { file, output } => {
            let buffer = io::read_source(&file)?;
            text_mode(&buffer, &output, &stamp);
        }
        Commands::Binary {
            file,
            output,
            chunk_size,
            preview_bytes,
        } => {
            ensure!(chunk_size > 0, "chunk size must be at least 1");
            let buffer = io::read_source(&file)?;
            binary_mode(&buffer, &output, &stamp, chunk_size, preview_bytes);
        }
        Commands::Images { file, output } => {
            let buffer = io::read_source(&file)?;
            images_mode(&buffer, &output, &stamp);
        }
        Commands::Meta { file, output } => {
            meta_mode(&file, &output, &stamp)?;
        }
        Commands::Testdisk { target, output } => {
            testdisk_mode(&target, &output, &stamp)?;
        }
        Commands::All { file, output } => {
            let buffer = io::read_source(&file)?;
            text_mode(&buffer, &output, &stamp);
            binary_mode(&buffer, &output, &stamp, CHUNK_SIZE, HEX_PREVIEW_BYTES);
            images_mode(&buffer, &output, &stamp);
            meta_mode(&file, &output, &stamp)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn text_mode(buffer: &[u8], output: &Path, stamp: &str) {
    println!("{}", style("Extracting printable text...").cyan());

    let recovered = text::extract_text(buffer);

    if recovered.is_empty() {
        println!("\n[!] {}", style("No printable text found.").yellow());
    } else {
        println!("\n{recovered}");
    }

    persist(extraction::save_text(output, "recovered", stamp, &recovered));
}

fn binary_mode(buffer: &[u8], output: &Path, stamp: &str, chunk_size: usize, preview_bytes: usize) {
    println!("{}", style("Analyzing binary structure...").cyan());

    let preview = segment::hex_preview(buffer, preview_bytes);
    println!("\nFirst {} bytes in hex:\n{preview}", preview.len() / 2);

    let segments = segment::segment(buffer, chunk_size);

    if segments.is_empty() {
        println!("\n[!] {}", style("No readable segments found.").yellow());
        return;
    }

    println!("\n{}", style("Readable segments:").green().bold());
    for seg in &segments {
        println!("Segment {}: {}", seg.index, seg.text);
    }

    let joined = segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    persist(extraction::save_text(output, "segments", stamp, &joined));
}

fn images_mode(buffer: &[u8], output: &Path, stamp: &str) {
    println!("{}", style("Carving embedded images...").cyan());

    let images = carving::carve(buffer);

    if images.is_empty() {
        println!("\n[!] {}", style("No embedded images found.").yellow());
        return;
    }

    println!(
        "\nFound {} embedded images:",
        style(images.len()).green().bold()
    );
    for image in &images {
        println!(
            "{} #{:03}  [{}..{})  {} bytes",
            image.format,
            image.index,
            image.start,
            image.end,
            image.len()
        );
    }

    // Results are already on screen; a failed save must not discard them.
    match extraction::extract_images(buffer, &images, output, stamp) {
        Ok(report) => {
            println!(
                "\nImages extracted: {}",
                style(report.extracted.len()).green()
            );
            if report.failed > 0 {
                println!("Failed:           {}", style(report.failed).yellow());
            }
            println!("Output folder:    {}", output.display());
        }
        Err(e) => eprintln!("\n[!] {}", style(format!("Save failed: {e}")).yellow()),
    }
}

fn meta_mode(file: &Path, output: &Path, stamp: &str) -> Result<()> {
    println!("{}", style("Reading filesystem timestamps...").cyan());

    let stamps = metadata::read_timestamps(file)?;

    println!("\nCreated:  {}", stamps.created_display());
    println!("Modified: {}", stamps.modified_display());

    let report = format!(
        "file: {}\ncreated: {}\nmodified: {}\n",
        file.display(),
        stamps.created_display(),
        stamps.modified_display()
    );
    persist(extraction::save_text(output, "metadata", stamp, &report));

    Ok(())
}

fn testdisk_mode(target: &Path, output: &Path, stamp: &str) -> Result<()> {
    println!("{}", style("Delegating to TestDisk...").cyan());

    match external::run_testdisk(target)? {
        TestdiskOutcome::Completed { stdout } => {
            println!("\nTestDisk output:\n{stdout}");
            persist(extraction::save_text(output, "testdisk", stamp, &stdout));
        }
        TestdiskOutcome::ToolMissing => {
            println!(
                "\n[!] {}",
                style("TestDisk is not installed or not on PATH.").yellow()
            );
        }
        TestdiskOutcome::TimedOut { limit } => {
            println!(
                "\n[!] {}",
                style(format!(
                    "TestDisk exceeded the {}s time bound and was stopped.",
                    limit.as_secs()
                ))
                .yellow()
            );
        }
    }

    Ok(())
}

fn persist(result: samsalvage::Result<PathBuf>) {
    match result {
        Ok(path) => println!("\nSaved to {}", path.display()),
        Err(e) => eprintln!("\n[!] {}", style(format!("Save failed: {e}")).yellow()),
    }
}
