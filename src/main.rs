use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use kindle_notebook::model::Color;
use kindle_notebook::{parse_notebook, render_markdown};

#[derive(Parser)]
#[command(name = "kindle-notebook", about = "Render Kindle notebook HTML exports as markdown")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render exports to markdown (one file to stdout, several to --out-dir)
    Render {
        /// Notebook export HTML files
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Write one .md per input here instead of stdout
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Dump the parsed notebook model as JSON
    Inspect {
        file: PathBuf,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Show highlight statistics for an export
    Stats { file: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { files, out_dir } => {
            if files.len() == 1 && out_dir.is_none() {
                let notebook = parse_file(&files[0])?;
                print!("{}", render_markdown(&notebook));
                return Ok(());
            }
            let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("."));
            render_batch(&files, &out_dir)
        }
        Commands::Inspect { file, pretty } => {
            let notebook = parse_file(&file)?;
            let json = if pretty {
                serde_json::to_string_pretty(&notebook)?
            } else {
                serde_json::to_string(&notebook)?
            };
            println!("{}", json);
            Ok(())
        }
        Commands::Stats { file } => {
            let notebook = parse_file(&file)?;
            let notes = notebook
                .highlights
                .iter()
                .filter(|h| h.note.is_some())
                .count();
            let with_page = notebook
                .highlights
                .iter()
                .filter(|h| h.page.is_some())
                .count();
            let with_location = notebook
                .highlights
                .iter()
                .filter(|h| h.location.is_some())
                .count();

            println!("Title:      {}", notebook.title);
            println!("Author:     {}", notebook.author.as_deref().unwrap_or("-"));
            println!("Highlights: {}", notebook.highlights.len());
            println!("Notes:      {}", notes);
            println!("With page:  {}", with_page);
            println!("With loc:   {}", with_location);

            let colors: Vec<String> = Color::ALL
                .into_iter()
                .filter_map(|color| {
                    let n = notebook
                        .highlights
                        .iter()
                        .filter(|h| h.color == Some(color))
                        .count();
                    (n > 0).then(|| format!("{} {}", color, n))
                })
                .collect();
            if !colors.is_empty() {
                println!("Colors:     {}", colors.join(", "));
            }
            Ok(())
        }
    }
}

fn parse_file(path: &Path) -> Result<kindle_notebook::Notebook> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(parse_notebook(&html))
}

/// Render each input to `<out_dir>/<stem>.md`, in parallel.
fn render_batch(files: &[PathBuf], out_dir: &Path) -> Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
            .progress_chars("=> "),
    );

    let results: Vec<Result<()>> = files
        .par_iter()
        .map(|path| {
            let result = render_one(path, out_dir);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_and_clear();

    let mut errors = 0usize;
    for (path, result) in files.iter().zip(&results) {
        if let Err(e) = result {
            errors += 1;
            eprintln!("{}: {:#}", path.display(), e);
        }
    }
    println!("Rendered {} reports ({} errors).", files.len() - errors, errors);
    if errors > 0 {
        bail!("{} of {} inputs failed", errors, files.len());
    }
    Ok(())
}

fn render_one(path: &Path, out_dir: &Path) -> Result<()> {
    let notebook = parse_file(path)?;
    let report = render_markdown(&notebook);
    let stem = path
        .file_stem()
        .with_context(|| format!("No file name in {}", path.display()))?;
    let dest = out_dir.join(stem).with_extension("md");
    fs::write(&dest, report).with_context(|| format!("Failed to write {}", dest.display()))?;
    Ok(())
}
