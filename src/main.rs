//! CLI entry point for shortcut-catalog
//!
//! Provides a command-line interface for listing and searching the
//! catalog, exporting it, and launching the GUI.

use clap::{Parser, Subcommand};
use colored::*;
use shortcut_catalog::catalog;
use shortcut_catalog::core::{filter_records, paginate, Category, CategoryFilter, Record, PAGE_SIZE};
use shortcut_catalog::export::{export_to, ExportFormat};
use shortcut_catalog::ui::App;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shortcut-catalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON catalog file (defaults to the built-in catalog)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List shortcuts
    List {
        /// Restrict to one language
        #[arg(short, long)]
        language: Option<Category>,

        /// Page to display (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Shortcuts per page
        #[arg(long, default_value_t = PAGE_SIZE)]
        page_size: usize,
    },

    /// Search shortcuts by keyword or expansion
    Search {
        /// Case-insensitive search text
        query: String,

        /// Restrict to one language
        #[arg(short, long)]
        language: Option<Category>,
    },

    /// Export the catalog to CSV or JSON
    Export {
        /// Output format
        #[arg(short, long, value_enum)]
        format: ExportFormat,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Restrict to one language
        #[arg(short, long)]
        language: Option<Category>,
    },

    /// Launch the GUI browser
    Gui,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let records = load_records(cli.catalog.as_deref())?;

    match cli.command {
        Commands::List {
            language,
            page,
            page_size,
        } => list_shortcuts(&records, language, page, page_size),
        Commands::Search { query, language } => search_shortcuts(&records, &query, language),
        Commands::Export {
            format,
            output,
            language,
        } => export_shortcuts(&records, format, &output, language)?,
        Commands::Gui => App::new(records).run(),
    }

    Ok(())
}

/// Loads the catalog, expanding `~` in a user-supplied path
fn load_records(path: Option<&std::path::Path>) -> anyhow::Result<Vec<Record>> {
    let records = match path {
        Some(path) => {
            let expanded = shellexpand::tilde(
                path.to_str()
                    .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
            );
            catalog::load_catalog(std::path::Path::new(expanded.as_ref()))?
        }
        None => catalog::builtin()?,
    };

    Ok(records)
}

fn category_filter(language: Option<Category>) -> CategoryFilter {
    match language {
        Some(c) => CategoryFilter::Only(c),
        None => CategoryFilter::All,
    }
}

/// List one page of the catalog
fn list_shortcuts(records: &[Record], language: Option<Category>, page: usize, page_size: usize) {
    let filtered = filter_records(records, category_filter(language), "");
    let total = filtered.len();
    let sliced = paginate(&filtered, page_size.max(1), page);

    for record in &sliced.items {
        print_record(record);
    }

    if sliced.total_pages > 1 {
        println!(
            "\n{} Page {} of {} ({} shortcuts total)",
            "✓".green(),
            page.min(sliced.total_pages).max(1),
            sliced.total_pages,
            total
        );
    } else {
        println!("\n{} Total: {} shortcuts", "✓".green(), total);
    }
}

/// Search the catalog and print every hit
fn search_shortcuts(records: &[Record], query: &str, language: Option<Category>) {
    let hits = filter_records(records, category_filter(language), query);

    if hits.is_empty() {
        println!("{} No shortcuts match '{}'", "✗".red(), query);
        return;
    }

    for record in &hits {
        print_record(record);
    }

    println!(
        "\n{} {} match{}",
        "✓".green(),
        hits.len(),
        if hits.len() == 1 { "" } else { "es" }
    );
}

/// Export the (optionally language-filtered) catalog to a file
fn export_shortcuts(
    records: &[Record],
    format: ExportFormat,
    output: &std::path::Path,
    language: Option<Category>,
) -> anyhow::Result<()> {
    let filtered = filter_records(records, category_filter(language), "");

    let expanded = shellexpand::tilde(
        output
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    let path = std::path::Path::new(expanded.as_ref());

    export_to(path, &filtered, format)
        .map_err(|e| anyhow::anyhow!("Failed to write export: {}", e))?;

    println!(
        "{} Exported {} shortcuts to {}",
        "✓".green(),
        filtered.len(),
        path.display()
    );

    Ok(())
}

/// Print one record as a coloured line
fn print_record(record: &Record) {
    // Expansions can be multi-line; keep the listing one line per record
    let expansion = record.expansion.replace('\n', " ");

    println!(
        "{} → {} {}",
        record.keyword.cyan().bold(),
        expansion.green(),
        format!("[{}]", record.category).dimmed()
    );
}
