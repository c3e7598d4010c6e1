use clap::Parser;
use colored::Colorize;
use gridsort_core::*;
use std::path::Path;
use std::process;

mod errors;
mod render;

/// Table viewer with locale- and markup-aware column sorting
///
/// Examples:
///   # Display a table document
///   gridsort expenses.json
///
///   # Sort by a column (name or zero-based index)
///   gridsort expenses.json --sort Amount
///
///   # Sort descending
///   gridsort expenses.json --sort Amount --desc
///
///   # Show the sort convention inferred for each column
///   gridsort expenses.json --types
///
///   # Sort and write the result back out
///   gridsort expenses.json --sort Amount --output sorted.json
#[derive(Parser, Debug)]
#[command(name = "gridsort")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Column Conventions:\n  \
    - numeric-comma: comma-decimal numbers (\"1 234,56\"; \"-\" and \"—\" read as zero)\n  \
    - numeric-html: comma-decimal numbers wrapped in markup (\"<b>2,5</b>\")\n  \
    - title-numeric: integers hidden in a title attribute (e.g. sortable dates)\n  \
    - none: host default ordering (plain numbers, then case-insensitive text)\n\n\
Detection:\n  \
    - Conventions are probed most-specific first, and one applies only when\n    \
      every cell in the column matches it\n  \
    - A column can pin its convention up front with \"sort_as\" in the document")]
struct Cli {
    /// Path to the table document JSON file
    #[arg(value_name = "FILE")]
    file: String,

    /// Sort by this column (name or zero-based index)
    #[arg(short, long = "sort", value_name = "COLUMN")]
    sort_by: Option<String>,

    /// Sort descending instead of ascending
    #[arg(short, long = "desc")]
    descending: bool,

    /// Print the sort convention inferred for each column and exit
    #[arg(short, long)]
    types: bool,

    /// Write the (sorted) table back to a JSON file instead of printing it
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let mut document = load_table(&cli.file).unwrap_or_else(|err| {
        report_error(errors::map_load_error(err.as_ref(), Path::new(&cli.file)));
        process::exit(1);
    });

    if let Err(problems) = validate_table(&document) {
        eprintln!("Table validation failed:\n");
        for (i, problem) in problems.iter().enumerate() {
            eprintln!("  {}. {}", i + 1, problem);
        }
        eprintln!("\nPlease fix these errors and try again.");
        process::exit(1);
    }

    let extensions = SortExtensions::new();

    if cli.types {
        render::print_type_report(&extensions, &document);
        return;
    }

    let mut sorted = None;
    if let Some(reference) = &cli.sort_by {
        let Some(index) = resolve_column(&document, reference) else {
            eprintln!("Unknown column '{}'. Available columns:", reference);
            for column in &document.columns {
                eprintln!("  - {}", column.name);
            }
            process::exit(1);
        };

        let direction = if cli.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };

        let used = sort_table(&extensions, &mut document, reference, direction)
            .unwrap_or(ColumnType::Fallback);
        sorted = Some((index, direction, used));
    }

    match &cli.output {
        Some(output) => {
            if let Err(err) = save_table(&document, output) {
                report_error(errors::map_save_error(err.as_ref(), Path::new(output)));
                process::exit(1);
            }
            println!("Saved {} rows to {}", document.rows.len(), output);
        }
        None => render::print_table(&document, sorted),
    }
}

fn report_error((title, message, details): (String, String, String)) {
    eprintln!("{}: {}", title.red().bold(), message);
    if !details.is_empty() {
        eprintln!("\n{}", details);
    }
}
