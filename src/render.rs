use colored::Colorize;
use gridsort_core::{column_types, strip_markup, ColumnType, SortDirection, SortExtensions, TableDocument};

/// Print a table document as an aligned pipe table. Cell markup is reduced
/// to its text content, the way a graphical host would render it.
pub fn print_table(document: &TableDocument, sorted: Option<(usize, SortDirection, ColumnType)>) {
    if let Some(title) = &document.title {
        println!("# {}\n", title);
    }

    let headers: Vec<String> = document
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| match sorted {
            Some((sorted_index, direction, _)) if sorted_index == index => {
                let marker = match direction {
                    SortDirection::Ascending => "▲",
                    SortDirection::Descending => "▼",
                };
                format!("{} {}", column.name, marker)
            }
            _ => column.name.clone(),
        })
        .collect();

    let display_rows: Vec<Vec<String>> = document
        .rows
        .iter()
        .map(|row| {
            (0..document.columns.len())
                .map(|index| strip_markup(row.get(index).map(String::as_str).unwrap_or("")))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &display_rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let header_cells: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let padded = pad(header, widths[index]);
            match sorted {
                Some((sorted_index, _, _)) if sorted_index == index => {
                    padded.cyan().bold().to_string()
                }
                _ => padded.bold().to_string(),
            }
        })
        .collect();
    println!("| {} |", header_cells.join(" | "));

    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("|-{}-|", separators.join("-|-"));

    for row in &display_rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(index, cell)| pad(cell, widths[index]))
            .collect();
        println!("| {} |", cells.join(" | "));
    }

    match sorted {
        Some((index, _, used)) => println!(
            "\n{} rows, sorted by {} ({})",
            display_rows.len(),
            document.columns[index].name,
            used
        ),
        None => println!("\n{} rows", display_rows.len()),
    }
}

/// Print the sort convention inferred (or declared) for each column
pub fn print_type_report(extensions: &SortExtensions, document: &TableDocument) {
    println!("# Column Conventions\n");

    for (name, column_type) in column_types(extensions, document) {
        println!("- {}: {}", name.bold(), describe(column_type));
    }
}

fn describe(column_type: ColumnType) -> String {
    let explanation = match column_type {
        ColumnType::NumericComma => "comma-decimal number",
        ColumnType::NumericHtml => "comma-decimal number wrapped in markup",
        ColumnType::TitleNumeric => "integer carried in a title attribute",
        ColumnType::Fallback => "host default (plain number or text)",
    };
    format!("{} ({})", column_type, explanation)
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.chars().count());
    format!("{}{}", s, " ".repeat(padding))
}
