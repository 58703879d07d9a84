use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dclean_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Project: {}", result.root.display());
    match &result.outputs {
        Some(outputs) => {
            println!("Report: {}", outputs.missingness_report.display());
            println!("Orders: {}", outputs.orders_clean.display());
            println!("Users: {}", outputs.users.display());
        }
        None => println!("Dry run: no files written"),
    }
    println!(
        "Rows: orders={} ({} columns), users={}",
        result.orders_rows, result.orders_columns, result.users_rows
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Missing"),
        header_cell("Rate"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &result.missingness {
        let color = if entry.missing_count == 0 {
            Color::DarkGrey
        } else {
            Color::Yellow
        };
        table.add_row(vec![
            Cell::new(&entry.column),
            Cell::new(entry.missing_count).fg(color),
            Cell::new(format!("{:.1}%", entry.missing_rate * 100.0)).fg(color),
        ]);
    }
    println!("{table}");

    if !result.unmapped_statuses.is_empty() {
        let values: Vec<&str> = result
            .unmapped_statuses
            .iter()
            .map(String::as_str)
            .collect();
        eprintln!("Unmapped status values (kept as-is): {}", values.join(", "));
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
