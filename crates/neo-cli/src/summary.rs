use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use neo_model::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Input: {}", summary.input.display());
    println!("Output: {}", summary.output_dir.display());
    match &summary.report_path {
        Some(path) => println!("Report: {}", path.display()),
        None => println!("Report: (dry run, not written)"),
    }
    if let Some(path) = &summary.error_report_path {
        println!("Error report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Result"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Accepted uNIDs")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.accepted_count),
    ]);
    table.add_row(vec![
        Cell::new("Rejected rows").fg(Color::Red),
        count_cell(summary.rejected_count, Color::Red),
    ]);
    println!("{table}");

    print_rejection_table(summary);
}

fn print_rejection_table(summary: &RunSummary) {
    if summary.rejections.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Raw ID"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for record in &summary.rejections {
        table.add_row(vec![
            Cell::new(record.row),
            Cell::new(&record.raw),
            Cell::new(record.reason.to_string()).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Rejections:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
