//! Run summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rescale_core::normalizer::RunReport;
use rescale_core::numeric::format_numeric;

pub fn print_summary(report: &RunReport) {
    println!("Input: {}", report.input.display());
    println!("Output: {}", report.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Range"),
        header_cell("Mode"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for column in &report.columns {
        table.add_row(vec![
            Cell::new(&column.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(format_numeric(column.min)),
            Cell::new(format_numeric(column.max)),
            Cell::new(format_numeric(column.max - column.min)),
            mode_cell(column.excluded, column.constant),
        ]);
    }
    println!("{table}");
    println!("Rows written: {}", report.rows);
}

fn mode_cell(excluded: bool, constant: bool) -> Cell {
    if excluded {
        dim_cell("excluded")
    } else if constant {
        Cell::new("constant").fg(Color::Yellow)
    } else {
        Cell::new("rescaled").fg(Color::Green)
    }
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

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
