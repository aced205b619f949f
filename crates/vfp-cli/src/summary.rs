//! Console summaries for finished runs.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

use crate::commands::{PredictResult, TrainResult};

pub fn print_predict_summary(result: &PredictResult) {
    println!("Output: {}", result.output.display());
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(vec![header_cell("Variants"), header_cell("Min score"), header_cell("Max score")]);
    align_all_right(&mut table, 3);
    table.add_row(vec![
        Cell::new(result.rows),
        Cell::new(format!("{:.4}", result.min_score)),
        Cell::new(format!("{:.4}", result.max_score)),
    ]);
    println!("{table}");
}

pub fn print_train_summary(result: &TrainResult) {
    println!("Artifact: {}", result.artifact_path.display());
    println!(
        "Learned {} features from {} variants",
        result.feature_count, result.rows
    );
    if result.categorical.is_empty() {
        return;
    }
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(vec![header_cell("Categorical feature"), header_cell("Retained values")]);
    align_all_right(&mut table, 2);
    for (feature, count) in &result.categorical {
        table.add_row(vec![Cell::new(feature), Cell::new(count)]);
    }
    println!("{table}");
}

fn apply_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_all_right(table: &mut Table, columns: usize) {
    for index in 1..columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}
