//! Human-readable and JSON renderings of an inferred schema.

use std::fmt;
use std::io::Write;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::error::Result;
use crate::types::{ColumnSchema, InferredSchema, InferredType};

/// Values listed per sample column.
const DEFAULT_SAMPLE_LIMIT: usize = 5;

impl InferredSchema {
    /// Writes the schema report (a header line plus one table row per column).
    pub fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        self.show_with_limit(out, DEFAULT_SAMPLE_LIMIT)
    }

    pub fn show_with_limit<W: Write>(&self, out: &mut W, sample_limit: usize) -> Result<()> {
        writeln!(
            out,
            "Schema ({} engine, {} rows, {} columns)",
            self.engine,
            self.rows,
            self.columns.len()
        )?;
        writeln!(out, "{}", self.to_table(sample_limit))?;
        Ok(())
    }

    /// Builds the report table.
    pub fn to_table(&self, sample_limit: usize) -> Table {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Column"),
            header_cell("Type"),
            header_cell("Confidence"),
            header_cell("Distinct"),
            header_cell("Missing"),
            header_cell("Anomalies"),
            header_cell("Values"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 2, CellAlignment::Right);
        align_column(&mut table, 3, CellAlignment::Right);
        align_column(&mut table, 4, CellAlignment::Right);

        for column in &self.columns {
            table.add_row(vec![
                Cell::new(&column.name).add_attribute(Attribute::Bold),
                type_cell(column.inferred_type()),
                Cell::new(format!("{:.2}", column.ptype.confidence)),
                Cell::new(column.cardinality),
                count_cell(column.ptype.missing_count, Color::Yellow),
                anomaly_cell(column, sample_limit),
                Cell::new(sample_values(column, sample_limit)),
            ]);
        }
        table
    }

    /// Renders the schema statistics as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for InferredSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_table(DEFAULT_SAMPLE_LIMIT))
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn type_cell(ty: InferredType) -> Cell {
    let color = match ty {
        InferredType::Boolean => Color::Magenta,
        InferredType::Categorical => Color::Blue,
        InferredType::Date => Color::Green,
        InferredType::Float | InferredType::Integer => Color::Yellow,
        InferredType::String => Color::White,
    };
    Cell::new(ty.as_str()).fg(color)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn anomaly_cell(column: &ColumnSchema, limit: usize) -> Cell {
    let ptype = &column.ptype;
    if ptype.anomalous_count == 0 {
        return dim_cell("-");
    }
    Cell::new(format!(
        "{} ({})",
        ptype.anomalous_count,
        join_limited(&ptype.anomalous_values, limit)
    ))
    .fg(Color::Red)
}

/// Category labels with frequencies for categorical columns, otherwise
/// distinct normal values.
fn sample_values(column: &ColumnSchema, limit: usize) -> String {
    if !column.categories.is_empty() {
        let shown: Vec<String> = column
            .categories
            .iter()
            .take(limit)
            .map(|c| format!("{} ({})", c.label, c.frequency))
            .collect();
        let more = column.categories.len().saturating_sub(limit);
        return with_more(shown.join(", "), more);
    }
    join_limited(&column.ptype.normal_values, limit)
}

fn join_limited(values: &[String], limit: usize) -> String {
    let shown: Vec<&str> = values.iter().take(limit).map(String::as_str).collect();
    with_more(shown.join(", "), values.len().saturating_sub(limit))
}

fn with_more(text: String, more: usize) -> String {
    if more > 0 {
        format!("{text}, … (+{more})")
    } else {
        text
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
