//! Cell text for the table writer.

use docweave_core::{CellValue, DataFrame};
use serde::Serialize;

/// Shown for missing values.
pub const MISSING_PLACEHOLDER: &str = "\u{2014}";

/// Floats at or above this magnitude are shown as currency.
pub const CURRENCY_THRESHOLD: f64 = 1000.0;

/// A table flattened to display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableGrid {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableGrid {
    pub fn num_columns(&self) -> usize {
        self.header.len()
    }
}

/// Flatten a frame, optionally materializing its index as the first column.
pub fn table_grid(frame: &DataFrame, include_index: bool) -> TableGrid {
    let reset;
    let frame = if include_index {
        reset = frame.reset_index();
        &reset
    } else {
        frame
    };

    TableGrid {
        header: frame.columns().to_vec(),
        rows: frame
            .rows()
            .iter()
            .map(|row| row.iter().map(format_cell).collect())
            .collect(),
    }
}

pub fn format_cell(value: &CellValue) -> String {
    if value.is_missing() {
        return MISSING_PLACEHOLDER.to_string();
    }
    match value {
        CellValue::Int(i) => format_int(*i),
        CellValue::Float(f) => format_float(*f),
        CellValue::Bool(true) => "True".to_string(),
        CellValue::Bool(false) => "False".to_string(),
        CellValue::Text(s) => s.clone(),
        CellValue::Missing => MISSING_PLACEHOLDER.to_string(),
    }
}

/// `1200` → `1,200`.
pub fn format_int(value: i64) -> String {
    let digits = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// `1500.5` → `$1,500.50`, `42.5` → `42.50`.
pub fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.abs() < CURRENCY_THRESHOLD {
        return format!("{value:.2}");
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((&fixed, "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}.{fraction}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
