use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use super::scorer::ScoredRecord;
use crate::records::POINT_ARITY;

pub const TABLE_TITLE: &str = "Sorted Data with Relevance Points (Approximate Distances):";
/// Significant digits shown for each relevance score in the table.
pub const SCORE_DIGITS: usize = 6;

#[derive(Debug, Serialize)]
struct ReportRow {
    relevance: f32,
    values: [i32; POINT_ARITY],
}

/// Plain-text listing: one line per record, score first, then its values.
pub fn write_sorted_table<W: Write>(mut out: W, sorted: &[ScoredRecord]) -> Result<()> {
    writeln!(out, "\n{}", TABLE_TITLE)?;
    for item in sorted {
        write!(out, "{} ", format_significant(item.score, SCORE_DIGITS))?;
        for value in &item.record.values {
            write!(out, "{} ", value)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Formats `value` with `digits` significant digits the way `%g` does:
/// trailing zeros are dropped, and very small or large magnitudes switch to
/// `d.ddde±XX` notation.
pub fn format_significant(value: f32, digits: usize) -> String {
    let value = value as f64;
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.max(1);
    // The exponent is taken after rounding to `digits` places.
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

pub fn write_sorted_json<W: Write>(mut out: W, sorted: &[ScoredRecord]) -> Result<()> {
    let rows: Vec<ReportRow> = sorted
        .iter()
        .map(|item| ReportRow {
            relevance: item.score,
            values: item.record.values,
        })
        .collect();
    serde_json::to_writer_pretty(&mut out, &rows)?;
    writeln!(out)?;
    Ok(())
}
