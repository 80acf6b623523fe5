//! Output formatting for CSV, JSON, and text formats.

mod formatters;

use crate::compute::{ParsedRecord, RecordStream};
use crate::data::{OutputFormat, Parameters};
use crate::data::config::OutputOptions;
use crate::error::OutputError;
use crate::planner::OutputPlan;
use coordparse::AxisFormat;
use formatters::{CsvFormatter, Formatter, JsonFormatter, TextFormatter};
use std::io::{self, BufWriter, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Inputs wider than this are shortened in text tables.
const MAX_INPUT_WIDTH: usize = 48;
const FORMAT_WIDTH: usize = 12;

/// Flattened view of one parsed record, as every format sees it.
#[derive(Debug, Clone)]
pub struct CoordinateFields<'a> {
    pub input: Option<&'a str>,
    pub latitude: f64,
    pub longitude: f64,
    pub formats: Option<(AxisFormat, AxisFormat)>,
}

pub fn coordinate_fields<'a>(
    record: &'a ParsedRecord,
    options: &OutputOptions,
) -> CoordinateFields<'a> {
    let coordinate = record.report.coordinate();
    CoordinateFields {
        input: options
            .should_show_inputs()
            .then_some(record.input.as_str()),
        latitude: coordinate.latitude,
        longitude: coordinate.longitude,
        formats: options.explain.then(|| {
            (
                record.report.latitude.format(),
                record.report.longitude.format(),
            )
        }),
    }
}

fn csv_quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn json_escape(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len() + 2);
    for c in field.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if (c as u32) < 0x20 => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

/// JSON has no representation for infinities.
fn json_number(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "null".to_string()
    }
}

/// Shortens `text` to at most `max` display columns, marking the cut with `…`.
fn fit_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let mut fitted = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        fitted.push(c);
        used += w;
    }
    fitted.push('…');
    fitted
}

fn number_width(precision: usize) -> usize {
    (precision + 6).max(11)
}

pub fn write_csv_header<W: Write>(fields: &CoordinateFields, writer: &mut W) -> io::Result<()> {
    let mut columns = Vec::new();
    if fields.input.is_some() {
        columns.push("input");
    }
    columns.push("latitude");
    columns.push("longitude");
    if fields.formats.is_some() {
        columns.push("latitude_format");
        columns.push("longitude_format");
    }
    writeln!(writer, "{}", columns.join(","))
}

pub fn write_csv_row<W: Write>(
    fields: &CoordinateFields,
    precision: usize,
    writer: &mut W,
) -> io::Result<()> {
    let mut columns = Vec::new();
    if let Some(input) = fields.input {
        columns.push(csv_quote(input));
    }
    columns.push(format!("{:.*}", precision, fields.latitude));
    columns.push(format!("{:.*}", precision, fields.longitude));
    if let Some((lat_format, lon_format)) = fields.formats {
        columns.push(lat_format.label().to_string());
        columns.push(lon_format.label().to_string());
    }
    writeln!(writer, "{}", columns.join(","))
}

pub fn write_json_row<W: Write>(fields: &CoordinateFields, writer: &mut W) -> io::Result<()> {
    let mut members = Vec::new();
    if let Some(input) = fields.input {
        members.push(format!(r#""input":"{}""#, json_escape(input)));
    }
    members.push(format!(r#""latitude":{}"#, json_number(fields.latitude)));
    members.push(format!(r#""longitude":{}"#, json_number(fields.longitude)));
    if let Some((lat_format, lon_format)) = fields.formats {
        members.push(format!(r#""latitude_format":"{}""#, lat_format));
        members.push(format!(r#""longitude_format":"{}""#, lon_format));
    }
    writeln!(writer, "{{{}}}", members.join(","))
}

pub fn write_text_block<W: Write>(
    fields: &CoordinateFields,
    precision: usize,
    writer: &mut W,
) -> io::Result<()> {
    if let Some(input) = fields.input {
        writeln!(writer, "  Input:      {}", input)?;
    }
    writeln!(writer, "  Latitude:   {:.*}°", precision, fields.latitude)?;
    writeln!(writer, "  Longitude:  {:.*}°", precision, fields.longitude)?;
    if let Some((lat_format, lon_format)) = fields.formats {
        writeln!(writer, "  Format:     {} / {}", lat_format, lon_format)?;
    }
    Ok(())
}

pub fn write_text_table_header<W: Write>(
    fields: &CoordinateFields,
    precision: usize,
    writer: &mut W,
) -> io::Result<()> {
    let width = number_width(precision);
    let mut line = format!("{:>width$}  {:>width$}", "latitude", "longitude");
    if fields.formats.is_some() {
        line.push_str(&format!(
            "  {:<fw$}  {:<fw$}",
            "lat format",
            "lon format",
            fw = FORMAT_WIDTH
        ));
    }
    if fields.input.is_some() {
        line.push_str("  input");
    }
    writeln!(writer, "{}", line.trim_end())
}

pub fn write_text_table_row<W: Write>(
    fields: &CoordinateFields,
    precision: usize,
    writer: &mut W,
) -> io::Result<()> {
    let width = number_width(precision);
    let mut line = format!(
        "{:>width$.precision$}  {:>width$.precision$}",
        fields.latitude, fields.longitude
    );
    if let Some((lat_format, lon_format)) = fields.formats {
        line.push_str(&format!(
            "  {:<fw$}  {:<fw$}",
            lat_format.label(),
            lon_format.label(),
            fw = FORMAT_WIDTH
        ));
    }
    if let Some(input) = fields.input {
        line.push_str("  ");
        line.push_str(&fit_width(input, MAX_INPUT_WIDTH));
    }
    writeln!(writer, "{}", line.trim_end())
}

pub fn dispatch_output(
    results: RecordStream,
    params: &Parameters,
    plan: &OutputPlan,
) -> Result<usize, OutputError> {
    // Stdout itself rather than a lock: ArrowWriter needs a Send writer.
    let mut writer = BufWriter::new(io::stdout());
    let flush_each = plan.flush_each_record;

    let count = match params.output.format {
        OutputFormat::Text => {
            TextFormatter::new(&mut writer, &params.output, plan.tabular, flush_each)
                .write(results)?
        }
        OutputFormat::Csv => {
            CsvFormatter::new(&mut writer, &params.output, flush_each).write(results)?
        }
        OutputFormat::Json => {
            JsonFormatter::new(&mut writer, &params.output, flush_each).write(results)?
        }
        #[cfg(feature = "parquet")]
        OutputFormat::Parquet => {
            crate::parquet::write_parquet(results, &params.output, &mut writer)?
        }
    };

    writer.flush()?;
    Ok(count)
}
