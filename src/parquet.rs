//! Parquet output format support.

use crate::compute::RecordStream;
use crate::data::config::OutputOptions;
use crate::output::coordinate_fields;
use arrow::array::{ArrayRef, Float64Builder, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::io::Write;
use std::sync::Arc;

const BATCH_SIZE: usize = 8192;

struct ColumnBuilders {
    input: Option<StringBuilder>,
    latitude: Float64Builder,
    longitude: Float64Builder,
    latitude_format: Option<StringBuilder>,
    longitude_format: Option<StringBuilder>,
}

impl ColumnBuilders {
    fn new(show_inputs: bool, explain: bool) -> Self {
        Self {
            input: show_inputs.then(|| StringBuilder::with_capacity(BATCH_SIZE, BATCH_SIZE * 24)),
            latitude: Float64Builder::with_capacity(BATCH_SIZE),
            longitude: Float64Builder::with_capacity(BATCH_SIZE),
            latitude_format: explain.then(|| StringBuilder::with_capacity(BATCH_SIZE, BATCH_SIZE * 10)),
            longitude_format: explain.then(|| StringBuilder::with_capacity(BATCH_SIZE, BATCH_SIZE * 10)),
        }
    }

    /// Drains the builders into arrays in schema order.
    fn finish(&mut self) -> Vec<ArrayRef> {
        let mut arrays: Vec<ArrayRef> = Vec::new();
        if let Some(b) = self.input.as_mut() {
            arrays.push(Arc::new(b.finish()) as ArrayRef);
        }
        arrays.push(Arc::new(self.latitude.finish()) as ArrayRef);
        arrays.push(Arc::new(self.longitude.finish()) as ArrayRef);
        if let Some(b) = self.latitude_format.as_mut() {
            arrays.push(Arc::new(b.finish()) as ArrayRef);
        }
        if let Some(b) = self.longitude_format.as_mut() {
            arrays.push(Arc::new(b.finish()) as ArrayRef);
        }
        arrays
    }
}

fn build_schema(show_inputs: bool, explain: bool) -> Arc<Schema> {
    let mut fields = Vec::new();

    if show_inputs {
        fields.push(Field::new("input", DataType::Utf8, false));
    }
    fields.push(Field::new("latitude", DataType::Float64, false));
    fields.push(Field::new("longitude", DataType::Float64, false));
    if explain {
        fields.push(Field::new("latitude_format", DataType::Utf8, false));
        fields.push(Field::new("longitude_format", DataType::Utf8, false));
    }

    Arc::new(Schema::new(fields))
}

fn flush_batch<W: Write + Send>(
    writer: &mut ArrowWriter<W>,
    schema: &Arc<Schema>,
    builders: &mut ColumnBuilders,
) -> std::io::Result<()> {
    let batch = RecordBatch::try_new(schema.clone(), builders.finish())
        .map_err(|e| std::io::Error::other(format!("Failed to create batch: {}", e)))?;

    writer
        .write(&batch)
        .map_err(|e| std::io::Error::other(format!("Failed to write batch: {}", e)))
}

pub fn write_parquet<W: Write + Send>(
    results: RecordStream,
    options: &OutputOptions,
    writer: W,
) -> std::io::Result<usize> {
    let show_inputs = options.should_show_inputs();
    let explain = options.explain;

    let schema = build_schema(show_inputs, explain);
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();

    let mut parquet_writer = ArrowWriter::try_new(writer, schema.clone(), Some(props))
        .map_err(|e| std::io::Error::other(format!("Parquet writer error: {}", e)))?;

    let mut builders = ColumnBuilders::new(show_inputs, explain);
    let mut batch_count = 0;
    let mut total_count = 0;

    for result in results {
        let record = result.map_err(std::io::Error::other)?;
        let fields = coordinate_fields(&record, options);

        if let (Some(b), Some(input)) = (builders.input.as_mut(), fields.input) {
            b.append_value(input);
        }
        builders.latitude.append_value(fields.latitude);
        builders.longitude.append_value(fields.longitude);
        if let Some((lat_format, lon_format)) = fields.formats {
            if let Some(b) = builders.latitude_format.as_mut() {
                b.append_value(lat_format.label());
            }
            if let Some(b) = builders.longitude_format.as_mut() {
                b.append_value(lon_format.label());
            }
        }

        batch_count += 1;
        total_count += 1;

        if batch_count >= BATCH_SIZE {
            flush_batch(&mut parquet_writer, &schema, &mut builders)?;
            batch_count = 0;
        }
    }

    if batch_count > 0 {
        flush_batch(&mut parquet_writer, &schema, &mut builders)?;
    }

    let mut inner = parquet_writer
        .into_inner()
        .map_err(|e| std::io::Error::other(format!("Failed to close parquet: {}", e)))?;
    inner.flush()?;

    Ok(total_count)
}
