use super::{
    coordinate_fields, write_csv_header, write_csv_row, write_json_row, write_text_block,
    write_text_table_header, write_text_table_row,
};
use crate::compute::RecordStream;
use crate::data::config::OutputOptions;
use std::io::Write;

pub trait Formatter {
    fn write(&mut self, results: RecordStream) -> Result<usize, String>;
}

pub struct CsvFormatter<'a, W: Write> {
    writer: &'a mut W,
    options: &'a OutputOptions,
    flush_each: bool,
}

impl<'a, W: Write> CsvFormatter<'a, W> {
    pub fn new(writer: &'a mut W, options: &'a OutputOptions, flush_each: bool) -> Self {
        Self {
            writer,
            options,
            flush_each,
        }
    }
}

impl<'a, W: Write> Formatter for CsvFormatter<'a, W> {
    fn write(&mut self, results: RecordStream) -> Result<usize, String> {
        let mut count = 0;
        for (index, result_or_err) in results.enumerate() {
            let record = result_or_err?;
            let fields = coordinate_fields(&record, self.options);
            if index == 0 && self.options.headers {
                write_csv_header(&fields, self.writer).map_err(|e| e.to_string())?;
            }
            write_csv_row(&fields, self.options.precision, self.writer)
                .map_err(|e| e.to_string())?;
            count += 1;
            if self.flush_each {
                self.writer.flush().map_err(|e| e.to_string())?;
            }
        }
        Ok(count)
    }
}

pub struct JsonFormatter<'a, W: Write> {
    writer: &'a mut W,
    options: &'a OutputOptions,
    flush_each: bool,
}

impl<'a, W: Write> JsonFormatter<'a, W> {
    pub fn new(writer: &'a mut W, options: &'a OutputOptions, flush_each: bool) -> Self {
        Self {
            writer,
            options,
            flush_each,
        }
    }
}

impl<'a, W: Write> Formatter for JsonFormatter<'a, W> {
    fn write(&mut self, results: RecordStream) -> Result<usize, String> {
        let mut count = 0;
        for result_or_err in results {
            let record = result_or_err?;
            let fields = coordinate_fields(&record, self.options);
            write_json_row(&fields, self.writer).map_err(|e| e.to_string())?;
            count += 1;
            if self.flush_each {
                self.writer.flush().map_err(|e| e.to_string())?;
            }
        }
        Ok(count)
    }
}

pub struct TextFormatter<'a, W: Write> {
    writer: &'a mut W,
    options: &'a OutputOptions,
    tabular: bool,
    flush_each: bool,
}

impl<'a, W: Write> TextFormatter<'a, W> {
    pub fn new(
        writer: &'a mut W,
        options: &'a OutputOptions,
        tabular: bool,
        flush_each: bool,
    ) -> Self {
        Self {
            writer,
            options,
            tabular,
            flush_each,
        }
    }
}

impl<'a, W: Write> Formatter for TextFormatter<'a, W> {
    fn write(&mut self, results: RecordStream) -> Result<usize, String> {
        let precision = self.options.precision;
        let mut count = 0;
        for (index, result_or_err) in results.enumerate() {
            let record = result_or_err?;
            let fields = coordinate_fields(&record, self.options);
            if self.tabular {
                if index == 0 {
                    write_text_table_header(&fields, precision, self.writer)
                        .map_err(|e| e.to_string())?;
                }
                write_text_table_row(&fields, precision, self.writer)
                    .map_err(|e| e.to_string())?;
            } else {
                write_text_block(&fields, precision, self.writer).map_err(|e| e.to_string())?;
            }
            count += 1;
            if self.flush_each {
                self.writer.flush().map_err(|e| e.to_string())?;
            }
        }
        Ok(count)
    }
}
