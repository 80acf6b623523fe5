//! Parsing of input records with streaming architecture.

use crate::data::{InputRecord, InputStream};
use crate::error::RecordError;
use coordparse::{ParseReport, parse_detailed};

#[derive(Debug, Clone)]
pub struct ParsedRecord {
    pub input: String,
    pub report: ParseReport,
}

pub type RecordResult = Result<ParsedRecord, String>;
pub type RecordStream = Box<dyn Iterator<Item = RecordResult>>;

pub fn parse_record(record: InputRecord) -> Result<ParsedRecord, RecordError> {
    match parse_detailed(&record.text) {
        Ok(report) => Ok(ParsedRecord {
            input: record.text,
            report,
        }),
        Err(source) => Err(RecordError {
            origin: record.origin,
            source,
        }),
    }
}

/// Parses every record lazily. With `skip_invalid`, rejected inputs are
/// reported on stderr and dropped; otherwise they end the stream as errors.
pub fn parse_stream(inputs: InputStream, skip_invalid: bool) -> RecordStream {
    Box::new(inputs.filter_map(move |input| {
        let record = match input {
            Ok(record) => record,
            Err(e) => return Some(Err(e)),
        };

        match parse_record(record) {
            Ok(parsed) => Some(Ok(parsed)),
            Err(e) if skip_invalid => {
                eprintln!("Warning: {}", e);
                None
            }
            Err(e) => Some(Err(e.to_string())),
        }
    }))
}
