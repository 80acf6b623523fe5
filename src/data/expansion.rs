use super::types::{DataSource, InputPath, InputRecord, InputStream};
use std::fs::File;
use std::io::{self, BufRead, BufReader};

fn open_input(input_path: &InputPath) -> io::Result<Box<dyn BufRead>> {
    match input_path {
        InputPath::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
        InputPath::File(path) => {
            let file = File::open(path)?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Yields one record per non-blank, non-comment line; stops after a read error.
fn line_records(reader: Box<dyn BufRead>, path_display: String) -> InputStream {
    let mut lines = reader.lines().enumerate();
    let mut finished = false;

    Box::new(std::iter::from_fn(move || {
        if finished {
            return None;
        }

        for (idx, line_result) in lines.by_ref() {
            let line_number = idx + 1;
            let line = match line_result {
                Ok(l) => l,
                Err(e) => {
                    finished = true;
                    return Some(Err(format!(
                        "{}:{}: failed to read line: {}",
                        path_display, line_number, e
                    )));
                }
            };

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            return Some(Ok(InputRecord {
                origin: format!("{}:{}", path_display, line_number),
                text: trimmed.to_string(),
            }));
        }

        None
    }))
}

pub fn expand_data_source(source: DataSource) -> Result<InputStream, String> {
    match source {
        DataSource::Literal(text) => Ok(Box::new(std::iter::once(Ok(InputRecord {
            origin: "argument".to_string(),
            text,
        })))),
        DataSource::File(input_path) => {
            let path_display = input_path.display_name();
            let reader = open_input(&input_path)
                .map_err(|e| format!("Error opening {}: {}", path_display, e))?;
            Ok(line_records(reader, path_display))
        }
    }
}
