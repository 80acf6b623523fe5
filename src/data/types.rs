use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum InputPath {
    Stdin,
    File(PathBuf),
}

impl InputPath {
    pub fn display_name(&self) -> String {
        match self {
            InputPath::Stdin => "stdin".to_string(),
            InputPath::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Coordinate text given on the command line.
    Literal(String),
    /// One coordinate per line.
    File(InputPath),
}

impl DataSource {
    pub fn uses_stdin(&self) -> bool {
        matches!(self, DataSource::File(InputPath::Stdin))
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, DataSource::File(_))
    }
}

/// One coordinate string and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord {
    pub origin: String,
    pub text: String,
}

pub type InputResult = Result<InputRecord, String>;
pub type InputStream = Box<dyn Iterator<Item = InputResult>>;
