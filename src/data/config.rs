use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PRECISION: usize = 6;
pub const MAX_PRECISION: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
    #[cfg(feature = "parquet")]
    Parquet,
}

impl OutputFormat {
    #[allow(unused_mut)]
    pub fn all() -> Vec<&'static str> {
        let mut formats = vec!["text", "csv", "json"];
        #[cfg(feature = "parquet")]
        formats.push("parquet");
        formats
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            #[cfg(feature = "parquet")]
            "parquet" => Ok(OutputFormat::Parquet),
            _ => Err(format!(
                "Invalid format: {}. Supported formats: {}",
                s,
                OutputFormat::all().join(", ")
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            #[cfg(feature = "parquet")]
            OutputFormat::Parquet => "parquet",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub headers: bool,
    pub show_inputs: Option<bool>,
    pub explain: bool,
    pub precision: usize,
}

impl OutputOptions {
    pub fn should_show_inputs(&self) -> bool {
        self.show_inputs.unwrap_or(false)
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            headers: true,
            show_inputs: None,
            explain: false,
            precision: DEFAULT_PRECISION,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Parameters {
    pub output: OutputOptions,
    pub skip_invalid: bool,
    pub perf: bool,
}
