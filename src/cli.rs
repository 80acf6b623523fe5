//! Command-line parsing and validation.

use crate::data::config::MAX_PRECISION;
use crate::data::{DataSource, InputPath, OutputFormat, Parameters};
use crate::error::CliError;
use std::collections::HashSet;
use std::path::PathBuf;

type CliResult<T> = Result<T, CliError>;

type ApplyFn = fn(Option<&str>, &mut Parameters) -> CliResult<()>;

enum OptKind {
    Value(ApplyFn),
    Flag(ApplyFn),
}

struct OptionSpec {
    name: &'static str,
    kind: OptKind,
}

const OPTION_SPECS: &[OptionSpec] = &[
    OptionSpec {
        name: "format",
        kind: OptKind::Value(|value, params| {
            let v = required_value("format", value)?;
            params.output.format = v.parse::<OutputFormat>().map_err(CliError::from)?;
            Ok(())
        }),
    },
    OptionSpec {
        name: "precision",
        kind: OptKind::Value(|value, params| {
            let v = required_value("precision", value)?;
            params.output.precision = parse_precision(v)?;
            Ok(())
        }),
    },
    OptionSpec {
        name: "headers",
        kind: OptKind::Flag(|_, params| {
            params.output.headers = true;
            Ok(())
        }),
    },
    OptionSpec {
        name: "no-headers",
        kind: OptKind::Flag(|_, params| {
            params.output.headers = false;
            Ok(())
        }),
    },
    OptionSpec {
        name: "show-inputs",
        kind: OptKind::Flag(|_, params| {
            params.output.show_inputs = Some(true);
            Ok(())
        }),
    },
    OptionSpec {
        name: "no-show-inputs",
        kind: OptKind::Flag(|_, params| {
            params.output.show_inputs = Some(false);
            Ok(())
        }),
    },
    OptionSpec {
        name: "explain",
        kind: OptKind::Flag(|_, params| {
            params.output.explain = true;
            Ok(())
        }),
    },
    OptionSpec {
        name: "skip-invalid",
        kind: OptKind::Flag(|_, params| {
            params.skip_invalid = true;
            Ok(())
        }),
    },
    OptionSpec {
        name: "perf",
        kind: OptKind::Flag(|_, params| {
            params.perf = true;
            Ok(())
        }),
    },
    OptionSpec {
        name: "help",
        kind: OptKind::Flag(|_, _| Err(CliError::Exit(get_help_text()))),
    },
    OptionSpec {
        name: "version",
        kind: OptKind::Flag(|_, _| Err(CliError::Exit(get_version_text()))),
    },
];

pub fn parse_cli(args: Vec<String>) -> CliResult<(DataSource, Parameters)> {
    if args.len() < 2 {
        return Err(CliError::Exit(
            "Usage: coordparse [OPTIONS] <coordinate>... | @file".to_string(),
        ));
    }

    let mut params = Parameters::default();
    let mut positional = Vec::new();
    let mut applied_options: HashSet<&'static str> = HashSet::new();
    let mut options_done = false;

    for arg in args.into_iter().skip(1) {
        if options_done {
            positional.push(arg);
            continue;
        }
        if arg == "--" {
            options_done = true;
            continue;
        }
        if let Some(stripped) = arg.strip_prefix("--") {
            let (name, value) = stripped
                .split_once('=')
                .map(|(n, v)| (n, Some(v)))
                .unwrap_or((stripped, None));
            apply_option(name, value, &mut params, &mut applied_options)?;
        } else {
            positional.push(arg);
        }
    }

    if positional.first().is_some_and(|first| first == "help") {
        return Err(CliError::Exit(get_help_text()));
    }

    let data_source = parse_data_source(&positional)?;

    validate_options(&data_source, &applied_options)?;

    if params.output.show_inputs.is_none() {
        params.output.show_inputs = Some(data_source.is_batch());
    }

    Ok((data_source, params))
}

fn parse_precision(value: &str) -> CliResult<usize> {
    let precision = value
        .parse::<usize>()
        .map_err(|_| CliError::from(format!("Invalid precision value: {}", value)))?;
    if precision > MAX_PRECISION {
        return Err(format!(
            "Precision must be between 0 and {}, got {}",
            MAX_PRECISION, precision
        )
        .into());
    }
    Ok(precision)
}

fn apply_option(
    name: &str,
    value: Option<&str>,
    params: &mut Parameters,
    applied: &mut HashSet<&'static str>,
) -> CliResult<()> {
    let Some(spec) = OPTION_SPECS.iter().find(|s| s.name == name) else {
        return Err(format!("Unknown option: --{}", name).into());
    };

    match spec.kind {
        OptKind::Value(handler) => {
            let val = required_value(spec.name, value)?;
            handler(Some(val), params)?;
        }
        OptKind::Flag(handler) => {
            if value.is_some() {
                return Err(format!("Option --{} does not take a value", spec.name).into());
            }
            handler(None, params)?;
        }
    }

    applied.insert(spec.name);
    Ok(())
}

fn required_value<'a>(flag: &'static str, value: Option<&'a str>) -> CliResult<&'a str> {
    value.ok_or_else(|| CliError::from(format!("Option --{} requires a value", flag)))
}

fn parse_file_arg(arg: &str) -> CliResult<InputPath> {
    let Some(stripped) = arg.strip_prefix('@') else {
        return Err("Not a file argument".into());
    };

    match stripped {
        "" => Err("Missing file name after '@'".into()),
        "-" => Ok(InputPath::Stdin),
        path => Ok(InputPath::File(PathBuf::from(path))),
    }
}

fn parse_data_source(positional: &[String]) -> CliResult<DataSource> {
    if positional.is_empty() {
        return Err("No coordinate given".into());
    }

    let file_args = positional.iter().filter(|arg| arg.starts_with('@')).count();
    match (file_args, positional.len()) {
        (0, _) => Ok(DataSource::Literal(positional.join(" "))),
        (1, 1) => Ok(DataSource::File(parse_file_arg(&positional[0])?)),
        (1, _) => Err("A file argument (@file or @-) cannot be combined with coordinate text".into()),
        _ => Err("Only one file argument (@file or @-) is supported".into()),
    }
}

fn validate_options(source: &DataSource, applied: &HashSet<&'static str>) -> CliResult<()> {
    if applied.contains("skip-invalid") && !source.is_batch() {
        return Err("Option --skip-invalid requires file input (@file or @-)".into());
    }
    Ok(())
}

fn get_version_text() -> String {
    format!(
        "coordparse {}\n Build: {} ({})\n Built: {}\n Features: {}",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_PROFILE"),
        env!("BUILD_TARGET"),
        env!("BUILD_DATE"),
        env!("BUILD_FEATURES")
    )
}

fn get_help_text() -> String {
    let defaults = Parameters::default();
    let formats = OutputFormat::all().join(", ");
    format!(
        r#"coordparse {}
Converts free-form coordinate text into signed decimal degrees.

Usage:
  coordparse [OPTIONS] <coordinate>...
  coordparse [OPTIONS] @coords.txt
  cat coords.txt | coordparse [OPTIONS] @-

Examples:
  coordparse "40.7484, -73.9857"
  coordparse 40 26.767 N 79 58.933 W
  coordparse "40°44'54.84\" N 73°59'08.52\" W" --format=json
  coordparse 4026.767N 07958.933W --explain
  coordparse @coords.txt --format=csv --skip-invalid

Arguments:
  <coordinate>...    Coordinate text. Multiple arguments are joined with a
                     single space, so quoting is optional.
                       40.7484 -73.9857            decimal degrees
                       40 26.767 N 79 58.933 W     degrees and decimal minutes
                       40 26 46 N 79 58 56 W       degrees, minutes, seconds
                       4026.767 07958.933          packed DDMM.m
                       402646 0795856              packed DDMMSS
                     Letters N, S, E, W (and D) are allowed; S and W make
                     the respective axis negative. A number's own minus
                     sign is applied as well, so "-45 S" is +45.

  @coords.txt        File with one coordinate per line (or @- for stdin).
                     Blank lines and lines starting with # are ignored.

Options:
  --format=<format>     Output format: {}. Default: {}
  --precision=<digits>  Decimal places for text and CSV output (0-{}).
                        Default: {}
  --[no-]headers        Include headers in CSV output. Default: {}
  --[no-]show-inputs    Include the input text in output. Auto-enabled for
                        file input unless --no-show-inputs is used.
  --explain             Include how each axis was interpreted
                        (separated, decimal, packed-dm, packed-dms,
                        milliseconds).
  --skip-invalid        Report invalid lines on stderr and continue
                        (file input only).
  --perf                Print performance statistics to stderr.
  --help                Show this help message and exit.
  --version             Print version information and exit.
"#,
        env!("CARGO_PKG_VERSION"),
        formats,
        defaults.output.format,
        MAX_PRECISION,
        defaults.output.precision,
        defaults.output.headers
    )
}
