//! Driver configuration, built from command-line flags.

use cly_diagnostic::emitter::ColorMode;

use crate::DriverError;

/// How the input text is cut into compilation units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnitMode {
    /// Every non-blank line is parsed on its own.
    #[default]
    Line,
    /// The whole text is one unit.
    File,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    pub unit_mode: UnitMode,
    pub format: OutputFormat,
    pub color: ColorMode,
    /// Parse units on the rayon pool.
    pub parallel: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            unit_mode: UnitMode::Line,
            format: OutputFormat::Text,
            color: ColorMode::Auto,
            parallel: true,
        }
    }
}

/// A parsed `cly parse` command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseInvocation {
    pub path: String,
    pub config: DriverConfig,
}

/// Parse the arguments that follow `cly parse`.
///
/// Flags may come before or after the path. `-` reads standard input.
pub fn parse_options(args: &[String]) -> Result<ParseInvocation, DriverError> {
    let mut config = DriverConfig::default();
    let mut path = None;

    for arg in args {
        if let Some(unit) = arg.strip_prefix("--unit=") {
            config.unit_mode = match unit {
                "line" => UnitMode::Line,
                "file" => UnitMode::File,
                other => return Err(DriverError::usage(format!("invalid --unit value '{other}'"))),
            };
        } else if let Some(format) = arg.strip_prefix("--format=") {
            config.format = match format {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                other => {
                    return Err(DriverError::usage(format!("invalid --format value '{other}'")))
                }
            };
        } else if let Some(color) = arg.strip_prefix("--color=") {
            config.color = color
                .parse()
                .map_err(|()| DriverError::usage(format!("invalid --color value '{color}'")))?;
        } else if arg == "--no-parallel" {
            config.parallel = false;
        } else if arg == "-" || !arg.starts_with('-') {
            if path.is_some() {
                return Err(DriverError::usage(format!("unexpected argument '{arg}'")));
            }
            path = Some(arg.clone());
        } else {
            return Err(DriverError::usage(format!("unknown option '{arg}'")));
        }
    }

    let path = path.ok_or_else(|| DriverError::usage("missing file path"))?;
    Ok(ParseInvocation { path, config })
}
