use std::path::PathBuf;

use tint_core::ColorizerKind;

use crate::CliError;

/// Help text printed for `--help` and after usage errors.
pub const USAGE: &str = "\
Usage: tint [options] [FILE|-]...

Rewrite `&` color markup (legacy `&c`, `&#rrggbb`, `&##rgb`) into
marker-prefixed codes. Reads standard input when no FILE is given.

Options:
  --mode=<name>   Colorizer: advanced (default) or legacy
  --legacy        Same as --mode=legacy
  -h, --help      Print this help
  -V, --version   Print the version
";

/// One source of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Name used in error messages and logs.
    pub fn label(&self) -> String {
        match self {
            Input::Stdin => "-".to_owned(),
            Input::File(path) => path.display().to_string(),
        }
    }
}

/// A parsed `tint` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Colorizer to run.
    pub kind: ColorizerKind,
    /// Inputs in command-line order. Never empty after parsing.
    pub inputs: Vec<Input>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            kind: ColorizerKind::default(),
            inputs: vec![Input::Stdin],
        }
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
    Version,
}

impl Config {
    /// Parse arguments (program name already stripped).
    ///
    /// `--help` and `--version` win as soon as they are seen. Arguments after
    /// `--` are always treated as file paths.
    pub fn from_args<I, S>(args: I) -> Result<Invocation, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kind = ColorizerKind::default();
        let mut inputs = Vec::new();
        let mut only_paths = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            if only_paths {
                inputs.push(Input::File(PathBuf::from(arg)));
                continue;
            }
            match arg {
                "-h" | "--help" => return Ok(Invocation::Help),
                "-V" | "--version" => return Ok(Invocation::Version),
                "--legacy" => kind = ColorizerKind::Legacy,
                "--mode" => {
                    let Some(value) = args.next() else {
                        return Err(CliError::MissingValue("--mode"));
                    };
                    kind = value.as_ref().parse()?;
                }
                "--" => only_paths = true,
                "-" => inputs.push(Input::Stdin),
                _ => {
                    if let Some(value) = arg.strip_prefix("--mode=") {
                        kind = value.parse()?;
                    } else if arg.starts_with('-') {
                        return Err(CliError::UnknownOption(arg.to_owned()));
                    } else {
                        inputs.push(Input::File(PathBuf::from(arg)));
                    }
                }
            }
        }

        if inputs.is_empty() {
            inputs.push(Input::Stdin);
        }
        Ok(Invocation::Run(Config { kind, inputs }))
    }
}

#[cfg(test)]
mod tests;
