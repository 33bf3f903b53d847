use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use tint_core::Colorizer;

use crate::{CliError, Config, Input};

/// Totals for one invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub inputs: usize,
    pub lines: usize,
}

/// Colorize every configured input in order and write the result to `out`.
///
/// `stdin` is read for each `-` input; a second `-` finds it drained.
/// Stops at the first error. Does not flush `out`.
pub fn run<R, W>(config: &Config, mut stdin: R, out: &mut W) -> Result<Summary, CliError>
where
    R: BufRead,
    W: Write,
{
    let mut summary = Summary::default();
    for input in &config.inputs {
        let label = input.label();
        let lines = match input {
            Input::Stdin => colorize_stream(&config.kind, &mut stdin, out, &label)?,
            Input::File(path) => {
                let file = File::open(path).map_err(|source| CliError::Read {
                    input: label.clone(),
                    source,
                })?;
                colorize_stream(&config.kind, BufReader::new(file), out, &label)?
            }
        };
        tracing::debug!(input = %label, lines, colorizer = %config.kind, "colorized input");
        summary.inputs += 1;
        summary.lines += lines;
    }
    Ok(summary)
}

/// Colorize `reader` line by line into `out`, keeping line terminators.
/// Returns the number of lines written. `label` names the input in errors.
pub fn colorize_stream<R, W>(
    colorizer: &dyn Colorizer,
    mut reader: R,
    out: &mut W,
    label: &str,
) -> Result<usize, CliError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    let mut lines = 0;
    loop {
        line.clear();
        let read = reader.read_line(&mut line).map_err(|source| CliError::Read {
            input: label.to_owned(),
            source,
        })?;
        if read == 0 {
            return Ok(lines);
        }
        out.write_all(colorizer.colorize(&line).as_bytes())
            .map_err(CliError::Write)?;
        lines += 1;
    }
}
