//! `tint` command-line entry point.

use std::io::{self, Write};
use std::process;

use tint::{init_tracing, run, CliError, Config, Invocation, USAGE};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            print!("{USAGE}");
            return;
        }
        Ok(Invocation::Version) => {
            println!("tint {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Err(e) => {
            eprintln!("tint: {e}");
            eprintln!();
            eprint!("{USAGE}");
            process::exit(2);
        }
    };

    let stdin = io::stdin().lock();
    let mut stdout = io::BufWriter::new(io::stdout().lock());
    let result = run(&config, stdin, &mut stdout)
        .and_then(|_| stdout.flush().map_err(CliError::Write));

    match result {
        Ok(_) => {}
        Err(e) if e.is_broken_pipe() => {}
        Err(e) => {
            eprintln!("tint: {e}");
            process::exit(if e.is_usage() { 2 } else { 1 });
        }
    }
}
