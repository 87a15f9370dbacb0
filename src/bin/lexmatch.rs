//! lexmatch command-line entry point.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use lexmatch::cli::args::*;
use lexmatch::cli::commands::*;

/// Map `-q`/`-v` to a log filter; warnings show by default.
fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn main() {
    let args = LexmatchArgs::parse();

    Builder::new()
        .filter_level(log_level(args.verbosity()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), LevelFilter::Error);
        assert_eq!(log_level(1), LevelFilter::Warn);
        assert_eq!(log_level(2), LevelFilter::Info);
        assert_eq!(log_level(5), LevelFilter::Debug);
    }
}
