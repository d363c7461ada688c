mod solve;
mod trace;

#[cfg(test)]
mod test_utils;

use anyhow::Result;
use clap::Command;
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "almanac";
    pub const BIN_NAME: &str = "almanac";
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Almanac developers")
        .about("Push seeds and seed ranges through staged range remapping tables.")
        .subcommand_required(true)
        .subcommand(solve::cli::create_solve_cli())
        .subcommand(trace::cli::create_trace_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(consts::DEFAULT_LOG_LEVEL))
        .init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // SOLVE
        //
        Some((solve::cli::SOLVE_CMD, matches)) => {
            solve::handlers::run_solve(matches)?;
        }

        //
        // TRACE
        //
        Some((trace::cli::TRACE_CMD, matches)) => {
            trace::handlers::run_trace(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_is_well_formed() {
        build_parser().debug_assert();
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(build_parser().try_get_matches_from(["almanac"]).is_err());
    }
}
