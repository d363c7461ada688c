use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use log::info;

use almanac_core::models::Almanac;
use almanac_remap::{Part, RemapConfig, Solver};

pub fn run_solve(matches: &ArgMatches) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_solution(matches, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Solve the almanac named in `matches` and write the answers, one per line.
pub fn write_solution<W: Write>(matches: &ArgMatches, writer: &mut W) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to an almanac is required.");

    let config = resolve_config(matches)?;
    info!("Solving {} with {:?}", input, config);

    let almanac: Almanac<u64> = Almanac::from_input(input)?;
    let solution = Solver::new(&almanac, config).solve()?;

    writeln!(writer, "{}", solution)?;
    Ok(())
}

/// Start from the config file, if any, then apply command line flags on top.
fn resolve_config(matches: &ArgMatches) -> Result<RemapConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => RemapConfig::try_from(Path::new(path))?,
        None => RemapConfig::default(),
    };

    if let Some(part) = matches.get_one::<String>("part") {
        config.part = part.parse::<Part>()?;
    }
    if let Some(&threads) = matches.get_one::<usize>("threads") {
        if threads == 0 {
            anyhow::bail!("--threads must be at least 1");
        }
        config.threads = Some(threads);
    }
    if matches.get_flag("coalesce") {
        config.coalesce = true;
    }
    if matches.get_flag("progress") {
        config.progress = true;
    }

    Ok(config)
}
