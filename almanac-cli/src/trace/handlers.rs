use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::ArgMatches;

use almanac_core::models::Almanac;
use almanac_remap::trace;

pub fn run_trace(matches: &ArgMatches) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_traces(matches, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write one block per starting value: the value itself under the first
/// source category, then `<stage>\t<value>` for every stage. Blocks are
/// separated by a blank line.
pub fn write_traces<W: Write>(matches: &ArgMatches, writer: &mut W) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to an almanac is required.");
    let values = matches
        .get_many::<u64>("values")
        .expect("At least one value is required.");

    let almanac: Almanac<u64> = Almanac::from_input(input)?;
    let pipeline = &almanac.pipeline;
    let origin = pipeline
        .stages()
        .first()
        .and_then(|stage| stage.categories())
        .map_or("input", |(source, _)| source);

    for (i, &value) in values.enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "{}\t{}", origin, value)?;
        for step in trace(value, pipeline) {
            writeln!(writer, "{}\t{}", step.stage, step.value)?;
        }
    }

    Ok(())
}
