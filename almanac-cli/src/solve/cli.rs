use clap::{Command, arg, value_parser};

pub use almanac_remap::consts::SOLVE_CMD;

pub fn create_solve_cli() -> Command {
    Command::new(SOLVE_CMD)
        .author("Almanac developers")
        .about("Find the lowest location reachable from the seeds of an almanac.")
        .arg_required_else_help(true)
        .arg(arg!(<input> "Path to the almanac (plain or gzipped), or - for stdin"))
        .arg(arg!(-p --part <part> "Which answer to compute (one, two or both)"))
        .arg(
            arg!(-t --threads <threads> "Worker threads for seed ranges")
                .value_parser(value_parser!(usize)),
        )
        .arg(arg!(--coalesce "Merge overlapping intervals after every stage"))
        .arg(arg!(-c --config <config> "TOML file with run options; flags take precedence"))
        .arg(arg!(--progress "Show a progress bar over seed ranges"))
}
