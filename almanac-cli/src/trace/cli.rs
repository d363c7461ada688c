use clap::{Command, arg, value_parser};

pub use almanac_remap::consts::TRACE_CMD;

pub fn create_trace_cli() -> Command {
    Command::new(TRACE_CMD)
        .author("Almanac developers")
        .about("Print the value after every stage for one or more starting values.")
        .arg_required_else_help(true)
        .arg(arg!(<input> "Path to the almanac (plain or gzipped), or - for stdin"))
        .arg(arg!(<values> ... "Values to trace").value_parser(value_parser!(u64)))
}
