use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

mod cmd;
mod config;

fn cli() -> Command {
    Command::new("quill")
        .about("Format markdown articles as inline-styled, themed HTML")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log progress to stderr (repeat for more detail)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(cmd::format::make_subcommand())
        .subcommand(cmd::build::make_subcommand())
        .subcommand(cmd::skill::make_subcommand())
}

fn init_tracing(verbose: u8) {
    // -v enables INFO, -vv DEBUG, otherwise RUST_LOG or WARN
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    // stdout is reserved for command output (JSON for `skill`)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("format", args)) => cmd::format::execute(args),
        Some(("build", args)) => cmd::build::execute(args),
        Some(("skill", args)) => cmd::skill::execute(args),
        _ => unreachable!("subcommand_required is set"),
    }
}
