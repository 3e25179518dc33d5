use clap::Parser;
use std::path::PathBuf;

/// Create environment file templates from compose files
#[derive(Parser, Debug)]
#[command(
    name = "env-from-compose",
    about = "Create environment file templates (.env.example) from compose files",
    version,
    long_about = "env-from-compose scans compose files for service environment entries \
                  whose values are supplied by an environment file (values starting with \
                  '$') and appends any names missing from that file as empty NAME= \
                  placeholders. Names defined in the file but no longer referenced by any \
                  compose file are reported as candidates for manual removal.",
    after_help = "The environment file is only ever appended to; existing lines are never \
                  rewritten or deleted.\n\
                  env-from-compose is made available under the terms of the Apache-2.0 license."
)]
pub struct CliArgs {
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Compose file(s) to be evaluated (repeat for multiple files)"
    )]
    pub input: Vec<PathBuf>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Environment file to be created or updated"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}
