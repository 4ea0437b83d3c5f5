use {
    clap::{ArgAction, Parser, Subcommand},
    simplelog::LevelFilter,
    std::path::PathBuf,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,

    /// Increase the verbosity of the diagnostics written to stderr (-v, -vv, -vvv)
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Arguments {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reconstruct the first-order formula encoded in one or more instance exports
    Render {
        /// Print the formula with its exported identifiers instead of canonicalizing it
        #[arg(long, action)]
        raw: bool,

        /// The instance files or directories of instance files (reads stdin if omitted)
        inputs: Vec<PathBuf>,
    },

    /// List the labels of the formula nodes of an instance export
    Atoms {
        /// The instance file (reads stdin if omitted)
        input: Option<PathBuf>,
    },
}
