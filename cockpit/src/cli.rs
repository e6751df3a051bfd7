use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cockpit", version, about = "Macro & Web3 strategic cockpit signals")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Re-read the documents on a fixed interval and log alerts
    Watch {
        /// Override REFRESH_INTERVAL_SECS
        #[arg(long)]
        interval_secs: Option<u64>,
    },

    /// Run a single refresh and print the dashboard
    Once {
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask CI to run the data collection workflow now
    Trigger,
}

impl Cli {
    /// `watch` with the configured interval when no subcommand is given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Watch {
            interval_secs: None,
        })
    }
}
