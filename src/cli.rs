use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "feedview", version, about = "Inspect the feeds front end configuration")]
pub struct Cli {
    /// Turn on debug mode and debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every catalog value as JSON
    Catalog,
    /// Print the default display preferences as JSON
    Preferences {
        /// Override the default sort key, e.g. -date_published
        #[arg(long, allow_hyphen_values = true)]
        sort: Option<String>,
        /// Override the default view style
        #[arg(long)]
        view: Option<String>,
    },
    /// Print the local link of an entry
    Link { id: i64 },
    /// Print search suggestions containing the input
    Suggest {
        #[arg(default_value = "")]
        input: String,
    },
}
