// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;
use feedview::constants::app::{DEBUG_LOG_FILTER, DEFAULT_LOG_FILTER};
use feedview::{Catalog, Registry, entry_local_link, matching_suggestions};

mod cli;
use cli::{Cli, Command};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        DEBUG_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let mut registry: Registry = Registry::new();
    registry.set_debug_mode(cli.debug);
    registry.debug(&format!("running {:?}", cli.command));

    match cli.command {
        Command::Catalog => {
            println!("{}", serde_json::to_string_pretty(&Catalog::new())?);
        }
        Command::Preferences { sort, view } => {
            if let Some(sort) = sort {
                registry.set_sort_function(sort.parse()?);
            }
            if let Some(view) = view {
                registry.set_view_display_type(view.parse()?);
            }
            println!("{}", serde_json::to_string_pretty(registry.preferences())?);
        }
        Command::Link { id } => {
            println!("{}", entry_local_link(id));
        }
        Command::Suggest { input } => {
            let suggestions = matching_suggestions(&input);
            registry.debug(&format!(
                "{} suggestions match {:?}",
                suggestions.len(),
                input
            ));
            for suggestion in suggestions {
                println!("{}", suggestion);
            }
        }
    }

    Ok(())
}
