mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Args, Command, ModsAction};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides the warn default
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("osugr=warn,osugr_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let rules = commands::load_rules(args.config.as_deref())?;

    match args.command {
        Some(Command::Ar {
            value,
            inverse,
            mods,
            speed,
            json,
        }) => {
            let rating = if inverse {
                rules.config().approach_time.inverse(value)
            } else {
                value
            };
            commands::ar::run(&rules, rating, mods.as_deref(), speed, json)
        }
        Some(Command::Od {
            value,
            inverse,
            mods,
            speed,
            stable,
            json,
        }) => {
            let rating = if inverse {
                rules.config().hit_window_300.inverse(value)
            } else {
                value
            };
            commands::od::run(&rules, rating, mods.as_deref(), speed, stable, json)
        }
        Some(Command::Judge {
            delta,
            od,
            mods,
            stable,
        }) => commands::judge::run(&rules, delta, od, mods.as_deref(), stable),
        Some(Command::Mods { action }) => match action {
            ModsAction::Encode { mods, speed } => commands::mods::encode(&mods, speed),
            ModsAction::Decode { bits } => commands::mods::decode(&bits),
        },
        Some(Command::Config { json }) => commands::config::run(&rules, json),
        None => {
            Args::command().print_help()?;
            Ok(())
        }
    }
}
