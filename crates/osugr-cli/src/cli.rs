//! CLI argument definitions for osugr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "osugr")]
#[command(about = "osu! difficulty, judgement and mod calculator", version)]
pub struct Args {
    /// Game rule config file (TOML)
    #[arg(short, long, global = true, value_name = "FILE", env = "OSUGR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show approach time for an approach rate
    Ar {
        /// Approach rate (0-10, extrapolated outside)
        #[arg(allow_negative_numbers = true)]
        value: f32,
        /// Treat the value as an approach time in ms
        #[arg(long)]
        inverse: bool,
        /// Mods, e.g. "HD,HR" or "MILL"
        #[arg(short, long)]
        mods: Option<String>,
        /// Playback speed multiplier
        #[arg(short, long, default_value = "1.0")]
        speed: f32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show hit windows for an overall difficulty
    Od {
        /// Overall difficulty (0-10, extrapolated outside)
        #[arg(allow_negative_numbers = true)]
        value: f32,
        /// Treat the value as a 300 hit window in ms
        #[arg(long)]
        inverse: bool,
        /// Mods, e.g. "HR" or "ODLOCK"
        #[arg(short, long)]
        mods: Option<String>,
        /// Playback speed multiplier
        #[arg(short, long, default_value = "1.0")]
        speed: f32,
        /// Round windows like osu!stable
        #[arg(long)]
        stable: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Judge a timing delta (observed - expected, ms)
    Judge {
        #[arg(allow_negative_numbers = true)]
        delta: f32,
        /// Overall difficulty
        #[arg(long, default_value = "5.0")]
        od: f32,
        /// Mods, e.g. "HW,NO50"
        #[arg(short, long)]
        mods: Option<String>,
        /// Round windows like osu!stable
        #[arg(long)]
        stable: bool,
    },
    /// Translate between mod lists and legacy bits
    Mods {
        #[command(subcommand)]
        action: ModsAction,
    },
    /// Print the effective game rule config
    Config {
        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ModsAction {
    /// Mod list -> legacy bits
    Encode {
        /// Mods, e.g. "HD,NPC,MRH"
        mods: String,
        /// Playback speed multiplier
        #[arg(short, long, default_value = "1.0")]
        speed: f32,
    },
    /// Legacy bits (decimal or 0x hex) -> mod list
    Decode { bits: String },
}
