//! CLI module for the flag generator
//!
//! Provides subcommands:
//! - `serve`: run the web server (default)
//! - `render`: print a single random flag SVG to stdout

pub mod render;
pub mod serve;

use clap::{Parser, Subcommand};

/// Flag Generator - random SVG flags with click-to-swap components
#[derive(Parser)]
#[command(name = "flag-generator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server (default)
    Serve,

    /// Print one random flag as SVG
    Render(render::RenderArgs),
}
