//! Render command - prints one flag SVG without starting a server

use std::io::Write;

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AppConfig;
use crate::domain::{Flag, FlagGenerator};
use crate::infrastructure::logging;
use crate::render;

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Seed for a reproducible flag
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the configured flag height
    #[arg(long)]
    pub height: Option<u32>,
}

/// Run the render command
pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load_or_default();
    logging::init_cli_logging("warn")?;

    if let Some(height) = args.height {
        config.flag.height = height;
    }

    let svg = render_flag(&config, args.seed)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", svg)?;

    Ok(())
}

fn render_flag(config: &AppConfig, seed: Option<u64>) -> anyhow::Result<String> {
    config.flag.validate()?;
    let generator = FlagGenerator::new(config.flag.dimensions()?, config.flag.component_range());

    let flag: Flag = match seed {
        Some(seed) => generator.generate(&mut StdRng::seed_from_u64(seed)),
        None => generator.generate(&mut rand::thread_rng()),
    };

    Ok(render::flag_svg(&flag))
}
