use clap::{Parser, ValueEnum};

use crate::domain::{Algorithm, SeedLayout, UniverseConfig, presets};

/// Command-line options for the windowed host.
#[derive(Parser, Debug, Clone)]
#[command(name = "life_universe", about = "Conway's Game of Life on a toroidal universe")]
pub struct HostArgs {
    /// Universe width in cells
    #[arg(long, default_value_t = 64)]
    pub width: u32,

    /// Universe height in cells
    #[arg(long, default_value_t = 64)]
    pub height: u32,

    /// Layout the universe starts from and returns to on reset
    #[arg(short, long, value_enum, default_value_t = SeedKind::GliderGun)]
    pub seed: SeedKind,

    /// Generations per second while playing (1-60)
    #[arg(long, default_value_t = 10.0, value_parser = parse_speed)]
    pub speed: f32,

    /// Step rows in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_speed(value: &str) -> Result<f32, String> {
    let speed: f32 = value.parse().map_err(|err| format!("{err}"))?;
    if speed.is_finite() && (1.0..=60.0).contains(&speed) {
        Ok(speed)
    } else {
        Err(format!("{value} is not a speed between 1 and 60"))
    }
}

impl HostArgs {
    pub fn universe_config(&self) -> UniverseConfig {
        let algorithm = if self.parallel {
            Algorithm::Parallel
        } else {
            Algorithm::Sequential
        };
        UniverseConfig::new(self.width, self.height)
            .with_seed(self.seed.layout())
            .with_algorithm(algorithm)
    }

    /// Default log filter when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Named seed layouts selectable from the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedKind {
    Empty,
    Glider,
    Blinker,
    Toad,
    Pulsar,
    GliderGun,
    RPentomino,
    Acorn,
    Block,
}

impl SeedKind {
    pub fn layout(self) -> SeedLayout {
        let pattern = match self {
            SeedKind::Empty => return SeedLayout::Empty,
            SeedKind::Glider => presets::glider(),
            SeedKind::Blinker => presets::blinker(),
            SeedKind::Toad => presets::toad(),
            SeedKind::Pulsar => presets::pulsar(),
            SeedKind::GliderGun => presets::glider_gun(),
            SeedKind::RPentomino => presets::r_pentomino(),
            SeedKind::Acorn => presets::acorn(),
            SeedKind::Block => presets::block(),
        };
        SeedLayout::Centered(pattern)
    }
}
