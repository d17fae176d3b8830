use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use life_universe::{HostArgs, Session, Universe, input, rendering, ui};

static ARGS: OnceLock<HostArgs> = OnceLock::new();

/// Command line, parsed on first use and shared by `window_conf` and `main`
fn args() -> &'static HostArgs {
    ARGS.get_or_init(HostArgs::parse)
}

fn window_conf() -> Conf {
    let args = args();
    let (window_width, window_height) = ui::window_size(args.width, args.height);
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = args();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(args).await {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run(args: &HostArgs) -> anyhow::Result<()> {
    let config = args.universe_config();
    let universe = Universe::from_config(&config).context("failed to create universe")?;
    tracing::info!(
        width = config.width,
        height = config.height,
        seed = config.seed.name(),
        "starting session"
    );

    let mut session = Session::new(universe).with_speed(args.speed);

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        session = input::process_button_clicks(session, &buttons, mouse_pos);
        input::handle_cell_click(&mut session, mouse_pos);
        session = input::process_keyboard_input(session);

        session = session.tick(get_frame_time());

        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        let universe = &session.universe;
        rendering::draw_grid_lines(universe.width(), universe.height());
        rendering::draw_cells(universe.cells());
        rendering::draw_controls(&session, &buttons, mouse_pos);
        session.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
