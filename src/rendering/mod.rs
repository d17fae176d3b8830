use macroquad::prelude::*;

use crate::application::Session;
use crate::domain::CellsView;
use crate::ui::{Button, CELL_PITCH, CELL_SIZE, PANEL_WIDTH, grid_pixel_size, panel_x};

const GRID_COLOR: Color = Color::new(0.157, 0.161, 0.173, 1.0);
const ALIVE_COLOR: Color = Color::new(0.690, 0.706, 0.725, 1.0);
const DEAD_COLOR: Color = BLACK;

/// Draw the grid lines around every cell
pub fn draw_grid_lines(width: u32, height: u32) {
    let (grid_w, grid_h) = grid_pixel_size(width, height);

    for i in 0..=width {
        let x = i as f32 * CELL_PITCH + 0.5;
        draw_line(x, 0.0, x, grid_h, 1.0, GRID_COLOR);
    }
    for j in 0..=height {
        let y = j as f32 * CELL_PITCH + 0.5;
        draw_line(0.0, y, grid_w, y, 1.0, GRID_COLOR);
    }
}

/// Draw every cell straight from the exported view
pub fn draw_cells(view: CellsView<'_>) {
    for (row, line) in view.rows().enumerate() {
        for (col, cell) in line.iter().enumerate() {
            let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
            draw_rectangle(
                col as f32 * CELL_PITCH + 1.0,
                row as f32 * CELL_PITCH + 1.0,
                CELL_SIZE,
                CELL_SIZE,
                color,
            );
        }
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons and session info
pub fn draw_controls(session: &Session, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();
    let universe = &session.universe;
    let status_color = if session.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let labels: [(String, f32, f32, Color); 12] = [
        (format!("Grid: {}x{}", universe.width(), universe.height()), 290.0, 14.0, GRAY),
        (format!("Seed: {}", universe.seed().name()), 306.0, 14.0, GRAY),
        (universe.seed().description().to_string(), 320.0, 12.0, GRAY),
        (format!("Stepping: {}", universe.algorithm().name()), 336.0, 14.0, GRAY),
        (format!("Speed: {:.0} gen/s", session.updates_per_second), 356.0, 16.0, WHITE),
        (format!("Generation: {}", universe.generation()), 380.0, 16.0, WHITE),
        (format!("Population: {}", universe.population()), 404.0, 16.0, WHITE),
        (
            (if session.is_running { "Running" } else { "Paused" }).to_string(),
            428.0,
            16.0,
            status_color,
        ),
        (
            format!("Tick: {:.2}ms  Draw: {:.1}ms", session.last_tick_time_ms, session.last_render_time_ms),
            452.0,
            12.0,
            GRAY,
        ),
        ("Space play  N step  R random".to_string(), 490.0, 12.0, GRAY),
        ("Home reset  C purge  A stepping".to_string(), 505.0, 12.0, GRAY),
        ("Up/Down speed".to_string(), 520.0, 12.0, GRAY),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px + 4.0, *y, *size, *color);
    });
}
