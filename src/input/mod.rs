use macroquad::prelude::*;

use crate::application::Session;
use crate::ui::{Button, CELL_PITCH, PanelAction, grid_pixel_size};

/// Map a pixel position inside the grid area to `(row, col)`.
/// Positions past the last grid line clamp to the last row/column;
/// anything left of or above the grid, or right of/below its outer
/// edge, is not a cell.
pub fn cell_at(pos: (f32, f32), width: u32, height: u32) -> Option<(u32, u32)> {
    let (grid_w, grid_h) = grid_pixel_size(width, height);
    if pos.0 < 0.0 || pos.1 < 0.0 || pos.0 >= grid_w || pos.1 >= grid_h {
        return None;
    }
    let row = ((pos.1 / CELL_PITCH) as u32).min(height - 1);
    let col = ((pos.0 / CELL_PITCH) as u32).min(width - 1);
    Some((row, col))
}

/// Toggle the clicked cell, if the click landed on the grid
pub fn handle_cell_click(session: &mut Session, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    let (width, height) = (session.universe.width(), session.universe.height());
    let Some((row, col)) = cell_at(mouse_pos, width, height) else {
        return;
    };
    if let Err(err) = session.toggle_cell(row, col) {
        tracing::warn!("toggle rejected: {err}");
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(session: Session) -> Session {
    type KeyAction = (KeyCode, fn(Session) -> Session);

    let actions: [KeyAction; 8] = [
        (KeyCode::Space, Session::toggle_running),
        (KeyCode::N, Session::step),
        (KeyCode::R, Session::randomize),
        (KeyCode::Home, Session::reset),
        (KeyCode::C, Session::purge),
        (KeyCode::A, Session::cycle_algorithm),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(session, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Apply a panel action to the session
pub fn apply_action(session: Session, action: PanelAction) -> Session {
    match action {
        PanelAction::PlayPause => session.toggle_running(),
        PanelAction::Step => session.step(),
        PanelAction::Random => session.randomize(),
        PanelAction::Reset => session.reset(),
        PanelAction::Purge => session.purge(),
    }
}

/// Process button clicks functionally
pub fn process_button_clicks(session: Session, buttons: &[Button], mouse_pos: (f32, f32)) -> Session {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(session, |s, btn| apply_action(s, btn.action()))
}
