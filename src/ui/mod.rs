mod button;

pub use button::{Button, PanelAction};

use macroquad::prelude::{Rect, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Side of one cell in pixels, not counting the 1px grid line
pub const CELL_SIZE: f32 = 10.0;
/// Distance between the top-left corners of neighboring cells
pub const CELL_PITCH: f32 = CELL_SIZE + 1.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Pixel size of a `width` x `height` grid including the outer grid lines
pub fn grid_pixel_size(width: u32, height: u32) -> (f32, f32) {
    (
        CELL_PITCH * width as f32 + 1.0,
        CELL_PITCH * height as f32 + 1.0,
    )
}

/// Window size that fits the grid plus the control panel
pub fn window_size(width: u32, height: u32) -> (i32, i32) {
    let (grid_w, grid_h) = grid_pixel_size(width, height);
    let min_panel_height = 560.0;
    (
        (grid_w + PANEL_WIDTH).ceil() as i32,
        grid_h.max(min_panel_height).ceil() as i32,
    )
}

/// Buttons stacked from the top of a panel starting at `panel_x`
pub fn layout_buttons(panel_x: f32) -> Vec<Button> {
    PanelAction::ALL
        .into_iter()
        .enumerate()
        .map(|(i, action)| {
            let y = 20.0 + i as f32 * (BUTTON_HEIGHT + 10.0);
            Button::new(Rect::new(panel_x, y, PANEL_WIDTH, BUTTON_HEIGHT), action)
        })
        .collect()
}

/// Create UI buttons for the current window size
pub fn create_buttons() -> Vec<Button> {
    layout_buttons(panel_x())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_pixel_size() {
        assert_eq!(grid_pixel_size(1, 1), (12.0, 12.0));
        assert_eq!(grid_pixel_size(64, 32), (705.0, 353.0));
    }

    #[test]
    fn test_buttons_stack_in_action_order() {
        let buttons = layout_buttons(500.0);
        let actions: Vec<_> = buttons.iter().map(|b| b.action()).collect();
        assert_eq!(actions, PanelAction::ALL.to_vec());
        assert!(buttons.windows(2).all(|pair| pair[0].rect().bottom() < pair[1].rect().y));
        // Last button ends above the info labels
        assert!(buttons.last().is_some_and(|b| b.rect().bottom() < 290.0));
    }

    #[test]
    fn test_window_fits_panel() {
        assert_eq!(window_size(64, 64), (885, 705));
        // Small grids still leave room for every button
        assert_eq!(window_size(4, 4).1, 560);
    }
}
