use macroquad::prelude::*;

/// What a panel button does to the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    PlayPause,
    Step,
    Random,
    Reset,
    Purge,
}

impl PanelAction {
    /// Top-to-bottom order in the panel
    pub const ALL: [PanelAction; 5] = [
        PanelAction::PlayPause,
        PanelAction::Step,
        PanelAction::Random,
        PanelAction::Reset,
        PanelAction::Purge,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PanelAction::PlayPause => "Play/Pause",
            PanelAction::Step => "Step",
            PanelAction::Random => "Random",
            PanelAction::Reset => "Reset",
            PanelAction::Purge => "Purge",
        }
    }
}

/// Axis-aligned panel button bound to one action
#[derive(Clone, Copy, Debug)]
pub struct Button {
    rect: Rect,
    action: PanelAction,
}

impl Button {
    const FILL: Color = Color::new(0.235, 0.247, 0.267, 1.0);
    const HOVER_FILL: Color = Color::new(0.353, 0.369, 0.392, 1.0);
    const FONT_SIZE: u16 = 20;

    pub fn new(rect: Rect, action: PanelAction) -> Self {
        Self { rect, action }
    }

    pub fn action(&self) -> PanelAction {
        self.action
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Edges count as inside
    pub fn contains(&self, pos: (f32, f32)) -> bool {
        let Rect { x, y, w, h } = self.rect;
        (x..=x + w).contains(&pos.0) && (y..=y + h).contains(&pos.1)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let Rect { x, y, w, h } = self.rect;
        let fill = if self.contains(mouse_pos) { Self::HOVER_FILL } else { Self::FILL };
        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, LIGHTGRAY);

        let label = self.action.label();
        let size = measure_text(label, None, Self::FONT_SIZE, 1.0);
        draw_text(
            label,
            x + (w - size.width) / 2.0,
            y + (h + size.height) / 2.0,
            f32::from(Self::FONT_SIZE),
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let button = Button::new(Rect::new(10.0, 20.0, 100.0, 40.0), PanelAction::Step);
        assert!(button.contains((10.0, 20.0)));
        assert!(button.contains((110.0, 60.0)));
        assert!(!button.contains((9.9, 30.0)));
        assert!(!button.contains((50.0, 60.1)));
        assert_eq!(button.action().label(), "Step");
    }

    #[test]
    fn test_action_labels_are_unique() {
        let mut labels: Vec<_> = PanelAction::ALL.iter().map(|a| a.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), PanelAction::ALL.len());
    }
}
