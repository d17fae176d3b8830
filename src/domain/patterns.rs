use super::Cell;

/// Represents a pattern that can be stamped onto a universe.
/// Coordinates are `(row, col)` offsets of the alive cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: u32,
    pub height: u32,
    pub cells: Vec<(u32, u32)>,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(u32, u32)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Stamp the pattern onto a row-major buffer with its top-left corner at
    /// `(row, col)`. Coordinates wrap around the grid edges.
    pub(crate) fn stamp(&self, cells: &mut [Cell], width: u32, height: u32, row: u32, col: u32) {
        let (w, h) = (width as usize, height as usize);
        for &(dr, dc) in &self.cells {
            let r = (row as usize + dr as usize) % h;
            let c = (col as usize + dc as usize) % w;
            cells[r * w + c] = Cell::Alive;
        }
    }

    /// Top-left corner that centres the pattern on a `width` x `height` grid.
    /// Patterns larger than the grid are anchored at the origin.
    pub fn centered_origin(&self, width: u32, height: u32) -> (u32, u32) {
        (
            height.saturating_sub(self.height) / 2,
            width.saturating_sub(self.width) / 2,
        )
    }
}

/// Deterministic layout a universe starts from and returns to on `reset`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SeedLayout {
    /// Every cell dead
    #[default]
    Empty,
    /// A single pattern centred on the grid
    Centered(Pattern),
}

impl SeedLayout {
    /// Overwrite `cells` with this layout.
    pub(crate) fn apply(&self, cells: &mut [Cell], width: u32, height: u32) {
        cells.fill(Cell::Dead);
        if let SeedLayout::Centered(pattern) = self {
            let (row, col) = pattern.centered_origin(width, height);
            pattern.stamp(cells, width, height, row, col);
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SeedLayout::Empty => "Empty",
            SeedLayout::Centered(pattern) => pattern.name,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SeedLayout::Empty => "Every cell dead",
            SeedLayout::Centered(pattern) => pattern.description,
        }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1), (0, 2),
            ]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ]
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        let mut cells = Vec::with_capacity(48);
        for r in [0, 5, 7, 12] {
            for c in [2, 3, 4, 8, 9, 10] {
                cells.push((r, c));
            }
        }
        for r in [2, 3, 4, 8, 9, 10] {
            for c in [0, 5, 7, 12] {
                cells.push((r, c));
            }
        }
        Pattern::new("Pulsar", "Oscillator (period 3)", cells)
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (4, 0), (5, 0),
                (4, 1), (5, 1),

                // Left circle
                (4, 10), (5, 10), (6, 10),
                (3, 11), (7, 11),
                (2, 12), (8, 12),
                (2, 13), (8, 13),
                (5, 14),
                (3, 15), (7, 15),
                (4, 16), (5, 16), (6, 16),
                (5, 17),

                // Middle pieces
                (2, 20), (3, 20), (4, 20),
                (2, 21), (3, 21), (4, 21),
                (1, 22), (5, 22),
                (0, 24), (1, 24), (5, 24), (6, 24),

                // Right square
                (2, 34), (3, 34),
                (2, 35), (3, 35),
            ]
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ]
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (0, 1),
                (1, 3),
                (2, 0), (2, 1), (2, 4), (2, 5), (2, 6),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ]
        )
    }

    /// Get all available patterns
    #[cfg(test)]
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            pulsar(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_bounds() {
        let gun = presets::glider_gun();
        assert_eq!((gun.height, gun.width), (9, 36));
        assert_eq!(presets::pulsar().cells.len(), 48);
        assert_eq!((presets::pulsar().height, presets::pulsar().width), (13, 13));
    }

    #[test]
    fn test_centered_origin() {
        let block = presets::block();
        assert_eq!(block.centered_origin(10, 6), (2, 4));
        // Larger than the grid: anchored at the origin
        assert_eq!(presets::glider_gun().centered_origin(10, 5), (0, 0));
    }

    #[test]
    fn test_stamp_wraps_edges() {
        let (w, h) = (4, 4);
        let mut cells = vec![Cell::Dead; 16];
        presets::block().stamp(&mut cells, w, h, 3, 3);

        let alive: Vec<usize> = cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| i)
            .collect();
        // (3,3), (3,0), (0,3), (0,0)
        assert_eq!(alive, vec![0, 3, 12, 15]);
    }

    #[test]
    fn test_seed_layout_apply_overwrites() {
        let mut cells = vec![Cell::Alive; 25];
        SeedLayout::Empty.apply(&mut cells, 5, 5);
        assert!(cells.iter().all(|c| *c == Cell::Dead));

        SeedLayout::Centered(presets::blinker()).apply(&mut cells, 5, 5);
        let alive: Vec<usize> = cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| i)
            .collect();
        // Row 2, columns 1-3
        assert_eq!(alive, vec![11, 12, 13]);
    }

    #[test]
    fn test_seed_layout_description() {
        assert_eq!(SeedLayout::Empty.description(), "Every cell dead");
        assert_eq!(
            SeedLayout::Centered(presets::glider_gun()).description(),
            "Produces gliders (period 30)"
        );
    }

    #[test]
    fn test_pattern_names_are_unique() {
        let mut names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
