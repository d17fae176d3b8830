//! Read-only, zero-copy window over a universe's live cell buffer.

use super::Cell;

/// Borrowed view of the current generation.
///
/// Points straight into the universe's buffer: nothing is cloned, and the
/// borrow keeps the universe from being mutated or dropped while the view
/// is alive. Row-major, one byte per cell, `Dead = 0` and `Alive = 1`.
#[derive(Clone, Copy, Debug)]
pub struct CellsView<'a> {
    cells: &'a [Cell],
    width: u32,
    height: u32,
}

impl<'a> CellsView<'a> {
    pub(crate) fn new(cells: &'a [Cell], width: u32, height: u32) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self { cells, width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Always `width * height`
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Address of the first cell. Stable for the lifetime of the universe.
    pub fn as_ptr(&self) -> *const Cell {
        self.cells.as_ptr()
    }

    pub fn as_slice(&self) -> &'a [Cell] {
        self.cells
    }

    /// The same memory reinterpreted as raw state bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.cells)
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: u32, col: u32) -> Option<Cell> {
        (row < self.height && col < self.width)
            .then(|| self.cells[row as usize * self.width as usize + col as usize])
    }

    /// Iterate rows top to bottom
    pub fn rows(self) -> impl Iterator<Item = &'a [Cell]> + 'a {
        self.cells.chunks(self.width as usize)
    }

    /// Iterate `(row, col)` of every alive cell in row-major order
    pub fn live_cells(self) -> impl Iterator<Item = (u32, u32)> + 'a {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(idx, _)| ((idx / width) as u32, (idx % width) as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Cell> {
        // 3 wide, 2 tall
        vec![
            Cell::Dead, Cell::Alive, Cell::Dead,
            Cell::Alive, Cell::Dead, Cell::Alive,
        ]
    }

    #[test]
    fn test_bytes_alias_cells() {
        let cells = sample();
        let view = CellsView::new(&cells, 3, 2);
        assert_eq!(view.as_bytes(), &[0, 1, 0, 1, 0, 1]);
        assert_eq!(view.as_bytes().as_ptr(), cells.as_ptr() as *const u8);
        assert_eq!(view.as_ptr(), cells.as_ptr());
    }

    #[test]
    fn test_get_bounds() {
        let cells = sample();
        let view = CellsView::new(&cells, 3, 2);
        assert_eq!(view.get(0, 1), Some(Cell::Alive));
        assert_eq!(view.get(1, 2), Some(Cell::Alive));
        assert_eq!(view.get(2, 0), None);
        assert_eq!(view.get(0, 3), None);
    }

    #[test]
    fn test_rows_and_live_cells() {
        let cells = sample();
        let view = CellsView::new(&cells, 3, 2);
        assert_eq!(view.rows().count(), 2);
        assert!(view.rows().all(|row| row.len() == 3));
        let live: Vec<_> = view.live_cells().collect();
        assert_eq!(live, vec![(0, 1), (1, 0), (1, 2)]);
    }
}
