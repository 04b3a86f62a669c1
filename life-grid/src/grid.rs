use crate::{seed, Random, SeedError};
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// The rules of life: a live cell survives with two or three live neighbors,
    /// a dead cell is born with exactly three, and every other cell is dead next time.
    pub fn next(self, live_neighbors: u8) -> Cell {
        match (self, live_neighbors) {
            (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    pub fn from_seed_value(value: u8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Dead),
            1 => Some(Cell::Alive),
            _ => None,
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Cell> {
        match glyph {
            '.' => Some(Cell::Dead),
            '#' => Some(Cell::Alive),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Alive => '#',
            Cell::Dead => '.',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn num_cells(&self) -> usize {
        self.width * self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Loc {
    pub row: usize,
    pub col: usize,
}

impl Loc {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn grid_index(&self, size: GridSize) -> Option<usize> {
        if self.row < size.height && self.col < size.width {
            Some(self.row * size.width + self.col)
        } else {
            None
        }
    }
}

/// One generation of cells in a fixed-size rectangle, stored row-major.
///
/// The shape is set at construction and never changes. Everything outside the
/// rectangle counts as permanently dead when neighbors are counted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-dead grid. Panics if either dimension is zero.
    pub fn new(size: GridSize) -> Self {
        assert!(
            size.width > 0 && size.height > 0,
            "grid must be at least 1x1, got {}x{}",
            size.width,
            size.height
        );
        Self {
            size,
            cells: vec![Cell::Dead; size.num_cells()],
        }
    }

    pub(crate) fn from_cells(size: GridSize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size.num_cells());
        Self { size, cells }
    }

    /// Builds a grid from a rectangular matrix of 0 (dead) and 1 (alive) values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, SeedError> {
        seed::grid_from_rows(rows)
    }

    /// Builds a grid from a plaintext pattern: one line per row, `#` alive, `.` dead.
    pub fn parse(text: &str) -> Result<Self, SeedError> {
        seed::grid_from_text(text)
    }

    /// Panics unless `density` is within `0.0..=1.0`.
    pub fn random(size: GridSize, density: f64, rand: &mut Random) -> Self {
        let mut result = Self::new(size);
        for cell in result.cells.iter_mut() {
            if rand.next_bool(density) {
                *cell = Cell::Alive;
            }
        }
        result
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn height(&self) -> usize {
        self.size.height
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &Cell> + Clone {
        self.cells.iter()
    }

    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Cell]> + Clone {
        self.cells.chunks_exact(self.size.width)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self[Loc::new(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self[Loc::new(row, col)] = cell;
    }

    /// Counts the live cells among the up to eight cells around `(row, col)`.
    /// Positions off the edge of the grid are dead, so corners see at most 3
    /// neighbors and other edge cells at most 5.
    pub fn count_alive_neighbors(&self, row: usize, col: usize) -> u8 {
        Neighborhood::new(self, Loc::new(row, col)).num_alive_neighbors()
    }

    /// Panics if the grids differ in shape.
    pub fn copy_from(&mut self, source: &Self) {
        assert_eq!(self.size, source.size, "cannot copy between grids of different shapes");
        self.cells.copy_from_slice(&source.cells);
    }

    fn cell(&self, loc: Loc) -> Option<&Cell> {
        loc.grid_index(self.size).map(|index| &self.cells[index])
    }

    fn cell_mut(&mut self, loc: Loc) -> Option<&mut Cell> {
        loc.grid_index(self.size).map(|index| &mut self.cells[index])
    }
}

impl Index<Loc> for Grid {
    type Output = Cell;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl IndexMut<Loc> for Grid {
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        self.cell_mut(loc)
            .unwrap_or_else(|| panic!("Index_mut indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The 3x3 window around a cell, clipped to the grid. Rows and columns that
/// fall off an edge are `None` and never visited.
pub struct Neighborhood<'a> {
    grid: &'a Grid,
    rows: [Option<usize>; 3],
    cols: [Option<usize>; 3],
}

impl<'a> Neighborhood<'a> {
    pub fn new(grid: &'a Grid, center: Loc) -> Self {
        let (row_above, row_below) = Self::adjacent_indexes(center.row, grid.height());
        let (col_left, col_right) = Self::adjacent_indexes(center.col, grid.width());
        Self {
            grid,
            rows: [row_above, Some(center.row), row_below],
            cols: [col_left, Some(center.col), col_right],
        }
    }

    pub fn center(&self) -> Cell {
        self.cell(1, 1).unwrap_or_default()
    }

    /// The cell at `(row, col)` within the window, or `None` if that position is off the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        match (self.rows[row], self.cols[col]) {
            (Some(row), Some(col)) => Some(self.grid[Loc::new(row, col)]),
            _ => None,
        }
    }

    pub fn for_neighbor_cells<F>(&self, mut f: F)
    where
        F: FnMut(Cell),
    {
        self.for_cell(0, 0, &mut f);
        self.for_cell(0, 1, &mut f);
        self.for_cell(0, 2, &mut f);

        self.for_cell(1, 0, &mut f);
        self.for_cell(1, 2, &mut f);

        self.for_cell(2, 0, &mut f);
        self.for_cell(2, 1, &mut f);
        self.for_cell(2, 2, &mut f);
    }

    pub fn num_alive_neighbors(&self) -> u8 {
        let mut result = 0;
        self.for_neighbor_cells(|neighbor| {
            if neighbor.is_alive() {
                result += 1;
            }
        });
        result
    }

    /// The cell at the center of this window in the next generation.
    pub fn next_center(&self) -> Cell {
        self.center().next(self.num_alive_neighbors())
    }

    fn for_cell<F>(&self, row: usize, col: usize, f: &mut F)
    where
        F: FnMut(Cell),
    {
        if let Some(cell) = self.cell(row, col) {
            f(cell);
        }
    }

    fn adjacent_indexes(cell_index: usize, max: usize) -> (Option<usize>, Option<usize>) {
        (
            cell_index.checked_sub(1),
            Some(cell_index + 1).filter(|&index| index < max),
        )
    }
}
