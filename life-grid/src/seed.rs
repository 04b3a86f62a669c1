use crate::{Cell, Grid, GridSize};
use thiserror::Error;

/// A seed pattern that cannot be made into a rectangular, non-empty grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed has no rows")]
    NoRows,
    #[error("seed rows have no cells")]
    EmptyRows,
    #[error("seed row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("seed value {value} at row {row}, column {col} is neither 0 nor 1")]
    InvalidValue { row: usize, col: usize, value: u8 },
    #[error("pattern glyph {glyph:?} at row {row}, column {col} is neither '#' nor '.'")]
    InvalidGlyph { row: usize, col: usize, glyph: char },
}

pub(crate) fn grid_from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Grid, SeedError> {
    let size = check_shape(rows.iter().map(|values| values.as_ref().len()))?;
    let mut cells = Vec::with_capacity(size.num_cells());
    for (row, values) in rows.iter().enumerate() {
        for (col, &value) in values.as_ref().iter().enumerate() {
            let cell =
                Cell::from_seed_value(value).ok_or(SeedError::InvalidValue { row, col, value })?;
            cells.push(cell);
        }
    }
    Ok(Grid::from_cells(size, cells))
}

pub(crate) fn grid_from_text(text: &str) -> Result<Grid, SeedError> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let start = lines
        .iter()
        .position(|line| !line.is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(start, |last| last + 1);
    let lines = &lines[start..end];

    let size = check_shape(lines.iter().map(|line| line.chars().count()))?;
    let mut cells = Vec::with_capacity(size.num_cells());
    for (row, line) in lines.iter().enumerate() {
        for (col, glyph) in line.chars().enumerate() {
            let cell = Cell::from_glyph(glyph).ok_or(SeedError::InvalidGlyph { row, col, glyph })?;
            cells.push(cell);
        }
    }
    Ok(Grid::from_cells(size, cells))
}

fn check_shape<I>(row_lengths: I) -> Result<GridSize, SeedError>
where
    I: IntoIterator<Item = usize>,
{
    let mut row_lengths = row_lengths.into_iter();
    let width = row_lengths.next().ok_or(SeedError::NoRows)?;
    if width == 0 {
        return Err(SeedError::EmptyRows);
    }
    let mut height = 1;
    for actual in row_lengths {
        if actual != width {
            return Err(SeedError::RaggedRow {
                row: height,
                expected: width,
                actual,
            });
        }
        height += 1;
    }
    Ok(GridSize::new(width, height))
}
