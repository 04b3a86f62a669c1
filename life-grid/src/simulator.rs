use crate::{Cell, Grid, Loc, Neighborhood};
use log::{debug, log_enabled, Level};
use rayon::prelude::*;
use std::mem;

/// Receives the cells of each generation as the simulator visits them.
pub trait Renderer {
    /// Called once per cell, in row-major order, with the cell's value before the
    /// generation is advanced.
    fn draw_cell(&mut self, loc: Loc, cell: Cell);

    /// Called after the last cell of each row.
    fn end_row(&mut self, _row: usize) {}

    /// Called once the new generation has been published.
    fn end_generation(&mut self);
}

/// Paces the simulation. Called once between generations.
pub trait Clock {
    fn tick(&mut self);
}

impl Renderer for () {
    fn draw_cell(&mut self, _loc: Loc, _cell: Cell) {}

    fn end_generation(&mut self) {}
}

impl Clock for () {
    fn tick(&mut self) {}
}

/// Advances a grid one generation at a time.
///
/// Every cell of the next generation is computed from `current` into `scratch`,
/// and the two are swapped only once the whole generation is done, so no cell
/// ever sees a partly updated neighborhood.
#[derive(Clone, Debug)]
pub struct Simulator {
    current: Grid,
    scratch: Grid,
}

impl Simulator {
    pub fn new(grid: Grid) -> Self {
        let scratch = Grid::new(grid.size());
        Self {
            current: grid,
            scratch,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn into_grid(self) -> Grid {
        self.current
    }

    /// Advances one generation without drawing or pacing.
    pub fn step(&mut self) {
        self.advance(&mut (), &mut ());
    }

    pub fn advance<R, C>(&mut self, renderer: &mut R, clock: &mut C)
    where
        R: Renderer,
        C: Clock,
    {
        for row in 0..self.current.height() {
            for col in 0..self.current.width() {
                let loc = Loc::new(row, col);
                let neighborhood = Neighborhood::new(&self.current, loc);
                self.scratch[loc] = neighborhood.next_center();
                renderer.draw_cell(loc, neighborhood.center());
            }
            renderer.end_row(row);
        }
        self.publish(renderer, clock);
    }

    /// Same result as [`advance`](Self::advance), with the rows of the next
    /// generation computed on the rayon thread pool. The renderer still sees
    /// every cell in row-major order.
    pub fn advance_parallel<R, C>(&mut self, renderer: &mut R, clock: &mut C)
    where
        R: Renderer,
        C: Clock,
    {
        let Self { current, scratch } = self;
        let current: &Grid = current;
        let width = current.width();
        scratch
            .cells_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, next_row)| {
                for (col, next_cell) in next_row.iter_mut().enumerate() {
                    *next_cell = Neighborhood::new(current, Loc::new(row, col)).next_center();
                }
            });

        for (row, cells) in self.current.rows().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                renderer.draw_cell(Loc::new(row, col), cell);
            }
            renderer.end_row(row);
        }
        self.publish(renderer, clock);
    }

    fn publish<R, C>(&mut self, renderer: &mut R, clock: &mut C)
    where
        R: Renderer,
        C: Clock,
    {
        mem::swap(&mut self.current, &mut self.scratch);
        if log_enabled!(Level::Debug) {
            debug!(
                "generation advanced: population {} -> {}",
                self.scratch.population(),
                self.current.population()
            );
        }
        renderer.end_generation();
        clock.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridSize, Random};

    #[derive(Debug, Default)]
    struct RecordingRenderer {
        cells: Vec<(Loc, Cell)>,
        rows_ended: Vec<usize>,
        generations: usize,
    }

    impl Renderer for RecordingRenderer {
        fn draw_cell(&mut self, loc: Loc, cell: Cell) {
            self.cells.push((loc, cell));
        }

        fn end_row(&mut self, row: usize) {
            self.rows_ended.push(row);
        }

        fn end_generation(&mut self) {
            self.generations += 1;
        }
    }

    #[derive(Debug, Default)]
    struct CountingClock {
        ticks: usize,
    }

    impl Clock for CountingClock {
        fn tick(&mut self) {
            self.ticks += 1;
        }
    }

    fn blinker() -> Grid {
        Grid::parse(
            "
            .....
            .....
            .###.
            .....
            .....
            ",
        )
        .unwrap()
    }

    #[test]
    fn block_is_still_life() {
        let block = Grid::parse(
            "
            ....
            .##.
            .##.
            ....
            ",
        )
        .unwrap();
        let mut simulator = Simulator::new(block.clone());
        simulator.step();
        assert_eq!(simulator.grid(), &block);
    }

    #[test]
    fn blinker_updates_simultaneously() {
        let mut simulator = Simulator::new(blinker());
        simulator.step();
        let expected = Grid::parse(
            "
            .....
            ..#..
            ..#..
            ..#..
            .....
            ",
        )
        .unwrap();
        assert_eq!(simulator.grid(), &expected);
        simulator.step();
        assert_eq!(simulator.grid(), &blinker());
    }

    #[test]
    fn all_dead_stays_dead() {
        for size in [GridSize::new(1, 1), GridSize::new(3, 7), GridSize::new(16, 9)] {
            let mut simulator = Simulator::new(Grid::new(size));
            for _ in 0..5 {
                simulator.step();
            }
            assert_eq!(simulator.grid().population(), 0);
            assert_eq!(simulator.grid().size(), size);
        }
    }

    #[test]
    fn advance_keeps_shape() {
        let mut rand = Random::from_seed(11);
        let size = GridSize::new(13, 7);
        let mut simulator = Simulator::new(Grid::random(size, 0.4, &mut rand));
        for _ in 0..10 {
            simulator.step();
            assert_eq!(simulator.grid().size(), size);
            assert_eq!(simulator.grid().num_cells(), 91);
        }
    }

    #[test]
    fn renderer_sees_cells_before_transition() {
        let mut simulator = Simulator::new(blinker());
        let mut renderer = RecordingRenderer::default();
        let mut clock = CountingClock::default();
        simulator.advance(&mut renderer, &mut clock);

        let drawn: Vec<Cell> = renderer.cells.iter().map(|&(_, cell)| cell).collect();
        let before: Vec<Cell> = blinker().cells_iter().copied().collect();
        assert_eq!(drawn, before);
        assert_eq!(renderer.cells[7].0, Loc::new(1, 2));
        assert_eq!(renderer.rows_ended, vec![0, 1, 2, 3, 4]);
        assert_eq!(renderer.generations, 1);
        assert_eq!(clock.ticks, 1);
    }

    #[test]
    fn clock_ticks_once_per_generation() {
        let mut simulator = Simulator::new(blinker());
        let mut clock = CountingClock::default();
        for _ in 0..4 {
            simulator.advance(&mut (), &mut clock);
        }
        assert_eq!(clock.ticks, 4);
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut rand = Random::from_seed(2024);
        let grid = Grid::random(GridSize::new(37, 23), 0.35, &mut rand);
        let mut sequential = Simulator::new(grid.clone());
        let mut parallel = Simulator::new(grid);
        for _ in 0..20 {
            let mut sequential_renderer = RecordingRenderer::default();
            let mut parallel_renderer = RecordingRenderer::default();
            sequential.advance(&mut sequential_renderer, &mut ());
            parallel.advance_parallel(&mut parallel_renderer, &mut ());
            assert_eq!(sequential.grid(), parallel.grid());
            assert_eq!(sequential_renderer.cells, parallel_renderer.cells);
            assert_eq!(sequential_renderer.rows_ended, parallel_renderer.rows_ended);
        }
    }

    #[test]
    fn into_grid_returns_current_generation() {
        let mut simulator = Simulator::new(blinker());
        simulator.step();
        simulator.step();
        assert_eq!(simulator.into_grid(), blinker());
    }
}
