#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod terminal;

use life_grid::{Grid, Simulator};
use log::info;
use std::error::Error;
use std::io::{self, BufWriter};
use std::time::Duration;
use terminal::{SleepClock, TerminalRenderer};

const TIME_STEP_MILLIS: u64 = 1000;

// Oscillator: beacon
const SEED: [[u8; 8]; 10] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 1, 0, 0, 0, 0],
    [0, 0, 1, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 1, 1, 0, 0],
    [0, 0, 0, 0, 1, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let grid = Grid::from_rows(&SEED)?;
    info!(
        "starting {}x{} grid with {} live cells",
        grid.width(),
        grid.height(),
        grid.population()
    );

    let mut simulator = Simulator::new(grid);
    let mut renderer = TerminalRenderer::new(BufWriter::new(io::stdout()));
    let mut clock = SleepClock::new(Duration::from_millis(TIME_STEP_MILLIS));
    loop {
        simulator.advance(&mut renderer, &mut clock);
        renderer.take_error()?;
    }
}
