#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Conway's Game of Life on a fixed-size grid whose edges are bordered by
//! permanently dead cells.

mod grid;
mod seed;
mod simulator;

pub use grid::{Cell, Grid, GridSize, Loc, Neighborhood};
pub use seed::SeedError;
pub use simulator::{Clock, Renderer, Simulator};

use rand::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// A generator that always produces the same sequence for the same `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_bool(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
