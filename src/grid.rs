//! Grid data module.
//!
//! This module contains the `Grid` struct holding the character buffer the game is played on,
//! together with the cell accessors used to move the player around and the text rendering printed
//! before every prompt.

use std::fmt::{self, Write as _};

use color_eyre::eyre::{OptionExt as _, Result};
use log::warn;

use crate::types::{
    Position, EXIT, EXIT_POSITION, FLOOR, HEIGHT, OBSTACLE, OBSTACLES, PLAYER, START, WIDTH,
};

/// Fixed-size character buffer the game is played on.
///
/// This structure represents the playing field as rows of cell symbols. Cells are addressed by
/// [`Position`] and mutated in place; the grid never changes size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Cell symbols, indexed first by row and then by column.
    cells: [[char; WIDTH]; HEIGHT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::initialize()
    }
}

impl Grid {
    /// Builds the starting grid.
    ///
    /// This function fills every cell with floor, then places the player on [`START`], the exit on
    /// [`EXIT_POSITION`] and an obstacle on each of the [`OBSTACLES`].
    #[must_use]
    pub fn initialize() -> Self {
        let mut grid = Self {
            cells: [[FLOOR; WIDTH]; HEIGHT],
        };

        grid.stamp(START, PLAYER);
        grid.stamp(EXIT_POSITION, EXIT);
        for obstacle in OBSTACLES {
            grid.stamp(obstacle, OBSTACLE);
        }

        grid
    }

    /// Checks whether a position lies inside the grid.
    #[must_use]
    pub const fn contains(position: Position) -> bool {
        position.x < WIDTH && position.y < HEIGHT
    }

    /// Returns the symbol stored at a position, or [`None`] if it lies outside the grid.
    #[must_use]
    pub fn cell_at(&self, position: Position) -> Option<char> {
        self.cells.get(position.y)?.get(position.x).copied()
    }

    /// Overwrites the symbol stored at a position.
    ///
    /// # Errors
    ///
    /// This function returns an error if the position lies outside the grid.
    pub fn set_cell(&mut self, position: Position, symbol: char) -> Result<()> {
        *self
            .cell_mut(position)
            .ok_or_eyre("attempted to write a cell outside the grid")? = symbol;

        Ok(())
    }

    /// Counts the cells holding a given symbol.
    #[cfg(test)]
    pub(crate) fn count(&self, symbol: char) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == symbol)
            .count()
    }

    /// Returns a mutable reference to a cell, or [`None`] if it lies outside the grid.
    fn cell_mut(&mut self, position: Position) -> Option<&mut char> {
        self.cells.get_mut(position.y)?.get_mut(position.x)
    }

    /// Writes a symbol during initialization.
    ///
    /// The layout constants are all in bounds, so a miss here is only logged.
    fn stamp(&mut self, position: Position, symbol: char) {
        match self.cell_mut(position) {
            Some(cell) => *cell = symbol,
            None => warn!("skipping {symbol:?} at {position}, which lies outside the grid"),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &cell in row {
                f.write_char(cell)?;
            }
            f.write_char('\n')?;
        }

        Ok(())
    }
}
