//! Move listeners and their registry.
//!
//! Every successful step is broadcast to a fixed list of listeners, each of which prints one line
//! announcing the player's new coordinates.

use std::io::Write;

use color_eyre::eyre::Result;
use log::trace;

use crate::types::Position;

/// Listener reacting to a player move.
///
/// This enumeration holds the closed set of broadcasters shipped with the game. They only differ in
/// the wording of the line they print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Broadcaster {
    /// Enthusiastic announcement of the new position.
    Excited,
    /// Alarm-style announcement of the new position.
    Alert,
}

impl Broadcaster {
    /// Formats the announcement for a player standing at `position`.
    #[must_use]
    pub fn message(self, position: Position) -> String {
        match self {
            Self::Excited => format!("omg!!! player moved!!! new position is {position}!"),
            Self::Alert => format!("Alert! Alert! The player landed at coordinates {position}!"),
        }
    }

    /// Prints the announcement for a player that just moved to `position`.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn on_player_moved<W: Write>(self, position: Position, output: &mut W) -> Result<()> {
        writeln!(output, "{}", self.message(position))?;

        Ok(())
    }
}

/// Ordered list of listeners notified after every successful move.
///
/// The list is established when the registry is built and offers no way to add or remove listeners
/// afterwards. Listeners only ever see the player's position, so they cannot alter the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    /// Registered listeners, in notification order.
    observers: Vec<Broadcaster>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Builds the registry with the excited broadcaster first and the alert one second.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: vec![Broadcaster::Excited, Broadcaster::Alert],
        }
    }

    /// Returns the registered listeners in notification order.
    #[cfg(test)]
    pub(crate) fn observers(&self) -> &[Broadcaster] {
        &self.observers
    }

    /// Notifies every listener, in registration order, that the player moved to `position`.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn notify_all<W: Write>(&self, position: Position, output: &mut W) -> Result<()> {
        for observer in &self.observers {
            trace!("notifying {observer:?} of move to {position}");
            observer.on_player_moved(position, output)?;
        }

        Ok(())
    }
}
