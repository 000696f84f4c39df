//! Movement rules module.
//!
//! This module decides whether a requested step is allowed: it computes the neighbouring cell in
//! the requested direction and checks it against the bounds of the grid and the obstacles on it.

use crate::{
    grid::Grid,
    types::{Direction, Position, OBSTACLE},
};

/// Reason a step was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blocked {
    /// The step would leave the grid.
    OutOfBounds,
    /// The step would land on an obstacle.
    Obstacle,
}

/// Verdict on a requested step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveCheck {
    /// The step is allowed and lands on the contained position.
    Legal(Position),
    /// The step is refused; the player stays where they are.
    Blocked(Blocked),
}

/// Computes the cell one step away from a position.
///
/// This function offsets the position by exactly one cell along the axis of the direction. It
/// returns [`None`] when the step would cross the top or left edge, as those coordinates cannot be
/// represented; steps across the bottom or right edge are returned as-is and rejected by
/// [`validate`].
#[must_use]
pub fn candidate(position: Position, direction: Direction) -> Option<Position> {
    let (dx, dy) = direction.offset();

    Some(Position::new(
        position.x.checked_add_signed(dx)?,
        position.y.checked_add_signed(dy)?,
    ))
}

/// Checks whether the player may step from a position in a direction.
///
/// A step is legal if the target cell lies within the grid and does not hold an obstacle. The exit
/// is not an obstacle, so stepping onto it is legal.
#[must_use]
pub fn validate(grid: &Grid, position: Position, direction: Direction) -> MoveCheck {
    let Some(target) = candidate(position, direction).filter(|&target| Grid::contains(target))
    else {
        return MoveCheck::Blocked(Blocked::OutOfBounds);
    };

    match grid.cell_at(target) {
        Some(OBSTACLE) => MoveCheck::Blocked(Blocked::Obstacle),
        Some(_) => MoveCheck::Legal(target),
        None => MoveCheck::Blocked(Blocked::OutOfBounds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EXIT_POSITION, HEIGHT, OBSTACLES, WIDTH};

    /// Yields every position of the grid, row by row.
    fn all_positions() -> impl Iterator<Item = Position> {
        (0..HEIGHT).flat_map(|y| (0..WIDTH).map(move |x| Position::new(x, y)))
    }

    #[test]
    fn test_candidate_is_one_cell_away_on_one_axis() {
        for position in all_positions() {
            for direction in Direction::ALL {
                let Some(target) = candidate(position, direction) else {
                    assert!(
                        position.x == 0 || position.y == 0,
                        "only the top and left edges may underflow"
                    );
                    continue;
                };

                let dx = target.x.abs_diff(position.x);
                let dy = target.y.abs_diff(position.y);
                assert_eq!(
                    (dx + dy, dx.min(dy)),
                    (1, 0),
                    "{direction:?} from {position} landed on {target}"
                );
            }
        }
    }

    #[test]
    fn test_candidate_directions() {
        let origin = Position::new(3, 2);

        assert_eq!(candidate(origin, Direction::Up), Some(Position::new(3, 1)));
        assert_eq!(candidate(origin, Direction::Down), Some(Position::new(3, 3)));
        assert_eq!(candidate(origin, Direction::Left), Some(Position::new(2, 2)));
        assert_eq!(candidate(origin, Direction::Right), Some(Position::new(4, 2)));
        assert_eq!(candidate(Position::new(0, 0), Direction::Left), None);
        assert_eq!(candidate(Position::new(0, 0), Direction::Up), None);
    }

    #[test]
    fn test_validate_rejects_leaving_the_grid() {
        let grid = Grid::initialize();
        let blocked = MoveCheck::Blocked(Blocked::OutOfBounds);

        assert_eq!(validate(&grid, Position::new(0, 0), Direction::Left), blocked);
        assert_eq!(validate(&grid, Position::new(0, 0), Direction::Up), blocked);
        assert_eq!(
            validate(&grid, Position::new(WIDTH - 1, 0), Direction::Right),
            blocked
        );
        assert_eq!(
            validate(&grid, Position::new(0, HEIGHT - 1), Direction::Down),
            blocked
        );
    }

    #[test]
    fn test_validate_rejects_every_obstacle() {
        let grid = Grid::initialize();

        for obstacle in OBSTACLES {
            for direction in Direction::ALL {
                // Step into the obstacle from the neighbour on the opposite side.
                let opposite = match direction {
                    Direction::Up => Direction::Down,
                    Direction::Down => Direction::Up,
                    Direction::Left => Direction::Right,
                    Direction::Right => Direction::Left,
                };
                let Some(from) = candidate(obstacle, opposite) else {
                    continue;
                };
                if !Grid::contains(from) || OBSTACLES.contains(&from) {
                    continue;
                }

                assert_eq!(
                    validate(&grid, from, direction),
                    MoveCheck::Blocked(Blocked::Obstacle),
                    "{direction:?} from {from} should hit the obstacle at {obstacle}"
                );
            }
        }
    }

    #[test]
    fn test_validate_allows_floor_and_exit() {
        let grid = Grid::initialize();

        assert_eq!(
            validate(&grid, Position::new(0, 0), Direction::Right),
            MoveCheck::Legal(Position::new(1, 0))
        );
        assert_eq!(
            validate(&grid, Position::new(8, 4), Direction::Right),
            MoveCheck::Legal(EXIT_POSITION)
        );
        assert_eq!(
            validate(&grid, Position::new(9, 3), Direction::Down),
            MoveCheck::Legal(EXIT_POSITION)
        );
    }
}
