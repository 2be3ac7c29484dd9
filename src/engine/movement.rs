use log::debug;

use crate::world::{self, Direction, Directions, Grid, Position, WorldError};

/// Locate the player's starting cell: the first `S` in row-major order.
pub fn find_start(grid: &Grid) -> Result<Position, WorldError> {
    grid.find(world::START).ok_or(WorldError::NoStart)
}

/// True when `pos` addresses an existing cell. Each row is checked against
/// its own length, so ragged maps are handled.
pub fn is_inside(grid: &Grid, pos: Position) -> bool {
    let Ok(row) = usize::try_from(pos.row) else {
        return false;
    };
    // Row first: there is no column bound for a row that does not exist.
    match grid.column_count(row) {
        Some(cols) => pos.col >= 0 && (pos.col as u64) < cols as u64,
        None => false,
    }
}

/// Directions the player may take from `pos`.
pub fn look_around(grid: &Grid, pos: Position) -> Directions {
    Direction::ALL
        .into_iter()
        .filter(|d| {
            pos.step(*d).is_some_and(|next| {
                is_inside(grid, next) && grid.symbol_at(next).is_some_and(world::is_traversable)
            })
        })
        .collect()
}

/// Move the player one cell. Returns `false` and leaves `pos` untouched when
/// the way is blocked.
pub fn try_move(direction: Direction, grid: &Grid, pos: &mut Position) -> bool {
    if !look_around(grid, *pos).contains(direction) {
        debug!("move {} from {:?} rejected", direction.name(), pos);
        return false;
    }

    let Some(next) = pos.step(direction).filter(|next| is_inside(grid, *next)) else {
        return false;
    };

    debug!("move {} from {:?} to {:?}", direction.name(), pos, next);
    *pos = next;
    true
}
