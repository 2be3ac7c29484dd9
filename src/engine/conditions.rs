use crate::world::{FINISH, Grid, Position};

/// True when the player stands on the exit. `pos` must already be on the grid.
pub fn check_finish(grid: &Grid, pos: Position) -> bool {
    grid.symbol_at(pos) == Some(FINISH)
}
