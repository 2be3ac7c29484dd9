mod error;
mod loader;
mod model;
mod validator;

pub use error::WorldError;
pub use loader::{load_grid_from_file, load_grid_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{
    Direction, Directions, FINISH, Grid, PATH, PIT, Position, START, TRAVERSABLE, WALL,
    is_traversable,
};
pub use validator::{ValidationError, validate_grid};
