use crate::world::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Go(Direction),
    ShowMap,
    Help,
    Escape,
    Invalid,
}

/// Map a line of player input onto the command vocabulary. Case and
/// surrounding or repeated whitespace are ignored.
pub fn parse_command(input: &str) -> Command {
    let lower = input.to_lowercase();
    let tokens: Vec<&str> = lower.split_whitespace().collect();

    match tokens.as_slice() {
        ["go", dir] => Direction::from_name(dir).map_or(Command::Invalid, Command::Go),
        ["show", "map"] => Command::ShowMap,
        ["help"] => Command::Help,
        ["escape"] => Command::Escape,
        _ => Command::Invalid,
    }
}
