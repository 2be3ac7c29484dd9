//////////////////////////////
/// GRID STRUCTS AND ENUMS ///
//////////////////////////////

pub const START: char = 'S';
pub const FINISH: char = 'F';
pub const WALL: char = '-';
pub const PATH: char = '*';
pub const PIT: char = 'o';

/// Symbols a player may stand on.
pub const TRAVERSABLE: [char; 3] = [START, FINISH, PATH];

pub fn is_traversable(symbol: char) -> bool {
    TRAVERSABLE.contains(&symbol)
}

/// Immutable map of cell symbols. Rows keep the length they had in the
/// source map, so a grid may be ragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Grid {
            rows: rows
                .into_iter()
                .map(|r| r.as_ref().chars().collect())
                .collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of a single row; `None` when the row does not exist.
    pub fn column_count(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Symbol under `pos`, or `None` when `pos` is off the grid.
    pub fn symbol_at(&self, pos: Position) -> Option<char> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        self.rows.get(row)?.get(col).copied()
    }

    /// Row-major scan for `symbol`; the first hit wins.
    pub fn find(&self, symbol: char) -> Option<Position> {
        self.positions_of(symbol).next()
    }

    pub fn positions_of(&self, symbol: char) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().enumerate().flat_map(move |(r, row)| {
            row.iter()
                .enumerate()
                .filter(move |(_, c)| **c == symbol)
                .map(move |(c, _)| Position::new(r as i64, c as i64))
        })
    }
}

/// A player location. Signed so that the neighbours of border cells can be
/// expressed and rejected by the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i64,
    pub col: i64,
}

impl Position {
    pub const fn new(row: i64, col: i64) -> Self {
        Position { row, col }
    }

    /// Neighbour in `direction`; `None` when the coordinate would overflow.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        Some(Position {
            row: self.row.checked_add(dr)?,
            col: self.col.checked_add(dc)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Canonical order used whenever directions are listed to the player.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// (Δrow, Δcol)
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        }
    }

    pub fn from_name(s: &str) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
    }

    const fn bit(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::South => 2,
            Direction::West => 4,
            Direction::East => 8,
        }
    }
}

/// Set of directions. Iteration always follows `Direction::ALL`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directions(u8);

impl Directions {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for Directions {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        let mut set = Directions::empty();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_lookup_respects_ragged_rows() {
        let grid = Grid::from_rows(["S**", "*"]);
        assert_eq!(grid.symbol_at(Position::new(0, 2)), Some('*'));
        assert_eq!(grid.symbol_at(Position::new(1, 2)), None);
        assert_eq!(grid.symbol_at(Position::new(-1, 0)), None);
        assert_eq!(grid.column_count(1), Some(1));
        assert_eq!(grid.column_count(2), None);
    }

    #[test]
    fn find_is_row_major_first_match() {
        let grid = Grid::from_rows(["--S", "S--"]);
        assert_eq!(grid.find(START), Some(Position::new(0, 2)));
        assert_eq!(grid.positions_of(START).count(), 2);
        assert_eq!(grid.find(FINISH), None);
    }

    #[test]
    fn direction_set_iterates_in_canonical_order() {
        let set: Directions = [Direction::East, Direction::North, Direction::West]
            .into_iter()
            .collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![Direction::North, Direction::West, Direction::East]);
        assert!(!set.contains(Direction::South));
    }

    #[test]
    fn step_at_the_coordinate_limits_is_none() {
        assert_eq!(Position::new(i64::MAX, 0).step(Direction::South), None);
        assert_eq!(Position::new(0, i64::MIN).step(Direction::West), None);
        assert_eq!(
            Position::new(i64::MAX, 0).step(Direction::North),
            Some(Position::new(i64::MAX - 1, 0))
        );
    }

    #[test]
    fn direction_names_parse_back() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_name(d.name()), Some(d));
        }
        assert_eq!(Direction::from_name("NORTH"), Some(Direction::North));
        assert_eq!(Direction::from_name("up"), None);
    }
}
