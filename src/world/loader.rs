use std::fs;
use std::path::Path;

use log::debug;

use super::error::WorldError;
use super::model::Grid;

////////////////////////////
/// MAP PARSER FUNCTIONS ///
////////////////////////////

/// Load a map from a text file on disk. One line per row.
pub fn load_grid_from_file(path: &Path) -> Result<Grid, WorldError> {
    let contents = fs::read_to_string(path).map_err(|e| WorldError::io(path, e))?;
    let grid = load_grid_from_str(&contents)?;
    debug!(
        "loaded map '{}' with {} rows",
        path.display(),
        grid.row_count()
    );
    Ok(grid)
}

/// Build a grid from map text. Surrounding whitespace on each line is
/// dropped, so trailing spaces or `\r` never become cells.
pub fn load_grid_from_str(contents: &str) -> Result<Grid, WorldError> {
    // A trailing newline does not add a row, but a blank line inside the
    // map stays as an empty row.
    let lines: Vec<&str> = contents.lines().map(str::trim).collect();
    let last = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .ok_or(WorldError::EmptyMap)?;

    Ok(Grid::from_rows(&lines[..=last]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::model::Position;

    #[test]
    fn strips_line_endings_and_padding() {
        let grid = load_grid_from_str("S*F  \r\n -*o\n").unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(0), Some(3));
        assert_eq!(grid.symbol_at(Position::new(1, 0)), Some('-'));
    }

    #[test]
    fn keeps_inner_blank_lines_as_empty_rows() {
        let grid = load_grid_from_str("S*\n\n*F\n\n").unwrap();
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.column_count(1), Some(0));
    }

    #[test]
    fn trailing_blank_lines_add_no_rows() {
        let grid = load_grid_from_str("S*F\n   \n\n").unwrap();
        assert_eq!(grid.row_count(), 1);
    }

    #[test]
    fn blank_text_is_an_empty_map() {
        assert!(matches!(
            load_grid_from_str(" \n\n"),
            Err(WorldError::EmptyMap)
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_grid_from_file(Path::new("definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }
}
