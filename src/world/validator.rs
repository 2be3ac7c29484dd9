use super::model::{FINISH, Grid, START};

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Lint a map. None of these findings stop a game from starting; a missing
/// start is reported by `find_start` instead.
pub fn validate_grid(grid: &Grid) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    let starts: Vec<_> = grid.positions_of(START).collect();
    if starts.len() > 1 {
        let first = starts[0];
        errors.push(ValidationError::new(format!(
            "map has {} start cells; using the one at row {}, col {}",
            starts.len(),
            first.row,
            first.col
        )));
    }

    if grid.find(FINISH).is_none() {
        errors.push(ValidationError::new(
            "map has no finish cell 'F'; the game cannot be won",
        ));
    }

    // Ragged or empty rows are allowed, but usually a typo in the map file
    let widest = grid.rows().map(<[char]>::len).max().unwrap_or(0);
    for (i, row) in grid.rows().enumerate() {
        if row.is_empty() {
            errors.push(ValidationError::new(format!("row {} is empty", i)));
        } else if row.len() < widest {
            errors.push(ValidationError::new(format!(
                "row {} is shorter than the widest row ({} < {})",
                i,
                row.len(),
                widest
            )));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_map_is_clean() {
        let grid = Grid::from_rows(["S*-", "-*F"]);
        assert!(validate_grid(&grid).is_empty());
    }

    #[test]
    fn reports_missing_finish_and_duplicate_start() {
        let grid = Grid::from_rows(["S*S"]);
        let messages: Vec<String> = validate_grid(&grid)
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("2 start cells"));
        assert!(messages[1].contains("no finish"));
    }

    #[test]
    fn reports_short_and_empty_rows() {
        let grid = Grid::from_rows(["S**F", "", "**"]);
        let messages: Vec<String> = validate_grid(&grid)
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(
            messages,
            vec![
                "row 1 is empty".to_string(),
                "row 2 is shorter than the widest row (2 < 4)".to_string(),
            ]
        );
    }
}
