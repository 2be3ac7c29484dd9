use std::fs;
use std::path::Path;

use log::warn;

/// Shown when the help file is missing or unreadable.
pub const BUILTIN_HELP: &str = "\
Commands:
  go north   move one cell north
  go south   move one cell south
  go west    move one cell west
  go east    move one cell east
  show map   draw the map
  help       show this list
  escape     leave the dungeon";

/// Read the help file, falling back to the built-in command list.
pub fn load_help_text(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) if !text.trim().is_empty() => text.trim_end().to_string(),
        Ok(_) => {
            warn!("help file '{}' is empty", path.display());
            BUILTIN_HELP.to_string()
        }
        Err(e) => {
            warn!("could not read help file '{}': {e}", path.display());
            BUILTIN_HELP.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back() {
        let text = load_help_text(Path::new("no/such/help.txt"));
        assert_eq!(text, BUILTIN_HELP);
    }
}
