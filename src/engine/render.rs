use serde::Deserialize;

use crate::engine::movement::look_around;
use crate::engine::output::Output;
use crate::world::{self, Grid, Position};

/// How map cells are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphTheme {
    /// Raw map symbols, with `@` for the player.
    Plain,
    #[default]
    Emoji,
}

impl GlyphTheme {
    pub fn from_name(s: &str) -> Option<GlyphTheme> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Some(GlyphTheme::Plain),
            "emoji" => Some(GlyphTheme::Emoji),
            _ => None,
        }
    }

    fn player(self) -> &'static str {
        match self {
            GlyphTheme::Plain => "@",
            GlyphTheme::Emoji => "🧝",
        }
    }

    fn cell(self, symbol: char) -> Option<&'static str> {
        if self == GlyphTheme::Plain {
            return None;
        }
        match symbol {
            world::START => Some("🏠"),
            world::FINISH => Some("🏺"),
            world::WALL => Some("🧱"),
            world::PATH => Some("🟢"),
            _ => None,
        }
    }
}

pub fn render_map(out: &mut Output, grid: &Grid, player: Position, theme: GlyphTheme) {
    let mut map = String::new();

    for (r, row) in grid.rows().enumerate() {
        if r > 0 {
            map.push('\n');
        }
        for (c, symbol) in row.iter().enumerate() {
            if Position::new(r as i64, c as i64) == player {
                map.push_str(theme.player());
            } else if let Some(glyph) = theme.cell(*symbol) {
                map.push_str(glyph);
            } else {
                map.push(*symbol);
            }
        }
    }

    out.map(map);
}

pub fn render_exits(out: &mut Output, grid: &Grid, player: Position) {
    let dirs = look_around(grid, player);

    if dirs.is_empty() {
        out.set_exits("You can go nowhere");
    } else {
        let list = dirs
            .iter()
            .map(|d| d.name())
            .collect::<Vec<&str>>()
            .join(", ");
        out.set_exits(format!("You can go {}", list));
    }
}
