mod commands;
mod conditions;
mod helpers;
mod movement;
mod output;
mod render;

pub use commands::{Command, parse_command};

pub use conditions::check_finish;

pub use helpers::{BUILTIN_HELP, load_help_text};

pub use movement::{find_start, is_inside, look_around, try_move};
pub use output::{Output, OutputBlock};
pub use render::{GlyphTheme, render_exits, render_map};
