pub mod config;
pub mod engine;
pub mod session;
pub mod world;

use log::{debug, info, warn};

use config::GameConfig;
use engine::{
    BUILTIN_HELP, Command, GlyphTheme, Output, check_finish, find_start, load_help_text,
    parse_command, render_exits, render_map, try_move,
};
use world::{Grid, Position, WorldError, load_grid_from_file, validate_grid};

pub use session::{CommandSource, LineSource, Presenter, run_session};
pub use world::{Direction, load_grid_from_str};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Exploring,
    Won,
    Quit,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Exploring
    }
}

pub struct GameState {
    grid: Grid,
    position: Position,
    status: GameStatus,
    glyphs: GlyphTheme,
    help_text: String,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        over: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        state: GameState,
        initialized: bool,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game from map text. `glyphs` is "plain" or "emoji".
        /// Call `init()` to get the initial render.
        #[wasm_bindgen(constructor)]
        pub fn new(map_text: &str, glyphs: Option<String>) -> Result<WasmGame, JsValue> {
            let grid = load_grid_from_str(map_text).map_err(|e| JsValue::from_str(&e.to_string()))?;
            let theme = match glyphs.as_deref() {
                Some(name) => GlyphTheme::from_name(name)
                    .ok_or_else(|| JsValue::from_str(&format!("unknown glyph theme '{name}'")))?,
                None => GlyphTheme::default(),
            };
            let state = GameState::new(grid)
                .map_err(|e| JsValue::from_str(&e.to_string()))?
                .with_glyphs(theme);
            Ok(WasmGame {
                state,
                initialized: false,
            })
        }

        /// Initialize the game and return the initial render output.
        #[wasm_bindgen]
        pub fn init(&mut self) -> JsValue {
            self.initialized = true;
            let out = self.state.initialize();
            to_value(&WasmStepResult {
                blocks: out.blocks,
                over: false,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Process a player command. The win check for the next turn runs
        /// right away since there is no blocking read to wait on.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            if !self.initialized {
                let _ = self.init();
            }
            let (mut out, _) = self.state.step(input);
            if let Some(won) = self.state.start_turn() {
                out.blocks.extend(won.blocks);
            }
            to_value(&WasmStepResult {
                blocks: out.blocks,
                over: self.state.status().is_over(),
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl GameState {
    /// Start a session on `grid`. Fails when the map has no start cell.
    pub fn new(grid: Grid) -> Result<Self, WorldError> {
        let position = find_start(&grid)?;
        Ok(GameState {
            grid,
            position,
            status: GameStatus::Exploring,
            glyphs: GlyphTheme::default(),
            help_text: BUILTIN_HELP.to_string(),
        })
    }

    /// Load the map and help text named by `config` and start a session.
    pub fn from_config(config: &GameConfig) -> Result<Self, WorldError> {
        let grid = load_grid_from_file(&config.map_file)?;
        for problem in validate_grid(&grid) {
            warn!("{}: {}", config.map_file.display(), problem.message);
        }

        Ok(GameState::new(grid)?
            .with_glyphs(config.glyphs)
            .with_help_text(load_help_text(&config.help_file)))
    }

    pub fn with_glyphs(mut self, glyphs: GlyphTheme) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn with_help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = text.into();
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Welcome banner and the first look at the map.
    pub fn initialize(&mut self) -> Output {
        info!("session started at {:?}", self.position);

        let mut out = Output::new();
        out.title("Welcome to the dungeon!");
        out.say(format!(
            "Find the treasure '{}', avoid the traps '{}' and don't fall into the pits '{}'.",
            world::FINISH,
            world::WALL,
            world::PIT
        ));
        out.say("Type 'help' for a list of commands.");
        render_map(&mut out, &self.grid, self.position, self.glyphs);
        render_exits(&mut out, &self.grid, self.position);
        out
    }

    /// Win check run at the top of every turn, before a command is read.
    /// Returns the closing message when the player has just won.
    pub fn start_turn(&mut self) -> Option<Output> {
        if self.status != GameStatus::Exploring || !check_finish(&self.grid, self.position) {
            return None;
        }

        info!("exit reached at {:?}", self.position);
        self.status = GameStatus::Won;
        let mut out = Output::new();
        out.event("Congratulations! You have reached the exit!");
        Some(out)
    }

    /// Process a single player input; returns (output, game over?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let mut out = Output::new();
        if self.status.is_over() {
            return (out, true);
        }

        let command = parse_command(input);
        debug!("command {:?} -> {:?}", input.trim(), command);

        match command {
            Command::Go(direction) => {
                if try_move(direction, &self.grid, &mut self.position) {
                    out.say(format!("You moved {}.", direction.name()));
                    if !check_finish(&self.grid, self.position) {
                        render_exits(&mut out, &self.grid, self.position);
                    }
                } else {
                    out.say("There is no way there.");
                }
            }
            Command::ShowMap => {
                render_map(&mut out, &self.grid, self.position, self.glyphs);
                render_exits(&mut out, &self.grid, self.position);
            }
            Command::Help => out.say(self.help_text.clone()),
            Command::Escape => self.quit(&mut out),
            Command::Invalid => out.say("Invalid command"),
        }

        (out, self.status.is_over())
    }

    /// End the session without winning.
    pub fn quit(&mut self, out: &mut Output) {
        if self.status.is_over() {
            return;
        }
        info!("player left at {:?}", self.position);
        self.status = GameStatus::Quit;
        out.say("Goodbye!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::OutputBlock;

    fn state(rows: &[&str]) -> GameState {
        GameState::new(Grid::from_rows(rows)).unwrap()
    }

    #[test]
    fn starts_on_first_start_cell() {
        let game = state(&["-*S", "S*F"]);
        assert_eq!(game.position(), Position::new(0, 2));
        assert_eq!(game.status(), GameStatus::Exploring);
    }

    #[test]
    fn no_start_cell_fails_before_any_command() {
        let err = GameState::new(Grid::from_rows(["**F"])).err();
        assert!(matches!(err, Some(WorldError::NoStart)));
    }

    #[test]
    fn accepted_and_rejected_moves_report_back() {
        let mut game = state(&["S-", "*F"]);

        let (out, over) = game.step("go east");
        assert_eq!(out.lines(), vec!["There is no way there."]);
        assert!(!over);
        assert_eq!(game.position(), Position::new(0, 0));

        let (out, _) = game.step("go south");
        assert_eq!(out.lines(), vec!["You moved south.", "You can go north, east"]);
        assert_eq!(game.position(), Position::new(1, 0));
    }

    #[test]
    fn win_is_detected_at_the_start_of_the_next_turn() {
        let mut game = state(&["SF"]);
        assert!(game.start_turn().is_none());

        let (out, over) = game.step("go east");
        assert_eq!(out.lines(), vec!["You moved east."]);
        assert!(!over);

        let won = game.start_turn().unwrap();
        assert_eq!(
            won.blocks,
            vec![OutputBlock::Event(
                "Congratulations! You have reached the exit!".into()
            )]
        );
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.start_turn().is_none());
    }

    #[test]
    fn escape_is_terminal() {
        let mut game = state(&["S*F"]);
        let (out, over) = game.step("escape");
        assert_eq!(out.lines(), vec!["Goodbye!"]);
        assert!(over);

        let (out, over) = game.step("go east");
        assert!(out.blocks.is_empty());
        assert!(over);
        assert_eq!(game.position(), Position::new(0, 0));
    }

    #[test]
    fn informational_commands_keep_exploring() {
        let mut game = state(&["S*F"])
            .with_glyphs(GlyphTheme::Plain)
            .with_help_text("just walk");

        let (out, _) = game.step("show map");
        assert_eq!(out.lines(), vec!["@*F", "You can go east"]);

        let (out, _) = game.step("HELP");
        assert_eq!(out.lines(), vec!["just walk"]);

        let (out, _) = game.step("dance");
        assert_eq!(out.lines(), vec!["Invalid command"]);

        assert_eq!(game.status(), GameStatus::Exploring);
        assert_eq!(game.position(), Position::new(0, 0));
    }

    #[test]
    fn initial_render_has_banner_map_and_exits() {
        let mut game = state(&["S*F"]).with_glyphs(GlyphTheme::Plain);
        let out = game.initialize();
        assert_eq!(
            out.lines(),
            vec![
                "Welcome to the dungeon!",
                "Find the treasure 'F', avoid the traps '-' and don't fall into the pits 'o'.",
                "Type 'help' for a list of commands.",
                "@*F",
                "You can go east",
            ]
        );
    }
}
