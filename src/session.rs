use std::io::{self, BufRead, Write};

use log::info;

use crate::engine::Output;
use crate::{GameState, GameStatus};

/// Supplies one line of player input per turn. `Ok(None)` means the input
/// is exhausted.
pub trait CommandSource {
    fn next_command(&mut self) -> io::Result<Option<String>>;
}

/// Draws whatever a turn produced.
pub trait Presenter {
    fn present(&mut self, out: Output);
}

/// Reads commands line by line, writing `prompt` before each read.
pub struct LineSource<R, W> {
    reader: R,
    prompt_to: W,
    prompt: String,
}

impl<R: BufRead, W: Write> LineSource<R, W> {
    pub fn new(reader: R, prompt_to: W, prompt: impl Into<String>) -> Self {
        LineSource {
            reader,
            prompt_to,
            prompt: prompt.into(),
        }
    }
}

impl<R: BufRead, W: Write> CommandSource for LineSource<R, W> {
    fn next_command(&mut self) -> io::Result<Option<String>> {
        write!(self.prompt_to, "{}", self.prompt)?;
        self.prompt_to.flush()?;

        let mut input = String::new();
        let bytes_read = self.reader.read_line(&mut input)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}

/// Drive a whole session: initial render, then win check, read and dispatch
/// once per turn until the player wins, escapes or runs out of input.
pub fn run_session<C, P>(
    state: &mut GameState,
    source: &mut C,
    presenter: &mut P,
) -> io::Result<GameStatus>
where
    C: CommandSource + ?Sized,
    P: Presenter + ?Sized,
{
    presenter.present(state.initialize());

    loop {
        if let Some(out) = state.start_turn() {
            presenter.present(out);
        }
        if state.status().is_over() {
            break;
        }

        let Some(input) = source.next_command()? else {
            info!("input closed");
            let mut out = Output::new();
            state.quit(&mut out);
            presenter.present(out);
            break;
        };

        let (out, _) = state.step(&input);
        presenter.present(out);
    }

    Ok(state.status())
}
