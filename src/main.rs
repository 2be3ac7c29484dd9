use std::env;
use std::io;
use std::path::PathBuf;

use cave_crawl::config::{DEFAULT_CONFIG_FILE, GameConfig};
use cave_crawl::engine::{Output, OutputBlock};
use cave_crawl::{GameState, LineSource, Presenter, run_session};

struct Terminal;

impl Presenter for Terminal {
    fn present(&mut self, out: Output) {
        flush_output(out);
    }
}

fn flush_output(out: Output) {
    let mut printed_anything = false;

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => {
                println!("{}", t);
            }
            OutputBlock::Text(line) => {
                println!("{}", line);
            }
            OutputBlock::Event(ev) => {
                if printed_anything {
                    println!(); // visual separation before the closing message
                }
                println!("{}", ev);
            }
            OutputBlock::Map(map) => {
                println!("{}", map);
            }
            OutputBlock::Exits(exits) => {
                println!("{}", exits);
            }
        }
        printed_anything = true;
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let config_path: PathBuf = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let config = match GameConfig::load(&config_path) {
        Ok(cfg) => {
            println!("Using config file: {}", config_path.display());
            cfg
        }
        Err(e) => {
            eprintln!(
                "Failed to load config file '{}': {e}",
                config_path.display()
            );
            std::process::exit(1);
        }
    };

    let mut state = match GameState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to start game: {e}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut source = LineSource::new(stdin.lock(), io::stdout(), "Enter a command: ");
    run_session(&mut state, &mut source, &mut Terminal)?;

    Ok(())
}
