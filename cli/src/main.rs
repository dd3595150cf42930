use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tilesweep_core::{
    ClickOutcome, Coord, Coord2, DEFAULT_CELL_SIZE, DEFAULT_DENSITY, DEFAULT_MARGIN, EngineState,
    FlagOutcome, GameConfig, MouseButton, Renderer, Session,
};

use crate::canvas::{DisplayStyle, TextCanvas};
use crate::command::{Command, HELP};

mod canvas;
mod command;

/// Minesweeper in the terminal.
///
/// Reads one command per line from stdin; clicks are given in screen pixels, the same way a
/// windowed frontend would report them.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = 9)]
    width: Coord,
    /// Board height in cells
    #[arg(long, default_value_t = 9)]
    height: Coord,
    /// Fraction of cells holding a mine, in [0, 1)
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    density: f32,
    /// Cell edge length in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: u32,
    /// Gap between cells in pixels
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    margin: u32,
    /// Seed for mine placement, random when omitted
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t)]
    glyphs: DisplayStyle,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            cell_pixel_size: self.cell_size,
            margin: self.margin,
            mine_density: self.density,
            ..GameConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Using seed {}", seed);
    let mut session =
        Session::seeded(args.game_config(), seed).context("Failed to create the board")?;

    let mut out = io::stdout().lock();
    writeln!(out, "{HELP}\n")?;
    draw(&mut out, &session, args.glyphs)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        log::debug!("Command: {:?}", command);

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Restart => session.restart().context("Failed to create the board")?,
            Command::Click { pos, button } => {
                report(&mut out, session.handle_click(pos, button))?;
            }
            Command::Open(coords) => {
                click_cell(&mut out, &mut session, coords, MouseButton::Left)?;
            }
            Command::Flag(coords) => {
                click_cell(&mut out, &mut session, coords, MouseButton::Right)?;
            }
        }

        draw(&mut out, &session, args.glyphs)?;
    }

    Ok(())
}

/// Clicks the centre of a cell, so grid commands go through the same hit-testing as raw clicks.
fn click_cell(
    out: &mut impl Write,
    session: &mut Session,
    coords: Coord2,
    button: MouseButton,
) -> io::Result<()> {
    match session.cell_center(coords) {
        Some(pos) => report(out, session.handle_click(pos, button)),
        None => writeln!(out, "There is no cell at {coords:?}"),
    }
}

fn report(out: &mut impl Write, outcome: ClickOutcome) -> io::Result<()> {
    match outcome {
        ClickOutcome::Missed => writeln!(out, "That click missed the board"),
        ClickOutcome::Ignored => writeln!(out, "Nothing happened"),
        ClickOutcome::Flag(FlagOutcome::NoFlagsLeft) => writeln!(out, "No flags left"),
        _ => Ok(()),
    }
}

fn draw(out: &mut impl Write, session: &Session, style: DisplayStyle) -> io::Result<()> {
    let engine = session.engine();
    let mut canvas = TextCanvas::new(engine.size(), style);
    Renderer::draw(engine, &mut canvas);

    writeln!(out, "Flags left: {}", session.flags_remaining())?;
    writeln!(out, "{canvas}")?;
    match session.state() {
        EngineState::InProgress => Ok(()),
        EngineState::Won => {
            writeln!(out, "You found all the bombs!")?;
            writeln!(out, "Type `restart` to play again or `quit` to exit")
        }
        EngineState::Lost => {
            writeln!(out, "You triggered a bomb!")?;
            writeln!(out, "Type `restart` to play again or `quit` to exit")
        }
    }
}
