//! Line-oriented command loop over one `GameState`.
//!
//! Reads one command per line and writes the result to the output stream.
//! Bad input prints a message and the loop keeps going; only `quit` or end
//! of input stops it.

use std::io::{self, BufRead, Write};

use rand::prelude::IndexedRandom;
use tracing::{debug, info};

use crate::game_state::chess_rules::NO_LEGAL_MOVES;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move_text;
use crate::move_generation::legal_move_generator::{legal_moves, LegalMoveGenerator};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::join_moves;
use crate::session::session_config::SessionConfig;
use crate::utils::render_game_state::render_game_state;

pub fn run_stdio_loop(config: SessionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(stdin.lock(), &mut stdout, config)
}

pub fn run_loop(input: impl BufRead, out: &mut impl Write, config: SessionConfig) -> io::Result<()> {
    let mut session = SessionState::new(config);

    for line in input.lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, out)?;
        out.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct SessionState {
    game_state: GameState,
    start_position: GameState,
    move_generator: LegalMoveGenerator,
}

impl SessionState {
    fn new(config: SessionConfig) -> Self {
        Self {
            game_state: config.start_position.clone(),
            start_position: config.start_position,
            move_generator: LegalMoveGenerator,
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let (cmd, rest) = trimmed.split_once(char::is_whitespace).unwrap_or((trimmed, ""));
        let rest = rest.trim();
        debug!(cmd, rest, "session command");

        match cmd {
            "fen" => match GameState::from_fen(rest) {
                Ok(game_state) => {
                    self.game_state = game_state;
                    writeln!(out, "{}", self.game_state.get_fen())?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "show" => {
                writeln!(out, "{}", self.game_state.get_fen())?;
            }
            "board" => {
                write!(out, "{}", render_game_state(&self.game_state))?;
            }
            "moves" => {
                let moves = legal_moves(&self.game_state);
                if moves.is_empty() {
                    writeln!(out, "{NO_LEGAL_MOVES}")?;
                } else {
                    writeln!(out, "{}", join_moves(&moves))?;
                }
            }
            "move" => self.handle_move(rest, out)?,
            "random" => self.handle_random(out)?,
            "reset" => {
                self.game_state = self.start_position.clone();
                writeln!(out, "{}", self.game_state.get_fen())?;
            }
            "quit" => {
                return Ok(true);
            }
            _ => {
                writeln!(out, "unknown command: {cmd}")?;
            }
        }

        Ok(false)
    }

    fn handle_move(&mut self, rest: &str, out: &mut impl Write) -> io::Result<()> {
        let (mv, reasoning) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        if mv.is_empty() {
            writeln!(out, "usage: move <move> [reasoning...]")?;
            return Ok(());
        }

        let reasoning = reasoning.trim();
        if !reasoning.is_empty() {
            info!(mv, reasoning, "move reasoning");
        }

        match apply_move_text(&self.game_state, mv) {
            Ok(next) => {
                self.game_state = next;
                writeln!(out, "{}", self.game_state.get_fen())
            }
            Err(rejection) => writeln!(out, "{rejection}"),
        }
    }

    fn handle_random(&mut self, out: &mut impl Write) -> io::Result<()> {
        let generated = self.move_generator.generate_legal_moves(&self.game_state);

        let mut rng = rand::rng();
        match generated.as_slice().choose(&mut rng) {
            Some(picked) => {
                self.game_state = picked.game_after_move.clone();
                writeln!(out, "{} {}", picked.chess_move, self.game_state.get_fen())
            }
            None => writeln!(out, "{NO_LEGAL_MOVES}"),
        }
    }
}
