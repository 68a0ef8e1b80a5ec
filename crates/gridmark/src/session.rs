//! The interactive game loop.

use crate::banner::{WELCOME, rules};
use crate::input::{Command, is_yes, parse_size};
use crate::settings::Settings;
use anyhow::Result;
use gridmark_engine::{BoardConfig, Coord, EngineError, GameEngine, Player};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Round {
    /// Won or drawn.
    Finished,
    /// Player asked for a new board.
    Restart,
    /// Player asked to leave.
    Quit,
    /// Input ran out.
    Closed,
}

/// A sequence of games played over a text stream.
///
/// Reads answers line by line from `input` and writes prompts and boards to
/// `output`. Each game gets a fresh [`GameEngine`].
pub struct Session<R, W> {
    input: R,
    output: W,
    settings: Settings,
    size: Option<usize>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session that asks for the board size before each game.
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
            size: None,
        }
    }

    /// Uses a fixed board size instead of prompting for one.
    pub fn with_size(mut self, size: Option<usize>) -> Self {
        self.size = size;
        self
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays games until the player quits, declines another game, or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "\n{WELCOME}\n")?;
        writeln!(
            self.output,
            "{}",
            rules(*self.settings.min_size(), *self.settings.max_size())
        )?;

        loop {
            let Some(size) = self.choose_size()? else {
                return Ok(());
            };

            let config = BoardConfig::for_size(size)?;
            info!(size, win_length = config.win_length(), "Game started");

            match self.play(GameEngine::new(config))? {
                Round::Closed => return Ok(()),
                Round::Quit => {
                    writeln!(self.output, "\nHope to see you later!\n")?;
                    return Ok(());
                }
                Round::Restart => {
                    writeln!(self.output, "\nLet's try again!\n")?;
                    continue;
                }
                Round::Finished => {}
            }

            let Some(answer) = self.prompt("\nDo you want to play again? (y/n): ")? else {
                return Ok(());
            };
            if !is_yes(&answer) {
                writeln!(self.output, "\nHope to see you later!")?;
                return Ok(());
            }
        }
    }

    fn choose_size(&mut self) -> Result<Option<usize>> {
        if let Some(size) = self.size {
            return Ok(Some(size));
        }

        let prompt = format!(
            "\nChoose battlefield size ({}): ",
            self.settings.size_choices()
        );
        loop {
            let Some(answer) = self.prompt(&prompt)? else {
                return Ok(None);
            };
            match parse_size(&answer) {
                Ok(size) if self.settings.allows_size(size) => return Ok(Some(size)),
                Ok(size) => debug!(size, "Board size out of range"),
                Err(e) => debug!(error = %e, "Unreadable board size"),
            }
        }
    }

    #[instrument(skip_all, fields(size = game.size()))]
    fn play(&mut self, mut game: GameEngine) -> Result<Round> {
        self.print_board(&game)?;

        loop {
            let glyph = self.glyph(game.current_player());
            writeln!(self.output, "\nPlayer '{glyph}', it's your turn!")?;
            let Some(answer) = self.prompt("Choose cell (row, column): ")? else {
                return Ok(Round::Closed);
            };

            let command = match Command::parse(&answer) {
                Ok(command) => command,
                Err(e) => {
                    debug!(error = %e, "Unreadable move");
                    continue;
                }
            };

            match command {
                Command::Quit => match self.confirm("quit")? {
                    Some(true) => return Ok(Round::Quit),
                    Some(false) => continue,
                    None => return Ok(Round::Closed),
                },
                Command::Restart => match self.confirm("restart")? {
                    Some(true) => return Ok(Round::Restart),
                    Some(false) => continue,
                    None => return Ok(Round::Closed),
                },
                Command::Place(coord) => {
                    if !self.place(&mut game, coord)? {
                        continue;
                    }
                }
            }

            self.print_board(&game)?;

            let status = game.status();
            if !status.is_terminal() {
                continue;
            }

            info!(%status, moves = game.history().len(), "Game finished");
            match status.winner() {
                Some(winner) => {
                    let glyph = self.glyph(winner);
                    writeln!(self.output, "\nCongratulations! Player '{glyph}' won!")?;
                }
                None => writeln!(self.output, "\nThe game ended in a draw!")?,
            }
            return Ok(Round::Finished);
        }
    }

    /// Applies a move, reporting occupied cells to the player. Returns whether
    /// the move was applied.
    fn place(&mut self, game: &mut GameEngine, coord: Coord) -> Result<bool> {
        match game.apply_move(coord) {
            Ok(_) => Ok(true),
            Err(EngineError::CellOccupied(_)) => {
                writeln!(
                    self.output,
                    "\nThis cell is already occupied. Choose another one."
                )?;
                Ok(false)
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                Ok(false)
            }
        }
    }

    fn confirm(&mut self, verb: &str) -> Result<Option<bool>> {
        let answer =
            self.prompt(&format!("\nAre you sure you want to {verb} the game? (y/n): "))?;
        Ok(answer.map(|answer| is_yes(&answer)))
    }

    fn glyph(&self, player: Player) -> String {
        self.settings.glyphs().player(player).to_string()
    }

    fn print_board(&mut self, game: &GameEngine) -> Result<()> {
        writeln!(self.output, "{}", game.render(self.settings.glyphs()))?;
        Ok(())
    }

    /// Writes `text` and reads one line. `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
