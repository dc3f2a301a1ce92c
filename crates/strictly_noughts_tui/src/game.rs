//! Turn sequencing between a human and the minimax opponent.
//!
//! The session owns the board and talks to the player through a [`Surface`],
//! so the same loop drives the real terminal and scripted test surfaces.

use crate::config::FirstMove;
use anyhow::Result;
use derive_more::Display;
use strictly_noughts::{Board, GameStatus, Mark, analyse};
use tracing::{debug, info, instrument, warn};

/// A normalised key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character, lowercased.
    Char(char),
    /// Cursor up.
    Up,
    /// Cursor down.
    Down,
    /// Cursor left.
    Left,
    /// Cursor right.
    Right,
    /// Place on the cursor cell.
    Enter,
    /// The surface changed size.
    Resize,
    /// Anything else.
    Other,
}

/// Prompt shown below the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Message {
    /// Asked before each game.
    #[display("Do you want to go first (Y or N)?")]
    Order,
    /// Waiting for the human's move.
    #[display("What is your move (0 to {last})?")]
    Move {
        /// Highest cell index.
        last: usize,
    },
    /// Human won.
    #[display("You WON! Play again (Y or N)?")]
    Win,
    /// Computer won.
    #[display("You LOSE! Play again (Y or N)?")]
    Lose,
    /// Draw.
    #[display("You DREW! Play again (Y or N)?")]
    Draw,
    /// Human abandoned the game.
    #[display("Play another game (Y or N)?")]
    Replay,
}

/// Everything a surface needs to render one frame.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    /// Board to draw.
    pub board: &'a Board,
    /// Highlighted cell.
    pub cursor: usize,
    /// Prompt below the board.
    pub message: Message,
}

/// Display and input collaborator.
pub trait Surface {
    /// Blocks for one key press.
    fn read_key(&mut self) -> Result<Key>;

    /// Renders the board, cursor and prompt.
    fn draw(&mut self, view: &View<'_>) -> Result<()>;

    /// Returns false when the surface can no longer show the game,
    /// e.g. the terminal became too small.
    fn is_usable(&self) -> bool;
}

/// Results over a session, from the human's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games the human won.
    pub won: u32,
    /// Games the computer won.
    pub lost: u32,
    /// Drawn games.
    pub drawn: u32,
    /// Games quit before the end.
    pub abandoned: u32,
}

/// Validated answer to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Quit,
    Yes,
    No,
    Cell(usize),
}

/// What a prompt accepts besides `q`.
#[derive(Debug, Clone, Copy)]
enum Expect {
    YesNo,
    Cell(Mark),
}

/// Interactive session: one board reused across games.
pub struct Session<S> {
    board: Board,
    surface: S,
    first: FirstMove,
    cursor: usize,
    message: Message,
    tally: Tally,
}

impl<S: Surface> Session<S> {
    /// Creates a session over `board`, which is reset before every game.
    pub fn new(board: Board, surface: S, first: FirstMove) -> Self {
        Self {
            board,
            surface,
            first,
            cursor: 0,
            message: Message::Order,
            tally: Tally::default(),
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Results so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Consumes the session and returns its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Plays games until the human quits or declines a replay.
    #[instrument(skip(self), fields(size = self.board.size(), first = ?self.first))]
    pub fn run(&mut self) -> Result<Tally> {
        info!("Starting session");

        // the first game skips the replay question and only asks for order
        let Some(mut human) = self.choose_mark()? else {
            info!("Quit before first game");
            return Ok(self.tally);
        };

        loop {
            self.play_game(human)?;

            if !self.ask_replay()? {
                break;
            }
            match self.choose_mark()? {
                Some(mark) => human = mark,
                None => break,
            }
        }

        info!(tally = ?self.tally, "Session finished");
        Ok(self.tally)
    }

    /// Plays one game to a result or until the human quits.
    #[instrument(skip(self))]
    fn play_game(&mut self, human: Mark) -> Result<()> {
        self.board.reset();
        self.cursor = 0;
        self.message = Message::Move {
            last: self.board.cell_count() - 1,
        };
        self.redraw()?;

        // noughts always move first
        let mut to_move = Mark::Nought;
        loop {
            let finished = if to_move == human {
                self.move_human(human)?
            } else {
                self.move_ai(to_move)?
            };
            if finished {
                return Ok(());
            }
            to_move = to_move.opponent();
        }
    }

    /// Returns true when the game ended.
    fn move_human(&mut self, human: Mark) -> Result<bool> {
        match self.read_input(Expect::Cell(human))? {
            Input::Cell(cell) => {
                debug!(cell, %human, "Human move");
                self.board.set_cell(cell, human.into());
                self.cursor = cell;
                self.check_end(human)
            }
            _ => {
                info!("Game abandoned");
                self.tally.abandoned += 1;
                self.message = Message::Replay;
                self.redraw()?;
                Ok(true)
            }
        }
    }

    /// Returns true when the game ended.
    fn move_ai(&mut self, ai: Mark) -> Result<bool> {
        let report = analyse(&mut self.board, ai);
        let cell = *report.best_move();
        debug!(cell, %ai, score = *report.score(), nodes = *report.nodes(), "AI move");

        self.board.set_cell(cell, ai.into());
        self.check_end(ai.opponent())
    }

    /// Updates the prompt and tally if the game is over. Redraws either way.
    fn check_end(&mut self, human: Mark) -> Result<bool> {
        let status = self.board.status();
        match status {
            GameStatus::Won(mark) if mark == human => {
                self.tally.won += 1;
                self.message = Message::Win;
            }
            GameStatus::Won(_) => {
                self.tally.lost += 1;
                self.message = Message::Lose;
            }
            GameStatus::Draw => {
                self.tally.drawn += 1;
                self.message = Message::Draw;
            }
            GameStatus::InProgress => {}
        }
        self.redraw()?;

        if status.is_over() {
            info!(?status, "Game over");
        }
        Ok(status.is_over())
    }

    /// Picks the human's mark for the next game, or `None` to quit.
    fn choose_mark(&mut self) -> Result<Option<Mark>> {
        match self.first {
            FirstMove::Human => return Ok(Some(Mark::Nought)),
            FirstMove::Ai => return Ok(Some(Mark::Cross)),
            FirstMove::Ask => {}
        }

        self.message = Message::Order;
        self.redraw()?;
        Ok(match self.read_input(Expect::YesNo)? {
            Input::Yes => Some(Mark::Nought),
            Input::No => Some(Mark::Cross),
            _ => None,
        })
    }

    /// Reads the answer to the replay prompt already on screen.
    fn ask_replay(&mut self) -> Result<bool> {
        Ok(self.read_input(Expect::YesNo)? == Input::Yes)
    }

    /// Reads keys until one is valid for `expect`. `q` is always valid.
    fn read_input(&mut self, expect: Expect) -> Result<Input> {
        loop {
            if !self.surface.is_usable() {
                warn!("Surface no longer usable, quitting");
                return Ok(Input::Quit);
            }

            let key = self.surface.read_key()?;
            match (key, expect) {
                (Key::Char('q'), _) => return Ok(Input::Quit),
                (Key::Char('y'), Expect::YesNo) => return Ok(Input::Yes),
                (Key::Char('n'), Expect::YesNo) => return Ok(Input::No),
                (Key::Char(c), Expect::Cell(mark)) => {
                    if let Some(cell) = c.to_digit(10).map(|d| d as usize) {
                        if self.board.is_valid_move(cell, mark.into()) {
                            return Ok(Input::Cell(cell));
                        }
                        warn!(cell, "Rejected move");
                    }
                }
                (Key::Enter, Expect::Cell(mark)) => {
                    if self.board.is_valid_move(self.cursor, mark.into()) {
                        return Ok(Input::Cell(self.cursor));
                    }
                    warn!(cell = self.cursor, "Rejected move");
                }
                (Key::Up | Key::Down | Key::Left | Key::Right, Expect::Cell(_)) => {
                    self.cursor = crate::tui::move_cursor(self.cursor, self.board.size(), key);
                    self.redraw()?;
                }
                (Key::Resize, _) => self.redraw()?,
                _ => {}
            }
        }
    }

    fn redraw(&mut self) -> Result<()> {
        let view = View {
            board: &self.board,
            cursor: self.cursor,
            message: self.message,
        };
        self.surface.draw(&view)
    }
}
