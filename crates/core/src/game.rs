//! Screen transitions, pair selection and the countdown.
//!
//! [`GameState::update`] is the single place game state changes. Each call
//! runs one tick in a fixed order:
//!
//! 1. refresh the countdown,
//! 2. advance card flip animations,
//! 3. resolve a pending pair once its delay has passed,
//! 4. apply this tick's click unless time ran out,
//! 5. end the game if every card is matched or the countdown hit zero.
//!
//! Clicks on the tick the countdown reaches zero are ignored, so the last pair
//! must be completed while at least part of a second remains.

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::{
    board::Board,
    button::{Button, ButtonAction},
    card::Card,
    config::AppConfig,
    error::SetupError,
    geometry::Point,
    input::InputFrame,
    models::Difficulty,
};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All pairs were found.
    Cleared,
    /// The countdown reached zero first.
    TimeUp,
}

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Difficulty selection.
    Menu,
    /// A board is in play.
    Playing,
    /// Results with Play Again / Main Menu.
    GameOver(Outcome),
}

/// Cards picked in the current turn, by board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing picked.
    #[default]
    Idle,
    /// One card face-up, waiting for its partner.
    One(usize),
    /// Two cards face-up; clicks are ignored until `until`.
    Resolving {
        /// First card picked.
        first: usize,
        /// Second card picked; never equal to `first`.
        second: usize,
        /// Whether the two logos matched.
        matched: bool,
        /// When the pair resolves.
        until: Instant,
    },
}

impl Selection {
    /// First card of the turn.
    pub fn first(&self) -> Option<usize> {
        match *self {
            Selection::Idle => None,
            Selection::One(first) | Selection::Resolving { first, .. } => Some(first),
        }
    }

    /// Second card of the turn.
    pub fn second(&self) -> Option<usize> {
        match *self {
            Selection::Resolving { second, .. } => Some(second),
            _ => None,
        }
    }

    /// A pair is on display and clicks are gated.
    pub fn is_waiting(&self) -> bool {
        matches!(self, Selection::Resolving { .. })
    }
}

/// The whole game: screen, board, counters and countdown.
pub struct GameState {
    config: AppConfig,
    rng: ChaCha8Rng,
    screen: Screen,
    difficulty: Difficulty,
    board: Option<Board>,
    selection: Selection,
    score: u32,
    moves: u32,
    time_left: u32,
    started_at: Option<Instant>,
    menu_buttons: Vec<Button>,
    game_over_buttons: Vec<Button>,
}

impl GameState {
    /// New game on the menu screen, shuffling from OS entropy.
    pub fn new(config: AppConfig) -> Self {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// New game whose boards are dealt from a fixed seed.
    pub fn with_seed(config: AppConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(config: AppConfig, rng: ChaCha8Rng) -> Self {
        let menu_buttons = Button::menu_set(&config.layout);
        let game_over_buttons = Button::game_over_set(&config.layout);
        Self {
            config,
            rng,
            screen: Screen::Menu,
            difficulty: Difficulty::default(),
            board: None,
            selection: Selection::Idle,
            score: 0,
            moves: 0,
            time_left: 0,
            started_at: None,
            menu_buttons,
            game_over_buttons,
        }
    }

    /// Configuration the game was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Difficulty of the current or last board.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Current board, if one was ever dealt.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Cards of the current board; empty before the first deal.
    pub fn cards(&self) -> &[Card] {
        self.board.as_ref().map(Board::cards).unwrap_or_default()
    }

    /// Cards picked this turn.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Pairs found this session.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Completed pair attempts this session.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whole seconds left on the countdown.
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// When the current session started.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Buttons of the active screen; empty while playing.
    pub fn buttons(&self) -> &[Button] {
        match self.screen {
            Screen::Menu => &self.menu_buttons,
            Screen::GameOver(_) => &self.game_over_buttons,
            Screen::Playing => &[],
        }
    }

    /// Deal a new board and start its countdown at `now`.
    ///
    /// Discards the previous board, resets counters and the selection, and
    /// switches to [`Screen::Playing`].
    pub fn start(&mut self, difficulty: Difficulty, now: Instant) -> Result<(), SetupError> {
        let board = Board::deal(difficulty, &self.config.layout, &mut self.rng)?;
        self.difficulty = difficulty;
        self.board = Some(board);
        self.selection = Selection::Idle;
        self.score = 0;
        self.moves = 0;
        self.time_left = difficulty.preset().time_limit_secs;
        self.started_at = Some(now);
        self.screen = Screen::Playing;
        info!(%difficulty, time_limit = self.time_left, "Game started");
        Ok(())
    }

    /// Run one tick with this tick's input, observed at `now`.
    ///
    /// Fails only when a board cannot be dealt for a preset.
    pub fn update(&mut self, input: &InputFrame, now: Instant) -> Result<(), SetupError> {
        match self.screen {
            Screen::Menu => self.update_menu(input, now),
            Screen::Playing => {
                self.update_playing(input, now);
                Ok(())
            }
            Screen::GameOver(_) => self.update_game_over(input, now),
        }
    }

    fn update_menu(&mut self, input: &InputFrame, now: Instant) -> Result<(), SetupError> {
        match hovered_click(&mut self.menu_buttons, input) {
            Some(ButtonAction::Start(difficulty)) => self.start(difficulty, now),
            _ => Ok(()),
        }
    }

    fn update_game_over(&mut self, input: &InputFrame, now: Instant) -> Result<(), SetupError> {
        match hovered_click(&mut self.game_over_buttons, input) {
            Some(ButtonAction::PlayAgain) => self.start(self.difficulty, now),
            Some(ButtonAction::MainMenu) => {
                debug!("Returning to menu");
                self.screen = Screen::Menu;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn update_playing(&mut self, input: &InputFrame, now: Instant) {
        let expired = self.refresh_countdown(now);

        let step = self.config.timing.flip_step;
        if let Some(board) = self.board.as_mut() {
            for card in board.cards_mut() {
                card.tick_animation(step);
            }
        }

        self.resolve_pair(now);

        if !expired {
            if let Some(point) = input.click_position() {
                self.select_card_at(point, now);
            }
        }

        if self.board.as_ref().is_some_and(Board::is_cleared) {
            self.finish(Outcome::Cleared);
        } else if expired {
            self.finish(Outcome::TimeUp);
        }
    }

    /// Recompute `time_left` from the session start; true once it hits zero.
    fn refresh_countdown(&mut self, now: Instant) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };
        let elapsed = now.saturating_duration_since(started_at).as_secs();
        let limit = u64::from(self.difficulty.preset().time_limit_secs);
        self.time_left = u32::try_from(limit.saturating_sub(elapsed)).unwrap_or(0);
        self.time_left == 0
    }

    fn resolve_pair(&mut self, now: Instant) {
        let Selection::Resolving {
            first,
            second,
            matched,
            until,
        } = self.selection
        else {
            return;
        };
        if now < until {
            return;
        }
        if !matched {
            if let Some(board) = self.board.as_mut() {
                for index in [first, second] {
                    if let Some(card) = board.card_mut(index) {
                        card.animate_flip();
                        card.conceal();
                    }
                }
            }
            debug!(first, second, "Pair flipped back");
        }
        self.selection = Selection::Idle;
    }

    fn select_card_at(&mut self, point: Point, now: Instant) {
        let delay = self.config.timing.mismatch_delay();
        let Some(board) = self.board.as_mut() else {
            return;
        };
        let Some(index) = board.selectable_at(point) else {
            return;
        };

        match self.selection {
            Selection::Idle => {
                if let Some(card) = board.card_mut(index) {
                    card.reveal();
                    card.animate_flip();
                }
                self.selection = Selection::One(index);
                debug!(index, "First card selected");
            }
            Selection::One(first) if first != index => {
                if let Some(card) = board.card_mut(index) {
                    card.reveal();
                    card.animate_flip();
                }
                self.moves += 1;

                let cards = board.cards();
                let matched = cards[first].logo() == cards[index].logo();
                if matched {
                    for idx in [first, index] {
                        if let Some(card) = board.card_mut(idx) {
                            card.mark_matched();
                        }
                    }
                    self.score += 1;
                }
                debug!(
                    first,
                    second = index,
                    matched,
                    moves = self.moves,
                    score = self.score,
                    "Pair selected"
                );
                self.selection = Selection::Resolving {
                    first,
                    second: index,
                    matched,
                    until: now + delay,
                };
            }
            _ => {}
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.screen = Screen::GameOver(outcome);
        info!(
            ?outcome,
            difficulty = %self.difficulty,
            score = self.score,
            moves = self.moves,
            time_left = self.time_left,
            "Game over"
        );
    }
}

fn hovered_click(buttons: &mut [Button], input: &InputFrame) -> Option<ButtonAction> {
    let mut clicked = None;
    for button in buttons.iter_mut() {
        button.check_hover(input.pointer);
        if clicked.is_none() && button.is_clicked(input) {
            clicked = Some(button.action());
        }
    }
    clicked
}

/// Format seconds as `MM:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
