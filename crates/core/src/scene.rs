//! Presentation as data: a frame is a list of draw commands built from the
//! game state. Front ends paint the commands; nothing here touches a terminal.

use crate::{
    button::{Button, ButtonAction},
    card::{Card, FlipPhase},
    config::LayoutConfig,
    game::{format_clock, GameState, Outcome, Screen},
    geometry::{Point, Rect},
    layout::{self, HUD_INSET, STATS_ROW, SUBTITLE_ROW, TITLE_ROW},
    models::Logo,
};

/// Heading of the main menu.
pub const TITLE: &str = "Tech Logo Memory Match";
/// Line under the heading.
pub const SUBTITLE: &str = "Select Difficulty";

/// Percentage of the card width that must be open before the label shows.
const LABEL_VISIBLE_PERCENT: u32 = 70;

/// Semantic colour role; the front end decides the actual colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Back of a face-down card.
    CardBack,
    /// Face of a revealed card.
    CardFace(Logo),
    /// A button, possibly under the pointer.
    Button {
        /// What the button does.
        action: ButtonAction,
        /// Pointer is over it.
        hovered: bool,
    },
    /// Ordinary text.
    Text,
    /// Win banner.
    Success,
    /// Time-up banner.
    Danger,
}

/// Horizontal anchoring of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Text starts at the anchor.
    Left,
    /// Text is centred on the anchor.
    Center,
    /// Text ends just before the anchor.
    Right,
}

/// One primitive to paint, in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// A bordered, filled rectangle.
    Panel {
        /// Area to fill.
        rect: Rect,
        /// Fill role.
        tone: Tone,
    },
    /// A single line of text.
    Text {
        /// Reference point, interpreted through `align`.
        anchor: Point,
        /// Horizontal anchoring.
        align: Align,
        /// Content.
        text: String,
        /// Colour role; for text over a panel, the panel's tone.
        tone: Tone,
        /// Draw emphasised.
        bold: bool,
    },
}

/// A complete frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    /// Build the frame for the current screen.
    pub fn build(state: &GameState) -> Self {
        let layout = &state.config().layout;
        let mut scene = Scene::default();
        match state.screen() {
            Screen::Menu => scene.menu(state, layout),
            Screen::Playing => scene.playing(state, layout),
            Screen::GameOver(outcome) => scene.game_over(state, layout, outcome),
        }
        scene
    }

    /// Commands in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All text runs, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Panel { .. } => None,
        })
    }

    fn menu(&mut self, state: &GameState, layout: &LayoutConfig) {
        self.text(
            layout::centered(layout, TITLE_ROW),
            Align::Center,
            TITLE,
            Tone::Text,
            true,
        );
        self.text(
            layout::centered(layout, SUBTITLE_ROW),
            Align::Center,
            SUBTITLE,
            Tone::Text,
            false,
        );
        self.buttons(state.buttons());
    }

    fn playing(&mut self, state: &GameState, layout: &LayoutConfig) {
        for card in state.cards() {
            self.card(card);
        }

        self.text(
            Point::new(HUD_INSET, 0),
            Align::Left,
            format!("Matches: {}", state.score()),
            Tone::Text,
            false,
        );
        self.text(
            Point::new(HUD_INSET, 1),
            Align::Left,
            format!("Moves: {}", state.moves()),
            Tone::Text,
            false,
        );
        self.text(
            Point::new(layout.canvas_width.saturating_sub(HUD_INSET), 0),
            Align::Right,
            format!("Time: {}", format_clock(state.time_left())),
            Tone::Text,
            false,
        );
    }

    fn game_over(&mut self, state: &GameState, layout: &LayoutConfig, outcome: Outcome) {
        let (banner, tone) = match outcome {
            Outcome::Cleared => ("You Win!", Tone::Success),
            Outcome::TimeUp => ("Time's Up!", Tone::Danger),
        };
        self.text(
            layout::centered(layout, TITLE_ROW),
            Align::Center,
            banner,
            tone,
            true,
        );

        let stats = [
            format!("Matches: {}", state.score()),
            format!("Moves: {}", state.moves()),
            format!("Difficulty: {}", state.difficulty()),
        ];
        let column = layout::stats_column(layout);
        for (row, line) in (STATS_ROW..).zip(stats) {
            self.text(Point::new(column, row), Align::Left, line, Tone::Text, false);
        }

        self.buttons(state.buttons());
    }

    fn card(&mut self, card: &Card) {
        let rect = card.rect();
        let face = Tone::CardFace(card.logo());

        if card.is_matched() {
            self.face(rect, card.logo());
            return;
        }

        match card.flip_phase() {
            None if card.is_revealed() => self.face(rect, card.logo()),
            None => self.panel(rect, Tone::CardBack),
            Some(FlipPhase::Closing { width }) => {
                if width > 0 {
                    self.panel(rect.narrowed(width), Tone::CardBack);
                }
            }
            Some(FlipPhase::Opening { width }) => {
                if width == 0 {
                    return;
                }
                if card.is_revealed() {
                    let open_enough = u32::from(width) * 100
                        > u32::from(rect.width) * LABEL_VISIBLE_PERCENT;
                    self.panel(rect.narrowed(width), face);
                    if open_enough {
                        self.label(rect, card.logo());
                    }
                } else {
                    self.panel(rect.narrowed(width), Tone::CardBack);
                }
            }
        }
    }

    fn face(&mut self, rect: Rect, logo: Logo) {
        self.panel(rect, Tone::CardFace(logo));
        self.label(rect, logo);
    }

    fn label(&mut self, rect: Rect, logo: Logo) {
        self.text(
            rect.center(),
            Align::Center,
            logo.label(),
            Tone::CardFace(logo),
            false,
        );
    }

    fn buttons(&mut self, buttons: &[Button]) {
        for button in buttons {
            let tone = Tone::Button {
                action: button.action(),
                hovered: button.is_hovered(),
            };
            self.panel(button.rect(), tone);
            self.text(button.rect().center(), Align::Center, button.label(), tone, true);
        }
    }

    fn panel(&mut self, rect: Rect, tone: Tone) {
        self.commands.push(DrawCommand::Panel { rect, tone });
    }

    fn text(&mut self, anchor: Point, align: Align, text: impl Into<String>, tone: Tone, bold: bool) {
        self.commands.push(DrawCommand::Text {
            anchor,
            align,
            text: text.into(),
            tone,
            bold,
        });
    }
}
