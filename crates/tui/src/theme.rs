use memmatch_core::{ButtonAction, Difficulty, Logo, Tone};
use ratatui::style::Color;

const ORANGE: Color = Color::Rgb(255, 165, 0);
const BLUE: Color = Color::Rgb(0, 0, 255);
const LIGHT_BLUE: Color = Color::Rgb(173, 216, 230);
const BLACK: Color = Color::Rgb(0, 0, 0);
const GREEN: Color = Color::Rgb(0, 255, 0);
const YELLOW: Color = Color::Rgb(255, 255, 0);
const RED: Color = Color::Rgb(255, 0, 0);
const GRAY: Color = Color::Rgb(200, 200, 200);
const RUST: Color = Color::Rgb(183, 65, 14);
const KUBERNETES: Color = Color::Rgb(50, 108, 229);

#[derive(Debug, Clone)]
pub struct Theme {
    pub primary_bg: Color,
    pub primary_fg: Color,
    pub card_back: Color,
    pub edge: Color,
    pub success: Color,
    pub danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_bg: Color::Black,
            primary_fg: Color::White,
            card_back: GRAY,
            edge: BLACK,
            success: Color::Green,
            danger: Color::Red,
        }
    }
}

impl Theme {
    /// Background of a panel drawn with `tone`.
    pub fn fill(&self, tone: Tone) -> Color {
        match tone {
            Tone::CardBack => self.card_back,
            Tone::CardFace(logo) => logo_color(logo),
            Tone::Button { action, hovered } => button_color(action, hovered),
            Tone::Text | Tone::Success | Tone::Danger => self.primary_bg,
        }
    }

    /// Foreground of text drawn with `tone`.
    pub fn ink(&self, tone: Tone) -> Color {
        match tone {
            Tone::Text => self.primary_fg,
            Tone::Success => self.success,
            Tone::Danger => self.danger,
            Tone::CardBack | Tone::CardFace(_) | Tone::Button { .. } => {
                contrast_color(&self.fill(tone), self.primary_fg)
            }
        }
    }
}

fn logo_color(logo: Logo) -> Color {
    match logo {
        Logo::Aws => ORANGE,
        Logo::Azure => BLUE,
        Logo::Docker => LIGHT_BLUE,
        Logo::Github => BLACK,
        Logo::Python => GREEN,
        Logo::Javascript => YELLOW,
        Logo::React => BLUE,
        Logo::Nodejs => GREEN,
        Logo::Kubernetes => KUBERNETES,
        Logo::Rust => RUST,
    }
}

fn button_color(action: ButtonAction, hovered: bool) -> Color {
    let (idle, hover) = match action {
        ButtonAction::Start(Difficulty::Easy) => (GREEN, Color::Rgb(100, 255, 100)),
        ButtonAction::Start(Difficulty::Medium) => (YELLOW, Color::Rgb(255, 255, 100)),
        ButtonAction::Start(Difficulty::Hard) => (RED, Color::Rgb(255, 100, 100)),
        ButtonAction::PlayAgain => (BLUE, LIGHT_BLUE),
        ButtonAction::MainMenu => (GRAY, Color::Rgb(230, 230, 230)),
    };
    if hovered {
        hover
    } else {
        idle
    }
}

fn contrast_color(color: &Color, fallback: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let luminance =
                0.299 * f64::from(*r) + 0.587 * f64::from(*g) + 0.114 * f64::from(*b);
            if luminance > 186.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        _ => fallback,
    }
}
