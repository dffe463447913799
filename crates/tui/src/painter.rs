use memmatch_core::{Align, DrawCommand, Point, Scene, Tone};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::theme::Theme;

/// Paints a [`Scene`] onto a buffer, offset to the canvas area and clipped to it.
pub struct Painter<'a> {
    theme: &'a Theme,
    canvas: Rect,
    clip: Rect,
}

impl<'a> Painter<'a> {
    pub fn new(theme: &'a Theme, canvas: Rect, buf: &Buffer) -> Self {
        Self {
            theme,
            canvas,
            clip: canvas.intersection(buf.area),
        }
    }

    pub fn paint(&self, scene: &Scene, buf: &mut Buffer) {
        for command in scene.commands() {
            match command {
                DrawCommand::Panel { rect, tone } => self.panel(*rect, *tone, buf),
                DrawCommand::Text {
                    anchor,
                    align,
                    text,
                    tone,
                    bold,
                } => self.text(*anchor, *align, text, (*tone, *bold), buf),
            }
        }
    }

    fn panel(&self, rect: memmatch_core::Rect, tone: Tone, buf: &mut Buffer) {
        let area = Rect::new(
            self.canvas.x.saturating_add(rect.x),
            self.canvas.y.saturating_add(rect.y),
            rect.width,
            rect.height,
        )
        .intersection(self.clip);
        if area.is_empty() {
            return;
        }

        let style = Style::default().bg(self.theme.fill(tone));
        if area.width < 2 || area.height < 2 {
            buf.set_style(area, style);
            return;
        }
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.edge))
            .style(style)
            .render(area, buf);
    }

    fn text(
        &self,
        anchor: Point,
        align: Align,
        text: &str,
        (tone, bold): (Tone, bool),
        buf: &mut Buffer,
    ) {
        let Point { x, y } = anchor;
        let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let start = match align {
            Align::Left => x,
            Align::Center => x.saturating_sub(len / 2),
            Align::Right => x.saturating_sub(len),
        };
        let x = self.canvas.x.saturating_add(start);
        let y = self.canvas.y.saturating_add(y);
        if y < self.clip.y || y >= self.clip.bottom() || x < self.clip.x || x >= self.clip.right()
        {
            return;
        }

        let mut style = Style::default().fg(self.theme.ink(tone));
        if matches!(tone, Tone::CardFace(_) | Tone::CardBack | Tone::Button { .. }) {
            style = style.bg(self.theme.fill(tone));
        }
        if bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        let width = usize::from(self.clip.right() - x);
        buf.set_stringn(x, y, text, width, style);
    }
}

/// Centre a `width` x `height` area inside `area`, shrinking it to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use memmatch_core::{AppConfig, GameState};
    use ratatui::style::Color;

    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf.get(x, y).symbol().to_string())
            .collect()
    }

    #[test]
    fn centered_rect_shrinks_to_fit() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(centered_rect(80, 24, area), Rect::new(10, 3, 80, 24));
        assert_eq!(
            centered_rect(80, 24, Rect::new(0, 0, 60, 20)),
            Rect::new(0, 0, 60, 20)
        );
    }

    #[test]
    fn menu_title_is_painted_at_the_canvas_offset() {
        let state = GameState::with_seed(AppConfig::default(), 1);
        let scene = Scene::build(&state);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 84, 26);
        let canvas = centered_rect(80, 24, area);
        let mut buf = Buffer::empty(area);

        Painter::new(&theme, canvas, &buf).paint(&scene, &mut buf);

        let title_row = row(&buf, canvas.y + 2);
        assert!(title_row.contains("Tech Logo Memory Match"), "{title_row:?}");
        assert!(row(&buf, 0).trim().is_empty());
    }

    #[test]
    fn panels_are_filled_and_clipped() {
        let state = GameState::with_seed(AppConfig::default(), 1);
        let scene = Scene::build(&state);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        Painter::new(&theme, Rect::new(0, 0, 80, 24), &buf).paint(&scene, &mut buf);

        let easy = state.buttons()[0].rect();
        let inside = buf.get(easy.x + 1, easy.y + 1);
        assert_eq!(inside.bg, Color::Rgb(0, 255, 0));
        // Hard sits below the clipped area and must not panic or spill.
        assert!(state.buttons()[2].rect().y >= 10);
    }

    #[test]
    fn right_aligned_text_ends_at_the_anchor() {
        let mut scene_state = GameState::with_seed(AppConfig::default(), 5);
        scene_state
            .start(memmatch_core::Difficulty::Easy, std::time::Instant::now())
            .expect("deal");
        let scene = Scene::build(&scene_state);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        Painter::new(&theme, area, &buf).paint(&scene, &mut buf);

        let hud = row(&buf, 0);
        assert!(hud.trim_end().ends_with("Time: 01:00"), "{hud:?}");
        assert_eq!(hud.trim_end().len(), 78);
        assert!(hud.starts_with("  Matches: 0"));
    }
}
