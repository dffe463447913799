//! A single card on the board and its flip animation.

use crate::{
    geometry::{Point, Rect},
    models::Logo,
};

/// Progress value at which a flip animation finishes.
pub const FLIP_COMPLETE: u8 = 100;
/// Progress value separating the closing half from the opening half.
pub const FLIP_MIDPOINT: u8 = 50;

/// Which half of the flip animation a card is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipPhase {
    /// Face-down card shrinking towards its centre line.
    Closing {
        /// Visible width in cells.
        width: u16,
    },
    /// Card growing back, showing whichever face is current.
    Opening {
        /// Visible width in cells.
        width: u16,
    },
}

/// One grid cell: where it is, what it hides and how it is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    rect: Rect,
    logo: Logo,
    revealed: bool,
    matched: bool,
    animation_progress: u8,
    animating: bool,
}

impl Card {
    /// A face-down card.
    pub fn new(rect: Rect, logo: Logo) -> Self {
        Self {
            rect,
            logo,
            revealed: false,
            matched: false,
            animation_progress: 0,
            animating: false,
        }
    }

    /// Position on the canvas.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Identity on the face.
    pub fn logo(&self) -> Logo {
        self.logo
    }

    /// Whether the face is showing.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the card belongs to a found pair.
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Whether a flip animation is running.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Flip progress in `0..100`; zero whenever idle.
    pub fn animation_progress(&self) -> u8 {
        self.animation_progress
    }

    /// Face-down, unmatched and still.
    pub fn is_selectable(&self) -> bool {
        !self.revealed && !self.matched && !self.animating
    }

    /// Whether a click at `point` would pick this card.
    pub fn accepts_click(&self, point: Point) -> bool {
        self.is_selectable() && self.rect.contains(point)
    }

    /// Turn the face up.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Turn the face down again. Matched cards stay up.
    pub fn conceal(&mut self) {
        if !self.matched {
            self.revealed = false;
        }
    }

    /// Lock the card into a found pair. Matched cards are always revealed.
    pub fn mark_matched(&mut self) {
        self.matched = true;
        self.revealed = true;
    }

    /// Restart the flip animation from the beginning.
    pub fn animate_flip(&mut self) {
        self.animating = true;
        self.animation_progress = 0;
    }

    /// Advance the animation by one tick of `step` progress.
    pub fn tick_animation(&mut self, step: u8) {
        if !self.animating {
            return;
        }
        self.animation_progress = self.animation_progress.saturating_add(step);
        if self.animation_progress >= FLIP_COMPLETE {
            self.animation_progress = 0;
            self.animating = false;
        }
    }

    /// Current half of the animation with the visible width, or `None` when idle.
    pub fn flip_phase(&self) -> Option<FlipPhase> {
        if !self.animating {
            return None;
        }
        let full = u32::from(self.rect.width);
        let progress = u32::from(self.animation_progress);
        let phase = if self.animation_progress < FLIP_MIDPOINT {
            FlipPhase::Closing {
                width: scaled(full, 100 - progress * 2),
            }
        } else {
            FlipPhase::Opening {
                width: scaled(full, progress * 2 - 100),
            }
        };
        Some(phase)
    }
}

fn scaled(full: u32, percent: u32) -> u16 {
    u16::try_from(full * percent / 100).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card::new(Rect::new(0, 0, 10, 4), Logo::Docker)
    }

    #[test]
    fn new_cards_are_face_down() {
        let card = card();
        assert!(!card.is_revealed());
        assert!(!card.is_matched());
        assert!(card.is_selectable());
        assert_eq!(card.flip_phase(), None);
    }

    #[test]
    fn animation_runs_to_completion_then_resets() {
        let mut card = card();
        card.animate_flip();
        let mut ticks = 0;
        let mut last = 0;
        while card.is_animating() {
            assert!(card.animation_progress() >= last);
            last = card.animation_progress();
            card.tick_animation(8);
            ticks += 1;
        }
        assert_eq!(ticks, 13);
        assert_eq!(card.animation_progress(), 0);
        assert!(card.is_selectable());
    }

    #[test]
    fn animating_cards_reject_clicks() {
        let mut card = card();
        card.animate_flip();
        assert!(!card.accepts_click(Point::new(1, 1)));
    }

    #[test]
    fn matched_implies_revealed() {
        let mut card = card();
        card.mark_matched();
        card.conceal();
        assert!(card.is_revealed());
        assert!(card.is_matched());
        assert!(!card.accepts_click(Point::new(1, 1)));
    }

    #[test]
    fn flip_phase_widths() {
        let mut card = card();
        card.animate_flip();
        assert_eq!(card.flip_phase(), Some(FlipPhase::Closing { width: 10 }));
        for _ in 0..3 {
            card.tick_animation(8);
        }
        // progress 24
        assert_eq!(card.flip_phase(), Some(FlipPhase::Closing { width: 5 }));
        for _ in 0..4 {
            card.tick_animation(8);
        }
        // progress 56
        assert_eq!(card.flip_phase(), Some(FlipPhase::Opening { width: 1 }));
        for _ in 0..5 {
            card.tick_animation(8);
        }
        // progress 96
        assert_eq!(card.flip_phase(), Some(FlipPhase::Opening { width: 9 }));
    }
}
