//! Clickable buttons on the menu and game-over screens.

use crate::{
    config::LayoutConfig,
    geometry::{Point, Rect},
    input::InputFrame,
    layout::{self, GAME_OVER_FIRST_BUTTON_ROW, MENU_FIRST_BUTTON_ROW},
    models::Difficulty,
};

/// What pressing a button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    /// Deal a new board at this difficulty.
    Start(Difficulty),
    /// Deal a new board at the current difficulty.
    PlayAgain,
    /// Return to the difficulty menu.
    MainMenu,
}

impl ButtonAction {
    /// Caption drawn on the button.
    pub fn label(self) -> &'static str {
        match self {
            ButtonAction::Start(difficulty) => difficulty.name(),
            ButtonAction::PlayAgain => "Play Again",
            ButtonAction::MainMenu => "Main Menu",
        }
    }
}

/// A rectangle that reacts to hover and clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    rect: Rect,
    action: ButtonAction,
    hovered: bool,
}

impl Button {
    /// Button at `rect` triggering `action`.
    pub fn new(rect: Rect, action: ButtonAction) -> Self {
        Self {
            rect,
            action,
            hovered: false,
        }
    }

    /// The three difficulty buttons of the main menu.
    pub fn menu_set(layout: &LayoutConfig) -> Vec<Button> {
        let actions = Difficulty::ALL.map(ButtonAction::Start);
        Self::column(layout, MENU_FIRST_BUTTON_ROW, &actions)
    }

    /// Play Again and Main Menu, shown after a game ends.
    pub fn game_over_set(layout: &LayoutConfig) -> Vec<Button> {
        Self::column(
            layout,
            GAME_OVER_FIRST_BUTTON_ROW,
            &[ButtonAction::PlayAgain, ButtonAction::MainMenu],
        )
    }

    fn column(layout: &LayoutConfig, first_row: u16, actions: &[ButtonAction]) -> Vec<Button> {
        let count = u16::try_from(actions.len()).unwrap_or(u16::MAX);
        layout::button_column(layout, first_row, count)
            .into_iter()
            .zip(actions)
            .map(|(rect, action)| Button::new(rect, *action))
            .collect()
    }

    /// Position on the canvas.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Effect of pressing.
    pub fn action(&self) -> ButtonAction {
        self.action
    }

    /// Caption.
    pub fn label(&self) -> &'static str {
        self.action.label()
    }

    /// Whether the pointer rested on the button at the last check.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Refresh the hover flag from the pointer and return it.
    pub fn check_hover(&mut self, pointer: Option<Point>) -> bool {
        self.hovered = pointer.is_some_and(|point| self.rect.contains(point));
        self.hovered
    }

    /// Whether this tick's click landed on the button.
    pub fn is_clicked(&self, input: &InputFrame) -> bool {
        input
            .click_position()
            .is_some_and(|point| self.rect.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_difficulties_in_order() {
        let buttons = Button::menu_set(&LayoutConfig::default());
        let labels: Vec<_> = buttons.iter().map(Button::label).collect();
        assert_eq!(labels, ["Easy", "Medium", "Hard"]);
    }

    #[test]
    fn hover_follows_pointer() {
        let mut button = Button::new(Rect::new(10, 10, 20, 3), ButtonAction::MainMenu);
        assert!(button.check_hover(Some(Point::new(15, 11))));
        assert!(!button.check_hover(Some(Point::new(9, 11))));
        assert!(!button.check_hover(None));
    }

    #[test]
    fn click_requires_press_inside() {
        let button = Button::new(Rect::new(10, 10, 20, 3), ButtonAction::PlayAgain);
        assert!(button.is_clicked(&InputFrame::click(Point::new(29, 12))));
        assert!(!button.is_clicked(&InputFrame::hover(Point::new(15, 11))));
        assert!(!button.is_clicked(&InputFrame::click(Point::new(30, 12))));
    }
}
