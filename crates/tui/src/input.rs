use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use memmatch_core::{InputFrame, Point};
use ratatui::layout::Rect;

/// Folds raw terminal events into one [`InputFrame`] per tick.
///
/// The pointer survives across ticks because terminals only report it when it moves.
#[derive(Debug, Default)]
pub struct InputCollector {
    frame: InputFrame,
}

impl InputCollector {
    pub fn push(&mut self, event: &Event, canvas: Rect) {
        match event {
            Event::Key(key) => {
                if is_quit(key) {
                    self.frame.quit = true;
                }
            }
            Event::Mouse(mouse) => {
                let pointer = to_canvas(mouse.column, mouse.row, canvas);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        // First click of the tick wins.
                        if !self.frame.clicked {
                            self.frame.pointer = pointer;
                            self.frame.clicked = pointer.is_some();
                        }
                    }
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        if !self.frame.clicked {
                            self.frame.pointer = pointer;
                        }
                    }
                    _ => {}
                }
            }
            Event::FocusLost => {
                if !self.frame.clicked {
                    self.frame.pointer = None;
                }
            }
            _ => {}
        }
    }

    /// Hand over this tick's frame and start the next one.
    pub fn take(&mut self) -> InputFrame {
        let frame = self.frame;
        self.frame.clicked = false;
        self.frame.quit = false;
        frame
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn to_canvas(column: u16, row: u16, canvas: Rect) -> Option<Point> {
    if column < canvas.x || row < canvas.y || column >= canvas.right() || row >= canvas.bottom() {
        return None;
    }
    Some(Point::new(column - canvas.x, row - canvas.y))
}
