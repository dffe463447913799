use std::{
    io::{self, Stdout},
    thread,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use memmatch_core::{AppConfig, GameState, Scene};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use tokio::{
    sync::mpsc::{self, error::TryRecvError},
    time::MissedTickBehavior,
};
use tracing::{debug, info};

use crate::{
    input::InputCollector,
    painter::{centered_rect, Painter},
    theme::Theme,
};

const INPUT_POLL: Duration = Duration::from_millis(50);

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enter raw mode")?;

        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err).context("failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
                return Err(err).context("failed to create terminal");
            }
        };

        // From here on, Drop restores the terminal on failure.
        let mut session = Self { terminal };
        session.terminal.hide_cursor().context("failed to hide cursor")?;
        session.terminal.clear().context("failed to clear terminal")?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

pub struct MemoryMatchApp {
    state: GameState,
    theme: Theme,
    input: InputCollector,
    canvas: Rect,
}

impl MemoryMatchApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: GameState::new(config),
            theme: Theme::default(),
            input: InputCollector::default(),
            canvas: Rect::default(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut session = TerminalSession::new()?;
        let (event_tx, mut event_rx) = mpsc::channel::<Event>(256);
        spawn_input_thread(event_tx);

        let mut ticker = tokio::time::interval(self.state.config().timing.tick_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!(
            tick_rate = self.state.config().timing.tick_rate_hz,
            "Entering main loop"
        );

        loop {
            ticker.tick().await;

            let size = session.terminal.size()?;
            self.canvas = self.canvas_area(size);

            loop {
                match event_rx.try_recv() {
                    Ok(event) => self.input.push(&event, self.canvas),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        debug!("Input thread closed");
                        return Ok(());
                    }
                }
            }

            let frame_input = self.input.take();
            if frame_input.quit {
                info!("Quit requested");
                break;
            }
            self.state
                .update(&frame_input, Instant::now())
                .context("failed to set up the board")?;

            session.terminal.draw(|frame| self.draw(frame))?;
        }

        Ok(())
    }

    fn canvas_area(&self, area: Rect) -> Rect {
        let layout = &self.state.config().layout;
        centered_rect(layout.canvas_width, layout.canvas_height, area)
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.size();
        frame.render_widget(
            Block::default().style(
                Style::default()
                    .bg(self.theme.primary_bg)
                    .fg(self.theme.primary_fg),
            ),
            area,
        );

        let scene = Scene::build(&self.state);
        let buf = frame.buffer_mut();
        Painter::new(&self.theme, self.canvas, buf).paint(&scene, buf);
    }
}

fn spawn_input_thread(sender: mpsc::Sender<Event>) {
    thread::spawn(move || loop {
        match event::poll(INPUT_POLL) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(evt).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.is_closed() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}
