// bubble-tabbar/src/tui/tui_app.rs
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyEvent, MouseEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend};
use std::{
    io::stdout,
    time::{Duration, Instant},
};

use crate::tui::input_backend::{InputEvent, InputHandler};

/// An application driven by [`Tui::run`].
pub trait TuiApp {
    fn render(&mut self, frame: &mut TerminalFrame);
    /// Input gathered since the previous frame, in arrival order.
    fn handle_events(&mut self, events: Vec<InputEvent>);
    fn before_frame(&mut self) {}
    fn should_quit(&self) -> bool;
    fn should_draw(&mut self) -> bool {
        true
    }
}
pub use ratatui::{buffer::Buffer, layout::Rect};

/// Contract shared by every widget in this crate.
pub trait TuiWidget: Send + Sync {
    fn draw(&mut self, area: Rect, buf: &mut Buffer);
    /// Returns true if the key was consumed.
    fn key_event(&mut self, event: KeyEvent) -> bool;
    #[allow(unused)]
    fn mouse_event(&mut self, event: MouseEvent) -> bool {
        false
    }
    fn focus(&mut self);
    fn unfocus(&mut self);
    fn is_focused(&self) -> bool;
    fn need_draw(&self) -> bool {
        true
    }
}

pub type TerminalFrame<'a> = ratatui::Frame<'a>;

const DEFAULT_FRAME_TIME: Duration = Duration::from_millis(50);

// Leaves raw mode and the alternate screen even when the loop bails out early.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

pub struct Tui {
    input: InputHandler,
    frame_length: Duration,
}

impl Tui {
    pub fn new() -> Self {
        Self {
            input: InputHandler::new(),
            frame_length: DEFAULT_FRAME_TIME,
        }
    }

    pub fn with_frame_length(mut self, frame_time: Duration) -> Self {
        self.frame_length = frame_time;
        self
    }

    /// Run `app` until it asks to quit, then hand it back. Must be called
    /// from inside a tokio runtime.
    pub async fn run<A: TuiApp>(mut self, mut app: A) -> Result<A> {
        let _guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        self.input.start()?;

        let mut last_size = terminal.size()?;
        let mut first_frame = true;
        while !app.should_quit() {
            let frame_start = Instant::now();
            app.before_frame();

            let events = self.input.drain();
            if !events.is_empty() {
                app.handle_events(events);
            }

            let size = terminal.size().unwrap_or(last_size);
            let resized = size != last_size;
            if first_frame || resized || app.should_draw() {
                last_size = size;
                first_frame = false;
                terminal.draw(|frame| app.render(frame))?;
            }

            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_length {
                tokio::time::sleep(self.frame_length - elapsed).await;
            }
        }

        self.input.stop();
        Ok(app)
    }
}

impl Default for Tui {
    fn default() -> Self {
        Self::new()
    }
}
