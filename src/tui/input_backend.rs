// bubble-tabbar/src/tui/input_backend.rs
use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
}

#[derive(Clone, Copy, Debug)]
pub struct InputBackendOpts {
    /// Events buffered before a batch is shipped early.
    batch_size: usize,
    /// Interval at which partial batches are shipped.
    tick_rate: Duration,
}

impl Default for InputBackendOpts {
    fn default() -> Self {
        Self {
            batch_size: 16,
            tick_rate: Duration::from_millis(25),
        }
    }
}

impl InputBackendOpts {
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }
}

/// Reads terminal input on a tokio task and hands it to the UI loop in batches.
pub struct InputHandler {
    rx: UnboundedReceiver<Vec<InputEvent>>,
    backend: Option<InputBackend>,
    task: Option<JoinHandle<()>>,
    cancel: CancellationToken,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_opts(InputBackendOpts::default())
    }

    pub fn with_opts(opts: InputBackendOpts) -> Self {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        Self {
            rx,
            backend: Some(InputBackend {
                tx,
                batch: Vec::with_capacity(opts.batch_size),
                cancel: cancel.clone(),
                opts,
            }),
            task: None,
            cancel,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some() && !self.cancel.is_cancelled()
    }

    pub fn start(&mut self) -> Result<()> {
        let backend = self
            .backend
            .take()
            .ok_or(anyhow!("input handler already started"))?;
        self.task = Some(tokio::spawn(backend.run()));
        Ok(())
    }

    pub fn stop(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Everything received so far, oldest first.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while let Ok(batch) = self.rx.try_recv() {
            events.extend(batch);
        }
        events
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputHandler {
    fn drop(&mut self) {
        self.stop();
    }
}

struct InputBackend {
    tx: UnboundedSender<Vec<InputEvent>>,
    batch: Vec<InputEvent>,
    cancel: CancellationToken,
    opts: InputBackendOpts,
}

impl InputBackend {
    fn push(&mut self, event: InputEvent) {
        self.batch.push(event);
        if self.batch.len() >= self.opts.batch_size {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if !self.batch.is_empty() {
            let _ = self.tx.send(std::mem::take(&mut self.batch));
        }
    }

    async fn run(mut self) {
        let mut reader = EventStream::new();
        let mut interval = tokio::time::interval(self.opts.tick_rate);
        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => break,
                maybe_event = reader.next().fuse() => match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.push(InputEvent::Key(key));
                    }
                    Some(Ok(CrosstermEvent::Mouse(mouse))) => self.push(InputEvent::Mouse(mouse)),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        error!("terminal input error: {err}");
                        break;
                    }
                    None => break,
                },
                _ = interval.tick() => self.flush(),
            }
        }
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn backend(batch_size: usize) -> (InputBackend, UnboundedReceiver<Vec<InputEvent>>) {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let opts = InputBackendOpts::default().batch_size(batch_size);
        let backend = InputBackend {
            tx,
            batch: Vec::new(),
            cancel: CancellationToken::new(),
            opts,
        };
        (backend, rx)
    }

    fn key(c: char) -> InputEvent {
        InputEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn full_batch_ships_immediately() {
        let (mut backend, mut rx) = backend(2);
        backend.push(key('a'));
        assert!(rx.try_recv().is_err());
        backend.push(key('b'));
        assert_eq!(rx.try_recv().unwrap(), vec![key('a'), key('b')]);
    }

    #[test]
    fn flush_ships_partial_batch_once() {
        let (mut backend, mut rx) = backend(8);
        backend.push(key('x'));
        backend.flush();
        backend.flush();
        assert_eq!(rx.try_recv().unwrap(), vec![key('x')]);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn drain_concatenates_batches() {
        let mut handler = InputHandler::new();
        let mut backend = handler.backend.take().unwrap();
        backend.push(key('1'));
        backend.flush();
        backend.push(key('2'));
        backend.flush();
        assert_eq!(handler.drain(), vec![key('1'), key('2')]);
        assert!(handler.drain().is_empty());
        assert!(!handler.is_running());
    }
}
