//! Real terminal backend
//!
//! Owns the ratatui terminal and a background task that merges crossterm
//! events with tick and render intervals into one event stream.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::{
    cursor,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, Event as CrosstermEvent,
        KeyEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::{FutureExt, StreamExt};
use ratatui::backend::CrosstermBackend as Backend;
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use crate::infrastructure::tui::{io, Event, Frame, TuiLike, IO};

pub struct RealTui {
    terminal: ratatui::Terminal<Backend<IO>>,
    task: Option<JoinHandle<()>>,
    cancellation_token: CancellationToken,
    event_rx: UnboundedReceiver<Event>,
    event_tx: UnboundedSender<Event>,
    frame_rate: f64,
    tick_rate: f64,
}

impl RealTui {
    pub fn new() -> Result<Self> {
        let terminal = ratatui::Terminal::new(Backend::new(io()))?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            task: None,
            cancellation_token: CancellationToken::new(),
            event_rx,
            event_tx,
            frame_rate: 30.0,
            tick_rate: 4.0,
        })
    }

    pub fn tick_rate(mut self, tick_rate: f64) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    fn start(&mut self) {
        self.cancel();
        self.cancellation_token = CancellationToken::new();

        let event_tx = self.event_tx.clone();
        let cancellation_token = self.cancellation_token.clone();
        let tick_delay = Duration::from_secs_f64(1.0 / self.tick_rate);
        let render_delay = Duration::from_secs_f64(1.0 / self.frame_rate);

        self.task = Some(tokio::spawn(async move {
            let mut reader = crossterm::event::EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_delay);
            let mut render_interval = tokio::time::interval(render_delay);
            let _ = event_tx.send(Event::Init);
            loop {
                let tick = tick_interval.tick();
                let render = render_interval.tick();
                let crossterm_event = reader.next().fuse();
                tokio::select! {
                    _ = cancellation_token.cancelled() => {
                        break;
                    }
                    maybe_event = crossterm_event => {
                        match maybe_event {
                            Some(Ok(evt)) => {
                                match evt {
                                    CrosstermEvent::Key(key) => {
                                        if key.kind == KeyEventKind::Press {
                                            let _ = event_tx.send(Event::Key(key));
                                        }
                                    }
                                    CrosstermEvent::Mouse(mouse) => {
                                        let _ = event_tx.send(Event::Mouse(mouse));
                                    }
                                    CrosstermEvent::Resize(x, y) => {
                                        let _ = event_tx.send(Event::Resize(x, y));
                                    }
                                    CrosstermEvent::FocusGained => {
                                        let _ = event_tx.send(Event::FocusGained);
                                    }
                                    CrosstermEvent::FocusLost => {
                                        let _ = event_tx.send(Event::FocusLost);
                                    }
                                    CrosstermEvent::Paste(s) => {
                                        let _ = event_tx.send(Event::Paste(s));
                                    }
                                }
                            }
                            Some(Err(_)) => {
                                let _ = event_tx.send(Event::Error);
                            }
                            None => {}
                        }
                    }
                    _ = tick => {
                        let _ = event_tx.send(Event::Tick);
                    }
                    _ = render => {
                        let _ = event_tx.send(Event::Render);
                    }
                }
            }
        }));
    }

    fn cancel(&self) {
        self.cancellation_token.cancel();
    }

    pub fn enter(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            io(),
            EnterAlternateScreen,
            EnableBracketedPaste,
            cursor::Hide
        )?;
        self.start();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.cancel();
        if crossterm::terminal::is_raw_mode_enabled()? {
            self.terminal.flush()?;
            crossterm::execute!(
                io(),
                DisableBracketedPaste,
                DisableMouseCapture,
                LeaveAlternateScreen,
                cursor::Show
            )?;
            crossterm::terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    pub fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.terminal.draw(|frame| f(frame))?;
        Ok(())
    }

    pub fn resize(&mut self, area: ratatui::prelude::Rect) -> Result<()> {
        self.terminal.resize(area)?;
        Ok(())
    }

    pub async fn next_event(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }
}

impl TuiLike for RealTui {
    fn enter(&mut self) -> Result<()> {
        RealTui::enter(self)
    }

    fn exit(&mut self) -> Result<()> {
        RealTui::exit(self)
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        RealTui::draw(self, f)
    }

    fn resize(&mut self, area: ratatui::prelude::Rect) -> Result<()> {
        RealTui::resize(self, area)
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        Box::pin(self.next_event())
    }
}

impl Drop for RealTui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
