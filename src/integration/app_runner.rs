use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{cmd::TuiCommand, msg::list::ListMsg, msg::Msg, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        api::ApiClient,
        api_service::ApiService,
        config::Config,
        tui::{self, event_source::EventSource},
    },
    integration::runtime::Runtime,
    presentation::components::{
        ComposerInput, PostListComponent, StatusBarComponent, ThreadListComponent,
    },
};

/// Composition root and main loop
///
/// Wires the runtime, the API service and the terminal together, then loops:
/// pull one event, run the update cycle, apply host-level commands, render,
/// check for quit.
pub struct AppRunner {
    headless: bool,
    runtime: Runtime,
    events: EventSource,
    // In tests and non-interactive environments the terminal is absent
    tui: Option<Arc<Mutex<dyn tui::TuiLike + Send>>>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    // Presentation components (stateless/pure rendering)
    thread_list: ThreadListComponent,
    post_list: PostListComponent,
    composer: ComposerInput<'static>,
    status_bar: StatusBarComponent,
    // For service termination
    api_cancel: Option<CancellationToken>,
}

impl AppRunner {
    /// Create an AppRunner driving a real terminal and the configured server
    pub async fn new_with_tui(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config.clone());
        let mut runtime = Runtime::new(initial_state);

        // Start the API service in the background
        let client = ApiClient::new(config.base_url.clone());
        let (api_tx, api_cancel, api_service) = ApiService::new(client, runtime.raw_sender())?;
        api_service.run();

        runtime.executor_mut().set_api_sender(api_tx);
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.executor_mut().set_tui_sender(tui_cmd_tx);

        Ok(Self {
            headless: false,
            runtime,
            events: EventSource::real(Arc::clone(&tui)),
            tui: Some(tui),
            tui_cmd_rx,
            thread_list: ThreadListComponent::new(),
            post_list: PostListComponent::new(),
            composer: ComposerInput::new(),
            status_bar: StatusBarComponent::new(),
            api_cancel: Some(api_cancel),
        })
    }

    /// Create a headless AppRunner fed from a scripted event source
    ///
    /// No API service is attached; tests push `RawMsg::Api` events through
    /// the runtime's raw sender instead.
    pub fn new_headless(config: Config, events: EventSource) -> Self {
        let initial_state = AppState::new_with_config(config);
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        let mut runtime = Runtime::new(initial_state);
        runtime.executor_mut().set_tui_sender(tui_cmd_tx);

        Self {
            headless: true,
            runtime,
            events,
            tui: None,
            tui_cmd_rx,
            thread_list: ThreadListComponent::new(),
            post_list: PostListComponent::new(),
            composer: ComposerInput::new(),
            status_bar: StatusBarComponent::new(),
            api_cancel: None,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run the main loop until quit
    pub async fn run(&mut self) -> Result<()> {
        if let Some(tui) = &self.tui {
            tui.lock().await.enter()?;
        }

        // The thread list loads once on startup; everything after that is
        // event driven
        self.runtime.send_msg(Msg::Threads(ListMsg::LoadInitial));

        loop {
            let event = self.events.next().await;
            let exhausted = event.is_none();

            if let Some(e) = event {
                match e {
                    tui::Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
                    tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
                    tui::Event::Render => {
                        // Rendering happens below on every loop pass
                    }
                    tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
                    tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
                    tui::Event::Paste(s) => self.runtime.send_raw_msg(RawMsg::Paste(s)),
                    tui::Event::Error => {
                        self.runtime
                            .send_raw_msg(RawMsg::Error("terminal event error".to_string()));
                    }
                    tui::Event::Init
                    | tui::Event::Closed
                    | tui::Event::FocusGained
                    | tui::Event::FocusLost
                    | tui::Event::Mouse(_) => {}
                }
            }

            // Process Elm update cycle and execute commands
            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }

            // Host-level commands (resize)
            while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
                match cmd {
                    TuiCommand::Resize { width, height } => {
                        if let Some(tui) = &self.tui {
                            tui.lock()
                                .await
                                .resize(ratatui::prelude::Rect::new(0, 0, width, height))?;
                        }
                    }
                }
            }

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }

            if !self.headless {
                self.render().await?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }

            // A scripted event source ends the loop once it runs dry
            if self.headless && exhausted {
                break;
            }
        }

        // Shutdown services and exit TUI
        if let Some(cancel) = &self.api_cancel {
            cancel.cancel();
        }
        if let Some(tui) = &self.tui {
            tui.lock().await.exit()?;
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state().clone();
        let Some(tui) = &self.tui else {
            return Ok(());
        };

        let thread_list = &self.thread_list;
        let post_list = &self.post_list;
        let composer = &mut self.composer;
        let status_bar = &self.status_bar;

        tui.lock().await.draw(&mut |f| {
            let area = f.area();
            let chunks = ratatui::layout::Layout::default()
                .direction(ratatui::layout::Direction::Vertical)
                .constraints([
                    ratatui::layout::Constraint::Min(0),
                    ratatui::layout::Constraint::Length(1),
                ])
                .split(area);

            if state.route.is_threads() {
                thread_list.view(&state, f, chunks[0]);
            } else {
                post_list.view(&state, f, chunks[0]);
            }
            // Composer overlays the list while open
            composer.view(&state, f, chunks[0]);
            status_bar.view(&state, f, chunks[1]);
        })?;
        Ok(())
    }

    async fn suspend(&mut self) -> Result<()> {
        if let Some(tui) = &self.tui {
            tui.lock().await.exit()?;
        }
        #[cfg(not(windows))]
        // SAFETY: raising SIGTSTP on the current process is async-signal-safe
        unsafe {
            libc::raise(libc::SIGTSTP);
        }
        if let Some(tui) = &self.tui {
            tui.lock().await.enter()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        Ok(())
    }
}
