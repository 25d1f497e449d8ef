use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    infrastructure::api::ApiCommand,
};

/// Command executor that bridges Elm commands to the API service and the TUI
/// host
///
/// The executor never performs I/O itself; it converts application intent
/// into infrastructure operations and sends them over channels.
#[derive(Clone, Default)]
pub struct CmdExecutor {
    api_sender: Option<mpsc::UnboundedSender<ApiCommand>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    /// Create a new command executor with no outputs attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new command executor routing API commands to the given sender
    pub fn new_with_api(api_sender: mpsc::UnboundedSender<ApiCommand>) -> Self {
        Self {
            api_sender: Some(api_sender),
            tui_sender: None,
        }
    }

    /// Add API command support to an existing executor
    pub fn set_api_sender(&mut self, api_sender: mpsc::UnboundedSender<ApiCommand>) {
        self.api_sender = Some(api_sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command by converting it to the appropriate
    /// infrastructure operation
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {
                // No-op command, nothing to execute
            }

            Cmd::FetchPage {
                collection,
                offset,
                generation,
            } => {
                if let Some(api_sender) = &self.api_sender {
                    let api_cmd = ApiCommand::fetch_page(collection.clone(), *offset, *generation);
                    api_sender.send(api_cmd)?;
                } else {
                    // No API service available: drop with warning
                    log::warn!("FetchPage ignored: ApiService not available");
                }
            }

            Cmd::CreateItem {
                collection,
                payload,
            } => {
                if let Some(api_sender) = &self.api_sender {
                    let api_cmd = ApiCommand::create_item(collection.clone(), payload.clone());
                    api_sender.send(api_cmd)?;
                } else {
                    // No API service available: drop with warning
                    log::warn!("CreateItem ignored: ApiService not available");
                }
            }

            Cmd::Tui(tui_cmd) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(tui_cmd.clone());
                } else {
                    log::warn!("CmdExecutor: TUI sender not configured; dropping {tui_cmd:?}");
                }
            }

            Cmd::LogError { message } => {
                log::error!("Elm command error: {message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("Elm command info: {message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_api_sender: self.api_sender.is_some(),
            is_api_sender_closed: self.api_sender.as_ref().map(|sender| sender.is_closed()),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub has_api_sender: bool,
    pub is_api_sender_closed: Option<bool>,
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::None => "None".to_string(),
            Cmd::FetchPage { collection, .. } => format!("FetchPage({})", collection.name()),
            Cmd::CreateItem { collection, .. } => format!("CreateItem({})", collection.name()),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
            Cmd::Tui(tc) => match tc {
                TuiCommand::Resize { .. } => "Tui(Resize)".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forum::Collection;
    use tokio::sync::mpsc;

    fn create_test_executor() -> (CmdExecutor, mpsc::UnboundedReceiver<ApiCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let executor = CmdExecutor::new_with_api(tx);
        (executor, rx)
    }

    #[test]
    fn test_execute_fetch_page_routes_to_api() -> Result<()> {
        let (executor, mut rx) = create_test_executor();
        let cmd = Cmd::FetchPage {
            collection: Collection::Threads,
            offset: 10,
            generation: 1,
        };

        executor.execute_command(&cmd)?;

        let api_cmd = rx.try_recv()?;
        match api_cmd {
            ApiCommand::FetchPage {
                collection,
                offset,
                generation,
            } => {
                assert_eq!(collection, Collection::Threads);
                assert_eq!(offset, 10);
                assert_eq!(generation, 1);
            }
            other => panic!("Expected FetchPage, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn test_execute_create_item_routes_to_api() -> Result<()> {
        let (executor, mut rx) = create_test_executor();
        let cmd = Cmd::CreateItem {
            collection: Collection::Posts {
                thread_id: "7".to_string(),
            },
            payload: "hello".to_string(),
        };

        executor.execute_command(&cmd)?;

        let api_cmd = rx.try_recv()?;
        assert!(matches!(api_cmd, ApiCommand::CreateItem { .. }));

        Ok(())
    }

    #[test]
    fn test_dropped_without_api_sender() -> Result<()> {
        let executor = CmdExecutor::new();
        let cmd = Cmd::FetchPage {
            collection: Collection::Threads,
            offset: 0,
            generation: 0,
        };

        // Dropped with a warning, not an error
        executor.execute_command(&cmd)?;

        Ok(())
    }

    #[test]
    fn test_execute_resize() -> Result<()> {
        let mut executor = CmdExecutor::new();
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel::<TuiCommand>();
        executor.set_tui_sender(tui_tx);

        let cmd = Cmd::Tui(TuiCommand::Resize {
            width: 80,
            height: 24,
        });

        executor.execute_command(&cmd)?;

        let tui_cmd = tui_rx.try_recv()?;
        assert_eq!(
            tui_cmd,
            TuiCommand::Resize {
                width: 80,
                height: 24
            }
        );

        Ok(())
    }

    #[test]
    fn test_execute_none() -> Result<()> {
        let (executor, mut rx) = create_test_executor();

        executor.execute_command(&Cmd::None)?;

        // Should not send any API command
        assert!(rx.try_recv().is_err());

        Ok(())
    }

    #[test]
    fn test_execute_batch() -> Result<()> {
        let (executor, mut rx) = create_test_executor();

        let batch = Cmd::Batch(vec![
            Cmd::FetchPage {
                collection: Collection::Threads,
                offset: 0,
                generation: 0,
            },
            Cmd::LogInfo {
                message: "test".to_string(),
            },
        ]);

        executor.execute_command(&batch)?;

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());

        Ok(())
    }

    #[test]
    fn test_execute_multiple_commands() -> Result<()> {
        let (executor, _rx) = create_test_executor();

        let commands = vec![
            Cmd::FetchPage {
                collection: Collection::Threads,
                offset: 0,
                generation: 0,
            },
            Cmd::LogInfo {
                message: "test".to_string(),
            },
        ];

        let log = executor.execute_commands(&commands)?;

        assert_eq!(log.len(), 2);
        assert!(log[0].contains("✓ Executed: FetchPage(threads)"));
        assert!(log[1].contains("✓ Executed: LogInfo"));

        Ok(())
    }

    #[test]
    fn test_cmd_name_trait() {
        let cmd = Cmd::FetchPage {
            collection: Collection::Posts {
                thread_id: "1".to_string(),
            },
            offset: 0,
            generation: 0,
        };
        assert_eq!(cmd.name(), "FetchPage(posts)");

        let batch_cmd = Cmd::Batch(vec![Cmd::None, Cmd::None]);
        assert_eq!(batch_cmd.name(), "Batch(2)");
    }

    #[test]
    fn test_executor_stats() {
        let (executor, _rx) = create_test_executor();
        let stats = executor.get_stats();

        assert!(stats.has_api_sender);
        assert_eq!(stats.is_api_sender_closed, Some(false));

        let empty = CmdExecutor::new();
        assert!(!empty.get_stats().has_api_sender);
    }
}
