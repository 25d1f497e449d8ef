use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::raw_msg::{ApiEvent, RawMsg},
    infrastructure::api::{ApiClient, ApiCommand},
};

/// ApiService executes forum API operations in the background
///
/// Commands arrive over a channel, results leave as `RawMsg`s. Operations
/// are handled one at a time; each is awaited before the next starts, so a
/// single task is the only place where requests are in flight. A failed
/// operation is reported and the service keeps running.
pub struct ApiService {
    client: ApiClient,
    // Incoming channel
    op_rx: mpsc::UnboundedReceiver<ApiCommand>,
    cancel_token: CancellationToken,
    // Outgoing channel
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewApiService = (
    mpsc::UnboundedSender<ApiCommand>, // op_tx - operations to execute
    CancellationToken,                 // shutdown signal
    ApiService,
);

impl ApiService {
    /// Create a new ApiService
    pub fn new(client: ApiClient, raw_tx: mpsc::UnboundedSender<RawMsg>) -> Result<NewApiService> {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        Ok((
            op_tx,
            cancel_token.clone(),
            Self {
                client,
                op_rx,
                cancel_token,
                raw_tx,
            },
        ))
    }

    /// Run the ApiService in a background task
    pub fn run(mut self) {
        tokio::spawn(async move {
            let result = self.run_service().await;
            if let Err(e) = result {
                log::error!("ApiService error: {e}");
                let _ = self
                    .raw_tx
                    .send(RawMsg::Error(format!("ApiService error: {e}")));
            }
        });
    }

    /// Main service loop
    async fn run_service(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                // Handle queued operations
                result = self.op_rx.recv() => {
                    match result {
                        Some(op) => self.handle_operation(op).await,
                        None => {
                            log::info!("ApiService command channel closed");
                            break;
                        }
                    }
                }

                // Check for termination signal
                _ = self.cancel_token.cancelled() => {
                    log::info!("ApiService received cancellation signal");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Execute a single operation and report its outcome
    async fn handle_operation(&mut self, op: ApiCommand) {
        log::debug!("Handling ApiCommand: {op:?}");

        match op {
            ApiCommand::FetchPage {
                collection,
                offset,
                generation,
            } => {
                let event = match self.client.fetch_page(&collection, offset).await {
                    Ok(page) => ApiEvent::PageLoaded {
                        collection,
                        generation,
                        page,
                    },
                    Err(e) => {
                        log::warn!("fetch_page({}, {offset}) failed: {e}", collection.name());
                        ApiEvent::PageFailed {
                            collection,
                            generation,
                            message: e.to_string(),
                        }
                    }
                };
                let _ = self.raw_tx.send(RawMsg::Api(event));
            }

            ApiCommand::CreateItem {
                collection,
                payload,
            } => {
                let event = match self.client.create_item(&collection, &payload).await {
                    Ok(()) => ApiEvent::ItemCreated { collection },
                    Err(e) => {
                        log::warn!("create_item({}) failed: {e}", collection.name());
                        ApiEvent::ItemRejected {
                            collection,
                            message: e.to_string(),
                        }
                    }
                };
                let _ = self.raw_tx.send(RawMsg::Api(event));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::forum::Collection;

    #[tokio::test]
    async fn test_api_service_creation() -> Result<()> {
        let client = ApiClient::new("http://127.0.0.1:1");
        let (raw_tx, _raw_rx) = mpsc::unbounded_channel();

        let (op_tx, cancel_token, _service) = ApiService::new(client, raw_tx)?;

        // Channels are wired up
        assert!(op_tx
            .send(ApiCommand::fetch_page(Collection::Threads, 0, 0))
            .is_ok());
        cancel_token.cancel();

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_operation_reports_and_keeps_running() -> Result<()> {
        // Port 1 refuses connections, so every operation fails fast
        let client = ApiClient::new("http://127.0.0.1:1");
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        let (op_tx, cancel_token, service) = ApiService::new(client, raw_tx)?;
        service.run();

        op_tx.send(ApiCommand::fetch_page(Collection::Threads, 0, 3))?;
        let msg = raw_rx.recv().await.expect("service should report");
        match msg {
            RawMsg::Api(ApiEvent::PageFailed {
                collection,
                generation,
                ..
            }) => {
                assert_eq!(collection, Collection::Threads);
                assert_eq!(generation, 3);
            }
            other => panic!("Expected PageFailed, got {other:?}"),
        }

        // The service is still alive for the next operation
        op_tx.send(ApiCommand::create_item(
            Collection::Threads,
            "hi".to_string(),
        ))?;
        let msg = raw_rx.recv().await.expect("service should report");
        assert!(matches!(
            msg,
            RawMsg::Api(ApiEvent::ItemRejected { .. })
        ));

        cancel_token.cancel();

        Ok(())
    }
}
