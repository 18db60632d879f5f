//! Background task delivering messages to the message service.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use chatbot_client::{deliver, Transport};

use crate::event::{BackendCommand, UiEvent};

/// Run the delivery loop.
///
/// This function runs in a separate thread with its own tokio runtime.
/// Every send is spawned on its own, so replies reach the UI in completion
/// order rather than in the order they were issued.
pub async fn run_backend<T>(
    transport: T,
    ui_tx: mpsc::Sender<UiEvent>,
    mut cmd_rx: mpsc::Receiver<BackendCommand>,
) where
    T: Transport + 'static,
{
    let transport = Arc::new(transport);

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            BackendCommand::Send(message) => {
                debug!(id = message.id, "Dispatching message");
                let transport = Arc::clone(&transport);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let action = deliver(transport.as_ref(), &message).await;
                    let _ = ui_tx.send(UiEvent::Delivered(action)).await;
                });
            }
            BackendCommand::Quit => {
                info!("Received quit command, shutting down backend");
                break;
            }
        }
    }

    info!("Backend shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chatbot_client::{ChatAction, ClientError};
    use chatbot_core::{bot_reply, Message};
    use std::time::Duration;

    /// Replies to "slow" after a delay, to everything else at once.
    struct DelayedEcho;

    #[async_trait]
    impl Transport for DelayedEcho {
        async fn send_message(&self, message: &Message) -> Result<Message, ClientError> {
            let text = message.content.as_text().unwrap_or_default();
            if text == "slow" {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            Ok(bot_reply(message.id + 100, text))
        }
    }

    fn reply_id(event: UiEvent) -> u64 {
        match event {
            UiEvent::Delivered(ChatAction::ReplyReceived(reply)) => reply.id,
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_replies_arrive_in_completion_order() {
        let (ui_tx, mut ui_rx) = mpsc::channel(8);
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let handle = tokio::spawn(run_backend(DelayedEcho, ui_tx, cmd_rx));

        cmd_tx
            .send(BackendCommand::Send(Message::user(1, "slow")))
            .await
            .unwrap();
        cmd_tx
            .send(BackendCommand::Send(Message::user(2, "fast")))
            .await
            .unwrap();

        assert_eq!(reply_id(ui_rx.recv().await.unwrap()), 102);
        assert_eq!(reply_id(ui_rx.recv().await.unwrap()), 101);

        cmd_tx.send(BackendCommand::Quit).await.unwrap();
        handle.await.unwrap();
    }
}
