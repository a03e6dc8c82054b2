//! Telegram update polling.
//!
//! Hand-rolled `getUpdates` long-polling: each batch advances the offset so
//! updates are never reprocessed, and every command message is answered from
//! its own task so one slow fetch never stalls other chats.

use crate::config::Config;
use crate::reports::ReportGenerator;
use crate::telegram::commands::{self, Command};
use log::{debug, error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, UpdateKind};
use tokio::sync::Notify;

/// Long-poll timeout for `getUpdates`, in seconds.
const POLL_TIMEOUT_SECS: u32 = 10;

/// Pause after a failed `getUpdates` before polling again.
const RETRY_DELAY_SECS: u64 = 1;

/// Start the command polling loop.
///
/// The loop runs until `shutdown` is notified and keeps `running` true while
/// alive. Returns the task handle so the caller can await a clean exit.
pub fn start_polling(
    bot: Bot,
    generator: Arc<ReportGenerator>,
    config: Arc<Config>,
    shutdown: Arc<Notify>,
    running: Arc<AtomicBool>,
) -> tokio::task::JoinHandle<()> {
    running.store(true, Ordering::SeqCst);

    tokio::spawn(async move {
        info!("[TELEGRAM] Command handler started");
        let mut offset: Option<i32> = None;

        loop {
            tokio::select! {
                _ = shutdown.notified() => {
                    info!("[TELEGRAM] Command handler received shutdown signal");
                    break;
                }
                next = poll_once(&bot, &generator, &config, offset) => {
                    offset = next;
                }
            }
        }

        running.store(false, Ordering::SeqCst);
        info!("[TELEGRAM] Command handler stopped");
    })
}

/// Fetch one batch of updates and dispatch every command message.
/// Returns the next `getUpdates` offset.
async fn poll_once(
    bot: &Bot,
    generator: &Arc<ReportGenerator>,
    config: &Arc<Config>,
    offset: Option<i32>,
) -> Option<i32> {
    let mut request = bot.get_updates().timeout(POLL_TIMEOUT_SECS);
    if let Some(offset) = offset {
        request = request.offset(offset);
    }

    let updates = match request.await {
        Ok(updates) => updates,
        Err(e) => {
            // Transient connectivity errors are normal; don't spam the log.
            debug!("[TELEGRAM] getUpdates failed: {}", e);
            tokio::time::sleep(Duration::from_secs(RETRY_DELAY_SECS)).await;
            return offset;
        }
    };

    let mut next_offset = offset;
    for update in updates {
        next_offset = Some(update.id + 1);

        let message = match update.kind {
            UpdateKind::Message(message) => message,
            _ => continue,
        };

        let command = match message.text().and_then(Command::parse) {
            Some(command) => command,
            None => continue,
        };

        // Each invocation is independent: answer from its own task so a slow
        // fetch in one chat never delays the others.
        let bot = bot.clone();
        let generator = generator.clone();
        let config = config.clone();
        let chat_id = message.chat.id;
        tokio::spawn(async move {
            let reply = commands::respond(command, &generator, &config).await;
            if let Err(e) = bot
                .send_message(chat_id, reply)
                .parse_mode(ParseMode::Markdown)
                .disable_web_page_preview(true)
                .await
            {
                error!("[TELEGRAM] Failed to send reply: {}", e);
            }
        });
    }

    next_offset
}
