//! dripbot entry point.
//!
//! Startup order matters: configuration first (a missing credential must
//! fail with a printed diagnostic before anything else runs), then the
//! logger, then the polling loop until ctrl-c.

use anyhow::Context;
use dripbot::apis::dexscreener::DexScreenerClient;
use dripbot::config::Config;
use dripbot::logger;
use dripbot::reports::ReportGenerator;
use dripbot::telegram::polling;
use dripbot::version::VERSION;
use log::{error, info};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use teloxide::Bot;
use tokio::sync::Notify;

#[tokio::main]
async fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logger::init(&config.log_level) {
        eprintln!("Error: failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    info!("[SYSTEM] 🚀 dripbot v{} starting up", VERSION);

    if let Err(e) = run(config).await {
        error!("[SYSTEM] ❌ dripbot failed: {:#}", e);
        std::process::exit(1);
    }

    info!("[SYSTEM] ✅ dripbot stopped");
}

async fn run(config: Config) -> anyhow::Result<()> {
    let client = DexScreenerClient::new(config.request_timeout_secs)
        .context("failed to build DexScreener client")?;
    let generator = Arc::new(ReportGenerator::new(client, config.home_symbol.clone()));

    let bot = Bot::new(config.bot_token.clone());
    let config = Arc::new(config);

    let shutdown = Arc::new(Notify::new());
    let running = Arc::new(AtomicBool::new(false));

    let handle = polling::start_polling(bot, generator, config, shutdown.clone(), running.clone());

    info!("[SYSTEM] Bot started. Press Ctrl-C to stop.");
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for ctrl-c")?;
    info!("[SYSTEM] Shutdown requested");

    shutdown.notify_waiters();
    handle.await.context("command handler task panicked")?;

    Ok(())
}
