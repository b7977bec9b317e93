use std::{future::Future, io};

use chrono::Utc;
use log::LevelFilter;

use crate::{api::ApiClient, bot::notifier::TelegramNotifier, env::Config, error::StartupError, poller::Poller};

#[macro_use]
extern crate log;

mod api;
mod bot;
mod env;
mod error;
mod homework;
mod poller;
mod response;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
  init();
  start().await.map_err(|err| {
    error!("{}", err);
    err
  })
}

async fn start() -> Result<(), StartupError> {
  let config = Config::from_env()?;

  let bot = bot::connect(&config);
  bot::login(&bot).await;

  let api = ApiClient::new(&config)?;
  let notifier = TelegramNotifier::new(bot, config.chat_id.clone());
  let mut poller = Poller::new(api, notifier, config.retry_time, Utc::now().timestamp());

  info!("Started polling {} every {}s from {}", config.endpoint, config.retry_time.as_secs(), poller.cursor());
  tokio::select! {
    _ = poller.run() => {}
    _ = shutdown(tokio::signal::ctrl_c()) => {}
  }
  Ok(())
}

/// Resolves when `signal` fires. Never resolves if the handler couldn't be installed.
async fn shutdown<F>(signal: F)
where
  F: Future<Output = io::Result<()>>,
{
  match signal.await {
    Ok(()) => info!("Got Ctrl+C, stopping"),
    Err(err) => {
      error!("Couldn't listen for Ctrl+C, running until killed: {}", err);
      std::future::pending::<()>().await
    }
  }
}

fn init() {
  let dotenv = dotenvy::dotenv();

  let mut logger = pretty_env_logger::formatted_timed_builder();
  logger.filter_level(LevelFilter::Info);
  if let Ok(filters) = std::env::var("RUST_LOG") {
    logger.parse_filters(&filters);
  }
  logger.init();

  if let Err(err) = dotenv {
    warn!("Unable to load .env, using process environment: {}", err);
  }
}
