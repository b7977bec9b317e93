use teloxide::{requests::Requester, Bot};

use crate::env::Config;

pub mod notifier;

pub fn connect(config: &Config) -> Bot {
  Bot::new(config.telegram_token.clone())
}

/// Logs who the bot is. The loop can still run if Telegram is unreachable
/// right now, so a failure here is only a warning.
pub async fn login(bot: &Bot) {
  match bot.get_me().await {
    Ok(me) => info!("Logged in as {} [@{}]", me.full_name(), me.username()),
    Err(err) => warn!("Couldn't log in to Telegram: {}", err),
  }
}
