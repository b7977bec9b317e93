use async_trait::async_trait;
use teloxide::{requests::Requester, types::Recipient, Bot};

use crate::error::NotifyError;

/// Delivers text to the chat. Delivery is best effort: `notify` logs and
/// reports the outcome but never fails.
#[async_trait]
pub trait Notifier: Send + Sync {
  async fn send(&self, text: &str) -> Result<(), NotifyError>;

  async fn notify(&self, text: &str) -> bool {
    match self.send(text).await {
      Ok(()) => {
        info!("Сообщение отправлено: {}", text);
        true
      }
      Err(err) => {
        error!("{}", err);
        false
      }
    }
  }
}

pub struct TelegramNotifier {
  bot: Bot,
  chat_id: Recipient,
}

impl TelegramNotifier {
  pub fn new(bot: Bot, chat_id: Recipient) -> Self {
    Self { bot, chat_id }
  }
}

#[async_trait]
impl Notifier for TelegramNotifier {
  async fn send(&self, text: &str) -> Result<(), NotifyError> {
    self.bot.send_message(self.chat_id.clone(), text).await?;
    Ok(())
  }
}
