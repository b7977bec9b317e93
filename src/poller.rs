use std::time::Duration;

use tokio::time::sleep;

use crate::{
  api::HomeworkSource,
  bot::notifier::Notifier,
  error::PollError,
  homework::parse_status,
  response::{check_response, current_date},
};

/// Outcome of one poll cycle.
#[derive(Debug, PartialEq, Eq)]
pub enum Cycle {
  /// The API reported no new statuses.
  Unchanged,
  /// A status change found since `from_date` was handed to the notifier.
  Notified { from_date: i64, delivered: bool },
  /// The cycle failed and a diagnostic was handed to the notifier.
  Failed,
}

pub struct Poller<S, N> {
  source: S,
  notifier: N,
  cursor: i64,
  retry_time: Duration,
}

impl<S: HomeworkSource, N: Notifier> Poller<S, N> {
  pub fn new(source: S, notifier: N, retry_time: Duration, cursor: i64) -> Self {
    Self { source, notifier, cursor, retry_time }
  }

  pub fn cursor(&self) -> i64 {
    self.cursor
  }

  /// Polls forever, waiting `retry_time` after every cycle.
  pub async fn run(&mut self) {
    loop {
      if let Cycle::Notified { from_date, delivered: false } = self.tick().await {
        warn!("Status change since {} was not delivered", from_date);
      }
      debug!("Waiting for {}s for next poll", self.retry_time.as_secs());
      sleep(self.retry_time).await;
    }
  }

  pub async fn tick(&mut self) -> Cycle {
    match self.poll().await {
      Ok(cycle) => cycle,
      Err(err) => {
        let message = format!("Сбой в работе программы: {}", err);
        error!("{}", message);
        self.notifier.notify(&message).await;
        Cycle::Failed
      }
    }
  }

  async fn poll(&mut self) -> Result<Cycle, PollError> {
    let from_date = self.cursor;
    let response = self.source.fetch(from_date).await?;
    let homeworks = check_response(&response)?;

    let cycle = match homeworks.first() {
      Some(homework) => {
        let message = parse_status(homework)?;
        Cycle::Notified { from_date, delivered: self.notifier.notify(&message).await }
      }
      None => {
        debug!("Статус не изменился");
        Cycle::Unchanged
      }
    };

    if let Some(date) = current_date(&response) {
      if date < self.cursor {
        warn!("Server moved cursor back from {} to {}", self.cursor, date);
      }
      self.cursor = date;
    }
    Ok(cycle)
  }
}
