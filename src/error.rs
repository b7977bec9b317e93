use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Одна или более переменных отсутствует: {}", .0.join(", "))]
  Missing(Vec<&'static str>),

  #[error("Переменная {0} имеет неверное значение: {1}")]
  Invalid(&'static str, String),
}

#[derive(Error, Debug)]
pub enum StartupError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error("Не удалось создать HTTP-клиент: {0}")]
  HttpClient(#[from] reqwest::Error),
}

/// Errors of a single poll cycle. The poller recovers from all of them.
#[derive(Error, Debug)]
pub enum PollError {
  #[error(transparent)]
  Transport(#[from] TransportError),

  #[error(transparent)]
  Schema(#[from] SchemaError),

  #[error("Такого статуса не существует: {}", .0.as_deref().unwrap_or("<пусто>"))]
  UnknownStatus(Option<String>),
}

#[derive(Error, Debug)]
pub enum TransportError {
  #[error("Ошибка запроса к API: {0}")]
  Request(#[from] reqwest::Error),

  #[error("API вернул код {status}: {detail}")]
  Status { status: StatusCode, detail: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchemaError {
  #[error("Тип данных API не является словарем")]
  NotAMapping,

  #[error("Ответ API не содержит ключ homeworks")]
  MissingHomeworks,

  #[error("Ответ отличается от ожидаемого: homeworks не является списком")]
  HomeworksNotASequence,
}

#[derive(Error, Debug)]
#[error("Сбой при отправке сообщения: {0}")]
pub struct NotifyError(#[from] teloxide::RequestError);
