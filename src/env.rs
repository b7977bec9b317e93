use std::{str::FromStr, time::Duration};

use teloxide::types::{ChatId, Recipient};

use crate::{api, error::ConfigError};

macro_rules! env_var {
  ($var_name: ident, $env_name: literal) => {
    pub const $var_name: &'static str = $env_name;
  };
  ($var_name: ident) => {
    pub const $var_name: &'static str = stringify!($var_name);
  };
}

env_var!(PRACTICUM_TOKEN, "TOKEN_YP");
env_var!(TELEGRAM_TOKEN, "TOKEN");
env_var!(TELEGRAM_CHAT_ID, "CHAT_ID");
env_var!(ENDPOINT);
env_var!(RETRY_TIME);
env_var!(REQUEST_TIMEOUT);

pub const DEFAULT_RETRY_TIME: Duration = Duration::from_secs(600);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything the bot needs, read once at startup.
#[derive(Clone)]
pub struct Config {
  pub practicum_token: String,
  pub telegram_token: String,
  pub chat_id: Recipient,
  pub endpoint: String,
  pub retry_time: Duration,
  pub request_timeout: Duration,
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    info!("Validating .env vars");
    Self::from_lookup(var)
  }

  /// Builds the config from `lookup`. Blank values count as missing; every
  /// missing required var is reported at once.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&'static str) -> Option<String>,
  {
    let get = |name: &'static str| lookup(name).filter(|value| !value.trim().is_empty());

    let (practicum_token, telegram_token, chat_id) = match (get(PRACTICUM_TOKEN), get(TELEGRAM_TOKEN), get(TELEGRAM_CHAT_ID)) {
      (Some(practicum), Some(telegram), Some(chat_id)) => (practicum, telegram, chat_id),
      (practicum, telegram, chat_id) => {
        let missing: Vec<&'static str> = [
          (PRACTICUM_TOKEN, practicum.is_none()),
          (TELEGRAM_TOKEN, telegram.is_none()),
          (TELEGRAM_CHAT_ID, chat_id.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();
        missing.iter().for_each(|name| error!("Var {} is not present", name));
        return Err(ConfigError::Missing(missing));
      }
    };

    Ok(Self {
      practicum_token,
      telegram_token,
      chat_id: recipient(TELEGRAM_CHAT_ID, &chat_id)?,
      endpoint: get(ENDPOINT).unwrap_or_else(|| api::ENDPOINT.into()),
      retry_time: seconds(RETRY_TIME, get(RETRY_TIME), DEFAULT_RETRY_TIME)?,
      request_timeout: seconds(REQUEST_TIMEOUT, get(REQUEST_TIMEOUT), DEFAULT_REQUEST_TIMEOUT)?,
    })
  }
}

pub fn var(var: &'static str) -> Option<String> {
  dotenvy::var(var).ok()
}

fn parse<T: FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
  raw.trim().parse().map_err(|_| {
    error!("Var {}: {} is malformed", var, std::any::type_name::<T>());
    ConfigError::Invalid(var, raw.into())
  })
}

/// Numeric chat id, or `@username` of a public channel.
fn recipient(var: &'static str, raw: &str) -> Result<Recipient, ConfigError> {
  let raw = raw.trim();
  match raw.strip_prefix('@') {
    Some(name) if !name.is_empty() && !name.contains(char::is_whitespace) => Ok(Recipient::ChannelUsername(raw.into())),
    Some(_) => Err(ConfigError::Invalid(var, raw.into())),
    None => parse(var, raw).map(|id| Recipient::Id(ChatId(id))),
  }
}

fn seconds(var: &'static str, raw: Option<String>, default: Duration) -> Result<Duration, ConfigError> {
  match raw {
    None => Ok(default),
    Some(raw) => match parse::<u64>(var, &raw)? {
      0 => Err(ConfigError::Invalid(var, raw)),
      secs => Ok(Duration::from_secs(secs)),
    },
  }
}
