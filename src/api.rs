use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::{env::Config, error::TransportError};

pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Something that can be asked for homework statuses changed since a timestamp.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
  async fn fetch(&self, from_date: i64) -> Result<Value, TransportError>;
}

/// Error body the API sends along with non-200 codes.
#[derive(Deserialize, Debug, Default)]
pub struct ApiErrorBody {
  #[serde(default)]
  pub code: Option<String>,
  #[serde(default)]
  pub message: Option<String>,
}

impl ApiErrorBody {
  fn describe(&self) -> String {
    match (self.code.as_deref(), self.message.as_deref()) {
      (Some(code), Some(message)) => format!("{}. {}", code, message),
      (Some(text), None) | (None, Some(text)) => text.into(),
      (None, None) => "нет описания".into(),
    }
  }
}

pub struct ApiClient {
  http: Client,
  endpoint: String,
  token: String,
}

impl ApiClient {
  pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
    let http = Client::builder().timeout(config.request_timeout).build()?;
    Ok(Self { http, endpoint: config.endpoint.clone(), token: config.practicum_token.clone() })
  }

  fn request(&self, from_date: i64) -> RequestBuilder {
    self
      .http
      .get(&self.endpoint)
      .header(AUTHORIZATION, format!("OAuth {}", self.token))
      .query(&[("from_date", from_date)])
  }
}

#[async_trait]
impl HomeworkSource for ApiClient {
  async fn fetch(&self, from_date: i64) -> Result<Value, TransportError> {
    debug!("Requesting homework statuses from {}", from_date);
    let res = self.request(from_date).send().await?;
    match res.status() {
      StatusCode::OK => Ok(res.json().await?),
      status => {
        let body = res.json::<ApiErrorBody>().await.unwrap_or_default();
        Err(TransportError::Status { status, detail: body.describe() })
      }
    }
  }
}
