use std::str::FromStr;

use serde_json::Value;

use crate::error::PollError;

/// Review statuses the API reports for a homework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
  Approved,
  Reviewing,
  Rejected,
}

impl Status {
  pub fn verdict(self) -> &'static str {
    match self {
      Status::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
      Status::Reviewing => "Работа взята на проверку ревьюером.",
      Status::Rejected => "Работа проверена: у ревьюера есть замечания.",
    }
  }
}

impl FromStr for Status {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "approved" => Ok(Status::Approved),
      "reviewing" => Ok(Status::Reviewing),
      "rejected" => Ok(Status::Rejected),
      _ => Err(()),
    }
  }
}

/// Borrowed view over one record of `homeworks`.
#[derive(Debug)]
pub struct Homework<'a> {
  pub name: Option<&'a str>,
  pub status: Option<&'a str>,
}

impl<'a> Homework<'a> {
  pub fn from_record(record: &'a Value) -> Self {
    Self {
      name: record.get("homework_name").and_then(Value::as_str),
      status: record.get("status").and_then(Value::as_str),
    }
  }
}

pub fn parse_status(record: &Value) -> Result<String, PollError> {
  let homework = Homework::from_record(record);
  let status = match homework.status.map(str::parse::<Status>) {
    Some(Ok(status)) => status,
    _ => return Err(PollError::UnknownStatus(homework.status.map(String::from))),
  };

  Ok(format!(
    "Изменился статус проверки работы \"{}\". {}",
    homework.name.unwrap_or_default(),
    status.verdict()
  ))
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn approved() {
    let record = json!({"homework_name": "hw1", "status": "approved"});
    assert_eq!(
      parse_status(&record).unwrap(),
      "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
    );
  }

  #[test]
  fn every_status_has_own_verdict() {
    for (code, verdict) in [
      ("reviewing", "Работа взята на проверку ревьюером."),
      ("rejected", "Работа проверена: у ревьюера есть замечания."),
    ] {
      let record = json!({"homework_name": "user__hw_python_oop.zip", "status": code});
      assert_eq!(
        parse_status(&record).unwrap(),
        format!("Изменился статус проверки работы \"user__hw_python_oop.zip\". {}", verdict)
      );
    }
  }

  #[test]
  fn unknown_status() {
    let record = json!({"homework_name": "hw1", "status": "pending"});
    assert!(matches!(parse_status(&record), Err(PollError::UnknownStatus(Some(s))) if s == "pending"));
  }

  #[test]
  fn status_must_be_exact() {
    let record = json!({"homework_name": "hw1", "status": "Approved"});
    assert!(matches!(parse_status(&record), Err(PollError::UnknownStatus(_))));
  }

  #[test]
  fn missing_or_non_string_status() {
    assert!(matches!(parse_status(&json!({"homework_name": "hw1"})), Err(PollError::UnknownStatus(None))));
    assert!(matches!(parse_status(&json!({"status": 1})), Err(PollError::UnknownStatus(None))));
    assert!(matches!(parse_status(&json!("approved")), Err(PollError::UnknownStatus(None))));
  }

  #[test]
  fn missing_name_still_formats() {
    let record = json!({"status": "reviewing"});
    assert_eq!(
      parse_status(&record).unwrap(),
      "Изменился статус проверки работы \"\". Работа взята на проверку ревьюером."
    );
  }
}
