use serde_json::Value;

use crate::error::SchemaError;

/// Checks the API answer and returns its `homeworks`, untouched. An empty
/// slice is a valid answer meaning nothing changed.
pub fn check_response(response: &Value) -> Result<&[Value], SchemaError> {
  let homeworks = response
    .as_object()
    .ok_or(SchemaError::NotAMapping)?
    .get("homeworks")
    .ok_or(SchemaError::MissingHomeworks)?
    .as_array()
    .ok_or(SchemaError::HomeworksNotASequence)?;

  if homeworks.is_empty() {
    debug!("Новых статусов нет");
  }
  Ok(homeworks)
}

/// The server time of the answer, used as the next `from_date`.
pub fn current_date(response: &Value) -> Option<i64> {
  let raw = response.get("current_date")?;
  let date = raw.as_i64();
  if date.is_none() {
    warn!("current_date is not an integer: {}", raw);
  }
  date
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn not_a_mapping() {
    for response in [json!([]), json!(null), json!("homeworks"), json!(42), json!([{"homeworks": []}])] {
      assert_eq!(check_response(&response), Err(SchemaError::NotAMapping));
    }
  }

  #[test]
  fn missing_homeworks() {
    assert_eq!(check_response(&json!({})), Err(SchemaError::MissingHomeworks));
    assert_eq!(check_response(&json!({"current_date": 1700000000})), Err(SchemaError::MissingHomeworks));
  }

  #[test]
  fn homeworks_not_a_sequence() {
    for homeworks in [json!({}), json!("approved"), json!(null), json!(1)] {
      let response = json!({ "homeworks": homeworks });
      assert_eq!(check_response(&response), Err(SchemaError::HomeworksNotASequence));
    }
  }

  #[test]
  fn empty_homeworks_is_valid() {
    let response = json!({"homeworks": [], "current_date": 1700000000});
    assert_eq!(check_response(&response), Ok(&[][..]));
  }

  #[test]
  fn validation_does_not_touch_input() {
    let response = json!({
      "homeworks": [
        {"homework_name": "hw2", "status": "reviewing"},
        {"homework_name": "hw1", "status": "approved"}
      ],
      "current_date": 1700000000
    });
    let before = response.clone();

    let first = check_response(&response).unwrap().to_vec();
    let second = check_response(&response).unwrap().to_vec();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0]["homework_name"], "hw2");
    assert_eq!(response, before);
  }

  #[test]
  fn reads_current_date() {
    assert_eq!(current_date(&json!({"homeworks": [], "current_date": 1700000000})), Some(1700000000));
    assert_eq!(current_date(&json!({"homeworks": []})), None);
    assert_eq!(current_date(&json!({"homeworks": [], "current_date": "yesterday"})), None);
  }
}
