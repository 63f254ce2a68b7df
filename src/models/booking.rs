use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unvalidated booking request payload. Fields are kept exactly as they
/// arrived, whatever their JSON type; nothing fails at construction.
#[derive(Debug, Default, Deserialize)]
pub struct BookingDraft {
    pub name: Option<Value>,
    #[serde(rename = "advisorId")]
    pub advisor_id: Option<Value>,
    pub time: Option<Value>,
}

/// A committed reservation. Only produced from a draft that passed every
/// field rule; immutable afterwards.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub name: String,
    pub advisor_id: String,
    pub time: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Canonical `YYYY-MM-DDTHH:MM:SS+HH:MM` length. Length is the only thing
/// checked on the time field; the content is not parsed.
const TIME_FIELD_LEN: usize = 25;

fn string_field(value: &Option<Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    }
}

impl BookingDraft {
    /// Check every field rule and report the full set of violations, or
    /// produce the typed record when all three pass.
    pub fn validate(&self) -> Result<BookingRecord, Vec<FieldError>> {
        let mut field_errors = Vec::new();

        let name = string_field(&self.name).filter(|s| !s.is_empty());
        if name.is_none() {
            field_errors.push(FieldError {
                field: "name",
                message: "Invalid name",
            });
        }

        let advisor_id = string_field(&self.advisor_id).filter(|s| !s.is_empty());
        if advisor_id.is_none() {
            field_errors.push(FieldError {
                field: "advisorId",
                message: "Invalid advisor",
            });
        }

        let time = string_field(&self.time).filter(|s| s.chars().count() == TIME_FIELD_LEN);
        if time.is_none() {
            field_errors.push(FieldError {
                field: "time",
                message: "Invalid date",
            });
        }

        match (name, advisor_id, time) {
            (Some(name), Some(advisor_id), Some(time)) => Ok(BookingRecord {
                name: name.to_owned(),
                advisor_id: advisor_id.to_owned(),
                time: time.to_owned(),
            }),
            _ => Err(field_errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(name: Value, advisor_id: Value, time: Value) -> BookingDraft {
        BookingDraft {
            name: Some(name),
            advisor_id: Some(advisor_id),
            time: Some(time),
        }
    }

    #[test]
    fn valid_draft_becomes_a_record() {
        let record = draft(
            json!("A"),
            json!("1"),
            json!("2019-04-03T10:00:00-04:00"),
        )
        .validate()
        .expect("all fields pass");

        assert_eq!(record.name, "A");
        assert_eq!(record.advisor_id, "1");
        assert_eq!(record.time, "2019-04-03T10:00:00-04:00");
    }

    #[test]
    fn blank_name_is_exactly_one_error() {
        let errors = draft(json!(""), json!("x"), json!("2019-04-03T10:00:00-04:00"))
            .validate()
            .unwrap_err();

        assert_eq!(
            errors,
            vec![FieldError {
                field: "name",
                message: "Invalid name"
            }]
        );
    }

    #[test]
    fn wrongly_typed_fields_are_all_reported() {
        let errors = draft(json!(7), json!(36232), json!(null)).validate().unwrap_err();

        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "advisorId", "time"]);
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let errors = BookingDraft::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn time_must_be_exactly_25_chars() {
        // Content is not inspected, only length.
        let short = draft(json!("A"), json!("1"), json!("2019-04-03T10:00:00"));
        let errors = short.validate().unwrap_err();
        assert_eq!(errors[0].field, "time");

        let padded = draft(json!("A"), json!("1"), json!("xxxxxxxxxxxxxxxxxxxxxxxxx"));
        assert!(padded.validate().is_ok());
    }

    #[test]
    fn record_serializes_to_transport_shape() {
        let record = BookingRecord {
            name: "John Smith".into(),
            advisor_id: "36232".into(),
            time: "2019-04-03T10:00:00-04:00".into(),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "name": "John Smith",
                "advisorId": "36232",
                "time": "2019-04-03T10:00:00-04:00"
            })
        );
    }

    #[test]
    fn field_errors_serialize_to_field_message_pairs() {
        let error = FieldError {
            field: "advisorId",
            message: "Invalid advisor",
        };
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({ "field": "advisorId", "message": "Invalid advisor" })
        );
    }
}
