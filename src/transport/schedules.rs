use serde::Deserialize;

use super::DecodeError;
use super::datetime;
use crate::domain::{Schedule, SchedulePayload};

/// Status the client assumes when the server omits the field.
const DEFAULT_STATUS: &str = "scheduled";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleJson {
    id: i64,
    #[serde(default)]
    user: Option<UserRefJson>,
    scheduled_time: String,
    creation_time: String,
    #[serde(default)]
    status: Option<String>,
    is_file: bool,
    #[serde(default)]
    file_name: Option<String>,
    #[serde(default)]
    file_has_text: Option<bool>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    destinations: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct UserRefJson {
    id: i64,
}

pub fn decode_schedule_response(json: &str) -> Result<Schedule, DecodeError> {
    let parsed: ScheduleJson = serde_json::from_str(json)?;
    schedule_from_json(parsed)
}

pub fn decode_schedule_list_response(json: &str) -> Result<Vec<Schedule>, DecodeError> {
    let parsed: Vec<ScheduleJson> = serde_json::from_str(json)?;
    parsed.into_iter().map(schedule_from_json).collect()
}

fn schedule_from_json(json: ScheduleJson) -> Result<Schedule, DecodeError> {
    let scheduled_at = datetime::parse_datetime(&json.scheduled_time, datetime::TIMESTAMP_FORMAT)
        .map_err(|_| DecodeError::Timestamp {
        field: "scheduledTime",
        value: json.scheduled_time.clone(),
    })?;
    let created_at = datetime::parse_datetime(&json.creation_time, datetime::TIMESTAMP_FORMAT)
        .map_err(|_| DecodeError::Timestamp {
            field: "creationTime",
            value: json.creation_time.clone(),
        })?;

    let payload = if json.is_file {
        let file_name = json
            .file_name
            .ok_or(DecodeError::MissingField { field: "fileName" })?;
        let file_has_text = json.file_has_text.ok_or(DecodeError::MissingField {
            field: "fileHasText",
        })?;
        // When the file embeds its own text the top-level field is ignored.
        let text = if file_has_text {
            None
        } else {
            Some(json.text.ok_or(DecodeError::MissingField { field: "text" })?)
        };
        SchedulePayload::File {
            file_name,
            file_has_text,
            text,
        }
    } else {
        SchedulePayload::Text {
            destinations: json.destinations.ok_or(DecodeError::MissingField {
                field: "destinations",
            })?,
            text: json.text.ok_or(DecodeError::MissingField { field: "text" })?,
        }
    };

    Ok(Schedule {
        id: json.id,
        user_id: json.user.map(|user| user.id),
        scheduled_at,
        created_at,
        status: json.status.unwrap_or_else(|| DEFAULT_STATUS.to_owned()),
        payload,
    })
}
