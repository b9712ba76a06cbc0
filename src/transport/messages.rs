use serde::Deserialize;
use serde_json::Value;

use super::DecodeError;
use super::credits::TransportCredits;
use super::datetime;
use crate::domain::{
    Campaign, Delivery, Destinations, LastMessages, Message, MessageText, PerPage, ScheduleMessage,
    SendMessage, Username,
};

const SCHEDULE_DATE_FIELD: &str = "scheduleDate";
const START_DATE_FIELD: &str = "startDate";
const END_DATE_FIELD: &str = "endDate";

pub fn encode_send_message_body(request: &SendMessage) -> String {
    let mut body = serde_json::Map::new();
    body.insert(
        Destinations::FIELD.to_owned(),
        Value::String(request.to().as_str().to_owned()),
    );
    body.insert(
        MessageText::FIELD.to_owned(),
        Value::String(request.text().as_str().to_owned()),
    );
    if let Some(campaign) = request.campaign() {
        body.insert(
            Campaign::FIELD.to_owned(),
            Value::String(campaign.as_str().to_owned()),
        );
    }
    Value::Object(body).to_string()
}

pub fn encode_schedule_message_body(request: &ScheduleMessage) -> String {
    let mut body = serde_json::Map::new();
    body.insert(
        Destinations::FIELD.to_owned(),
        Value::String(request.to().as_str().to_owned()),
    );
    body.insert(
        MessageText::FIELD.to_owned(),
        Value::String(request.text().as_str().to_owned()),
    );
    body.insert(
        SCHEDULE_DATE_FIELD.to_owned(),
        Value::String(datetime::format_datetime(
            request.schedule_date(),
            datetime::SCHEDULE_DATE_FORMAT,
        )),
    );
    if let Some(campaign) = request.campaign() {
        body.insert(
            Campaign::FIELD.to_owned(),
            Value::String(campaign.as_str().to_owned()),
        );
    }
    Value::Object(body).to_string()
}

/// Path plus query string for the last-messages listing.
///
/// Parameters are emitted as-is; the service expects the raw username (an
/// email) in the `user` parameter.
pub fn encode_last_messages_query(request: &LastMessages, username: &Username) -> String {
    let mut path = format!(
        "/messages?{}={}&{}={}",
        PerPage::FIELD,
        request.per_page().value(),
        Username::FIELD,
        username.as_str()
    );
    if let Some((start, end)) = request.range() {
        path.push_str(&format!(
            "&{}={}&{}={}",
            START_DATE_FIELD,
            datetime::format_date(start, datetime::QUERY_DATE_FORMAT),
            END_DATE_FIELD,
            datetime::format_date(end, datetime::QUERY_DATE_FORMAT),
        ));
    }
    path
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageJsonResponse {
    delivery_token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleMessageJsonResponse {
    schedule_id: TransportId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
/// Numeric id that some responses carry as a JSON string.
enum TransportId {
    Int(i64),
    String(String),
}

impl TransportId {
    fn into_i64(self, field: &'static str) -> Result<i64, DecodeError> {
        match self {
            Self::Int(value) => Ok(value),
            Self::String(value) => value
                .trim()
                .parse::<i64>()
                .map_err(|_| DecodeError::Number { field, value }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageJson {
    id: i64,
    #[serde(default)]
    user: Option<UserRefJson>,
    to: String,
    operator: String,
    from: String,
    text: String,
    status: String,
    status_detail: String,
    credits: TransportCredits,
    created_at: String,
    #[serde(default)]
    sent_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct UserRefJson {
    id: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct LastMessagesJsonResponse {
    messages: Vec<MessageJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeliveryJsonResponse {
    delivery_id: String,
    status: String,
    num_sent: u32,
    num_failed: u32,
    messages: Vec<MessageJson>,
}

pub fn decode_send_message_response(json: &str) -> Result<String, DecodeError> {
    let parsed: SendMessageJsonResponse = serde_json::from_str(json)?;
    Ok(parsed.delivery_token)
}

pub fn decode_schedule_message_response(json: &str) -> Result<i64, DecodeError> {
    let parsed: ScheduleMessageJsonResponse = serde_json::from_str(json)?;
    parsed.schedule_id.into_i64("scheduleId")
}

pub fn decode_last_messages_response(json: &str) -> Result<Vec<Message>, DecodeError> {
    let parsed: LastMessagesJsonResponse = serde_json::from_str(json)?;
    parsed
        .messages
        .into_iter()
        .map(message_from_json)
        .collect()
}

pub fn decode_delivery_response(json: &str) -> Result<Delivery, DecodeError> {
    let parsed: DeliveryJsonResponse = serde_json::from_str(json)?;
    Ok(Delivery {
        id: parsed.delivery_id,
        status: parsed.status,
        num_sent: parsed.num_sent,
        num_failed: parsed.num_failed,
        messages: parsed
            .messages
            .into_iter()
            .map(message_from_json)
            .collect::<Result<Vec<Message>, DecodeError>>()?,
    })
}

fn message_from_json(json: MessageJson) -> Result<Message, DecodeError> {
    let created_at = datetime::parse_datetime(&json.created_at, datetime::TIMESTAMP_FORMAT)
        .map_err(|_| DecodeError::Timestamp {
            field: "createdAt",
            value: json.created_at.clone(),
        })?;
    let sent_at = json
        .sent_at
        .map(|value| {
            datetime::parse_datetime(&value, datetime::TIMESTAMP_FORMAT).map_err(|_| {
                DecodeError::Timestamp {
                    field: "sentAt",
                    value,
                }
            })
        })
        .transpose()?;

    Ok(Message {
        id: json.id,
        user_id: json.user.map_or(0, |user| user.id),
        to: json.to,
        operator: json.operator,
        from: json.from,
        text: json.text,
        status: json.status,
        status_detail: json.status_detail,
        credits: json.credits.into_string(),
        created_at,
        sent_at,
    })
}
