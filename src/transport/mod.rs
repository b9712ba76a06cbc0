//! Transport layer: wire-format details (URL/body encoding, JSON decoding).

mod account;
mod credits;
mod datetime;
mod messages;
mod schedules;
mod users;

pub use account::decode_account_response;
pub use messages::{
    decode_delivery_response, decode_last_messages_response, decode_send_message_response,
    decode_schedule_message_response, encode_last_messages_query, encode_schedule_message_body,
    encode_send_message_body,
};
pub use schedules::{decode_schedule_list_response, decode_schedule_response};
pub use users::{decode_user_list_response, decode_user_response};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid timestamp in {field}: {value}")]
    Timestamp { field: &'static str, value: String },

    #[error("invalid number in {field}: {value}")]
    Number { field: &'static str, value: String },

    #[error("response is missing required field {field}")]
    MissingField { field: &'static str },
}
