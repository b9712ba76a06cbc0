use chrono::NaiveDateTime;

/// Account info for the authenticated user.
///
/// `credits` is absent when the account is not entitled to see it; the
/// decimal token is preserved verbatim to avoid formatting drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub credits: Option<String>,
    pub owner_id: i64,
}

/// A single SMS message as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    /// Id of the account user who sent the message; 0 when the server omits it.
    pub user_id: i64,
    pub to: String,
    pub operator: String,
    pub from: String,
    pub text: String,
    pub status: String,
    pub status_detail: String,
    /// Credits consumed, preserved as the decimal token from the wire.
    pub credits: String,
    pub created_at: NaiveDateTime,
    pub sent_at: Option<NaiveDateTime>,
}

/// Aggregate result of a single send, grouping the individual messages.
///
/// `messages.len()` is not cross-validated against the counts; the server
/// owns that relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub id: String,
    pub status: String,
    pub num_sent: u32,
    pub num_failed: u32,
    pub messages: Vec<Message>,
}

/// A deferred send, either text-based or file-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub id: i64,
    pub user_id: Option<i64>,
    pub scheduled_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    /// Defaults to `"scheduled"` when the server omits the field.
    pub status: String,
    pub payload: SchedulePayload,
}

impl Schedule {
    pub fn is_file(&self) -> bool {
        matches!(self.payload, SchedulePayload::File { .. })
    }
}

/// Exactly one of the two schedule shapes, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulePayload {
    /// Destinations come from an uploaded file; `text` is carried only when
    /// the file itself does not embed one.
    File {
        file_name: String,
        file_has_text: bool,
        text: Option<String>,
    },
    /// Inline destinations and text.
    Text { destinations: String, text: String },
}

/// An account user (someone with access to the account).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: String,
}
