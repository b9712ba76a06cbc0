use serde::Deserialize;

use super::DecodeError;
use crate::domain::User;

#[derive(Debug, Clone, Deserialize)]
struct UserJson {
    id: i64,
    name: String,
    email: String,
    status: String,
}

impl From<UserJson> for User {
    fn from(json: UserJson) -> Self {
        Self {
            id: json.id,
            name: json.name,
            email: json.email,
            status: json.status,
        }
    }
}

pub fn decode_user_response(json: &str) -> Result<User, DecodeError> {
    let parsed: UserJson = serde_json::from_str(json)?;
    Ok(parsed.into())
}

pub fn decode_user_list_response(json: &str) -> Result<Vec<User>, DecodeError> {
    let parsed: Vec<UserJson> = serde_json::from_str(json)?;
    Ok(parsed.into_iter().map(User::from).collect())
}
