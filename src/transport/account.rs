use serde::Deserialize;

use super::DecodeError;
use super::credits::TransportCredits;
use crate::domain::Account;

#[derive(Debug, Clone, Deserialize)]
struct AccountJsonResponse {
    name: String,
    #[serde(default)]
    credits: Option<TransportCredits>,
    owner: OwnerJson,
}

#[derive(Debug, Clone, Deserialize)]
struct OwnerJson {
    id: i64,
}

pub fn decode_account_response(json: &str) -> Result<Account, DecodeError> {
    let parsed: AccountJsonResponse = serde_json::from_str(json)?;
    Ok(Account {
        name: parsed.name,
        credits: parsed.credits.map(TransportCredits::into_string),
        owner_id: parsed.owner.id,
    })
}
