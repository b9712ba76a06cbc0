use crate::domain::validation::ValidationError;

const DEFAULT_HOST: &str = "https://www.elibom.com";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Elibom account username (the email used to sign in).
///
/// Invariant: non-empty after trimming. Also sent as the `user` query
/// parameter when listing messages.
pub struct Username(String);

impl Username {
    /// Query parameter name used by Elibom (`user`).
    pub const FIELD: &'static str = "user";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Elibom API password, found in the settings section of your account.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct ApiPassword(String);

impl ApiPassword {
    pub const FIELD: &'static str = "apiPassword";

    /// Create a validated [`ApiPassword`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Base URL requests are sent to.
///
/// Invariant: an absolute URL; trailing slashes are stripped at construction
/// so paths can always be appended with a leading `/`.
pub struct ApiHost(String);

impl ApiHost {
    pub const FIELD: &'static str = "host";

    /// Create a validated [`ApiHost`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if url::Url::parse(trimmed).is_err() {
            return Err(ValidationError::InvalidUrl {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.trim_end_matches('/').to_owned()))
    }

    /// Borrow the host with any trailing slash removed.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiHost {
    /// The production Elibom host (`https://www.elibom.com`).
    fn default() -> Self {
        Self(DEFAULT_HOST.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One or more SMS destinations, separated by comma (`to`).
///
/// Invariant: non-empty after trimming. The value is passed through to the
/// service unparsed; Elibom does its own number routing.
pub struct Destinations(String);

impl Destinations {
    /// Body field name used by Elibom (`to`).
    pub const FIELD: &'static str = "to";

    /// Create validated destinations.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated destinations.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`).
///
/// Invariant: non-empty after trimming and at most 160 characters. The
/// original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Body field name used by Elibom (`text`).
    pub const FIELD: &'static str = "text";

    /// Maximum number of characters in a single message.
    pub const MAX_LEN: usize = 160;

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let actual = value.chars().count();
        if actual > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_LEN,
                actual,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Optional tag grouping related sends (`campaign`).
///
/// Invariant: non-empty after trimming.
pub struct Campaign(String);

impl Campaign {
    /// Body field name used by Elibom (`campaign`).
    pub const FIELD: &'static str = "campaign";

    /// Create a validated [`Campaign`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated campaign tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Delivery token returned by a send and accepted by `/messages/{id}`.
///
/// Invariant: non-empty after trimming.
pub struct DeliveryId(String);

impl DeliveryId {
    /// Response field name used by Elibom (`deliveryId`).
    pub const FIELD: &'static str = "deliveryId";

    /// Create a validated [`DeliveryId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated delivery id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Page size for the last-messages query (`perPage`).
///
/// Invariant: at least 1.
pub struct PerPage(i32);

impl PerPage {
    /// Query parameter name used by Elibom (`perPage`).
    pub const FIELD: &'static str = "perPage";

    /// Create a validated page size.
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if value < 1 {
            return Err(ValidationError::NotPositive {
                field: Self::FIELD,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying page size.
    pub fn value(self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let username = Username::new("  t@u.com ").unwrap();
        assert_eq!(username.as_str(), "t@u.com");
        assert!(Username::new("  ").is_err());

        let password = ApiPassword::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(ApiPassword::new("").is_err());

        let to = Destinations::new(" 573002111111,583242111111 ").unwrap();
        assert_eq!(to.as_str(), "573002111111,583242111111");
        assert!(Destinations::new("").is_err());

        let campaign = Campaign::new(" Campaign_1 ").unwrap();
        assert_eq!(campaign.as_str(), "Campaign_1");
        assert!(Campaign::new("  ").is_err());

        let id = DeliveryId::new(" 12345 ").unwrap();
        assert_eq!(id.as_str(), "12345");
        assert!(DeliveryId::new("  ").is_err());
    }

    #[test]
    fn message_text_enforces_max_length() {
        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());

        let at_limit = "a".repeat(MessageText::MAX_LEN);
        assert!(MessageText::new(at_limit).is_ok());

        let over = "a".repeat(MessageText::MAX_LEN + 1);
        assert!(matches!(
            MessageText::new(over),
            Err(ValidationError::TooLong {
                field: MessageText::FIELD,
                max: 160,
                actual: 161,
            })
        ));
    }

    #[test]
    fn api_host_strips_trailing_slashes_and_rejects_garbage() {
        let host = ApiHost::new("http://localhost:4005/").unwrap();
        assert_eq!(host.as_str(), "http://localhost:4005");

        let host = ApiHost::new("https://www.elibom.com").unwrap();
        assert_eq!(host.as_str(), "https://www.elibom.com");

        assert!(matches!(
            ApiHost::new("not a url"),
            Err(ValidationError::InvalidUrl { .. })
        ));
        assert!(ApiHost::new("  ").is_err());

        assert_eq!(ApiHost::default().as_str(), "https://www.elibom.com");
    }

    #[test]
    fn per_page_requires_positive_values() {
        assert_eq!(PerPage::new(1).unwrap().value(), 1);
        assert!(PerPage::new(0).is_err());
        assert!(matches!(
            PerPage::new(-1),
            Err(ValidationError::NotPositive {
                field: PerPage::FIELD,
                actual: -1,
            })
        ));
    }
}
