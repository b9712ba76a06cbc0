use serde::Deserialize;
use serde::de::Error as DeError;

/// Credits value returned by Elibom as either JSON string or JSON number.
///
/// For numbers, the raw JSON token is preserved to avoid formatting drift
/// (`1` stays `"1"` instead of becoming `"1.0"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportCredits(String);

impl TransportCredits {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportCredits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected credits field to be JSON string or number",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TransportCredits;

    #[test]
    fn preserves_numeric_tokens_verbatim() {
        let parsed: TransportCredits = serde_json::from_str("1").unwrap();
        assert_eq!(parsed.into_string(), "1");

        let parsed: TransportCredits = serde_json::from_str("10.00").unwrap();
        assert_eq!(parsed.into_string(), "10.00");

        let parsed: TransportCredits = serde_json::from_str("\"2.5\"").unwrap();
        assert_eq!(parsed.into_string(), "2.5");
    }

    #[test]
    fn rejects_non_scalar_tokens() {
        assert!(serde_json::from_str::<TransportCredits>("true").is_err());
        assert!(serde_json::from_str::<TransportCredits>("[1]").is_err());
    }
}
