use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    TooLong { field: &'static str, max: usize, actual: usize },
    InvalidUrl { input: String },
    NotPositive { field: &'static str, actual: i32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} too long: {actual} characters (max {max})")
            }
            Self::InvalidUrl { input } => write!(f, "not a valid URL: {input}"),
            Self::NotPositive { field, actual } => {
                write!(f, "{field} must be at least 1, got {actual}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "to" };
        assert_eq!(err.to_string(), "to must not be empty");

        let err = ValidationError::TooLong {
            field: "text",
            max: 160,
            actual: 161,
        };
        assert_eq!(err.to_string(), "text too long: 161 characters (max 160)");

        let err = ValidationError::InvalidUrl {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "not a valid URL: bad");

        let err = ValidationError::NotPositive {
            field: "perPage",
            actual: -1,
        };
        assert_eq!(err.to_string(), "perPage must be at least 1, got -1");
    }
}
