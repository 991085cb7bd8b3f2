use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    InvalidPhoneNumber {
        input: String,
        reason: &'static str,
    },
    InvalidVirtualNumber {
        input: String,
    },
    InvalidSender {
        input: String,
    },
    InvalidUrl {
        field: &'static str,
        input: String,
    },
    InsecureUrl {
        field: &'static str,
        input: String,
    },
    TagCount {
        min: usize,
        max: usize,
        actual: usize,
    },
    TooManyMultimedia {
        max: usize,
        actual: usize,
    },
    MissingContent,
    InvalidMessageId {
        input: String,
    },
    InvalidScheduleSend {
        input: String,
    },
    OutOfRange {
        field: &'static str,
        min: u64,
        max: u64,
        actual: u64,
    },
    InvalidDate {
        field: &'static str,
        input: String,
    },
    DateInFuture {
        field: &'static str,
        input: String,
    },
    DateTooOld {
        field: &'static str,
        input: String,
        max_age_days: u64,
    },
    StartAfterEnd {
        start: String,
        end: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} characters (max {max})")
            }
            Self::InvalidPhoneNumber { input, reason } => {
                write!(f, "invalid phone number {input:?}: {reason}")
            }
            Self::InvalidVirtualNumber { input } => write!(
                f,
                "invalid virtual number {input:?}: expected 04 followed by 8 digits"
            ),
            Self::InvalidSender { input } => write!(
                f,
                "invalid sender {input:?}: expected 1 to 13 alphanumeric characters"
            ),
            Self::InvalidUrl { field, input } => write!(f, "{field} is not a valid URL: {input:?}"),
            Self::InsecureUrl { field, input } => {
                write!(f, "{field} must start with https: {input:?}")
            }
            Self::TagCount { min, max, actual } => {
                write!(f, "expected {min} to {max} tags, got {actual}")
            }
            Self::TooManyMultimedia { max, actual } => {
                write!(f, "too many multimedia items: {actual} (max {max})")
            }
            Self::MissingContent => {
                write!(f, "a message needs message content, multimedia, or both")
            }
            Self::InvalidMessageId { input } => {
                write!(f, "invalid message id {input:?}: expected a version 1 UUID")
            }
            Self::InvalidScheduleSend { input } => write!(
                f,
                "invalid schedule time {input:?}: expected an ISO-8601 UTC time \
                 such as 2019-08-24T15:39:00Z"
            ),
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(
                f,
                "{field} out of range: {actual} (expected {min}..={max})"
            ),
            Self::InvalidDate { field, input } => {
                write!(f, "invalid {field} {input:?}: expected YYYY-MM-DD")
            }
            Self::DateInFuture { field, input } => {
                write!(f, "{field} {input:?} is too far in the future")
            }
            Self::DateTooOld {
                field,
                input,
                max_age_days,
            } => write!(
                f,
                "{field} {input:?} is more than {max_age_days} days in the past"
            ),
            Self::StartAfterEnd { start, end } => {
                write!(f, "start date {start} is after end date {end}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
