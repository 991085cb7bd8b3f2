use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use phonenumber::country;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// OAuth2 client id.
///
/// Invariant: non-empty after trimming.
pub struct ClientId(String);

impl ClientId {
    /// Form field name used by the token endpoint (`client_id`).
    pub const FIELD: &'static str = "client_id";

    /// Create a validated [`ClientId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated client id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// OAuth2 client secret.
///
/// Invariant: must not be empty (whitespace is preserved). `Debug` output is redacted.
pub struct ClientSecret(String);

impl ClientSecret {
    /// Form field name used by the token endpoint (`client_secret`).
    pub const FIELD: &'static str = "client_secret";

    /// Create a validated [`ClientSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(<redacted>)")
    }
}

#[derive(Debug, Clone)]
/// Australian mobile number used as a message recipient (`to`).
///
/// Accepted forms are `04XXXXXXXX` and `+614XXXXXXXX`. The trimmed input is
/// what goes on the wire; equality, ordering, and hashing use the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    /// JSON field name used by the messaging API (`to`).
    pub const FIELD: &'static str = "to";

    /// Validate and normalize an Australian mobile number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let raw = value.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let subscriber = match raw
            .strip_prefix("+614")
            .or_else(|| raw.strip_prefix("04"))
        {
            Some(rest) => rest,
            None => {
                return Err(ValidationError::InvalidPhoneNumber {
                    input: raw,
                    reason: "expected a mobile number starting with 04 or +614",
                });
            }
        };
        if subscriber.len() != 8 || !subscriber.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhoneNumber {
                input: raw,
                reason: "expected 8 digits after the 04 or +614 prefix",
            });
        }

        let parsed = phonenumber::parse(Some(country::Id::AU), &raw).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: raw.clone(),
                reason: "not a dialable Australian number",
            }
        })?;
        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164 })
    }

    /// Trimmed value as provided.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation (`+61412345678`).
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Virtual number assigned to the account.
///
/// Invariant: `04` followed by exactly 8 digits.
pub struct VirtualNumberId(String);

impl VirtualNumberId {
    /// JSON field name used by the messaging API (`virtualNumber`).
    pub const FIELD: &'static str = "virtualNumber";

    /// Create a validated [`VirtualNumberId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let valid = trimmed.len() == 10
            && trimmed.starts_with("04")
            && trimmed.bytes().all(|b| b.is_ascii_digit());
        if !valid {
            return Err(ValidationError::InvalidVirtualNumber {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// What the recipient sees as the sender (`from`): a virtual number, the
/// `privateNumber` keyword, or a registered sender name.
///
/// Invariant: 1 to 13 ASCII alphanumeric characters.
pub struct SenderId(String);

impl SenderId {
    /// JSON field name used by the messaging API (`from`).
    pub const FIELD: &'static str = "from";

    /// Maximum number of characters.
    pub const MAX_CHARS: usize = 13;

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let chars = trimmed.chars().count();
        if chars > Self::MAX_CHARS {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_CHARS,
                actual: chars,
            });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidSender {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<VirtualNumberId> for SenderId {
    fn from(value: VirtualNumberId) -> Self {
        Self(value.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS text (`messageContent`).
///
/// Invariant: non-empty after trimming and at most 1600 characters. The
/// original value (including whitespace) is preserved.
pub struct MessageContent(String);

impl MessageContent {
    /// JSON field name used by the messaging API (`messageContent`).
    pub const FIELD: &'static str = "messageContent";

    /// Maximum number of characters.
    pub const MAX_CHARS: usize = 1600;

    /// Create validated message content.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let chars = value.chars().count();
        if chars > Self::MAX_CHARS {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_CHARS,
                actual: chars,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the content as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message identifier (`messageId`).
///
/// Invariant: a version 1 UUID in canonical lowercase hyphenated form.
pub struct MessageId(String);

impl MessageId {
    /// JSON field name used by the messaging API (`messageId`).
    pub const FIELD: &'static str = "messageId";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let invalid = || ValidationError::InvalidMessageId {
            input: trimmed.to_owned(),
        };
        let parsed = uuid::Uuid::parse_str(trimmed).map_err(|_| invalid())?;
        if parsed.get_version_num() != 1 || parsed.hyphenated().to_string() != trimmed {
            return Err(invalid());
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// HTTPS URL the API calls back (`statusCallbackUrl`, `replyCallbackUrl`,
/// `reportCallbackUrl`).
///
/// Invariant: parses as a URL with the `https` scheme. The trimmed input is
/// kept verbatim.
pub struct CallbackUrl(String);

impl CallbackUrl {
    /// Generic field name used in validation errors.
    pub const FIELD: &'static str = "callbackUrl";

    /// Create a validated [`CallbackUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let parsed = url::Url::parse(trimmed).map_err(|_| ValidationError::InvalidUrl {
            field: Self::FIELD,
            input: trimmed.to_owned(),
        })?;
        if parsed.scheme() != "https" {
            return Err(ValidationError::InsecureUrl {
                field: Self::FIELD,
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the URL as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Free-form labels attached to a message or virtual number (`tags`).
///
/// Invariant: 1 to 10 tags, each non-empty after trimming.
pub struct Tags(Vec<String>);

impl Tags {
    /// JSON field name used by the messaging API (`tags`).
    pub const FIELD: &'static str = "tags";

    pub const MIN: usize = 1;
    pub const MAX: usize = 10;

    /// Create a validated tag list.
    pub fn new<I, S>(tags: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = tags
            .into_iter()
            .map(|tag| {
                let tag = tag.into();
                let trimmed = tag.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::Empty { field: Self::FIELD });
                }
                Ok(trimmed.to_owned())
            })
            .collect::<Result<Vec<String>, ValidationError>>()?;
        if !(Self::MIN..=Self::MAX).contains(&tags.len()) {
            return Err(ValidationError::TagCount {
                min: Self::MIN,
                max: Self::MAX,
                actual: tags.len(),
            });
        }
        Ok(Self(tags))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Future send time (`scheduleSend`) as an ISO-8601 UTC timestamp.
///
/// Invariant: `YYYY-MM-DDTHH:MM:SS[.fff]Z`.
pub struct ScheduleSend {
    raw: String,
    at: DateTime<Utc>,
}

impl ScheduleSend {
    /// JSON field name used by the messaging API (`scheduleSend`).
    pub const FIELD: &'static str = "scheduleSend";

    /// Parse a timestamp such as `2019-08-24T15:39:00Z`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let invalid = || ValidationError::InvalidScheduleSend {
            input: trimmed.to_owned(),
        };
        if trimmed.as_bytes().get(10) != Some(&b'T') || !trimmed.ends_with('Z') {
            return Err(invalid());
        }
        let at = DateTime::parse_from_rfc3339(trimmed)
            .map_err(|_| invalid())?
            .with_timezone(&Utc);
        Ok(Self {
            raw: trimmed.to_owned(),
            at,
        })
    }

    /// Schedule at an exact instant, rendered with whole seconds.
    pub fn at(at: DateTime<Utc>) -> Self {
        Self {
            raw: at.to_rfc3339_opts(SecondsFormat::Secs, true),
            at,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Page size for list calls (`limit`).
///
/// Invariant: `1..=50`.
pub struct Limit(u8);

impl Limit {
    /// Query parameter name (`limit`).
    pub const FIELD: &'static str = "limit";

    pub const MIN: u8 = 1;
    pub const MAX: u8 = 50;

    /// Create a validated page size.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: Self::MIN.into(),
                max: Self::MAX.into(),
                actual: value.into(),
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Index of the first record for list calls (`offset`).
///
/// Invariant: `0..=999999`.
pub struct Offset(u32);

impl Offset {
    /// Query parameter name (`offset`).
    pub const FIELD: &'static str = "offset";

    pub const MAX: u32 = 999_999;

    /// Create a validated offset.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: 0,
                max: Self::MAX.into(),
                actual: value.into(),
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Report identifier (`reportId`).
///
/// Invariant: non-empty after trimming.
pub struct ReportId(String);

impl ReportId {
    /// JSON field name used by the messaging API (`reportId`).
    pub const FIELD: &'static str = "reportId";

    /// Create a validated [`ReportId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// MIME type of an MMS attachment.
///
/// Types unknown to this crate are preserved in [`MultimediaType::Other`].
pub enum MultimediaType {
    AudioAmr,
    AudioMp3,
    AudioMpeg3,
    AudioMidi,
    AudioWav,
    AudioBasic,
    ImageGif,
    ImageJpeg,
    ImagePng,
    ImageBmp,
    VideoMpeg4,
    VideoMp4,
    VideoMpg,
    VideoMpeg,
    Video3gpp,
    Video3gp,
    Other(String),
}

impl MultimediaType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::AudioAmr => "audio/amr",
            Self::AudioMp3 => "audio/mp3",
            Self::AudioMpeg3 => "audio/mpeg3",
            Self::AudioMidi => "audio/midi",
            Self::AudioWav => "audio/wav",
            Self::AudioBasic => "audio/basic",
            Self::ImageGif => "image/gif",
            Self::ImageJpeg => "image/jpeg",
            Self::ImagePng => "image/png",
            Self::ImageBmp => "image/bmp",
            Self::VideoMpeg4 => "video/mpeg4",
            Self::VideoMp4 => "video/mp4",
            Self::VideoMpg => "video/mpg",
            Self::VideoMpeg => "video/mpeg",
            Self::Video3gpp => "video/3gpp",
            Self::Video3gp => "video/3gp",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for MultimediaType {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "audio/amr" => Self::AudioAmr,
            "audio/mp3" => Self::AudioMp3,
            "audio/mpeg3" => Self::AudioMpeg3,
            "audio/midi" => Self::AudioMidi,
            "audio/wav" => Self::AudioWav,
            "audio/basic" => Self::AudioBasic,
            "image/gif" => Self::ImageGif,
            "image/jpeg" => Self::ImageJpeg,
            "image/png" => Self::ImagePng,
            "image/bmp" => Self::ImageBmp,
            "video/mpeg4" => Self::VideoMpeg4,
            "video/mp4" => Self::VideoMp4,
            "video/mpg" => Self::VideoMpg,
            "video/mpeg" => Self::VideoMpeg,
            "video/3gpp" => Self::Video3gpp,
            "video/3gp" => Self::Video3gp,
            _ => Self::Other(value.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One MMS attachment: MIME type, file name, and base64 payload.
pub struct Multimedia {
    content_type: MultimediaType,
    file_name: String,
    payload: String,
}

impl Multimedia {
    /// Create an attachment. File name and payload must be non-empty.
    pub fn new(
        content_type: MultimediaType,
        file_name: impl Into<String>,
        payload: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let file_name = file_name.into();
        if file_name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "fileName" });
        }
        let payload = payload.into();
        if payload.trim().is_empty() {
            return Err(ValidationError::Empty { field: "payload" });
        }
        Ok(Self {
            content_type,
            file_name,
            payload,
        })
    }

    pub fn content_type(&self) -> &MultimediaType {
        &self.content_type
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let client_id = ClientId::new("  id ").unwrap();
        assert_eq!(client_id.as_str(), "id");
        assert!(ClientId::new("  ").is_err());

        let secret = ClientSecret::new(" s ").unwrap();
        assert_eq!(secret.expose(), " s ");
        assert!(ClientSecret::new("").is_err());
        assert_eq!(format!("{secret:?}"), "ClientSecret(<redacted>)");

        let report = ReportId::new(" r-1 ").unwrap();
        assert_eq!(report.as_str(), "r-1");
        assert!(ReportId::new("").is_err());
    }

    #[test]
    fn phone_number_accepts_local_and_international_mobiles() {
        let local = PhoneNumber::new(" 0412345678 ").unwrap();
        assert_eq!(local.as_str(), "0412345678");
        assert_eq!(local.e164(), "+61412345678");

        let international = PhoneNumber::new("+61412345678").unwrap();
        assert_eq!(international.as_str(), "+61412345678");
        assert_eq!(local, international);
    }

    #[test]
    fn phone_number_rejects_bad_shapes() {
        assert!(matches!(
            PhoneNumber::new(""),
            Err(ValidationError::Empty { field: "to" })
        ));
        assert!(matches!(
            PhoneNumber::new("0212345678"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
        assert!(PhoneNumber::new("041234567").is_err());
        assert!(PhoneNumber::new("04123456789").is_err());
        assert!(PhoneNumber::new("04123a5678").is_err());
        assert!(PhoneNumber::new("+6141234567").is_err());
    }

    #[test]
    fn virtual_number_requires_04_and_8_digits() {
        assert_eq!(
            VirtualNumberId::new("0400000001").unwrap().as_str(),
            "0400000001"
        );
        assert!(matches!(
            VirtualNumberId::new("0500000001"),
            Err(ValidationError::InvalidVirtualNumber { .. })
        ));
        assert!(VirtualNumberId::new("040000001").is_err());
        assert!(VirtualNumberId::new("+61400000001").is_err());
    }

    #[test]
    fn sender_is_short_alphanumeric() {
        assert_eq!(SenderId::new("privateNumber").unwrap().as_str(), "privateNumber");
        assert!(matches!(
            SenderId::new("ABCDEFGHIJKLMN"),
            Err(ValidationError::TooLong { max: 13, .. })
        ));
        assert!(matches!(
            SenderId::new("my-shop"),
            Err(ValidationError::InvalidSender { .. })
        ));
        let from_virtual: SenderId = VirtualNumberId::new("0400000001").unwrap().into();
        assert_eq!(from_virtual.as_str(), "0400000001");
    }

    #[test]
    fn sender_length_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        assert!(matches!(
            SenderId::new("ééééééé"),
            Err(ValidationError::InvalidSender { .. })
        ));
        assert!(matches!(
            SenderId::new("é".repeat(14)),
            Err(ValidationError::TooLong {
                max: 13,
                actual: 14,
                ..
            })
        ));
    }

    #[test]
    fn message_content_limits_length() {
        assert!(MessageContent::new("x".repeat(1600)).is_ok());
        assert!(matches!(
            MessageContent::new("x".repeat(1601)),
            Err(ValidationError::TooLong { actual: 1601, .. })
        ));
        assert!(MessageContent::new("  ").is_err());
        assert_eq!(MessageContent::new(" hi ").unwrap().as_str(), " hi ");
    }

    #[test]
    fn message_id_requires_uuid_v1() {
        let id = MessageId::new("9b3e1cb0-7a7d-11ee-b962-0242ac120002").unwrap();
        assert_eq!(id.as_str(), "9b3e1cb0-7a7d-11ee-b962-0242ac120002");

        // version 4
        assert!(MessageId::new("4b8a4a9e-1c3d-4f7a-9d6e-2a1b3c4d5e6f").is_err());
        // uppercase is not canonical
        assert!(MessageId::new("9B3E1CB0-7A7D-11EE-B962-0242AC120002").is_err());
        assert!(matches!(
            MessageId::new("not-a-uuid"),
            Err(ValidationError::InvalidMessageId { .. })
        ));
    }

    #[test]
    fn callback_url_requires_https() {
        assert_eq!(
            CallbackUrl::new("https://example.com/hook").unwrap().as_str(),
            "https://example.com/hook"
        );
        assert!(matches!(
            CallbackUrl::new("http://example.com/hook"),
            Err(ValidationError::InsecureUrl { .. })
        ));
        assert!(matches!(
            CallbackUrl::new("example.com/hook"),
            Err(ValidationError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn tags_count_is_enforced() {
        assert_eq!(Tags::new(["a", " b "]).unwrap().as_slice(), ["a", "b"]);
        assert!(matches!(
            Tags::new(Vec::<String>::new()),
            Err(ValidationError::TagCount { actual: 0, .. })
        ));
        assert!(Tags::new((0..11).map(|n| n.to_string())).is_err());
        assert!(Tags::new(["ok", " "]).is_err());
    }

    #[test]
    fn schedule_send_parses_iso_utc() {
        let at = ScheduleSend::new("2019-08-24T15:39:00Z").unwrap();
        assert_eq!(at.as_str(), "2019-08-24T15:39:00Z");
        assert_eq!(at.datetime().timestamp(), 1_566_661_140);

        assert!(ScheduleSend::new("2019-08-24T15:39:00.250Z").is_ok());
        assert!(ScheduleSend::new("2019-08-24T15:39:00+10:00").is_err());
        assert!(ScheduleSend::new("2019-08-24 15:39:00Z").is_err());
        assert!(ScheduleSend::new("tomorrow").is_err());

        let rendered = ScheduleSend::at(at.datetime());
        assert_eq!(rendered.as_str(), "2019-08-24T15:39:00Z");
    }

    #[test]
    fn paging_values_are_bounded() {
        assert!(Limit::new(0).is_err());
        assert_eq!(Limit::new(50).unwrap().value(), 50);
        assert!(Limit::new(51).is_err());
        assert_eq!(Offset::new(999_999).unwrap().value(), 999_999);
        assert!(matches!(
            Offset::new(1_000_000),
            Err(ValidationError::OutOfRange { field: "offset", .. })
        ));
    }

    #[test]
    fn multimedia_type_round_trips_known_and_unknown() {
        assert_eq!(MultimediaType::from("image/PNG"), MultimediaType::ImagePng);
        assert_eq!(MultimediaType::ImagePng.as_str(), "image/png");
        let other = MultimediaType::from("application/pdf");
        assert_eq!(other.as_str(), "application/pdf");
        assert!(Multimedia::new(MultimediaType::ImageJpeg, "a.jpg", "").is_err());
    }
}
