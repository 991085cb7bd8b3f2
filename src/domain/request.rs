use chrono::{Days, NaiveDate, Utc};

use crate::domain::validation::ValidationError;
use crate::domain::value::{
    CallbackUrl, Limit, MessageContent, Multimedia, Offset, PhoneNumber, ScheduleSend, SenderId,
    Tags,
};

pub const SEND_MESSAGE_MAX_MULTIMEDIA: usize = 5;

/// Optional settings shared by sending and updating a message.
#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    /// Minutes the platform keeps retrying an undelivered message.
    pub retry_timeout: Option<u32>,
    pub schedule_send: Option<ScheduleSend>,
    pub delivery_notification: Option<bool>,
    pub status_callback_url: Option<CallbackUrl>,
    pub tags: Option<Tags>,
}

/// An SMS or MMS to send (`POST /messages`) or to replace a scheduled one
/// (`PUT /messages/{id}`).
///
/// Invariants: at least one recipient, message content and/or multimedia, at
/// most [`SEND_MESSAGE_MAX_MULTIMEDIA`] attachments.
#[derive(Debug, Clone)]
pub struct SendMessage {
    to: Vec<PhoneNumber>,
    from: SenderId,
    content: Option<MessageContent>,
    multimedia: Vec<Multimedia>,
    options: MessageOptions,
}

impl SendMessage {
    pub fn new(
        to: Vec<PhoneNumber>,
        from: SenderId,
        content: Option<MessageContent>,
        multimedia: Vec<Multimedia>,
        options: MessageOptions,
    ) -> Result<Self, ValidationError> {
        if to.is_empty() {
            return Err(ValidationError::Empty {
                field: PhoneNumber::FIELD,
            });
        }
        if multimedia.len() > SEND_MESSAGE_MAX_MULTIMEDIA {
            return Err(ValidationError::TooManyMultimedia {
                max: SEND_MESSAGE_MAX_MULTIMEDIA,
                actual: multimedia.len(),
            });
        }
        if content.is_none() && multimedia.is_empty() {
            return Err(ValidationError::MissingContent);
        }
        Ok(Self {
            to,
            from,
            content,
            multimedia,
            options,
        })
    }

    /// Text-only message to a single recipient.
    pub fn sms(to: PhoneNumber, from: SenderId, content: MessageContent) -> Self {
        Self {
            to: vec![to],
            from,
            content: Some(content),
            multimedia: Vec::new(),
            options: MessageOptions::default(),
        }
    }

    /// Multimedia message to a single recipient.
    pub fn mms(
        to: PhoneNumber,
        from: SenderId,
        multimedia: Vec<Multimedia>,
    ) -> Result<Self, ValidationError> {
        Self::new(vec![to], from, None, multimedia, MessageOptions::default())
    }

    pub fn with_options(mut self, options: MessageOptions) -> Self {
        self.options = options;
        self
    }

    pub fn to(&self) -> &[PhoneNumber] {
        &self.to
    }

    pub fn from(&self) -> &SenderId {
        &self.from
    }

    pub fn content(&self) -> Option<&MessageContent> {
        self.content.as_ref()
    }

    pub fn multimedia(&self) -> &[Multimedia] {
        &self.multimedia
    }

    pub fn options(&self) -> &MessageOptions {
        &self.options
    }
}

/// Paging for list calls. Unset fields are left to the API defaults.
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    pub limit: Option<Limit>,
    pub offset: Option<Offset>,
    pub filter: Option<String>,
}

impl PageQuery {
    pub fn new(limit: Limit, offset: Offset) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Settings for assigning or updating a virtual number.
#[derive(Debug, Clone, Default)]
pub struct VirtualNumberOptions {
    pub reply_callback_url: Option<CallbackUrl>,
    pub tags: Option<Tags>,
}

/// Inclusive date range for a messages report.
///
/// Invariants: neither date is after tomorrow (UTC), `start <= end`, and
/// `start` is at most [`ReportPeriod::MAX_AGE_DAYS`] days before today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportPeriod {
    pub const START_FIELD: &'static str = "startDate";
    pub const END_FIELD: &'static str = "endDate";

    /// Oldest allowed start date, in days before today.
    pub const MAX_AGE_DAYS: u64 = 90;

    const DATE_FORMAT: &'static str = "%Y-%m-%d";

    /// Parse `YYYY-MM-DD` dates relative to today's UTC date.
    pub fn new(start: &str, end: &str) -> Result<Self, ValidationError> {
        Self::new_at(start, end, Utc::now().date_naive())
    }

    /// Same as [`ReportPeriod::new`] with an explicit "today".
    pub fn new_at(start: &str, end: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let start_date = parse_date(Self::START_FIELD, start)?;
        let end_date = parse_date(Self::END_FIELD, end)?;

        let latest = today.checked_add_days(Days::new(1)).unwrap_or(today);
        if start_date > latest {
            return Err(ValidationError::DateInFuture {
                field: Self::START_FIELD,
                input: start.trim().to_owned(),
            });
        }
        if end_date > latest {
            return Err(ValidationError::DateInFuture {
                field: Self::END_FIELD,
                input: end.trim().to_owned(),
            });
        }
        if start_date > end_date {
            return Err(ValidationError::StartAfterEnd {
                start: start_date.format(Self::DATE_FORMAT).to_string(),
                end: end_date.format(Self::DATE_FORMAT).to_string(),
            });
        }
        let earliest = today
            .checked_sub_days(Days::new(Self::MAX_AGE_DAYS))
            .unwrap_or(today);
        if start_date < earliest {
            return Err(ValidationError::DateTooOld {
                field: Self::START_FIELD,
                input: start.trim().to_owned(),
                max_age_days: Self::MAX_AGE_DAYS,
            });
        }
        Ok(Self {
            start: start_date,
            end: end_date,
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn start_str(&self) -> String {
        self.start.format(Self::DATE_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(Self::DATE_FORMAT).to_string()
    }
}

fn parse_date(field: &'static str, input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, ReportPeriod::DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidDate {
            field,
            input: trimmed.to_owned(),
        }
    })
}

/// Request for a messages report (`POST /reports/messages`).
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub period: ReportPeriod,
    pub report_callback_url: Option<CallbackUrl>,
    pub filter: Option<String>,
}

impl CreateReport {
    pub fn new(period: ReportPeriod) -> Self {
        Self {
            period,
            report_callback_url: None,
            filter: None,
        }
    }
}

/// Recipients to register as free trial numbers (`POST /free-trial-numbers`).
#[derive(Debug, Clone)]
pub struct RegisterFreeTrialNumbers {
    numbers: Vec<PhoneNumber>,
}

impl RegisterFreeTrialNumbers {
    pub fn new(numbers: Vec<PhoneNumber>) -> Result<Self, ValidationError> {
        if numbers.is_empty() {
            return Err(ValidationError::Empty {
                field: "freeTrialNumbers",
            });
        }
        Ok(Self { numbers })
    }

    pub fn numbers(&self) -> &[PhoneNumber] {
        &self.numbers
    }
}
