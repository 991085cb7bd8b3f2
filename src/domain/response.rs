use crate::domain::value::MultimediaType;

/// One entry of an API error payload (`{"errors": [...]}`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiErrorDetail {
    pub code: Option<String>,
    pub issue: Option<String>,
    pub field: Option<String>,
    pub suggested_action: Option<String>,
}

/// Attachment as echoed back by the API. The payload may be omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultimediaRecord {
    pub content_type: MultimediaType,
    pub file_name: Option<String>,
    pub payload: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    /// Usually one id; some responses carry one per recipient.
    pub message_ids: Vec<String>,
    pub to: Vec<String>,
    pub from: Option<String>,
    pub status: Option<String>,
    pub message_content: Option<String>,
    pub multimedia: Vec<MultimediaRecord>,
    pub retry_timeout: Option<u64>,
    pub schedule_send: Option<String>,
    pub delivery_notification: Option<bool>,
    pub status_callback_url: Option<String>,
    pub tags: Vec<String>,
    pub direction: Option<String>,
    pub queue_priority: Option<u64>,
    pub create_timestamp: Option<String>,
    pub sent_timestamp: Option<String>,
    pub received_timestamp: Option<String>,
}

impl Message {
    /// First message id, if any.
    pub fn message_id(&self) -> Option<&str> {
        self.message_ids.first().map(String::as_str)
    }
}

/// Paging links returned with list results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paging {
    pub next_page: Option<String>,
    pub previous_page: Option<String>,
    pub last_page: Option<String>,
    pub total_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Messages {
    pub messages: Vec<Message>,
    pub paging: Paging,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VirtualNumber {
    pub virtual_number: String,
    pub last_use: Option<String>,
    pub reply_callback_url: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VirtualNumbers {
    pub virtual_numbers: Vec<VirtualNumber>,
    pub paging: Paging,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipientOptout {
    pub message_id: Option<String>,
    pub virtual_number: Option<String>,
    pub optout_number: Option<String>,
    pub create_timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipientOptouts {
    pub recipient_optouts: Vec<RecipientOptout>,
    pub paging: Paging,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub report_id: String,
    pub report_status: Option<String>,
    pub report_type: Option<String>,
    pub report_expiry: Option<String>,
    pub report_url: Option<String>,
    pub report_callback_url: Option<String>,
}
