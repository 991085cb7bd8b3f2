//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    CreateReport, MessageOptions, PageQuery, RegisterFreeTrialNumbers, ReportPeriod,
    SEND_MESSAGE_MAX_MULTIMEDIA, SendMessage, VirtualNumberOptions,
};
pub use response::{
    ApiErrorDetail, Message, Messages, MultimediaRecord, Paging, RecipientOptout,
    RecipientOptouts, Report, VirtualNumber, VirtualNumbers,
};
pub use validation::ValidationError;
pub use value::{
    CallbackUrl, ClientId, ClientSecret, Limit, MessageContent, MessageId, Multimedia,
    MultimediaType, Offset, PhoneNumber, ReportId, ScheduleSend, SenderId, Tags,
    VirtualNumberId,
};
