//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod common;
mod flex;
mod free_trial_numbers;
mod messages;
mod oauth;
mod reports;
mod virtual_numbers;

pub use common::{TransportError, decode_api_errors, encode_page_query};
pub use free_trial_numbers::{
    decode_free_trial_numbers_json_response, encode_free_trial_numbers_json,
};
pub use messages::{
    decode_message_json_response, decode_messages_json_response, encode_send_message_json,
    encode_update_tags_json,
};
pub use oauth::{decode_token_error_message, decode_token_json_response, encode_token_form};
pub use reports::{
    decode_report_json_response, decode_reports_json_response, encode_create_report_json,
};
pub use virtual_numbers::{
    decode_recipient_optouts_json_response, decode_virtual_number_json_response,
    decode_virtual_numbers_json_response, encode_virtual_number_options_json,
};
