use serde::Deserialize;
use serde_json::{Map, Value};

use super::common::{TransportError, non_empty};
use crate::domain::{CreateReport, Report, ReportId, ReportPeriod};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportJson {
    report_id: Option<String>,
    report_status: Option<String>,
    report_type: Option<String>,
    report_expiry: Option<String>,
    report_url: Option<String>,
    report_callback_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ReportsJsonResponse {
    reports: Option<Vec<ReportJson>>,
}

impl TryFrom<ReportJson> for Report {
    type Error = TransportError;

    fn try_from(value: ReportJson) -> Result<Self, Self::Error> {
        let report_id = non_empty(value.report_id).ok_or(TransportError::MissingField {
            field: ReportId::FIELD,
        })?;
        Ok(Report {
            report_id,
            report_status: value.report_status,
            report_type: value.report_type,
            report_expiry: value.report_expiry,
            report_url: non_empty(value.report_url),
            report_callback_url: value.report_callback_url,
        })
    }
}

/// JSON body for `POST /reports/messages`.
pub fn encode_create_report_json(request: &CreateReport) -> Value {
    let mut body = Map::new();
    body.insert(
        ReportPeriod::START_FIELD.to_owned(),
        Value::from(request.period.start_str()),
    );
    body.insert(
        ReportPeriod::END_FIELD.to_owned(),
        Value::from(request.period.end_str()),
    );
    if let Some(url) = request.report_callback_url.as_ref() {
        body.insert("reportCallbackUrl".to_owned(), Value::from(url.as_str()));
    }
    if let Some(filter) = request.filter.as_ref() {
        body.insert("filter".to_owned(), Value::from(filter.as_str()));
    }
    Value::Object(body)
}

pub fn decode_report_json_response(json: &str) -> Result<Report, TransportError> {
    let parsed: ReportJson = serde_json::from_str(json)?;
    parsed.try_into()
}

pub fn decode_reports_json_response(json: &str) -> Result<Vec<Report>, TransportError> {
    let parsed: ReportsJsonResponse = serde_json::from_str(json)?;
    parsed
        .reports
        .unwrap_or_default()
        .into_iter()
        .map(Report::try_from)
        .collect()
}
