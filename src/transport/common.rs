use serde::Deserialize;

use super::flex::{FlexibleString, FlexibleU64};
use crate::domain::{ApiErrorDetail, Limit, Offset, PageQuery, Paging, Tags};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is missing required field: {field}")]
    MissingField { field: &'static str },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PagingJson {
    next_page: Option<String>,
    previous_page: Option<String>,
    last_page: Option<String>,
    total_count: Option<FlexibleU64>,
}

impl From<PagingJson> for Paging {
    fn from(value: PagingJson) -> Self {
        Paging {
            next_page: non_empty(value.next_page),
            previous_page: non_empty(value.previous_page),
            last_page: non_empty(value.last_page),
            total_count: value.total_count.map(FlexibleU64::value).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorsJsonResponse {
    #[serde(default)]
    errors: Option<Vec<ErrorJson>>,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorJson {
    code: Option<FlexibleString>,
    issue: Option<String>,
    field: Option<String>,
    #[serde(alias = "suggestedAction")]
    suggested_action: Option<String>,
}

/// Query parameters for list calls; unset fields are omitted.
pub fn encode_page_query(query: &PageQuery) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    if let Some(limit) = query.limit {
        params.push((Limit::FIELD.to_owned(), limit.value().to_string()));
    }
    if let Some(offset) = query.offset {
        params.push((Offset::FIELD.to_owned(), offset.value().to_string()));
    }
    if let Some(filter) = query.filter.as_ref() {
        params.push(("filter".to_owned(), filter.clone()));
    }
    params
}

/// Parse the `{"errors": [...]}` payload of a failed call. Anything else
/// yields an empty list.
pub fn decode_api_errors(body: &str) -> Vec<ApiErrorDetail> {
    let Ok(parsed) = serde_json::from_str::<ErrorsJsonResponse>(body) else {
        return Vec::new();
    };
    parsed
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(|error| ApiErrorDetail {
            code: error.code.map(FlexibleString::into_string),
            issue: error.issue,
            field: error.field,
            suggested_action: error.suggested_action,
        })
        .collect()
}

pub(super) fn tags_json(tags: &Tags) -> serde_json::Value {
    serde_json::Value::from(tags.as_slice().to_vec())
}

pub(super) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_omits_unset_fields() {
        assert!(encode_page_query(&PageQuery::default()).is_empty());

        let query = PageQuery::new(Limit::new(5).unwrap(), Offset::new(0).unwrap())
            .with_filter("outgoing");
        assert_eq!(
            encode_page_query(&query),
            vec![
                ("limit".to_owned(), "5".to_owned()),
                ("offset".to_owned(), "0".to_owned()),
                ("filter".to_owned(), "outgoing".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_api_errors_reads_both_spellings() {
        let body = r#"
        {
          "errors": [
            {
              "code": "TOO_MANY",
              "issue": "limit",
              "field": "limit",
              "suggested_action": "Lower it"
            },
            {"code": 4001, "suggestedAction": "Try later"}
          ]
        }
        "#;
        let errors = decode_api_errors(body);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].code.as_deref(), Some("TOO_MANY"));
        assert_eq!(errors[0].suggested_action.as_deref(), Some("Lower it"));
        assert_eq!(errors[1].code.as_deref(), Some("4001"));
        assert_eq!(errors[1].suggested_action.as_deref(), Some("Try later"));
    }

    #[test]
    fn decode_api_errors_tolerates_other_bodies() {
        assert!(decode_api_errors("").is_empty());
        assert!(decode_api_errors("Bad Gateway").is_empty());
        assert!(decode_api_errors(r#"{"message":"nope"}"#).is_empty());
    }

    #[test]
    fn paging_drops_empty_links() {
        let json = r#"{
            "nextPage": "",
            "previousPage": null,
            "lastPage": "/messages?offset=40",
            "totalCount": "41"
        }"#;
        let paging: Paging = serde_json::from_str::<PagingJson>(json).unwrap().into();
        assert_eq!(paging.next_page, None);
        assert_eq!(paging.previous_page, None);
        assert_eq!(paging.last_page.as_deref(), Some("/messages?offset=40"));
        assert_eq!(paging.total_count, 41);
    }
}
