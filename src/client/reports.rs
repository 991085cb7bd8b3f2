use crate::client::{MessagingClient, MessagingError};
use crate::domain::{CreateReport, Report, ReportId};
use crate::http::{Body, Method};

const REPORTS: &str = "reports";

impl MessagingClient {
    /// Request a CSV report of messages for a date range
    /// (`POST /reports/messages`). The report is built asynchronously; poll
    /// [`MessagingClient::get_report`] or wait for the callback.
    pub async fn create_message_report(
        &self,
        request: CreateReport,
    ) -> Result<Report, MessagingError> {
        let url = self.url(&[REPORTS, "messages"], &[])?;
        let body = crate::transport::encode_create_report_json(&request);
        let response = self.execute(Method::Post, url, Body::Json(body)).await?;
        Ok(crate::transport::decode_report_json_response(&response.body)?)
    }

    pub async fn get_report(&self, report_id: &ReportId) -> Result<Report, MessagingError> {
        let url = self.url(&[REPORTS, report_id.as_str()], &[])?;
        let response = self.execute(Method::Get, url, Body::Empty).await?;
        Ok(crate::transport::decode_report_json_response(&response.body)?)
    }

    pub async fn list_reports(&self) -> Result<Vec<Report>, MessagingError> {
        let url = self.url(&[REPORTS], &[])?;
        let response = self.execute(Method::Get, url, Body::Empty).await?;
        Ok(crate::transport::decode_reports_json_response(&response.body)?)
    }

    /// Operational status of the service (`GET /health-check`).
    pub async fn health_check(&self) -> Result<(), MessagingError> {
        let url = self.url(&["health-check"], &[])?;
        self.execute(Method::Get, url, Body::Empty).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use crate::client::testing::client_with;
    use crate::domain::{CreateReport, ReportId, ReportPeriod};
    use crate::http::{Body, Method};

    #[tokio::test]
    async fn create_report_posts_period() {
        let (client, transport) = client_with(vec![(
            201,
            r#"{"reportId":"r1","reportStatus":"queued","reportCallbackUrl":null}"#,
        )]);
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let period = ReportPeriod::new_at("2024-04-01", "2024-04-30", today).unwrap();

        let report = client
            .create_message_report(CreateReport::new(period))
            .await
            .unwrap();
        assert_eq!(report.report_id, "r1");
        assert_eq!(report.report_status.as_deref(), Some("queued"));

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.url,
            "https://api.example.test/messaging/v3/reports/messages"
        );
        assert_eq!(
            request.body,
            Body::Json(json!({"startDate": "2024-04-01", "endDate": "2024-04-30"}))
        );
    }

    #[tokio::test]
    async fn get_and_list_reports() {
        let (client, transport) = client_with(vec![
            (200, r#"{"reportId":"r1","reportUrl":"https://example.com/r1.csv"}"#),
            (200, r#"{"reports":[{"reportId":"r1"},{"reportId":"r2"}]}"#),
        ]);

        let report = client
            .get_report(&ReportId::new("r1").unwrap())
            .await
            .unwrap();
        assert_eq!(report.report_url.as_deref(), Some("https://example.com/r1.csv"));
        assert_eq!(
            transport.last_request().url,
            "https://api.example.test/messaging/v3/reports/r1"
        );

        let reports = client.list_reports().await.unwrap();
        assert_eq!(reports.len(), 2);
    }

    #[tokio::test]
    async fn health_check_fails_on_server_error() {
        let (client, _) = client_with(vec![(500, "")]);
        let err = client.health_check().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
