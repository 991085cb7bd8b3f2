use crate::client::{MessagingClient, MessagingError};
use crate::domain::RegisterFreeTrialNumbers;
use crate::http::{Body, Method};

const FREE_TRIAL_NUMBERS: &str = "free-trial-numbers";

impl MessagingClient {
    /// Register recipients a free trial account may message
    /// (`POST /free-trial-numbers`). Returns the registered list.
    pub async fn register_free_trial_numbers(
        &self,
        request: RegisterFreeTrialNumbers,
    ) -> Result<Vec<String>, MessagingError> {
        let url = self.url(&[FREE_TRIAL_NUMBERS], &[])?;
        let body = crate::transport::encode_free_trial_numbers_json(&request);
        let response = self.execute(Method::Post, url, Body::Json(body)).await?;
        Ok(crate::transport::decode_free_trial_numbers_json_response(
            &response.body,
        )?)
    }

    /// Registered free trial numbers (`GET /free-trial-numbers`).
    pub async fn list_free_trial_numbers(&self) -> Result<Vec<String>, MessagingError> {
        let url = self.url(&[FREE_TRIAL_NUMBERS], &[])?;
        let response = self.execute(Method::Get, url, Body::Empty).await?;
        Ok(crate::transport::decode_free_trial_numbers_json_response(
            &response.body,
        )?)
    }
}
