use crate::client::{MessagingClient, MessagingError};
use crate::domain::{
    PageQuery, RecipientOptouts, VirtualNumber, VirtualNumberId, VirtualNumberOptions,
    VirtualNumbers,
};
use crate::http::{Body, Method};

const VIRTUAL_NUMBERS: &str = "virtual-numbers";

impl MessagingClient {
    /// Assign a new virtual number to the account (`POST /virtual-numbers`).
    pub async fn assign_virtual_number(
        &self,
        options: VirtualNumberOptions,
    ) -> Result<VirtualNumber, MessagingError> {
        let url = self.url(&[VIRTUAL_NUMBERS], &[])?;
        let body = crate::transport::encode_virtual_number_options_json(&options);
        let response = self.execute(Method::Post, url, Body::Json(body)).await?;
        Ok(crate::transport::decode_virtual_number_json_response(&response.body)?)
    }

    pub async fn get_virtual_number(
        &self,
        number: &VirtualNumberId,
    ) -> Result<VirtualNumber, MessagingError> {
        let url = self.url(&[VIRTUAL_NUMBERS, number.as_str()], &[])?;
        let response = self.execute(Method::Get, url, Body::Empty).await?;
        Ok(crate::transport::decode_virtual_number_json_response(&response.body)?)
    }

    pub async fn list_virtual_numbers(
        &self,
        query: PageQuery,
    ) -> Result<VirtualNumbers, MessagingError> {
        let url = self.url(
            &[VIRTUAL_NUMBERS],
            &crate::transport::encode_page_query(&query),
        )?;
        let response = self.execute(Method::Get, url, Body::Empty).await?;
        Ok(crate::transport::decode_virtual_numbers_json_response(
            &response.body,
        )?)
    }

    /// Replace the reply callback and tags of a virtual number (`PUT`).
    pub async fn update_virtual_number(
        &self,
        number: &VirtualNumberId,
        options: VirtualNumberOptions,
    ) -> Result<VirtualNumber, MessagingError> {
        let url = self.url(&[VIRTUAL_NUMBERS, number.as_str()], &[])?;
        let body = crate::transport::encode_virtual_number_options_json(&options);
        let response = self.execute(Method::Put, url, Body::Json(body)).await?;
        Ok(crate::transport::decode_virtual_number_json_response(&response.body)?)
    }

    /// Release a virtual number (`DELETE`).
    pub async fn delete_virtual_number(
        &self,
        number: &VirtualNumberId,
    ) -> Result<(), MessagingError> {
        let url = self.url(&[VIRTUAL_NUMBERS, number.as_str()], &[])?;
        self.execute(Method::Delete, url, Body::Empty).await?;
        Ok(())
    }

    /// Recipients who opted out of messages from this number
    /// (`GET /virtual-numbers/{n}/optouts`).
    pub async fn list_recipient_optouts(
        &self,
        number: &VirtualNumberId,
        query: PageQuery,
    ) -> Result<RecipientOptouts, MessagingError> {
        let url = self.url(
            &[VIRTUAL_NUMBERS, number.as_str(), "optouts"],
            &crate::transport::encode_page_query(&query),
        )?;
        let response = self.execute(Method::Get, url, Body::Empty).await?;
        Ok(crate::transport::decode_recipient_optouts_json_response(
            &response.body,
        )?)
    }
}
