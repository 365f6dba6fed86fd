//! Typed wrapper for the letters endpoints.

mod product;

use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::http::{ApiError, KlaraClient, RequestSpec};

pub use product::DeliveryProduct;

/// Request payload for sending a letter.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SendLetter {
    pub product: DeliveryProduct,
    /// Free-form caller reference echoed back by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl SendLetter {
    pub fn new(product: DeliveryProduct) -> Self {
        Self {
            product,
            reference: None,
        }
    }
}

/// A letter as returned by the API.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Letter {
    pub id: String,
    pub status: Option<String>,
    pub product: DeliveryProduct,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LetterService: Send + Sync {
    async fn send_letter(
        &self,
        organisation_id: &str,
        letter: &SendLetter,
    ) -> Result<Letter, ApiError>;
    async fn get_letter(
        &self,
        organisation_id: &str,
        letter_id: &str,
    ) -> Result<Letter, ApiError>;
}

/// Letters API backed by a [`KlaraClient`].
pub struct LettersApi {
    client: KlaraClient,
}

impl LettersApi {
    pub fn new(client: KlaraClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &KlaraClient {
        &self.client
    }
}

#[async_trait]
impl LetterService for LettersApi {
    #[tracing::instrument(skip(self, letter))]
    async fn send_letter(
        &self,
        organisation_id: &str,
        letter: &SendLetter,
    ) -> Result<Letter, ApiError> {
        debug!(
            "Sending {} letter for organisation {}...",
            letter.product, organisation_id
        );

        let body = serde_json::to_value(letter)
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        self.client
            .fetch(
                RequestSpec::new("/organisations/:organisationId/letters")
                    .method(Method::POST)
                    .path_params(&[("organisationId", organisation_id)])
                    .body(body),
            )
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_letter(
        &self,
        organisation_id: &str,
        letter_id: &str,
    ) -> Result<Letter, ApiError> {
        debug!(
            "Fetching letter {} for organisation {}...",
            letter_id, organisation_id
        );

        self.client
            .fetch(
                RequestSpec::new("/organisations/:organisationId/letters/:letterId").path_params(
                    &[("organisationId", organisation_id), ("letterId", letter_id)],
                ),
            )
            .await
    }
}
