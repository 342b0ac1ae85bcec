use crate::domain::NewUserPayload;
use crate::utils::error_chain_fmt;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};

/// Header carrying the identifying token.
pub const ROLL_NUMBER_HEADER: &str = "roll-number";

#[derive(Clone, Debug)]
pub struct CreateUserClient {
    endpoint: String,
    http_client: Client,
    roll_number: Secret<String>,
}

/// Which `roll-number` header a call carries.
#[derive(Debug, Clone, Copy)]
pub enum RollNumberHeader<'a> {
    /// The token from configuration.
    Configured,
    Omitted,
    Custom(&'a str),
}

impl RollNumberHeader<'_> {
    fn describe(&self) -> &str {
        match self {
            RollNumberHeader::Configured => "configured",
            RollNumberHeader::Omitted => "omitted",
            RollNumberHeader::Custom(value) => value,
        }
    }
}

/// What came back from the endpoint. The body is kept verbatim and never parsed.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

#[derive(thiserror::Error)]
pub enum ApiCallError {
    #[error("Failed to send the create-user request to {endpoint}.")]
    Send {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read the create-user response body.")]
    ReadBody(#[source] reqwest::Error),
}

impl std::fmt::Debug for ApiCallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl CreateUserClient {
    pub fn new(
        endpoint: String,
        roll_number: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint,
            http_client,
            roll_number,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POSTs `payload` as JSON. Any status code counts as a response;
    /// only a call that never produced one is an error.
    #[tracing::instrument(
        name = "Creating user",
        skip(self, payload, roll_number),
        fields(roll_number = %roll_number.describe(), status = tracing::field::Empty)
    )]
    pub async fn create_user(
        &self,
        payload: &NewUserPayload,
        roll_number: RollNumberHeader<'_>,
    ) -> Result<ApiResponse, ApiCallError> {
        let mut request = self.http_client.post(&self.endpoint).json(payload);
        request = match roll_number {
            RollNumberHeader::Configured => {
                request.header(ROLL_NUMBER_HEADER, self.roll_number.expose_secret())
            }
            RollNumberHeader::Custom(value) => request.header(ROLL_NUMBER_HEADER, value),
            RollNumberHeader::Omitted => request,
        };

        let response = request.send().await.map_err(|e| {
            tracing::error!(error.cause_chain = ?e, "Create-user request failed");
            ApiCallError::Send {
                endpoint: self.endpoint.clone(),
                source: e,
            }
        })?;
        let status = response.status();
        tracing::Span::current().record("status", status.as_u16());

        let body = response.text().await.map_err(ApiCallError::ReadBody)?;
        tracing::debug!(%status, %body, "Received create-user response");
        Ok(ApiResponse { status, body })
    }
}
