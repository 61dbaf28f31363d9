//! Blocking HTTP client for the optimization service

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;

use super::types::OptimizationResponse;
use crate::config::ServerSettings;
use crate::error::DockershrinkError;
use crate::project::OptimizationRequest;

/// Anything that can turn a request into an optimization result
pub trait OptimizeService {
    /// Submit `request`, authenticated with `credential`
    fn optimize(
        &self,
        credential: &str,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResponse, DockershrinkError>;
}

/// Talks to the service over HTTP, one attempt per call
pub struct ApiClient {
    client: Client,
    settings: ServerSettings,
}

impl ApiClient {
    /// Client for the given service location
    pub fn new(settings: ServerSettings) -> Result<Self, DockershrinkError> {
        let client = Client::builder()
            .build()
            .map_err(|source| DockershrinkError::Network {
                url: settings.optimize_url(),
                source,
            })?;
        Ok(Self { client, settings })
    }

    /// Client configured from `SERVER_URL`
    pub fn from_env() -> Result<Self, DockershrinkError> {
        Self::new(ServerSettings::from_env())
    }

    /// Service location in use
    pub fn settings(&self) -> &ServerSettings {
        &self.settings
    }
}

impl OptimizeService for ApiClient {
    fn optimize(
        &self,
        credential: &str,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResponse, DockershrinkError> {
        let url = self.settings.optimize_url();
        let body = request.to_json()?;
        debug!("POST {} ({} bytes)", url, body.len());

        let network = |source| DockershrinkError::Network {
            url: url.clone(),
            source,
        };

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, credential)
            .body(body)
            .send()
            .map_err(network)?;

        let status = response.status();
        let bytes = response.bytes().map_err(network)?;
        debug!("service replied {} ({} bytes)", status, bytes.len());

        decode_response(status, &bytes)
    }
}

/// Interpret a service reply
///
/// A 200 must carry a valid result body. Any other status is a service
/// error; its message is the body's `error` field, or the status line when
/// the body has none.
pub fn decode_response(
    status: StatusCode,
    body: &[u8],
) -> Result<OptimizationResponse, DockershrinkError> {
    if status != StatusCode::OK {
        let message = serde_json::from_slice::<OptimizationResponse>(body)
            .ok()
            .and_then(|reply| reply.error)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("service responded with status {}", status));
        return Err(DockershrinkError::Service {
            status: status.as_u16(),
            message,
        });
    }

    let reply: OptimizationResponse =
        serde_json::from_slice(body).map_err(|source| DockershrinkError::ResponseParse {
            context: "API response".to_string(),
            source,
        })?;
    debug!(
        "received {} file(s), {} action(s), {} recommendation(s)",
        reply.modified_project.len(),
        reply.actions_taken.len(),
        reply.recommendations.len()
    );
    Ok(reply)
}
