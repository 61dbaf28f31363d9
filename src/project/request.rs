//! Outbound payload for the optimize endpoint

use serde::Serialize;
use serde_json::Value;

use super::locator::ProjectInputs;
use crate::error::DockershrinkError;

/// Request body sent to `POST /api/v1/optimize`
///
/// Inputs that were not found are left out of the body entirely so the
/// service can tell "absent" apart from "empty".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OptimizationRequest {
    /// Dockerfile content
    #[serde(rename = "Dockerfile", skip_serializing_if = "Option::is_none")]
    pub dockerfile: Option<String>,

    /// .dockerignore content
    #[serde(rename = ".dockerignore", skip_serializing_if = "Option::is_none")]
    pub dockerignore: Option<String>,

    /// package.json document
    #[serde(rename = "package.json", skip_serializing_if = "Option::is_none")]
    pub package_json: Option<Value>,

    /// OpenAI API key the service may use on the caller's behalf
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
}

impl OptimizationRequest {
    /// Assemble the payload from located inputs
    ///
    /// # Examples
    ///
    /// ```
    /// use dockershrink::project::{InputKind, OptimizationRequest, ProjectFile, ProjectInputs};
    /// use std::path::PathBuf;
    ///
    /// let inputs = ProjectInputs {
    ///     dockerfile: ProjectFile {
    ///         kind: InputKind::Dockerfile,
    ///         path: PathBuf::from("Dockerfile"),
    ///         content: Some("FROM node:20".to_string()),
    ///     },
    ///     dockerignore: ProjectFile {
    ///         kind: InputKind::Dockerignore,
    ///         path: PathBuf::from(".dockerignore"),
    ///         content: None,
    ///     },
    ///     package_json: ProjectFile {
    ///         kind: InputKind::PackageJson,
    ///         path: PathBuf::from("package.json"),
    ///         content: None,
    ///     },
    /// };
    ///
    /// let request = OptimizationRequest::build(inputs, None);
    /// let body = String::from_utf8(request.to_json()?).unwrap();
    /// assert_eq!(body, r#"{"Dockerfile":"FROM node:20"}"#);
    /// # Ok::<(), dockershrink::error::DockershrinkError>(())
    /// ```
    pub fn build(inputs: ProjectInputs, openai_api_key: Option<&str>) -> Self {
        Self {
            dockerfile: inputs.dockerfile.content,
            dockerignore: inputs.dockerignore.content,
            package_json: inputs.package_json.content,
            openai_api_key: openai_api_key
                .filter(|key| !key.is_empty())
                .map(str::to_string),
        }
    }

    /// Serialize to the JSON wire format
    pub fn to_json(&self) -> Result<Vec<u8>, DockershrinkError> {
        serde_json::to_vec(self).map_err(DockershrinkError::RequestBuild)
    }
}
