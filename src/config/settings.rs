//! Per-invocation settings: service location and `optimize` inputs

use std::path::PathBuf;

/// Production origin of the optimization service
pub const DEFAULT_SERVER_URL: &str = "https://dockershrink.com";

/// Environment variable that overrides [`DEFAULT_SERVER_URL`]
pub const SERVER_URL_ENV: &str = "SERVER_URL";

/// Path of the optimize endpoint, relative to the server origin
pub const OPTIMIZE_PATH: &str = "/api/v1/optimize";

/// Environment variable read when `--openai-api-key` is absent or blank
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Where the optimization service lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    base_url: String,
}

impl ServerSettings {
    /// Settings read from `SERVER_URL`, falling back to the production origin
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(SERVER_URL_ENV).ok())
    }

    /// Settings from an optional override; empty overrides are ignored
    ///
    /// # Examples
    ///
    /// ```
    /// use dockershrink::config::ServerSettings;
    ///
    /// let settings = ServerSettings::from_override(Some("http://localhost:9999/".into()));
    /// assert_eq!(settings.optimize_url(), "http://localhost:9999/api/v1/optimize");
    /// ```
    pub fn from_override(server_url: Option<String>) -> Self {
        let base_url = server_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        Self { base_url }
    }

    /// Service origin without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the optimize endpoint
    pub fn optimize_url(&self) -> String {
        format!("{}{}", self.base_url, OPTIMIZE_PATH)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self::from_override(None)
    }
}

/// Inputs of one `optimize` run, built from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizeOptions {
    /// Explicit Dockerfile path (default: ./Dockerfile)
    pub dockerfile: Option<PathBuf>,
    /// Explicit .dockerignore path (default: ./.dockerignore)
    pub dockerignore: Option<PathBuf>,
    /// Explicit package.json path (default: ./package.json, then ./src/package.json)
    pub package_json: Option<PathBuf>,
    /// OpenAI API key forwarded to the service
    pub openai_api_key: Option<String>,
}

impl OptimizeOptions {
    /// Pick the OpenAI key: the flag value, else the environment value
    ///
    /// A blank flag value counts as absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use dockershrink::config::OptimizeOptions;
    ///
    /// let key = OptimizeOptions::resolve_openai_api_key(Some(String::new()), Some("sk-env".into()));
    /// assert_eq!(key.as_deref(), Some("sk-env"));
    /// ```
    pub fn resolve_openai_api_key(flag: Option<String>, env: Option<String>) -> Option<String> {
        flag.filter(|key| !key.trim().is_empty()).or(env)
    }

    /// OpenAI key to forward, if one was given and is not blank
    pub fn openai_api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_settings_default_to_production() {
        let settings = ServerSettings::from_override(None);
        assert_eq!(settings.base_url(), DEFAULT_SERVER_URL);
        assert_eq!(
            settings.optimize_url(),
            "https://dockershrink.com/api/v1/optimize"
        );
    }

    #[test]
    fn test_server_settings_ignore_empty_override() {
        let settings = ServerSettings::from_override(Some("  ".to_string()));
        assert_eq!(settings, ServerSettings::default());
    }

    #[test]
    fn test_server_settings_accept_override() {
        let settings = ServerSettings::from_override(Some("http://localhost:9999".to_string()));
        assert_eq!(
            settings.optimize_url(),
            "http://localhost:9999/api/v1/optimize"
        );
    }

    #[test]
    fn test_blank_flag_falls_back_to_env_key() {
        assert_eq!(
            OptimizeOptions::resolve_openai_api_key(Some("  ".to_string()), Some("sk-env".to_string())),
            Some("sk-env".to_string())
        );
        assert_eq!(
            OptimizeOptions::resolve_openai_api_key(None, Some("sk-env".to_string())),
            Some("sk-env".to_string())
        );
        assert_eq!(
            OptimizeOptions::resolve_openai_api_key(Some("sk-flag".to_string()), Some("sk-env".to_string())),
            Some("sk-flag".to_string())
        );
        assert_eq!(OptimizeOptions::resolve_openai_api_key(None, None), None);
    }

    #[test]
    fn test_blank_openai_key_is_absent() {
        let options = OptimizeOptions {
            openai_api_key: Some(String::new()),
            ..OptimizeOptions::default()
        };
        assert_eq!(options.openai_api_key(), None);

        let options = OptimizeOptions {
            openai_api_key: Some("sk-123".to_string()),
            ..OptimizeOptions::default()
        };
        assert_eq!(options.openai_api_key(), Some("sk-123"));
    }
}
