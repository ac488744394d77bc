//! HashiCorp Vault KV v2 backend.
//!
//! Enable with `--features vault` (on by default).
//!
//! ## Usage
//!
//! ```bash
//! export SLUICE_SM_PROVIDER=vault
//! export SLUICE_SM_KEY=app1
//! export SLUICE_SM_VAULT_ADDR=http://local-vault-server:8200
//! export SLUICE_SM_VAULT_USER=myuser
//! export SLUICE_SM_VAULT_PASS=mypassword
//! ```
//!
//! With a token instead of userpass, set `SLUICE_SM_VAULT_TOKEN`. The secret
//! is read from `<mount>/data/<key>`; the mount defaults to `secret`.

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::{SecretFetcher, VaultAuth, VaultSettings};
use crate::core::bundle::SecretBundle;
use crate::error::{ProviderError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct AuthResponse {
    auth: AuthData,
}

#[derive(Deserialize)]
struct AuthData {
    client_token: String,
}

#[derive(Deserialize)]
struct KvResponse {
    data: KvData,
}

#[derive(Deserialize)]
struct KvData {
    data: Value,
}

/// Vault KV v2 fetcher.
pub struct VaultFetcher {
    settings: VaultSettings,
    http: Client,
}

impl VaultFetcher {
    /// Create a fetcher with a blocking HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Request` if the HTTP client cannot be built.
    pub fn new(settings: VaultSettings) -> std::result::Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::Request(e.to_string()))?;
        Ok(Self { settings, http })
    }

    fn secret_path(&self) -> String {
        format!("{}/data/{}", self.settings.mount, self.settings.key)
    }

    fn token(&self) -> std::result::Result<Zeroizing<String>, ProviderError> {
        match &self.settings.auth {
            VaultAuth::Token(token) => Ok(token.clone()),
            VaultAuth::UserPass { user, password } => self.login(user, password),
        }
    }

    /// Exchange userpass credentials for a client token.
    fn login(
        &self,
        user: &str,
        password: &str,
    ) -> std::result::Result<Zeroizing<String>, ProviderError> {
        let url = format!("{}/v1/auth/userpass/login/{}", self.settings.addr, user);
        debug!(user, "logging in to vault");

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "password": password }))
            .send()
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().unwrap_or_default();
            return Err(ProviderError::Auth(format!("status {status}: {}", text.trim())));
        }

        let auth: AuthResponse = response
            .json()
            .map_err(|e| ProviderError::Auth(format!("unexpected login response: {e}")))?;
        Ok(Zeroizing::new(auth.auth.client_token))
    }

    fn read(&self, token: &str) -> std::result::Result<SecretBundle, ProviderError> {
        let path = self.secret_path();
        let url = format!("{}/v1/{}", self.settings.addr, path);
        trace!(path = %path, "reading vault secret");

        let response = self
            .http
            .get(&url)
            .header("X-Vault-Token", token)
            .send()
            .map_err(|e| ProviderError::Request(e.to_string()))?;
        let response = check_status(response, &path)?;

        let body: KvResponse = response
            .json()
            .map_err(|e| ProviderError::Request(format!("unexpected KV response: {e}")))?;
        SecretBundle::from_json(body.data.data)
    }
}

fn check_status(response: Response, path: &str) -> std::result::Result<Response, ProviderError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        status if status == StatusCode::NOT_FOUND => {
            Err(ProviderError::NotFound(path.to_string()))
        }
        status if status == StatusCode::FORBIDDEN => {
            Err(ProviderError::Auth(format!("permission denied for {path}")))
        }
        status => {
            let text = response.text().unwrap_or_default();
            Err(ProviderError::Request(format!("status {status}: {}", text.trim())))
        }
    }
}

impl SecretFetcher for VaultFetcher {
    fn name(&self) -> &'static str {
        "vault"
    }

    fn fetch(&self) -> Result<SecretBundle> {
        let token = self.token()?;
        let bundle = self.read(&token)?;
        debug!(fields = bundle.len(), "vault secret read");
        Ok(bundle)
    }
}
