/**
 * OAuth Client
 *
 * Authorization-code flow against the configured identity provider.
 *
 * # Flow
 *
 * 1. Redirect the browser to [`authorization_url`] with a signed `state`
 * 2. Exchange the returned `code` for an access token ([`exchange_code`])
 * 3. Fetch the provider's userinfo with that token ([`fetch_profile`])
 */

use reqwest::Url;
use serde::Deserialize;
use crate::backend::error::BackendError;
use crate::shared::OAuthConfig;

/// Name recorded in `users.provider`
pub const PROVIDER: &str = "google";

const SCOPES: &str = "email profile";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Identity reported by the provider's userinfo endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthProfile {
    /// Provider subject ID
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl OAuthProfile {
    /// Name to store as the username: the display name, or the email's
    /// local part when the provider sends none
    pub fn username(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}

/// Build the provider URL the login endpoint redirects to
pub fn authorization_url(config: &OAuthConfig, state: &str) -> Result<Url, BackendError> {
    Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("redirect_uri", config.redirect_url.as_str()),
            ("response_type", "code"),
            ("scope", SCOPES),
            ("access_type", "offline"),
            ("state", state),
        ],
    )
    .map_err(|e| BackendError::state(format!("Invalid OAuth authorization URL: {}", e)))
}

/// Exchange an authorization code for an access token
///
/// # Errors
/// `UpstreamError` if the provider is unreachable or rejects the code
pub async fn exchange_code(
    client: &reqwest::Client,
    config: &OAuthConfig,
    code: &str,
) -> Result<String, BackendError> {
    let response = client
        .post(&config.token_url)
        .form(&[
            ("code", code),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("redirect_uri", config.redirect_url.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await?
        .error_for_status()?;

    let token: TokenResponse = response.json().await?;
    Ok(token.access_token)
}

/// Fetch the signed-in user's profile
pub async fn fetch_profile(
    client: &reqwest::Client,
    config: &OAuthConfig,
    access_token: &str,
) -> Result<OAuthProfile, BackendError> {
    let profile = client
        .get(&config.userinfo_url)
        .bearer_auth(access_token)
        .send()
        .await?
        .error_for_status()?
        .json::<OAuthProfile>()
        .await?;

    if profile.id.is_empty() || profile.email.is_empty() {
        return Err(BackendError::UpstreamError(
            "Userinfo response lacks id or email".to_string(),
        ));
    }
    Ok(profile)
}
