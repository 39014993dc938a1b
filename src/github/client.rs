use crate::error::{FolioError, Result};
use crate::github::types::Repository;
use crate::profile::PER_PAGE;
use octocrab::Octocrab;
use serde::Deserialize;

/// Body GitHub sends alongside a non-success status.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
    account: String,
}

impl GitHubClient {
    /// Unauthenticated client; the public repo listing needs no token.
    pub fn new(account: &str) -> Result<Self> {
        let octo = Octocrab::builder()
            .build()
            .map_err(|e| network_error(&e))?;

        Ok(Self {
            octo,
            account: account.to_string(),
        })
    }

    #[cfg(test)]
    fn with_base_uri(account: &str, base_uri: &str) -> Result<Self> {
        let octo = Octocrab::builder()
            .base_uri(base_uri)
            .and_then(|b| b.build())
            .map_err(|e| network_error(&e))?;

        Ok(Self {
            octo,
            account: account.to_string(),
        })
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// One read of the account's repositories, most recently updated first.
    /// No retry and no timeout. Any non-success status fails with that
    /// status, whatever the body holds.
    pub async fn fetch_all(&self) -> Result<Vec<Repository>> {
        let uri = format!(
            "/users/{}/repos?per_page={PER_PAGE}&sort=updated",
            self.account
        );

        tracing::debug!(account = %self.account, "fetching repositories");
        let response = self.octo._get(uri).await.map_err(|e| network_error(&e))?;
        let status = response.status();
        let body = self
            .octo
            .body_to_string(response)
            .await
            .map_err(|e| network_error(&e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected status")
                        .to_string()
                });
            return Err(FolioError::Network {
                status: Some(status.as_u16()),
                message,
            });
        }

        let repos: Vec<Repository> =
            serde_json::from_str(&body).map_err(|e| FolioError::Network {
                status: None,
                message: format!("malformed repository list: {e}"),
            })?;
        tracing::info!(count = repos.len(), "repositories fetched");
        Ok(repos)
    }
}

/// Transport-level failure. Only the first line of octocrab's message is
/// kept; the rest is a captured backtrace.
fn network_error(e: &octocrab::Error) -> FolioError {
    let text = e.to_string();
    FolioError::Network {
        status: None,
        message: text.lines().next().unwrap_or_default().to_string(),
    }
}
