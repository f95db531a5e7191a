//! Minimal GitHub gist client. Only reading a gist and overwriting one of its files is supported.

pub mod entities;

use anyhow::{Context, Result};
use async_trait::async_trait;
use entities::{Gist, GistUpdate};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT},
    RequestBuilder,
};
use tracing::{debug, instrument};

pub const DEFAULT_GITHUB_URL: &str = "https://api.github.com";

/// Storage for the rendered report.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GistStore: Send + Sync {
    async fn get_gist(&self, gist_id: &str) -> Result<Gist>;

    /// Replaces `original_name` with a file called `filename` holding `content`.
    async fn update_file(
        &self,
        gist_id: &str,
        original_name: &str,
        filename: &str,
        content: &str,
    ) -> Result<()>;
}

pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn with_headers(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("token {}", self.token))
                .context("GitHub token contains invalid characters")?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            )),
        );
        Ok(request.headers(headers))
    }
}

#[async_trait]
impl GistStore for GitHubClient {
    #[instrument(skip(self))]
    async fn get_gist(&self, gist_id: &str) -> Result<Gist> {
        let url = format!("{}/gists/{gist_id}", self.base_url);
        let gist: Gist = self
            .with_headers(self.http.get(&url))?
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?
            .error_for_status()?
            .json()
            .await
            .context("Failed to parse gist")?;
        debug!("Gist {} has {} files", gist.id, gist.files.len());
        Ok(gist)
    }

    #[instrument(skip(self, content))]
    async fn update_file(
        &self,
        gist_id: &str,
        original_name: &str,
        filename: &str,
        content: &str,
    ) -> Result<()> {
        let url = format!("{}/gists/{gist_id}", self.base_url);
        self.with_headers(self.http.patch(&url))?
            .json(&GistUpdate::single(original_name, filename, content))
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::{GistStore, GitHubClient};

    fn client(server: &MockServer) -> GitHubClient {
        GitHubClient::new(reqwest::Client::new(), server.uri(), "gh-token")
    }

    #[tokio::test]
    async fn test_get_gist() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gists/abc123"))
            .and(header("authorization", "token gh-token"))
            .and(header("accept", "application/vnd.github+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "abc123",
                "description": "",
                "files": {
                    "zeta.md": {"filename": "zeta.md", "content": "z"},
                    "alpha.md": {"filename": "alpha.md", "content": "a"}
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gist = client(&server).get_gist("abc123").await?;
        assert_eq!(gist.id, "abc123");
        assert_eq!(gist.files.len(), 2);
        assert_eq!(gist.first_file_name(), Some("alpha.md"));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_file() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/gists/abc123"))
            .and(header("authorization", "token gh-token"))
            .and(body_json(json!({
                "files": {
                    "old.md": {"filename": "new.md", "content": "line 1\nline 2"}
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "abc123" })))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .update_file("abc123", "old.md", "new.md", "line 1\nline 2")
            .await
    }

    #[tokio::test]
    async fn test_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        assert!(client(&server).get_gist("missing").await.is_err());
    }
}
