/*!
    GitHub API client module.

    Discovers repositories holding SPARQL query files. A user's repositories
    are listed, the top-level contents of each one are fetched, and those
    containing at least one file with a query extension are kept and can be
    rendered as links to their generated API.

    Requests are issued one after the other; there is no retry.
*/

use crate::config::DiscoveryConfig;
use crate::error::{AppError, AppResult};
use log::{debug, error, info, warn};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RepoSummary {
    pub name: String,
    pub full_name: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ContentEntry {
    pub name: String,
}

/// Returns true when `file_name` ends with one of `extensions`.
pub fn is_query_file(file_name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Renders one link per repository, pointing at `{link_base}{full_name}`.
pub fn render_repo_links(repos: &[RepoSummary], link_base: &str) -> String {
    repos
        .iter()
        .map(|repo| {
            let repo = html_escape(&repo.full_name);
            format!("<a href='{}{}'>{}</a><br>", html_escape(link_base), repo, repo)
        })
        .collect()
}

///
/// Client for discovering query repositories through the GitHub REST API.
///
pub struct GitHubClient {
    /// Reqwest HTTP client for making API requests.
    client: Client,
    /// Optional personal access token; anonymous requests work with a lower rate limit.
    token: Option<String>,
    settings: DiscoveryConfig,
}

impl GitHubClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `token` - GitHub personal access token, if any.
    /// * `settings` - API base URL, query extensions and OAuth app credentials.
    pub fn new(token: Option<&str>, settings: DiscoveryConfig) -> Self {
        GitHubClient {
            client: Client::new(),
            token: token.filter(|t| !t.trim().is_empty()).map(str::to_string),
            settings,
        }
    }

    fn url(&self, path: &str) -> String {
        let mut url = format!("{}{}", self.settings.api_base_url.trim_end_matches('/'), path);
        if let (Some(id), Some(secret)) = (&self.settings.client_id, &self.settings.client_secret) {
            url.push_str(&format!(
                "?client_id={}&client_secret={}",
                urlencoding::encode(id),
                urlencoding::encode(secret)
            ));
        }
        url
    }

    async fn get(&self, url: &str) -> AppResult<reqwest::Response> {
        debug!("Attempting to build GET request for URL: '{}'", url);
        if url.trim().is_empty() {
            error!("URL passed to get() is empty!");
            return Err(AppError::GitHubApi("Internal error: Attempted GET with empty URL".to_string()));
        }

        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .header(reqwest::header::USER_AGENT, "grlc-docs");
        if let Some(token) = &self.token {
            let auth_header_value = format!("Bearer {}", token);
            if auth_header_value.contains('\n') || auth_header_value.contains('\r') {
                error!("Authorization header value contains invalid characters (newline/CR)");
                return Err(AppError::GitHubApi("Invalid characters in token for Authorization header".to_string()));
            }
            debug!("Token length: {}", token.len());
            request = request.header(reqwest::header::AUTHORIZATION, auth_header_value);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("GET {} returned status: {}", url, status);
        if status.is_success() {
            Ok(response)
        } else {
            let text = response.text().await?;
            error!("GET {} failed with status {}: {}", url, status, text);
            Err(AppError::GitHubApi(text))
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let text = self.get(url).await?.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| AppError::GitHubApi(format!("Failed to parse response from {}: {}", url, e)))
    }

    /// Lists the public repositories of `user`.
    pub async fn list_user_repos(&self, user: &str) -> AppResult<Vec<RepoSummary>> {
        let url = self.url(&format!("/users/{}/repos", user));
        self.get_json(&url).await
    }

    /// Lists the top-level entries of the repository `full_name` (`owner/repo`).
    pub async fn list_contents(&self, full_name: &str) -> AppResult<Vec<ContentEntry>> {
        let url = self.url(&format!("/repos/{}/contents", full_name));
        self.get_json(&url).await
    }

    /// `user`'s repositories that contain query files, in listing order.
    ///
    /// A repository whose contents cannot be listed (GitHub answers 404 for
    /// empty ones) is skipped; only a failed user listing aborts the search.
    pub async fn find_query_repos(&self, user: &str) -> AppResult<Vec<RepoSummary>> {
        info!("Looking for query repositories of '{}'", user);
        let repos = self.list_user_repos(user).await?;
        debug!("'{}' has {} repositories", user, repos.len());

        let mut found = Vec::new();
        for repo in repos {
            let files = match self.list_contents(&repo.full_name).await {
                Ok(files) => files,
                Err(AppError::GitHubApi(msg)) => {
                    warn!("Skipping {}: {}", repo.full_name, msg);
                    continue;
                }
                Err(e) => return Err(e),
            };
            if files.iter().any(|f| is_query_file(&f.name, &self.settings.extensions)) {
                debug!("{} holds query files", repo.full_name);
                found.push(repo);
            }
        }
        info!("Found {} query repositories for '{}'", found.len(), user);
        Ok(found)
    }

    pub fn link_base(&self) -> &str {
        &self.settings.link_base
    }
}
