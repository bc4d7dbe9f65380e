use serde::{Deserialize, Serialize};

pub const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_LINK_BASE: &str = "http://grlc.io/api/";

/// Options handed to `SwaggerUIBundle` when the documentation page boots.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WidgetOptions {
    pub url: String,
    pub dom_id: String,
    pub deep_linking: bool,
    pub layout: String,
    pub supported_submit_methods: Vec<String>,
    pub doc_expansion: String,
    pub apis_sorter: String,
    pub show_request_headers: bool,
    /// Where the bundle scripts and stylesheet are loaded from.
    pub bundle_base_url: String,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        WidgetOptions {
            url: "swagger".to_string(),
            dom_id: "#swagger-ui".to_string(),
            deep_linking: true,
            layout: "GrlcLayout".to_string(),
            supported_submit_methods: ["get", "post", "put", "delete", "patch"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            doc_expansion: "list".to_string(),
            apis_sorter: "alpha".to_string(),
            show_request_headers: true,
            bundle_base_url: "https://unpkg.com/swagger-ui-dist@5".to_string(),
        }
    }
}

/// Placeholder OAuth settings passed to widgets that support `initOAuth`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub realm: String,
    pub app_name: String,
    pub scope_separator: String,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        OAuthConfig {
            client_id: "your-client-id".to_string(),
            client_secret: "your-client-secret-if-required".to_string(),
            realm: "your-realms".to_string(),
            app_name: "your-app-name".to_string(),
            scope_separator: ",".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub api_base_url: String,
    /// Prefix of the rendered repository links.
    pub link_base: String,
    /// File suffixes that mark a repository as holding queries.
    pub extensions: Vec<String>,
    /// Raises the unauthenticated rate limit when set together with `client_secret`.
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        DiscoveryConfig {
            api_base_url: DEFAULT_GITHUB_API_BASE_URL.to_string(),
            link_base: DEFAULT_LINK_BASE.to_string(),
            extensions: vec![".rq".to_string(), ".sparql".to_string()],
            client_id: None,
            client_secret: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub widget: WidgetOptions,
    pub oauth: OAuthConfig,
    pub discovery: DiscoveryConfig,
}

impl Config {
    pub fn from_file(path: &str) -> crate::error::AppResult<Self> {
        let file = std::fs::File::open(path).map_err(crate::error::AppError::Io)?;
        let config = serde_yaml::from_reader(file).map_err(crate::error::AppError::Serialization)?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise falls back to the built-in defaults.
    pub fn load(path: Option<&str>) -> crate::error::AppResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Config::default()),
        }
    }
}
