use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins. A trailing `*` matches any suffix, which is how
    /// browser extension origins (`chrome-extension://<id>`) are admitted.
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            cors_allowed_origins: default_cors_allowed_origins(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec![
        "chrome-extension://*".to_string(),
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ]
}
