use std::env;

/// Process configuration, read once at startup from the environment
/// (`.env` is loaded first via dotenvy in `main`).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Base URL of the domain API that owns meetings and users.
    pub api_base_url: String,
    /// Base URL of the external identity provider.
    pub auth_base_url: String,
    /// Externally visible base URL of this app, for auth redirects.
    pub public_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            api_base_url: env::var("API_BASE_URL")?,
            auth_base_url: env::var("AUTH_BASE_URL")?,
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
        })
    }
}

/// Visual configuration threaded explicitly through `PageContext` into the
/// templates. Values mirror the design tokens the pages were built around.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: &'static str,
    pub primary_dark: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    /// Spacing scale in pixels; indexed by the templates via [`Theme::space`].
    pub space: &'static [u16],
}

impl Theme {
    pub fn space(&self, step: usize) -> u16 {
        self.space
            .get(step)
            .or_else(|| self.space.last())
            .copied()
            .unwrap_or(0)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#7c3aed",
            primary_dark: "#5b21b6",
            background: "#f4f4f5",
            surface: "#ffffff",
            text: "#18181b",
            muted: "#71717a",
            space: &[0, 4, 8, 16, 32, 64],
        }
    }
}
