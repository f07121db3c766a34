use serde::Deserialize;

/// Model name per feature. Each can be overridden from the environment;
/// defaults match what the product ships with.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub quick_tip: String,
    pub feedback: String,
    pub search: String,
    pub diet: String,
    pub chat: String,
    pub live: String,
}

impl ModelConfig {
    pub fn defaults() -> Self {
        Self {
            quick_tip: "gemini-flash-lite-latest".into(),
            feedback: "gemini-3-flash-preview".into(),
            search: "gemini-3-flash-preview".into(),
            diet: "gemini-3-pro-preview".into(),
            chat: "gemini-3-pro-preview".into(),
            live: "gemini-2.5-flash-native-audio-preview-09-2025".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api_key: String,
    pub host: String,
    pub port: u16,
    pub models: ModelConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY is not set"))?;

        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);

        let defaults = ModelConfig::defaults();
        let models = ModelConfig {
            quick_tip: env_or("GEMINI_MODEL_QUICK_TIP", &defaults.quick_tip),
            feedback: env_or("GEMINI_MODEL_FEEDBACK", &defaults.feedback),
            search: env_or("GEMINI_MODEL_SEARCH", &defaults.search),
            diet: env_or("GEMINI_MODEL_DIET", &defaults.diet),
            chat: env_or("GEMINI_MODEL_CHAT", &defaults.chat),
            live: env_or("GEMINI_MODEL_LIVE", &defaults.live),
        };

        Ok(Self {
            api_key,
            host,
            port,
            models,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
