use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub engine: EngineConfig,
    #[serde(default)]
    pub audit: AuditDefaults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

/// Prefill for the draft request. Field names use the engine's wire
/// spellings and are parsed into the closed enums at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditDefaults {
    #[serde(default = "default_symbol")]
    pub symbol: String,
    #[serde(default = "default_timeframe")]
    pub timeframe: String,
    #[serde(default = "default_strategy")]
    pub strategy: String,
    #[serde(default = "default_account_balance")]
    pub account_balance: f64,
    #[serde(default = "default_risk_percentage")]
    pub risk_percentage: f64,
}

impl Default for AuditDefaults {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            timeframe: default_timeframe(),
            strategy: default_strategy(),
            account_balance: default_account_balance(),
            risk_percentage: default_risk_percentage(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_max_retries() -> u32 {
    2
}

fn default_symbol() -> String {
    "BTC/USDT".into()
}

fn default_timeframe() -> String {
    "4h".into()
}

fn default_strategy() -> String {
    "TREND_FOLLOWING".into()
}

fn default_account_balance() -> f64 {
    10_000.0
}

fn default_risk_percentage() -> f64 {
    1.0
}

impl AppConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
