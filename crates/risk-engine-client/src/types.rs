use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outbound audit payload. The guardrail in `audit-core` guarantees
/// `risk_percentage <= 2.0` before a request ever reaches the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequest {
    pub request_id: Uuid,
    pub symbol: Symbol,
    pub timeframe: Timeframe,
    pub strategy_type: StrategyType,
    pub account_balance: f64,
    pub risk_percentage: f64,
}

/// Instrument pairs the engine knows how to audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Symbol {
    #[default]
    #[serde(rename = "BTC/USDT")]
    BtcUsdt,
    #[serde(rename = "ETH/USDT")]
    EthUsdt,
    #[serde(rename = "SOL/USDT")]
    SolUsdt,
}

impl Symbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::BtcUsdt => "BTC/USDT",
            Symbol::EthUsdt => "ETH/USDT",
            Symbol::SolUsdt => "SOL/USDT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1h")]
    H1,
    #[default]
    #[serde(rename = "4h")]
    H4,
    #[serde(rename = "1d")]
    D1,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::H1 => "1h",
            Timeframe::H4 => "4h",
            Timeframe::D1 => "1d",
        }
    }
}

/// Strategy profiles. `Scalping` is reserved: it ships in the enumeration
/// but the request builder refuses to select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyType {
    #[default]
    TrendFollowing,
    Breakout,
    MeanReversion,
    Scalping,
}

impl StrategyType {
    pub fn is_reserved(&self) -> bool {
        matches!(self, StrategyType::Scalping)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyType::TrendFollowing => "TREND_FOLLOWING",
            StrategyType::Breakout => "BREAKOUT",
            StrategyType::MeanReversion => "MEAN_REVERSION",
            StrategyType::Scalping => "SCALPING",
        }
    }
}

/// Inbound decision report. Everything except `traffic_light.color` is
/// pre-formatted display data and is carried verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub report_id: String,
    pub timestamp: DateTime<Utc>,
    pub asset: String,
    pub status: String,
    pub ui_components: UiComponents,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiComponents {
    pub traffic_light: TrafficLight,
    pub regime_card: RegimeCard,
    pub risk_card: RiskCard,
    pub ai_analysis: AiAnalysis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficLight {
    #[serde(default)]
    pub color: ClassificationColor,
    pub label: String,
}

/// Closed color set driving the presentation mapping. Anything the engine
/// sends outside the known set lands on `Unknown` instead of failing
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassificationColor {
    Green,
    Yellow,
    Red,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegimeCard {
    pub title: String,
    pub value: String,
    pub subtext: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskCard {
    pub title: String,
    pub metric_1: String,
    pub metric_2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub text: String,
    #[serde(default)]
    pub blockers: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("engine request failed: {0}")]
    Transport(String),
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("risk engine timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict_json(color: &str) -> String {
        format!(
            r#"{{
                "report_id": "audit_1700000000",
                "timestamp": "2024-01-15T12:00:00Z",
                "asset": "BTC/USDT",
                "status": "COMPLETE",
                "ui_components": {{
                    "traffic_light": {{ "color": "{color}", "label": "HIGH Alignment" }},
                    "regime_card": {{ "title": "Market Context", "value": "BULL_TREND / NORMAL", "subtext": "Steady uptrend." }},
                    "risk_card": {{ "title": "Safety Guardrails", "metric_1": "Stop Width: $420.50", "metric_2": "Max Size: 0.2378 Units" }},
                    "ai_analysis": {{ "text": "Setup aligned.", "blockers": [] }}
                }}
            }}"#
        )
    }

    #[test]
    fn known_colors_deserialize() {
        for (raw, expected) in [
            ("GREEN", ClassificationColor::Green),
            ("YELLOW", ClassificationColor::Yellow),
            ("RED", ClassificationColor::Red),
        ] {
            let verdict: Verdict = serde_json::from_str(&verdict_json(raw)).unwrap();
            assert_eq!(verdict.ui_components.traffic_light.color, expected);
        }
    }

    #[test]
    fn unrecognized_color_falls_back_to_unknown() {
        let verdict: Verdict = serde_json::from_str(&verdict_json("PURPLE")).unwrap();
        assert_eq!(
            verdict.ui_components.traffic_light.color,
            ClassificationColor::Unknown
        );
    }

    #[test]
    fn empty_color_falls_back_to_unknown() {
        let verdict: Verdict = serde_json::from_str(&verdict_json("")).unwrap();
        assert_eq!(
            verdict.ui_components.traffic_light.color,
            ClassificationColor::Unknown
        );
    }

    #[test]
    fn missing_color_falls_back_to_unknown() {
        let json = r#"{
            "report_id": "audit_1700000000",
            "timestamp": "2024-01-15T12:00:00Z",
            "asset": "ETH/USDT",
            "status": "COMPLETE",
            "ui_components": {
                "traffic_light": { "label": "Alignment" },
                "regime_card": { "title": "t", "value": "v", "subtext": "s" },
                "risk_card": { "title": "t", "metric_1": "m1", "metric_2": "m2" },
                "ai_analysis": { "text": "n/a" }
            }
        }"#;
        let verdict: Verdict = serde_json::from_str(json).unwrap();
        assert_eq!(
            verdict.ui_components.traffic_light.color,
            ClassificationColor::Unknown
        );
        assert!(verdict.ui_components.ai_analysis.blockers.is_empty());
    }

    #[test]
    fn request_serializes_wire_names() {
        let request = AuditRequest {
            request_id: Uuid::new_v4(),
            symbol: Symbol::EthUsdt,
            timeframe: Timeframe::H4,
            strategy_type: StrategyType::MeanReversion,
            account_balance: 10_000.0,
            risk_percentage: 1.0,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["symbol"], "ETH/USDT");
        assert_eq!(value["timeframe"], "4h");
        assert_eq!(value["strategy_type"], "MEAN_REVERSION");
    }
}
