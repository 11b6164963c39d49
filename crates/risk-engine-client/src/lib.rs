//! Wire types and HTTP client for the remote risk-evaluation engine.

pub mod client;
pub mod types;

pub use client::EngineClient;
pub use types::{
    AiAnalysis, AuditRequest, ClassificationColor, EngineError, RegimeCard, RiskCard, StrategyType,
    Symbol, Timeframe, TrafficLight, UiComponents, Verdict,
};
