//! Draft construction for outbound audit requests.

use risk_engine_client::{AuditRequest, StrategyType, Symbol, Timeframe};
use tracing::warn;
use uuid::Uuid;

use crate::guardrail;

/// Outcome of a single field edit.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Accepted,
    /// Edit breached the risk guardrail; the draft kept its previous value.
    Rejected { advisory: String },
    /// Selection of a reserved (not yet actionable) option. Silent no-op.
    ReservedOption,
}

/// Holds the draft request and applies per-field updates. Enum-typed fields
/// make out-of-set values unrepresentable; the risk field is routed through
/// the guardrail and an advisory sticks until the next accepted edit.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    symbol: Symbol,
    timeframe: Timeframe,
    strategy_type: StrategyType,
    account_balance: f64,
    risk_percentage: f64,
    advisory: Option<String>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self {
            symbol: Symbol::default(),
            timeframe: Timeframe::default(),
            strategy_type: StrategyType::default(),
            account_balance: 10_000.0,
            risk_percentage: 1.0,
            advisory: None,
        }
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_symbol(&mut self, symbol: Symbol) -> FieldUpdate {
        self.symbol = symbol;
        FieldUpdate::Accepted
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> FieldUpdate {
        self.timeframe = timeframe;
        FieldUpdate::Accepted
    }

    pub fn set_strategy(&mut self, strategy: StrategyType) -> FieldUpdate {
        if strategy.is_reserved() {
            warn!("Strategy {} is reserved and cannot be selected", strategy.as_str());
            return FieldUpdate::ReservedOption;
        }
        self.strategy_type = strategy;
        FieldUpdate::Accepted
    }

    /// No bounds at this layer; deeper financial validation belongs to the
    /// remote engine.
    pub fn set_account_balance(&mut self, balance: f64) -> FieldUpdate {
        self.account_balance = balance;
        FieldUpdate::Accepted
    }

    pub fn set_risk_percentage(&mut self, risk_percentage: f64) -> FieldUpdate {
        match guardrail::validate(risk_percentage) {
            Ok(()) => {
                self.risk_percentage = risk_percentage;
                self.advisory = None;
                FieldUpdate::Accepted
            }
            Err(rejected) => {
                warn!(
                    "Risk edit rejected: {} > {}%",
                    rejected.attempted,
                    guardrail::MAX_RISK_PERCENT
                );
                self.advisory = Some(rejected.reason.clone());
                FieldUpdate::Rejected {
                    advisory: rejected.reason,
                }
            }
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn strategy(&self) -> StrategyType {
        self.strategy_type
    }

    pub fn account_balance(&self) -> f64 {
        self.account_balance
    }

    pub fn risk_percentage(&self) -> f64 {
        self.risk_percentage
    }

    /// Active advisory from the last rejected risk edit, if any.
    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    /// Whether the draft is currently eligible for submission.
    pub fn submittable(&self) -> bool {
        guardrail::validate(self.risk_percentage).is_ok()
    }

    /// Snapshot the draft as a wire request with a fresh id.
    pub fn build(&self) -> AuditRequest {
        AuditRequest {
            request_id: Uuid::new_v4(),
            symbol: self.symbol,
            timeframe: self.timeframe,
            strategy_type: self.strategy_type,
            account_balance: self.account_balance,
            risk_percentage: self.risk_percentage,
        }
    }
}
