//! Hard safety ceiling on per-trade risk.

/// Maximum risk percentage accepted for submission. Fixed for this release,
/// not user-configurable.
pub const MAX_RISK_PERCENT: f64 = 2.0;

/// Rejection produced when an edit breaches the ceiling.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskRejected {
    pub attempted: f64,
    pub reason: String,
}

/// Validate a risk percentage against the ceiling.
///
/// Accepts anything `<= 2.0`, including zero and negative values — no lower
/// bound is defined for this layer.
pub fn validate(risk_percentage: f64) -> Result<(), RiskRejected> {
    if risk_percentage > MAX_RISK_PERCENT {
        return Err(RiskRejected {
            attempted: risk_percentage,
            reason: format!(
                "Risk above {MAX_RISK_PERCENT}% is disabled for safety; keeping previous value"
            ),
        });
    }
    Ok(())
}
