//! Lifecycle of one audit attempt.
//!
//! The session is the single owner of the draft and of the in-flight call's
//! identity. Every transition into `Submitting` mints a new attempt token;
//! settle/fail events carrying any other token are stale and get discarded,
//! so a result that arrives after a reset or a resubmission can never
//! overwrite a newer state.

use risk_engine_client::{AuditRequest, Verdict};
use tracing::{info, warn};

use crate::request::RequestBuilder;

/// Identity of one submission attempt. Monotonic per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Submitting,
    Settled,
    Failed,
}

#[derive(Debug)]
enum SessionState {
    Idle,
    Submitting { token: AttemptToken },
    Settled { verdict: Verdict },
    Failed { message: String },
}

#[derive(Debug)]
pub struct AuditSession {
    builder: RequestBuilder,
    state: SessionState,
    attempts: u64,
}

impl Default for AuditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditSession {
    pub fn new() -> Self {
        Self {
            builder: RequestBuilder::new(),
            state: SessionState::Idle,
            attempts: 0,
        }
    }

    pub fn with_builder(builder: RequestBuilder) -> Self {
        Self {
            builder,
            state: SessionState::Idle,
            attempts: 0,
        }
    }

    pub fn builder(&self) -> &RequestBuilder {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut RequestBuilder {
        &mut self.builder
    }

    pub fn status(&self) -> SessionStatus {
        match self.state {
            SessionState::Idle => SessionStatus::Idle,
            SessionState::Submitting { .. } => SessionStatus::Submitting,
            SessionState::Settled { .. } => SessionStatus::Settled,
            SessionState::Failed { .. } => SessionStatus::Failed,
        }
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match &self.state {
            SessionState::Settled { verdict } => Some(verdict),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Start a submission from `Idle` or `Failed`.
    ///
    /// Returns the minted attempt token and the request snapshot to send, or
    /// `None` when the submit is suppressed: a call is already outstanding,
    /// the draft's risk percentage fails the guardrail, or the session is
    /// already settled.
    pub fn submit(&mut self) -> Option<(AttemptToken, AuditRequest)> {
        match self.state {
            SessionState::Idle | SessionState::Failed { .. } => {}
            SessionState::Submitting { .. } => {
                warn!("Submit ignored: a call is already outstanding");
                return None;
            }
            SessionState::Settled { .. } => {
                warn!("Submit ignored: session already settled, reset first");
                return None;
            }
        }

        if !self.builder.submittable() {
            warn!("Submit ignored: risk advisory active on the draft");
            return None;
        }

        self.attempts += 1;
        let token = AttemptToken(self.attempts);
        let request = self.builder.build();
        info!(
            "Submitting audit {} for {} ({})",
            request.request_id,
            request.symbol.as_str(),
            request.strategy_type.as_str()
        );
        self.state = SessionState::Submitting { token };
        Some((token, request))
    }

    /// Apply a successful verdict. Discarded unless `token` identifies the
    /// currently outstanding attempt.
    pub fn settle(&mut self, token: AttemptToken, verdict: Verdict) -> bool {
        if !self.is_current(token) {
            warn!("Discarding stale verdict for superseded attempt");
            return false;
        }
        self.state = SessionState::Settled { verdict };
        true
    }

    /// Apply a remote failure. Same staleness rule as `settle`.
    pub fn fail(&mut self, token: AttemptToken, message: String) -> bool {
        if !self.is_current(token) {
            warn!("Discarding stale failure for superseded attempt");
            return false;
        }
        self.state = SessionState::Failed { message };
        true
    }

    /// Back to `Idle`, discarding any verdict or failure. The draft stays
    /// prefilled with its last accepted values. Resetting while a call is
    /// outstanding abandons interest in its result.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }

    fn is_current(&self, token: AttemptToken) -> bool {
        matches!(self.state, SessionState::Submitting { token: current } if current == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_engine_client::{
        AiAnalysis, ClassificationColor, RegimeCard, RiskCard, TrafficLight, UiComponents,
    };

    fn verdict(color: ClassificationColor) -> Verdict {
        Verdict {
            report_id: "audit_1700000000".into(),
            timestamp: chrono::Utc::now(),
            asset: "BTC/USDT".into(),
            status: "COMPLETE".into(),
            ui_components: UiComponents {
                traffic_light: TrafficLight {
                    color,
                    label: "HIGH Alignment".into(),
                },
                regime_card: RegimeCard {
                    title: "Market Context".into(),
                    value: "BULL_TREND / NORMAL".into(),
                    subtext: "Steady uptrend.".into(),
                },
                risk_card: RiskCard {
                    title: "Safety Guardrails".into(),
                    metric_1: "Stop Width: $420.50".into(),
                    metric_2: "Max Size: 0.2378 Units".into(),
                },
                ai_analysis: AiAnalysis {
                    text: "Setup aligned.".into(),
                    blockers: vec![],
                },
            },
        }
    }

    #[test]
    fn idle_submit_transitions_to_submitting() {
        let mut session = AuditSession::new();
        assert_eq!(session.status(), SessionStatus::Idle);

        let (_token, request) = session.submit().expect("submit from idle");
        assert_eq!(session.status(), SessionStatus::Submitting);
        assert_eq!(request.risk_percentage, 1.0);
    }

    #[test]
    fn duplicate_submit_is_suppressed() {
        let mut session = AuditSession::new();
        let (token, first) = session.submit().unwrap();

        assert!(session.submit().is_none());
        assert_eq!(session.status(), SessionStatus::Submitting);

        // The original attempt is still the live one.
        assert!(session.settle(token, verdict(ClassificationColor::Green)));
        assert_eq!(session.verdict().unwrap().asset, "BTC/USDT");
        let _ = first;
    }

    #[test]
    fn submit_blocked_while_advisory_active() {
        let mut session = AuditSession::new();
        session.builder_mut().set_risk_percentage(2.5);
        assert!(session.builder().advisory().is_some());

        assert!(session.submit().is_none());
        assert_eq!(session.status(), SessionStatus::Idle);

        session.builder_mut().set_risk_percentage(2.0);
        assert!(session.submit().is_some());
    }

    #[test]
    fn failure_then_resubmit() {
        let mut session = AuditSession::new();
        let (token, _) = session.submit().unwrap();

        assert!(session.fail(token, "risk engine unreachable".into()));
        assert_eq!(session.status(), SessionStatus::Failed);
        assert_eq!(session.failure(), Some("risk engine unreachable"));
        assert!(session.verdict().is_none());

        let (token2, _) = session.submit().expect("resubmit from failed");
        assert!(session.settle(token2, verdict(ClassificationColor::Yellow)));
        assert_eq!(session.status(), SessionStatus::Settled);
    }

    #[test]
    fn reset_discards_verdict_and_failure() {
        let mut session = AuditSession::new();
        let (token, _) = session.submit().unwrap();
        session.settle(token, verdict(ClassificationColor::Red));
        assert_eq!(session.status(), SessionStatus::Settled);

        session.reset();
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.verdict().is_none());
        assert!(session.failure().is_none());
    }

    #[test]
    fn stale_verdict_after_reset_is_discarded() {
        let mut session = AuditSession::new();
        let (token, _) = session.submit().unwrap();
        session.reset();

        assert!(!session.settle(token, verdict(ClassificationColor::Green)));
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.verdict().is_none());
    }

    #[test]
    fn stale_result_after_resubmission_is_discarded() {
        let mut session = AuditSession::new();
        let (old_token, _) = session.submit().unwrap();
        session.fail(old_token, "timeout".into());
        let (new_token, _) = session.submit().unwrap();

        // Late result from the first attempt must not touch the new one.
        assert!(!session.settle(old_token, verdict(ClassificationColor::Green)));
        assert_eq!(session.status(), SessionStatus::Submitting);

        assert!(session.settle(new_token, verdict(ClassificationColor::Green)));
        assert_eq!(session.status(), SessionStatus::Settled);
    }

    #[test]
    fn draft_stays_prefilled_after_reset() {
        let mut session = AuditSession::new();
        session.builder_mut().set_risk_percentage(1.7);
        let (token, _) = session.submit().unwrap();
        session.settle(token, verdict(ClassificationColor::Green));

        session.reset();
        assert_eq!(session.builder().risk_percentage(), 1.7);
    }
}
