//! Client-side core of the trade auditor: draft building, the risk
//! guardrail, the audit-session state machine, and the verdict classifier.

pub mod classify;
pub mod guardrail;
pub mod request;
pub mod session;

pub use classify::{classify, IconSemantic, PresentationModel, StyleFamily};
pub use guardrail::{validate, RiskRejected, MAX_RISK_PERCENT};
pub use request::{FieldUpdate, RequestBuilder};
pub use session::{AttemptToken, AuditSession, SessionStatus};
