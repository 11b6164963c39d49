use anyhow::{bail, Result};
use audit_core::{classify, AuditSession, FieldUpdate, SessionStatus};
use risk_engine_client::{EngineClient, StrategyType, Symbol, Timeframe};
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::render;

pub struct App {
    client: EngineClient,
    session: AuditSession,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = EngineClient::new(
            &config.engine.base_url,
            config.engine.timeout_ms,
            config.engine.max_retries,
        );

        let mut session = AuditSession::new();
        let builder = session.builder_mut();
        builder.set_symbol(parse_symbol(&config.audit.symbol)?);
        builder.set_timeframe(parse_timeframe(&config.audit.timeframe)?);
        if builder.set_strategy(parse_strategy(&config.audit.strategy)?)
            == FieldUpdate::ReservedOption
        {
            warn!(
                "Configured strategy '{}' is reserved; keeping {}",
                config.audit.strategy,
                builder.strategy().as_str()
            );
        }
        builder.set_account_balance(config.audit.account_balance);
        if let FieldUpdate::Rejected { advisory } =
            builder.set_risk_percentage(config.audit.risk_percentage)
        {
            warn!("Configured risk rejected: {advisory}");
        }

        Ok(Self { client, session })
    }

    pub fn session(&self) -> &AuditSession {
        &self.session
    }

    /// Run one audit cycle: submit the draft, wait for the engine, settle or
    /// fail the session, and render the outcome.
    pub async fn run_once(&mut self) -> Result<()> {
        let Some((token, request)) = self.session.submit() else {
            if let Some(advisory) = self.session.builder().advisory() {
                bail!("Draft not submittable: {advisory}");
            }
            bail!("Submit suppressed in state {:?}", self.session.status());
        };

        match self.client.audit(&request).await {
            Ok(verdict) => {
                if self.session.settle(token, verdict) {
                    info!("Audit settled for {}", request.symbol.as_str());
                    let model = classify(self.session.verdict().expect("settled session"));
                    render::render_report(&model);
                }
            }
            Err(e) => {
                let message = format!("Could not reach the risk engine: {e}");
                if self.session.fail(token, message) {
                    error!("Audit failed for {}", request.symbol.as_str());
                    render::render_unreachable(self.session.failure().expect("failed session"));
                }
            }
        }

        debug_assert!(matches!(
            self.session.status(),
            SessionStatus::Settled | SessionStatus::Failed
        ));
        Ok(())
    }
}

fn parse_symbol(raw: &str) -> Result<Symbol> {
    match raw {
        "BTC/USDT" => Ok(Symbol::BtcUsdt),
        "ETH/USDT" => Ok(Symbol::EthUsdt),
        "SOL/USDT" => Ok(Symbol::SolUsdt),
        other => bail!("Unknown symbol '{other}'"),
    }
}

fn parse_timeframe(raw: &str) -> Result<Timeframe> {
    match raw {
        "1h" => Ok(Timeframe::H1),
        "4h" => Ok(Timeframe::H4),
        "1d" => Ok(Timeframe::D1),
        other => bail!("Unknown timeframe '{other}'"),
    }
}

fn parse_strategy(raw: &str) -> Result<StrategyType> {
    match raw {
        "TREND_FOLLOWING" => Ok(StrategyType::TrendFollowing),
        "BREAKOUT" => Ok(StrategyType::Breakout),
        "MEAN_REVERSION" => Ok(StrategyType::MeanReversion),
        "SCALPING" => Ok(StrategyType::Scalping),
        other => bail!("Unknown strategy '{other}'"),
    }
}
