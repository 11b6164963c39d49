//! Verdict → presentation mapping.

use risk_engine_client::{ClassificationColor, Verdict};
use serde::Serialize;

/// How a verdict should be styled. One family per classification color,
/// totally mapped — unknown colors land on `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StyleFamily {
    Positive,
    Caution,
    Blocking,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IconSemantic {
    Confirmation,
    Warning,
    Rejection,
    Informational,
}

/// Render-ready view of a verdict. Card content is carried verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct PresentationModel {
    pub asset: String,
    pub style: StyleFamily,
    pub icon: IconSemantic,
    pub status_label: String,
    pub regime_title: String,
    pub regime_value: String,
    pub regime_context: String,
    pub risk_title: String,
    pub stop_width: String,
    pub position_size: String,
    pub narrative: String,
    pub blockers: Vec<String>,
    pub show_blockers: bool,
}

fn style_for(color: ClassificationColor) -> (StyleFamily, IconSemantic) {
    match color {
        ClassificationColor::Green => (StyleFamily::Positive, IconSemantic::Confirmation),
        ClassificationColor::Yellow => (StyleFamily::Caution, IconSemantic::Warning),
        ClassificationColor::Red => (StyleFamily::Blocking, IconSemantic::Rejection),
        ClassificationColor::Unknown => (StyleFamily::Neutral, IconSemantic::Informational),
    }
}

/// Pure and total: every verdict produces a model, never an error.
pub fn classify(verdict: &Verdict) -> PresentationModel {
    let ui = &verdict.ui_components;
    let (style, icon) = style_for(ui.traffic_light.color);

    PresentationModel {
        asset: verdict.asset.clone(),
        style,
        icon,
        status_label: ui.traffic_light.label.clone(),
        regime_title: ui.regime_card.title.clone(),
        regime_value: ui.regime_card.value.clone(),
        regime_context: ui.regime_card.subtext.clone(),
        risk_title: ui.risk_card.title.clone(),
        stop_width: ui.risk_card.metric_1.clone(),
        position_size: ui.risk_card.metric_2.clone(),
        narrative: ui.ai_analysis.text.clone(),
        blockers: ui.ai_analysis.blockers.clone(),
        show_blockers: !ui.ai_analysis.blockers.is_empty(),
    }
}
