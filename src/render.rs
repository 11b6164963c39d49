use audit_core::{IconSemantic, PresentationModel, StyleFamily};

fn style_tag(style: StyleFamily) -> &'static str {
    match style {
        StyleFamily::Positive => "GO",
        StyleFamily::Caution => "CAUTION",
        StyleFamily::Blocking => "NO-GO",
        StyleFamily::Neutral => "UNCLASSIFIED",
    }
}

fn icon(icon: IconSemantic) -> &'static str {
    match icon {
        IconSemantic::Confirmation => "[+]",
        IconSemantic::Warning => "[!]",
        IconSemantic::Rejection => "[x]",
        IconSemantic::Informational => "[i]",
    }
}

/// Print the settled report. The blockers section only appears when the
/// verdict carried at least one blocker.
pub fn render_report(model: &PresentationModel) {
    println!();
    println!(
        "{} {} — {} ({})",
        icon(model.icon),
        style_tag(model.style),
        model.asset,
        model.status_label
    );
    println!("  {}: {}", model.regime_title, model.regime_value);
    println!("    {}", model.regime_context);
    println!("  {}:", model.risk_title);
    println!("    {}", model.stop_width);
    println!("    {}", model.position_size);
    println!("  Analysis: {}", model.narrative);
    if model.show_blockers {
        println!("  Blockers:");
        for blocker in &model.blockers {
            println!("    - {blocker}");
        }
    }
    println!();
}

/// Blocking notification for a failed session. No auto-retry; the user has
/// to resubmit.
pub fn render_unreachable(message: &str) {
    eprintln!();
    eprintln!("AUDIT FAILED: {message}");
    eprintln!("The session was not settled. Submit again to retry.");
    eprintln!();
}
