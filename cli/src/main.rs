//! Vestibule smoke driver.
//!
//! Wires the shell core to the in-memory host and router and walks one
//! scripted session end to end: guarded navigation while logged out, login,
//! a few alerts (one expiring, one dismissed early), then logout. Real
//! embeddings replace [`MemoryHost`] / [`MemoryRouter`] with a document and
//! router of their own; everything else stays as exercised here.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use vestibule_engine::{
    ALERT_CONTAINER_ID, GuardDecision, MemoryHost, MemoryRouter, NotifyOptions, RouteName,
    RouteTable, Severity, Shell, VestibuleConfig,
};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = VestibuleConfig::load()?.unwrap_or_default();
    let shell_config = config.shell_or_default();
    tracing::info!(
        policy = ?shell_config.guard_policy,
        ttl_ms = shell_config.alert_ttl_ms,
        "shell configured"
    );

    let host = Arc::new(MemoryHost::new());
    let router = MemoryRouter::new(RouteTable::with_defaults());
    let shell = Shell::new(&shell_config, host.clone());
    tracing::debug!(container = ALERT_CONTAINER_ID, "host wired");

    let dashboard = RouteName::from("dashboard");
    let home = RouteName::from("home");

    // Logged out: the guard decides what the router should do.
    match shell.guard().check(&dashboard, &home) {
        GuardDecision::Allow => tracing::info!("guard allowed dashboard while logged out"),
        GuardDecision::Redirect(route) => {
            tracing::info!(%route, "guard redirected the logged-out visitor");
        }
    }

    // The external auth service has validated credentials; record them.
    shell.session().set_authenticated(true);
    shell.session().set_username("admin");
    shell.session().set_token(Some("issued-elsewhere".to_owned()));
    shell.session().set_user_id(Some("42".to_owned()));

    if shell.guard().check(&dashboard, &home) == GuardDecision::Allow {
        shell.navigation().set_current_view("DashboardComponent");
        tracing::info!(view = %shell.navigation().current_view(), "navigated");
    }

    let fleeting = shell.alerts().notify(
        Severity::Success,
        "Signed in",
        "Welcome back",
        NotifyOptions::default(),
    );
    let early = shell.alerts().notify(
        Severity::Warning,
        "Heads up",
        "Session expires soon",
        NotifyOptions::default(),
    );
    tracing::info!(alerts = host.alert_ids().len(), "alerts rendered");

    shell.alerts().dismiss_now(&early);
    tokio::time::sleep(Duration::from_millis(shell_config.alert_ttl_ms + 100)).await;
    tracing::info!(
        fleeting_present = host.contains_alert(&fleeting),
        dismissed = host.dismissed_ids().len(),
        "after expiry window"
    );

    shell.logout(&router);
    tracing::info!(
        authenticated = shell.session().is_authenticated(),
        pushes = router.pushed().len(),
        "logged out"
    );

    Ok(())
}
