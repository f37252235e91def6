//! Small helpers shared by the server and handlers.

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Format a timestamp in UTC with millisecond precision,
/// e.g. `2026-10-16T09:30:00.123Z`.
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let iso_millis = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    let utc = at.to_offset(UtcOffset::UTC);
    // The description only contains date/time components, so formatting a
    // valid OffsetDateTime cannot fail.
    utc.format(iso_millis).unwrap_or_default()
}

/// Current time as an ISO-8601 UTC string.
pub fn now_timestamp() -> String {
    format_timestamp(OffsetDateTime::now_utc())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, initiating graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
