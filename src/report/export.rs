use tokio::io::{AsyncWriteExt, BufWriter};

use crate::engine::{ProbeSettings, RunReport};

use super::RunSummary;

/// Writes the settings, summary and every outcome as pretty JSON.
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
pub async fn export_json(
    path: &str,
    report: &RunReport,
    settings: &ProbeSettings,
) -> Result<(), std::io::Error> {
    let summary = RunSummary::from_report(report);
    let outcomes_json: Vec<serde_json::Value> = report
        .outcomes()
        .iter()
        .map(|outcome| {
            serde_json::json!({
                "index": outcome.job().index,
                "method": outcome.job().method,
                "url": outcome.job().url,
                "elapsed_ms": outcome.elapsed().as_millis(),
                "verdict": outcome.verdict(),
                "status_code": outcome.status(),
                "error": outcome.error().map(ToString::to_string),
            })
        })
        .collect();

    let payload = serde_json::json!({
        "settings": {
            "threshold_ms": settings.threshold.get().as_millis(),
            "workers": settings.workers.get(),
            "timeout_ms": settings.timeout.as_millis(),
            "policy": settings.policy,
        },
        "summary": {
            "total": summary.total,
            "passed": summary.passed,
            "failed": summary.failed,
            "errors": summary.errors,
            "skipped": summary.skipped,
            "interrupted": report.interrupted(),
            "wall_time_ms": summary.wall_time.as_millis(),
            "success": summary.is_success(),
        },
        "outcomes": outcomes_json,
    });

    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    let json = serde_json::to_vec_pretty(&payload).map_err(std::io::Error::other)?;
    writer.write_all(&json).await?;
    writer.flush().await?;
    Ok(())
}
