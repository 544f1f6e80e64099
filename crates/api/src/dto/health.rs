use pagevisits_application::use_cases::HealthReport;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: f64,
    pub database: &'static str,
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            status: if report.healthy { "healthy" } else { "unhealthy" },
            version: report.version,
            uptime_seconds: report.uptime_seconds,
            database: if report.database_connected {
                "connected"
            } else {
                "disconnected"
            },
        }
    }
}
