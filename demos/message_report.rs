use std::io;

use telstra_messaging::{CreateReport, MessagingClient, ReportPeriod};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let start = std::env::var("TELSTRA_REPORT_START").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELSTRA_REPORT_START environment variable is required (YYYY-MM-DD)",
        )
    })?;
    let end = std::env::var("TELSTRA_REPORT_END").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELSTRA_REPORT_END environment variable is required (YYYY-MM-DD)",
        )
    })?;

    let client = MessagingClient::from_env();
    let request = CreateReport::new(ReportPeriod::new(&start, &end)?);
    let report = client.create_message_report(request).await?;
    println!(
        "report_id: {}, status: {:?}",
        report.report_id, report.report_status
    );

    for report in client.list_reports().await? {
        println!(
            "{} {:?} expires {:?}",
            report.report_id, report.report_status, report.report_expiry
        );
    }

    Ok(())
}
