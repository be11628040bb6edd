//! Export snapshot round trip through a file on disk.

use anyhow::Result;
use lifedash::metrics::DashboardSnapshot;

#[test]
fn export_writes_readable_json() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("dashboard.json");

    let snapshot = DashboardSnapshot::sample();
    std::fs::write(&path, snapshot.to_json()?)?;

    let contents = std::fs::read_to_string(&path)?;
    let restored: DashboardSnapshot = serde_json::from_str(&contents)?;
    assert_eq!(restored, snapshot);
    Ok(())
}

#[test]
fn export_covers_both_stores() -> Result<()> {
    let json = DashboardSnapshot::sample().to_json()?;

    // Metric domains
    assert!(json.contains("\"time_management\""));
    assert!(json.contains("\"skills\""));
    assert!(json.contains("\"habits\""));
    assert!(json.contains("\"digital_wellbeing\""));
    assert!(json.contains("\"progress_over_time\""));

    // Integrations serialize disconnected
    assert!(json.contains("\"RescueTime\""));
    assert!(!json.contains("\"connected\": true"));
    Ok(())
}
