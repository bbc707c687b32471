use chrono::NaiveDate;
use shipment_tracker::{ShipmentDetails, ShipmentTracker, StatusFilter, TrackerConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,shipment_tracker=debug"))
        )
        .init();

    tracing::info!("📦 Starting shipment tracker session");

    // === 1. Session with the two sample shipments ===
    let mut tracker = ShipmentTracker::new(TrackerConfig::default())?;

    // === 2. Record a new shipment ===
    let ship_date = NaiveDate::from_ymd_opt(2025, 1, 20)
        .ok_or_else(|| anyhow::anyhow!("invalid demo ship date"))?;
    let shipment = tracker.create(ShipmentDetails {
        description: "Produk C - Kemasan Karton".to_string(),
        qty: 100,
        recipient: "PT. Sejahtera Abadi".to_string(),
        purchase_order: "PO-2025-003".to_string(),
        ship_date,
        branch: "Bandung".to_string(),
    })?;
    tracing::info!("✅ Shipment created: {}", shipment.id);

    // === 3. Confirmation prompt, first without a tracking reference ===
    tracker.begin_confirmation(shipment.id)?;
    tracker.confirmation_mut().set_confirmer_name("Budi");
    if let Err(e) = tracker.submit_confirmation() {
        tracing::info!("⚠️  Prompt stays open: {}", e);
    }

    tracker.confirmation_mut().set_tracking_ref("RSI-001");
    let receipt = tracker.submit_confirmation()?;
    tracing::info!(
        "✅ Confirmed on {} by {} ({})",
        receipt.confirmed_on_label,
        receipt.confirmed_by,
        receipt.tracking_label
    );

    // === 4. Confirming again is reported, not ignored ===
    if let Err(e) = tracker.begin_confirmation(shipment.id) {
        tracing::info!("⚠️  Second confirmation refused: {}", e);
    }

    // === 5. Undo the confirmation ===
    tracker.reject(shipment.id)?;
    tracing::info!("✅ Shipment rejected: {}", shipment.id);

    // === 6. Search + status filter, then export the visible rows ===
    tracker.set_search("PO-2025-00");
    tracker.set_status_filter(StatusFilter::Confirmed);

    let file = tracker.export()?;
    println!("# {} ({})", file.file_name, file.content_type);
    print!("{}", String::from_utf8_lossy(&file.bytes));

    println!();
    println!("{}", tracker.snapshot_json()?);

    println!();
    print!("{}", tracker.metrics_text()?);

    tracing::info!("🎉 Session complete");

    Ok(())
}
