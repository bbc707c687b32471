use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use shipment_tracker::export::{self, ExportRow};
use shipment_tracker::{
    ConfirmationRequest, Delivery, ErrorKind, ShipmentDetails, ShipmentError, ShipmentQuery,
    ShipmentStatus, ShipmentStore, ShipmentTracker, StatusFilter, StatusKind, TrackerConfig,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 22).unwrap()
}

fn shipment_a() -> ShipmentDetails {
    ShipmentDetails {
        description: "Produk A - Bahan Baku".to_string(),
        qty: 100,
        recipient: "PT. Maju Jaya".to_string(),
        purchase_order: "PO-2025-001".to_string(),
        ship_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        branch: "Jakarta".to_string(),
    }
}

#[test]
fn confirm_then_reject_round_trip() {
    let mut store = ShipmentStore::new().with_clock(today);
    let a = store.create(shipment_a()).unwrap();
    assert_eq!(a.status, ShipmentStatus::Pending);

    let confirmed = store
        .confirm(
            a.id,
            ConfirmationRequest {
                confirmed_by: "Budi".to_string(),
                tracking_ref: "RSI-001".to_string(),
                handed_to_user: false,
            },
        )
        .unwrap();
    let confirmation = confirmed.confirmation().unwrap();
    assert_eq!(confirmed.status_kind(), StatusKind::Confirmed);
    assert_eq!(confirmation.delivery, Delivery::Tracking("RSI-001".to_string()));
    assert_eq!(confirmation.confirmed_on, today());

    let rejected = store.reject(a.id).unwrap();
    assert_eq!(rejected.status, ShipmentStatus::Rejected);
    assert!(rejected.confirmation().is_none());
}

#[test]
fn confirm_on_confirmed_record_is_invalid_transition() {
    let mut store = ShipmentStore::seeded();
    let confirmed = store.shipments()[1].clone();

    let err = store
        .confirm(
            confirmed.id,
            ConfirmationRequest {
                confirmed_by: "Sari".to_string(),
                tracking_ref: "RSI-999".to_string(),
                handed_to_user: false,
            },
        )
        .unwrap_err();

    assert_eq!(err, ShipmentError::NotPending(StatusKind::Confirmed));
    assert_eq!(err.kind(), ErrorKind::InvalidTransition);
    assert_eq!(store.get(confirmed.id), Some(&confirmed));
}

#[test]
fn search_with_status_filter_excludes_similar_pending_record() {
    let store = ShipmentStore::seeded();
    let visible = ShipmentQuery::new("PO-2025-002", StatusFilter::Confirmed).apply(store.shipments());

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].details.purchase_order, "PO-2025-002");

    // The pending PO-2025-001 record is textually similar but filtered out
    let similar = ShipmentQuery::new("PO-2025-00", StatusFilter::All).apply(store.shipments());
    assert_eq!(similar.len(), 2);
}

#[test]
fn export_parses_back_to_the_same_values() {
    let mut tracker = ShipmentTracker::new(TrackerConfig::default())
        .unwrap()
        .with_clock(today);
    let created = tracker.create(shipment_a()).unwrap();
    tracker.begin_confirmation(created.id).unwrap();
    tracker.confirmation_mut().set_confirmer_name("Dewi");
    tracker.confirmation_mut().set_handed_to_user(true);
    tracker.submit_confirmation().unwrap();

    let file = tracker.export().unwrap();
    let rows = export::decode(&file.bytes).unwrap();

    let expected: Vec<ExportRow> = tracker.visible().into_iter().map(ExportRow::from).collect();
    assert_eq!(rows, expected);

    let first = &rows[0];
    assert_eq!(first.qty, 100);
    assert_eq!(first.status, "Dikonfirmasi");
    assert_eq!(first.confirmed_date, "2025-01-22");
    assert_eq!(first.tracking_ref, "Serah ke User");

    let pending = &rows[1];
    assert_eq!(StatusKind::from_label(&pending.status), Some(StatusKind::Pending));
    assert_eq!(pending.confirmed_by, "-");
}

#[test]
fn exported_text_for_filtered_view() {
    let mut tracker = ShipmentTracker::new(TrackerConfig::default())
        .unwrap()
        .with_clock(today);
    tracker.set_search("jakarta");

    let file = tracker.export().unwrap();
    assert_eq!(file.file_name, "pengiriman-2025-01-22.csv");
    assert_eq!(
        String::from_utf8(file.bytes).unwrap(),
        "Deskripsi\tQty\tPenerima\tPO\tBranch\tTgl Kirim\tStatus\tTgl Konfirmasi\tKonfirmasi Oleh\tNo Resi\n\
         Produk A - Bahan Baku\t100\tPT. Maju Jaya\tPO-2025-001\tJakarta\t2025-01-15\tPending\t-\t-\t-\n"
    );
}
