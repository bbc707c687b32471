use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ExportConfig;
use crate::domain::shipment::Shipment;
use crate::locale;

// ============================================================================
// Export Encoder - Tab-separated table for spreadsheet software
// ============================================================================
//
// Layout:
// - Row zero is the fixed ten-column header
// - One row per shipment, in the order given
// - Tab between fields, '\n' after every row
// - Absent confirmation fields render as "-"
//
// Fields containing a tab, quote or newline are quoted so every export
// parses back.
//
// ============================================================================

pub const HEADERS: [&str; 10] = [
    "Deskripsi",
    "Qty",
    "Penerima",
    "PO",
    "Branch",
    "Tgl Kirim",
    "Status",
    "Tgl Konfirmasi",
    "Konfirmasi Oleh",
    "No Resi",
];

pub const CONTENT_TYPE: &str = "text/csv;charset=utf-8";

const DELIMITER: u8 = b'\t';

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush export buffer: {0}")]
    Flush(String),

    #[error("Unexpected export header: {0:?}")]
    HeaderMismatch(Vec<String>),
}

/// One exported row, with every column already rendered as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Deskripsi")]
    pub description: String,
    #[serde(rename = "Qty")]
    pub qty: i32,
    #[serde(rename = "Penerima")]
    pub recipient: String,
    #[serde(rename = "PO")]
    pub purchase_order: String,
    #[serde(rename = "Branch")]
    pub branch: String,
    #[serde(rename = "Tgl Kirim")]
    pub ship_date: NaiveDate,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Tgl Konfirmasi")]
    pub confirmed_date: String,
    #[serde(rename = "Konfirmasi Oleh")]
    pub confirmed_by: String,
    #[serde(rename = "No Resi")]
    pub tracking_ref: String,
}

impl From<&Shipment> for ExportRow {
    fn from(shipment: &Shipment) -> Self {
        let details = &shipment.details;
        let confirmation = shipment.confirmation();

        Self {
            description: details.description.clone(),
            qty: details.qty,
            recipient: details.recipient.clone(),
            purchase_order: details.purchase_order.clone(),
            branch: details.branch.clone(),
            ship_date: details.ship_date,
            status: shipment.status_kind().label().to_string(),
            confirmed_date: confirmation
                .map(|c| c.confirmed_on.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| locale::PLACEHOLDER.to_string()),
            confirmed_by: confirmation
                .map(|c| c.confirmed_by.clone())
                .unwrap_or_else(|| locale::PLACEHOLDER.to_string()),
            tracking_ref: confirmation
                .map(|c| c.delivery.label().to_string())
                .unwrap_or_else(|| locale::PLACEHOLDER.to_string()),
        }
    }
}

/// Encoded export ready to be offered as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
    pub rows: usize,
}

/// `pengiriman-YYYY-MM-DD.csv` with the default config
pub fn file_name(config: &ExportConfig, date: NaiveDate) -> String {
    format!(
        "{}-{}.{}",
        config.file_prefix,
        date.format("%Y-%m-%d"),
        config.file_extension
    )
}

/// Encode shipments (typically the filtered view) into the export table
pub fn encode<'a, I>(shipments: I) -> Result<Vec<u8>, ExportError>
where
    I: IntoIterator<Item = &'a Shipment>,
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for shipment in shipments {
        writer.serialize(ExportRow::from(shipment))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.error().to_string()))
}

/// Build the downloadable file for `shipments` as of `date`
pub fn export_file<'a, I>(
    config: &ExportConfig,
    shipments: I,
    date: NaiveDate,
) -> Result<ExportFile, ExportError>
where
    I: IntoIterator<Item = &'a Shipment>,
{
    let shipments: Vec<&Shipment> = shipments.into_iter().collect();
    let bytes = encode(shipments.iter().copied())?;

    Ok(ExportFile {
        file_name: file_name(config, date),
        content_type: CONTENT_TYPE,
        bytes,
        rows: shipments.len(),
    })
}

/// Parse an export back into rows, checking the header first
pub fn decode(bytes: &[u8]) -> Result<Vec<ExportRow>, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_reader(bytes);

    let header = reader.headers()?;
    if header.iter().ne(HEADERS.iter().copied()) {
        return Err(ExportError::HeaderMismatch(
            header.iter().map(str::to_string).collect(),
        ));
    }

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shipment::{ConfirmationRequest, ShipmentDetails};
    use crate::store::ShipmentStore;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    #[test]
    fn test_encode_seeded_store() {
        let store = ShipmentStore::seeded();
        let bytes = encode(store.shipments()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let expected = "Deskripsi\tQty\tPenerima\tPO\tBranch\tTgl Kirim\tStatus\tTgl Konfirmasi\tKonfirmasi Oleh\tNo Resi\n\
Produk A - Bahan Baku\t100\tPT. Maju Jaya\tPO-2025-001\tJakarta\t2025-01-15\tPending\t-\t-\t-\n\
Produk B - Material Pendukung\t50\tPT. Mitra Baik\tPO-2025-002\tSurabaya\t2025-01-16\tDikonfirmasi\t2025-01-16\tBudi Santoso\tRSI-2025-00001\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_export_still_has_header() {
        let bytes = encode(std::iter::empty()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Deskripsi\tQty"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_rejected_and_handed_to_user_rows() {
        let mut store = ShipmentStore::new().with_clock(fixed_today);
        let details = ShipmentDetails {
            description: "Cat Tembok".to_string(),
            qty: 12,
            recipient: "Toko Warna".to_string(),
            purchase_order: "PO-9".to_string(),
            ship_date: fixed_today(),
            branch: "Semarang".to_string(),
        };
        let a = store.create(details.clone()).unwrap();
        let b = store.create(details).unwrap();
        store.reject(a.id).unwrap();
        store
            .confirm(
                b.id,
                ConfirmationRequest {
                    confirmed_by: "Dewi".to_string(),
                    tracking_ref: String::new(),
                    handed_to_user: true,
                },
            )
            .unwrap();

        let rows = decode(&encode(store.shipments()).unwrap()).unwrap();
        assert_eq!(rows[0].status, "Dikonfirmasi");
        assert_eq!(rows[0].confirmed_date, "2025-03-09");
        assert_eq!(rows[0].tracking_ref, "Serah ke User");
        assert_eq!(rows[1].status, "Ditolak");
        assert_eq!(rows[1].confirmed_by, "-");
    }

    #[test]
    fn test_fields_with_delimiters_survive_round_trip() {
        let mut store = ShipmentStore::new();
        store
            .create(ShipmentDetails {
                description: "Pipa\t3 \"inch\"\nPVC".to_string(),
                qty: 4,
                recipient: "PT. Air".to_string(),
                purchase_order: "PO-5".to_string(),
                ship_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
                branch: "Bogor".to_string(),
            })
            .unwrap();

        let rows = decode(&encode(store.shipments()).unwrap()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "Pipa\t3 \"inch\"\nPVC");
    }

    #[test]
    fn test_decode_rejects_foreign_header() {
        let result = decode(b"Name\tQty\nfoo\t1\n");
        assert!(matches!(result, Err(ExportError::HeaderMismatch(_))));
    }

    #[test]
    fn test_file_name_embeds_date() {
        let config = ExportConfig::default();
        assert_eq!(file_name(&config, fixed_today()), "pengiriman-2025-03-09.csv");
    }

    #[test]
    fn test_export_file_counts_rows() {
        let store = ShipmentStore::seeded();
        let file = export_file(&ExportConfig::default(), store.shipments(), fixed_today()).unwrap();
        assert_eq!(file.rows, 2);
        assert_eq!(file.content_type, "text/csv;charset=utf-8");
        assert_eq!(file.file_name, "pengiriman-2025-03-09.csv");
    }
}
