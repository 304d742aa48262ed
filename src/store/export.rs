use tracing::info;

use super::models::ItemRecord;
use super::{StoreError, TrackerStore};

pub const EXPORT_HEADER: &str = "Run;Item Name;Quality;Date;Time";

/// Renders the log as `;`-separated rows in log order
pub fn render_export(items: &[ItemRecord]) -> Result<String, StoreError> {
    if items.is_empty() {
        return Err(StoreError::NothingToExport);
    }

    let mut out = String::from(EXPORT_HEADER);
    out.push('\n');
    for item in items {
        let name = item.name.replace(';', ",").replace('"', "'");
        let quality = item.quality.replace(';', ",");
        out.push_str(&format!(
            "{};{};{};{};{}\n",
            item.run_index,
            name,
            quality,
            item.time.format("%Y-%m-%d"),
            item.time.format("%H:%M:%S"),
        ));
    }
    Ok(out)
}

impl TrackerStore {
    pub async fn export_items(&self) -> Result<String, StoreError> {
        let state = self.state.read().await;
        let export = render_export(&state.profile.items)?;
        info!(items = state.profile.items.len(), "Item log exported");
        Ok(export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn rows_follow_header_in_log_order() {
        let items = vec![
            ItemRecord {
                name: "Shako; \"lucky\"".to_string(),
                original_name: "Shako".to_string(),
                quality: "Unique".to_string(),
                run_index: 3,
                time: Utc.with_ymd_and_hms(2024, 5, 1, 21, 4, 9).unwrap(),
                affixes: String::new(),
                is_ethereal: false,
                is_identified: true,
                item_level: 62,
            },
            ItemRecord {
                name: "Ber Rune".to_string(),
                original_name: "Ber Rune".to_string(),
                quality: "Normal".to_string(),
                run_index: 7,
                time: Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 1).unwrap(),
                affixes: String::new(),
                is_ethereal: false,
                is_identified: true,
                item_level: 0,
            },
        ];

        let export = render_export(&items).unwrap();
        let lines: Vec<&str> = export.lines().collect();

        assert_eq!(lines[0], EXPORT_HEADER);
        assert_eq!(lines[1], "3;Shako, 'lucky';Unique;2024-05-01;21:04:09");
        assert_eq!(lines[2], "7;Ber Rune;Normal;2024-05-02;00:00:01");
    }

    #[test]
    fn empty_log_cannot_be_exported() {
        assert_eq!(render_export(&[]), Err(StoreError::NothingToExport));
    }
}
