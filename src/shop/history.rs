use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::models::OrderRecord;

/// Load the order history from a JSON file. A missing file is an empty
/// history.
pub fn load_history<P: AsRef<Path>>(path: P) -> Result<Vec<OrderRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let records: Vec<OrderRecord> = serde_json::from_str(&content)?;
    info!("loaded {} orders from {}", records.len(), path.display());
    Ok(records)
}

/// Save the order history to a JSON file, replacing its contents.
pub fn save_history<P: AsRef<Path>>(path: P, records: &[OrderRecord]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    info!("saved {} orders to {}", records.len(), path.display());
    Ok(())
}

/// Next free order number after the given history.
pub fn next_order_number(records: &[OrderRecord]) -> u32 {
    records.iter().map(|r| r.number).max().unwrap_or(0) + 1
}

/// Write one CSV row per order.
pub fn write_report_csv<P: AsRef<Path>>(path: P, records: &[OrderRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "number",
        "customer",
        "placed_at",
        "size",
        "description",
        "calories",
        "prep_minutes",
        "subtotal",
        "tax",
        "total",
        "completed",
    ])?;

    for record in records {
        wtr.write_record([
            record.number.to_string(),
            record.customer.clone(),
            record.placed_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            record.size.to_string(),
            record.description.clone(),
            record.calories.to_string(),
            record.prep_minutes.to_string(),
            format!("{:.2}", record.subtotal),
            format!("{:.2}", record.tax),
            format!("{:.2}", record.total),
            record.completed.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Size;
    use chrono::Local;
    use tempfile::{NamedTempFile, TempDir};

    fn sample_record(number: u32) -> OrderRecord {
        OrderRecord {
            number,
            customer: "Ada".to_string(),
            description: "Small Espresso, Double Ristretto Shot".to_string(),
            size: Size::Small,
            ingredients: vec![
                "Espresso beans".to_string(),
                "Hot water".to_string(),
                "Ristretto espresso shot x2".to_string(),
            ],
            calories: 7,
            prep_minutes: 8,
            subtotal: 3.70,
            tax: 0.30,
            total: 4.00,
            placed_at: Local::now(),
            completed: true,
        }
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let dir = TempDir::new().unwrap();
        let records = load_history(dir.path().join("nothing_here.json")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        let records = vec![sample_record(1), sample_record(2)];

        save_history(file.path(), &records).unwrap();
        let reloaded = load_history(file.path()).unwrap();

        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded[0].description, records[0].description);
        assert_eq!(reloaded[1].number, 2);
        assert_eq!(reloaded[0].size, Size::Small);
    }

    #[test]
    fn test_next_order_number() {
        assert_eq!(next_order_number(&[]), 1);
        assert_eq!(next_order_number(&[sample_record(3), sample_record(9)]), 10);
    }

    #[test]
    fn test_csv_report() {
        let file = NamedTempFile::new().unwrap();
        write_report_csv(file.path(), &[sample_record(1)]).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("number,customer"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("1,Ada,"));
        assert!(row.contains("3.70"));
        assert!(lines.next().is_none());
    }
}
