//! Tabular filler shown under every dashboard's charts.

use crate::domain::dashboard::{DataPoint, TableColumn, TableConfig};
use crate::domain::foundation::TemplateCategory;

const TABLE_ROWS: usize = 10;

const COLUMNS: &[(&str, &str)] = &[("id", "ID"), ("name", "Name"), ("status", "Status"), ("value", "Value")];

/// Builds the data table of a template.
///
/// The table does not vary with its inputs: four sortable columns and ten
/// synthetic rows.
pub fn generate_table(
    _category: TemplateCategory,
    _industry_id: &str,
    _department_id: &str,
) -> TableConfig {
    let columns = COLUMNS
        .iter()
        .map(|(key, label)| TableColumn {
            key: key.to_string(),
            label: label.to_string(),
            sortable: Some(true),
        })
        .collect();

    let data = (0..TABLE_ROWS)
        .map(|i| {
            let status = match i % 3 {
                0 => "Active",
                1 => "Pending",
                _ => "Completed",
            };
            DataPoint::new()
                .with("id", format!("#{}", 1000 + i))
                .with("name", format!("Item {}", i + 1))
                .with("status", status)
                .with("value", format!("{:.2}", (100 + i * 10) as f64))
        })
        .collect();

    TableConfig {
        title: "Data Overview".to_string(),
        columns,
        data,
        search_key: "name".to_string(),
    }
}
