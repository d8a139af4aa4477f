//! Read-only commands: health, dataset listing, rows and stored charts.

use anyhow::Context;
use log::info;
use serde_json::Value;
use std::io::Write;
use vd_api::models::{AiDatasetList, DatasetInfo, Record};
use vd_api::ApiClient;

pub async fn run_health(client: &ApiClient) -> anyhow::Result<()> {
    let health = client.health_raw().await?;
    println!("{}", serde_json::to_string_pretty(&health)?);
    Ok(())
}

/// One line per dataset: name, row count, columns.
pub fn format_datasets(datasets: &[DatasetInfo]) -> String {
    let width = datasets.iter().map(|d| d.name.len()).max().unwrap_or(0);
    datasets
        .iter()
        .map(|d| format!("{:<width$}  {:>6}  {}", d.name, d.rows, d.columns.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn run_datasets(client: &ApiClient, ai: bool) -> anyhow::Result<()> {
    let datasets = if ai {
        let response = client.ai_datasets().await?;
        response
            .data_as::<AiDatasetList>()
            .map(|list| list.datasets)
            .unwrap_or_default()
    } else {
        client.datasets().await?.datasets
    };
    info!("{} datasets", datasets.len());
    println!("{}", format_datasets(&datasets));
    Ok(())
}

/// Column names in order of first appearance across all rows.
pub fn columns(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Write rows as CSV with a header line.
pub fn write_records<W: Write>(records: &[Record], writer: W) -> anyhow::Result<()> {
    let columns = columns(records);
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&columns)?;
    for record in records {
        wtr.write_record(columns.iter().map(|c| cell(record.get(c))))?;
    }
    wtr.flush()?;
    Ok(())
}

pub async fn run_fetch(client: &ApiClient, name: &str, csv_path: Option<&str>) -> anyhow::Result<()> {
    let rows = client.dataset(name).await?.data;
    match csv_path {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating {}", path))?;
            write_records(&rows, file)?;
            info!("Wrote {} rows of {} to {}", rows.len(), name, path);
        }
        None => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    Ok(())
}

pub async fn run_chart(client: &ApiClient, id: &str) -> anyhow::Result<()> {
    let config = client.chart(id).await?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_write_records_unions_columns() {
        let rows = records(json!([
            {"month": "Jan", "sales": 12000},
            {"month": "Feb", "sales": 19000.5, "note": "promo, spring"},
            {"month": null, "sales": 1}
        ]));
        let mut out = Vec::new();
        write_records(&rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "month,sales,note\nJan,12000,\nFeb,19000.5,\"promo, spring\"\n,1,\n"
        );
    }

    #[test]
    fn test_format_datasets() {
        let mut sales = DatasetInfo::new("sales_data", 12);
        sales.columns = vec!["month".to_string(), "sales".to_string()];
        let listing = format_datasets(&[sales, DatasetInfo::new("x", 3)]);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines[0], "sales_data      12  month, sales");
        assert_eq!(lines[1].trim_end(), "x                3");
    }
}
