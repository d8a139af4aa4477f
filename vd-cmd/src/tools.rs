//! Mutating commands: create, upload and generate.

use anyhow::{bail, Context};
use log::{info, warn};
use std::io::Read;
use std::path::Path;
use vd_api::models::{ChartConfig, ToolResponse};
use vd_api::ApiClient;
use vd_chart::{charts, to_svg};
use vd_data::forms::{ChartForm, DraftRow, SalesDraft, UploadForm};
use vd_data::preview::{preview_input, preview_size};
use vd_data::{FormKind, ToolOutcome};

/// Parse `month,sales,expenses` rows. Unparseable numbers become 0 and are
/// then filtered out like blank rows in the dashboard form.
pub fn read_sales_rows<R: Read>(reader: R) -> anyhow::Result<Vec<DraftRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    let position = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .with_context(|| format!("missing `{}` column", name))
    };
    let (month, sales, expenses) = (position("month")?, position("sales")?, position("expenses")?);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let number = |i: usize| {
            record
                .get(i)
                .and_then(|v| v.parse::<f64>().ok())
                .unwrap_or(0.0)
        };
        rows.push(DraftRow::new(
            record.get(month).unwrap_or(""),
            number(sales),
            number(expenses),
        ));
    }
    Ok(rows)
}

/// Print an outcome the way the dashboard's result panel shows it.
fn report(outcome: &ToolOutcome) -> anyhow::Result<()> {
    println!("{}: {}", outcome.heading(), outcome.message);
    for (label, value) in &outcome.details {
        println!("  {}: {}", label, value);
    }
    if let Some(json) = &outcome.json {
        println!("{}", json);
    }
    if !outcome.success {
        bail!("{}", outcome.message);
    }
    Ok(())
}

pub async fn run_create_sales(
    client: &ApiClient,
    name: String,
    description: String,
    rows_path: &str,
) -> anyhow::Result<()> {
    let file = std::fs::File::open(rows_path).with_context(|| format!("opening {}", rows_path))?;
    let draft = SalesDraft {
        name,
        description,
        rows: read_sales_rows(file)?,
    };
    let request = draft.request()?;
    let skipped = draft.rows.len() - request.data.len();
    if skipped > 0 {
        warn!("Skipping {} rows without a month or positive sales", skipped);
    }
    info!("Creating {} with {} rows", request.name, request.data.len());
    let outcome = ToolOutcome::from_result(
        FormKind::CreateDataset,
        client.create_sales_data(&request).await,
    );
    report(&outcome)
}

pub async fn run_upload(client: &ApiClient, name: String, path: &str) -> anyhow::Result<()> {
    let file_name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
        .to_string();
    let form = UploadForm { dataset_name: name };
    form.accept(&[file_name.as_str()])?;
    let contents = std::fs::read(path).with_context(|| format!("reading {}", path))?;
    info!("Uploading {} ({} bytes)", file_name, contents.len());
    let outcome = ToolOutcome::from_result(
        FormKind::Upload,
        client
            .upload_csv(&form.dataset_name, &file_name, contents)
            .await,
    );
    report(&outcome)
}

/// Render the configuration carried by a generate response to SVG.
pub fn response_svg(response: &ToolResponse) -> anyhow::Result<String> {
    let Some(config) = response.data_as::<ChartConfig>() else {
        bail!("response carries no chart configuration");
    };
    let Some(input) = preview_input(&config) else {
        bail!("dataset columns do not fit a {} chart", config.chart_type);
    };
    Ok(to_svg(&charts::render(&input, preview_size(&config))))
}

pub async fn run_generate(
    client: &ApiClient,
    mut form: ChartForm,
    auto_title: bool,
    svg_path: Option<&str>,
) -> anyhow::Result<()> {
    if auto_title {
        form.apply_auto_title();
    }
    let request = form.request()?;
    info!("Generating {} chart for {}", request.chart_type, request.dataset_name);
    let result = client.generate_chart(&request).await;

    let svg = match (&result, svg_path) {
        (Ok(response), Some(path)) if response.success => Some((response_svg(response), path)),
        _ => None,
    };
    report(&ToolOutcome::from_result(FormKind::GenerateChart, result))?;

    if let Some((svg, path)) = svg {
        let svg = svg?;
        std::fs::write(path, svg).with_context(|| format!("writing {}", path))?;
        info!("Wrote {}", path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_sales_rows_filters_on_submit() {
        let text = "Month, Sales, Expenses\n,100,10\nJan,0,5\nFeb,500,200\nMar,abc,1\n";
        let rows = read_sales_rows(text.as_bytes()).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].sales, 0.0);

        let draft = SalesDraft {
            name: "q1".to_string(),
            description: String::new(),
            rows,
        };
        let request = draft.request().unwrap();
        assert_eq!(request.data.len(), 1);
        assert_eq!(request.data[0].month, "Feb");
    }

    #[test]
    fn test_read_sales_rows_needs_columns() {
        let err = read_sales_rows("month,revenue\nJan,1\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("sales"));
    }

    #[test]
    fn test_response_svg() {
        let response: ToolResponse = serde_json::from_value(json!({
            "success": true,
            "message": "ok",
            "data": {
                "type": "pie",
                "data": [{"category": "A", "value": 1, "color": "#ff0000"}],
                "width": 400,
                "height": 300
            }
        }))
        .unwrap();
        let svg = response_svg(&response).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r##"fill="#ff0000""##));
    }

    #[test]
    fn test_response_svg_without_config() {
        let response: ToolResponse =
            serde_json::from_value(json!({"success": true, "message": "ok"})).unwrap();
        assert!(response_svg(&response).is_err());
    }
}
