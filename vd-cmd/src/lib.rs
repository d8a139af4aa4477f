//! Command implementations for the visualization dashboard CLI.
//!
//! Every subcommand talks to the dataset backend through `vd_api::ApiClient`
//! and applies the same client-side validation as the dashboard forms.

use clap::Subcommand;
use vd_api::models::ChartType;
use vd_api::ApiClient;

pub mod datasets;
pub mod tools;

#[derive(Subcommand)]
pub enum Command {
    /// Check that the backend is up
    Health,

    /// List stored datasets
    Datasets {
        /// Use the AI-facing listing (`/api/ai/datasets`)
        #[arg(long)]
        ai: bool,
    },

    /// Print the rows of one dataset
    Fetch {
        name: String,

        /// Write the rows to this CSV file instead of printing JSON
        #[arg(long)]
        csv: Option<String>,
    },

    /// Create a sales dataset from a `month,sales,expenses` CSV file
    CreateSales {
        #[arg(short, long)]
        name: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// CSV file with a `month,sales,expenses` header
        #[arg(short, long)]
        rows: String,
    },

    /// Upload a CSV file as a new dataset
    Upload {
        /// Dataset name to store the file under
        #[arg(short, long)]
        name: String,

        file: String,
    },

    /// Generate a chart configuration for a dataset
    Generate {
        /// bar, line, scatter, pie or area
        #[arg(short = 't', long)]
        chart_type: ChartType,

        #[arg(short, long)]
        dataset: String,

        #[arg(long, default_value = "")]
        title: String,

        /// Derive the title from the chart type and dataset name
        #[arg(long)]
        auto_title: bool,

        #[arg(long, default_value_t = vd_data::forms::DEFAULT_CHART_WIDTH)]
        width: u32,

        #[arg(long, default_value_t = vd_data::forms::DEFAULT_CHART_HEIGHT)]
        height: u32,

        /// Render the returned configuration to this SVG file
        #[arg(long)]
        svg: Option<String>,
    },

    /// Print a stored chart configuration
    Chart { id: String },
}

pub async fn run(client: &ApiClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Health => datasets::run_health(client).await,
        Command::Datasets { ai } => datasets::run_datasets(client, ai).await,
        Command::Fetch { name, csv } => datasets::run_fetch(client, &name, csv.as_deref()).await,
        Command::CreateSales {
            name,
            description,
            rows,
        } => tools::run_create_sales(client, name, description, &rows).await,
        Command::Upload { name, file } => tools::run_upload(client, name, &file).await,
        Command::Generate {
            chart_type,
            dataset,
            title,
            auto_title,
            width,
            height,
            svg,
        } => {
            let form = vd_data::forms::ChartForm {
                chart_type,
                dataset_name: dataset,
                title,
                width,
                height,
            };
            tools::run_generate(client, form, auto_title, svg.as_deref()).await
        }
        Command::Chart { id } => datasets::run_chart(client, &id).await,
    }
}
