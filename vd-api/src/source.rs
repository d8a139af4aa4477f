use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{DatasetInfo, Record};
use log::info;

pub const SALES_DATA: &str = "sales_data";
pub const QUARTERLY_SALES: &str = "quarterly_sales";
pub const PRODUCT_PERFORMANCE: &str = "product_performance";
pub const USER_DATA: &str = "user_data";
pub const CATEGORY_DATA: &str = "category_data";
pub const TIME_SERIES_DATA: &str = "time_series_data";

/// Datasets fetched for the dashboard tab, in display order.
pub const DASHBOARD_DATASETS: [&str; 6] = [
    SALES_DATA,
    QUARTERLY_SALES,
    PRODUCT_PERFORMANCE,
    USER_DATA,
    CATEGORY_DATA,
    TIME_SERIES_DATA,
];

/// Where dashboard data comes from.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Rows of one named dataset.
    async fn dataset_rows(&self, name: &str) -> Result<Vec<Record>>;

    /// Metadata of every stored dataset.
    async fn dataset_index(&self) -> Result<Vec<DatasetInfo>>;
}

impl DataSource for ApiClient {
    async fn dataset_rows(&self, name: &str) -> Result<Vec<Record>> {
        Ok(self.dataset(name).await?.data)
    }

    async fn dataset_index(&self) -> Result<Vec<DatasetInfo>> {
        Ok(self.datasets().await?.datasets)
    }
}

/// Everything the dashboard shows, fetched in one batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSnapshot {
    pub sales: Vec<Record>,
    pub quarterly: Vec<Record>,
    pub products: Vec<Record>,
    pub users: Vec<Record>,
    pub categories: Vec<Record>,
    pub time_series: Vec<Record>,
    pub index: Vec<DatasetInfo>,
}

impl DashboardSnapshot {
    /// Rows of a dashboard dataset by name.
    pub fn rows(&self, name: &str) -> &[Record] {
        match name {
            SALES_DATA => &self.sales,
            QUARTERLY_SALES => &self.quarterly,
            PRODUCT_PERFORMANCE => &self.products,
            USER_DATA => &self.users,
            CATEGORY_DATA => &self.categories,
            TIME_SERIES_DATA => &self.time_series,
            _ => &[],
        }
    }
}

/// Fetch every dashboard dataset plus the index concurrently.
///
/// All requests must succeed; the first failure is returned and nothing
/// partial is produced.
pub async fn load_dashboard<S: DataSource>(source: &S) -> Result<DashboardSnapshot> {
    let (sales, quarterly, products, users, categories, time_series, index) = futures::try_join!(
        source.dataset_rows(SALES_DATA),
        source.dataset_rows(QUARTERLY_SALES),
        source.dataset_rows(PRODUCT_PERFORMANCE),
        source.dataset_rows(USER_DATA),
        source.dataset_rows(CATEGORY_DATA),
        source.dataset_rows(TIME_SERIES_DATA),
        source.dataset_index(),
    )?;
    info!(
        "Loaded {} dashboard datasets ({} known to the backend)",
        DASHBOARD_DATASETS.len(),
        index.len()
    );
    Ok(DashboardSnapshot {
        sales,
        quarterly,
        products,
        users,
        categories,
        time_series,
        index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    struct FakeSource {
        failing: Option<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeSource {
        fn new(failing: Option<&'static str>) -> Self {
            FakeSource {
                failing,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    fn row(name: &str) -> Record {
        let mut record = Record::new();
        record.insert("source".to_string(), json!(name));
        record
    }

    impl DataSource for FakeSource {
        async fn dataset_rows(&self, name: &str) -> Result<Vec<Record>> {
            self.calls.borrow_mut().push(name.to_string());
            if self.failing == Some(name) {
                return Err(ApiError::Status {
                    status: 500,
                    detail: Some(format!("Dataset {} not found", name)),
                });
            }
            Ok(vec![row(name)])
        }

        async fn dataset_index(&self) -> Result<Vec<DatasetInfo>> {
            self.calls.borrow_mut().push("index".to_string());
            Ok(vec![DatasetInfo::new(SALES_DATA, 12)])
        }
    }

    #[test]
    fn test_all_requests_succeed() {
        let source = FakeSource::new(None);
        let snapshot = block_on(load_dashboard(&source)).unwrap();
        for name in DASHBOARD_DATASETS {
            assert_eq!(snapshot.rows(name), &[row(name)][..]);
        }
        assert_eq!(snapshot.index.len(), 1);
        assert_eq!(source.calls.borrow().len(), 7);
    }

    #[test]
    fn test_one_failure_fails_the_batch() {
        let source = FakeSource::new(Some(USER_DATA));
        let err = block_on(load_dashboard(&source)).unwrap_err();
        assert_eq!(err.detail(), Some("Dataset user_data not found"));
    }

    #[test]
    fn test_unknown_name_has_no_rows() {
        let snapshot = DashboardSnapshot::default();
        assert!(snapshot.rows("nope").is_empty());
    }
}
