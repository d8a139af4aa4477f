use thiserror::Error;

/// A form submission rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a dataset name")]
    MissingName,
    #[error("Please enter a dataset name first")]
    MissingUploadName,
    #[error("Please select a CSV file")]
    MissingFile,
    #[error("Only one file can be uploaded at a time")]
    TooManyFiles,
    #[error("{0} is not a .csv file")]
    NotCsv(String),
    #[error("Please select a dataset")]
    MissingDataset,
    #[error("Width and height must be positive")]
    InvalidSize,
}
