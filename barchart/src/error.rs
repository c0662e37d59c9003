use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write bar chart")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("bar chart needs {buckets} rows, more than the limit of {limit}")]
    TooManyBuckets { buckets: usize, limit: usize },
}
