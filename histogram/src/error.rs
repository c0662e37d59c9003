use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write histogram")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
