use thiserror::Error;

pub type Result<T> = std::result::Result<T, SparkError>;

#[derive(Debug, Error)]
pub enum SparkError {
    /// Unit, output and terminal belong to the renderer once it runs.
    #[error("sparkline stream was already started; configure it before calling start")]
    AlreadyStarted,

    #[error("cannot wrap stdout in a sparkline writer that also renders on stdout")]
    StdoutSink,
}
