use isle_core::IsleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("island configuration error: {0}")]
    Config(#[from] IsleError),

    #[error("failed to spawn {worker}: {source}")]
    Spawn {
        worker: String,
        #[source]
        source: std::io::Error,
    },

    /// A passenger, ship or ambient thread panicked.  Never retried.
    #[error("worker {0} panicked")]
    WorkerPanicked(String),
}

pub type SimResult<T> = Result<T, SimError>;
