use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Core(#[from] routegraph_core::Error),
    #[error("Routes have not been compiled into a graph yet")]
    NotCompiled,
    #[error("Both source and destination must be selected first")]
    SelectionIncomplete,
}
