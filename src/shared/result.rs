/// Result alias used across the crate; errors are `anyhow::Error`,
/// usually wrapping a [`GraphError`](crate::shared::error::GraphError).
pub type Result<T> = std::result::Result<T, anyhow::Error>;
