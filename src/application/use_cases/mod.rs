/// Use cases module containing application business logic orchestration
mod generate_graph;

pub use generate_graph::{GenerateGraphUseCase, DEFAULT_STYLESHEET};
