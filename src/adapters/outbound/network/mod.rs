/// Network adapters for remote inputs
mod http_fetcher;

pub use http_fetcher::HttpFetcher;
