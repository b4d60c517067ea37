pub mod scorer_client;

pub use scorer_client::HttpScorer;
