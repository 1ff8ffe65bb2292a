use serde::{Deserialize, Serialize};

/// An arbitrarily nested container. Leaves are never unpacked further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(list: Vec<Nested<T>>) -> Self {
        Nested::List(list)
    }
}

/// Aggregated timings of repeated calls, all in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation; 0.0 for a single run.
    pub sd: f64,
    pub total: f64,
    pub raw_times: Vec<f64>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
