pub mod commands;
pub mod display;
pub mod numeric;
pub mod parallel;
pub mod rate_limit;
pub mod sequence;
pub mod text;
pub mod timing;
pub mod types;
