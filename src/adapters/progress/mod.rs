//! Progress Reporter Adapters
//!
//! - **TracingProgressReporter** - Logs progress through `tracing`
//! - **ChannelProgressReporter** - Streams progress to an async receiver

mod channel_reporter;
mod tracing_reporter;

pub use channel_reporter::ChannelProgressReporter;
pub use tracing_reporter::TracingProgressReporter;
