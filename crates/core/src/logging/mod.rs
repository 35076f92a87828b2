//! Logger capability handed to the normalizer.

mod sink;

pub use sink::{LogFacadeSink, LogSink, MockLogSink, NoOpLogSink};
