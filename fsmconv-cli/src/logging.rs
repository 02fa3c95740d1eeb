//! Log system initialization
//!
//! `tracing-subscriber` with per-module targets. Logs go to stderr; stdout
//! carries the serialized automaton.

use std::io;

use tracing::Level;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// Initialize the subscriber from the `-v` count.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let targets = Targets::new()
        .with_default(level)
        .with_target("fsmconv::reader", level)
        .with_target("fsmconv::writer", level)
        .with_target("fsmconv::epsilon", level)
        .with_target("fsmconv::determinize", level);

    let stderr_layer = fmt::layer()
        .compact()
        .with_target(true)
        .without_time()
        .with_writer(io::stderr)
        .with_filter(targets);

    tracing_subscriber::registry().with(stderr_layer).init();
}
