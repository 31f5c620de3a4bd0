//! Browser console logging

use crate::error::{FrontendError, FrontendResult};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Install a subscriber writing to the browser console
pub fn init() -> FrontendResult<()> {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(level)
        .with(fmt_layer)
        .try_init()
        .map_err(|_| FrontendError::Logging)
}
