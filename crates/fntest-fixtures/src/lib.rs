//! Testing utilities for FnTest workspace
//!
//! Shared functions under test, capture sinks, and tracing setup.

#![allow(missing_docs)]

use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

/// In-memory sink; tests read it back while a harness owns a clone
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, as UTF-8
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink whose writes always fail, for exercising best-effort reporting
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("division by zero")]
pub struct DivisionByZero;

pub fn triple(i: i32, j: i32) -> Vec<i32> {
    vec![1, i, j]
}

pub fn ten_over(x: i32) -> i32 {
    10 / x
}

pub fn checked_div(dividend: i32, divisor: i32) -> Result<i32, DivisionByZero> {
    if divisor == 0 {
        return Err(DivisionByZero);
    }
    Ok(dividend / divisor)
}

pub fn parse_decimal(text: String) -> Result<i64, std::num::ParseIntError> {
    text.trim().parse()
}

pub fn panics_with_message() -> i32 {
    panic!("boom")
}

pub fn panics_opaque() -> i32 {
    std::panic::panic_any(42_i32)
}

pub fn after_delay(delay_ms: u64, value: i32) -> i32 {
    thread::sleep(Duration::from_millis(delay_ms));
    value
}

/// Initialize tracing for integration tests; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
