//! A sheet codec with injectable failures.

use crate::codec::{Row, SheetCodec};
use crate::error::{SheetError, SheetResult};
use crate::xlsx::XlsxCodec;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
struct Faults {
    encode_error: Option<String>,
    decode_error: Option<String>,
}

/// An `.xlsx` codec that fails on demand.
///
/// Without faults it behaves exactly like [`XlsxCodec`].
#[derive(Debug, Default)]
pub struct MockCodec {
    inner: XlsxCodec,
    faults: Mutex<Faults>,
    encode_calls: AtomicUsize,
    decode_calls: AtomicUsize,
}

impl MockCodec {
    /// Creates a new mock codec with no faults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every `encode` call fail with `message`, or clears the fault.
    pub fn set_encode_failure(&self, message: Option<&str>) {
        self.faults.lock().encode_error = message.map(str::to_string);
    }

    /// Makes every `decode` call fail with `message`, or clears the fault.
    pub fn set_decode_failure(&self, message: Option<&str>) {
        self.faults.lock().decode_error = message.map(str::to_string);
    }

    /// Returns the number of encode calls seen so far.
    #[must_use]
    pub fn encode_calls(&self) -> usize {
        self.encode_calls.load(Ordering::SeqCst)
    }

    /// Returns the number of decode calls seen so far.
    #[must_use]
    pub fn decode_calls(&self) -> usize {
        self.decode_calls.load(Ordering::SeqCst)
    }
}

impl SheetCodec for MockCodec {
    fn encode(&self, rows: &[Row]) -> SheetResult<Vec<u8>> {
        self.encode_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.faults.lock().encode_error {
            return Err(SheetError::encoding_failed(message.clone()));
        }
        self.inner.encode(rows)
    }

    fn decode(&self, bytes: &[u8]) -> SheetResult<Vec<Row>> {
        self.decode_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.faults.lock().decode_error {
            return Err(SheetError::decoding_failed(message.clone()));
        }
        self.inner.decode(bytes)
    }
}
