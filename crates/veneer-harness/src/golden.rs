#![forbid(unsafe_code)]

//! Golden-output helpers: content checksums and JSONL run logs.
//!
//! Checksums cover displayed characters only (no styling), so two
//! renders that draw the same text are equal regardless of color. Run
//! logs emit one JSON object per line with a stable schema:
//!
//! ```json
//! {"event":"start","case":"combobox_open","timestamp_ms":171234}
//! {"event":"frame","frame_id":0,"width":80,"height":24,"checksum":"fnv:..."}
//! {"event":"complete","outcome":"pass","frames":1}
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::json;
use veneer_render::buffer::Buffer;

/// Checksum prefix for clarity in logs.
const CHECKSUM_PREFIX: &str = "fnv:";

/// Deterministic checksum of buffer content, characters only.
///
/// FNV-1a over dimensions and the character stream. Not cryptographic;
/// two runs are compared for equality, nothing more.
#[must_use]
pub fn buffer_checksum(buf: &Buffer) -> String {
    let mut hash = fnv1a_init();
    hash = fnv1a_u16(hash, buf.width());
    hash = fnv1a_u16(hash, buf.height());
    for cell in buf.cells() {
        let mut utf8 = [0u8; 4];
        for byte in cell.ch.encode_utf8(&mut utf8).as_bytes() {
            hash = fnv1a_byte(hash, *byte);
        }
    }
    format!("{CHECKSUM_PREFIX}{hash:016x}")
}

/// Deterministic checksum of a text string.
#[must_use]
pub fn text_checksum(text: &str) -> String {
    let mut hash = fnv1a_init();
    for byte in text.bytes() {
        hash = fnv1a_byte(hash, byte);
    }
    format!("{CHECKSUM_PREFIX}{hash:016x}")
}

const fn fnv1a_init() -> u64 {
    0xcbf2_9ce4_8422_2325
}

const fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(0x0000_0100_0000_01b3)
}

const fn fnv1a_u16(hash: u64, value: u16) -> u64 {
    let bytes = value.to_le_bytes();
    fnv1a_byte(fnv1a_byte(hash, bytes[0]), bytes[1])
}

/// JSONL run log for golden test cases.
pub struct RunLog<W: Write> {
    writer: W,
    frames: u64,
}

impl RunLog<BufWriter<File>> {
    /// Open a log file, truncating any previous run.
    ///
    /// # Errors
    ///
    /// Propagates file creation failures.
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> RunLog<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer, frames: 0 }
    }

    /// Emit the start record for a named case.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn start(&mut self, case: &str) -> io::Result<()> {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.write_line(&json!({
            "event": "start",
            "case": case,
            "timestamp_ms": timestamp_ms,
        }))
    }

    /// Emit a frame record with the buffer's checksum.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn frame(&mut self, buf: &Buffer) -> io::Result<()> {
        let record = json!({
            "event": "frame",
            "frame_id": self.frames,
            "width": buf.width(),
            "height": buf.height(),
            "checksum": buffer_checksum(buf),
        });
        self.frames += 1;
        self.write_line(&record)
    }

    /// Emit the completion record and flush.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn complete(&mut self, pass: bool) -> io::Result<()> {
        self.write_line(&json!({
            "event": "complete",
            "outcome": if pass { "pass" } else { "fail" },
            "frames": self.frames,
        }))?;
        self.writer.flush()
    }

    fn write_line(&mut self, value: &serde_json::Value) -> io::Result<()> {
        writeln!(self.writer, "{value}")
    }
}
