//! Statistics for a compression or decompression run.
//!
//! Collected by the codec at each pipeline stage and reported by the CLI.
//!
//! # Thread Safety
//!
//! `CompressionStats` is plain data; each call builds its own.

use std::time::{Duration, Instant};

/// Sizes and timing of one codec call.
#[derive(Debug, Clone)]
pub struct CompressionStats {
    // === Timing ===
    /// When the call started
    pub start_time: Instant,

    /// When the call ended (set on completion)
    pub end_time: Option<Instant>,

    // === Model ===
    /// Raw (uncompressed) bytes
    pub input_bytes: u64,

    /// Frequency table entries, end-of-stream included
    pub distinct_symbols: usize,

    /// Longest code in the table
    pub max_code_len: usize,

    // === Artifact ===
    /// Fixed header plus frequency table
    pub header_bytes: u64,

    /// Body bits, end-of-stream code included
    pub body_bits: u64,

    /// Total artifact size
    pub artifact_bytes: u64,
}

impl CompressionStats {
    /// Create new stats with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_bytes: 0,
            distinct_symbols: 0,
            max_code_len: 0,
            header_bytes: 0,
            body_bits: 0,
            artifact_bytes: 0,
        }
    }

    /// Mark the call as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Body bytes after packing (last byte padded).
    pub fn body_bytes(&self) -> u64 {
        self.body_bits.div_ceil(8)
    }

    /// Compute compression ratio (artifact / raw).
    ///
    /// Returns 0.0 if the input was empty.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.artifact_bytes as f64 / self.input_bytes as f64
        }
    }

    /// Average body bits spent per input byte.
    pub fn bits_per_byte(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.body_bits as f64 / self.input_bytes as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();

        println!("=== Model ===");
        println!("Input: {} bytes", self.input_bytes);
        println!("Distinct symbols: {} (including EOF)", self.distinct_symbols);
        println!("Longest code: {} bits", self.max_code_len);
        println!();

        println!("=== Artifact ===");
        println!("Header: {} bytes", self.header_bytes);
        println!("Body: {} bits ({} bytes)", self.body_bits, self.body_bytes());
        println!("Total: {} bytes", self.artifact_bytes);
        println!("Ratio: {:.1}%", self.compression_ratio() * 100.0);
        println!("Bits per byte: {:.3}", self.bits_per_byte());
        println!();
    }

    /// Export stats as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             input_bytes={}\n\
             distinct_symbols={}\n\
             max_code_len={}\n\
             header_bytes={}\n\
             body_bits={}\n\
             artifact_bytes={}\n\
             compression_ratio={:.4}\n",
            self.duration().as_millis(),
            self.input_bytes,
            self.distinct_symbols,
            self.max_code_len,
            self.header_bytes,
            self.body_bits,
            self.artifact_bytes,
            self.compression_ratio(),
        )
    }
}

impl Default for CompressionStats {
    fn default() -> Self {
        Self::new()
    }
}
