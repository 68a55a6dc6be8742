//! Call tracing for builtins.
//!
//! Records every call into a registered builtin when enabled, with zero
//! work beyond a flag check when disabled. Records are kept in a bounded
//! ring buffer and may be echoed to stderr as they happen.
//!
//! # Example
//!
//! ```
//! use tessera_stdlib::trace::{Tracer, TracerConfig};
//!
//! let mut tracer = Tracer::new(TracerConfig::new().enabled());
//! tracer.call("math.abs", 1);
//! assert_eq!(tracer.buffer().len(), 1);
//! ```

pub mod buffer;
pub mod format;
pub mod record;
pub mod traced;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};
pub use traced::{SharedTracer, Traced};

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;

use tessera_foundation::{CallError, Object};

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (traces still recorded in buffer).
    #[default]
    None,
    /// Write each record to stderr as it is recorded.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
    /// Filter for specific event types (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10000,
            output: TraceOutput::None,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to filter event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records builtin call events.
///
/// The `record` method returns immediately if tracing is off.
#[derive(Debug)]
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    start_time: Instant,
    formatter: HumanFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            start_time: Instant::now(),
            formatter: HumanFormatter::new().with_timestamps(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that outputs to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// Wraps the tracer for sharing between builtins.
    #[must_use]
    pub fn shared(self) -> SharedTracer {
        Arc::new(std::sync::Mutex::new(self))
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Sets the trace output destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    /// Records a trace event.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }

        self.record_internal(event);
    }

    fn record_internal(&mut self, event: TraceEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|t| t == event.event_type())
        {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        self.buffer.push(timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last() {
                let line = self.formatter.format(record);
                let _ = writeln!(io::stderr(), "{line}");
            }
        }
    }

    /// Formats a record with the tracer's formatter.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        self.formatter.format(record)
    }

    /// Formats multiple records.
    #[must_use]
    pub fn format_records(&self, records: &[&TraceRecord]) -> String {
        self.formatter.format_many(records)
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }

    // -------------------------------------------------------------------------
    // Convenience methods for common events
    // -------------------------------------------------------------------------

    /// Records that `function` is being called with `arg_count` arguments.
    #[inline]
    pub fn call(&mut self, function: impl Into<Arc<str>>, arg_count: usize) {
        if self.is_enabled() {
            self.record(TraceEvent::Call {
                function: function.into(),
                arg_count,
            });
        }
    }

    /// Records the object `function` returned.
    ///
    /// Error objects are recorded as [`TraceEvent::ErrorValue`].
    #[inline]
    pub fn returned(&mut self, function: impl Into<Arc<str>>, result: &Object) {
        if !self.is_enabled() {
            return;
        }
        let function = function.into();
        let event = match result.error_payload() {
            Some(payload) => TraceEvent::ErrorValue {
                function,
                message: payload
                    .as_str()
                    .map_or_else(|| payload.to_string(), str::to_owned),
            },
            None => TraceEvent::Returned {
                function,
                kind: result.kind(),
            },
        };
        self.record(event);
    }

    /// Records that a call to `function` was rejected.
    #[inline]
    pub fn rejected(&mut self, function: impl Into<Arc<str>>, reason: &CallError) {
        if self.is_enabled() {
            self.record(TraceEvent::Rejected {
                function: function.into(),
                reason: reason.clone(),
            });
        }
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

// =============================================================================
// Tests
// =============================================================================
