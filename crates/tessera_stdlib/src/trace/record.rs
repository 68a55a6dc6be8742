//! Trace event and record types.
//!
//! This module defines the events recorded around builtin calls.

use std::sync::Arc;

use tessera_foundation::{CallError, ObjectKind};

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced during a builtin call.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent {
    /// A builtin is about to be invoked.
    Call {
        /// The builtin's registered name.
        function: Arc<str>,
        /// Number of arguments supplied.
        arg_count: usize,
    },

    /// A builtin returned a non-error object.
    Returned {
        /// The builtin's registered name.
        function: Arc<str>,
        /// Kind of the returned object.
        kind: ObjectKind,
    },

    /// A builtin returned an error object.
    ErrorValue {
        /// The builtin's registered name.
        function: Arc<str>,
        /// The error payload, rendered for display.
        message: String,
    },

    /// The call was rejected before the native function ran.
    Rejected {
        /// The builtin's registered name.
        function: Arc<str>,
        /// Why the arguments did not fit.
        reason: CallError,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Call { .. } => "call",
            Self::Returned { .. } => "returned",
            Self::ErrorValue { .. } => "error-value",
            Self::Rejected { .. } => "rejected",
        }
    }

    /// Returns the name of the builtin the event concerns.
    #[must_use]
    pub fn function(&self) -> &str {
        match self {
            Self::Call { function, .. }
            | Self::Returned { function, .. }
            | Self::ErrorValue { function, .. }
            | Self::Rejected { function, .. } => function,
        }
    }

    /// Returns true if the call failed on either error channel.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::ErrorValue { .. } | Self::Rejected { .. })
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Unique record ID within the session.
    pub id: u64,
    /// Timestamp in nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The trace event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Tests
// =============================================================================
