//! Error types for the summary pipeline
//!
//! Every failure of a read -> aggregate -> write run maps onto one of the
//! [`Phase`]s below. Errors are terminal for the run they occur in: nothing
//! is written and nothing is retried.

use std::fmt;
use std::io;
use thiserror::Error;

/// Placeholder location for errors raised before the input is named
pub const UNNAMED_INPUT: &str = "input";

/// Placeholder location for errors raised before the output is named
pub const UNNAMED_OUTPUT: &str = "output";

/// Result type for summary pipeline operations
pub type SummaryResult<T> = Result<T, SummaryError>;

/// The pipeline phase an error occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Read,
    Decode,
    Encode,
    Write,
    PollQuery,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Read => "read",
            Phase::Decode => "decode",
            Phase::Encode => "encode",
            Phase::Write => "write",
            Phase::PollQuery => "poll",
        };
        f.write_str(name)
    }
}

/// Summary pipeline error types
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Input could not be read
    #[error("failed to read input {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: io::Error,
    },

    /// Input is not a well-formed array of event records
    #[error("failed to decode events from {location}: {source}")]
    Decode {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// Timestamp cannot be placed on a calendar day
    #[error("event {index} in {location} has timestamp {timestamp} outside the supported calendar range")]
    TimestampOutOfRange {
        location: String,
        index: usize,
        timestamp: i64,
    },

    /// Event type would shadow one of the fixed summary fields
    #[error("event {index} in {location} uses reserved event type `{event_type}`")]
    ReservedEventType {
        location: String,
        index: usize,
        event_type: String,
    },

    /// Summary records could not be serialized
    #[error("failed to encode summaries for {location}: {source}")]
    Encode {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// Output could not be written
    #[error("failed to write output {location}: {source}")]
    Write {
        location: String,
        #[source]
        source: io::Error,
    },

    /// Modification time of the input could not be queried
    #[error("failed to check modification time of {location}: {source}")]
    PollQuery {
        location: String,
        #[source]
        source: io::Error,
    },
}

impl SummaryError {
    pub fn read<L: fmt::Display>(location: L, source: io::Error) -> Self {
        Self::Read {
            location: location.to_string(),
            source,
        }
    }

    pub fn write<L: fmt::Display>(location: L, source: io::Error) -> Self {
        Self::Write {
            location: location.to_string(),
            source,
        }
    }

    pub fn poll_query<L: fmt::Display>(location: L, source: io::Error) -> Self {
        Self::PollQuery {
            location: location.to_string(),
            source,
        }
    }

    pub fn decode(source: serde_json::Error) -> Self {
        Self::Decode {
            location: UNNAMED_INPUT.to_string(),
            source,
        }
    }

    pub fn encode(source: serde_json::Error) -> Self {
        Self::Encode {
            location: UNNAMED_OUTPUT.to_string(),
            source,
        }
    }

    /// Attach the real input and output locations to errors raised by the
    /// byte-level aggregation, which never sees either
    pub fn located(mut self, input: &str, output: &str) -> Self {
        match &mut self {
            Self::Decode { location, .. }
            | Self::TimestampOutOfRange { location, .. }
            | Self::ReservedEventType { location, .. } => *location = input.to_string(),
            Self::Encode { location, .. } => *location = output.to_string(),
            Self::Read { .. } | Self::Write { .. } | Self::PollQuery { .. } => {}
        }
        self
    }

    /// Phase of the pipeline this error belongs to
    pub fn phase(&self) -> Phase {
        match self {
            Self::Read { .. } => Phase::Read,
            Self::Decode { .. }
            | Self::TimestampOutOfRange { .. }
            | Self::ReservedEventType { .. } => Phase::Decode,
            Self::Encode { .. } => Phase::Encode,
            Self::Write { .. } => Phase::Write,
            Self::PollQuery { .. } => Phase::PollQuery,
        }
    }
}
