//! Graph and loader error types.

use thiserror::Error;

use crate::Role;

/// Structural errors raised while building a [`Colony`](crate::Colony).
///
/// These are enforced by the builder itself, whatever front end drives it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("room '{0}' is not declared")]
    UnknownRoom(String),

    #[error("{role} room declared twice ('{existing}' then '{duplicate}')")]
    DuplicateRole {
        role:      Role,
        existing:  String,
        duplicate: String,
    },

    #[error("invalid tunnel {a}-{b}: {reason}")]
    InvalidTunnel {
        a:      String,
        b:      String,
        reason: &'static str,
    },

    #[error("invalid room name '{name}': {reason}")]
    InvalidRoomName {
        name:   String,
        reason: &'static str,
    },

    #[error("no {0} room declared")]
    MissingRole(Role),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised by the text loader.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,

    #[error("line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    #[error("line {line}: {source}")]
    Graph {
        line:   usize,
        #[source]
        source: GraphError,
    },

    #[error(transparent)]
    Incomplete(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ParseResult<T> = Result<T, ParseError>;
