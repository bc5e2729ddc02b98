//! Error taxonomy drivers must classify failures into.
//!
//! DB-API 2.0 exception hierarchy:
//! - `Warning`: non-fatal notice from the backend
//! - `InterfaceError`: contract misuse (e.g. operating on a closed resource)
//! - `DatabaseError` kinds, refined into:
//!   - `DataError`: value conversion issues
//!   - `OperationalError`: connection lost, timeout
//!   - `IntegrityError`: constraint violation
//!   - `InternalError`: unexpected internal error
//!   - `ProgrammingError`: SQL syntax, wrong table name
//!   - `NotSupportedError`: capability the backend declines
//!
//! This layer never catches or translates: every failure a backend raises
//! propagates unchanged to the caller. Optional capabilities must decline
//! with [`DriverError::NotSupported`] rather than silently succeeding, so
//! callers can tell "nothing to do" from "not offered".

use thiserror::Error;

/// Driver failure, tagged with one of the concrete taxonomy kinds.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Non-fatal warning raised by the backend.
    #[error("Warning: {0}")]
    Warning(String),

    /// Interface error (contract misuse, closed resource).
    #[error("InterfaceError: {0}")]
    Interface(String),

    /// Data error (value conversion issues).
    #[error("DataError: {0}")]
    Data(String),

    /// Operational error (connection lost, timeout).
    #[error("OperationalError: {0}")]
    Operational(String),

    /// Integrity error (constraint violation).
    #[error("IntegrityError: {0}")]
    Integrity(String),

    /// Internal error (unexpected backend state).
    #[error("InternalError: {0}")]
    Internal(String),

    /// Programming error (SQL syntax, wrong table name, misused cursor).
    #[error("ProgrammingError: {0}")]
    Programming(String),

    /// Not supported error (capability the backend declines).
    #[error("NotSupportedError: {0}")]
    NotSupported(String),
}

impl DriverError {
    /// Create a warning.
    #[must_use]
    pub fn warning(msg: impl Into<String>) -> Self {
        Self::Warning(msg.into())
    }

    /// Create an interface error.
    #[must_use]
    pub fn interface(msg: impl Into<String>) -> Self {
        Self::Interface(msg.into())
    }

    /// Create a data error.
    #[must_use]
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Create an operational error.
    #[must_use]
    pub fn operational(msg: impl Into<String>) -> Self {
        Self::Operational(msg.into())
    }

    /// Create an integrity error.
    #[must_use]
    pub fn integrity(msg: impl Into<String>) -> Self {
        Self::Integrity(msg.into())
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create a programming error.
    #[must_use]
    pub fn programming(msg: impl Into<String>) -> Self {
        Self::Programming(msg.into())
    }

    /// Create a not supported error.
    #[must_use]
    pub fn not_supported(msg: impl Into<String>) -> Self {
        Self::NotSupported(msg.into())
    }

    /// Interface error for an operation invoked on a closed resource.
    #[must_use]
    pub fn closed(resource: &str) -> Self {
        Self::Interface(format!("{resource} is closed"))
    }

    /// The taxonomy kind this failure is classified as.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Warning(_) => ErrorKind::Warning,
            Self::Interface(_) => ErrorKind::Interface,
            Self::Data(_) => ErrorKind::Data,
            Self::Operational(_) => ErrorKind::Operational,
            Self::Integrity(_) => ErrorKind::Integrity,
            Self::Internal(_) => ErrorKind::Internal,
            Self::Programming(_) => ErrorKind::Programming,
            Self::NotSupported(_) => ErrorKind::NotSupported,
        }
    }
}

/// Classification label for a raised failure.
///
/// Forms the shallow DB-API hierarchy: [`ErrorKind::Error`] is the super-kind
/// of everything except [`ErrorKind::Warning`]; [`ErrorKind::Database`] is the
/// super-kind of the six backend-reported kinds. [`ErrorKind::is_a`] performs
/// the isinstance-style check callers use to select recovery behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Non-fatal warning.
    Warning,
    /// Super-kind of every error (not warnings).
    Error,
    /// Contract misuse.
    Interface,
    /// Super-kind of backend-reported failures.
    Database,
    /// Value conversion issues.
    Data,
    /// Connection lost, timeout.
    Operational,
    /// Constraint violation.
    Integrity,
    /// Unexpected backend state.
    Internal,
    /// Statement or cursor misuse.
    Programming,
    /// Declined capability.
    NotSupported,
}

impl ErrorKind {
    /// The immediate super-kind, or `None` for hierarchy roots.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Warning | Self::Error => None,
            Self::Interface | Self::Database => Some(Self::Error),
            Self::Data
            | Self::Operational
            | Self::Integrity
            | Self::Internal
            | Self::Programming
            | Self::NotSupported => Some(Self::Database),
        }
    }

    /// Whether this kind is `other` or refines it, transitively.
    #[must_use]
    pub fn is_a(self, other: Self) -> bool {
        let mut kind = Some(self);
        while let Some(current) = kind {
            if current == other {
                return true;
            }
            kind = current.parent();
        }
        false
    }

    /// Whether this kind refines [`ErrorKind::Error`].
    #[must_use]
    pub fn is_error(self) -> bool {
        self.is_a(Self::Error)
    }

    /// Whether this kind refines [`ErrorKind::Database`].
    #[must_use]
    pub fn is_database_error(self) -> bool {
        self.is_a(Self::Database)
    }
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, DriverError>;
