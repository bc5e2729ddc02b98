//! Optional, composable behaviors layered onto the base capability sets.
//!
//! Each mixin is expressible purely in terms of the base traits' public
//! operations, so they compose as blanket extension traits and wrapper
//! types rather than inheritance:
//!
//! - [`ConnectionErrors`]: the error taxonomy as associated consts on every
//!   connection
//! - [`CursorWithConnection`]: back-reference from a cursor to its owner
//! - [`ConnectionExecute`]: execute directly on a connection via a
//!   transient cursor
//! - [`IterableCursor`] / [`RowIter`]: lazy single-pass row iteration over
//!   `fetchone`
//! - [`TransactionalCursor`]: transaction control from the cursor level

use std::fmt;
use std::iter::FusedIterator;

use crate::connection::Connection;
use crate::cursor::Cursor;
use crate::error::{ErrorKind, Result};
use crate::types::{Parameters, Row};

/// The full error taxonomy, reachable from any connection type.
///
/// Lets callers name kinds off the connection they hold, e.g.
/// `C::INTEGRITY_ERROR`, without importing [`ErrorKind`] separately. Pure
/// forwarding of a compile-time-fixed set; no state.
pub trait ConnectionErrors: Connection {
    /// Non-fatal warning.
    const WARNING: ErrorKind = ErrorKind::Warning;
    /// Super-kind of every error.
    const ERROR: ErrorKind = ErrorKind::Error;
    /// Contract misuse.
    const INTERFACE_ERROR: ErrorKind = ErrorKind::Interface;
    /// Super-kind of backend-reported failures.
    const DATABASE_ERROR: ErrorKind = ErrorKind::Database;
    /// Value conversion issues.
    const DATA_ERROR: ErrorKind = ErrorKind::Data;
    /// Connection lost, timeout.
    const OPERATIONAL_ERROR: ErrorKind = ErrorKind::Operational;
    /// Constraint violation.
    const INTEGRITY_ERROR: ErrorKind = ErrorKind::Integrity;
    /// Unexpected backend state.
    const INTERNAL_ERROR: ErrorKind = ErrorKind::Internal;
    /// Statement or cursor misuse.
    const PROGRAMMING_ERROR: ErrorKind = ErrorKind::Programming;
    /// Declined capability.
    const NOT_SUPPORTED_ERROR: ErrorKind = ErrorKind::NotSupported;
}

impl<C: Connection + ?Sized> ConnectionErrors for C {}

/// A cursor that can reach back to the connection that created it.
///
/// The implementer's [`Connection::cursor`] must wire the back-reference at
/// creation time. [`CursorWithConnection::connection`] is the read-only view
/// of the contract; the `mut` accessor exists so delegating mixins such as
/// [`TransactionalCursor`] have something to drive.
pub trait CursorWithConnection: Cursor {
    /// The owning connection's type.
    type Connection;

    /// The connection that created this cursor.
    fn connection(&self) -> &Self::Connection;

    /// Mutable access to the owning connection, for delegation.
    fn connection_mut(&mut self) -> &mut Self::Connection;
}

/// Execute statements directly on a connection.
///
/// A convenience composition, not a new capability: creates a transient
/// cursor, delegates, and hands the cursor back for fetching.
pub trait ConnectionExecute: Connection {
    /// Execute one statement on a fresh cursor and return that cursor.
    fn execute(&mut self, operation: &str, parameters: Option<Parameters>) -> Result<Self::Cursor> {
        let mut cursor = self.cursor()?;
        cursor.execute(operation, parameters)?;
        Ok(cursor)
    }

    /// Execute a statement once per parameter set on a fresh cursor.
    fn executemany(
        &mut self,
        operation: &str,
        seq_of_parameters: &[Parameters],
    ) -> Result<Self::Cursor> {
        let mut cursor = self.cursor()?;
        cursor.executemany(operation, seq_of_parameters)?;
        Ok(cursor)
    }
}

impl<C: Connection> ConnectionExecute for C {}

/// Row iteration over any cursor.
pub trait IterableCursor: Cursor {
    /// Next row or `None` at exhaustion; alias of [`Cursor::fetchone`].
    fn next_row(&mut self) -> Result<Option<Row>> {
        self.fetchone()
    }

    /// Lazy, forward-only, single-pass iterator over the remaining rows.
    ///
    /// Terminates at exhaustion and stays exhausted; restarting requires a
    /// new execute.
    fn rows(&mut self) -> RowIter<'_, Self> {
        RowIter {
            cursor: self,
            done: false,
        }
    }
}

impl<C: Cursor + ?Sized> IterableCursor for C {}

/// Iterator produced by [`IterableCursor::rows`].
///
/// Built purely on repeated `fetchone`. Fused: after exhaustion or a fetch
/// error it yields nothing further rather than raising again.
pub struct RowIter<'c, C: Cursor + ?Sized> {
    cursor: &'c mut C,
    done: bool,
}

impl<C: Cursor + ?Sized> Iterator for RowIter<'_, C> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.cursor.fetchone() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<C: Cursor + ?Sized> FusedIterator for RowIter<'_, C> {}

impl<C: Cursor + ?Sized> fmt::Debug for RowIter<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowIter")
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

/// Transaction control from the cursor level.
///
/// For callers that conceptually operate transactions where they execute.
/// Delegates to the owning connection via the back-reference, so the
/// observable effect is identical to calling the connection directly.
pub trait TransactionalCursor: CursorWithConnection
where
    Self::Connection: Connection,
{
    /// Commit on the owning connection.
    fn commit(&mut self) -> Result<()> {
        self.connection_mut().commit()
    }

    /// Roll back on the owning connection.
    fn rollback(&mut self) -> Result<()> {
        self.connection_mut().rollback()
    }
}

impl<C> TransactionalCursor for C
where
    C: CursorWithConnection + ?Sized,
    C::Connection: Connection,
{
}
