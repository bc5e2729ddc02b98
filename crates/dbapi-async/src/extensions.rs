//! Async mirror of the optional composable mixins.

use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::{self, BoxStream};

use crate::connection::AsyncConnection;
use crate::cursor::AsyncCursor;
use dbapi::{ErrorKind, Parameters, Result, Row};

/// The full error taxonomy, reachable from any async connection type.
pub trait AsyncConnectionErrors: AsyncConnection {
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

impl<C: AsyncConnection + ?Sized> AsyncConnectionErrors for C {}

/// An async cursor that can reach back to the connection that created it.
///
/// The implementer's [`AsyncConnection::cursor`] must wire the
/// back-reference at creation time.
pub trait AsyncCursorWithConnection: AsyncCursor {
    /// The owning connection's type.
    type Connection;

    /// The connection that created this cursor.
    fn connection(&self) -> &Self::Connection;

    /// Mutable access to the owning connection, for delegation.
    fn connection_mut(&mut self) -> &mut Self::Connection;
}

/// Execute statements directly on an async connection.
///
/// Creates a transient cursor, delegates, and hands the cursor back.
#[async_trait]
pub trait AsyncConnectionExecute: AsyncConnection {
    /// Execute one statement on a fresh cursor and return that cursor.
    async fn execute(
        &mut self,
        operation: &str,
        parameters: Option<Parameters>,
    ) -> Result<Self::Cursor> {
        let mut cursor = self.cursor().await?;
        cursor.execute(operation, parameters).await?;
        Ok(cursor)
    }

    /// Execute a statement once per parameter set on a fresh cursor.
    async fn executemany(
        &mut self,
        operation: &str,
        seq_of_parameters: &[Parameters],
    ) -> Result<Self::Cursor> {
        let mut cursor = self.cursor().await?;
        cursor.executemany(operation, seq_of_parameters).await?;
        Ok(cursor)
    }
}

impl<C: AsyncConnection> AsyncConnectionExecute for C {}

/// Lazy, forward-only, single-pass stream over the remaining rows.
///
/// Built purely on repeated `fetchone`. Fused: after exhaustion or a fetch
/// error it yields nothing further rather than raising again; restarting
/// requires a new execute.
pub fn row_stream<C>(cursor: &mut C) -> BoxStream<'_, Result<Row>>
where
    C: AsyncCursor,
{
    stream::unfold(Some(cursor), |state| async move {
        let cursor = state?;
        match cursor.fetchone().await {
            Ok(Some(row)) => Some((Ok(row), Some(cursor))),
            Ok(None) => None,
            Err(err) => Some((Err(err), None)),
        }
    })
    .fuse()
    .boxed()
}

/// Transaction control from the async cursor level.
///
/// Delegates to the owning connection via the back-reference, so the
/// observable effect is identical to calling the connection directly.
#[async_trait]
pub trait AsyncTransactionalCursor: AsyncCursorWithConnection
where
    Self::Connection: AsyncConnection,
{
    /// Commit on the owning connection.
    async fn commit(&mut self) -> Result<()> {
        self.connection_mut().commit().await
    }

    /// Roll back on the owning connection.
    async fn rollback(&mut self) -> Result<()> {
        self.connection_mut().rollback().await
    }
}

impl<C> AsyncTransactionalCursor for C
where
    C: AsyncCursorWithConnection,
    C::Connection: AsyncConnection,
{
}
