//! Async connection capability set.

use async_trait::async_trait;

use crate::cursor::AsyncCursor;
use crate::transactions::AsyncClose;
use dbapi::Result;

/// The minimal operations any async database session must support.
///
/// Mirrors the synchronous `Connection` contract. One connection instance
/// is not safe for concurrent use from independently scheduled operations
/// unless the backend documents otherwise; the contract adds no locking.
#[async_trait]
pub trait AsyncConnection: AsyncClose {
    /// Cursor type produced by [`AsyncConnection::cursor`].
    type Cursor: AsyncCursor;

    /// Whether statements take effect immediately, outside transactions.
    fn autocommit(&self) -> bool;

    /// Change the autocommit policy.
    async fn set_autocommit(&mut self, autocommit: bool) -> Result<()>;

    /// Create a new cursor bound to this connection.
    ///
    /// Once the connection is closed, cursors created from it are invalid
    /// for further use.
    async fn cursor(&mut self) -> Result<Self::Cursor>;

    /// Make all changes since the last commit or rollback durable.
    async fn commit(&mut self) -> Result<()>;

    /// Discard all changes since the last commit or rollback.
    ///
    /// Backends without transaction support must fail with a
    /// `NotSupportedError` kind rather than silently succeed.
    async fn rollback(&mut self) -> Result<()>;
}
