//! Connection capability set.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::transactions::Close;

/// The minimal operations any database session must support.
///
/// A connection may be shared by the cursors it creates, through whatever
/// interior sharing the implementer chooses; the contract itself provides no
/// locking, and one connection instance is not safe for concurrent use
/// unless the backend documents otherwise.
pub trait Connection: Close {
    /// Cursor type produced by [`Connection::cursor`].
    type Cursor: Cursor;

    /// Whether statements take effect immediately, outside transactions.
    fn autocommit(&self) -> bool;

    /// Change the autocommit policy.
    ///
    /// Fails with an `InterfaceError` kind on a closed connection; backends
    /// without the capability decline with a `NotSupportedError` kind.
    fn set_autocommit(&mut self, autocommit: bool) -> Result<()>;

    /// Create a new cursor bound to this connection.
    ///
    /// The contract allows unlimited concurrent cursors per connection;
    /// concrete backends may restrict this. Once the connection is closed,
    /// cursors created from it are invalid for further use.
    fn cursor(&mut self) -> Result<Self::Cursor>;

    /// Make all changes since the last commit or rollback durable.
    ///
    /// Safe to call when no backend transaction is open, per backend
    /// semantics.
    fn commit(&mut self) -> Result<()>;

    /// Discard all changes since the last commit or rollback.
    ///
    /// Transaction support is a capability a backend may decline: backends
    /// without it must fail with a `NotSupportedError` kind rather than
    /// silently succeed, so callers can tell "nothing to do" from "not
    /// offered".
    fn rollback(&mut self) -> Result<()>;
}
