//! Asynchronous mirror of the `dbapi` driver contract.
//!
//! Structurally identical capability sets and mixins, with every operation
//! that can block on I/O (execute, fetch, commit, rollback, close, cursor
//! creation) redefined as a suspending operation. Purely local accessors
//! (`is_open`, `description`, `rowcount`, `arraysize`) stay synchronous.
//!
//! # Scheduling model
//!
//! Single-threaded cooperative: suspension occurs only at the boundary
//! operations, never mid-computation, and no implicit parallelism is
//! introduced. No ordering guarantee exists between two independently
//! scheduled operations against the same connection; serializing concurrent
//! use of one connection or cursor is the caller's or the backend's
//! responsibility.
//!
//! # Cancellation
//!
//! Cancelling an in-flight suspending operation is the concrete backend's
//! responsibility. Once cancelled, the resource's state is backend-defined,
//! but a subsequent [`AsyncClose::close`] must still succeed or fail
//! cleanly so [`transactions::scoped`] acquisition cannot leak.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod connection;
pub mod cursor;
pub mod extensions;
pub mod transactions;

// Re-export main types for convenience
pub use connection::AsyncConnection;
pub use cursor::AsyncCursor;
pub use extensions::{
    AsyncConnectionErrors, AsyncConnectionExecute, AsyncCursorWithConnection,
    AsyncTransactionalCursor, row_stream,
};
pub use transactions::{AsyncClose, scoped, transaction};

// The taxonomy and value model are shared with the synchronous contract.
pub use dbapi::{ColumnDescription, DriverError, ErrorKind, Parameters, Result, Row, Rows, Value};
