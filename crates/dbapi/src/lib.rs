//! Abstract DB-API 2.0 style contract for database driver implementers.
//!
//! This crate is a specification-as-code layer: it defines the capability
//! sets a driver must supply ([`Connection`], [`Cursor`]), optional mixins
//! built purely on those capability sets, scoped acquisition helpers, and
//! the error taxonomy every driver classifies failures into. There is no
//! engine, no protocol, and no storage here; a concrete backend implements
//! the traits, and this crate's only runtime behavior is the mixin logic
//! and the default method bodies that delegate between capability-set
//! members.
//!
//! # Example
//!
//! ```rust,ignore
//! use dbapi::{Connection, Cursor, IterableCursor, Scoped};
//!
//! let mut conn = Scoped::new(my_backend_connection);
//! let mut cursor = conn.cursor()?;
//! cursor.execute("SELECT id, name FROM users", None)?;
//! for row in cursor.rows() {
//!     let row = row?;
//!     // ...
//! }
//! conn.commit()?;
//! ```
//!
//! The asynchronous mirror of this contract lives in the `dbapi-async`
//! crate.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod connection;
pub mod cursor;
pub mod error;
pub mod extensions;
pub mod transactions;
pub mod types;

// Re-export main types for convenience
pub use connection::Connection;
pub use cursor::Cursor;
pub use error::{DriverError, ErrorKind, Result};
pub use extensions::{
    ConnectionErrors, ConnectionExecute, CursorWithConnection, IterableCursor, RowIter,
    TransactionalCursor,
};
pub use transactions::{Close, Scoped, scoped, transaction};
pub use types::{ColumnDescription, Parameters, Row, Rows, Value};
