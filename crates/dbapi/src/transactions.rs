//! Scoped acquisition and transaction scopes.
//!
//! Connections and cursors share one lifecycle shape: OPEN at creation,
//! CLOSED after [`Close::close`], and CLOSED is terminal. [`Scoped`] and
//! [`scoped`] guarantee the transition happens exactly once on every exit
//! path; [`transaction`] adds commit-on-success / rollback-on-failure on
//! top of a connection.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::connection::Connection;
use crate::error::Result;

/// The lifecycle half of the contract, shared by connections and cursors.
pub trait Close {
    /// Whether the resource is still usable.
    fn is_open(&self) -> bool;

    /// Release the resource.
    ///
    /// Closing is idempotent: a second call is a no-op returning `Ok(())`.
    /// Every other operation on a closed resource fails with an
    /// `InterfaceError` kind.
    fn close(&mut self) -> Result<()>;
}

/// Owning guard that closes the resource when the scope ends.
///
/// Closes exactly once: either through [`Scoped::close`], which surfaces the
/// backend error, or on drop, where a failure is logged and swallowed since
/// drop has nowhere to report it.
pub struct Scoped<T: Close> {
    inner: T,
    released: bool,
}

impl<T: Close> Scoped<T> {
    /// Take ownership of `inner` and close it when the guard goes away.
    pub const fn new(inner: T) -> Self {
        Self {
            inner,
            released: false,
        }
    }

    /// Close the resource now, propagating the backend error.
    pub fn close(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        self.inner.close()
    }
}

impl<T: Close> Deref for Scoped<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: Close> DerefMut for Scoped<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: Close> Drop for Scoped<T> {
    fn drop(&mut self) {
        if !self.released {
            if let Err(err) = self.inner.close() {
                tracing::warn!(error = %err, "close at scope exit failed");
            }
        }
    }
}

impl<T: Close + fmt::Debug> fmt::Debug for Scoped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scoped")
            .field("inner", &self.inner)
            .field("released", &self.released)
            .finish()
    }
}

/// Run `body` against `resource`, then close it on every exit path.
///
/// A body failure wins over a close failure; the close failure is then only
/// logged. On a successful body, a close failure is the result.
pub fn scoped<T, R, F>(mut resource: T, body: F) -> Result<R>
where
    T: Close,
    F: FnOnce(&mut T) -> Result<R>,
{
    let outcome = body(&mut resource);
    match resource.close() {
        Ok(()) => outcome,
        Err(close_err) => match outcome {
            Ok(_) => Err(close_err),
            Err(err) => {
                tracing::warn!(error = %close_err, "close after failed scope body also failed");
                Err(err)
            }
        },
    }
}

/// Run `body` in a transaction scope: commit on success, roll back on failure.
///
/// The body's error propagates unchanged; a rollback failure on that path is
/// logged, never raised, so the caller sees the original cause. Does not
/// close the connection; compose with [`Scoped`] or [`scoped`] for that.
pub fn transaction<C, R, F>(conn: &mut C, body: F) -> Result<R>
where
    C: Connection + ?Sized,
    F: FnOnce(&mut C) -> Result<R>,
{
    match body(conn) {
        Ok(value) => {
            conn.commit()?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = conn.rollback() {
                tracing::warn!(error = %rollback_err, "rollback after failed transaction body failed");
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::cursor::Cursor;
    use crate::error::DriverError;
    use crate::types::{ColumnDescription, Parameters, Row};

    #[derive(Debug)]
    struct Probe {
        closes: Arc<AtomicUsize>,
        open: bool,
        fail_close: bool,
    }

    impl Probe {
        fn new(closes: Arc<AtomicUsize>) -> Self {
            Self {
                closes,
                open: true,
                fail_close: false,
            }
        }
    }

    impl Close for Probe {
        fn is_open(&self) -> bool {
            self.open
        }

        fn close(&mut self) -> Result<()> {
            self.open = false;
            self.closes.fetch_add(1, Ordering::Relaxed);
            if self.fail_close {
                return Err(DriverError::operational("close failed"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_scoped_guard_closes_once_on_drop() {
        let closes = Arc::new(AtomicUsize::new(0));
        {
            let guard = Scoped::new(Probe::new(Arc::clone(&closes)));
            assert!(guard.is_open());
        }
        assert_eq!(closes.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_scoped_guard_explicit_close_skips_drop_close() {
        let closes = Arc::new(AtomicUsize::new(0));
        {
            let mut guard = Scoped::new(Probe::new(Arc::clone(&closes)));
            guard.close().unwrap();
            guard.close().unwrap();
        }
        assert_eq!(closes.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_scoped_fn_closes_on_success_and_failure() {
        let closes = Arc::new(AtomicUsize::new(0));

        let ok: Result<u8> = scoped(Probe::new(Arc::clone(&closes)), |_| Ok(1));
        assert_eq!(ok.unwrap(), 1);
        assert_eq!(closes.load(Ordering::Relaxed), 1);

        let err: Result<u8> = scoped(Probe::new(Arc::clone(&closes)), |_| {
            Err(DriverError::programming("bad statement"))
        });
        assert!(matches!(err, Err(DriverError::Programming(_))));
        assert_eq!(closes.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_scoped_fn_body_error_wins_over_close_error() {
        let closes = Arc::new(AtomicUsize::new(0));
        let mut probe = Probe::new(Arc::clone(&closes));
        probe.fail_close = true;

        let err: Result<u8> = scoped(probe, |_| Err(DriverError::integrity("duplicate")));
        assert!(matches!(err, Err(DriverError::Integrity(_))));
    }

    #[derive(Debug, Default)]
    struct TxnConn {
        commits: usize,
        rollbacks: usize,
        open: bool,
    }

    #[derive(Debug)]
    struct NoRowsCursor;

    impl Close for NoRowsCursor {
        fn is_open(&self) -> bool {
            true
        }

        fn close(&mut self) -> Result<()> {
            Ok(())
        }
    }

    impl Cursor for NoRowsCursor {
        fn description(&self) -> Option<&[ColumnDescription]> {
            None
        }

        fn rowcount(&self) -> i64 {
            -1
        }

        fn arraysize(&self) -> usize {
            1
        }

        fn set_arraysize(&mut self, _size: usize) {}

        fn execute(&mut self, _operation: &str, _parameters: Option<Parameters>) -> Result<()> {
            Ok(())
        }

        fn fetchone(&mut self) -> Result<Option<Row>> {
            Ok(None)
        }
    }

    impl Close for TxnConn {
        fn is_open(&self) -> bool {
            self.open
        }

        fn close(&mut self) -> Result<()> {
            self.open = false;
            Ok(())
        }
    }

    impl Connection for TxnConn {
        type Cursor = NoRowsCursor;

        fn autocommit(&self) -> bool {
            false
        }

        fn set_autocommit(&mut self, _autocommit: bool) -> Result<()> {
            Ok(())
        }

        fn cursor(&mut self) -> Result<NoRowsCursor> {
            Ok(NoRowsCursor)
        }

        fn commit(&mut self) -> Result<()> {
            self.commits += 1;
            Ok(())
        }

        fn rollback(&mut self) -> Result<()> {
            self.rollbacks += 1;
            Ok(())
        }
    }

    #[test]
    fn test_transaction_commits_on_success() {
        let mut conn = TxnConn::default();
        let value = transaction(&mut conn, |_| Ok(10)).unwrap();
        assert_eq!(value, 10);
        assert_eq!(conn.commits, 1);
        assert_eq!(conn.rollbacks, 0);
    }

    #[test]
    fn test_transaction_rolls_back_on_failure() {
        let mut conn = TxnConn::default();
        let err: Result<()> =
            transaction(&mut conn, |_| Err(DriverError::data("conversion failed")));
        assert!(matches!(err, Err(DriverError::Data(_))));
        assert_eq!(conn.commits, 0);
        assert_eq!(conn.rollbacks, 1);
    }
}
