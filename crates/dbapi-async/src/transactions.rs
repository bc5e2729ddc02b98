//! Async scoped acquisition and transaction scopes.
//!
//! There is no async drop, so the RAII guard of the synchronous contract
//! has no mirror here; scoped acquisition is the closure form only, which
//! awaits `close()` on every exit path.

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::connection::AsyncConnection;
use dbapi::Result;

/// The lifecycle half of the async contract.
#[async_trait]
pub trait AsyncClose: Send {
    /// Whether the resource is still usable.
    fn is_open(&self) -> bool;

    /// Release the resource.
    ///
    /// Closing is idempotent: a second call is a no-op returning `Ok(())`.
    /// Every other operation on a closed resource fails with an
    /// `InterfaceError` kind.
    async fn close(&mut self) -> Result<()>;
}

/// Run `body` against `resource`, then close it on every exit path.
///
/// A body failure wins over a close failure; the close failure is then only
/// logged. On a successful body, a close failure is the result.
///
/// The body is a closure returning a boxed future borrowing the resource:
///
/// ```rust,ignore
/// use futures::FutureExt;
///
/// let value = scoped(conn, |conn| async move {
///     let mut cursor = conn.cursor().await?;
///     cursor.execute("SELECT 1", None).await?;
///     cursor.fetchone().await
/// }.boxed()).await?;
/// ```
pub async fn scoped<T, R, F>(mut resource: T, body: F) -> Result<R>
where
    T: AsyncClose,
    F: for<'a> FnOnce(&'a mut T) -> BoxFuture<'a, Result<R>>,
{
    let outcome = body(&mut resource).await;
    match resource.close().await {
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
/// logged, never raised. Does not close the connection; compose with
/// [`scoped`] for that.
pub async fn transaction<C, R, F>(conn: &mut C, body: F) -> Result<R>
where
    C: AsyncConnection,
    F: for<'a> FnOnce(&'a mut C) -> BoxFuture<'a, Result<R>>,
{
    match body(conn).await {
        Ok(value) => {
            conn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = conn.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback after failed transaction body failed");
            }
            Err(err)
        }
    }
}
