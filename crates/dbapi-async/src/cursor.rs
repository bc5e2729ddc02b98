//! Async cursor capability set.

use async_trait::async_trait;

use crate::transactions::AsyncClose;
use dbapi::{ColumnDescription, DriverError, Parameters, Result, Row, Rows};

/// The minimal operations any async statement-execution handle must support.
///
/// Mirrors the synchronous `Cursor` contract operation for operation; every
/// method that can touch the wire suspends instead of blocking. Default
/// bodies delegate the same way the sync contract's do.
#[async_trait]
pub trait AsyncCursor: AsyncClose {
    /// Result shape of the last executed statement.
    fn description(&self) -> Option<&[ColumnDescription]>;

    /// Rows returned or affected by the last execute, `-1` when unknown.
    fn rowcount(&self) -> i64;

    /// Number of rows [`AsyncCursor::fetchmany`] fetches when no size is given.
    fn arraysize(&self) -> usize;

    /// Set the default fetch size.
    fn set_arraysize(&mut self, size: usize);

    /// Submit one statement for execution, binding optional parameters.
    ///
    /// Executing a new statement implicitly discards any unfetched rows from
    /// a prior statement on the same cursor.
    async fn execute(&mut self, operation: &str, parameters: Option<Parameters>) -> Result<()>;

    /// Submit the same statement once per parameter set.
    async fn executemany(
        &mut self,
        operation: &str,
        seq_of_parameters: &[Parameters],
    ) -> Result<()> {
        for parameters in seq_of_parameters {
            self.execute(operation, Some(parameters.clone())).await?;
        }
        Ok(())
    }

    /// Call a stored procedure, returning its possibly-modified parameters.
    ///
    /// Optional: the default declines with a `NotSupportedError` kind.
    async fn callproc(
        &mut self,
        procname: &str,
        parameters: Option<Parameters>,
    ) -> Result<Option<Parameters>> {
        let _ = parameters;
        Err(DriverError::not_supported(format!(
            "stored procedure calls are not supported: {procname}"
        )))
    }

    /// Next row of the current result set, or `None` at exhaustion.
    async fn fetchone(&mut self) -> Result<Option<Row>>;

    /// Up to `size` next rows (default [`AsyncCursor::arraysize`]).
    ///
    /// Returns fewer than `size` rows, down to none, when the result set is
    /// exhausted; exhaustion is never an error here.
    async fn fetchmany(&mut self, size: Option<usize>) -> Result<Rows> {
        let size = size.unwrap_or_else(|| self.arraysize());
        let mut rows = Rows::with_capacity(size);
        for _ in 0..size {
            match self.fetchone().await? {
                Some(row) => rows.push(row),
                None => break,
            }
        }
        Ok(rows)
    }

    /// All remaining rows of the current result set.
    async fn fetchall(&mut self) -> Result<Rows> {
        let mut rows = Rows::new();
        while let Some(row) = self.fetchone().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Skip to the next result set, discarding rows of the current one.
    ///
    /// Optional: the default declines with a `NotSupportedError` kind.
    async fn nextset(&mut self) -> Result<bool> {
        Err(DriverError::not_supported(
            "multiple result sets are not supported",
        ))
    }

    /// Predefine parameter memory areas before an execute.
    ///
    /// Implementations are free to have this do nothing; the default does.
    async fn setinputsizes(&mut self, sizes: &[Option<usize>]) -> Result<()> {
        let _ = sizes;
        Ok(())
    }

    /// Predefine a fetch buffer size for large columns before an execute.
    ///
    /// Implementations are free to have this do nothing; the default does.
    async fn setoutputsize(&mut self, size: usize, column: Option<usize>) -> Result<()> {
        let _ = (size, column);
        Ok(())
    }
}
