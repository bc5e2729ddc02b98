//! Cursor capability set.
//!
//! A cursor is one statement-execution context bound to a connection. The
//! contract supplies default bodies where an operation is expressible in
//! terms of another (`fetchmany`/`fetchall` over `fetchone`, `executemany`
//! over `execute`) and contract-level declines for the optional operations;
//! everything else is the implementer's.

use crate::error::{DriverError, Result};
use crate::transactions::Close;
use crate::types::{ColumnDescription, Parameters, Row, Rows};

/// The minimal operations any statement-execution handle must support.
///
/// A cursor is not safe to share across independent logical operations;
/// `&mut self` receivers encode that. A cursor must not be used after its
/// owning connection is closed; the contract documents this constraint but
/// leaves enforcement to the implementer.
pub trait Cursor: Close {
    /// Result shape of the last executed statement.
    ///
    /// `None` when no statement has been executed or the statement produced
    /// no result set. Type codes are backend-defined.
    fn description(&self) -> Option<&[ColumnDescription]>;

    /// Rows returned or affected by the last execute, `-1` when unknown.
    fn rowcount(&self) -> i64;

    /// Number of rows [`Cursor::fetchmany`] fetches when no size is given.
    fn arraysize(&self) -> usize;

    /// Set the default fetch size.
    fn set_arraysize(&mut self, size: usize);

    /// Submit one statement for execution, binding optional parameters.
    ///
    /// Executing a new statement implicitly discards any unfetched rows from
    /// a prior statement on the same cursor. Fails with an `InterfaceError`
    /// kind on a closed cursor and with backend kinds for statement failures.
    fn execute(&mut self, operation: &str, parameters: Option<Parameters>) -> Result<()>;

    /// Submit the same statement once per parameter set.
    ///
    /// Semantically equivalent to repeated [`Cursor::execute`] calls, which
    /// is exactly what the default body does; implementers may batch.
    fn executemany(&mut self, operation: &str, seq_of_parameters: &[Parameters]) -> Result<()> {
        for parameters in seq_of_parameters {
            self.execute(operation, Some(parameters.clone()))?;
        }
        Ok(())
    }

    /// Call a stored procedure, returning its possibly-modified parameters.
    ///
    /// Optional: the default declines with a `NotSupportedError` kind.
    fn callproc(
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
    ///
    /// Fails with a `ProgrammingError` kind if no statement has been
    /// executed or the statement produced no result set.
    fn fetchone(&mut self) -> Result<Option<Row>>;

    /// Up to `size` next rows (default [`Cursor::arraysize`]).
    ///
    /// Returns fewer than `size` rows, down to none, when the result set is
    /// exhausted; exhaustion is never an error here.
    fn fetchmany(&mut self, size: Option<usize>) -> Result<Rows> {
        let size = size.unwrap_or_else(|| self.arraysize());
        let mut rows = Rows::with_capacity(size);
        for _ in 0..size {
            match self.fetchone()? {
                Some(row) => rows.push(row),
                None => break,
            }
        }
        Ok(rows)
    }

    /// All remaining rows of the current result set.
    fn fetchall(&mut self) -> Result<Rows> {
        let mut rows = Rows::new();
        while let Some(row) = self.fetchone()? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Skip to the next result set, discarding rows of the current one.
    ///
    /// Optional: the default declines with a `NotSupportedError` kind.
    fn nextset(&mut self) -> Result<bool> {
        Err(DriverError::not_supported(
            "multiple result sets are not supported",
        ))
    }

    /// Predefine parameter memory areas before an execute.
    ///
    /// Implementations are free to have this do nothing; the default does.
    fn setinputsizes(&mut self, sizes: &[Option<usize>]) -> Result<()> {
        let _ = sizes;
        Ok(())
    }

    /// Predefine a fetch buffer size for large columns before an execute.
    ///
    /// `column` selects one result column; `None` sets the default for all.
    /// Implementations are free to have this do nothing; the default does.
    fn setoutputsize(&mut self, size: usize, column: Option<usize>) -> Result<()> {
        let _ = (size, column);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::error::ErrorKind;
    use crate::types::Value;

    #[derive(Debug)]
    struct QueueCursor {
        pending: VecDeque<Row>,
        arraysize: usize,
        executes: Vec<String>,
        open: bool,
    }

    impl QueueCursor {
        fn with_rows(count: i64) -> Self {
            Self {
                pending: (0..count).map(|i| vec![Value::Int(i)]).collect(),
                arraysize: 1,
                executes: Vec::new(),
                open: true,
            }
        }
    }

    impl Close for QueueCursor {
        fn is_open(&self) -> bool {
            self.open
        }

        fn close(&mut self) -> Result<()> {
            self.open = false;
            self.pending.clear();
            Ok(())
        }
    }

    impl Cursor for QueueCursor {
        fn description(&self) -> Option<&[ColumnDescription]> {
            None
        }

        fn rowcount(&self) -> i64 {
            -1
        }

        fn arraysize(&self) -> usize {
            self.arraysize
        }

        fn set_arraysize(&mut self, size: usize) {
            self.arraysize = size;
        }

        fn execute(&mut self, operation: &str, _parameters: Option<Parameters>) -> Result<()> {
            if !self.open {
                return Err(DriverError::closed("cursor"));
            }
            self.executes.push(operation.to_owned());
            Ok(())
        }

        fn fetchone(&mut self) -> Result<Option<Row>> {
            if !self.open {
                return Err(DriverError::closed("cursor"));
            }
            Ok(self.pending.pop_front())
        }
    }

    #[test]
    fn test_fetchmany_defaults_to_arraysize() {
        let mut cursor = QueueCursor::with_rows(5);
        assert_eq!(cursor.fetchmany(None).unwrap().len(), 1);

        cursor.set_arraysize(3);
        assert_eq!(cursor.fetchmany(None).unwrap().len(), 3);
    }

    #[test]
    fn test_fetchmany_returns_short_batch_at_exhaustion() {
        let mut cursor = QueueCursor::with_rows(2);
        assert_eq!(cursor.fetchmany(Some(10)).unwrap().len(), 2);
        assert!(cursor.fetchmany(Some(10)).unwrap().is_empty());
    }

    #[test]
    fn test_fetchmany_until_exhaustion_equals_fetchall() {
        for n in 1..=4usize {
            let mut chunked = QueueCursor::with_rows(7);
            let mut collected = Rows::new();
            loop {
                let batch = chunked.fetchmany(Some(n)).unwrap();
                if batch.is_empty() {
                    break;
                }
                collected.extend(batch);
            }

            let mut whole = QueueCursor::with_rows(7);
            assert_eq!(collected, whole.fetchall().unwrap());
        }
    }

    #[test]
    fn test_executemany_runs_once_per_parameter_set() {
        let mut cursor = QueueCursor::with_rows(0);
        let sets = [
            Parameters::from(vec![Value::Int(1)]),
            Parameters::from(vec![Value::Int(2)]),
            Parameters::from(vec![Value::Int(3)]),
        ];
        cursor.executemany("INSERT INTO t VALUES (?)", &sets).unwrap();
        assert_eq!(cursor.executes.len(), 3);
    }

    #[test]
    fn test_optional_operations_decline() {
        let mut cursor = QueueCursor::with_rows(0);

        let err = cursor.nextset().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotSupported);

        let err = cursor.callproc("GET_USER", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotSupported);
        assert!(err.to_string().contains("GET_USER"));
    }

    #[test]
    fn test_set_size_hints_default_to_noop() {
        let mut cursor = QueueCursor::with_rows(0);
        cursor.setinputsizes(&[Some(32), None]).unwrap();
        cursor.setoutputsize(1024, Some(0)).unwrap();
    }
}
