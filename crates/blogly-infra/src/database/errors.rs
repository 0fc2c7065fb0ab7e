//! Translation of SeaORM errors into repository errors.

use sea_orm::{DbErr, SqlErr, TransactionError};

use blogly_core::error::RepoError;

pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => return RepoError::Duplicate(detail),
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            return RepoError::Constraint(detail);
        }
        _ => {}
    }

    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

pub(crate) fn map_txn_err(err: TransactionError<RepoError>) -> RepoError {
    match err {
        TransactionError::Connection(e) => map_db_err(e),
        TransactionError::Transaction(e) => e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rows_map_to_not_found() {
        assert!(matches!(map_db_err(DbErr::RecordNotUpdated), RepoError::NotFound));
        assert!(matches!(
            map_db_err(DbErr::RecordNotFound("tags".into())),
            RepoError::NotFound
        ));
    }

    #[test]
    fn test_transaction_error_unwraps_inner() {
        let err = map_txn_err(TransactionError::Transaction(RepoError::Constraint(
            "still referenced".into(),
        )));
        assert!(matches!(err, RepoError::Constraint(msg) if msg == "still referenced"));
    }
}
