/// unwrap a diesel result, or log the error under the given target
/// and return it from the enclosing function as a `DatabaseError`
macro_rules! db_handle_error {
    ( $data:expr, $target:expr, $type_str:expr) => {
        match $data {
            Ok(e) => e,
            Err(error) => {
                error!(target:$target, "Error {}. (error: {})", $type_str, error);
                return Err(crate::errors::Error::DatabaseError { source: error });
            }
        }
    }
}

pub(crate) use db_handle_error;
