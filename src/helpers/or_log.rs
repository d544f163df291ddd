use std::fmt::Display;

/// For results whose error only needs to be logged. The success value is kept, so callers can
/// still tell if it worked.
pub trait OrLog<T> {
    fn or_log_warn(self, context: &str) -> Option<T>;
}

impl<T, E: Display> OrLog<T> for Result<T, E> {
    fn or_log_warn(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("{}: {}", context, e);
                None
            }
        }
    }
}
