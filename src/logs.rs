//! Logging macros. Events go to `tracing` when the `logs` feature is enabled
//! and disappear otherwise.

macro_rules! log_trace {
    ($($arg: tt)*) => {
        #[cfg(feature = "logs")]
        tracing::trace!($($arg)*);
    };
}

macro_rules! log_error {
    ($($arg: tt)*) => {
        #[cfg(feature = "logs")]
        tracing::error!($($arg)*);
    };
}
