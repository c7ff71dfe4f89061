//! Error macros for graphkit

/// Macro for returning a vertex-not-found error
#[macro_export]
macro_rules! bail_not_found {
    ($vertex:expr) => {
        return Err($crate::error::GraphError::vertex_not_found($vertex))
    };
}

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}
