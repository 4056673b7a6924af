use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported run method '{0}', expected 'post' or 'get'")]
pub struct ParseRunMethodError(pub String);
