use std::error::Error as _;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The request did not complete: connection refused, timeout, non-2xx status.
    #[error("{}", describe_transport(.0))]
    Transport(#[from] reqwest::Error),
    /// The body arrived but is not `{"salida": "..."}`.
    #[error("invalid response body: {0}")]
    Format(#[from] serde_json::Error),
    #[error("invalid server url '{url}': {source}")]
    InvalidServerUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("no trigger bound to '{0}'")]
    UnknownTrigger(String),
    #[error("only .py programs can be uploaded, got '{0}'")]
    UnsupportedFile(String),
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// reqwest leaves the cause out of its own message; append every source so a
/// refused connection and a timeout read differently.
fn describe_transport(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

impl DispatchError {
    /// Failures the dispatcher renders into the output region rather than returning.
    pub fn is_execution_failure(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Format(_))
    }
}
