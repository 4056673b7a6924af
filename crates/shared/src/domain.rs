use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseRunMethodError;

/// Opaque name of a server-side program, e.g. `hola.py`.
///
/// No validation happens here: the identifier is placed into the request
/// path as-is and the server decides whether it names something runnable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramId(pub String);

impl ProgramId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProgramId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProgramId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMethod {
    #[default]
    Post,
    Get,
}

impl FromStr for RunMethod {
    type Err = ParseRunMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "post" => Ok(Self::Post),
            "get" => Ok(Self::Get),
            other => Err(ParseRunMethodError(other.to_string())),
        }
    }
}

impl fmt::Display for RunMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post => f.write_str("POST"),
            Self::Get => f.write_str("GET"),
        }
    }
}

/// One pending execution. Lives from trigger time until its response is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub program: ProgramId,
    pub method: RunMethod,
}

impl ExecutionRequest {
    pub fn new(program: impl Into<ProgramId>, method: RunMethod) -> Self {
        Self {
            program: program.into(),
            method,
        }
    }

    pub fn path(&self) -> String {
        crate::protocol::run_path(&self.program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_method_case_insensitively() {
        assert_eq!("POST".parse::<RunMethod>().expect("post"), RunMethod::Post);
        assert_eq!(" get ".parse::<RunMethod>().expect("get"), RunMethod::Get);
        assert!("put".parse::<RunMethod>().is_err());
    }

    #[test]
    fn request_path_interpolates_id_without_escaping() {
        let request = ExecutionRequest::new("mi programa.py", RunMethod::Post);
        assert_eq!(request.path(), "/run/mi programa.py");
    }
}
