use serde::{Deserialize, Serialize};

use crate::domain::ProgramId;

pub const RUN_PATH_PREFIX: &str = "/run/";
pub const UPLOAD_PATH: &str = "/upload";
/// Multipart field the upload endpoint reads the file from.
pub const UPLOAD_FIELD: &str = "archivo";
pub const PROGRAM_EXTENSION: &str = ".py";

pub const FAILURE_PREFIX: &str = "Error al ejecutar el programa: ";

/// Body returned by the run endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResponse {
    pub salida: String,
}

pub fn run_path(program: &ProgramId) -> String {
    format!("{RUN_PATH_PREFIX}{}", program.as_str())
}

pub fn status_message(program: &ProgramId) -> String {
    format!("Ejecutando {program}...\n")
}

pub fn failure_message(description: impl std::fmt::Display) -> String {
    format!("{FAILURE_PREFIX}{description}")
}

pub fn is_program_file(name: &str) -> bool {
    name.ends_with(PROGRAM_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_response_requires_salida_field() {
        let parsed: RunResponse =
            serde_json::from_str(r#"{"salida":"Hola Mundo"}"#).expect("valid body");
        assert_eq!(parsed.salida, "Hola Mundo");
        assert!(serde_json::from_str::<RunResponse>(r#"{"output":"x"}"#).is_err());
        assert!(serde_json::from_str::<RunResponse>(r#"{"salida":3}"#).is_err());
    }

    #[test]
    fn status_and_failure_messages() {
        let id = ProgramId::from("hola.py");
        assert_eq!(status_message(&id), "Ejecutando hola.py...\n");
        assert_eq!(
            failure_message("boom"),
            "Error al ejecutar el programa: boom"
        );
    }

    #[test]
    fn only_python_files_are_programs() {
        assert!(is_program_file("hola.py"));
        assert!(!is_program_file("notas.txt"));
        assert!(!is_program_file("py"));
    }
}
