use std::{path::Path, time::Duration};

use reqwest::{
    multipart::{Form, Part},
    Client,
};
use shared::{
    domain::{ExecutionRequest, ProgramId, RunMethod},
    protocol::{is_program_file, RunResponse, UPLOAD_FIELD, UPLOAD_PATH},
};
use tracing::{debug, info};

use crate::{config::Settings, error::DispatchError};

/// HTTP side of the dispatcher: talks to the run and upload endpoints.
#[derive(Debug, Clone)]
pub struct RunClient {
    http: Client,
    server_url: String,
    method: RunMethod,
}

impl RunClient {
    pub fn new(server_url: impl Into<String>) -> Result<Self, DispatchError> {
        Self::build(server_url.into(), RunMethod::default(), None)
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, DispatchError> {
        Self::build(
            settings.server_url.clone(),
            settings.run_method,
            settings.request_timeout_secs.map(Duration::from_secs),
        )
    }

    fn build(
        server_url: String,
        method: RunMethod,
        timeout: Option<Duration>,
    ) -> Result<Self, DispatchError> {
        let server_url = server_url.trim().trim_end_matches('/').to_string();
        url::Url::parse(&server_url).map_err(|source| DispatchError::InvalidServerUrl {
            url: server_url.clone(),
            source,
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            server_url,
            method,
        })
    }

    pub fn with_method(mut self, method: RunMethod) -> Self {
        self.method = method;
        self
    }

    pub fn method(&self) -> RunMethod {
        self.method
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn request_for(&self, program: impl Into<ProgramId>) -> ExecutionRequest {
        ExecutionRequest::new(program, self.method)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.server_url)
    }

    /// Sends one execution request and decodes its `salida` payload.
    pub async fn run(&self, request: &ExecutionRequest) -> Result<RunResponse, DispatchError> {
        let url = self.endpoint(&request.path());
        debug!(%url, method = %request.method, "sending run request");

        let builder = match request.method {
            RunMethod::Post => self.http.post(url),
            RunMethod::Get => self.http.get(url),
        };
        let body = builder.send().await?.error_for_status()?.text().await?;

        Ok(serde_json::from_str(&body)?)
    }

    pub async fn upload_program(
        &self,
        filename: &str,
        contents: Vec<u8>,
    ) -> Result<(), DispatchError> {
        if !is_program_file(filename) {
            return Err(DispatchError::UnsupportedFile(filename.to_string()));
        }

        let size_bytes = contents.len();
        let part = Part::bytes(contents)
            .file_name(filename.to_string())
            .mime_str("text/x-python")?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        self.http
            .post(self.endpoint(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        info!(filename, size_bytes, "uploaded program");
        Ok(())
    }

    pub async fn upload_file(&self, path: &Path) -> Result<(), DispatchError> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !is_program_file(&filename) {
            return Err(DispatchError::UnsupportedFile(path.display().to_string()));
        }

        let contents = tokio::fs::read(path)
            .await
            .map_err(|source| DispatchError::Io {
                path: path.display().to_string(),
                source,
            })?;
        self.upload_program(&filename, contents).await
    }
}
