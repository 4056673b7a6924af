use std::path::Path;

use shared::{domain::ProgramId, protocol::is_program_file};
use tracing::debug;

use crate::error::DispatchError;

/// A clickable thing that names the program it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub label: String,
    pub program: ProgramId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerSet {
    triggers: Vec<Trigger>,
}

impl TriggerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One trigger per program, labelled with the program's own name.
    pub fn from_programs<I, S>(programs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for program in programs {
            let program = program.into();
            set.bind(program.clone(), program);
        }
        set
    }

    /// Lists the `.py` files directly inside `dir`, sorted by name.
    pub async fn scan_dir(dir: &Path) -> Result<Self, DispatchError> {
        let io_err = |source| DispatchError::Io {
            path: dir.display().to_string(),
            source,
        };

        let mut entries = tokio::fs::read_dir(dir).await.map_err(io_err)?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_program_file(&name) {
                names.push(name);
            }
        }
        names.sort();
        debug!(dir = %dir.display(), count = names.len(), "scanned program directory");

        Ok(Self::from_programs(names))
    }

    /// Binds `label` to `program`, replacing an earlier binding of the same label.
    pub fn bind(&mut self, label: impl Into<String>, program: impl Into<ProgramId>) -> &mut Self {
        let label = label.into();
        let program = program.into();
        match self.triggers.iter_mut().find(|t| t.label == label) {
            Some(existing) => existing.program = program,
            None => self.triggers.push(Trigger { label, program }),
        }
        self
    }

    pub fn get(&self, label: &str) -> Option<&Trigger> {
        self.triggers.iter().find(|t| t.label == label)
    }

    pub fn resolve(&self, label: &str) -> Result<&ProgramId, DispatchError> {
        self.get(label)
            .map(|t| &t.program)
            .ok_or_else(|| DispatchError::UnknownTrigger(label.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}
