use crate::model::Roster;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge un roster depuis un support ; la grille est validée.
    fn load(&self) -> anyhow::Result<Roster>;
    /// Sauvegarde de manière atomique. Un roster mal formé est refusé.
    fn save(&self, roster: &Roster) -> anyhow::Result<()>;
}

/// Instantané JSON du planning, tel que produit par `import`.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn snapshot_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Roster> {
        let shown = self.path.display();
        let data = fs::read(&self.path).with_context(|| format!("reading {shown}"))?;
        let roster: Roster =
            serde_json::from_slice(&data).with_context(|| format!("parsing {shown}"))?;
        roster
            .validate()
            .with_context(|| format!("invalid roster in {shown}"))?;

        #[cfg(feature = "logging")]
        tracing::debug!(path = %shown, people = roster.people.len(), "snapshot loaded");

        Ok(roster)
    }

    fn save(&self, roster: &Roster) -> anyhow::Result<()> {
        roster.validate().context("refusing to save roster")?;
        let json = serde_json::to_vec_pretty(roster)?;
        let mut tmp =
            NamedTempFile::new_in(self.snapshot_dir()).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
