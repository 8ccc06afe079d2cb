//! Opening the report with the platform's default handler

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::OutputError;

#[async_trait]
pub trait Viewer: Send + Sync {
    /// Hands `path` to a viewer without waiting for it to exit.
    async fn open(&self, path: &Path) -> Result<(), OutputError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl SystemViewer {
    fn command(path: &Path) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg("start").arg("").arg(path);
            cmd
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

#[async_trait]
impl Viewer for SystemViewer {
    async fn open(&self, path: &Path) -> Result<(), OutputError> {
        let child = Self::command(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| OutputError::Launch {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Viewer launched for {} (pid {:?})", path.display(), child.id());
        Ok(())
    }
}
