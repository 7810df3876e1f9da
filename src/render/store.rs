//! Template storage.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::error::RenderError;

/// Source of named document templates.
///
/// The renderer only needs `load`; where the HTML actually lives (a
/// directory on disk, an in-memory map in tests) is an implementation
/// detail behind this trait.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Load the template body for `name`.
    async fn load(&self, name: &str) -> Result<String, RenderError>;
}

/// File-backed template store: `<dir>/<name>.html`.
pub struct FileTemplateStore {
    dir: PathBuf,
}

impl FileTemplateStore {
    /// Create a store rooted at `dir`. The directory is explicit
    /// configuration — never derived from the process working directory.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

#[async_trait]
impl TemplateStore for FileTemplateStore {
    async fn load(&self, name: &str) -> Result<String, RenderError> {
        // Template names are identifiers, not paths.
        if name.is_empty() || name.contains(['/', '\\', '.']) {
            return Err(RenderError::TemplateNotFound { name: name.into() });
        }
        let path = self.dir.join(format!("{name}.html"));
        match fs::read_to_string(&path).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(RenderError::TemplateNotFound { name: name.into() })
            }
            Err(e) => Err(RenderError::Io(e)),
        }
    }
}
