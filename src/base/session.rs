use crate::base;

/// Number of distinct source versions kept in memory.
const DEFAULT_CACHE_CAPACITY: u64 = 8;

/// Identity of a source file. Rewriting the file changes its modification
/// time or length, which yields a new key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SourceKey {
    path: std::path::PathBuf,
    modified: Option<std::time::SystemTime>,
    len: u64,
}

impl SourceKey {
    fn of(path: &std::path::Path) -> std::io::Result<Self> {
        let path = path.canonicalize()?;
        let meta = std::fs::metadata(&path)?;
        Ok(Self {
            path,
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

/// Load context for one user session. Tables are parsed once per source
/// version and then shared read-only.
#[derive(Clone)]
pub struct Session {
    cache: moka::sync::Cache<SourceKey, std::sync::Arc<base::Table>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(max_capacity: u64) -> Self {
        Self {
            cache: moka::sync::Cache::builder()
                .max_capacity(max_capacity)
                .build(),
        }
    }

    /// Returns the table parsed from `path`, re-reading the file only if it
    /// changed since it was last loaded.
    pub fn load<P>(&self, path: P) -> Result<std::sync::Arc<base::Table>, base::LoadError>
    where
        P: AsRef<std::path::Path>,
    {
        let key = SourceKey::of(path.as_ref())?;
        if let Some(table) = self.cache.get(&key) {
            tracing::debug!(path = %key.path.display(), "sales table cache hit");
            return Ok(table);
        }
        tracing::debug!(path = %key.path.display(), "sales table cache miss");
        let table = std::sync::Arc::new(base::load(&key.path)?);
        self.cache.insert(key, table.clone());
        Ok(table)
    }
}
