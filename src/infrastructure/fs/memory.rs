//! In-memory File Store
//!
//! A `FileStore` with a manual clock, used by tests and by embedders that keep
//! compiled views off disk. Clones share the same state.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, SystemTime};

use crate::domain::ports::file_store::{FileStore, FsError, FsResult};

#[derive(Debug, Clone)]
struct Entry {
    content: Vec<u8>,
    modified: SystemTime,
}

#[derive(Debug)]
struct State {
    files: BTreeMap<PathBuf, Entry>,
    dirs: BTreeSet<PathBuf>,
    read_only: Vec<PathBuf>,
    clock: SystemTime,
    mutations: usize,
}

/// In-memory file store
///
/// Writes are stamped with the store's clock, which only moves when
/// [`MemoryFs::advance`] is called. Directories are tracked explicitly:
/// `write` fails with `NotFound` when the parent was never created.
#[derive(Debug, Clone)]
pub struct MemoryFs {
    state: Arc<Mutex<State>>,
}

impl MemoryFs {
    /// Empty store with the clock at 2024-01-01T00:00:00Z
    pub fn new() -> Self {
        Self::with_clock(SystemTime::UNIX_EPOCH + Duration::from_secs(1_704_067_200))
    }

    /// Empty store with the clock at `now`
    pub fn with_clock(now: SystemTime) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                files: BTreeMap::new(),
                dirs: BTreeSet::new(),
                read_only: Vec::new(),
                clock: now,
                mutations: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current clock value
    pub fn now(&self) -> SystemTime {
        self.lock().clock
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let mut state = self.lock();
        state.clock += by;
    }

    /// Seed a file at the current clock, creating its parent directories
    ///
    /// Seeding does not count as a mutation.
    pub fn insert(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let now = self.now();
        self.insert_at(path, content, now);
    }

    /// Seed a file with an explicit modification time
    pub fn insert_at(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>, modified: SystemTime) {
        let path = path.as_ref();
        let mut state = self.lock();
        if let Some(parent) = path.parent() {
            add_dir_chain(&mut state.dirs, parent);
        }
        state.files.insert(
            path.to_path_buf(),
            Entry {
                content: content.as_ref().to_vec(),
                modified,
            },
        );
    }

    /// Reject every write and directory creation at or below `prefix`
    pub fn set_read_only(&self, prefix: impl AsRef<Path>) {
        self.lock().read_only.push(prefix.as_ref().to_path_buf());
    }

    /// Content of a file, if present
    pub fn content(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.lock()
            .files
            .get(path.as_ref())
            .map(|entry| entry.content.clone())
    }

    /// All file paths, sorted
    pub fn files(&self) -> Vec<PathBuf> {
        self.lock().files.keys().cloned().collect()
    }

    /// Number of `write`, `set_modified`, `ensure_dir` and `remove_dir_all`
    /// calls that changed or attempted to change the store
    pub fn mutations(&self) -> usize {
        self.lock().mutations
    }
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

fn add_dir_chain(dirs: &mut BTreeSet<PathBuf>, dir: &Path) {
    for ancestor in dir.ancestors() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        dirs.insert(ancestor.to_path_buf());
    }
}

fn is_read_only(state: &State, path: &Path) -> bool {
    state.read_only.iter().any(|prefix| path.starts_with(prefix))
}

impl FileStore for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        let state = self.lock();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.lock().files.contains_key(path)
    }

    fn last_modified(&self, path: &Path) -> FsResult<SystemTime> {
        self.lock()
            .files
            .get(path)
            .map(|entry| entry.modified)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.lock()
            .files
            .get(path)
            .map(|entry| entry.content.clone())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let mut state = self.lock();
        state.mutations += 1;

        if is_read_only(&state, path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !state.dirs.contains(parent) {
                return Err(FsError::NotFound(parent.to_path_buf()));
            }
        }

        let modified = state.clock;
        state.files.insert(
            path.to_path_buf(),
            Entry {
                content: content.to_vec(),
                modified,
            },
        );
        Ok(())
    }

    fn set_modified(&self, path: &Path, modified: SystemTime) -> FsResult<()> {
        let mut state = self.lock();
        state.mutations += 1;

        if is_read_only(&state, path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        let entry = state
            .files
            .get_mut(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))?;
        entry.modified = modified;
        Ok(())
    }

    fn ensure_dir(&self, path: &Path) -> FsResult<()> {
        let mut state = self.lock();
        state.mutations += 1;

        if state.dirs.contains(path) {
            return Ok(());
        }
        if is_read_only(&state, path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        add_dir_chain(&mut state.dirs, path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        let mut state = self.lock();
        state.mutations += 1;

        if is_read_only(&state, path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        state.files.retain(|file, _| !file.starts_with(path));
        state.dirs.retain(|dir| !dir.starts_with(path));
        Ok(())
    }
}
