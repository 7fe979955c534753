use crate::workspace::Workspace;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The process working directory is global. Lock it so tests don't race
        // even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Sets or clears environment variables and restores them on drop.
///
/// Chain `and_set`/`and_unset` to change several variables under one lock.
pub(crate) struct EnvGuard {
    previous: Vec<(&'static str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    fn locked() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        Self {
            previous: Vec::new(),
            _lock: lock,
        }
    }

    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        Self::locked().and_set(key, value)
    }

    pub(crate) fn unset(key: &'static str) -> Self {
        Self::locked().and_unset(key)
    }

    pub(crate) fn and_set(mut self, key: &'static str, value: &str) -> Self {
        self.previous.push((key, std::env::var_os(key)));
        // SAFETY: ENV_LOCK serializes environment mutation within the test binary.
        unsafe { std::env::set_var(key, value) };
        self
    }

    pub(crate) fn and_unset(mut self, key: &'static str) -> Self {
        self.previous.push((key, std::env::var_os(key)));
        // SAFETY: see `and_set`.
        unsafe { std::env::remove_var(key) };
        self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held while restoring.
        for (key, previous) in self.previous.iter().rev() {
            unsafe {
                match previous {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

/// A temporary workspace with its directory layout already created.
pub(crate) fn create_test_workspace() -> (TempDir, Workspace) {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::at(temp_dir.path());
    ws.ensure_layout().unwrap();
    (temp_dir, ws)
}
