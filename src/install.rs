//! "Install Ratatouille" banner
//!
//! Offers to add the app to the desktop's application menu. Dismissing it
//! snoozes the banner for a week; the dismissal time is the only thing this
//! app ever persists.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use thiserror::Error;

const APP_DIR: &str = "ratatouille";
const DISMISSED_FILE: &str = "install_prompt_dismissed";
const DESKTOP_FILE: &str = "ratatouille.desktop";

/// How long a dismissal keeps the banner hidden
pub const SNOOZE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("no user data directory on this system")]
    NoDataDir,
    #[error("could not locate the running executable: {0}")]
    Executable(std::io::Error),
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where the banner keeps its state
#[derive(Debug, Clone)]
pub struct InstallPaths {
    /// File holding the last dismissal as epoch milliseconds
    pub dismissed: PathBuf,
    /// Freedesktop entry written by "Install"
    pub desktop_entry: PathBuf,
}

impl InstallPaths {
    /// Standard locations under the user's data directory
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self {
            dismissed: data_dir.join(APP_DIR).join(DISMISSED_FILE),
            desktop_entry: data_dir.join("applications").join(DESKTOP_FILE),
        }
    }

    pub fn discover() -> Result<Self, InstallError> {
        dirs::data_dir()
            .map(|dir| Self::from_data_dir(&dir))
            .ok_or(InstallError::NoDataDir)
    }
}

#[derive(Debug)]
pub struct InstallPrompt {
    paths: Option<InstallPaths>,
    visible: bool,
}

impl InstallPrompt {
    /// Decide whether to show the banner right now
    pub fn load(paths: Option<InstallPaths>, now: SystemTime) -> Self {
        let visible = match &paths {
            Some(paths) => {
                !paths.desktop_entry.exists() && should_show(read_dismissed(&paths.dismissed), now)
            }
            None => false,
        };
        tracing::debug!("Install prompt visible: {}", visible);
        Self { paths, visible }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide the banner and remember when
    pub fn dismiss(&mut self, now: SystemTime) {
        self.visible = false;
        let Some(paths) = &self.paths else { return };
        if let Err(e) = write_dismissed(&paths.dismissed, now) {
            tracing::warn!("Could not remember install prompt dismissal: {}", e);
        }
    }

    /// Write the desktop entry pointing at the running binary
    pub fn install(&mut self) -> Result<PathBuf, InstallError> {
        let paths = self.paths.as_ref().ok_or(InstallError::NoDataDir)?;
        let exe = std::env::current_exe().map_err(InstallError::Executable)?;
        write_file(&paths.desktop_entry, &desktop_entry(&exe))?;
        self.visible = false;
        tracing::info!("Installed desktop entry at {:?}", paths.desktop_entry);
        Ok(paths.desktop_entry.clone())
    }
}

/// `true` when never dismissed or the snooze has run out
pub fn should_show(dismissed_at: Option<SystemTime>, now: SystemTime) -> bool {
    match dismissed_at {
        None => true,
        // A dismissal "in the future" means the clock moved; keep snoozing
        Some(at) => now.duration_since(at).map(|age| age >= SNOOZE).unwrap_or(false),
    }
}

fn read_dismissed(path: &Path) -> Option<SystemTime> {
    let raw = fs::read_to_string(path).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(millis) => Some(UNIX_EPOCH + Duration::from_millis(millis)),
        Err(e) => {
            tracing::warn!("Ignoring unreadable dismissal time in {:?}: {}", path, e);
            None
        }
    }
}

fn write_dismissed(path: &Path, now: SystemTime) -> Result<(), InstallError> {
    let millis = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    write_file(path, &millis.to_string())
}

fn write_file(path: &Path, contents: &str) -> Result<(), InstallError> {
    let io_err = |source| InstallError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)
}

fn desktop_entry(exe: &Path) -> String {
    format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name=Ratatouille AI\n\
         GenericName=Recipe Finder\n\
         Comment=Snap your fridge, get recipes\n\
         Exec=\"{}\" open\n\
         Terminal=false\n\
         Categories=Utility;\n\
         Keywords=recipe;cooking;food;\n",
        exe.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);

    fn paths(dir: &tempfile::TempDir) -> InstallPaths {
        InstallPaths::from_data_dir(dir.path())
    }

    #[test]
    fn test_fresh_install_shows_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let prompt = InstallPrompt::load(Some(paths(&dir)), SystemTime::now());
        assert!(prompt.is_visible());
    }

    #[test]
    fn test_dismissal_snoozes_for_a_week() {
        let dir = tempfile::tempdir().unwrap();
        let now = SystemTime::now();

        let mut prompt = InstallPrompt::load(Some(paths(&dir)), now);
        prompt.dismiss(now);
        assert!(!prompt.is_visible());
        assert!(paths(&dir).dismissed.exists());

        assert!(!InstallPrompt::load(Some(paths(&dir)), now + 6 * DAY).is_visible());
        assert!(InstallPrompt::load(Some(paths(&dir)), now + 8 * DAY).is_visible());
    }

    #[test]
    fn test_garbage_dismissal_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(&dir);
        write_file(&paths.dismissed, "yesterday").unwrap();

        assert!(InstallPrompt::load(Some(paths), SystemTime::now()).is_visible());
    }

    #[test]
    fn test_installed_entry_hides_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let mut prompt = InstallPrompt::load(Some(paths(&dir)), SystemTime::now());

        let entry = prompt.install().unwrap();
        assert!(!prompt.is_visible());
        let contents = fs::read_to_string(&entry).unwrap();
        assert!(contents.starts_with("[Desktop Entry]"));
        assert!(contents.contains("Name=Ratatouille AI"));

        assert!(!InstallPrompt::load(Some(paths(&dir)), SystemTime::now()).is_visible());
    }

    #[test]
    fn test_no_data_dir_never_shows() {
        let mut prompt = InstallPrompt::load(None, SystemTime::now());
        assert!(!prompt.is_visible());
        assert!(matches!(prompt.install(), Err(InstallError::NoDataDir)));
    }

    #[test]
    fn test_should_show_boundaries() {
        let now = SystemTime::now();
        assert!(should_show(None, now));
        assert!(!should_show(Some(now - SNOOZE + Duration::from_secs(1)), now));
        assert!(should_show(Some(now - SNOOZE), now));
        assert!(!should_show(Some(now + DAY), now));
    }
}
