use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{constants, Result, Text2VideoError};

/// Write the rendered page to `video_player.html` under `dir`, overwriting
/// any previous run's output. Returns the file path.
pub fn write_player_file(dir: &Path, html: &str) -> Result<PathBuf> {
    let path = dir.join(constants::PLAYER_FILENAME);
    fs::write(&path, html)?;

    tracing::info!(path = %path.display(), "player page written");

    Ok(path)
}

/// Build a `file://` URL from the canonicalized absolute path.
pub fn file_url(path: &Path) -> Result<String> {
    let absolute = path.canonicalize()?;
    Ok(format!("file://{}", absolute.display()))
}

/// Ask the default browser to open the player page. Launch is fire-and-forget;
/// a failure to spawn the handler is reported, nothing confirms rendering.
pub fn open_in_browser(path: &Path) -> Result<()> {
    let url = file_url(path)?;

    tracing::info!(%url, "opening player in default browser");

    webbrowser::open(&url)
        .map_err(|err| Text2VideoError::browser(format!("failed to open {}: {}", url, err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_player_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_player_file(dir.path(), "<html></html>").unwrap();

        assert_eq!(path.file_name().unwrap(), constants::PLAYER_FILENAME);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_write_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        write_player_file(dir.path(), "first, much longer content").unwrap();
        let path = write_player_file(dir.path(), "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_file_url_is_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_player_file(dir.path(), "x").unwrap();

        let url = file_url(&path).unwrap();
        assert!(url.starts_with("file:///"));
        assert!(url.ends_with(constants::PLAYER_FILENAME));
    }

    #[test]
    fn test_file_url_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.html");
        assert!(file_url(&missing).is_err());
    }
}
