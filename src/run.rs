mod cli;
mod tui;

pub(crate) use cli::as_cli;
pub(crate) use tui::as_tui;

use std::path::{Path, PathBuf};

/// Where an export lands: a directory gets the dated default file name.
pub(crate) fn export_path(target: Option<&Path>, data_dir: &Path, today: chrono::NaiveDate) -> PathBuf {
    let file_name = crate::export::file_name(today);
    match target.map(shellexpand) {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path,
        None => data_dir.join(file_name),
    }
}

/// Expand a leading `~` to the home directory. Left as-is when no home
/// directory can be found.
pub(crate) fn shellexpand(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match directories::BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(rest),
        None => {
            tracing::warn!(path = %path.display(), "no home directory, not expanding ~");
            path.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_export_path_defaults_to_data_dir() {
        let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let path = export_path(None, Path::new("/data"), day);
        assert_eq!(path, Path::new("/data/lekha-jokha-expenses-2024-01-15.csv"));
    }

    #[test]
    fn test_export_path_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let path = export_path(Some(dir.path()), Path::new("/data"), day);
        assert_eq!(path, dir.path().join("lekha-jokha-expenses-2024-01-15.csv"));
    }

    #[test]
    fn test_export_path_explicit_file() {
        let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let path = export_path(Some(Path::new("/tmp/out.csv")), Path::new("/data"), day);
        assert_eq!(path, Path::new("/tmp/out.csv"));
    }

    #[test]
    fn test_shellexpand_leaves_plain_paths() {
        assert_eq!(shellexpand(Path::new("a/b.csv")), Path::new("a/b.csv"));
        assert_eq!(shellexpand(Path::new("~user/b.csv")), Path::new("~user/b.csv"));
    }

    #[test]
    fn test_shellexpand_home() {
        let home = directories::BaseDirs::new().unwrap().home_dir().to_path_buf();
        assert_eq!(shellexpand(Path::new("~/out.csv")), home.join("out.csv"));
        assert_eq!(shellexpand(Path::new("~")), home);
    }

    #[test]
    fn test_export_path_into_home_directory() {
        let home = directories::BaseDirs::new().unwrap().home_dir().to_path_buf();
        if !home.is_dir() {
            return;
        }
        let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let path = export_path(Some(Path::new("~")), Path::new("/data"), day);
        assert_eq!(path, home.join("lekha-jokha-expenses-2024-01-15.csv"));
    }
}
