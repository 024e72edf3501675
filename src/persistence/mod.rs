use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::Deserialize;
use tracing::{
    debug,
    info,
    warn,
};

const APP_NAME: &str = "pawswipe";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        if let Err(e) = fs::create_dir_all(&app_dir) {
            debug!(path = %app_dir.display(), error = %e, "Could not create data dir");
        }
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

/// Reads a JSON file, or `T::default()` when it does not exist.
pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(
    file_path: &Path,
) -> Result<T, Box<dyn std::error::Error>> {
    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(file_path)?;
    let data: T = serde_json::from_str(&json)?;
    info!(path = %file_path.display(), "Data loaded");
    Ok(data)
}

pub fn load_json_or_default_from<T: for<'de> Deserialize<'de> + Default>(file_path: &Path) -> T {
    match load_json_from::<T>(file_path) {
        Ok(data) => data,
        Err(e) => {
            warn!(path = %file_path.display(), error = %e, "Failed to load, using defaults");
            T::default()
        }
    }
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    load_json_or_default_from(&get_data_file_path(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Sample {
        value: u32,
    }

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Sample = load_json_or_default_from(&dir.path().join("absent.json"));
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn malformed_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(load_json_from::<Sample>(&path).is_err());
        let loaded: Sample = load_json_or_default_from(&path);
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        fs::write(&path, r#"{ "value": 7 }"#).unwrap();

        let loaded: Sample = load_json_or_default_from(&path);
        assert_eq!(loaded, Sample { value: 7 });
    }

    #[test]
    fn data_file_lives_in_app_dir() {
        let path = get_data_file_path("settings.json");
        assert!(path.ends_with("settings.json"));
        assert_eq!(path.parent(), Some(get_app_data_dir().as_path()));
    }
}
