use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Browser local storage holds roughly 5 MiB per origin
pub const DEFAULT_STORAGE_QUOTA_BYTES: usize = 5 * 1024 * 1024;
pub const DEFAULT_IMAGE_MAX_WIDTH: u32 = 300;
pub const DEFAULT_IMAGE_JPEG_QUALITY: u8 = 70;
pub const DEFAULT_PROFILE_NAME: &str = "Nombre de Perfil";
pub const DEFAULT_PROFILE_HANDLE: &str = "@UsuarioEjemplo";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `storage.json`
    pub data_dir: PathBuf,
    /// Maximum total size of all stored keys and values, in bytes
    pub storage_quota_bytes: usize,
    pub profile_name: String,
    pub profile_handle: String,
    /// Uploaded photos wider than this are scaled down
    pub image_max_width: u32,
    pub image_jpeg_quality: u8,
    /// Offset used when formatting post times
    pub utc_offset_minutes: i32,
    /// Stand-in for the system color-scheme preference
    pub prefers_dark: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            storage_quota_bytes: DEFAULT_STORAGE_QUOTA_BYTES,
            profile_name: DEFAULT_PROFILE_NAME.to_string(),
            profile_handle: DEFAULT_PROFILE_HANDLE.to_string(),
            image_max_width: DEFAULT_IMAGE_MAX_WIDTH,
            image_jpeg_quality: DEFAULT_IMAGE_JPEG_QUALITY,
            utc_offset_minutes: 0,
            prefers_dark: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            data_dir: env::var("PROFILE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            storage_quota_bytes: parse_var(
                "PROFILE_STORAGE_QUOTA_BYTES",
                defaults.storage_quota_bytes,
            ),
            profile_name: env::var("PROFILE_NAME").unwrap_or(defaults.profile_name),
            profile_handle: env::var("PROFILE_HANDLE").unwrap_or(defaults.profile_handle),
            image_max_width: parse_var("PROFILE_IMAGE_MAX_WIDTH", defaults.image_max_width),
            image_jpeg_quality: parse_var(
                "PROFILE_IMAGE_JPEG_QUALITY",
                defaults.image_jpeg_quality,
            ),
            utc_offset_minutes: parse_var("PROFILE_UTC_OFFSET_MINUTES", 0),
            prefers_dark: parse_var("PROFILE_PREFERS_DARK", false),
        }
    }

    /// Path of the backing storage file
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join("storage.json")
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring unparseable {}={:?}, using default", name, raw);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_browser_page() {
        let config = Config::default();
        assert_eq!(config.storage_quota_bytes, 5 * 1024 * 1024);
        assert_eq!(config.image_max_width, 300);
        assert_eq!(config.image_jpeg_quality, 70);
        assert_eq!(config.profile_handle, "@UsuarioEjemplo");
        assert!(config.storage_path().ends_with("storage.json"));
    }

    #[test]
    fn parse_var_falls_back_on_garbage() {
        env::set_var("PROFILE_TEST_GARBAGE_WIDTH", "wide");
        assert_eq!(parse_var("PROFILE_TEST_GARBAGE_WIDTH", 300u32), 300);
        env::set_var("PROFILE_TEST_GOOD_WIDTH", " 640 ");
        assert_eq!(parse_var("PROFILE_TEST_GOOD_WIDTH", 300u32), 640);
        assert_eq!(parse_var("PROFILE_TEST_UNSET_WIDTH", 12u32), 12);
    }
}
