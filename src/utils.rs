use std::env;
use std::path::{Path, PathBuf};

use urlencoding;

/// Generates a URL for a local file that is compatible with the "vita" custom
/// protocol handler. This abstracts away the specific scheme
/// (http://vita.localhost/) and encoding requirements for the current
/// Dioxus/WebView configuration.
pub fn get_local_file_url(path: &Path) -> String {
    // 1. Convert path separators to forward slashes (standard API for URL paths)
    let p_str = path.to_string_lossy().replace("\\", "/");

    // 2. Percent-encode the path to handle spaces, distinct characters, etc.
    // 3. Prefix with the configured custom protocol host mapping.
    format!("http://vita.localhost/{}", urlencoding::encode(&p_str))
}

/// Directory the profile's photo paths are relative to: an `assets` folder
/// next to the executable, falling back to the working directory.
pub fn assets_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
        .unwrap_or_else(|| PathBuf::from("assets"))
}

/// Resolve a profile-relative photo path to a loadable URL.
pub fn photo_url(relative: &str) -> String {
    get_local_file_url(&assets_dir().join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_file_url_encodes_spaces() {
        let url = get_local_file_url(Path::new("photos/dresden nacht.jpg"));
        assert_eq!(url, "http://vita.localhost/photos%2Fdresden%20nacht.jpg");
    }

    #[test]
    fn test_backslashes_become_forward_slashes() {
        let url = get_local_file_url(Path::new("photos\\a.jpg"));
        assert!(!url.contains('\\'));
    }
}
