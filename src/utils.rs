//! Utility functions for path handling.

use std::path::Path;

/// Builds the path of `file_name` inside the data directory.
///
/// # Examples
///
/// ```
/// let path = get_path("/var/data", "roster.json");
/// assert_eq!(path, "/var/data/roster.json");
/// ```
pub fn get_path(data_dir: &str, file_name: &str) -> String {
    Path::new(data_dir)
        .join(file_name)
        .to_string_lossy()
        .into_owned()
}
