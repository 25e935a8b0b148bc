use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Movement rounds before the engine gives up on wandering aliens
pub const DEFAULT_MAX_ROUNDS: u32 = 10_000;

/// Appended to the map path to name the result file
pub const RESULT_SUFFIX: &str = ".result";

/// `<map>.result`, next to the map file
pub fn result_path(map: &Path) -> PathBuf {
    let mut name: OsString = map.as_os_str().to_owned();
    name.push(RESULT_SUFFIX);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_path_keeps_extension() {
        assert_eq!(
            result_path(Path::new("maps/earth.txt")),
            PathBuf::from("maps/earth.txt.result")
        );
        assert_eq!(result_path(Path::new("world")), PathBuf::from("world.result"));
    }
}
