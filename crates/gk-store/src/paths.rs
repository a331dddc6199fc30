// paths.rs — default location of the goals file.
//
// Resolution order: $GK_DATA_DIR override, then the platform data
// directory (XDG on Linux, AppData on Windows, Application Support on
// macOS), then a dot-directory in $HOME as a last resort. Only hosts
// call this — the store itself takes an explicit path, so nothing in
// the model or its tests depends on the environment.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "GK_DATA_DIR";

const APP_DIR: &str = "goalkeeper";
const DATA_FILE: &str = "goals.json";

/// The standard path of the goals file for this user.
pub fn default_data_file() -> PathBuf {
    data_dir(env::var_os(DATA_DIR_ENV)).join(DATA_FILE)
}

// Override injected as a value so resolution is testable without
// touching process-wide environment state.
fn data_dir(override_dir: Option<OsString>) -> PathBuf {
    if let Some(dir) = override_dir {
        return PathBuf::from(dir);
    }
    match dirs::data_dir() {
        Some(base) => base.join(APP_DIR),
        None => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(format!(".{APP_DIR}")),
    }
}
