use std::path::PathBuf;

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "GitHub", "shipyard")
}

/// Config directory, created on first use
pub fn config_dir() -> Option<PathBuf> {
    let dir = project_dirs()?.config_dir().to_path_buf();
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

/// `options.toml` in the config directory
pub fn default_options_path() -> Option<PathBuf> {
    Some(config_dir()?.join("options.toml"))
}
