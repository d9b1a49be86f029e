use std::path::PathBuf;

use crate::categories::DEFAULT_CATEGORIES_JSON;
use crate::error::Result;
use crate::settings::{default_categories_path, load_settings, save_settings, settings_path, shellexpand_path};

pub fn run(categories_file: Option<String>) -> Result<()> {
    let path = categories_file
        .map(|p| PathBuf::from(shellexpand_path(&p)))
        .unwrap_or_else(default_categories_path);

    if path.exists() {
        println!("Using existing category file {}", path.display());
    } else {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&path, DEFAULT_CATEGORIES_JSON)?;
        println!("Wrote starter category file {}", path.display());
    }

    let mut settings = load_settings();
    settings.categories_path = Some(path.to_string_lossy().to_string());
    save_settings(&settings)?;
    println!("Saved settings to {}", settings_path().display());
    Ok(())
}
