mod file;
mod sqlite;

use std::path::Path;

use blitz_core::{KeyValueStore, StoreError};

pub type BoxedStore = Box<dyn KeyValueStore>;

fn log_path() -> Option<String> {
    std::env::var("LOG_STORE_PATH").ok()
}

pub fn log_error(message: &str) {
    let Some(path) = log_path() else {
        return;
    };
    let mut line = String::new();
    line.push_str("[error] ");
    line.push_str(message);
    line.push('\n');
    if let Ok(mut file) = std::fs::OpenOptions::new().create(true).append(true).open(path) {
        use std::io::Write;
        let _ = file.write_all(line.as_bytes());
    }
}

/// Backend selection: `BACKEND=sqlite` (default) or `BACKEND=file`.
pub fn open_backend(data_dir: &Path) -> Result<BoxedStore, StoreError> {
    let backend = std::env::var("BACKEND").unwrap_or_else(|_| "sqlite".to_string());
    match backend.as_str() {
        "sqlite" => Ok(Box::new(sqlite::SqliteStore::open(&data_dir.join("srs.db"))?)),
        "file" => Ok(Box::new(file::FileStore::new(data_dir.join("kv")))),
        other => Err(StoreError::Backend(format!("Unknown BACKEND '{other}'"))),
    }
}

pub use file::FileStore;
pub use sqlite::SqliteStore;
