use std::env::temp_dir;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// A YAML file in the temp directory, removed again when dropped.
pub(crate) struct TempConfig {
    path: PathBuf,
}

impl TempConfig {
    pub(crate) fn path(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

impl Drop for TempConfig {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub(crate) fn write_string_to_tempfile(content: &str) -> TempConfig {
    let mut path = temp_dir();
    path.push(format!("pocketkit_config_{}.yml", rand::random::<u64>()));

    let mut file = File::create(&path).expect("Failed to create tmp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write into tmp file");

    TempConfig { path }
}
