//! Application configuration: built-in defaults, overlaid by an optional
//! `config.toml` in the data directory, then by CLI flags in `main`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::util::paths::config_path;

/// Resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base animation pause in milliseconds.
    pub speed_ms: u64,
    /// How many random values seed the sort array.
    pub seed_size: usize,
    /// Initial stack contents (bottom to top).
    pub stack_seed: Vec<i64>,
    /// Initial queue contents (front to rear).
    pub queue_seed: Vec<i64>,
    /// Initial linked-list contents (head first).
    pub linked_seed: Vec<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed_ms: 300,
            seed_size: 10,
            stack_seed: vec![12, 35, 27],
            queue_seed: vec![8, 21, 4],
            linked_seed: vec![5, 2, 8],
        }
    }
}

/// On-disk shape; every field optional so partial files overlay cleanly.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    speed_ms: Option<u64>,
    seed_size: Option<usize>,
    stack_seed: Option<Vec<i64>>,
    queue_seed: Option<Vec<i64>>,
    linked_seed: Option<Vec<i64>>,
}

impl Config {
    /// Load from the default config path; missing file means defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let mut config = Self::default();

        let Ok(content) = fs::read_to_string(path) else {
            return config;
        };

        match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => {
                if let Some(speed_ms) = file.speed_ms {
                    config.speed_ms = speed_ms;
                }
                if let Some(seed_size) = file.seed_size {
                    config.seed_size = seed_size;
                }
                if let Some(stack_seed) = file.stack_seed {
                    config.stack_seed = stack_seed;
                }
                if let Some(queue_seed) = file.queue_seed {
                    config.queue_seed = queue_seed;
                }
                if let Some(linked_seed) = file.linked_seed {
                    config.linked_seed = linked_seed;
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring unreadable config file");
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn missing_file_means_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/algoscope.toml"));
        assert_eq!(config.speed_ms, 300);
        assert_eq!(config.seed_size, 10);
    }

    #[test]
    fn partial_file_overlays_only_named_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "speed_ms = 50\nstack_seed = [1, 2]").unwrap();

        let config = Config::load_from(file.path());
        assert_eq!(config.speed_ms, 50);
        assert_eq!(config.stack_seed, vec![1, 2]);
        assert_eq!(config.seed_size, 10);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "speed_ms = \"fast\"").unwrap();

        let config = Config::load_from(file.path());
        assert_eq!(config.speed_ms, 300);
    }
}
