use std::path::{Path, PathBuf};

pub const INDEX_FILE_NAME: &str = "index.bin";
pub const META_FILE_NAME: &str = "meta.json";

/// Where a store lives and how wide its vectors are.
///
/// The dimension is fixed for the lifetime of the store: a persisted index
/// of a different width is a configuration error, never coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub dim: usize,
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(dim: usize, data_dir: impl AsRef<Path>) -> Self {
        Self {
            dim,
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.data_dir.join(INDEX_FILE_NAME)
    }

    #[must_use]
    pub fn meta_path(&self) -> PathBuf {
        self.data_dir.join(META_FILE_NAME)
    }
}
