use std::path::PathBuf;

/// Paths a single build reads from and writes to.
#[derive(Debug, Clone)]
pub(crate) struct Context {
    pub post_dir: PathBuf,
    pub out_file: PathBuf,
}

impl Context {
    pub fn new(post_dir: PathBuf, out_file: PathBuf) -> Self {
        Self { post_dir, out_file }
    }
}
