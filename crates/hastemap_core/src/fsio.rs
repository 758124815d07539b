use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

/// The two read primitives the analyzer is allowed to use: a whole-buffer
/// read for manifest parsing and text scanning, and a streaming open for
/// hashing. Going through a trait keeps the lazy-read contract observable:
/// test doubles can record that no call was made at all.
pub trait FileReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>>;
}

/// `std::fs`-backed reader used outside of tests.
pub struct OsFiles;

impl FileReader for OsFiles {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(File::open(path)?))
    }
}

pub(crate) fn read_bytes(files: &dyn FileReader, path: &Path) -> Result<Vec<u8>> {
    files.read(path).with_context(|| format!("Cannot read path '{}'.", path.display()))
}
