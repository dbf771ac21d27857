//! Filesystem helpers for reading uploads and writing zone artefacts.
//!
//! Paths are UTF-8 (`camino`) and every operation goes through `cap-std`
//! directory handles opened with ambient authority.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Read, Write};
use std::path::Component;

pub use cap_std::fs_utf8::Dir;

/// Open a UTF-8 file path using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read a whole file into memory.
pub fn read_file(path: &Utf8Path) -> io::Result<Vec<u8>> {
    let mut file = open_utf8_file(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Return whether a path exists and is a regular file.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let parent = if parent.as_str().is_empty() {
        Utf8Path::new(".")
    } else {
        parent
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Create `path` and its missing parents, returning a handle to it.
///
/// Absolute and relative paths are both accepted.
pub fn ensure_dir(path: &Utf8Path) -> io::Result<Dir> {
    let (base, relative) = split_ambient(path)?;
    if relative.as_str().is_empty() || relative == Utf8Path::new(".") {
        return Ok(base);
    }
    base.create_dir_all(&relative)?;
    base.open_dir(&relative)
}

/// Create or truncate `name` inside `dir` and write `bytes` to it.
pub fn write_file(dir: &Dir, name: &str, bytes: &[u8]) -> io::Result<()> {
    let mut file = dir.create(name)?;
    file.write_all(bytes)?;
    file.flush()
}

/// Split a path into an ambient base directory and the part below it.
fn split_ambient(path: &Utf8Path) -> io::Result<(Dir, Utf8PathBuf)> {
    let std_path = path.as_std_path();
    let (base, relative) = match std_path.components().next() {
        // Windows drive or UNC prefix.
        Some(Component::Prefix(prefix)) => {
            let prefix = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            let base = Utf8PathBuf::from(prefix).join(std::path::MAIN_SEPARATOR.to_string());
            let relative = path
                .strip_prefix(&base)
                .or_else(|_| path.strip_prefix(prefix))
                .map_err(|_| io::Error::other("failed to strip prefix from path"))?
                .to_path_buf();
            (base, relative)
        }
        Some(Component::RootDir) => {
            let base = Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string());
            let relative = path
                .strip_prefix(&base)
                .map_err(|_| io::Error::other("failed to strip root from path"))?
                .to_path_buf();
            (base, relative)
        }
        _ => (Utf8PathBuf::from("."), path.to_path_buf()),
    };
    let dir = Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((dir, relative))
}
