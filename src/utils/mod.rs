//! Utilities (snippet file reading, saving editor buffers).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

/// Read a snippet file and return its content as string.
/// Currently supports .js, .mjs, and .txt files.
pub fn read_source(file_path: &str) -> Result<String> {
    let path = Path::new(file_path);

    // Check if file exists
    if !path.exists() {
        bail!("Snippet file '{}' does not exist", file_path);
    }

    // Check if it's a file (not directory)
    if !path.is_file() {
        bail!("'{}' is not a file", file_path);
    }

    // Get file extension and check if supported
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "js" | "mjs" | "txt" | "" => fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file '{}': {}", file_path, e)),
        _ => {
            bail!(
                "Unsupported file type: .{}\nCurrently supported: .js, .mjs, .txt, and files without extension",
                extension
            );
        }
    }
}

/// Persist an editor buffer to disk. With a configured directory the file
/// lands there under a generated name; otherwise it goes to a kept
/// tempfile whose path is returned.
pub fn save_snippet(source: &str, save_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = save_dir {
        fs::create_dir_all(dir)
            .map_err(|e| anyhow::anyhow!("Failed to create '{}': {}", dir.display(), e))?;
        let file = tempfile::Builder::new()
            .prefix("snippet-")
            .suffix(".js")
            .tempfile_in(dir)?;
        fs::write(file.path(), source)?;
        let (_, path) = file.keep()?;
        Ok(path)
    } else {
        let file = tempfile::Builder::new()
            .prefix("snippet-")
            .suffix(".js")
            .tempfile()?;
        fs::write(file.path(), source)?;
        let (_, path) = file.keep()?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_source_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippet.py");
        fs::write(&path, "print('no')").unwrap();
        assert!(read_source(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn read_source_reads_js_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippet.js");
        fs::write(&path, "console.log(1);").unwrap();
        let content = read_source(path.to_str().unwrap()).unwrap();
        assert_eq!(content, "console.log(1);");
    }

    #[test]
    fn save_snippet_writes_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_snippet("console.log('saved');", Some(dir.path())).unwrap();
        assert!(path.starts_with(dir.path()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "console.log('saved');");
    }
}
