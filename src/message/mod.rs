// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Reading the commit message file handed over by git.

use crate::error::MessageError;
use std::path::Path;

/// Read the whole commit message file.
///
/// The file is opened, read and closed before validation starts.
pub fn read_message(path: Option<&Path>) -> Result<String, MessageError> {
    let path = path.ok_or(MessageError::ArgumentMissing)?;

    let metadata = std::fs::metadata(path).map_err(|e| {
        tracing::debug!("Cannot stat {:?}: {}", path, e);
        MessageError::FileMissing {
            path: path.to_path_buf(),
        }
    })?;

    if metadata.is_dir() {
        tracing::debug!("{:?} is not a file", path);
        return Err(MessageError::FileMissing {
            path: path.to_path_buf(),
        });
    }

    std::fs::read_to_string(path).map_err(|e| MessageError::ReadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_argument_missing() {
        assert!(matches!(read_message(None), Err(MessageError::ArgumentMissing)));
    }

    #[test]
    fn test_file_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file_not_existed.txt");
        assert!(matches!(
            read_message(Some(&path)),
            Err(MessageError::FileMissing { .. })
        ));
    }

    #[test]
    fn test_directory_is_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            read_message(Some(dir.path())),
            Err(MessageError::FileMissing { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        fs::write(&path, [0x66, 0x65, 0xff, 0xfe]).unwrap();
        assert!(matches!(
            read_message(Some(&path)),
            Err(MessageError::ReadError { .. })
        ));
    }

    #[test]
    fn test_reads_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        fs::write(&path, "feat: add thing\n\nbody\n").unwrap();
        assert_eq!(read_message(Some(&path)).unwrap(), "feat: add thing\n\nbody\n");
    }
}
