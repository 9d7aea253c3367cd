use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Reads a GraphQL document (SDL or query) from disk as UTF-8, dropping a
/// leading byte-order mark if there is one.
pub fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    let content = String::from_utf8(bytes)
        .map_err(|err| ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    log::trace!("Read {} bytes from {file_path:?}.", content.len());
    Ok(match content.strip_prefix('\u{feff}') {
        Some(without_bom) => without_bom.to_string(),
        None => content,
    })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("Unable to decode {file_path:?} as UTF-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Unable to read {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("{0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
impl ReadContentError {
    pub fn file_path(&self) -> &Path {
        match self {
            Self::FileDecodeError { file_path, .. }
                | Self::FileReadError { file_path, .. }
                | Self::PathIsNotAFile(file_path) => file_path.as_path(),
        }
    }
}
// io::Error has no PartialEq, so read errors compare by kind.
impl std::cmp::PartialEq for ReadContentError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::FileDecodeError { err: self_err, .. },
             Self::FileDecodeError { err: other_err, .. }) =>
                self.file_path() == other.file_path() && self_err == other_err,

            (Self::FileReadError { err: self_err, .. },
             Self::FileReadError { err: other_err, .. }) =>
                self.file_path() == other.file_path()
                && self_err.kind() == other_err.kind(),

            (Self::PathIsNotAFile(_), Self::PathIsNotAFile(_)) =>
                self.file_path() == other.file_path(),

            _ => false,
        }
    }
}
