use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Read a UTF-8 schema (or catalog/config) file into a [`String`].
pub(crate) fn read_content(file_path: impl AsRef<Path>) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    String::from_utf8(bytes)
        .map_err(|err| ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("`{file_path:?}` is not valid UTF-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("failed to read `{file_path:?}`: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("`{0:?}` is not a file")]
    PathIsNotAFile(PathBuf),
}
impl std::cmp::PartialEq for ReadContentError {
    fn eq(&self, other: &Self) -> bool {
        use ReadContentError::*;
        match (self, other) {
            (FileDecodeError { file_path: a, err: a_err },
             FileDecodeError { file_path: b, err: b_err })
                => a == b && a_err == b_err,

            (FileReadError { file_path: a, err: a_err },
             FileReadError { file_path: b, err: b_err })
                => a == b && a_err.kind() == b_err.kind(),

            (PathIsNotAFile(a), PathIsNotAFile(b)) => a == b,

            _ => false,
        }
    }
}
