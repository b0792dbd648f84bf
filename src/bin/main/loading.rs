use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::info;
use sposa_core::content::Document;
use thiserror::Error;

use super::clipboard;

/// Keyword accepted in place of a path, matched case-insensitively.
pub(super) const CLIPBOARD_KEYWORD: &str = ":clipboard:";

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum Source {
    File(PathBuf),
    Clipboard,
}

impl Source {
    /// Resolve the positional argument and `--clipboard` flag. `None` means
    /// nothing to read, which the caller answers with help.
    pub(super) fn resolve(positional: Option<&str>, clipboard_flag: bool) -> Option<Self> {
        if clipboard_flag {
            return Some(Self::Clipboard);
        }

        let positional = positional?;
        if positional.eq_ignore_ascii_case(CLIPBOARD_KEYWORD) {
            Some(Self::Clipboard)
        } else {
            Some(Self::File(PathBuf::from(positional)))
        }
    }
}

#[derive(Error, Debug)]
pub(super) enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to access clipboard: {0}")]
    ClipboardUnavailable(String),

    #[error("clipboard is empty")]
    ClipboardEmpty,
}

pub(super) fn load_text(source: &Source) -> Result<String, LoadError> {
    match source {
        Source::File(path) => load_text_from_file(path),
        Source::Clipboard => clipboard::load_text_from_clipboard(),
    }
}

pub(super) fn load_text_from_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Lowercase unless `keep_case`; everything else is left to the tokenizer.
pub(super) fn normalize_text(text: &str, keep_case: bool) -> String {
    if keep_case {
        text.to_owned()
    } else {
        text.to_lowercase()
    }
}

pub(super) fn load_document(source: &Source, keep_case: bool) -> Result<Document, LoadError> {
    let text = load_text(source)?;
    let document = Document::tokenize(&normalize_text(&text, keep_case));
    info!(
        "loading: source={:?} bytes={} words={}",
        source,
        text.len(),
        document.len()
    );
    Ok(document)
}
