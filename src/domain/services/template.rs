//! Manifest template service
//!
//! Substitutes `${NAME}` placeholder tokens in manifest text. Rendering is a
//! single left-to-right pass: substituted values are never rescanned, so the
//! result does not depend on the order of the substitution map and a value
//! that itself looks like a token is emitted literally.
//!
//! Tokens with no substitution are left byte-identical in the output. Keys
//! are matched literally, so a key may contain `}`; where two keys match at
//! the same position the longer token wins.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::ports::{FileSystem, FsError};
use crate::error::{HippoError, HippoResult};

/// Placeholder replaced with the commit identifier
pub const COMMIT_PLACEHOLDER: &str = "COMMIT";

/// Placeholder replaced with the render timestamp
pub const TIMESTAMP_PLACEHOLDER: &str = "TIMESTAMP";

/// Placeholder name -> replacement value
pub type Substitutions = BTreeMap<String, String>;

const TOKEN_OPEN: &str = "${";
const TOKEN_CLOSE: char = '}';

/// The literal token for a placeholder name, e.g. `COMMIT` -> `${COMMIT}`
pub fn placeholder_token(name: &str) -> String {
    format!("{}{}{}", TOKEN_OPEN, name, TOKEN_CLOSE)
}

/// Replace every occurrence of each `${KEY}` with its value.
pub fn render_template(template: &str, substitutions: &Substitutions) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(TOKEN_OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + TOKEN_OPEN.len()..];

        match token_at(after, substitutions) {
            Some((key_len, value)) => {
                out.push_str(value);
                rest = &after[key_len + TOKEN_CLOSE.len_utf8()..];
            }
            None => {
                out.push_str(TOKEN_OPEN);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Longest `KEY}` at the start of `after`, as (key length, value)
fn token_at<'a>(after: &str, substitutions: &'a Substitutions) -> Option<(usize, &'a str)> {
    substitutions
        .iter()
        .filter(|(key, _)| {
            after.starts_with(key.as_str()) && after[key.len()..].starts_with(TOKEN_CLOSE)
        })
        .max_by_key(|(key, _)| key.len())
        .map(|(key, value)| (key.len(), value.as_str()))
}

/// Placeholder names present in `text`, unique, in order of first appearance.
///
/// Only well-formed names (`[A-Za-z0-9_]+`) count; stray `${` sequences are
/// ignored.
pub fn find_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(TOKEN_OPEN) {
        let after = &rest[start + TOKEN_OPEN.len()..];
        rest = after;

        let Some(end) = after.find(TOKEN_CLOSE) else {
            break;
        };
        let name = &after[..end];
        if is_placeholder_name(name) && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    names
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Loads manifest templates through the [`FileSystem`] port and renders them.
pub struct TemplateEngine<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> TemplateEngine<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Whether a template exists at `path`
    pub fn exists(&self, path: &Path) -> bool {
        self.fs.exists(path)
    }

    /// Read the template at `path` and substitute placeholders.
    ///
    /// Fails with `ManifestNotFound` when the file is absent and `Read` on
    /// any other I/O failure.
    pub fn render(&self, path: &Path, substitutions: &Substitutions) -> HippoResult<String> {
        let template = self.fs.read(path).map_err(|e| match e {
            FsError::NotFound(_) => HippoError::ManifestNotFound {
                path: path.to_path_buf(),
            },
            FsError::PermissionDenied(_) => HippoError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, e.to_string()),
            },
            FsError::Io(_, source) => HippoError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Ok(render_template(&template, substitutions))
    }
}
