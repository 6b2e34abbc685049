//! Edit engine for classort fixes.
//!
//! Responsibilities:
//! - Splice fix replacements into source text (single or batched).
//! - Apply fixes to files on disk behind a sha256 precondition.
//! - Generate a unified diff preview.

mod error;

pub use error::{EditError, EditResult, PolicyBlockError};

use anyhow::Context;
use camino::Utf8Path;
use classort_types::Fix;
use diffy::{PatchFormatter, create_patch};
use fs_err as fs;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Hex sha256 of file contents; the precondition fingerprint.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Splice one fix into `source`. Pure; the input is untouched outside the
/// fix span.
pub fn apply_fix(source: &str, fix: &Fix) -> EditResult<String> {
    let (start, end) = (fix.span.start, fix.span.end);
    if start > end || end > source.len() || !source.is_char_boundary(start) || !source.is_char_boundary(end) {
        return Err(EditError::Runtime(anyhow::anyhow!(
            "fix span {start}..{end} does not fit source of {} bytes",
            source.len()
        )));
    }
    let mut out = String::with_capacity(source.len() + fix.replacement.len());
    out.push_str(&source[..start]);
    out.push_str(&fix.replacement);
    out.push_str(&source[end..]);
    Ok(out)
}

/// Splice a batch of fixes. Fixes are ordered by span and applied
/// back-to-front so earlier spans stay valid; intersecting spans are a
/// policy block.
pub fn apply_fixes(source: &str, fixes: &[Fix]) -> EditResult<String> {
    let mut ordered: Vec<&Fix> = fixes.iter().collect();
    ordered.sort_by_key(|f| (f.span.start, f.span.end));

    for pair in ordered.windows(2) {
        if pair[1].span.start < pair[0].span.end {
            return Err(PolicyBlockError::OverlappingFixes {
                message: format!(
                    "{}..{} intersects {}..{}",
                    pair[0].span.start, pair[0].span.end, pair[1].span.start, pair[1].span.end
                ),
            }
            .into());
        }
    }

    let mut out = source.to_string();
    for fix in ordered.iter().rev() {
        out = apply_fix(&out, fix)?;
    }
    Ok(out)
}

/// Planned change for one file: the fixes plus the fingerprint of the
/// contents they were computed against.
#[derive(Debug, Clone)]
pub struct FileEdit {
    pub path: camino::Utf8PathBuf,
    /// sha256 of the file at scan time.
    pub sha256: String,
    pub fixes: Vec<Fix>,
}

/// Outcome of applying (or previewing) one file edit.
#[derive(Debug, Clone)]
pub struct FileChange {
    pub path: camino::Utf8PathBuf,
    pub before: String,
    pub after: String,
}

impl FileChange {
    pub fn is_noop(&self) -> bool {
        self.before == self.after
    }
}

/// Apply a file edit. When `dry_run` is true nothing is written, but the
/// resulting change is still produced for previewing.
pub fn apply_file_edit(edit: &FileEdit, dry_run: bool) -> EditResult<FileChange> {
    let before = fs::read_to_string(edit.path.as_std_path())
        .with_context(|| format!("read {}", edit.path))
        .map_err(EditError::Runtime)?;

    let current = sha256_hex(before.as_bytes());
    if current != edit.sha256 {
        return Err(PolicyBlockError::PreconditionMismatch {
            message: format!(
                "{} changed since it was scanned (expected {}, found {})",
                edit.path, edit.sha256, current
            ),
        }
        .into());
    }

    let after = apply_fixes(&before, &edit.fixes)?;
    if !dry_run && after != before {
        debug!(path = %edit.path, fixes = edit.fixes.len(), "writing fixed file");
        fs::write(edit.path.as_std_path(), after.as_bytes())
            .with_context(|| format!("write {}", edit.path))
            .map_err(EditError::Runtime)?;
    }

    Ok(FileChange {
        path: edit.path.clone(),
        before,
        after,
    })
}

/// Unified diff for a change, with `--- a/…`/`+++ b/…` style headers.
pub fn preview_patch(change: &FileChange) -> String {
    let patch = create_patch(&change.before, &change.after);
    let formatted = PatchFormatter::new().fmt_patch(&patch).to_string();
    format!(
        "--- a/{path}\n+++ b/{path}\n{formatted}",
        path = change.path
    )
}

/// Convenience for callers that already hold the file contents.
pub fn edit_for(path: &Utf8Path, contents: &str, fixes: Vec<Fix>) -> FileEdit {
    FileEdit {
        path: path.to_path_buf(),
        sha256: sha256_hex(contents.as_bytes()),
        fixes,
    }
}
