//! Candidate name construction.
//!
//! Names are `<prefix><suffix>` where the suffix is lowercase hex drawn from
//! the OS entropy source. Uniqueness is not decided here: the allocator
//! relies on exclusive creation and simply asks for another candidate when a
//! name is taken.

use std::path::{self, Path, PathBuf};

use crate::error::AllocError;

/// Characters used for the random suffix.
const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Maximum filename component length (NAME_MAX on most POSIX systems, and
/// the per-component limit on NTFS).
pub(crate) const NAME_MAX: usize = 255;

/// Rejects prefixes that would place the file outside the target directory.
pub(crate) fn validate_prefix(prefix: &str) -> Result<(), AllocError> {
    if prefix.chars().any(path::is_separator) || prefix.contains('\0') {
        return Err(AllocError::InvalidPrefix(prefix.to_owned()));
    }
    Ok(())
}

/// Resolves the target directory; an empty path means the platform temp
/// directory.
pub(crate) fn resolve_dir(dir: &Path) -> PathBuf {
    if dir.as_os_str().is_empty() {
        std::env::temp_dir()
    } else {
        dir.to_path_buf()
    }
}

/// Shortens `prefix` so that `prefix + suffix` fits in [`NAME_MAX`] bytes,
/// without splitting a multi-byte UTF-8 sequence.
pub(crate) fn fit_prefix(prefix: &str, suffix_len: usize) -> &str {
    let budget = NAME_MAX.saturating_sub(suffix_len);
    if prefix.len() <= budget {
        return prefix;
    }
    let mut end = budget;
    while end > 0 && !prefix.is_char_boundary(end) {
        end -= 1;
    }
    &prefix[..end]
}

/// Draws `bytes` random bytes and renders them as `2 * bytes` hex chars.
pub(crate) fn random_suffix(bytes: usize) -> Result<String, AllocError> {
    let mut raw = vec![0u8; bytes];
    getrandom::fill(&mut raw).map_err(AllocError::Entropy)?;
    Ok(encode_hex(&raw))
}

fn encode_hex(raw: &[u8]) -> String {
    let mut out = String::with_capacity(raw.len() * 2);
    for &b in raw {
        out.push(HEX_CHARS[usize::from(b >> 4)] as char);
        out.push(HEX_CHARS[usize::from(b & 0x0f)] as char);
    }
    out
}
