//! crates/xstat/src/attributes.rs
//!
//! Win32 file attribute bits.
//!
//! The values match the documented `FILE_ATTRIBUTE_*` constants so that
//! attribute sets can be built and inspected on every platform, including
//! hosts that never produce them. Only Windows providers fill these bits from
//! real filesystem entries.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// A set of Win32 file attribute flags.
///
/// Unknown bits are preserved as-is; the type never masks or validates the
/// raw value handed to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FileAttributes(u32);

impl FileAttributes {
    /// `FILE_ATTRIBUTE_READONLY`
    pub const READONLY: Self = Self(0x0000_0001);
    /// `FILE_ATTRIBUTE_HIDDEN`
    pub const HIDDEN: Self = Self(0x0000_0002);
    /// `FILE_ATTRIBUTE_SYSTEM`
    pub const SYSTEM: Self = Self(0x0000_0004);
    /// `FILE_ATTRIBUTE_DIRECTORY`
    pub const DIRECTORY: Self = Self(0x0000_0010);
    /// `FILE_ATTRIBUTE_ARCHIVE`
    pub const ARCHIVE: Self = Self(0x0000_0020);
    /// `FILE_ATTRIBUTE_NORMAL`
    pub const NORMAL: Self = Self(0x0000_0080);
    /// `FILE_ATTRIBUTE_TEMPORARY`
    pub const TEMPORARY: Self = Self(0x0000_0100);
    /// `FILE_ATTRIBUTE_SPARSE_FILE`
    pub const SPARSE_FILE: Self = Self(0x0000_0200);
    /// `FILE_ATTRIBUTE_REPARSE_POINT`
    pub const REPARSE_POINT: Self = Self(0x0000_0400);
    /// `FILE_ATTRIBUTE_COMPRESSED`
    pub const COMPRESSED: Self = Self(0x0000_0800);
    /// `FILE_ATTRIBUTE_OFFLINE`
    pub const OFFLINE: Self = Self(0x0000_1000);
    /// `FILE_ATTRIBUTE_NOT_CONTENT_INDEXED`
    pub const NOT_CONTENT_INDEXED: Self = Self(0x0000_2000);
    /// `FILE_ATTRIBUTE_ENCRYPTED`
    pub const ENCRYPTED: Self = Self(0x0000_4000);
    /// `FILE_ATTRIBUTE_RECALL_ON_OPEN`
    pub const RECALL_ON_OPEN: Self = Self(0x0004_0000);
    /// `FILE_ATTRIBUTE_PINNED`
    pub const PINNED: Self = Self(0x0008_0000);
    /// `FILE_ATTRIBUTE_UNPINNED`
    pub const UNPINNED: Self = Self(0x0010_0000);
    /// `FILE_ATTRIBUTE_RECALL_ON_DATA_ACCESS`
    ///
    /// Set on placeholder entries whose content lives with a remote provider.
    /// Reading the data forces the provider to download it.
    pub const RECALL_ON_DATA_ACCESS: Self = Self(0x0040_0000);

    const NAMED: [(Self, &'static str); 17] = [
        (Self::READONLY, "READONLY"),
        (Self::HIDDEN, "HIDDEN"),
        (Self::SYSTEM, "SYSTEM"),
        (Self::DIRECTORY, "DIRECTORY"),
        (Self::ARCHIVE, "ARCHIVE"),
        (Self::NORMAL, "NORMAL"),
        (Self::TEMPORARY, "TEMPORARY"),
        (Self::SPARSE_FILE, "SPARSE_FILE"),
        (Self::REPARSE_POINT, "REPARSE_POINT"),
        (Self::COMPRESSED, "COMPRESSED"),
        (Self::OFFLINE, "OFFLINE"),
        (Self::NOT_CONTENT_INDEXED, "NOT_CONTENT_INDEXED"),
        (Self::ENCRYPTED, "ENCRYPTED"),
        (Self::RECALL_ON_OPEN, "RECALL_ON_OPEN"),
        (Self::PINNED, "PINNED"),
        (Self::UNPINNED, "UNPINNED"),
        (Self::RECALL_ON_DATA_ACCESS, "RECALL_ON_DATA_ACCESS"),
    ];

    /// The empty attribute set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wraps a raw attribute word.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw attribute word.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` when no bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` when every bit of `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` when at least one bit of `other` is set in `self`.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns the union of both sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `self` with the bits of `other` cleared.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl BitOr for FileAttributes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for FileAttributes {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for FileAttributes {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl From<u32> for FileAttributes {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<FileAttributes> for u32 {
    fn from(attrs: FileAttributes) -> Self {
        attrs.0
    }
}

/// Renders the set as `ARCHIVE|HIDDEN`, with unnamed bits in hex.
impl fmt::Display for FileAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }

        let mut remaining = *self;
        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                remaining = remaining.difference(flag);
                first = false;
            }
        }
        if !remaining.is_empty() {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "{:#x}", remaining.0)?;
        }
        Ok(())
    }
}
