use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Deepest nesting of any entity in the containment hierarchy.
pub const MAX_DEPTH: usize = 4;

/// Largest index a store accepts at any depth.
///
/// Counts are one past the highest index written and consumers walk
/// `0..count`, so indices are capped well below `usize::MAX`.
pub const MAX_INDEX: usize = (1 << 20) - 1;

/// Ordered tuple of indices locating one entity instance, outermost first.
///
/// Index paths are `Copy` and compare lexicographically, so a sorted slot map
/// iterates instances in the recommended outer-to-inner population order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<usize>", try_from = "Vec<usize>")]
pub struct IndexPath {
    len: u8,
    indices: [usize; MAX_DEPTH],
}

impl IndexPath {
    /// The empty path addressing document-level entities.
    pub const ROOT: IndexPath = IndexPath {
        len: 0,
        indices: [0; MAX_DEPTH],
    };

    /// Build a path from a fixed-size index array.
    ///
    /// # Panics
    ///
    /// Panics if `N` exceeds [`MAX_DEPTH`].
    pub fn new<const N: usize>(indices: [usize; N]) -> Self {
        assert!(N <= MAX_DEPTH, "index path deeper than {MAX_DEPTH}");
        let mut path = Self::ROOT;
        path.indices[..N].copy_from_slice(&indices);
        path.len = N as u8;
        path
    }

    /// Build a path from a slice, returning `None` if it is too deep.
    pub fn from_slice(indices: &[usize]) -> Option<Self> {
        if indices.len() > MAX_DEPTH {
            return None;
        }
        let mut path = Self::ROOT;
        path.indices[..indices.len()].copy_from_slice(indices);
        path.len = indices.len() as u8;
        Some(path)
    }

    /// Number of indices in the path
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True for the document-level path
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The indices as a slice
    pub fn as_slice(&self) -> &[usize] {
        &self.indices[..self.len()]
    }

    /// Index at the given depth
    pub fn get(&self, depth: usize) -> Option<usize> {
        self.as_slice().get(depth).copied()
    }

    /// Innermost index
    pub fn last(&self) -> Option<usize> {
        self.as_slice().last().copied()
    }

    /// The first `len` indices of this path.
    pub fn prefix(&self, len: usize) -> IndexPath {
        let mut path = *self;
        let len = len.min(self.len());
        path.len = len as u8;
        path.indices[len..].fill(0);
        path
    }

    /// Path of the enclosing instance, or `None` at the root.
    pub fn parent(&self) -> Option<IndexPath> {
        if self.is_empty() {
            None
        } else {
            Some(self.prefix(self.len() - 1))
        }
    }

    /// Path of the `index`-th child, or `None` if the path is already full.
    pub fn child(&self, index: usize) -> Option<IndexPath> {
        if self.len() == MAX_DEPTH {
            return None;
        }
        let len = self.len();
        let mut path = *self;
        path.indices[len] = index;
        path.len += 1;
        Some(path)
    }

    /// True if `prefix` is a leading part of this path.
    pub fn starts_with(&self, prefix: &IndexPath) -> bool {
        self.as_slice().starts_with(prefix.as_slice())
    }
}

impl PartialOrd for IndexPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IndexPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl fmt::Debug for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Colon-separated, e.g. `0:2:1`; the root path displays as an empty string.
impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

impl FromStr for IndexPath {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::ROOT);
        }
        let indices = s
            .split(':')
            .map(|part| {
                part.trim()
                    .parse::<usize>()
                    .map_err(|e| format!("invalid index '{part}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(indices)
    }
}

impl From<IndexPath> for Vec<usize> {
    fn from(path: IndexPath) -> Self {
        path.as_slice().to_vec()
    }
}

impl TryFrom<Vec<usize>> for IndexPath {
    type Error = String;

    fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
        IndexPath::from_slice(&indices)
            .ok_or_else(|| format!("index path has {} indices, at most {MAX_DEPTH} allowed", indices.len()))
    }
}
