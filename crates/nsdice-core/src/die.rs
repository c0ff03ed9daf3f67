//! The [`Die`] value type.
//!
//! A die is a multiset of face values. Two dice that differ only in the order
//! of their faces are the same die, so every [`Die`] stores its faces sorted
//! descending. That canonical form is what gets hashed, ordered and printed.
//!
//! ## Ordering
//!
//! `Die` orders lexicographically over its canonical faces, so `0000 < 1000 <
//! 1100 < 2000`. The generator emits dice in exactly this order and the
//! reporter walks the graph in it.
//!
//! ## Names
//!
//! [`Display`](fmt::Display) concatenates the faces without a separator:
//! `(4, 4, 0, 0)` renders as `4400`. Faces of 10 or more make names ambiguous;
//! parse with commas (`"10,4,0"`) when that matters.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DieParseError;

/// A single face value.
pub type Face = u32;

/// A die in canonical (descending) face order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Die(Vec<Face>);

impl Die {
    /// Build a die from faces in any order.
    #[must_use]
    pub fn from_faces(faces: impl IntoIterator<Item = Face>) -> Self {
        let mut faces: Vec<Face> = faces.into_iter().collect();
        faces.sort_unstable_by(|a, b| b.cmp(a));
        Self(faces)
    }

    /// Wrap faces the caller already holds in descending order.
    pub(crate) fn from_canonical(faces: Vec<Face>) -> Self {
        debug_assert!(faces.windows(2).all(|w| w[0] >= w[1]));
        Self(faces)
    }

    /// Faces, largest first.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.0
    }

    /// Number of faces.
    #[must_use]
    pub fn sides(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in &self.0 {
            write!(f, "{face}")?;
        }
        Ok(())
    }
}

impl FromStr for Die {
    type Err = DieParseError;

    /// Parse `"4400"` (one digit per face) or `"10,4,0"` (comma separated).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DieParseError::Empty);
        }

        let faces = if s.contains(',') {
            s.split(',')
                .map(|part| {
                    let part = part.trim();
                    part.parse::<Face>()
                        .map_err(|_| DieParseError::InvalidFace(part.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            s.chars()
                .map(|c| {
                    c.to_digit(10)
                        .ok_or_else(|| DieParseError::InvalidFace(c.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self::from_faces(faces))
    }
}
