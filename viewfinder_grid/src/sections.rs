// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canonical portfolio sections and their stable ordering.

/// A named portfolio section on the spatial canvas.
///
/// The canonical set is fixed; the layout functions also accept arbitrary
/// section names (hashed onto a cell), but determinism-with-uniqueness is
/// only guaranteed for this set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Landing hero with the animated sequence.
    Hero,
    /// The photography work itself.
    Capture,
    /// Curated portfolio collections.
    Portfolio,
    /// About the photographer.
    About,
    /// Writing and behind-the-scenes notes.
    Journal,
    /// Contact and booking.
    Contact,
}

impl Section {
    /// Every canonical section, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Hero,
        Self::Capture,
        Self::Portfolio,
        Self::About,
        Self::Journal,
        Self::Contact,
    ];

    /// Stable index of this section in [`Section::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Hero => 0,
            Self::Capture => 1,
            Self::Portfolio => 2,
            Self::About => 3,
            Self::Journal => 4,
            Self::Contact => 5,
        }
    }

    /// The section's name as used in navigation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Capture => "capture",
            Self::Portfolio => "portfolio",
            Self::About => "about",
            Self::Journal => "journal",
            Self::Contact => "contact",
        }
    }

    /// Looks a canonical section up by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == name)
    }
}

/// Stable placement index for a section name.
///
/// Canonical names use their canonical order; anything else hashes with
/// FNV-1a, so unknown names still place deterministically (though without
/// the pairwise-distinctness guarantee the canonical set has).
#[must_use]
pub fn section_index(name: &str) -> usize {
    match Section::from_name(name) {
        Some(section) => section.index(),
        None => fnv1a(name.as_bytes()),
    }
}

fn fnv1a(bytes: &[u8]) -> usize {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    let mut hash = OFFSET_BASIS;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(PRIME);
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "placement indices are taken modulo the cell count immediately after"
    )]
    {
        hash as usize
    }
}

#[cfg(test)]
mod tests {
    use super::{Section, section_index};

    #[test]
    fn canonical_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_name(section.as_str()), Some(section));
        }
        assert_eq!(Section::from_name("darkroom"), None);
    }

    #[test]
    fn canonical_indices_are_distinct_and_ordered() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(section_index(section.as_str()), i);
        }
    }

    #[test]
    fn unknown_names_hash_deterministically() {
        assert_eq!(section_index("darkroom"), section_index("darkroom"));
        assert_ne!(section_index("darkroom"), section_index("lightroom"));
    }
}
