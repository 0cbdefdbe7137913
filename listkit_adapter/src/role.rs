// Copyright 2025 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural role of an item within its collection.

use crate::{Error, Result};

/// Where an item sits in its collection.
///
/// Hosts typically use the role to pick decorations such as rounded corners on
/// the first and last rows of a grouped section, or to hide the divider after
/// the last item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PositionRole {
    /// First item of a collection with at least two items.
    Leading,
    /// Neither first nor last.
    Middle,
    /// Last item of a collection with at least two items.
    Trailing,
    /// Sole item: simultaneously first and last.
    LeadingAndTrailing,
}

impl PositionRole {
    /// Classifies `index` within a collection of `len` items.
    ///
    /// Fails with [`Error::OutOfRange`] for negative indices. Collections of
    /// zero or one items classify every index as
    /// [`LeadingAndTrailing`](Self::LeadingAndTrailing); indices past the end
    /// of a larger collection classify as [`Middle`](Self::Middle).
    pub fn classify(index: isize, len: usize) -> Result<Self> {
        let index = usize::try_from(index).map_err(|_| Error::OutOfRange { index, len })?;
        Ok(Self::of(index, len))
    }

    /// Infallible form of [`classify`](Self::classify) for unsigned indices.
    #[must_use]
    pub const fn of(index: usize, len: usize) -> Self {
        if len <= 1 {
            Self::LeadingAndTrailing
        } else if index == 0 {
            Self::Leading
        } else if index == len - 1 {
            Self::Trailing
        } else {
            Self::Middle
        }
    }

    /// Roles of every index in `0..len`, in order.
    pub fn roles(len: usize) -> impl ExactSizeIterator<Item = Self> {
        (0..len).map(move |index| Self::of(index, len))
    }

    /// Bit pattern of this role.
    ///
    /// `LeadingAndTrailing` is the union of the `Leading` and `Trailing` bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Leading => 0x01,
            Self::Middle => 0x02,
            Self::Trailing => 0x04,
            Self::LeadingAndTrailing => 0x05,
        }
    }

    /// Returns `true` for the first item of the collection.
    #[must_use]
    pub const fn is_leading(self) -> bool {
        self.bits() & Self::Leading.bits() != 0
    }

    /// Returns `true` for the last item of the collection.
    #[must_use]
    pub const fn is_trailing(self) -> bool {
        self.bits() & Self::Trailing.bits() != 0
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::PositionRole;
    use crate::Error;

    #[test]
    fn larger_collections_split_into_leading_middle_trailing() {
        for len in 2..8_usize {
            for index in 0..len {
                let role = PositionRole::classify(index as isize, len).unwrap();
                let expected = if index == 0 {
                    PositionRole::Leading
                } else if index == len - 1 {
                    PositionRole::Trailing
                } else {
                    PositionRole::Middle
                };
                assert_eq!(role, expected, "index {index} of {len}");
            }
        }
    }

    #[test]
    fn empty_and_singleton_collections_are_leading_and_trailing() {
        for len in 0..=1 {
            for index in 0..3 {
                assert_eq!(
                    PositionRole::classify(index, len),
                    Ok(PositionRole::LeadingAndTrailing)
                );
            }
        }
    }

    #[test]
    fn negative_index_is_out_of_range() {
        for len in [0, 1, 2, 10] {
            assert_eq!(
                PositionRole::classify(-1, len),
                Err(Error::OutOfRange { index: -1, len })
            );
        }
        assert!(PositionRole::classify(isize::MIN, 3).is_err());
    }

    #[test]
    fn roles_cover_the_whole_collection() {
        let roles: Vec<_> = PositionRole::roles(4).collect();
        assert_eq!(
            roles,
            [
                PositionRole::Leading,
                PositionRole::Middle,
                PositionRole::Middle,
                PositionRole::Trailing,
            ]
        );
        assert_eq!(PositionRole::roles(0).len(), 0);
    }

    #[test]
    fn leading_and_trailing_carries_both_edges() {
        let sole = PositionRole::LeadingAndTrailing;
        assert_eq!(
            sole.bits(),
            PositionRole::Leading.bits() | PositionRole::Trailing.bits()
        );
        assert!(sole.is_leading() && sole.is_trailing());
        assert!(!PositionRole::Middle.is_leading());
        assert!(!PositionRole::Middle.is_trailing());
        assert!(PositionRole::Trailing.is_trailing());
    }
}
