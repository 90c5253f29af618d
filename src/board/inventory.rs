use super::error::BoardError;
use super::piece::{Size, ALL_SIZES};

/// Pieces of each size a player starts with, indexed by `Size::index`.
pub const INITIAL_COUNTS: [u8; 3] = [3, 3, 2];

/// A player's remaining unplaced pieces, by size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Inventory {
    counts: [u8; 3],
}

impl Default for Inventory {
    fn default() -> Self {
        Self::initial()
    }
}

impl Inventory {
    pub fn initial() -> Self {
        Self {
            counts: INITIAL_COUNTS,
        }
    }

    pub fn empty() -> Self {
        Self { counts: [0; 3] }
    }

    pub fn with_counts(small: u8, medium: u8, large: u8) -> Self {
        Self {
            counts: [small, medium, large],
        }
    }

    pub fn initial_count(size: Size) -> u8 {
        INITIAL_COUNTS[size.index()]
    }

    pub fn count(&self, size: Size) -> u8 {
        self.counts[size.index()]
    }

    pub fn has(&self, size: Size) -> bool {
        self.count(size) > 0
    }

    pub fn is_exhausted(&self) -> bool {
        ALL_SIZES.iter().all(|&size| !self.has(size))
    }

    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    pub fn take(&mut self, size: Size) -> Result<(), BoardError> {
        let count = &mut self.counts[size.index()];
        if *count == 0 {
            return Err(BoardError::InventoryExhausted { size });
        }
        *count -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_composition() {
        let inventory = Inventory::initial();
        assert_eq!(inventory.count(Size::Large), 2);
        assert_eq!(inventory.count(Size::Medium), 3);
        assert_eq!(inventory.count(Size::Small), 3);
        assert_eq!(inventory.total(), 8);
    }

    #[test]
    fn test_take_until_exhausted() {
        let mut inventory = Inventory::initial();
        inventory.take(Size::Large).unwrap();
        inventory.take(Size::Large).unwrap();

        assert_eq!(
            inventory.take(Size::Large),
            Err(BoardError::InventoryExhausted { size: Size::Large })
        );
        assert_eq!(inventory.count(Size::Large), 0);
        assert!(!inventory.is_exhausted());
        assert!(Inventory::empty().is_exhausted());
    }
}
