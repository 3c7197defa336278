//! Tracked assets and the selection toggle
//!
//! The ticker tracks two assets. A push-button wired to an edge-triggered
//! input flips between them; the render loop reads the selection to pick
//! the label and the price-table slot to show. The live selection lives in
//! a single atomic byte owned by the firmware — this module only defines
//! the values that byte can take and the transitions between them.

/// A tracked asset, doubling as its price-table index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Asset {
    /// Index 0, the boot-time selection
    #[default]
    Bitcoin = 0,
    /// Index 1
    Ethereum = 1,
}

impl Asset {
    /// Number of tracked assets
    pub const COUNT: usize = 2;

    /// The other asset
    pub fn toggle(self) -> Self {
        match self {
            Asset::Bitcoin => Asset::Ethereum,
            Asset::Ethereum => Asset::Bitcoin,
        }
    }

    /// Price-table index of this asset
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label, at most one LCD line
    pub fn label(self) -> &'static str {
        match self {
            Asset::Bitcoin => "Bitcoin",
            Asset::Ethereum => "Ethereum",
        }
    }

    /// Recover an asset from its index; any nonzero value reads as
    /// [`Asset::Ethereum`] so a torn or stray selection byte still maps
    /// to a valid asset
    pub fn from_index(index: u8) -> Self {
        if index == 0 {
            Asset::Bitcoin
        } else {
            Asset::Ethereum
        }
    }
}
