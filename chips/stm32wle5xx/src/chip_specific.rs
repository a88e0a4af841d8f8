// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Part specific configuration.
//!
//! Parts of the STM32WLE5 line differ in flash size, SRAM size and package.
//! A part crate implements [`ChipSpecs`] on an empty type and hands that type
//! to code that needs the memory layout, instead of selecting the part with
//! cargo features.

use crate::flash::PAGE_SIZE;
use crate::memory_map::{
    Region, FLASH_BASE, FLASH_MAX_SIZE, SRAM1_BASE, SRAM1_MAX_SIZE, SRAM2_BASE, SRAM2_MAX_SIZE,
};
use crate::signature::Package;

/// Memory sizes and package of one STM32WLE5 part.
pub trait ChipSpecs {
    /// Part number, for diagnostics.
    const NAME: &'static str;

    /// Main flash size in bytes.
    const FLASH_SIZE: usize;

    /// SRAM1 size in bytes. SRAM1 always starts at [`SRAM1_BASE`].
    const SRAM1_SIZE: usize;

    /// SRAM2 size in bytes. SRAM2 always starts at [`SRAM2_BASE`], so on
    /// parts with a smaller SRAM1 the two are not contiguous.
    const SRAM2_SIZE: usize;

    const PACKAGE: Package;

    fn flash_region() -> Region {
        Region::new(FLASH_BASE, Self::FLASH_SIZE)
    }

    fn sram1_region() -> Region {
        Region::new(SRAM1_BASE, Self::SRAM1_SIZE)
    }

    fn sram2_region() -> Region {
        Region::new(SRAM2_BASE, Self::SRAM2_SIZE)
    }

    /// Number of 2 KiB erase pages in main flash.
    fn flash_page_count() -> usize {
        Self::FLASH_SIZE / PAGE_SIZE
    }

    /// Whether the sizes fit the family's address map.
    fn is_consistent() -> bool {
        Self::FLASH_SIZE <= FLASH_MAX_SIZE
            && Self::FLASH_SIZE % PAGE_SIZE == 0
            && Self::SRAM1_SIZE <= SRAM1_MAX_SIZE
            && Self::SRAM2_SIZE <= SRAM2_MAX_SIZE
    }

    /// Whether the device signature read at runtime matches this part.
    fn matches_signature(flash_size_kib: u16, package: Package) -> bool {
        usize::from(flash_size_kib) * 1024 == Self::FLASH_SIZE && package == Self::PACKAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Wle5Small {}

    impl ChipSpecs for Wle5Small {
        const NAME: &'static str = "STM32WLE5J8";
        const FLASH_SIZE: usize = 64 * 1024;
        const SRAM1_SIZE: usize = 10 * 1024;
        const SRAM2_SIZE: usize = 10 * 1024;
        const PACKAGE: Package = Package::Ufqfpn48;
    }

    #[test]
    fn provided_regions() {
        assert_eq!(Wle5Small::flash_region().end(), 0x0801_0000);
        assert_eq!(Wle5Small::flash_page_count(), 32);
        assert_eq!(Wle5Small::sram1_region().end(), 0x2000_2800);
        assert!(!Wle5Small::sram1_region().contains(Wle5Small::sram2_region().start));
        assert!(Wle5Small::sram2_region().contains(0x2000_8000));
        assert!(Wle5Small::is_consistent());
    }

    #[test]
    fn signature_match() {
        assert!(Wle5Small::matches_signature(64, Package::Ufqfpn48));
        assert!(!Wle5Small::matches_signature(256, Package::Ufqfpn48));
        assert!(!Wle5Small::matches_signature(64, Package::Wlcsp59));
    }
}
