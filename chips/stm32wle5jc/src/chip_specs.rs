// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

use stm32wle5xx::chip_specific::ChipSpecs;
use stm32wle5xx::signature::Package;

pub enum Stm32wle5jcSpecs {}

impl ChipSpecs for Stm32wle5jcSpecs {
    const NAME: &'static str = "STM32WLE5JC";
    const FLASH_SIZE: usize = 256 * 1024;
    const SRAM1_SIZE: usize = 32 * 1024;
    const SRAM2_SIZE: usize = 32 * 1024;
    const PACKAGE: Package = Package::Ufqfpn48;
}

#[cfg(test)]
mod tests {
    use super::*;
    use stm32wle5xx::memory_map::{FLASH, SRAM1, SRAM2};

    #[test]
    fn full_size_part() {
        assert!(Stm32wle5jcSpecs::is_consistent());
        assert_eq!(Stm32wle5jcSpecs::flash_region(), FLASH);
        assert_eq!(Stm32wle5jcSpecs::sram1_region(), SRAM1);
        assert_eq!(Stm32wle5jcSpecs::sram2_region(), SRAM2);
        assert_eq!(Stm32wle5jcSpecs::flash_page_count(), 128);
    }

    #[test]
    fn sram_is_contiguous() {
        assert_eq!(
            Stm32wle5jcSpecs::sram1_region().end(),
            Stm32wle5jcSpecs::sram2_region().start
        );
        assert_eq!(
            Stm32wle5jcSpecs::SRAM1_SIZE + Stm32wle5jcSpecs::SRAM2_SIZE,
            64 * 1024
        );
    }

    #[test]
    fn matches_its_signature() {
        assert!(Stm32wle5jcSpecs::matches_signature(256, Package::Ufqfpn48));
        assert!(!Stm32wle5jcSpecs::matches_signature(128, Package::Ufqfpn48));
        assert_eq!(Stm32wle5jcSpecs::PACKAGE.pin_count(), 48);
    }
}
