// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Memory map of the STM32WLE5xx family.
//!
//! Sizes of flash and SRAM depend on the part; the values here are the
//! largest the family offers. Part crates narrow them through
//! [`crate::chip_specific::ChipSpecs`].

/// Main flash memory.
pub const FLASH_BASE: usize = 0x0800_0000;
/// Largest main flash in the family (STM32WLE5xC).
pub const FLASH_MAX_SIZE: usize = 256 * 1024;

/// SRAM1, always at the bottom of the SRAM window.
pub const SRAM1_BASE: usize = 0x2000_0000;
/// SRAM2, contiguous with SRAM1 and retained in Standby when enabled.
pub const SRAM2_BASE: usize = 0x2000_8000;
pub const SRAM1_MAX_SIZE: usize = 32 * 1024;
pub const SRAM2_MAX_SIZE: usize = 32 * 1024;

/// Bootloader ROM.
pub const SYSTEM_MEMORY_BASE: usize = 0x1FFF_0000;
pub const SYSTEM_MEMORY_SIZE: usize = 28 * 1024;
/// One-time programmable area.
pub const OTP_BASE: usize = 0x1FFF_7000;
pub const OTP_SIZE: usize = 1024;
/// Engineering bytes holding the device signature.
pub const ENGI_BYTES_BASE: usize = 0x1FFF_7400;
/// User option bytes.
pub const OPTION_BYTES_BASE: usize = 0x1FFF_7800;
pub const OPTION_BYTES_SIZE: usize = 0x80;

// Peripheral buses
pub const PERIPH_BASE: usize = 0x4000_0000;
pub const APB1PERIPH_BASE: usize = PERIPH_BASE;
pub const APB2PERIPH_BASE: usize = PERIPH_BASE + 0x0001_0000;
pub const AHB1PERIPH_BASE: usize = PERIPH_BASE + 0x0002_0000;
pub const AHB2PERIPH_BASE: usize = 0x4800_0000;
pub const AHB3PERIPH_BASE: usize = 0x5800_0000;
pub const APB3PERIPH_BASE: usize = 0x5801_0000;

/// Cortex-M4 private peripheral bus (SCB, NVIC, SysTick, DBGMCU).
pub const PPB_BASE: usize = 0xE000_0000;

/// A contiguous address window.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub size: usize,
}

impl Region {
    pub const fn new(start: usize, size: usize) -> Region {
        Region { start, size }
    }

    /// One past the last byte of the region.
    pub const fn end(&self) -> usize {
        self.start + self.size
    }

    pub const fn contains(&self, addr: usize) -> bool {
        addr >= self.start && addr < self.end()
    }
}

/// Bus a peripheral is attached to. Also selects the RCC enable register
/// that gates its clock.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bus {
    Apb1,
    Apb2,
    Ahb1,
    Ahb2,
    Ahb3,
    Apb3,
}

impl Bus {
    pub const fn window(self) -> Region {
        match self {
            Bus::Apb1 => Region::new(APB1PERIPH_BASE, 0xC000),
            Bus::Apb2 => Region::new(APB2PERIPH_BASE, 0x5000),
            Bus::Ahb1 => Region::new(AHB1PERIPH_BASE, 0x3400),
            Bus::Ahb2 => Region::new(AHB2PERIPH_BASE, 0x2000),
            Bus::Ahb3 => Region::new(AHB3PERIPH_BASE, 0x5000),
            Bus::Apb3 => Region::new(APB3PERIPH_BASE, 0x0400),
        }
    }
}

const BUSES: [Bus; 6] = [
    Bus::Apb1,
    Bus::Apb2,
    Bus::Ahb1,
    Bus::Ahb2,
    Bus::Ahb3,
    Bus::Apb3,
];

/// The bus whose peripheral window holds `addr`, if any.
pub fn peripheral_bus(addr: usize) -> Option<Bus> {
    BUSES.iter().copied().find(|bus| bus.window().contains(addr))
}

pub const FLASH: Region = Region::new(FLASH_BASE, FLASH_MAX_SIZE);
pub const SRAM1: Region = Region::new(SRAM1_BASE, SRAM1_MAX_SIZE);
pub const SRAM2: Region = Region::new(SRAM2_BASE, SRAM2_MAX_SIZE);
pub const SYSTEM_MEMORY: Region = Region::new(SYSTEM_MEMORY_BASE, SYSTEM_MEMORY_SIZE);
pub const OTP: Region = Region::new(OTP_BASE, OTP_SIZE);
pub const OPTION_BYTES: Region = Region::new(OPTION_BYTES_BASE, OPTION_BYTES_SIZE);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_bounds_are_half_open() {
        assert!(FLASH.contains(0x0800_0000));
        assert!(FLASH.contains(0x0803_FFFF));
        assert!(!FLASH.contains(0x0804_0000));
        assert_eq!(FLASH.end(), 0x0804_0000);
    }

    #[test]
    fn sram_banks_are_contiguous() {
        assert_eq!(SRAM1.end(), SRAM2.start);
        assert_eq!(SRAM2.end(), 0x2001_0000);
    }

    #[test]
    fn bus_lookup() {
        assert_eq!(peripheral_bus(0x4000_2800), Some(Bus::Apb1));
        assert_eq!(peripheral_bus(0x4001_3800), Some(Bus::Apb2));
        assert_eq!(peripheral_bus(0x4002_3000), Some(Bus::Ahb1));
        assert_eq!(peripheral_bus(0x4800_1C00), Some(Bus::Ahb2));
        assert_eq!(peripheral_bus(0x5800_1800), Some(Bus::Ahb3));
        assert_eq!(peripheral_bus(0x5801_0000), Some(Bus::Apb3));
        assert_eq!(peripheral_bus(0x2000_0000), None);
        assert_eq!(peripheral_bus(0x4003_0000), None);
    }

    #[test]
    fn bus_windows_do_not_overlap() {
        for (i, a) in BUSES.iter().enumerate() {
            for b in BUSES.iter().skip(i + 1) {
                let (a, b) = (a.window(), b.window());
                assert!(a.end() <= b.start || b.end() <= a.start);
            }
        }
    }
}
