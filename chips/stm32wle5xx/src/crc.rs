// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Cyclic redundancy check calculation unit (CRC).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::AHB1PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    pub CrcRegisters {
        /// Data register
        (0x000 => pub dr: ReadWrite<u32>),
        /// Independent data register
        (0x004 => pub idr: ReadWrite<u32>),
        /// Control register
        (0x008 => pub cr: ReadWrite<u32, CR::Register>),
        (0x00C => _reserved0),
        /// Initial CRC value
        (0x010 => pub init: ReadWrite<u32>),
        /// CRC polynomial
        (0x014 => pub pol: ReadWrite<u32>),
        (0x018 => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Reverse output data
        REV_OUT OFFSET(7) NUMBITS(1) [],
        /// Reverse input data
        REV_IN OFFSET(5) NUMBITS(2) [
            Normal = 0b00,
            Byte = 0b01,
            HalfWord = 0b10,
            Word = 0b11
        ],
        /// Polynomial size
        POLYSIZE OFFSET(3) NUMBITS(2) [
            Bits32 = 0b00,
            Bits16 = 0b01,
            Bits8 = 0b10,
            Bits7 = 0b11
        ],
        /// Reset the CRC calculation unit
        RESET OFFSET(0) NUMBITS(1) []
    ]
];

pub const CRC_BASE: StaticRef<CrcRegisters> =
    unsafe { StaticRef::new((AHB1PERIPH_BASE + 0x3000) as *const CrcRegisters) };

/// Reset value of `INIT`.
pub const DEFAULT_INIT: u32 = 0xFFFF_FFFF;
/// Reset value of `POL` (CRC-32, Ethernet).
pub const DEFAULT_POLYNOMIAL: u32 = 0x04C1_1DB7;

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn layout() {
        assert_eq!(core::mem::offset_of!(CrcRegisters, init), 0x10);
        assert_eq!(core::mem::size_of::<CrcRegisters>(), 0x18);
        assert_eq!(CRC_BASE.addr(), 0x4002_3000);
    }

    #[test]
    fn reflected_crc32_config() {
        let cr = InMemoryRegister::<u32, CR::Register>::new(0);
        cr.write(CR::REV_IN::Word + CR::REV_OUT::SET + CR::RESET::SET);
        assert_eq!(cr.get(), (0b11 << 5) | (1 << 7) | 1);
        assert!(cr.matches_all(CR::POLYSIZE::Bits32));
    }
}
