// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! True random number generator (RNG).

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::AHB3PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    pub RngRegisters {
        /// Control register
        (0x000 => pub cr: ReadWrite<u32, CR::Register>),
        /// Status register
        (0x004 => pub sr: ReadWrite<u32, SR::Register>),
        /// Data register
        (0x008 => pub dr: ReadOnly<u32>),
        (0x00C => _reserved0),
        /// Health test control register
        (0x010 => pub htcr: ReadWrite<u32>),
        (0x014 => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Lock `CR` until the next reset
        CONFIGLOCK OFFSET(31) NUMBITS(1) [],
        /// Conditioning soft reset
        CONDRST OFFSET(30) NUMBITS(1) [],
        /// RNG configuration 1
        RNG_CONFIG1 OFFSET(20) NUMBITS(6) [],
        /// Clock divider factor
        CLKDIV OFFSET(16) NUMBITS(4) [],
        /// RNG configuration 2
        RNG_CONFIG2 OFFSET(13) NUMBITS(3) [],
        /// NIST custom configuration
        NISTC OFFSET(12) NUMBITS(1) [],
        /// RNG configuration 3
        RNG_CONFIG3 OFFSET(8) NUMBITS(4) [],
        /// Clock error detection disable
        CED OFFSET(5) NUMBITS(1) [],
        /// Interrupt enable
        IE OFFSET(3) NUMBITS(1) [],
        /// True random number generator enable
        RNGEN OFFSET(2) NUMBITS(1) []
    ],
    pub SR [
        /// Seed error interrupt status
        SEIS OFFSET(6) NUMBITS(1) [],
        /// Clock error interrupt status
        CEIS OFFSET(5) NUMBITS(1) [],
        /// Seed error current status
        SECS OFFSET(2) NUMBITS(1) [],
        /// Clock error current status
        CECS OFFSET(1) NUMBITS(1) [],
        /// Data ready
        DRDY OFFSET(0) NUMBITS(1) []
    ]
];

pub const RNG_BASE: StaticRef<RngRegisters> =
    unsafe { StaticRef::new((AHB3PERIPH_BASE + 0x1000) as *const RngRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::Readable;
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn layout() {
        assert_eq!(core::mem::offset_of!(RngRegisters, htcr), 0x10);
        assert_eq!(core::mem::size_of::<RngRegisters>(), 0x14);
        assert_eq!(RNG_BASE.addr(), 0x5800_1000);
    }

    #[test]
    fn seed_error_is_not_data_ready() {
        let sr = InMemoryRegister::<u32, SR::Register>::new(1 << 6);
        assert!(sr.is_set(SR::SEIS));
        assert!(!sr.is_set(SR::DRDY));
        assert!(!sr.is_set(SR::CEIS));
    }
}
