// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Public key accelerator (PKA).
//!
//! Operands and results are exchanged through the PKA RAM; the word offsets
//! of each operand depend on the selected operation and are not modelled
//! here.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::AHB3PERIPH_BASE;
use crate::static_ref::StaticRef;

/// 32-bit words of PKA RAM.
pub const RAM_WORDS: usize = 894;

register_structs! {
    pub PkaRegisters {
        /// Control register
        (0x0000 => pub cr: ReadWrite<u32, CR::Register>),
        /// Status register
        (0x0004 => pub sr: ReadOnly<u32, SR::Register>),
        /// Clear flag register
        (0x0008 => pub clrfr: WriteOnly<u32, CLRFR::Register>),
        (0x000C => _reserved0),
        /// PKA RAM
        (0x0400 => pub ram: [ReadWrite<u32>; RAM_WORDS]),
        (0x11F8 => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Address error interrupt enable
        ADDRERRIE OFFSET(20) NUMBITS(1) [],
        /// RAM error interrupt enable
        RAMERRIE OFFSET(19) NUMBITS(1) [],
        /// End of operation interrupt enable
        PROCENDIE OFFSET(17) NUMBITS(1) [],
        /// Operation selection
        MODE OFFSET(8) NUMBITS(6) [
            MontgomeryExponentiation = 0x00,
            MontgomeryParameter = 0x01,
            MontgomeryExponentiationFast = 0x02,
            RsaCrtExponentiation = 0x07,
            ModularInversion = 0x08,
            ArithmeticAddition = 0x09,
            ArithmeticSubtraction = 0x0A,
            ArithmeticMultiplication = 0x0B,
            Comparison = 0x0C,
            ModularReduction = 0x0D,
            ModularAddition = 0x0E,
            ModularSubtraction = 0x0F,
            MontgomeryMultiplication = 0x10,
            EccScalarMultiplication = 0x20,
            EccScalarMultiplicationFast = 0x22,
            EcdsaSign = 0x24,
            EcdsaVerification = 0x26,
            PointCheck = 0x28
        ],
        /// Start the operation
        START OFFSET(1) NUMBITS(1) [],
        /// PKA enable
        EN OFFSET(0) NUMBITS(1) []
    ],
    pub SR [
        /// Address error flag
        ADDRERRF OFFSET(20) NUMBITS(1) [],
        /// RAM error flag
        RAMERRF OFFSET(19) NUMBITS(1) [],
        /// End of operation flag
        PROCENDF OFFSET(17) NUMBITS(1) [],
        /// Busy
        BUSY OFFSET(16) NUMBITS(1) []
    ],
    pub CLRFR [
        ADDRERRFC OFFSET(20) NUMBITS(1) [],
        RAMERRFC OFFSET(19) NUMBITS(1) [],
        PROCENDFC OFFSET(17) NUMBITS(1) []
    ]
];

pub const PKA_BASE: StaticRef<PkaRegisters> =
    unsafe { StaticRef::new((AHB3PERIPH_BASE + 0x2000) as *const PkaRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn ram_window() {
        assert_eq!(offset_of!(PkaRegisters, ram), 0x400);
        assert_eq!(size_of::<PkaRegisters>(), 0x400 + RAM_WORDS * 4);
        assert_eq!(PKA_BASE.addr(), 0x5800_2000);
    }

    #[test]
    fn start_ecdsa_sign() {
        let cr = InMemoryRegister::<u32, CR::Register>::new(0);
        cr.write(CR::EN::SET + CR::MODE::EcdsaSign + CR::START::SET + CR::PROCENDIE::SET);
        assert_eq!(cr.get(), 1 | (0x24 << 8) | (1 << 1) | (1 << 17));
        assert_eq!(
            cr.read_as_enum::<CR::MODE::Value>(CR::MODE),
            Some(CR::MODE::Value::EcdsaSign)
        );
    }

    #[test]
    fn clear_flags_align_with_status() {
        assert_eq!(CLRFR::PROCENDFC.shift, SR::PROCENDF.shift);
        assert_eq!(CLRFR::ADDRERRFC.shift, SR::ADDRERRF.shift);
    }
}
