// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Tamper and backup registers (TAMP).

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::APB1PERIPH_BASE;
use crate::static_ref::StaticRef;

/// Number of 32-bit backup registers.
pub const BACKUP_REGISTERS: usize = 20;

register_structs! {
    pub TampRegisters {
        /// Control register 1
        (0x000 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// Control register 2
        (0x004 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// Control register 3
        (0x008 => pub cr3: ReadWrite<u32, CR3::Register>),
        /// Filter control register
        (0x00C => pub fltcr: ReadWrite<u32, FLTCR::Register>),
        (0x010 => _reserved0),
        /// Interrupt enable register
        (0x02C => pub ier: ReadWrite<u32, IER::Register>),
        /// Status register
        (0x030 => pub sr: ReadOnly<u32, SR::Register>),
        /// Masked interrupt status register
        (0x034 => pub misr: ReadOnly<u32, SR::Register>),
        (0x038 => _reserved1),
        /// Status clear register
        (0x03C => pub scr: WriteOnly<u32, SR::Register>),
        /// Monotonic counter register
        (0x040 => pub countr: ReadWrite<u32>),
        (0x044 => _reserved2),
        /// Backup registers
        (0x100 => pub bkpr: [ReadWrite<u32>; BACKUP_REGISTERS]),
        (0x150 => @END),
    }
}

register_bitfields![u32,
    pub CR1 [
        /// Internal tamper 8 enable (monotonic counter overflow)
        ITAMP8E OFFSET(23) NUMBITS(1) [],
        /// Internal tamper 6 enable
        ITAMP6E OFFSET(21) NUMBITS(1) [],
        /// Internal tamper 5 enable
        ITAMP5E OFFSET(20) NUMBITS(1) [],
        /// Internal tamper 3 enable
        ITAMP3E OFFSET(18) NUMBITS(1) [],
        /// Tamper detection on TAMP_IN3 enable
        TAMP3E OFFSET(2) NUMBITS(1) [],
        /// Tamper detection on TAMP_IN2 enable
        TAMP2E OFFSET(1) NUMBITS(1) [],
        /// Tamper detection on TAMP_IN1 enable
        TAMP1E OFFSET(0) NUMBITS(1) []
    ],
    pub CR2 [
        /// Active level for tamper 3 input
        TAMP3TRG OFFSET(26) NUMBITS(1) [],
        /// Active level for tamper 2 input
        TAMP2TRG OFFSET(25) NUMBITS(1) [],
        /// Active level for tamper 1 input
        TAMP1TRG OFFSET(24) NUMBITS(1) [],
        /// Tamper 3 no erase
        TAMP3NOER OFFSET(2) NUMBITS(1) [],
        /// Tamper 2 no erase
        TAMP2NOER OFFSET(1) NUMBITS(1) [],
        /// Tamper 1 no erase
        TAMP1NOER OFFSET(0) NUMBITS(1) []
    ],
    pub CR3 [
        /// Internal tamper 8 no erase
        ITAMP8NOER OFFSET(7) NUMBITS(1) [],
        /// Internal tamper 6 no erase
        ITAMP6NOER OFFSET(5) NUMBITS(1) [],
        /// Internal tamper 5 no erase
        ITAMP5NOER OFFSET(4) NUMBITS(1) [],
        /// Internal tamper 3 no erase
        ITAMP3NOER OFFSET(2) NUMBITS(1) []
    ],
    pub FLTCR [
        /// Tamper pull-up disable
        TAMPPUDIS OFFSET(7) NUMBITS(1) [],
        /// Tamper precharge duration
        TAMPPRCH OFFSET(5) NUMBITS(2) [],
        /// Tamper filter count
        TAMPFLT OFFSET(3) NUMBITS(2) [],
        /// Tamper sampling frequency
        TAMPFREQ OFFSET(0) NUMBITS(3) []
    ],
    pub IER [
        ITAMP8IE OFFSET(23) NUMBITS(1) [],
        ITAMP6IE OFFSET(21) NUMBITS(1) [],
        ITAMP5IE OFFSET(20) NUMBITS(1) [],
        ITAMP3IE OFFSET(18) NUMBITS(1) [],
        TAMP3IE OFFSET(2) NUMBITS(1) [],
        TAMP2IE OFFSET(1) NUMBITS(1) [],
        TAMP1IE OFFSET(0) NUMBITS(1) []
    ],
    /// Tamper flags; `MISR` and `SCR` share the positions
    pub SR [
        ITAMP8F OFFSET(23) NUMBITS(1) [],
        ITAMP6F OFFSET(21) NUMBITS(1) [],
        ITAMP5F OFFSET(20) NUMBITS(1) [],
        ITAMP3F OFFSET(18) NUMBITS(1) [],
        TAMP3F OFFSET(2) NUMBITS(1) [],
        TAMP2F OFFSET(1) NUMBITS(1) [],
        TAMP1F OFFSET(0) NUMBITS(1) []
    ]
];

pub const TAMP_BASE: StaticRef<TampRegisters> =
    unsafe { StaticRef::new((APB1PERIPH_BASE + 0xB000) as *const TampRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(TampRegisters, ier), 0x2C);
        assert_eq!(offset_of!(TampRegisters, scr), 0x3C);
        assert_eq!(offset_of!(TampRegisters, countr), 0x40);
        assert_eq!(offset_of!(TampRegisters, bkpr), 0x100);
        assert_eq!(size_of::<TampRegisters>(), 0x150);
        assert_eq!(TAMP_BASE.addr(), 0x4000_B000);
    }

    #[test]
    fn interrupt_and_flag_positions_agree() {
        assert_eq!(IER::ITAMP8IE.shift, SR::ITAMP8F.shift);
        assert_eq!(IER::TAMP2IE.shift, SR::TAMP2F.shift);
        assert_eq!(CR1::ITAMP8E.shift, SR::ITAMP8F.shift);
    }
}
