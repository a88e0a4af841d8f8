// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! General-purpose 16-bit timers with one channel (TIM16, TIM17).
//!
//! Channel 1 has a complementary output and a break input. Bitfields
//! shared with TIM1 come from [`crate::tim1`].

use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::APB2PERIPH_BASE;
use crate::static_ref::StaticRef;
use crate::tim1::{BDTR, CCER, CCMR1, CNT, CR1, CR2, DCR, DIER, EGR, SR, VALUE16};

register_structs! {
    pub Tim16Registers {
        /// Control register 1
        (0x000 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// Control register 2
        (0x004 => pub cr2: ReadWrite<u32, CR2::Register>),
        (0x008 => _reserved0),
        /// DMA/interrupt enable register
        (0x00C => pub dier: ReadWrite<u32, DIER::Register>),
        /// Status register
        (0x010 => pub sr: ReadWrite<u32, SR::Register>),
        /// Event generation register
        (0x014 => pub egr: WriteOnly<u32, EGR::Register>),
        /// Capture/compare mode register 1
        (0x018 => pub ccmr1: ReadWrite<u32, CCMR1::Register>),
        (0x01C => _reserved1),
        /// Capture/compare enable register
        (0x020 => pub ccer: ReadWrite<u32, CCER::Register>),
        /// Counter
        (0x024 => pub cnt: ReadWrite<u32, CNT::Register>),
        /// Prescaler
        (0x028 => pub psc: ReadWrite<u32, VALUE16::Register>),
        /// Auto-reload register
        (0x02C => pub arr: ReadWrite<u32, VALUE16::Register>),
        /// Repetition counter register
        (0x030 => pub rcr: ReadWrite<u32, RCR::Register>),
        /// Capture/compare register 1
        (0x034 => pub ccr1: ReadWrite<u32, VALUE16::Register>),
        (0x038 => _reserved2),
        /// Break and dead-time register
        (0x044 => pub bdtr: ReadWrite<u32, BDTR::Register>),
        /// DMA control register
        (0x048 => pub dcr: ReadWrite<u32, DCR::Register>),
        /// DMA address for full transfer
        (0x04C => pub dmar: ReadWrite<u32>),
        /// Option register 1
        (0x050 => pub or1: ReadWrite<u32>),
        (0x054 => _reserved3),
        /// Alternate function register 1
        (0x060 => pub af1: ReadWrite<u32, AF1::Register>),
        (0x064 => _reserved4),
        /// Input selection register
        (0x068 => pub tisel: ReadWrite<u32, TISEL::Register>),
        (0x06C => @END),
    }
}

register_bitfields![u32,
    pub RCR [
        REP OFFSET(0) NUMBITS(8) []
    ],
    pub AF1 [
        BKCMP2P OFFSET(11) NUMBITS(1) [],
        BKCMP1P OFFSET(10) NUMBITS(1) [],
        BKINP OFFSET(9) NUMBITS(1) [],
        BKCMP2E OFFSET(2) NUMBITS(1) [],
        BKCMP1E OFFSET(1) NUMBITS(1) [],
        BKINE OFFSET(0) NUMBITS(1) []
    ],
    pub TISEL [
        /// Input capture 1 selection
        TI1SEL OFFSET(0) NUMBITS(4) [
            Ti1 = 0b0000,
            /// LSI on TIM16, LSE on TIM17
            LowSpeedClock = 0b0001,
            /// MCO on TIM17 only
            Mco = 0b0010
        ]
    ]
];

pub const TIM16_BASE: StaticRef<Tim16Registers> =
    unsafe { StaticRef::new((APB2PERIPH_BASE + 0x4400) as *const Tim16Registers) };
pub const TIM17_BASE: StaticRef<Tim16Registers> =
    unsafe { StaticRef::new((APB2PERIPH_BASE + 0x4800) as *const Tim16Registers) };

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(Tim16Registers, dier), 0x0C);
        assert_eq!(offset_of!(Tim16Registers, ccer), 0x20);
        assert_eq!(offset_of!(Tim16Registers, ccr1), 0x34);
        assert_eq!(offset_of!(Tim16Registers, bdtr), 0x44);
        assert_eq!(offset_of!(Tim16Registers, tisel), 0x68);
        assert_eq!(size_of::<Tim16Registers>(), 0x6C);
        assert_eq!(TIM16_BASE.addr(), 0x4001_4400);
        assert_eq!(TIM17_BASE.addr(), 0x4001_4800);
    }

    #[test]
    fn capture_lsi_for_calibration() {
        let tisel = InMemoryRegister::<u32, TISEL::Register>::new(0);
        tisel.write(TISEL::TI1SEL::LowSpeedClock);
        assert_eq!(tisel.get(), 1);

        let ccmr1 = InMemoryRegister::<u32, CCMR1::Register>::new(0);
        ccmr1.write(CCMR1::CC1S::InputDirect + CCMR1::IC1PSC.val(0b11));
        assert_eq!(ccmr1.get(), 0b01 | (0b11 << 2));
    }
}
