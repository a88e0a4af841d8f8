// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! General-purpose 32-bit timer (TIM2).
//!
//! Four capture/compare channels, no complementary outputs, no break
//! input and no repetition counter. `CNT`, `ARR` and `CCRx` are full
//! 32-bit registers. Bitfields shared with TIM1 come from [`crate::tim1`].

use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::APB1PERIPH_BASE;
use crate::static_ref::StaticRef;
use crate::tim1::{CCER, CCMR1, CCMR2, CR1, CR2, DCR, DIER, EGR, SMCR, SR, VALUE16};

register_structs! {
    pub Tim2Registers {
        /// Control register 1
        (0x000 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// Control register 2
        (0x004 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// Slave mode control register
        (0x008 => pub smcr: ReadWrite<u32, SMCR::Register>),
        /// DMA/interrupt enable register
        (0x00C => pub dier: ReadWrite<u32, DIER::Register>),
        /// Status register
        (0x010 => pub sr: ReadWrite<u32, SR::Register>),
        /// Event generation register
        (0x014 => pub egr: WriteOnly<u32, EGR::Register>),
        /// Capture/compare mode register 1
        (0x018 => pub ccmr1: ReadWrite<u32, CCMR1::Register>),
        /// Capture/compare mode register 2
        (0x01C => pub ccmr2: ReadWrite<u32, CCMR2::Register>),
        /// Capture/compare enable register
        (0x020 => pub ccer: ReadWrite<u32, CCER::Register>),
        /// Counter
        (0x024 => pub cnt: ReadWrite<u32>),
        /// Prescaler
        (0x028 => pub psc: ReadWrite<u32, VALUE16::Register>),
        /// Auto-reload register
        (0x02C => pub arr: ReadWrite<u32>),
        (0x030 => _reserved0),
        /// Capture/compare registers 1 to 4
        (0x034 => pub ccr: [ReadWrite<u32>; 4]),
        (0x044 => _reserved1),
        /// DMA control register
        (0x048 => pub dcr: ReadWrite<u32, DCR::Register>),
        /// DMA address for full transfer
        (0x04C => pub dmar: ReadWrite<u32>),
        /// Option register 1
        (0x050 => pub or1: ReadWrite<u32, OR1::Register>),
        (0x054 => _reserved2),
        /// Alternate function option register 1
        (0x060 => pub af1: ReadWrite<u32, AF1::Register>),
        (0x064 => _reserved3),
        /// Timer input selection register
        (0x068 => pub tisel: ReadWrite<u32, TISEL::Register>),
        (0x06C => @END),
    }
}

register_bitfields![u32,
    pub OR1 [
        /// Timer 2 input 4 connection
        TI4_RMP OFFSET(2) NUMBITS(2) [
            Gpio = 0b00,
            Comp1Out = 0b01,
            Comp2Out = 0b10,
            Comp1OrComp2 = 0b11
        ],
        /// ETR source selection
        ETR_RMP OFFSET(1) NUMBITS(1) [],
        /// OCREF_CLR source selection
        OCREF_CLR OFFSET(0) NUMBITS(1) [
            Comp1 = 0,
            Comp2 = 1
        ]
    ],
    pub AF1 [
        /// ETR source selection
        ETRSEL OFFSET(14) NUMBITS(4) [
            Gpio = 0b0000,
            Lse = 0b0001,
            Comp1 = 0b0010,
            Comp2 = 0b0011
        ]
    ],
    pub TISEL [
        TI4SEL OFFSET(24) NUMBITS(4) [],
        TI3SEL OFFSET(16) NUMBITS(4) [],
        TI2SEL OFFSET(8) NUMBITS(4) [],
        TI1SEL OFFSET(0) NUMBITS(4) []
    ]
];

pub const TIM2_BASE: StaticRef<Tim2Registers> =
    unsafe { StaticRef::new(APB1PERIPH_BASE as *const Tim2Registers) };

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(Tim2Registers, cnt), 0x24);
        assert_eq!(offset_of!(Tim2Registers, arr), 0x2C);
        assert_eq!(offset_of!(Tim2Registers, ccr), 0x34);
        assert_eq!(offset_of!(Tim2Registers, dcr), 0x48);
        assert_eq!(offset_of!(Tim2Registers, af1), 0x60);
        assert_eq!(offset_of!(Tim2Registers, tisel), 0x68);
        assert_eq!(size_of::<Tim2Registers>(), 0x6C);
        assert_eq!(TIM2_BASE.addr(), 0x4000_0000);
    }

    #[test]
    fn one_shot_down_counter() {
        let cr1 = InMemoryRegister::<u32, CR1::Register>::new(0);
        cr1.write(CR1::DIR::Down + CR1::OPM::SET + CR1::CEN::SET);
        assert_eq!(cr1.get(), (1 << 4) | (1 << 3) | 1);
    }

    #[test]
    fn lse_as_external_trigger() {
        let af1 = InMemoryRegister::<u32, AF1::Register>::new(0);
        af1.write(AF1::ETRSEL::Lse);
        assert_eq!(af1.get(), 1 << 14);
    }
}
