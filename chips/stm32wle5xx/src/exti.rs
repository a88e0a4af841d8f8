// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Extended interrupt and event controller (EXTI).
//!
//! Lines 0 to 15 come from the GPIO pins selected in `SYSCFG_EXTICRx`.
//! Lines 16 to 21 and 31 are configurable peripheral lines (PVD, COMP1,
//! COMP2, RTC, PVM3); the remaining lines are direct wakeup sources that can
//! only be masked. The second register bank covers lines 32 to 46, with bit
//! `n` standing for line `n + 32`.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::AHB3PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    /// External interrupt/event controller
    pub ExtiRegisters {
        /// Rising trigger selection register 1
        (0x000 => pub rtsr1: ReadWrite<u32, RTSR1::Register>),
        /// Falling trigger selection register 1
        (0x004 => pub ftsr1: ReadWrite<u32, RTSR1::Register>),
        /// Software interrupt event register 1
        (0x008 => pub swier1: ReadWrite<u32, RTSR1::Register>),
        /// Pending register 1 (write 1 to clear)
        (0x00C => pub pr1: ReadWrite<u32, RTSR1::Register>),
        (0x010 => _reserved0),
        /// Rising trigger selection register 2
        (0x020 => pub rtsr2: ReadWrite<u32, RTSR2::Register>),
        /// Falling trigger selection register 2
        (0x024 => pub ftsr2: ReadWrite<u32, RTSR2::Register>),
        /// Software interrupt event register 2
        (0x028 => pub swier2: ReadWrite<u32, RTSR2::Register>),
        /// Pending register 2 (write 1 to clear)
        (0x02C => pub pr2: ReadWrite<u32, RTSR2::Register>),
        (0x030 => _reserved1),
        /// CPU1 wakeup with interrupt mask register 1
        (0x080 => pub c1imr1: ReadWrite<u32, IMR1::Register>),
        /// CPU1 wakeup with event mask register 1
        (0x084 => pub c1emr1: ReadWrite<u32, IMR1::Register>),
        (0x088 => _reserved2),
        /// CPU1 wakeup with interrupt mask register 2
        (0x090 => pub c1imr2: ReadWrite<u32, IMR2::Register>),
        /// CPU1 wakeup with event mask register 2
        (0x094 => pub c1emr2: ReadWrite<u32, EMR2::Register>),
        (0x098 => @END),
    }
}

register_bitfields![u32,
    /// Configurable lines of bank 1. Shared by the trigger selection,
    /// software interrupt and pending registers.
    pub RTSR1 [
        LINE0 OFFSET(0) NUMBITS(1) [],
        LINE1 OFFSET(1) NUMBITS(1) [],
        LINE2 OFFSET(2) NUMBITS(1) [],
        LINE3 OFFSET(3) NUMBITS(1) [],
        LINE4 OFFSET(4) NUMBITS(1) [],
        LINE5 OFFSET(5) NUMBITS(1) [],
        LINE6 OFFSET(6) NUMBITS(1) [],
        LINE7 OFFSET(7) NUMBITS(1) [],
        LINE8 OFFSET(8) NUMBITS(1) [],
        LINE9 OFFSET(9) NUMBITS(1) [],
        LINE10 OFFSET(10) NUMBITS(1) [],
        LINE11 OFFSET(11) NUMBITS(1) [],
        LINE12 OFFSET(12) NUMBITS(1) [],
        LINE13 OFFSET(13) NUMBITS(1) [],
        LINE14 OFFSET(14) NUMBITS(1) [],
        LINE15 OFFSET(15) NUMBITS(1) [],
        LINE16 OFFSET(16) NUMBITS(1) [],
        LINE17 OFFSET(17) NUMBITS(1) [],
        LINE18 OFFSET(18) NUMBITS(1) [],
        LINE19 OFFSET(19) NUMBITS(1) [],
        LINE20 OFFSET(20) NUMBITS(1) [],
        LINE21 OFFSET(21) NUMBITS(1) [],
        LINE31 OFFSET(31) NUMBITS(1) []
    ],
    /// Configurable lines of bank 2 (line `n` at bit `n - 32`)
    pub RTSR2 [
        LINE34 OFFSET(2) NUMBITS(1) [],
        LINE40 OFFSET(8) NUMBITS(1) [],
        LINE41 OFFSET(9) NUMBITS(1) [],
        LINE45 OFFSET(13) NUMBITS(1) []
    ],
    /// Wakeup with interrupt or event mask, lines 0 to 31
    pub IMR1 [
        IM0 OFFSET(0) NUMBITS(1) [],
        IM1 OFFSET(1) NUMBITS(1) [],
        IM2 OFFSET(2) NUMBITS(1) [],
        IM3 OFFSET(3) NUMBITS(1) [],
        IM4 OFFSET(4) NUMBITS(1) [],
        IM5 OFFSET(5) NUMBITS(1) [],
        IM6 OFFSET(6) NUMBITS(1) [],
        IM7 OFFSET(7) NUMBITS(1) [],
        IM8 OFFSET(8) NUMBITS(1) [],
        IM9 OFFSET(9) NUMBITS(1) [],
        IM10 OFFSET(10) NUMBITS(1) [],
        IM11 OFFSET(11) NUMBITS(1) [],
        IM12 OFFSET(12) NUMBITS(1) [],
        IM13 OFFSET(13) NUMBITS(1) [],
        IM14 OFFSET(14) NUMBITS(1) [],
        IM15 OFFSET(15) NUMBITS(1) [],
        IM16 OFFSET(16) NUMBITS(1) [],
        IM17 OFFSET(17) NUMBITS(1) [],
        IM18 OFFSET(18) NUMBITS(1) [],
        IM19 OFFSET(19) NUMBITS(1) [],
        IM20 OFFSET(20) NUMBITS(1) [],
        IM21 OFFSET(21) NUMBITS(1) [],
        IM22 OFFSET(22) NUMBITS(1) [],
        IM23 OFFSET(23) NUMBITS(1) [],
        IM24 OFFSET(24) NUMBITS(1) [],
        IM25 OFFSET(25) NUMBITS(1) [],
        IM26 OFFSET(26) NUMBITS(1) [],
        IM27 OFFSET(27) NUMBITS(1) [],
        IM28 OFFSET(28) NUMBITS(1) [],
        IM29 OFFSET(29) NUMBITS(1) [],
        IM30 OFFSET(30) NUMBITS(1) [],
        IM31 OFFSET(31) NUMBITS(1) []
    ],
    /// Wakeup with interrupt mask, lines 32 to 46
    pub IMR2 [
        IM32 OFFSET(0) NUMBITS(1) [],
        IM33 OFFSET(1) NUMBITS(1) [],
        IM34 OFFSET(2) NUMBITS(1) [],
        IM35 OFFSET(3) NUMBITS(1) [],
        IM36 OFFSET(4) NUMBITS(1) [],
        IM37 OFFSET(5) NUMBITS(1) [],
        IM38 OFFSET(6) NUMBITS(1) [],
        IM39 OFFSET(7) NUMBITS(1) [],
        IM40 OFFSET(8) NUMBITS(1) [],
        IM41 OFFSET(9) NUMBITS(1) [],
        IM42 OFFSET(10) NUMBITS(1) [],
        IM43 OFFSET(11) NUMBITS(1) [],
        IM44 OFFSET(12) NUMBITS(1) [],
        IM45 OFFSET(13) NUMBITS(1) [],
        IM46 OFFSET(14) NUMBITS(1) []
    ],
    /// Wakeup with event mask, lines 32 to 46
    pub EMR2 [
        EM34 OFFSET(2) NUMBITS(1) [],
        EM40 OFFSET(8) NUMBITS(1) [],
        EM41 OFFSET(9) NUMBITS(1) [],
        EM45 OFFSET(13) NUMBITS(1) []
    ]
];

pub const EXTI_BASE: StaticRef<ExtiRegisters> =
    unsafe { StaticRef::new((AHB3PERIPH_BASE + 0x0800) as *const ExtiRegisters) };

/// EXTI line numbers of the sources that are not GPIO pins.
pub mod line {
    pub const PVD: u8 = 16;
    pub const COMP1: u8 = 17;
    pub const COMP2: u8 = 18;
    pub const RTC_TAMP_STAMP_LSECSS_SSRU: u8 = 19;
    pub const RTC_WAKEUP: u8 = 20;
    pub const RTC_ALARM: u8 = 21;
    pub const I2C1: u8 = 22;
    pub const I2C2: u8 = 23;
    pub const I2C3: u8 = 24;
    pub const USART1: u8 = 25;
    pub const USART2: u8 = 26;
    pub const LPUART1: u8 = 27;
    pub const LPTIM1: u8 = 28;
    pub const LPTIM2: u8 = 29;
    pub const LPTIM3: u8 = 30;
    pub const PVM3: u8 = 31;
    pub const HSEM: u8 = 38;
    pub const SUBGHZ_RADIO: u8 = 44;
    pub const SUBGHZ_RADIO_BUSY: u8 = 45;
    pub const NUM_LINES: u8 = 47;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(ExtiRegisters, pr1), 0x0C);
        assert_eq!(offset_of!(ExtiRegisters, rtsr2), 0x20);
        assert_eq!(offset_of!(ExtiRegisters, c1imr1), 0x80);
        assert_eq!(offset_of!(ExtiRegisters, c1imr2), 0x90);
        assert_eq!(size_of::<ExtiRegisters>(), 0x98);
        assert_eq!(EXTI_BASE.addr(), 0x5800_0800);
    }

    #[test]
    fn second_bank_is_offset_by_32() {
        assert_eq!(RTSR2::LINE45.shift, 13);
        assert_eq!(IMR2::IM32.shift, 0);
        assert_eq!(IMR2::IM46.shift, 14);
        assert_eq!(usize::from(line::SUBGHZ_RADIO_BUSY) - 32, RTSR2::LINE45.shift);
    }

    #[test]
    fn unmask_gpio_line() {
        let imr = InMemoryRegister::<u32, IMR1::Register>::new(0);
        imr.modify(IMR1::IM13::SET);
        imr.modify(IMR1::IM31::SET);
        assert_eq!(imr.get(), (1 << 13) | (1 << 31));
        imr.modify(IMR1::IM13::CLEAR);
        assert!(!imr.is_set(IMR1::IM13));
        imr.write(IMR1::IM0::SET);
        assert_eq!(imr.get(), 1);
    }
}
