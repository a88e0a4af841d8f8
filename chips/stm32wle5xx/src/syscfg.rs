// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! System configuration controller (SYSCFG).
//!
//! Reference: RM0461 (SYSCFG chapter). The VREFBUF and COMP register blocks
//! sit inside the reserved part of this block's address window; see
//! [`crate::vrefbuf`] and [`crate::comp`].

use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::APB2PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    /// System configuration controller
    pub SyscfgRegisters {
        /// Memory remap register
        (0x000 => pub memrmp: ReadWrite<u32, MEMRMP::Register>),
        /// Configuration register 1
        (0x004 => pub cfgr1: ReadWrite<u32, CFGR1::Register>),
        /// External interrupt configuration registers 1 to 4
        (0x008 => pub exticr: [ReadWrite<u32, EXTICR::Register>; 4]),
        /// SRAM2 control and status register
        (0x018 => pub scsr: ReadWrite<u32, SCSR::Register>),
        /// Configuration register 2
        (0x01C => pub cfgr2: ReadWrite<u32, CFGR2::Register>),
        /// SRAM2 write protection register
        (0x020 => pub swpr: ReadWrite<u32>),
        /// SRAM2 key register
        (0x024 => pub skr: WriteOnly<u32, SKR::Register>),
        (0x028 => _reserved0),
        /// CPU1 interrupt mask register 1
        (0x100 => pub imr1: ReadWrite<u32, IMR1::Register>),
        /// CPU1 interrupt mask register 2
        (0x104 => pub imr2: ReadWrite<u32, IMR2::Register>),
        (0x108 => _reserved1),
        /// Radio debug control register
        (0x208 => pub rfdcr: ReadWrite<u32, RFDCR::Register>),
        (0x20C => @END),
    }
}

register_bitfields![u32,
    pub MEMRMP [
        /// Memory mapping selection
        MEM_MODE OFFSET(0) NUMBITS(3) [
            MainFlash = 0b000,
            SystemFlash = 0b001,
            Sram1 = 0b011
        ]
    ],
    pub CFGR1 [
        /// Fast-mode Plus drive capability activation on I2C3
        I2C3_FMP OFFSET(22) NUMBITS(1) [],
        /// Fast-mode Plus drive capability activation on I2C2
        I2C2_FMP OFFSET(21) NUMBITS(1) [],
        /// Fast-mode Plus drive capability activation on I2C1
        I2C1_FMP OFFSET(20) NUMBITS(1) [],
        /// Fast-mode Plus driving capability activation on PB9
        I2C_PB9_FMP OFFSET(19) NUMBITS(1) [],
        /// Fast-mode Plus driving capability activation on PB8
        I2C_PB8_FMP OFFSET(18) NUMBITS(1) [],
        /// Fast-mode Plus driving capability activation on PB7
        I2C_PB7_FMP OFFSET(17) NUMBITS(1) [],
        /// Fast-mode Plus driving capability activation on PB6
        I2C_PB6_FMP OFFSET(16) NUMBITS(1) [],
        /// I/O analog switch voltage booster enable
        BOOSTEN OFFSET(8) NUMBITS(1) []
    ],
    /// EXTI source selection, four lines per register
    pub EXTICR [
        EXTI3 OFFSET(12) NUMBITS(3) [
            PA = 0b000,
            PB = 0b001,
            PC = 0b010,
            PH = 0b111
        ],
        EXTI2 OFFSET(8) NUMBITS(3) [
            PA = 0b000,
            PB = 0b001,
            PC = 0b010,
            PH = 0b111
        ],
        EXTI1 OFFSET(4) NUMBITS(3) [
            PA = 0b000,
            PB = 0b001,
            PC = 0b010,
            PH = 0b111
        ],
        EXTI0 OFFSET(0) NUMBITS(3) [
            PA = 0b000,
            PB = 0b001,
            PC = 0b010,
            PH = 0b111
        ]
    ],
    pub SCSR [
        /// PKA SRAM busy by erase operation
        PKASRAMBSY OFFSET(8) NUMBITS(1) [],
        /// SRAM1, SRAM2 and PKA SRAM busy by erase operation
        SRAMBSY OFFSET(1) NUMBITS(1) [],
        /// SRAM2 erase
        SRAM2ER OFFSET(0) NUMBITS(1) []
    ],
    pub CFGR2 [
        /// SRAM2 parity error flag
        SPF OFFSET(8) NUMBITS(1) [],
        /// ECC lock
        ECCL OFFSET(3) NUMBITS(1) [],
        /// PVD lock enable
        PVDL OFFSET(2) NUMBITS(1) [],
        /// SRAM2 parity lock
        SPL OFFSET(1) NUMBITS(1) [],
        /// CPU1 LOCKUP lock
        CLL OFFSET(0) NUMBITS(1) []
    ],
    pub SKR [
        /// SRAM2 write protection key for software erase
        KEY OFFSET(0) NUMBITS(8) [
            Key1 = 0xCA,
            Key2 = 0x53
        ]
    ],
    pub IMR1 [
        /// Peripheral PVM3 interrupt mask to CPU1
        PVM3IM OFFSET(29) NUMBITS(1) [],
        /// EXTI line 15 interrupt mask to CPU1
        EXTI15IM OFFSET(21) NUMBITS(1) [],
        /// EXTI line 14 interrupt mask to CPU1
        EXTI14IM OFFSET(20) NUMBITS(1) [],
        /// EXTI line 13 interrupt mask to CPU1
        EXTI13IM OFFSET(19) NUMBITS(1) [],
        /// EXTI line 12 interrupt mask to CPU1
        EXTI12IM OFFSET(18) NUMBITS(1) [],
        /// EXTI line 11 interrupt mask to CPU1
        EXTI11IM OFFSET(17) NUMBITS(1) [],
        /// EXTI line 10 interrupt mask to CPU1
        EXTI10IM OFFSET(16) NUMBITS(1) [],
        /// EXTI line 9 interrupt mask to CPU1
        EXTI9IM OFFSET(15) NUMBITS(1) [],
        /// EXTI line 8 interrupt mask to CPU1
        EXTI8IM OFFSET(14) NUMBITS(1) [],
        /// EXTI line 7 interrupt mask to CPU1
        EXTI7IM OFFSET(13) NUMBITS(1) [],
        /// EXTI line 6 interrupt mask to CPU1
        EXTI6IM OFFSET(12) NUMBITS(1) [],
        /// EXTI line 5 interrupt mask to CPU1
        EXTI5IM OFFSET(11) NUMBITS(1) [],
        /// RTC alarm interrupt mask to CPU1
        RTCALARMIM OFFSET(3) NUMBITS(1) [],
        /// RTC SSRU interrupt mask to CPU1
        RTCSSRUIM OFFSET(2) NUMBITS(1) [],
        /// RTC wakeup interrupt mask to CPU1
        RTCWKUPIM OFFSET(1) NUMBITS(1) [],
        /// RTC timestamp, tamper and LSE CSS interrupt mask to CPU1
        RTCSTAMPTAMPLSECSSIM OFFSET(0) NUMBITS(1) []
    ],
    pub IMR2 [
        /// PVD interrupt mask to CPU1
        PVDIM OFFSET(20) NUMBITS(1) []
    ],
    pub RFDCR [
        /// Radio debug test bus selection
        RFTBSEL OFFSET(0) NUMBITS(1) [
            Digital = 0,
            Analog = 1
        ]
    ]
];

pub const SYSCFG_BASE: StaticRef<SyscfgRegisters> =
    unsafe { StaticRef::new(APB2PERIPH_BASE as *const SyscfgRegisters) };

/// Index into `exticr` and field of that register for a GPIO line. `None`
/// for lines above 15, which have no GPIO source.
pub const fn exticr_position(line: u8) -> Option<(usize, usize)> {
    if line > 15 {
        return None;
    }
    Some(((line / 4) as usize, ((line % 4) * 4) as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(SyscfgRegisters, exticr), 0x08);
        assert_eq!(offset_of!(SyscfgRegisters, scsr), 0x18);
        assert_eq!(offset_of!(SyscfgRegisters, skr), 0x24);
        assert_eq!(offset_of!(SyscfgRegisters, imr1), 0x100);
        assert_eq!(offset_of!(SyscfgRegisters, rfdcr), 0x208);
        assert_eq!(size_of::<SyscfgRegisters>(), 0x20C);
        assert_eq!(SYSCFG_BASE.addr(), 0x4001_0000);
    }

    #[test]
    fn exti_source_position() {
        assert_eq!(exticr_position(0), Some((0, 0)));
        assert_eq!(exticr_position(6), Some((1, 8)));
        assert_eq!(exticr_position(15), Some((3, 12)));
        assert_eq!(exticr_position(6).map(|(_, shift)| shift), Some(EXTICR::EXTI2.shift));
    }

    #[test]
    fn lines_without_gpio_source() {
        assert_eq!(exticr_position(16), None);
        assert_eq!(exticr_position(u8::MAX), None);
        // Every valid line indexes the four EXTICR registers.
        for line in 0..=15 {
            assert!(exticr_position(line).is_some_and(|(idx, _)| idx < 4));
        }
    }

    #[test]
    fn port_h_encoding() {
        let exticr = InMemoryRegister::<u32, EXTICR::Register>::new(0);
        exticr.write(EXTICR::EXTI3::PH + EXTICR::EXTI0::PB);
        assert_eq!(exticr.get(), (0b111 << 12) | 0b001);
    }
}
