// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Debug support (DBGMCU).
//!
//! Lives on the private peripheral bus. Decoding of `IDCODE` is in
//! [`crate::signature::DeviceId`].

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::PPB_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    pub DbgmcuRegisters {
        /// Identity code register
        (0x000 => pub idcode: ReadOnly<u32, IDCODE::Register>),
        /// Configuration register
        (0x004 => pub cr: ReadWrite<u32, CR::Register>),
        (0x008 => _reserved0),
        /// CPU1 APB1 peripheral freeze register 1
        (0x03C => pub apb1fzr1: ReadWrite<u32, APB1FZR1::Register>),
        (0x040 => _reserved1),
        /// CPU1 APB1 peripheral freeze register 2
        (0x044 => pub apb1fzr2: ReadWrite<u32, APB1FZR2::Register>),
        (0x048 => _reserved2),
        /// CPU1 APB2 peripheral freeze register
        (0x04C => pub apb2fzr: ReadWrite<u32, APB2FZR::Register>),
        (0x050 => @END),
    }
}

register_bitfields![u32,
    pub IDCODE [
        /// Revision identifier
        REV_ID OFFSET(16) NUMBITS(16) [],
        /// Device identifier
        DEV_ID OFFSET(0) NUMBITS(12) []
    ],
    pub CR [
        /// Allow debug in Standby mode
        DBG_STANDBY OFFSET(2) NUMBITS(1) [],
        /// Allow debug in Stop mode
        DBG_STOP OFFSET(1) NUMBITS(1) [],
        /// Allow debug in Sleep mode
        DBG_SLEEP OFFSET(0) NUMBITS(1) []
    ],
    pub APB1FZR1 [
        DBG_LPTIM1_STOP OFFSET(31) NUMBITS(1) [],
        DBG_I2C3_STOP OFFSET(23) NUMBITS(1) [],
        DBG_I2C2_STOP OFFSET(22) NUMBITS(1) [],
        DBG_I2C1_STOP OFFSET(21) NUMBITS(1) [],
        DBG_IWDG_STOP OFFSET(12) NUMBITS(1) [],
        DBG_WWDG_STOP OFFSET(11) NUMBITS(1) [],
        DBG_RTC_STOP OFFSET(10) NUMBITS(1) [],
        DBG_TIM2_STOP OFFSET(0) NUMBITS(1) []
    ],
    pub APB1FZR2 [
        DBG_LPTIM3_STOP OFFSET(6) NUMBITS(1) [],
        DBG_LPTIM2_STOP OFFSET(5) NUMBITS(1) []
    ],
    pub APB2FZR [
        DBG_TIM17_STOP OFFSET(18) NUMBITS(1) [],
        DBG_TIM16_STOP OFFSET(17) NUMBITS(1) [],
        DBG_TIM1_STOP OFFSET(11) NUMBITS(1) []
    ]
];

pub const DBGMCU_BASE: StaticRef<DbgmcuRegisters> =
    unsafe { StaticRef::new((PPB_BASE + 0x0004_2000) as *const DbgmcuRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(DbgmcuRegisters, apb1fzr1), 0x3C);
        assert_eq!(offset_of!(DbgmcuRegisters, apb1fzr2), 0x44);
        assert_eq!(offset_of!(DbgmcuRegisters, apb2fzr), 0x4C);
        assert_eq!(size_of::<DbgmcuRegisters>(), 0x50);
        assert_eq!(DBGMCU_BASE.addr(), 0xE004_2000);
    }

    #[test]
    fn watchdog_freeze_bits() {
        assert_eq!(APB1FZR1::DBG_IWDG_STOP.shift, 12);
        assert_eq!(APB1FZR1::DBG_WWDG_STOP.shift, 11);
        assert_eq!(IDCODE::DEV_ID.mask, 0xFFF);
    }
}
