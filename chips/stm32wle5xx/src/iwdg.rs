// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Independent watchdog (IWDG), clocked from LSI.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::APB1PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    pub IwdgRegisters {
        /// Key register
        (0x000 => pub kr: WriteOnly<u32, KR::Register>),
        /// Prescaler register
        (0x004 => pub pr: ReadWrite<u32, PR::Register>),
        /// Reload register
        (0x008 => pub rlr: ReadWrite<u32, RLR::Register>),
        /// Status register
        (0x00C => pub sr: ReadOnly<u32, SR::Register>),
        /// Window register
        (0x010 => pub winr: ReadWrite<u32, WINR::Register>),
        (0x014 => @END),
    }
}

register_bitfields![u32,
    pub KR [
        KEY OFFSET(0) NUMBITS(16) [
            /// Start the watchdog
            Enable = 0xCCCC,
            /// Refresh the counter from `RLR`
            Reload = 0xAAAA,
            /// Enable write access to `PR`, `RLR` and `WINR`
            Unlock = 0x5555
        ]
    ],
    pub PR [
        PR OFFSET(0) NUMBITS(3) [
            Div4 = 0b000,
            Div8 = 0b001,
            Div16 = 0b010,
            Div32 = 0b011,
            Div64 = 0b100,
            Div128 = 0b101,
            Div256 = 0b110
        ]
    ],
    pub RLR [
        RL OFFSET(0) NUMBITS(12) []
    ],
    pub SR [
        /// Watchdog counter window value update
        WVU OFFSET(2) NUMBITS(1) [],
        /// Watchdog counter reload value update
        RVU OFFSET(1) NUMBITS(1) [],
        /// Watchdog prescaler value update
        PVU OFFSET(0) NUMBITS(1) []
    ],
    pub WINR [
        WIN OFFSET(0) NUMBITS(12) []
    ]
];

pub const IWDG_BASE: StaticRef<IwdgRegisters> =
    unsafe { StaticRef::new((APB1PERIPH_BASE + 0x3000) as *const IwdgRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn layout() {
        assert_eq!(core::mem::size_of::<IwdgRegisters>(), 0x14);
        assert_eq!(IWDG_BASE.addr(), 0x4000_3000);
    }

    #[test]
    fn key_values() {
        let kr = InMemoryRegister::<u32, KR::Register>::new(0);
        kr.write(KR::KEY::Enable);
        assert_eq!(kr.get(), 0xCCCC);
        kr.write(KR::KEY::Reload);
        assert_eq!(kr.get(), 0xAAAA);
        kr.write(KR::KEY::Unlock);
        assert_eq!(kr.get(), 0x5555);
    }

    #[test]
    fn reload_is_12_bits() {
        assert_eq!(RLR::RL.mask, 0xFFF);
        assert_eq!(WINR::WIN.mask, 0xFFF);
    }
}
