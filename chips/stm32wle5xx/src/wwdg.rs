// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! System window watchdog (WWDG).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::APB1PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    pub WwdgRegisters {
        /// Control register
        (0x000 => pub cr: ReadWrite<u32, CR::Register>),
        /// Configuration register
        (0x004 => pub cfr: ReadWrite<u32, CFR::Register>),
        /// Status register
        (0x008 => pub sr: ReadWrite<u32, SR::Register>),
        (0x00C => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Activation bit, cleared only by reset
        WDGA OFFSET(7) NUMBITS(1) [],
        /// 7-bit counter; a reset occurs when T6 clears
        T OFFSET(0) NUMBITS(7) []
    ],
    pub CFR [
        /// Timer base
        WDGTB OFFSET(11) NUMBITS(3) [
            Div1 = 0b000,
            Div2 = 0b001,
            Div4 = 0b010,
            Div8 = 0b011,
            Div16 = 0b100,
            Div32 = 0b101,
            Div64 = 0b110,
            Div128 = 0b111
        ],
        /// Early wakeup interrupt enable
        EWI OFFSET(9) NUMBITS(1) [],
        /// 7-bit window value
        W OFFSET(0) NUMBITS(7) []
    ],
    pub SR [
        /// Early wakeup interrupt flag
        EWIF OFFSET(0) NUMBITS(1) []
    ]
];

pub const WWDG_BASE: StaticRef<WwdgRegisters> =
    unsafe { StaticRef::new((APB1PERIPH_BASE + 0x2C00) as *const WwdgRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn layout() {
        assert_eq!(core::mem::size_of::<WwdgRegisters>(), 0x0C);
        assert_eq!(WWDG_BASE.addr(), 0x4000_2C00);
    }

    #[test]
    fn reset_values() {
        let cr = InMemoryRegister::<u32, CR::Register>::new(0x7F);
        let cfr = InMemoryRegister::<u32, CFR::Register>::new(0x7F);
        assert!(!cr.is_set(CR::WDGA));
        assert_eq!(cr.read(CR::T), 0x7F);
        assert_eq!(cfr.read(CFR::W), 0x7F);
        cfr.write(CFR::WDGTB::Div8 + CFR::W.val(0x50));
        assert_eq!(cfr.get(), (0b011 << 11) | 0x50);
    }
}
