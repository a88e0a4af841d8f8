// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Comparators (COMP1, COMP2).
//!
//! Both comparators share one control/status layout. `WINMODE` only has an
//! effect in `COMP2_CSR`.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::APB2PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    pub CompRegisters {
        /// Comparator 1 control and status register
        (0x000 => pub comp1_csr: ReadWrite<u32, CSR::Register>),
        /// Comparator 2 control and status register
        (0x004 => pub comp2_csr: ReadWrite<u32, CSR::Register>),
        (0x008 => @END),
    }
}

register_bitfields![u32,
    pub CSR [
        /// Register lock (cleared only by system reset)
        LOCK OFFSET(31) NUMBITS(1) [],
        /// Comparator output level
        VALUE OFFSET(30) NUMBITS(1) [],
        /// Comparator input minus extended selection
        INMESEL OFFSET(25) NUMBITS(2) [],
        /// Scaler enable
        SCALEN OFFSET(23) NUMBITS(1) [],
        /// Scaler bridge enable
        BRGEN OFFSET(22) NUMBITS(1) [],
        /// Comparator blanking source selection
        BLANKING OFFSET(18) NUMBITS(3) [],
        /// Comparator hysteresis
        HYST OFFSET(16) NUMBITS(2) [
            NoHysteresis = 0b00,
            Low = 0b01,
            Medium = 0b10,
            High = 0b11
        ],
        /// Comparator output polarity
        POLARITY OFFSET(15) NUMBITS(1) [
            NonInverted = 0,
            Inverted = 1
        ],
        /// Comparator output window selection
        WINOUT OFFSET(14) NUMBITS(1) [],
        /// Window mode: COMP2 non-inverting input tied to COMP1's
        WINMODE OFFSET(9) NUMBITS(1) [],
        /// Comparator input plus selection
        INPSEL OFFSET(7) NUMBITS(2) [],
        /// Comparator input minus selection
        INMSEL OFFSET(4) NUMBITS(3) [
            QuarterVrefint = 0b000,
            HalfVrefint = 0b001,
            ThreeQuarterVrefint = 0b010,
            Vrefint = 0b011,
            DacOut = 0b100,
            Extended = 0b111
        ],
        /// Power mode
        PWRMODE OFFSET(2) NUMBITS(2) [
            HighSpeed = 0b00,
            MediumSpeed = 0b01,
            UltraLowPower = 0b11
        ],
        /// Comparator enable
        EN OFFSET(0) NUMBITS(1) []
    ]
];

pub const COMP_BASE: StaticRef<CompRegisters> =
    unsafe { StaticRef::new((APB2PERIPH_BASE + 0x0200) as *const CompRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn comparators_are_adjacent() {
        assert_eq!(COMP_BASE.addr(), 0x4001_0200);
        assert_eq!(core::mem::offset_of!(CompRegisters, comp2_csr), 4);
    }

    #[test]
    fn window_comparator_setup() {
        let csr = InMemoryRegister::<u32, CSR::Register>::new(0);
        csr.write(CSR::EN::SET + CSR::INMSEL::HalfVrefint + CSR::HYST::Medium);
        assert_eq!(csr.get(), 1 | (0b001 << 4) | (0b10 << 16));
        assert_eq!(CSR::LOCK.shift, 31);
    }
}
