// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Voltage reference buffer (VREFBUF).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::APB2PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    pub VrefbufRegisters {
        /// Control and status register
        (0x000 => pub csr: ReadWrite<u32, CSR::Register>),
        /// Calibration control register
        (0x004 => pub ccr: ReadWrite<u32, CCR::Register>),
        (0x008 => @END),
    }
}

register_bitfields![u32,
    pub CSR [
        /// Voltage reference buffer ready
        VRR OFFSET(3) NUMBITS(1) [],
        /// Voltage reference scale
        VRS OFFSET(2) NUMBITS(1) [
            V2_048 = 0,
            V2_5 = 1
        ],
        /// High impedance mode
        HIZ OFFSET(1) NUMBITS(1) [],
        /// Voltage reference buffer mode enable
        ENVR OFFSET(0) NUMBITS(1) []
    ],
    pub CCR [
        /// Trimming code
        TRIM OFFSET(0) NUMBITS(6) []
    ]
];

pub const VREFBUF_BASE: StaticRef<VrefbufRegisters> =
    unsafe { StaticRef::new((APB2PERIPH_BASE + 0x0030) as *const VrefbufRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        assert_eq!(core::mem::size_of::<VrefbufRegisters>(), 8);
        assert_eq!(VREFBUF_BASE.addr(), 0x4001_0030);
        assert_eq!(CSR::VRS.shift, 2);
        assert_eq!(CCR::TRIM.mask, 0x3F);
    }
}
