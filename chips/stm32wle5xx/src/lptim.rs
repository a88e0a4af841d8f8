// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Low-power timers (LPTIM1, LPTIM2, LPTIM3).
//!
//! Encoder mode (`CFGR.ENC`) is only available on LPTIM1. `CMP` and `ARR`
//! may only be written while the timer is enabled, and each write must
//! wait for the matching `CMPOK`/`ARROK` flag.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::APB1PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    pub LptimRegisters {
        /// Interrupt and status register
        (0x000 => pub isr: ReadOnly<u32, ISR::Register>),
        /// Interrupt clear register
        (0x004 => pub icr: WriteOnly<u32, ISR::Register>),
        /// Interrupt enable register
        (0x008 => pub ier: ReadWrite<u32, ISR::Register>),
        /// Configuration register
        (0x00C => pub cfgr: ReadWrite<u32, CFGR::Register>),
        /// Control register
        (0x010 => pub cr: ReadWrite<u32, CR::Register>),
        /// Compare register
        (0x014 => pub cmp: ReadWrite<u32, VALUE::Register>),
        /// Autoreload register
        (0x018 => pub arr: ReadWrite<u32, VALUE::Register>),
        /// Counter register
        (0x01C => pub cnt: ReadOnly<u32, VALUE::Register>),
        /// Option register
        (0x020 => pub or: ReadWrite<u32, OR::Register>),
        (0x024 => _reserved0),
        /// Repetition register
        (0x028 => pub rcr: ReadWrite<u32, RCR::Register>),
        (0x02C => @END),
    }
}

register_bitfields![u32,
    /// Status flags; `ICR` and `IER` share the positions
    pub ISR [
        /// Repetition register update OK
        REPOK OFFSET(8) NUMBITS(1) [],
        /// Update event
        UE OFFSET(7) NUMBITS(1) [],
        /// Counter direction change up to down
        DOWN OFFSET(6) NUMBITS(1) [],
        /// Counter direction change down to up
        UP OFFSET(5) NUMBITS(1) [],
        /// Autoreload register update OK
        ARROK OFFSET(4) NUMBITS(1) [],
        /// Compare register update OK
        CMPOK OFFSET(3) NUMBITS(1) [],
        /// External trigger edge event
        EXTTRIG OFFSET(2) NUMBITS(1) [],
        /// Autoreload match
        ARRM OFFSET(1) NUMBITS(1) [],
        /// Compare match
        CMPM OFFSET(0) NUMBITS(1) []
    ],
    pub CFGR [
        /// Encoder mode enable
        ENC OFFSET(24) NUMBITS(1) [],
        /// Counter mode enabled
        COUNTMODE OFFSET(23) NUMBITS(1) [
            Internal = 0,
            External = 1
        ],
        /// Registers update mode
        PRELOAD OFFSET(22) NUMBITS(1) [
            Immediate = 0,
            EndOfPeriod = 1
        ],
        /// Waveform shape polarity
        WAVPOL OFFSET(21) NUMBITS(1) [],
        /// Waveform shape
        WAVE OFFSET(20) NUMBITS(1) [
            Pwm = 0,
            SetOnce = 1
        ],
        /// Timeout enable
        TIMOUT OFFSET(19) NUMBITS(1) [],
        /// Trigger enable and polarity
        TRIGEN OFFSET(17) NUMBITS(2) [
            Software = 0b00,
            RisingEdge = 0b01,
            FallingEdge = 0b10,
            BothEdges = 0b11
        ],
        /// Trigger selector
        TRIGSEL OFFSET(13) NUMBITS(3) [],
        /// Clock prescaler
        PRESC OFFSET(9) NUMBITS(3) [
            Div1 = 0b000,
            Div2 = 0b001,
            Div4 = 0b010,
            Div8 = 0b011,
            Div16 = 0b100,
            Div32 = 0b101,
            Div64 = 0b110,
            Div128 = 0b111
        ],
        /// Configurable digital filter for trigger
        TRGFLT OFFSET(6) NUMBITS(2) [],
        /// Configurable digital filter for external clock
        CKFLT OFFSET(3) NUMBITS(2) [],
        /// Clock polarity
        CKPOL OFFSET(1) NUMBITS(2) [],
        /// Clock selector
        CKSEL OFFSET(0) NUMBITS(1) [
            Internal = 0,
            External = 1
        ]
    ],
    pub CR [
        /// Reset after read enable
        RSTARE OFFSET(4) NUMBITS(1) [],
        /// Counter reset
        COUNTRST OFFSET(3) NUMBITS(1) [],
        /// Timer start in continuous mode
        CNTSTRT OFFSET(2) NUMBITS(1) [],
        /// Timer start in single mode
        SNGSTRT OFFSET(1) NUMBITS(1) [],
        /// LPTIM enable
        ENABLE OFFSET(0) NUMBITS(1) []
    ],
    pub VALUE [
        VALUE OFFSET(0) NUMBITS(16) []
    ],
    pub OR [
        /// Input 2 selection (LPTIM1 only)
        OR_1 OFFSET(1) NUMBITS(1) [],
        /// Input 1 selection
        OR_0 OFFSET(0) NUMBITS(1) []
    ],
    pub RCR [
        REP OFFSET(0) NUMBITS(8) []
    ]
];

pub const LPTIM1_BASE: StaticRef<LptimRegisters> =
    unsafe { StaticRef::new((APB1PERIPH_BASE + 0x7C00) as *const LptimRegisters) };
pub const LPTIM2_BASE: StaticRef<LptimRegisters> =
    unsafe { StaticRef::new((APB1PERIPH_BASE + 0x9400) as *const LptimRegisters) };
pub const LPTIM3_BASE: StaticRef<LptimRegisters> =
    unsafe { StaticRef::new((APB1PERIPH_BASE + 0x9800) as *const LptimRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(LptimRegisters, cnt), 0x1C);
        assert_eq!(offset_of!(LptimRegisters, or), 0x20);
        assert_eq!(offset_of!(LptimRegisters, rcr), 0x28);
        assert_eq!(size_of::<LptimRegisters>(), 0x2C);
        assert_eq!(LPTIM1_BASE.addr(), 0x4000_7C00);
        assert_eq!(LPTIM2_BASE.addr(), 0x4000_9400);
        assert_eq!(LPTIM3_BASE.addr(), 0x4000_9800);
    }

    #[test]
    fn prescaled_timeout_config() {
        let cfgr = InMemoryRegister::<u32, CFGR::Register>::new(0);
        cfgr.write(CFGR::PRESC::Div32 + CFGR::TIMOUT::SET + CFGR::PRELOAD::EndOfPeriod);
        assert_eq!(cfgr.get(), (0b101 << 9) | (1 << 19) | (1 << 22));
    }

    #[test]
    fn counter_is_16_bits() {
        let cnt = InMemoryRegister::<u32, VALUE::Register>::new(0x0001_FFFF);
        assert_eq!(cnt.read(VALUE::VALUE), 0xFFFF);
    }
}
