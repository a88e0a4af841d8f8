// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! 12-bit analog-to-digital converter (ADC).
//!
//! Single ADC instance with the common configuration register at offset
//! 0x308 of the same block.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::APB2PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    pub AdcRegisters {
        /// Interrupt and status register
        (0x000 => pub isr: ReadWrite<u32, ISR::Register>),
        /// Interrupt enable register
        (0x004 => pub ier: ReadWrite<u32, ISR::Register>),
        /// Control register
        (0x008 => pub cr: ReadWrite<u32, CR::Register>),
        /// Configuration register 1
        (0x00C => pub cfgr1: ReadWrite<u32, CFGR1::Register>),
        /// Configuration register 2
        (0x010 => pub cfgr2: ReadWrite<u32, CFGR2::Register>),
        /// Sampling time register
        (0x014 => pub smpr: ReadWrite<u32, SMPR::Register>),
        (0x018 => _reserved0),
        /// Watchdog threshold register 1
        (0x020 => pub tr1: ReadWrite<u32, TR1::Register>),
        /// Watchdog threshold register 2
        (0x024 => pub tr2: ReadWrite<u32, TR::Register>),
        /// Channel selection register
        (0x028 => pub chselr: ReadWrite<u32, CHSELR::Register>),
        /// Watchdog threshold register 3
        (0x02C => pub tr3: ReadWrite<u32, TR::Register>),
        (0x030 => _reserved1),
        /// Data register
        (0x040 => pub dr: ReadOnly<u32, DR::Register>),
        (0x044 => _reserved2),
        /// Analog watchdog 2 configuration register
        (0x0A0 => pub awd2cr: ReadWrite<u32, AWDCR::Register>),
        /// Analog watchdog 3 configuration register
        (0x0A4 => pub awd3cr: ReadWrite<u32, AWDCR::Register>),
        (0x0A8 => _reserved3),
        /// Calibration factor
        (0x0B4 => pub calfact: ReadWrite<u32, CALFACT::Register>),
        (0x0B8 => _reserved4),
        /// Common configuration register
        (0x308 => pub ccr: ReadWrite<u32, CCR::Register>),
        (0x30C => @END),
    }
}

register_bitfields![u32,
    /// Status flags; `IER` uses the same positions for the enables
    pub ISR [
        /// Channel configuration ready
        CCRDY OFFSET(13) NUMBITS(1) [],
        /// End of calibration
        EOCAL OFFSET(11) NUMBITS(1) [],
        /// Analog watchdog 3
        AWD3 OFFSET(9) NUMBITS(1) [],
        /// Analog watchdog 2
        AWD2 OFFSET(8) NUMBITS(1) [],
        /// Analog watchdog 1
        AWD1 OFFSET(7) NUMBITS(1) [],
        /// Overrun
        OVR OFFSET(4) NUMBITS(1) [],
        /// End of sequence
        EOS OFFSET(3) NUMBITS(1) [],
        /// End of conversion
        EOC OFFSET(2) NUMBITS(1) [],
        /// End of sampling
        EOSMP OFFSET(1) NUMBITS(1) [],
        /// ADC ready
        ADRDY OFFSET(0) NUMBITS(1) []
    ],
    pub CR [
        /// Calibration
        ADCAL OFFSET(31) NUMBITS(1) [],
        /// Voltage regulator enable
        ADVREGEN OFFSET(28) NUMBITS(1) [],
        /// Stop conversion
        ADSTP OFFSET(4) NUMBITS(1) [],
        /// Start conversion
        ADSTART OFFSET(2) NUMBITS(1) [],
        /// Disable
        ADDIS OFFSET(1) NUMBITS(1) [],
        /// Enable
        ADEN OFFSET(0) NUMBITS(1) []
    ],
    pub CFGR1 [
        /// Analog watchdog 1 channel selection
        AWD1CH OFFSET(26) NUMBITS(5) [],
        /// Analog watchdog 1 enable
        AWD1EN OFFSET(23) NUMBITS(1) [],
        /// Analog watchdog 1 on a single channel
        AWD1SGL OFFSET(22) NUMBITS(1) [],
        /// Mode selection of CHSELR
        CHSELRMOD OFFSET(21) NUMBITS(1) [
            Bitmap = 0,
            Sequence = 1
        ],
        /// Discontinuous mode
        DISCEN OFFSET(16) NUMBITS(1) [],
        /// Auto-off mode
        AUTOFF OFFSET(15) NUMBITS(1) [],
        /// Wait conversion mode
        WAIT OFFSET(14) NUMBITS(1) [],
        /// Continuous conversion
        CONT OFFSET(13) NUMBITS(1) [],
        /// Overrun management mode
        OVRMOD OFFSET(12) NUMBITS(1) [
            Preserve = 0,
            Overwrite = 1
        ],
        /// External trigger enable and polarity
        EXTEN OFFSET(10) NUMBITS(2) [
            Disabled = 0b00,
            RisingEdge = 0b01,
            FallingEdge = 0b10,
            BothEdges = 0b11
        ],
        /// External trigger selection
        EXTSEL OFFSET(6) NUMBITS(3) [],
        /// Data alignment
        ALIGN OFFSET(5) NUMBITS(1) [
            Right = 0,
            Left = 1
        ],
        /// Data resolution
        RES OFFSET(3) NUMBITS(2) [
            Bits12 = 0b00,
            Bits10 = 0b01,
            Bits8 = 0b10,
            Bits6 = 0b11
        ],
        /// Scan sequence direction
        SCANDIR OFFSET(2) NUMBITS(1) [
            Upward = 0,
            Backward = 1
        ],
        /// DMA configuration
        DMACFG OFFSET(1) NUMBITS(1) [
            OneShot = 0,
            Circular = 1
        ],
        /// DMA enable
        DMAEN OFFSET(0) NUMBITS(1) []
    ],
    pub CFGR2 [
        /// ADC clock mode
        CKMODE OFFSET(30) NUMBITS(2) [
            Adcclk = 0b00,
            PclkDiv2 = 0b01,
            PclkDiv4 = 0b10,
            Pclk = 0b11
        ],
        /// Low frequency trigger mode enable
        LFTRIG OFFSET(29) NUMBITS(1) [],
        /// Triggered oversampling
        TOVS OFFSET(9) NUMBITS(1) [],
        /// Oversampling shift
        OVSS OFFSET(5) NUMBITS(4) [],
        /// Oversampling ratio
        OVSR OFFSET(2) NUMBITS(3) [
            X2 = 0b000,
            X4 = 0b001,
            X8 = 0b010,
            X16 = 0b011,
            X32 = 0b100,
            X64 = 0b101,
            X128 = 0b110,
            X256 = 0b111
        ],
        /// Oversampler enable
        OVSE OFFSET(0) NUMBITS(1) []
    ],
    pub SMPR [
        /// Per-channel selection between SMP1 and SMP2
        SMPSEL OFFSET(8) NUMBITS(18) [],
        /// Sampling time selection 2
        SMP2 OFFSET(4) NUMBITS(3) [
            Cycles1_5 = 0b000,
            Cycles3_5 = 0b001,
            Cycles7_5 = 0b010,
            Cycles12_5 = 0b011,
            Cycles19_5 = 0b100,
            Cycles39_5 = 0b101,
            Cycles79_5 = 0b110,
            Cycles160_5 = 0b111
        ],
        /// Sampling time selection 1
        SMP1 OFFSET(0) NUMBITS(3) [
            Cycles1_5 = 0b000,
            Cycles3_5 = 0b001,
            Cycles7_5 = 0b010,
            Cycles12_5 = 0b011,
            Cycles19_5 = 0b100,
            Cycles39_5 = 0b101,
            Cycles79_5 = 0b110,
            Cycles160_5 = 0b111
        ]
    ],
    pub TR1 [
        /// Analog watchdog 1 higher threshold
        HT1 OFFSET(16) NUMBITS(12) [],
        /// Analog watchdog 1 lower threshold
        LT1 OFFSET(0) NUMBITS(12) []
    ],
    /// Thresholds of analog watchdogs 2 and 3 (8 most significant bits)
    pub TR [
        HT OFFSET(16) NUMBITS(8) [],
        LT OFFSET(0) NUMBITS(8) []
    ],
    /// Two views of the same register, selected by `CFGR1.CHSELRMOD`
    pub CHSELR [
        /// Channel selection bitmap
        CHSEL OFFSET(0) NUMBITS(18) [],
        SQ8 OFFSET(28) NUMBITS(4) [],
        SQ7 OFFSET(24) NUMBITS(4) [],
        SQ6 OFFSET(20) NUMBITS(4) [],
        SQ5 OFFSET(16) NUMBITS(4) [],
        SQ4 OFFSET(12) NUMBITS(4) [],
        SQ3 OFFSET(8) NUMBITS(4) [],
        SQ2 OFFSET(4) NUMBITS(4) [],
        SQ1 OFFSET(0) NUMBITS(4) []
    ],
    pub DR [
        DATA OFFSET(0) NUMBITS(16) []
    ],
    /// Analog watchdog 2/3 channel selection bitmap
    pub AWDCR [
        AWDCH OFFSET(0) NUMBITS(18) []
    ],
    pub CALFACT [
        CALFACT OFFSET(0) NUMBITS(7) []
    ],
    pub CCR [
        /// VBAT enable
        VBATEN OFFSET(24) NUMBITS(1) [],
        /// Temperature sensor enable
        TSEN OFFSET(23) NUMBITS(1) [],
        /// VREFINT enable
        VREFEN OFFSET(22) NUMBITS(1) [],
        /// ADC prescaler
        PRESC OFFSET(18) NUMBITS(4) [
            Div1 = 0b0000,
            Div2 = 0b0001,
            Div4 = 0b0010,
            Div6 = 0b0011,
            Div8 = 0b0100,
            Div10 = 0b0101,
            Div12 = 0b0110,
            Div16 = 0b0111,
            Div32 = 0b1000,
            Div64 = 0b1001,
            Div128 = 0b1010,
            Div256 = 0b1011
        ]
    ]
];

pub const ADC_BASE: StaticRef<AdcRegisters> =
    unsafe { StaticRef::new((APB2PERIPH_BASE + 0x2400) as *const AdcRegisters) };

/// Internal channels.
pub mod channel {
    pub const VTEMP: u32 = 12;
    pub const VREFINT: u32 = 13;
    pub const VBAT: u32 = 14;
    pub const DAC_OUT: u32 = 15;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(AdcRegisters, tr1), 0x20);
        assert_eq!(offset_of!(AdcRegisters, tr3), 0x2C);
        assert_eq!(offset_of!(AdcRegisters, dr), 0x40);
        assert_eq!(offset_of!(AdcRegisters, awd2cr), 0xA0);
        assert_eq!(offset_of!(AdcRegisters, calfact), 0xB4);
        assert_eq!(offset_of!(AdcRegisters, ccr), 0x308);
        assert_eq!(size_of::<AdcRegisters>(), 0x30C);
        assert_eq!(ADC_BASE.addr(), 0x4001_2400);
    }

    #[test]
    fn single_conversion_config() {
        let cfgr1 = InMemoryRegister::<u32, CFGR1::Register>::new(0);
        cfgr1.write(CFGR1::RES::Bits10 + CFGR1::ALIGN::Left + CFGR1::EXTEN::RisingEdge);
        assert_eq!(cfgr1.get(), (0b01 << 3) | (1 << 5) | (0b01 << 10));
        assert_eq!(
            cfgr1.read_as_enum::<CFGR1::RES::Value>(CFGR1::RES),
            Some(CFGR1::RES::Value::Bits10)
        );
    }

    #[test]
    fn threshold_fields() {
        assert_eq!(TR1::HT1.mask, 0xFFF);
        assert_eq!(TR1::HT1.shift, 16);
        assert_eq!(TR::HT.mask, 0xFF);
        assert_eq!(CFGR1::AWD1CH.shift, 26);
    }
}
