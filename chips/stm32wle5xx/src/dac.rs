// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Digital-to-analog converter (DAC), one output channel.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::APB1PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    pub DacRegisters {
        /// Control register
        (0x000 => pub cr: ReadWrite<u32, CR::Register>),
        /// Software trigger register
        (0x004 => pub swtrgr: WriteOnly<u32, SWTRGR::Register>),
        /// Channel 1 12-bit right-aligned data holding register
        (0x008 => pub dhr12r1: ReadWrite<u32, DHR12R::Register>),
        /// Channel 1 12-bit left-aligned data holding register
        (0x00C => pub dhr12l1: ReadWrite<u32, DHR12L::Register>),
        /// Channel 1 8-bit right-aligned data holding register
        (0x010 => pub dhr8r1: ReadWrite<u32, DHR8R::Register>),
        (0x014 => _reserved0),
        /// Channel 1 data output register
        (0x02C => pub dor1: ReadOnly<u32, DOR::Register>),
        (0x030 => _reserved1),
        /// Status register
        (0x034 => pub sr: ReadWrite<u32, SR::Register>),
        /// Calibration control register
        (0x038 => pub ccr: ReadWrite<u32, CCR::Register>),
        /// Mode control register
        (0x03C => pub mcr: ReadWrite<u32, MCR::Register>),
        /// Channel 1 sample and hold sample time register
        (0x040 => pub shsr1: ReadWrite<u32, SHSR::Register>),
        (0x044 => _reserved2),
        /// Sample and hold time register
        (0x048 => pub shhr: ReadWrite<u32, SHHR::Register>),
        /// Sample and hold refresh time register
        (0x04C => pub shrr: ReadWrite<u32, SHRR::Register>),
        (0x050 => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Channel 1 calibration enable
        CEN1 OFFSET(14) NUMBITS(1) [],
        /// Channel 1 DMA underrun interrupt enable
        DMAUDRIE1 OFFSET(13) NUMBITS(1) [],
        /// Channel 1 DMA enable
        DMAEN1 OFFSET(12) NUMBITS(1) [],
        /// Channel 1 mask/amplitude selector
        MAMP1 OFFSET(8) NUMBITS(4) [],
        /// Channel 1 noise/triangle wave generation enable
        WAVE1 OFFSET(6) NUMBITS(2) [
            Disabled = 0b00,
            Noise = 0b01,
            Triangle = 0b10
        ],
        /// Channel 1 trigger selection
        TSEL1 OFFSET(2) NUMBITS(4) [
            Software = 0b0000,
            Tim1Trgo = 0b0001,
            Tim2Trgo = 0b0010,
            Lptim1Out = 0b1011,
            Lptim2Out = 0b1100,
            Lptim3Out = 0b1101,
            Exti9 = 0b1110
        ],
        /// Channel 1 trigger enable
        TEN1 OFFSET(1) NUMBITS(1) [],
        /// Channel 1 enable
        EN1 OFFSET(0) NUMBITS(1) []
    ],
    pub SWTRGR [
        SWTRIG1 OFFSET(0) NUMBITS(1) []
    ],
    pub DHR12R [
        DACC1DHR OFFSET(0) NUMBITS(12) []
    ],
    pub DHR12L [
        DACC1DHR OFFSET(4) NUMBITS(12) []
    ],
    pub DHR8R [
        DACC1DHR OFFSET(0) NUMBITS(8) []
    ],
    pub DOR [
        DACC1DOR OFFSET(0) NUMBITS(12) []
    ],
    pub SR [
        /// Channel 1 busy writing sample time
        BWST1 OFFSET(15) NUMBITS(1) [],
        /// Channel 1 calibration offset status
        CAL_FLAG1 OFFSET(14) NUMBITS(1) [],
        /// Channel 1 DMA underrun flag
        DMAUDR1 OFFSET(13) NUMBITS(1) []
    ],
    pub CCR [
        OTRIM1 OFFSET(0) NUMBITS(5) []
    ],
    pub MCR [
        /// Channel 1 mode
        MODE1 OFFSET(0) NUMBITS(3) [
            NormalExternalBuffered = 0b000,
            NormalExternalAndOnChipBuffered = 0b001,
            NormalExternalUnbuffered = 0b010,
            NormalOnChipUnbuffered = 0b011,
            SampleHoldExternalBuffered = 0b100,
            SampleHoldExternalAndOnChipBuffered = 0b101,
            SampleHoldExternalAndOnChipUnbuffered = 0b110,
            SampleHoldOnChipUnbuffered = 0b111
        ]
    ],
    pub SHSR [
        TSAMPLE1 OFFSET(0) NUMBITS(10) []
    ],
    pub SHHR [
        THOLD1 OFFSET(0) NUMBITS(10) []
    ],
    pub SHRR [
        TREFRESH1 OFFSET(0) NUMBITS(8) []
    ]
];

pub const DAC_BASE: StaticRef<DacRegisters> =
    unsafe { StaticRef::new((APB1PERIPH_BASE + 0x7400) as *const DacRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(DacRegisters, dor1), 0x2C);
        assert_eq!(offset_of!(DacRegisters, sr), 0x34);
        assert_eq!(offset_of!(DacRegisters, shsr1), 0x40);
        assert_eq!(offset_of!(DacRegisters, shrr), 0x4C);
        assert_eq!(size_of::<DacRegisters>(), 0x50);
        assert_eq!(DAC_BASE.addr(), 0x4000_7400);
    }

    #[test]
    fn left_aligned_holding_register() {
        let dhr = InMemoryRegister::<u32, DHR12L::Register>::new(0);
        dhr.write(DHR12L::DACC1DHR.val(0xABC));
        assert_eq!(dhr.get(), 0xABC0);
    }

    #[test]
    fn triangle_wave_on_timer_trigger() {
        let cr = InMemoryRegister::<u32, CR::Register>::new(0);
        cr.write(CR::WAVE1::Triangle + CR::MAMP1.val(0b1011) + CR::TSEL1::Tim2Trgo + CR::TEN1::SET);
        assert_eq!(cr.get(), (0b10 << 6) | (0b1011 << 8) | (0b0010 << 2) | (1 << 1));
    }
}
