// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Direct memory access controllers (DMA1, DMA2).
//!
//! Each controller has seven channels laid out back to back every 20 bytes.
//! Request routing is done by [`crate::dmamux`]: DMA1 channel `n` is DMAMUX
//! channel `n - 1`, DMA2 channel `n` is DMAMUX channel `n + 6`.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::AHB1PERIPH_BASE;
use crate::static_ref::StaticRef;

/// Channels per controller.
pub const CHANNELS: usize = 7;

register_structs! {
    /// One DMA channel
    pub DmaChannelRegisters {
        /// Channel configuration register
        (0x000 => pub ccr: ReadWrite<u32, CCR::Register>),
        /// Channel number of data to transfer register
        (0x004 => pub cndtr: ReadWrite<u32, CNDTR::Register>),
        /// Channel peripheral address register
        (0x008 => pub cpar: ReadWrite<u32>),
        /// Channel memory address register
        (0x00C => pub cmar: ReadWrite<u32>),
        (0x010 => _reserved0),
        (0x014 => @END),
    }
}

register_structs! {
    /// Direct memory access controller
    pub DmaRegisters {
        /// Interrupt status register
        (0x000 => pub isr: ReadOnly<u32, ISR::Register>),
        /// Interrupt flag clear register
        (0x004 => pub ifcr: WriteOnly<u32, IFCR::Register>),
        /// Channels 1 to 7, at index `channel - 1`
        (0x008 => pub channels: [DmaChannelRegisters; CHANNELS]),
        (0x094 => @END),
    }
}

register_bitfields![u32,
    pub ISR [
        /// Channel 1 global interrupt flag
        GIF1 OFFSET(0) NUMBITS(1) [],
        /// Channel 1 transfer complete flag
        TCIF1 OFFSET(1) NUMBITS(1) [],
        /// Channel 1 half transfer flag
        HTIF1 OFFSET(2) NUMBITS(1) [],
        /// Channel 1 transfer error flag
        TEIF1 OFFSET(3) NUMBITS(1) [],
        /// Channel 2 global interrupt flag
        GIF2 OFFSET(4) NUMBITS(1) [],
        /// Channel 2 transfer complete flag
        TCIF2 OFFSET(5) NUMBITS(1) [],
        /// Channel 2 half transfer flag
        HTIF2 OFFSET(6) NUMBITS(1) [],
        /// Channel 2 transfer error flag
        TEIF2 OFFSET(7) NUMBITS(1) [],
        /// Channel 3 global interrupt flag
        GIF3 OFFSET(8) NUMBITS(1) [],
        /// Channel 3 transfer complete flag
        TCIF3 OFFSET(9) NUMBITS(1) [],
        /// Channel 3 half transfer flag
        HTIF3 OFFSET(10) NUMBITS(1) [],
        /// Channel 3 transfer error flag
        TEIF3 OFFSET(11) NUMBITS(1) [],
        /// Channel 4 global interrupt flag
        GIF4 OFFSET(12) NUMBITS(1) [],
        /// Channel 4 transfer complete flag
        TCIF4 OFFSET(13) NUMBITS(1) [],
        /// Channel 4 half transfer flag
        HTIF4 OFFSET(14) NUMBITS(1) [],
        /// Channel 4 transfer error flag
        TEIF4 OFFSET(15) NUMBITS(1) [],
        /// Channel 5 global interrupt flag
        GIF5 OFFSET(16) NUMBITS(1) [],
        /// Channel 5 transfer complete flag
        TCIF5 OFFSET(17) NUMBITS(1) [],
        /// Channel 5 half transfer flag
        HTIF5 OFFSET(18) NUMBITS(1) [],
        /// Channel 5 transfer error flag
        TEIF5 OFFSET(19) NUMBITS(1) [],
        /// Channel 6 global interrupt flag
        GIF6 OFFSET(20) NUMBITS(1) [],
        /// Channel 6 transfer complete flag
        TCIF6 OFFSET(21) NUMBITS(1) [],
        /// Channel 6 half transfer flag
        HTIF6 OFFSET(22) NUMBITS(1) [],
        /// Channel 6 transfer error flag
        TEIF6 OFFSET(23) NUMBITS(1) [],
        /// Channel 7 global interrupt flag
        GIF7 OFFSET(24) NUMBITS(1) [],
        /// Channel 7 transfer complete flag
        TCIF7 OFFSET(25) NUMBITS(1) [],
        /// Channel 7 half transfer flag
        HTIF7 OFFSET(26) NUMBITS(1) [],
        /// Channel 7 transfer error flag
        TEIF7 OFFSET(27) NUMBITS(1) []
    ],
    pub IFCR [
        /// Channel 1 global interrupt flag clear
        CGIF1 OFFSET(0) NUMBITS(1) [],
        /// Channel 1 transfer complete flag clear
        CTCIF1 OFFSET(1) NUMBITS(1) [],
        /// Channel 1 half transfer flag clear
        CHTIF1 OFFSET(2) NUMBITS(1) [],
        /// Channel 1 transfer error flag clear
        CTEIF1 OFFSET(3) NUMBITS(1) [],
        /// Channel 2 global interrupt flag clear
        CGIF2 OFFSET(4) NUMBITS(1) [],
        /// Channel 2 transfer complete flag clear
        CTCIF2 OFFSET(5) NUMBITS(1) [],
        /// Channel 2 half transfer flag clear
        CHTIF2 OFFSET(6) NUMBITS(1) [],
        /// Channel 2 transfer error flag clear
        CTEIF2 OFFSET(7) NUMBITS(1) [],
        /// Channel 3 global interrupt flag clear
        CGIF3 OFFSET(8) NUMBITS(1) [],
        /// Channel 3 transfer complete flag clear
        CTCIF3 OFFSET(9) NUMBITS(1) [],
        /// Channel 3 half transfer flag clear
        CHTIF3 OFFSET(10) NUMBITS(1) [],
        /// Channel 3 transfer error flag clear
        CTEIF3 OFFSET(11) NUMBITS(1) [],
        /// Channel 4 global interrupt flag clear
        CGIF4 OFFSET(12) NUMBITS(1) [],
        /// Channel 4 transfer complete flag clear
        CTCIF4 OFFSET(13) NUMBITS(1) [],
        /// Channel 4 half transfer flag clear
        CHTIF4 OFFSET(14) NUMBITS(1) [],
        /// Channel 4 transfer error flag clear
        CTEIF4 OFFSET(15) NUMBITS(1) [],
        /// Channel 5 global interrupt flag clear
        CGIF5 OFFSET(16) NUMBITS(1) [],
        /// Channel 5 transfer complete flag clear
        CTCIF5 OFFSET(17) NUMBITS(1) [],
        /// Channel 5 half transfer flag clear
        CHTIF5 OFFSET(18) NUMBITS(1) [],
        /// Channel 5 transfer error flag clear
        CTEIF5 OFFSET(19) NUMBITS(1) [],
        /// Channel 6 global interrupt flag clear
        CGIF6 OFFSET(20) NUMBITS(1) [],
        /// Channel 6 transfer complete flag clear
        CTCIF6 OFFSET(21) NUMBITS(1) [],
        /// Channel 6 half transfer flag clear
        CHTIF6 OFFSET(22) NUMBITS(1) [],
        /// Channel 6 transfer error flag clear
        CTEIF6 OFFSET(23) NUMBITS(1) [],
        /// Channel 7 global interrupt flag clear
        CGIF7 OFFSET(24) NUMBITS(1) [],
        /// Channel 7 transfer complete flag clear
        CTCIF7 OFFSET(25) NUMBITS(1) [],
        /// Channel 7 half transfer flag clear
        CHTIF7 OFFSET(26) NUMBITS(1) [],
        /// Channel 7 transfer error flag clear
        CTEIF7 OFFSET(27) NUMBITS(1) []
    ],
    pub CCR [
        /// Memory-to-memory mode
        MEM2MEM OFFSET(14) NUMBITS(1) [],
        /// Priority level
        PL OFFSET(12) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            High = 0b10,
            VeryHigh = 0b11
        ],
        /// Memory size
        MSIZE OFFSET(10) NUMBITS(2) [
            Bits8 = 0b00,
            Bits16 = 0b01,
            Bits32 = 0b10
        ],
        /// Peripheral size
        PSIZE OFFSET(8) NUMBITS(2) [
            Bits8 = 0b00,
            Bits16 = 0b01,
            Bits32 = 0b10
        ],
        /// Memory increment mode
        MINC OFFSET(7) NUMBITS(1) [],
        /// Peripheral increment mode
        PINC OFFSET(6) NUMBITS(1) [],
        /// Circular mode
        CIRC OFFSET(5) NUMBITS(1) [],
        /// Data transfer direction
        DIR OFFSET(4) NUMBITS(1) [
            FromPeripheral = 0,
            FromMemory = 1
        ],
        /// Transfer error interrupt enable
        TEIE OFFSET(3) NUMBITS(1) [],
        /// Half transfer interrupt enable
        HTIE OFFSET(2) NUMBITS(1) [],
        /// Transfer complete interrupt enable
        TCIE OFFSET(1) NUMBITS(1) [],
        /// Channel enable
        EN OFFSET(0) NUMBITS(1) []
    ],
    pub CNDTR [
        /// Number of data to transfer
        NDT OFFSET(0) NUMBITS(16) []
    ]
];

pub const DMA1_BASE: StaticRef<DmaRegisters> =
    unsafe { StaticRef::new(AHB1PERIPH_BASE as *const DmaRegisters) };
pub const DMA2_BASE: StaticRef<DmaRegisters> =
    unsafe { StaticRef::new((AHB1PERIPH_BASE + 0x0400) as *const DmaRegisters) };

/// Bit offset of a channel's four flags in `ISR`/`IFCR` (`channel` counted
/// from 1 as in the reference manual). `None` outside `1..=CHANNELS`.
pub const fn flag_shift(channel: usize) -> Option<usize> {
    if channel == 0 || channel > CHANNELS {
        return None;
    }
    Some((channel - 1) * 4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn channel_stride_is_20_bytes() {
        assert_eq!(size_of::<DmaChannelRegisters>(), 20);
        assert_eq!(offset_of!(DmaRegisters, channels), 0x08);
        // CMAR7 is at 0x08C in the reference manual.
        assert_eq!(0x08 + 6 * 20 + offset_of!(DmaChannelRegisters, cmar), 0x8C);
        assert_eq!(size_of::<DmaRegisters>(), 0x94);
    }

    #[test]
    fn controller_bases() {
        assert_eq!(DMA1_BASE.addr(), 0x4002_0000);
        assert_eq!(DMA2_BASE.addr(), 0x4002_0400);
    }

    #[test]
    fn channel_flags() {
        assert_eq!(flag_shift(1), Some(ISR::GIF1.shift));
        assert_eq!(flag_shift(7), Some(ISR::GIF7.shift));
        assert_eq!(ISR::TEIF7.shift, 27);
        assert_eq!(IFCR::CTCIF3.shift, ISR::TCIF3.shift);
    }

    #[test]
    fn channel_numbers_outside_controller() {
        assert_eq!(flag_shift(0), None);
        assert_eq!(flag_shift(CHANNELS + 1), None);
        assert_eq!(flag_shift(usize::MAX), None);
    }

    #[test]
    fn memory_to_peripheral_configuration() {
        let ccr = InMemoryRegister::<u32, CCR::Register>::new(0);
        ccr.write(
            CCR::DIR::FromMemory
                + CCR::MINC::SET
                + CCR::MSIZE::Bits8
                + CCR::PSIZE::Bits32
                + CCR::PL::High
                + CCR::TCIE::SET,
        );
        assert_eq!(ccr.get(), (1 << 4) | (1 << 7) | (0b10 << 8) | (0b10 << 12) | (1 << 1));
    }
}
