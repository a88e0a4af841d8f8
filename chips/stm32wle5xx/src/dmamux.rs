// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! DMA request multiplexer (DMAMUX1).
//!
//! Channels 0 to 6 feed DMA1 channels 1 to 7, channels 7 to 13 feed DMA2
//! channels 1 to 7.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::AHB1PERIPH_BASE;
use crate::static_ref::StaticRef;

pub const CHANNELS: usize = 14;
pub const REQUEST_GENERATORS: usize = 4;

register_structs! {
    pub DmamuxRegisters {
        /// Request line multiplexer channel configuration registers
        (0x000 => pub ccr: [ReadWrite<u32, CCR::Register>; CHANNELS]),
        (0x038 => _reserved0),
        /// Request line multiplexer interrupt channel status register
        (0x080 => pub csr: ReadOnly<u32, CSR::Register>),
        /// Request line multiplexer interrupt clear flag register
        (0x084 => pub cfr: WriteOnly<u32, CSR::Register>),
        (0x088 => _reserved1),
        /// Request generator channel configuration registers
        (0x100 => pub rgcr: [ReadWrite<u32, RGCR::Register>; REQUEST_GENERATORS]),
        (0x110 => _reserved2),
        /// Request generator interrupt status register
        (0x140 => pub rgsr: ReadOnly<u32, RGSR::Register>),
        /// Request generator interrupt clear flag register
        (0x144 => pub rgcfr: WriteOnly<u32, RGSR::Register>),
        (0x148 => @END),
    }
}

register_bitfields![u32,
    pub CCR [
        /// Synchronization identification
        SYNC_ID OFFSET(24) NUMBITS(5) [],
        /// Number of DMA requests minus 1 to forward
        NBREQ OFFSET(19) NUMBITS(5) [],
        /// Synchronization polarity
        SPOL OFFSET(17) NUMBITS(2) [
            NoEvent = 0b00,
            RisingEdge = 0b01,
            FallingEdge = 0b10,
            BothEdges = 0b11
        ],
        /// Synchronization enable
        SE OFFSET(16) NUMBITS(1) [],
        /// Event generation enable
        EGE OFFSET(9) NUMBITS(1) [],
        /// Synchronization overrun interrupt enable
        SOIE OFFSET(8) NUMBITS(1) [],
        /// DMA request identification
        DMAREQ_ID OFFSET(0) NUMBITS(7) []
    ],
    /// Synchronization overrun flags, one bit per channel
    pub CSR [
        SOF OFFSET(0) NUMBITS(14) []
    ],
    pub RGCR [
        /// Number of DMA requests to be generated minus 1
        GNBREQ OFFSET(19) NUMBITS(5) [],
        /// DMA request generator trigger polarity
        GPOL OFFSET(17) NUMBITS(2) [
            NoEvent = 0b00,
            RisingEdge = 0b01,
            FallingEdge = 0b10,
            BothEdges = 0b11
        ],
        /// DMA request generator channel enable
        GE OFFSET(16) NUMBITS(1) [],
        /// Trigger overrun interrupt enable
        OIE OFFSET(8) NUMBITS(1) [],
        /// Signal identification
        SIG_ID OFFSET(0) NUMBITS(5) []
    ],
    pub RGSR [
        /// Trigger overrun event flags, one bit per generator
        OF OFFSET(0) NUMBITS(4) []
    ]
];

pub const DMAMUX1_BASE: StaticRef<DmamuxRegisters> =
    unsafe { StaticRef::new((AHB1PERIPH_BASE + 0x0800) as *const DmamuxRegisters) };

/// DMA request lines (`DMAREQ_ID` values).
pub mod request {
    pub const DMAMUX_REQ_GEN0: u32 = 1;
    pub const DMAMUX_REQ_GEN1: u32 = 2;
    pub const DMAMUX_REQ_GEN2: u32 = 3;
    pub const DMAMUX_REQ_GEN3: u32 = 4;
    pub const ADC: u32 = 5;
    pub const DAC_OUT1: u32 = 6;
    pub const SPI1_RX: u32 = 7;
    pub const SPI1_TX: u32 = 8;
    pub const SPI2_RX: u32 = 9;
    pub const SPI2_TX: u32 = 10;
    pub const I2C1_RX: u32 = 11;
    pub const I2C1_TX: u32 = 12;
    pub const I2C2_RX: u32 = 13;
    pub const I2C2_TX: u32 = 14;
    pub const I2C3_RX: u32 = 15;
    pub const I2C3_TX: u32 = 16;
    pub const USART1_RX: u32 = 17;
    pub const USART1_TX: u32 = 18;
    pub const USART2_RX: u32 = 19;
    pub const USART2_TX: u32 = 20;
    pub const LPUART1_RX: u32 = 21;
    pub const LPUART1_TX: u32 = 22;
    pub const TIM1_CH1: u32 = 23;
    pub const TIM1_CH2: u32 = 24;
    pub const TIM1_CH3: u32 = 25;
    pub const TIM1_CH4: u32 = 26;
    pub const TIM1_UP: u32 = 27;
    pub const TIM1_TRIG: u32 = 28;
    pub const TIM1_COM: u32 = 29;
    pub const TIM2_CH1: u32 = 30;
    pub const TIM2_CH2: u32 = 31;
    pub const TIM2_CH3: u32 = 32;
    pub const TIM2_CH4: u32 = 33;
    pub const TIM2_UP: u32 = 34;
    pub const TIM16_CH1: u32 = 35;
    pub const TIM16_UP: u32 = 36;
    pub const TIM17_CH1: u32 = 37;
    pub const TIM17_UP: u32 = 38;
    pub const AES_IN: u32 = 39;
    pub const AES_OUT: u32 = 40;
    pub const SUBGHZSPI_RX: u32 = 41;
    pub const SUBGHZSPI_TX: u32 = 42;
}

/// DMAMUX channel serving DMA controller `dma` (1 or 2), channel `channel`
/// (1 to 7). `None` for any other controller or channel number.
pub const fn mux_channel(dma: usize, channel: usize) -> Option<usize> {
    if dma == 0 || dma > 2 || channel == 0 || channel > crate::dma::CHANNELS {
        return None;
    }
    Some((dma - 1) * crate::dma::CHANNELS + (channel - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(DmamuxRegisters, csr), 0x80);
        assert_eq!(offset_of!(DmamuxRegisters, rgcr), 0x100);
        assert_eq!(offset_of!(DmamuxRegisters, rgcfr), 0x144);
        assert_eq!(size_of::<DmamuxRegisters>(), 0x148);
        assert_eq!(DMAMUX1_BASE.addr(), 0x4002_0800);
    }

    #[test]
    fn channel_mapping() {
        assert_eq!(mux_channel(1, 1), Some(0));
        assert_eq!(mux_channel(1, 7), Some(6));
        assert_eq!(mux_channel(2, 1), Some(7));
        assert_eq!(mux_channel(2, 7), Some(CHANNELS - 1));
    }

    #[test]
    fn unmapped_controller_channels() {
        assert_eq!(mux_channel(0, 1), None);
        assert_eq!(mux_channel(3, 1), None);
        assert_eq!(mux_channel(1, 0), None);
        assert_eq!(mux_channel(1, 8), None);
        assert_eq!(mux_channel(2, 8), None);
    }

    #[test]
    fn route_usart_tx() {
        let ccr = InMemoryRegister::<u32, CCR::Register>::new(0);
        ccr.write(CCR::DMAREQ_ID.val(request::USART2_TX));
        assert_eq!(ccr.read(CCR::DMAREQ_ID), 20);
        assert_eq!(CCR::DMAREQ_ID.mask, 0x7F);
    }
}
