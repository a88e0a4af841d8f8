// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Serial peripheral interfaces (SPI1, SPI2/I2S2, SUBGHZSPI).
//!
//! SUBGHZSPI is an SPI1-compatible instance wired to the sub-GHz radio. Its
//! NSS line is driven by `PWR_SUBGHZSPICR.NSS` rather than a GPIO. Only
//! SPI2 implements the I2S registers.
//!
//! `DR` is typed as a 32-bit register. Frames of 8 bits or fewer need a
//! byte-wide access to `DR` to avoid data packing; drivers do this through
//! [`SpiRegisters::dr_u8`].

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::{APB1PERIPH_BASE, APB2PERIPH_BASE, APB3PERIPH_BASE};
use crate::static_ref::StaticRef;

register_structs! {
    pub SpiRegisters {
        /// Control register 1
        (0x000 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// Control register 2
        (0x004 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// Status register
        (0x008 => pub sr: ReadWrite<u32, SR::Register>),
        /// Data register
        (0x00C => pub dr: ReadWrite<u32>),
        /// CRC polynomial register
        (0x010 => pub crcpr: ReadWrite<u32, CRC::Register>),
        /// RX CRC register
        (0x014 => pub rxcrcr: ReadOnly<u32, CRC::Register>),
        /// TX CRC register
        (0x018 => pub txcrcr: ReadOnly<u32, CRC::Register>),
        /// I2S configuration register (SPI2 only)
        (0x01C => pub i2scfgr: ReadWrite<u32, I2SCFGR::Register>),
        /// I2S prescaler register (SPI2 only)
        (0x020 => pub i2spr: ReadWrite<u32, I2SPR::Register>),
        (0x024 => @END),
    }
}

impl SpiRegisters {
    /// Byte-wide view of `DR`.
    pub fn dr_u8(&self) -> &ReadWrite<u8> {
        // SAFETY: `ReadWrite<u8>` is a transparent `UnsafeCell<u8>` and the
        // low byte of `dr` is at the same address on this little-endian core.
        unsafe { &*core::ptr::addr_of!(self.dr).cast::<ReadWrite<u8>>() }
    }
}

register_bitfields![u32,
    pub CR1 [
        /// Bidirectional data mode enable
        BIDIMODE OFFSET(15) NUMBITS(1) [],
        /// Output enable in bidirectional mode
        BIDIOE OFFSET(14) NUMBITS(1) [],
        /// Hardware CRC calculation enable
        CRCEN OFFSET(13) NUMBITS(1) [],
        /// Transmit CRC next
        CRCNEXT OFFSET(12) NUMBITS(1) [],
        /// CRC length
        CRCL OFFSET(11) NUMBITS(1) [
            Bits8 = 0,
            Bits16 = 1
        ],
        /// Receive only mode enable
        RXONLY OFFSET(10) NUMBITS(1) [],
        /// Software target management
        SSM OFFSET(9) NUMBITS(1) [],
        /// Internal target select
        SSI OFFSET(8) NUMBITS(1) [],
        /// Frame format
        LSBFIRST OFFSET(7) NUMBITS(1) [
            MsbFirst = 0,
            LsbFirst = 1
        ],
        /// SPI enable
        SPE OFFSET(6) NUMBITS(1) [],
        /// Baud rate control
        BR OFFSET(3) NUMBITS(3) [
            Div2 = 0b000,
            Div4 = 0b001,
            Div8 = 0b010,
            Div16 = 0b011,
            Div32 = 0b100,
            Div64 = 0b101,
            Div128 = 0b110,
            Div256 = 0b111
        ],
        /// Controller selection
        MSTR OFFSET(2) NUMBITS(1) [],
        /// Clock polarity
        CPOL OFFSET(1) NUMBITS(1) [
            IdleLow = 0,
            IdleHigh = 1
        ],
        /// Clock phase
        CPHA OFFSET(0) NUMBITS(1) [
            FirstEdge = 0,
            SecondEdge = 1
        ]
    ],
    pub CR2 [
        /// Last DMA transfer for transmission
        LDMA_TX OFFSET(14) NUMBITS(1) [],
        /// Last DMA transfer for reception
        LDMA_RX OFFSET(13) NUMBITS(1) [],
        /// FIFO reception threshold
        FRXTH OFFSET(12) NUMBITS(1) [
            Half = 0,
            Quarter = 1
        ],
        /// Data size
        DS OFFSET(8) NUMBITS(4) [
            Bits4 = 0b0011,
            Bits5 = 0b0100,
            Bits6 = 0b0101,
            Bits7 = 0b0110,
            Bits8 = 0b0111,
            Bits9 = 0b1000,
            Bits10 = 0b1001,
            Bits11 = 0b1010,
            Bits12 = 0b1011,
            Bits13 = 0b1100,
            Bits14 = 0b1101,
            Bits15 = 0b1110,
            Bits16 = 0b1111
        ],
        /// Tx buffer empty interrupt enable
        TXEIE OFFSET(7) NUMBITS(1) [],
        /// RX buffer not empty interrupt enable
        RXNEIE OFFSET(6) NUMBITS(1) [],
        /// Error interrupt enable
        ERRIE OFFSET(5) NUMBITS(1) [],
        /// Frame format
        FRF OFFSET(4) NUMBITS(1) [
            Motorola = 0,
            Ti = 1
        ],
        /// NSS pulse management
        NSSP OFFSET(3) NUMBITS(1) [],
        /// SS output enable
        SSOE OFFSET(2) NUMBITS(1) [],
        /// Tx buffer DMA enable
        TXDMAEN OFFSET(1) NUMBITS(1) [],
        /// Rx buffer DMA enable
        RXDMAEN OFFSET(0) NUMBITS(1) []
    ],
    pub SR [
        /// FIFO transmission level
        FTLVL OFFSET(11) NUMBITS(2) [
            Empty = 0b00,
            Quarter = 0b01,
            Half = 0b10,
            Full = 0b11
        ],
        /// FIFO reception level
        FRLVL OFFSET(9) NUMBITS(2) [
            Empty = 0b00,
            Quarter = 0b01,
            Half = 0b10,
            Full = 0b11
        ],
        /// Frame format error
        FRE OFFSET(8) NUMBITS(1) [],
        /// Busy flag
        BSY OFFSET(7) NUMBITS(1) [],
        /// Overrun flag
        OVR OFFSET(6) NUMBITS(1) [],
        /// Mode fault
        MODF OFFSET(5) NUMBITS(1) [],
        /// CRC error flag
        CRCERR OFFSET(4) NUMBITS(1) [],
        /// Underrun flag (I2S)
        UDR OFFSET(3) NUMBITS(1) [],
        /// Channel side (I2S)
        CHSIDE OFFSET(2) NUMBITS(1) [],
        /// Transmit buffer empty
        TXE OFFSET(1) NUMBITS(1) [],
        /// Receive buffer not empty
        RXNE OFFSET(0) NUMBITS(1) []
    ],
    pub CRC [
        CRC OFFSET(0) NUMBITS(16) []
    ],
    pub I2SCFGR [
        /// I2S mode selection
        I2SMOD OFFSET(11) NUMBITS(1) [],
        /// I2S enable
        I2SE OFFSET(10) NUMBITS(1) [],
        /// I2S configuration mode
        I2SCFG OFFSET(8) NUMBITS(2) [
            TargetTransmit = 0b00,
            TargetReceive = 0b01,
            ControllerTransmit = 0b10,
            ControllerReceive = 0b11
        ],
        /// PCM frame synchronization
        PCMSYNC OFFSET(7) NUMBITS(1) [],
        /// I2S standard selection
        I2SSTD OFFSET(4) NUMBITS(2) [
            Philips = 0b00,
            MsbJustified = 0b01,
            LsbJustified = 0b10,
            Pcm = 0b11
        ],
        /// Inactive state clock polarity
        CKPOL OFFSET(3) NUMBITS(1) [],
        /// Data length to be transferred
        DATLEN OFFSET(1) NUMBITS(2) [
            Bits16 = 0b00,
            Bits24 = 0b01,
            Bits32 = 0b10
        ],
        /// Channel length
        CHLEN OFFSET(0) NUMBITS(1) [
            Bits16 = 0,
            Bits32 = 1
        ]
    ],
    pub I2SPR [
        /// Master clock output enable
        MCKOE OFFSET(9) NUMBITS(1) [],
        /// Odd factor for the prescaler
        ODD OFFSET(8) NUMBITS(1) [],
        /// I2S linear prescaler
        I2SDIV OFFSET(0) NUMBITS(8) []
    ]
];

pub const SPI1_BASE: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new((APB2PERIPH_BASE + 0x3000) as *const SpiRegisters) };
pub const SPI2_BASE: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new((APB1PERIPH_BASE + 0x3800) as *const SpiRegisters) };
pub const SUBGHZSPI_BASE: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(APB3PERIPH_BASE as *const SpiRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(SpiRegisters, dr), 0x0C);
        assert_eq!(offset_of!(SpiRegisters, i2spr), 0x20);
        assert_eq!(size_of::<SpiRegisters>(), 0x24);
    }

    #[test]
    fn instance_bases() {
        assert_eq!(SPI1_BASE.addr(), 0x4001_3000);
        assert_eq!(SPI2_BASE.addr(), 0x4000_3800);
        assert_eq!(SUBGHZSPI_BASE.addr(), 0x5801_0000);
    }

    #[test]
    fn radio_link_configuration() {
        // Controller, software NSS, PCLK/8, 8-bit frames with quarter FIFO threshold.
        let cr1 = InMemoryRegister::<u32, CR1::Register>::new(0);
        cr1.write(CR1::MSTR::SET + CR1::SSM::SET + CR1::SSI::SET + CR1::BR::Div8 + CR1::SPE::SET);
        assert_eq!(cr1.get(), (1 << 2) | (1 << 9) | (1 << 8) | (0b010 << 3) | (1 << 6));

        let cr2 = InMemoryRegister::<u32, CR2::Register>::new(0);
        cr2.write(CR2::DS::Bits8 + CR2::FRXTH::Quarter);
        assert_eq!(cr2.get(), 0x1700);
    }

    #[test]
    fn byte_view_of_data_register() {
        // SAFETY: every register is an `UnsafeCell<u32>`, all-zero is valid.
        let regs: SpiRegisters = unsafe { core::mem::zeroed() };
        regs.dr.set(0x1234_5678);
        assert_eq!(regs.dr_u8().get(), 0x78);
        regs.dr_u8().set(0xAB);
        assert_eq!(regs.dr.get(), 0x1234_56AB);
    }

    #[test]
    fn fifo_levels() {
        let sr = InMemoryRegister::<u32, SR::Register>::new(0b10 << 9);
        assert_eq!(
            sr.read_as_enum::<SR::FRLVL::Value>(SR::FRLVL),
            Some(SR::FRLVL::Value::Half)
        );
    }
}
