// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! AES hardware accelerator (AES).
//!
//! Key words are stored most significant word last: `KEYR0` holds key bits
//! [31:0], `KEYR3` bits [127:96], and for 256-bit keys `KEYR7` bits
//! [255:224]. `IVR3` holds the most significant IV word.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::AHB3PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    pub AesRegisters {
        /// Control register
        (0x000 => pub cr: ReadWrite<u32, CR::Register>),
        /// Status register
        (0x004 => pub sr: ReadOnly<u32, SR::Register>),
        /// Data input register
        (0x008 => pub dinr: WriteOnly<u32>),
        /// Data output register
        (0x00C => pub doutr: ReadOnly<u32>),
        /// Key registers 0 to 3
        (0x010 => pub keyr_low: [WriteOnly<u32>; 4]),
        /// Initialization vector registers 0 to 3
        (0x020 => pub ivr: [ReadWrite<u32>; 4]),
        /// Key registers 4 to 7
        (0x030 => pub keyr_high: [WriteOnly<u32>; 4]),
        /// Suspend registers 0 to 7
        (0x040 => pub suspr: [ReadWrite<u32>; 8]),
        (0x060 => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Number of padding bytes in the last block
        NPBLB OFFSET(20) NUMBITS(4) [],
        /// Key size selection
        KEYSIZE OFFSET(18) NUMBITS(1) [
            Bits128 = 0,
            Bits256 = 1
        ],
        /// Chaining mode bit 2 (CCM)
        CHMOD2 OFFSET(16) NUMBITS(1) [],
        /// GCM or CCM phase selection
        GCMPH OFFSET(13) NUMBITS(2) [
            Init = 0b00,
            Header = 0b01,
            Payload = 0b10,
            Final = 0b11
        ],
        /// DMA output enable
        DMAOUTEN OFFSET(12) NUMBITS(1) [],
        /// DMA input enable
        DMAINEN OFFSET(11) NUMBITS(1) [],
        /// Error interrupt enable
        ERRIE OFFSET(10) NUMBITS(1) [],
        /// Computation complete flag interrupt enable
        CCFIE OFFSET(9) NUMBITS(1) [],
        /// Error flag clear
        ERRC OFFSET(8) NUMBITS(1) [],
        /// Computation complete flag clear
        CCFC OFFSET(7) NUMBITS(1) [],
        /// Chaining mode bits [1:0]; CCM is `Ctr` with `CHMOD2` set
        CHMOD OFFSET(5) NUMBITS(2) [
            Ecb = 0b00,
            Cbc = 0b01,
            Ctr = 0b10,
            GcmGmac = 0b11
        ],
        /// Operating mode
        MODE OFFSET(3) NUMBITS(2) [
            Encryption = 0b00,
            KeyDerivation = 0b01,
            Decryption = 0b10,
            KeyDerivationDecryption = 0b11
        ],
        /// Data type selection
        DATATYPE OFFSET(1) NUMBITS(2) [
            Word = 0b00,
            HalfWord = 0b01,
            Byte = 0b10,
            Bit = 0b11
        ],
        /// AES enable
        EN OFFSET(0) NUMBITS(1) []
    ],
    pub SR [
        /// Busy
        BUSY OFFSET(3) NUMBITS(1) [],
        /// Write error flag
        WRERR OFFSET(2) NUMBITS(1) [],
        /// Read error flag
        RDERR OFFSET(1) NUMBITS(1) [],
        /// Computation complete flag
        CCF OFFSET(0) NUMBITS(1) []
    ]
];

pub const AES_BASE: StaticRef<AesRegisters> =
    unsafe { StaticRef::new((AHB3PERIPH_BASE + 0x1800) as *const AesRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn key_and_iv_layout() {
        assert_eq!(offset_of!(AesRegisters, keyr_low), 0x10);
        assert_eq!(offset_of!(AesRegisters, ivr), 0x20);
        assert_eq!(offset_of!(AesRegisters, keyr_high), 0x30);
        assert_eq!(offset_of!(AesRegisters, suspr), 0x40);
        assert_eq!(size_of::<AesRegisters>(), 0x60);
        assert_eq!(AES_BASE.addr(), 0x5800_1800);
    }

    #[test]
    fn gcm_header_phase() {
        let cr = InMemoryRegister::<u32, CR::Register>::new(0);
        cr.write(CR::CHMOD::GcmGmac + CR::GCMPH::Header + CR::DATATYPE::Byte + CR::EN::SET);
        assert_eq!(cr.get(), (0b11 << 5) | (0b01 << 13) | (0b10 << 1) | 1);
        assert_eq!(
            cr.read_as_enum::<CR::GCMPH::Value>(CR::GCMPH),
            Some(CR::GCMPH::Value::Header)
        );
    }
}
