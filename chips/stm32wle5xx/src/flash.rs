// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Embedded flash memory interface (FLASH).
//!
//! Only the CPU1 view of the interface is described. `CR` is unlocked by
//! writing [`KEY1`] then [`KEY2`] to `KEYR`; option bytes additionally need
//! [`OPTKEY1`] then [`OPTKEY2`] in `OPTKEYR`. A wrong sequence locks the
//! register until the next reset.

use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::AHB3PERIPH_BASE;
use crate::static_ref::StaticRef;

pub const KEY1: u32 = 0x4567_0123;
pub const KEY2: u32 = 0xCDEF_89AB;
pub const OPTKEY1: u32 = 0x0819_2A3B;
pub const OPTKEY2: u32 = 0x4C5D_6E7F;

/// Erase granularity in bytes.
pub const PAGE_SIZE: usize = 2048;
/// Programming granularity in bytes (one double word).
pub const DOUBLE_WORD: usize = 8;
/// Rows programmed by one fast-programming sequence.
pub const FAST_PROGRAM_ROW: usize = 256;

register_structs! {
    /// Flash memory interface
    pub FlashRegisters {
        /// Access control register
        (0x000 => pub acr: ReadWrite<u32, ACR::Register>),
        (0x004 => _reserved0),
        /// Key register
        (0x008 => pub keyr: WriteOnly<u32>),
        /// Option key register
        (0x00C => pub optkeyr: WriteOnly<u32>),
        /// Status register
        (0x010 => pub sr: ReadWrite<u32, SR::Register>),
        /// Control register
        (0x014 => pub cr: ReadWrite<u32, CR::Register>),
        /// ECC register
        (0x018 => pub eccr: ReadWrite<u32, ECCR::Register>),
        (0x01C => _reserved1),
        /// Option register
        (0x020 => pub optr: ReadWrite<u32, OPTR::Register>),
        /// PCROP zone A start address register
        (0x024 => pub pcrop1asr: ReadWrite<u32, PCROPSR::Register>),
        /// PCROP zone A end address register
        (0x028 => pub pcrop1aer: ReadWrite<u32, PCROP1AER::Register>),
        /// WRP area A address register
        (0x02C => pub wrp1ar: ReadWrite<u32, WRPR::Register>),
        /// WRP area B address register
        (0x030 => pub wrp1br: ReadWrite<u32, WRPR::Register>),
        /// PCROP zone B start address register
        (0x034 => pub pcrop1bsr: ReadWrite<u32, PCROPSR::Register>),
        /// PCROP zone B end address register
        (0x038 => pub pcrop1ber: ReadWrite<u32, PCROPSR::Register>),
        (0x03C => @END),
    }
}

register_bitfields![u32,
    pub ACR [
        /// Flash User and System OTP empty check
        EMPTY OFFSET(16) NUMBITS(1) [],
        /// CPU1 programming/erase suspend request
        PES OFFSET(15) NUMBITS(1) [],
        /// CPU1 data cache reset
        DCRST OFFSET(12) NUMBITS(1) [],
        /// CPU1 instruction cache reset
        ICRST OFFSET(11) NUMBITS(1) [],
        /// CPU1 data cache enable
        DCEN OFFSET(10) NUMBITS(1) [],
        /// CPU1 instruction cache enable
        ICEN OFFSET(9) NUMBITS(1) [],
        /// CPU1 prefetch enable
        PRFTEN OFFSET(8) NUMBITS(1) [],
        /// Wait states, relative to the HCLK3 frequency
        LATENCY OFFSET(0) NUMBITS(3) [
            WS0 = 0b000,
            WS1 = 0b001,
            WS2 = 0b010
        ]
    ],
    pub SR [
        /// Programming or erase operation suspended
        PESD OFFSET(19) NUMBITS(1) [],
        /// Programming or erase configuration busy
        CFGBSY OFFSET(18) NUMBITS(1) [],
        /// Busy
        BSY OFFSET(16) NUMBITS(1) [],
        /// Option validity error
        OPTVERR OFFSET(15) NUMBITS(1) [],
        /// PCROP read error
        RDERR OFFSET(14) NUMBITS(1) [],
        /// Fast programming error
        FASTERR OFFSET(9) NUMBITS(1) [],
        /// Fast programming data miss error
        MISSERR OFFSET(8) NUMBITS(1) [],
        /// Programming sequence error
        PGSERR OFFSET(7) NUMBITS(1) [],
        /// Size error
        SIZERR OFFSET(6) NUMBITS(1) [],
        /// Programming alignment error
        PGAERR OFFSET(5) NUMBITS(1) [],
        /// Write protection error
        WRPERR OFFSET(4) NUMBITS(1) [],
        /// Programming error
        PROGERR OFFSET(3) NUMBITS(1) [],
        /// Operation error
        OPERR OFFSET(1) NUMBITS(1) [],
        /// End of operation
        EOP OFFSET(0) NUMBITS(1) []
    ],
    pub CR [
        /// CR lock
        LOCK OFFSET(31) NUMBITS(1) [],
        /// Options lock
        OPTLOCK OFFSET(30) NUMBITS(1) [],
        /// Force the option byte loading
        OBL_LAUNCH OFFSET(27) NUMBITS(1) [],
        /// PCROP read error interrupt enable
        RDERRIE OFFSET(26) NUMBITS(1) [],
        /// Error interrupt enable
        ERRIE OFFSET(25) NUMBITS(1) [],
        /// End of operation interrupt enable
        EOPIE OFFSET(24) NUMBITS(1) [],
        /// Fast programming
        FSTPG OFFSET(18) NUMBITS(1) [],
        /// Options modification start
        OPTSTRT OFFSET(17) NUMBITS(1) [],
        /// Start an erase operation
        STRT OFFSET(16) NUMBITS(1) [],
        /// Page number selection
        PNB OFFSET(3) NUMBITS(7) [],
        /// Mass erase
        MER OFFSET(2) NUMBITS(1) [],
        /// Page erase
        PER OFFSET(1) NUMBITS(1) [],
        /// Programming
        PG OFFSET(0) NUMBITS(1) []
    ],
    pub ECCR [
        /// ECC detection
        ECCD OFFSET(31) NUMBITS(1) [],
        /// ECC correction
        ECCC OFFSET(30) NUMBITS(1) [],
        /// CPU identification of the failing access
        CPUID OFFSET(26) NUMBITS(3) [],
        /// ECC correction interrupt enable
        ECCCIE OFFSET(24) NUMBITS(1) [],
        /// System flash memory ECC fail
        SYSF_ECC OFFSET(20) NUMBITS(1) [],
        /// ECC fail double-word address offset
        ADDR_ECC OFFSET(0) NUMBITS(17) []
    ],
    pub OPTR [
        /// Main flash memory boot lock
        BOOT_LOCK OFFSET(29) NUMBITS(1) [],
        /// BOOT0 option bit
        NBOOT0 OFFSET(27) NUMBITS(1) [],
        /// Software BOOT0
        NSWBOOT0 OFFSET(26) NUMBITS(1) [],
        /// SRAM1 and SRAM2 erase when system reset
        SRAM_RST OFFSET(25) NUMBITS(1) [],
        /// SRAM2 parity check enable
        SRAM2_PE OFFSET(24) NUMBITS(1) [],
        /// Boot configuration
        NBOOT1 OFFSET(23) NUMBITS(1) [],
        /// Window watchdog selection
        WWDG_SW OFFSET(19) NUMBITS(1) [],
        /// Independent watchdog counter freeze in Standby mode
        IWDG_STDBY OFFSET(18) NUMBITS(1) [],
        /// Independent watchdog counter freeze in Stop mode
        IWDG_STOP OFFSET(17) NUMBITS(1) [],
        /// Independent watchdog selection
        IWDG_SW OFFSET(16) NUMBITS(1) [],
        /// Reset generated when entering Shutdown mode
        NRST_SHDW OFFSET(14) NUMBITS(1) [],
        /// Reset generated when entering Standby mode
        NRST_STDBY OFFSET(13) NUMBITS(1) [],
        /// Reset generated when entering Stop mode
        NRST_STOP OFFSET(12) NUMBITS(1) [],
        /// BOR reset level
        BOR_LEV OFFSET(9) NUMBITS(3) [
            Level0 = 0b000,
            Level1 = 0b001,
            Level2 = 0b010,
            Level3 = 0b011,
            Level4 = 0b100
        ],
        /// Read protection level
        RDP OFFSET(0) NUMBITS(8) [
            Level0 = 0xAA,
            Level2 = 0xCC
        ]
    ],
    /// PCROP start (and zone B end) offset, in double words
    pub PCROPSR [
        STRT OFFSET(0) NUMBITS(8) []
    ],
    pub PCROP1AER [
        /// PCROP area preserved when RDP level decreased
        PCROP_RDP OFFSET(31) NUMBITS(1) [],
        /// PCROP zone A end offset
        END OFFSET(0) NUMBITS(8) []
    ],
    /// Write protection area, start and end page numbers
    pub WRPR [
        END OFFSET(16) NUMBITS(7) [],
        STRT OFFSET(0) NUMBITS(7) []
    ]
];

pub const FLASH_BASE: StaticRef<FlashRegisters> =
    unsafe { StaticRef::new((AHB3PERIPH_BASE + 0x4000) as *const FlashRegisters) };

/// Page index containing `addr`, or `None` when the address is not in main
/// flash.
pub const fn page_of(addr: usize) -> Option<usize> {
    if crate::memory_map::FLASH.contains(addr) {
        Some((addr - crate::memory_map::FLASH_BASE) / PAGE_SIZE)
    } else {
        None
    }
}

/// Status flags cleared by writing 1 once an operation has ended.
pub const ERROR_FLAGS: u32 = (1 << 1)
    | (1 << 3)
    | (1 << 4)
    | (1 << 5)
    | (1 << 6)
    | (1 << 7)
    | (1 << 8)
    | (1 << 9)
    | (1 << 14)
    | (1 << 15);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(FlashRegisters, keyr), 0x08);
        assert_eq!(offset_of!(FlashRegisters, sr), 0x10);
        assert_eq!(offset_of!(FlashRegisters, optr), 0x20);
        assert_eq!(offset_of!(FlashRegisters, wrp1br), 0x30);
        assert_eq!(offset_of!(FlashRegisters, pcrop1ber), 0x38);
        assert_eq!(size_of::<FlashRegisters>(), 0x3C);
        assert_eq!(FLASH_BASE.addr(), 0x5800_4000);
    }

    #[test]
    fn unlock_keys() {
        assert_eq!(KEY1, 0x4567_0123);
        assert_eq!(KEY2, 0xCDEF_89AB);
        assert_eq!(OPTKEY1, 0x0819_2A3B);
        assert_eq!(OPTKEY2, 0x4C5D_6E7F);
    }

    #[test]
    fn page_erase_command() {
        let cr = InMemoryRegister::<u32, CR::Register>::new(0xC000_0000);
        assert!(cr.is_set(CR::LOCK));
        cr.write(CR::PER::SET + CR::PNB.val(127) + CR::STRT::SET);
        assert_eq!(cr.get(), (1 << 1) | (127 << 3) | (1 << 16));
    }

    #[test]
    fn pages() {
        assert_eq!(page_of(0x0800_0000), Some(0));
        assert_eq!(page_of(0x0800_07FF), Some(0));
        assert_eq!(page_of(0x0800_0800), Some(1));
        assert_eq!(page_of(0x0803_FFFF), Some(127));
        assert_eq!(page_of(0x0804_0000), None);
        assert_eq!(CR::PNB.mask as usize + 1, 128);
    }

    #[test]
    fn error_flags_match_fields() {
        let sr = InMemoryRegister::<u32, SR::Register>::new(ERROR_FLAGS);
        assert!(sr.is_set(SR::OPERR));
        assert!(sr.is_set(SR::OPTVERR));
        assert!(!sr.is_set(SR::EOP));
        assert!(!sr.is_set(SR::BSY));
    }

    #[test]
    fn read_protection_level() {
        let optr = InMemoryRegister::<u32, OPTR::Register>::new(0x3FFF_F0AA);
        assert_eq!(
            optr.read_as_enum::<OPTR::RDP::Value>(OPTR::RDP),
            Some(OPTR::RDP::Value::Level0)
        );
    }
}
