// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Real-time clock (RTC).
//!
//! The RTC and backup registers live in the backup domain: write access
//! needs `PWR_CR1.DBP` set, then [`WPR_KEY1`] followed by [`WPR_KEY2`] in
//! `WPR`. Any other value written to `WPR` re-enables the protection.
//!
//! Calendar registers hold BCD values; use [`bcd_to_bin`] and
//! [`bin_to_bcd`] to convert.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::APB1PERIPH_BASE;
use crate::static_ref::StaticRef;

pub const WPR_KEY1: u32 = 0xCA;
pub const WPR_KEY2: u32 = 0x53;
/// Any value other than the two keys locks the registers again.
pub const WPR_LOCK: u32 = 0xFF;

register_structs! {
    /// Real-time clock
    pub RtcRegisters {
        /// Time register
        (0x000 => pub tr: ReadWrite<u32, TR::Register>),
        /// Date register
        (0x004 => pub dr: ReadWrite<u32, DR::Register>),
        /// Sub second register
        (0x008 => pub ssr: ReadOnly<u32>),
        /// Initialization control and status register
        (0x00C => pub icsr: ReadWrite<u32, ICSR::Register>),
        /// Prescaler register
        (0x010 => pub prer: ReadWrite<u32, PRER::Register>),
        /// Wakeup timer register
        (0x014 => pub wutr: ReadWrite<u32, WUTR::Register>),
        /// Control register
        (0x018 => pub cr: ReadWrite<u32, CR::Register>),
        (0x01C => _reserved0),
        /// Write protection register
        (0x024 => pub wpr: WriteOnly<u32, WPR::Register>),
        /// Calibration register
        (0x028 => pub calr: ReadWrite<u32, CALR::Register>),
        /// Shift control register
        (0x02C => pub shiftr: WriteOnly<u32, SHIFTR::Register>),
        /// Timestamp time register
        (0x030 => pub tstr: ReadOnly<u32, TR::Register>),
        /// Timestamp date register
        (0x034 => pub tsdr: ReadOnly<u32, DR::Register>),
        /// Timestamp sub second register
        (0x038 => pub tsssr: ReadOnly<u32>),
        (0x03C => _reserved1),
        /// Alarm A register
        (0x040 => pub alrmar: ReadWrite<u32, ALRMR::Register>),
        /// Alarm A sub second register
        (0x044 => pub alrmassr: ReadWrite<u32, ALRMSSR::Register>),
        /// Alarm B register
        (0x048 => pub alrmbr: ReadWrite<u32, ALRMR::Register>),
        /// Alarm B sub second register
        (0x04C => pub alrmbssr: ReadWrite<u32, ALRMSSR::Register>),
        /// Status register
        (0x050 => pub sr: ReadOnly<u32, SR::Register>),
        /// Masked interrupt status register
        (0x054 => pub misr: ReadOnly<u32, SR::Register>),
        (0x058 => _reserved2),
        /// Status clear register
        (0x05C => pub scr: WriteOnly<u32, SR::Register>),
        (0x060 => _reserved3),
        /// Alarm A binary mode register
        (0x070 => pub alrabinr: ReadWrite<u32>),
        /// Alarm B binary mode register
        (0x074 => pub alrbbinr: ReadWrite<u32>),
        (0x078 => @END),
    }
}

register_bitfields![u32,
    pub TR [
        /// AM/PM notation
        PM OFFSET(22) NUMBITS(1) [
            AmOr24 = 0,
            Pm = 1
        ],
        /// Hour tens in BCD
        HT OFFSET(20) NUMBITS(2) [],
        /// Hour units in BCD
        HU OFFSET(16) NUMBITS(4) [],
        /// Minute tens in BCD
        MNT OFFSET(12) NUMBITS(3) [],
        /// Minute units in BCD
        MNU OFFSET(8) NUMBITS(4) [],
        /// Second tens in BCD
        ST OFFSET(4) NUMBITS(3) [],
        /// Second units in BCD
        SU OFFSET(0) NUMBITS(4) []
    ],
    pub DR [
        /// Year tens in BCD
        YT OFFSET(20) NUMBITS(4) [],
        /// Year units in BCD
        YU OFFSET(16) NUMBITS(4) [],
        /// Week day units
        WDU OFFSET(13) NUMBITS(3) [
            Monday = 1,
            Tuesday = 2,
            Wednesday = 3,
            Thursday = 4,
            Friday = 5,
            Saturday = 6,
            Sunday = 7
        ],
        /// Month tens in BCD
        MT OFFSET(12) NUMBITS(1) [],
        /// Month units in BCD
        MU OFFSET(8) NUMBITS(4) [],
        /// Date tens in BCD
        DT OFFSET(4) NUMBITS(2) [],
        /// Date units in BCD
        DU OFFSET(0) NUMBITS(4) []
    ],
    pub ICSR [
        /// Recalibration pending flag
        RECALPF OFFSET(16) NUMBITS(1) [],
        /// BCD update (binary mode)
        BCDU OFFSET(10) NUMBITS(3) [],
        /// Binary mode
        BIN OFFSET(8) NUMBITS(2) [
            Bcd = 0b00,
            Binary = 0b01,
            Mixed = 0b10
        ],
        /// Initialization mode
        INIT OFFSET(7) NUMBITS(1) [],
        /// Initialization flag
        INITF OFFSET(6) NUMBITS(1) [],
        /// Registers synchronization flag
        RSF OFFSET(5) NUMBITS(1) [],
        /// Initialization status flag
        INITS OFFSET(4) NUMBITS(1) [],
        /// Shift operation pending
        SHPF OFFSET(3) NUMBITS(1) [],
        /// Wakeup timer write flag
        WUTWF OFFSET(2) NUMBITS(1) []
    ],
    pub PRER [
        /// Asynchronous prescaler factor
        PREDIV_A OFFSET(16) NUMBITS(7) [],
        /// Synchronous prescaler factor
        PREDIV_S OFFSET(0) NUMBITS(15) []
    ],
    pub WUTR [
        /// Wakeup auto-reload output clear value
        WUTOCLR OFFSET(16) NUMBITS(16) [],
        /// Wakeup auto-reload value
        WUT OFFSET(0) NUMBITS(16) []
    ],
    pub CR [
        /// RTC_OUT2 output enable
        OUT2EN OFFSET(31) NUMBITS(1) [],
        /// Timestamp on internal event enable
        ITSE OFFSET(24) NUMBITS(1) [],
        /// Output selection
        OSEL OFFSET(21) NUMBITS(2) [
            Disabled = 0b00,
            AlarmA = 0b01,
            AlarmB = 0b10,
            Wakeup = 0b11
        ],
        /// Output polarity
        POL OFFSET(20) NUMBITS(1) [],
        /// Calibration output selection
        COSEL OFFSET(19) NUMBITS(1) [
            Hz512 = 0,
            Hz1 = 1
        ],
        /// Backup
        BKP OFFSET(18) NUMBITS(1) [],
        /// Subtract 1 hour (winter time change)
        SUB1H OFFSET(17) NUMBITS(1) [],
        /// Add 1 hour (summer time change)
        ADD1H OFFSET(16) NUMBITS(1) [],
        /// Timestamp interrupt enable
        TSIE OFFSET(15) NUMBITS(1) [],
        /// Wakeup timer interrupt enable
        WUTIE OFFSET(14) NUMBITS(1) [],
        /// Alarm B interrupt enable
        ALRBIE OFFSET(13) NUMBITS(1) [],
        /// Alarm A interrupt enable
        ALRAIE OFFSET(12) NUMBITS(1) [],
        /// Timestamp enable
        TSE OFFSET(11) NUMBITS(1) [],
        /// Wakeup timer enable
        WUTE OFFSET(10) NUMBITS(1) [],
        /// Alarm B enable
        ALRBE OFFSET(9) NUMBITS(1) [],
        /// Alarm A enable
        ALRAE OFFSET(8) NUMBITS(1) [],
        /// Hour format
        FMT OFFSET(6) NUMBITS(1) [
            Hour24 = 0,
            AmPm = 1
        ],
        /// Bypass the shadow registers
        BYPSHAD OFFSET(5) NUMBITS(1) [],
        /// RTC_REFIN reference clock detection enable
        REFCKON OFFSET(4) NUMBITS(1) [],
        /// Timestamp event active edge
        TSEDGE OFFSET(3) NUMBITS(1) [],
        /// Wakeup clock selection
        WUCKSEL OFFSET(0) NUMBITS(3) [
            RtcDiv16 = 0b000,
            RtcDiv8 = 0b001,
            RtcDiv4 = 0b010,
            RtcDiv2 = 0b011,
            CkSpre = 0b100,
            CkSpreWut = 0b110
        ]
    ],
    pub WPR [
        KEY OFFSET(0) NUMBITS(8) []
    ],
    pub CALR [
        /// Increase frequency by 488.5 ppm
        CALP OFFSET(15) NUMBITS(1) [],
        /// 8-second calibration cycle period
        CALW8 OFFSET(14) NUMBITS(1) [],
        /// 16-second calibration cycle period
        CALW16 OFFSET(13) NUMBITS(1) [],
        /// Calibration low-power mode
        LPCAL OFFSET(12) NUMBITS(1) [],
        /// Calibration minus
        CALM OFFSET(0) NUMBITS(9) []
    ],
    pub SHIFTR [
        /// Add one second
        ADD1S OFFSET(31) NUMBITS(1) [],
        /// Subtract a fraction of a second
        SUBFS OFFSET(0) NUMBITS(15) []
    ],
    pub ALRMR [
        /// Day mask
        MSK4 OFFSET(31) NUMBITS(1) [],
        /// Week day selection
        WDSEL OFFSET(30) NUMBITS(1) [],
        /// Date tens in BCD
        DT OFFSET(28) NUMBITS(2) [],
        /// Date units or day in BCD
        DU OFFSET(24) NUMBITS(4) [],
        /// Hours mask
        MSK3 OFFSET(23) NUMBITS(1) [],
        /// AM/PM notation
        PM OFFSET(22) NUMBITS(1) [],
        /// Hour tens in BCD
        HT OFFSET(20) NUMBITS(2) [],
        /// Hour units in BCD
        HU OFFSET(16) NUMBITS(4) [],
        /// Minutes mask
        MSK2 OFFSET(15) NUMBITS(1) [],
        /// Minute tens in BCD
        MNT OFFSET(12) NUMBITS(3) [],
        /// Minute units in BCD
        MNU OFFSET(8) NUMBITS(4) [],
        /// Seconds mask
        MSK1 OFFSET(7) NUMBITS(1) [],
        /// Second tens in BCD
        ST OFFSET(4) NUMBITS(3) [],
        /// Second units in BCD
        SU OFFSET(0) NUMBITS(4) []
    ],
    pub ALRMSSR [
        /// Clear the sub-second register on alarm match
        SSCLR OFFSET(31) NUMBITS(1) [],
        /// Mask the most significant bits starting at this bit
        MASKSS OFFSET(24) NUMBITS(6) [],
        /// Sub seconds value
        SS OFFSET(0) NUMBITS(15) []
    ],
    /// Event flags; `MISR` and `SCR` share the positions
    pub SR [
        /// SSR underflow flag
        SSRUF OFFSET(6) NUMBITS(1) [],
        /// Internal timestamp flag
        ITSF OFFSET(5) NUMBITS(1) [],
        /// Timestamp overflow flag
        TSOVF OFFSET(4) NUMBITS(1) [],
        /// Timestamp flag
        TSF OFFSET(3) NUMBITS(1) [],
        /// Wakeup timer flag
        WUTF OFFSET(2) NUMBITS(1) [],
        /// Alarm B flag
        ALRBF OFFSET(1) NUMBITS(1) [],
        /// Alarm A flag
        ALRAF OFFSET(0) NUMBITS(1) []
    ]
];

pub const RTC_BASE: StaticRef<RtcRegisters> =
    unsafe { StaticRef::new((APB1PERIPH_BASE + 0x2800) as *const RtcRegisters) };

/// Decode a two-digit BCD value. `None` if either nibble is above 9.
pub const fn bcd_to_bin(bcd: u8) -> Option<u8> {
    let (tens, units) = (bcd >> 4, bcd & 0x0F);
    if tens > 9 || units > 9 {
        return None;
    }
    Some(tens * 10 + units)
}

/// Encode a value as two BCD digits. `None` for values above 99.
pub const fn bin_to_bcd(bin: u8) -> Option<u8> {
    if bin > 99 {
        return None;
    }
    Some(((bin / 10) << 4) | (bin % 10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(RtcRegisters, cr), 0x18);
        assert_eq!(offset_of!(RtcRegisters, wpr), 0x24);
        assert_eq!(offset_of!(RtcRegisters, tstr), 0x30);
        assert_eq!(offset_of!(RtcRegisters, alrmar), 0x40);
        assert_eq!(offset_of!(RtcRegisters, sr), 0x50);
        assert_eq!(offset_of!(RtcRegisters, scr), 0x5C);
        assert_eq!(offset_of!(RtcRegisters, alrbbinr), 0x74);
        assert_eq!(size_of::<RtcRegisters>(), 0x78);
        assert_eq!(RTC_BASE.addr(), 0x4000_2800);
    }

    #[test]
    fn bcd_conversion() {
        assert_eq!(bcd_to_bin(0x59), Some(59));
        assert_eq!(bin_to_bcd(59), Some(0x59));
        assert_eq!(bin_to_bcd(0), Some(0));
        assert_eq!(bin_to_bcd(99), Some(0x99));
        assert_eq!(bin_to_bcd(31).and_then(bcd_to_bin), Some(31));
    }

    #[test]
    fn bcd_out_of_range() {
        assert_eq!(bin_to_bcd(100), None);
        assert_eq!(bin_to_bcd(u8::MAX), None);
        assert_eq!(bcd_to_bin(0x5A), None);
        assert_eq!(bcd_to_bin(0xA0), None);
        assert_eq!(bcd_to_bin(0xFF), None);
    }

    #[test]
    fn calendar_time_fields() {
        // 23:45:07
        let tr = InMemoryRegister::<u32, TR::Register>::new(0x0023_4507);
        assert_eq!(tr.read(TR::HT) * 10 + tr.read(TR::HU), 23);
        assert_eq!(tr.read(TR::MNT) * 10 + tr.read(TR::MNU), 45);
        assert_eq!(tr.read(TR::ST) * 10 + tr.read(TR::SU), 7);
    }

    #[test]
    fn alarm_every_minute() {
        let alrmar = InMemoryRegister::<u32, ALRMR::Register>::new(0);
        alrmar.write(ALRMR::MSK4::SET + ALRMR::MSK3::SET + ALRMR::MSK2::SET);
        assert_eq!(alrmar.get(), 0x8080_8000);
    }

    #[test]
    fn write_protection_keys() {
        assert_eq!(WPR_KEY1, 0xCA);
        assert_eq!(WPR_KEY2, 0x53);
        assert_eq!(WPR::KEY.mask, 0xFF);
    }
}
