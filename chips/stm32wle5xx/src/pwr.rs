// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Power control (PWR).
//!
//! Besides low-power modes and supply monitoring, PWR owns the sub-GHz radio
//! SPI chip select (`SUBGHZSPICR.NSS`) and the radio busy/interrupt wakeup
//! sources.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::AHB3PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    /// Power control
    pub PwrRegisters {
        /// Power control register 1
        (0x000 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// Power control register 2
        (0x004 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// Power control register 3
        (0x008 => pub cr3: ReadWrite<u32, CR3::Register>),
        /// Power control register 4
        (0x00C => pub cr4: ReadWrite<u32, CR4::Register>),
        /// Power status register 1
        (0x010 => pub sr1: ReadOnly<u32, SR1::Register>),
        /// Power status register 2
        (0x014 => pub sr2: ReadOnly<u32, SR2::Register>),
        /// Power status clear register
        (0x018 => pub scr: WriteOnly<u32, SCR::Register>),
        /// Power control register 5
        (0x01C => pub cr5: ReadWrite<u32, CR5::Register>),
        /// Port A pull-up control register
        (0x020 => pub pucra: ReadWrite<u32, PORT::Register>),
        /// Port A pull-down control register
        (0x024 => pub pdcra: ReadWrite<u32, PORT::Register>),
        /// Port B pull-up control register
        (0x028 => pub pucrb: ReadWrite<u32, PORT::Register>),
        /// Port B pull-down control register
        (0x02C => pub pdcrb: ReadWrite<u32, PORT::Register>),
        /// Port C pull-up control register
        (0x030 => pub pucrc: ReadWrite<u32, PORT::Register>),
        /// Port C pull-down control register
        (0x034 => pub pdcrc: ReadWrite<u32, PORT::Register>),
        (0x038 => _reserved0),
        /// Port H pull-up control register
        (0x058 => pub pucrh: ReadWrite<u32, PORT::Register>),
        /// Port H pull-down control register
        (0x05C => pub pdcrh: ReadWrite<u32, PORT::Register>),
        (0x060 => _reserved1),
        /// Extended status and status clear register
        (0x088 => pub extscr: ReadWrite<u32, EXTSCR::Register>),
        (0x08C => _reserved2),
        /// Power SUBGHZSPI control register
        (0x090 => pub subghzspicr: ReadWrite<u32, SUBGHZSPICR::Register>),
        (0x094 => _reserved3),
        /// RSS command register
        (0x098 => pub rsscmdr: ReadWrite<u32, RSSCMDR::Register>),
        (0x09C => @END),
    }
}

register_bitfields![u32,
    pub CR1 [
        /// Low-power run
        LPR OFFSET(14) NUMBITS(1) [],
        /// Voltage scaling range selection
        VOS OFFSET(9) NUMBITS(2) [
            Range1 = 0b01,
            Range2 = 0b10
        ],
        /// Disable backup domain write protection
        DBP OFFSET(8) NUMBITS(1) [],
        /// Flash memory power down mode during LPsleep
        FPDS OFFSET(5) NUMBITS(1) [],
        /// Flash memory power down mode during LPrun
        FPDR OFFSET(4) NUMBITS(1) [],
        /// Sub-GHz radio SPI NSS source select
        SUBGHZSPINSSSEL OFFSET(3) NUMBITS(1) [
            Pwr = 0,
            Lptim3 = 1
        ],
        /// Low-power mode selection for CPU1
        LPMS OFFSET(0) NUMBITS(3) [
            Stop0 = 0b000,
            Stop1 = 0b001,
            Stop2 = 0b010,
            Standby = 0b011,
            Shutdown = 0b100
        ]
    ],
    pub CR2 [
        /// Peripheral voltage monitoring 3 enable (VDDA vs 1.62 V)
        PVME3 OFFSET(6) NUMBITS(1) [],
        /// Programmable voltage detector level selection
        PLS OFFSET(1) NUMBITS(3) [
            V2_0 = 0b000,
            V2_2 = 0b001,
            V2_4 = 0b010,
            V2_5 = 0b011,
            V2_6 = 0b100,
            V2_8 = 0b101,
            V2_9 = 0b110,
            ExternalInput = 0b111
        ],
        /// Programmable voltage detector enable
        PVDE OFFSET(0) NUMBITS(1) []
    ],
    pub CR3 [
        /// Internal wakeup line interrupt enable
        EIWUL OFFSET(15) NUMBITS(1) [],
        /// Radio IRQ[2:0] wakeup enable
        EWRFIRQ OFFSET(13) NUMBITS(1) [],
        /// Radio busy wakeup from Standby enable
        EWRFBUSY OFFSET(11) NUMBITS(1) [],
        /// Apply pull-up and pull-down configuration
        APC OFFSET(10) NUMBITS(1) [],
        /// SRAM2 retention in Standby mode
        RRS OFFSET(9) NUMBITS(1) [],
        /// PVD wakeup from Standby enable
        EWPVD OFFSET(8) NUMBITS(1) [],
        /// Ultra-low-power enable
        ULPEN OFFSET(7) NUMBITS(1) [],
        /// Enable wakeup pin WKUP3
        EWUP3 OFFSET(2) NUMBITS(1) [],
        /// Enable wakeup pin WKUP2
        EWUP2 OFFSET(1) NUMBITS(1) [],
        /// Enable wakeup pin WKUP1
        EWUP1 OFFSET(0) NUMBITS(1) []
    ],
    pub CR4 [
        /// Wakeup radio busy polarity
        WRFBUSYP OFFSET(11) NUMBITS(1) [],
        /// VBAT battery charging resistor selection
        VBRS OFFSET(9) NUMBITS(1) [
            R5k = 0,
            R1_5k = 1
        ],
        /// VBAT battery charging enable
        VBE OFFSET(8) NUMBITS(1) [],
        /// Wakeup pin WKUP3 polarity
        WP3 OFFSET(2) NUMBITS(1) [],
        /// Wakeup pin WKUP2 polarity
        WP2 OFFSET(1) NUMBITS(1) [],
        /// Wakeup pin WKUP1 polarity
        WP1 OFFSET(0) NUMBITS(1) []
    ],
    pub SR1 [
        /// Wakeup flag internal
        WUFI OFFSET(15) NUMBITS(1) [],
        /// Radio busy wakeup flag
        WRFBUSYF OFFSET(11) NUMBITS(1) [],
        /// Wakeup PVD flag
        WPVDF OFFSET(8) NUMBITS(1) [],
        /// Wakeup flag 3
        WUF3 OFFSET(2) NUMBITS(1) [],
        /// Wakeup flag 2
        WUF2 OFFSET(1) NUMBITS(1) [],
        /// Wakeup flag 1
        WUF1 OFFSET(0) NUMBITS(1) []
    ],
    pub SR2 [
        /// VDDA monitoring output
        PVMO3 OFFSET(14) NUMBITS(1) [],
        /// Programmable voltage detector output
        PVDO OFFSET(11) NUMBITS(1) [],
        /// Voltage scaling flag
        VOSF OFFSET(10) NUMBITS(1) [],
        /// Low-power regulator flag
        REGLPF OFFSET(9) NUMBITS(1) [],
        /// Low-power regulator started
        REGLPS OFFSET(8) NUMBITS(1) [],
        /// Flash memory ready
        FLASHRDY OFFSET(7) NUMBITS(1) [],
        /// Main regulator supply selection
        REGMRS OFFSET(6) NUMBITS(1) [],
        /// Radio end of life flag
        RFEOLF OFFSET(5) NUMBITS(1) [],
        /// LDO ready
        LDORDY OFFSET(4) NUMBITS(1) [],
        /// SMPS ready
        SMPSRDY OFFSET(3) NUMBITS(1) [],
        /// Radio busy masked signal status
        RFBUSYMS OFFSET(2) NUMBITS(1) [],
        /// Radio busy signal status
        RFBUSYS OFFSET(1) NUMBITS(1) []
    ],
    pub SCR [
        /// Clear wakeup radio busy flag
        CWRFBUSYF OFFSET(11) NUMBITS(1) [],
        /// Clear wakeup PVD flag
        CWPVDF OFFSET(8) NUMBITS(1) [],
        /// Clear wakeup flag 3
        CWUF3 OFFSET(2) NUMBITS(1) [],
        /// Clear wakeup flag 2
        CWUF2 OFFSET(1) NUMBITS(1) [],
        /// Clear wakeup flag 1
        CWUF1 OFFSET(0) NUMBITS(1) []
    ],
    pub CR5 [
        /// SMPS step-down converter enable
        SMPSEN OFFSET(15) NUMBITS(1) [],
        /// Radio end of life detector enable
        RFEOLEN OFFSET(14) NUMBITS(1) []
    ],
    /// Pull-up/pull-down bits, one per pin of the port
    pub PORT [
        P15 OFFSET(15) NUMBITS(1) [],
        P14 OFFSET(14) NUMBITS(1) [],
        P13 OFFSET(13) NUMBITS(1) [],
        P12 OFFSET(12) NUMBITS(1) [],
        P11 OFFSET(11) NUMBITS(1) [],
        P10 OFFSET(10) NUMBITS(1) [],
        P9 OFFSET(9) NUMBITS(1) [],
        P8 OFFSET(8) NUMBITS(1) [],
        P7 OFFSET(7) NUMBITS(1) [],
        P6 OFFSET(6) NUMBITS(1) [],
        P5 OFFSET(5) NUMBITS(1) [],
        P4 OFFSET(4) NUMBITS(1) [],
        P3 OFFSET(3) NUMBITS(1) [],
        P2 OFFSET(2) NUMBITS(1) [],
        P1 OFFSET(1) NUMBITS(1) [],
        P0 OFFSET(0) NUMBITS(1) []
    ],
    pub EXTSCR [
        /// CPU1 deepsleep mode
        C1DS OFFSET(14) NUMBITS(1) [],
        /// CPU1 Stop flag
        C1STOPF OFFSET(10) NUMBITS(1) [],
        /// CPU1 Stop2 flag
        C1STOP2F OFFSET(9) NUMBITS(1) [],
        /// CPU1 Standby flag
        C1SBF OFFSET(8) NUMBITS(1) [],
        /// Clear CPU1 Stop, Stop2 and Standby flags
        C1CSSF OFFSET(0) NUMBITS(1) []
    ],
    pub SUBGHZSPICR [
        /// Sub-GHz radio SPI NSS control
        NSS OFFSET(15) NUMBITS(1) []
    ],
    pub RSSCMDR [
        /// RSS command
        RSSCMD OFFSET(0) NUMBITS(8) []
    ]
];

pub const PWR_BASE: StaticRef<PwrRegisters> =
    unsafe { StaticRef::new((AHB3PERIPH_BASE + 0x0400) as *const PwrRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(PwrRegisters, sr2), 0x14);
        assert_eq!(offset_of!(PwrRegisters, cr5), 0x1C);
        assert_eq!(offset_of!(PwrRegisters, pdcrc), 0x34);
        assert_eq!(offset_of!(PwrRegisters, pucrh), 0x58);
        assert_eq!(offset_of!(PwrRegisters, extscr), 0x88);
        assert_eq!(offset_of!(PwrRegisters, subghzspicr), 0x90);
        assert_eq!(size_of::<PwrRegisters>(), 0x9C);
        assert_eq!(PWR_BASE.addr(), 0x5800_0400);
    }

    #[test]
    fn low_power_mode_selection() {
        let cr1 = InMemoryRegister::<u32, CR1::Register>::new(0x0000_0200);
        assert_eq!(
            cr1.read_as_enum::<CR1::VOS::Value>(CR1::VOS),
            Some(CR1::VOS::Value::Range1)
        );
        cr1.write(CR1::LPMS::Standby + CR1::DBP::SET + CR1::VOS::Range2);
        assert_eq!(cr1.read(CR1::LPMS), 0b011);
        assert_eq!(cr1.get(), 0b011 | (1 << 8) | (0b10 << 9));
    }

    #[test]
    fn radio_chip_select_is_bit_15() {
        assert_eq!(SUBGHZSPICR::NSS.shift, 15);
        assert_eq!(SUBGHZSPICR::NSS.mask, 1);
    }
}
