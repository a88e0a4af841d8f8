// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Inter-integrated circuit interfaces (I2C1, I2C2, I2C3).

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::APB1PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    pub I2cRegisters {
        /// Control register 1
        (0x000 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// Control register 2
        (0x004 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// Own address 1 register
        (0x008 => pub oar1: ReadWrite<u32, OAR1::Register>),
        /// Own address 2 register
        (0x00C => pub oar2: ReadWrite<u32, OAR2::Register>),
        /// Timing register
        (0x010 => pub timingr: ReadWrite<u32, TIMINGR::Register>),
        /// Timeout register
        (0x014 => pub timeoutr: ReadWrite<u32, TIMEOUTR::Register>),
        /// Interrupt and status register
        (0x018 => pub isr: ReadWrite<u32, ISR::Register>),
        /// Interrupt clear register
        (0x01C => pub icr: WriteOnly<u32, ICR::Register>),
        /// PEC register
        (0x020 => pub pecr: ReadOnly<u32, PECR::Register>),
        /// Receive data register
        (0x024 => pub rxdr: ReadOnly<u32, DATA::Register>),
        /// Transmit data register
        (0x028 => pub txdr: ReadWrite<u32, DATA::Register>),
        (0x02C => @END),
    }
}

register_bitfields![u32,
    pub CR1 [
        /// PEC enable
        PECEN OFFSET(23) NUMBITS(1) [],
        /// SMBus alert enable
        ALERTEN OFFSET(22) NUMBITS(1) [],
        /// SMBus device default address enable
        SMBDEN OFFSET(21) NUMBITS(1) [],
        /// SMBus host address enable
        SMBHEN OFFSET(20) NUMBITS(1) [],
        /// General call enable
        GCEN OFFSET(19) NUMBITS(1) [],
        /// Wakeup from Stop mode enable
        WUPEN OFFSET(18) NUMBITS(1) [],
        /// Clock stretching disable
        NOSTRETCH OFFSET(17) NUMBITS(1) [],
        /// Target byte control
        SBC OFFSET(16) NUMBITS(1) [],
        /// DMA reception requests enable
        RXDMAEN OFFSET(15) NUMBITS(1) [],
        /// DMA transmission requests enable
        TXDMAEN OFFSET(14) NUMBITS(1) [],
        /// Analog noise filter off
        ANFOFF OFFSET(12) NUMBITS(1) [],
        /// Digital noise filter, in I2CCLK periods
        DNF OFFSET(8) NUMBITS(4) [],
        /// Error interrupts enable
        ERRIE OFFSET(7) NUMBITS(1) [],
        /// Transfer complete interrupt enable
        TCIE OFFSET(6) NUMBITS(1) [],
        /// Stop detection interrupt enable
        STOPIE OFFSET(5) NUMBITS(1) [],
        /// Not acknowledge received interrupt enable
        NACKIE OFFSET(4) NUMBITS(1) [],
        /// Address match interrupt enable
        ADDRIE OFFSET(3) NUMBITS(1) [],
        /// RX interrupt enable
        RXIE OFFSET(2) NUMBITS(1) [],
        /// TX interrupt enable
        TXIE OFFSET(1) NUMBITS(1) [],
        /// Peripheral enable
        PE OFFSET(0) NUMBITS(1) []
    ],
    pub CR2 [
        /// Packet error checking byte
        PECBYTE OFFSET(26) NUMBITS(1) [],
        /// Automatic end mode
        AUTOEND OFFSET(25) NUMBITS(1) [],
        /// NBYTES reload mode
        RELOAD OFFSET(24) NUMBITS(1) [],
        /// Number of bytes
        NBYTES OFFSET(16) NUMBITS(8) [],
        /// NACK generation (target mode)
        NACK OFFSET(15) NUMBITS(1) [],
        /// Stop generation (controller mode)
        STOP OFFSET(14) NUMBITS(1) [],
        /// Start generation
        START OFFSET(13) NUMBITS(1) [],
        /// 10-bit address header only read direction
        HEAD10R OFFSET(12) NUMBITS(1) [],
        /// 10-bit addressing mode
        ADD10 OFFSET(11) NUMBITS(1) [],
        /// Transfer direction
        RD_WRN OFFSET(10) NUMBITS(1) [
            Write = 0,
            Read = 1
        ],
        /// Target address; 7-bit addresses go in bits [7:1]
        SADD OFFSET(0) NUMBITS(10) []
    ],
    pub OAR1 [
        /// Own address 1 enable
        OA1EN OFFSET(15) NUMBITS(1) [],
        /// Own address 1 10-bit mode
        OA1MODE OFFSET(10) NUMBITS(1) [],
        /// Interface own address 1
        OA1 OFFSET(0) NUMBITS(10) []
    ],
    pub OAR2 [
        /// Own address 2 enable
        OA2EN OFFSET(15) NUMBITS(1) [],
        /// Own address 2 masks
        OA2MSK OFFSET(8) NUMBITS(3) [],
        /// Interface address bits [7:1]
        OA2 OFFSET(1) NUMBITS(7) []
    ],
    pub TIMINGR [
        /// Timing prescaler
        PRESC OFFSET(28) NUMBITS(4) [],
        /// Data setup time
        SCLDEL OFFSET(20) NUMBITS(4) [],
        /// Data hold time
        SDADEL OFFSET(16) NUMBITS(4) [],
        /// SCL high period (controller mode)
        SCLH OFFSET(8) NUMBITS(8) [],
        /// SCL low period (controller mode)
        SCLL OFFSET(0) NUMBITS(8) []
    ],
    pub TIMEOUTR [
        /// Extended clock timeout enable
        TEXTEN OFFSET(31) NUMBITS(1) [],
        /// Bus timeout B
        TIMEOUTB OFFSET(16) NUMBITS(12) [],
        /// Clock timeout enable
        TIMOUTEN OFFSET(15) NUMBITS(1) [],
        /// Idle clock timeout detection
        TIDLE OFFSET(12) NUMBITS(1) [],
        /// Bus timeout A
        TIMEOUTA OFFSET(0) NUMBITS(12) []
    ],
    pub ISR [
        /// Address match code (target mode)
        ADDCODE OFFSET(17) NUMBITS(7) [],
        /// Transfer direction (target mode)
        DIR OFFSET(16) NUMBITS(1) [],
        /// Bus busy
        BUSY OFFSET(15) NUMBITS(1) [],
        /// SMBus alert
        ALERT OFFSET(13) NUMBITS(1) [],
        /// Timeout or tLOW detection flag
        TIMEOUT OFFSET(12) NUMBITS(1) [],
        /// PEC error in reception
        PECERR OFFSET(11) NUMBITS(1) [],
        /// Overrun/underrun (target mode)
        OVR OFFSET(10) NUMBITS(1) [],
        /// Arbitration lost
        ARLO OFFSET(9) NUMBITS(1) [],
        /// Bus error
        BERR OFFSET(8) NUMBITS(1) [],
        /// Transfer complete reload
        TCR OFFSET(7) NUMBITS(1) [],
        /// Transfer complete (controller mode)
        TC OFFSET(6) NUMBITS(1) [],
        /// Stop detection flag
        STOPF OFFSET(5) NUMBITS(1) [],
        /// Not acknowledge received flag
        NACKF OFFSET(4) NUMBITS(1) [],
        /// Address matched (target mode)
        ADDR OFFSET(3) NUMBITS(1) [],
        /// Receive data register not empty
        RXNE OFFSET(2) NUMBITS(1) [],
        /// Transmit interrupt status
        TXIS OFFSET(1) NUMBITS(1) [],
        /// Transmit data register empty
        TXE OFFSET(0) NUMBITS(1) []
    ],
    pub ICR [
        ALERTCF OFFSET(13) NUMBITS(1) [],
        TIMOUTCF OFFSET(12) NUMBITS(1) [],
        PECCF OFFSET(11) NUMBITS(1) [],
        OVRCF OFFSET(10) NUMBITS(1) [],
        ARLOCF OFFSET(9) NUMBITS(1) [],
        BERRCF OFFSET(8) NUMBITS(1) [],
        STOPCF OFFSET(5) NUMBITS(1) [],
        NACKCF OFFSET(4) NUMBITS(1) [],
        ADDRCF OFFSET(3) NUMBITS(1) []
    ],
    pub PECR [
        PEC OFFSET(0) NUMBITS(8) []
    ],
    pub DATA [
        DATA OFFSET(0) NUMBITS(8) []
    ]
];

pub const I2C1_BASE: StaticRef<I2cRegisters> =
    unsafe { StaticRef::new((APB1PERIPH_BASE + 0x5400) as *const I2cRegisters) };
pub const I2C2_BASE: StaticRef<I2cRegisters> =
    unsafe { StaticRef::new((APB1PERIPH_BASE + 0x5800) as *const I2cRegisters) };
pub const I2C3_BASE: StaticRef<I2cRegisters> =
    unsafe { StaticRef::new((APB1PERIPH_BASE + 0x5C00) as *const I2cRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn layout() {
        assert_eq!(core::mem::offset_of!(I2cRegisters, isr), 0x18);
        assert_eq!(core::mem::offset_of!(I2cRegisters, txdr), 0x28);
        assert_eq!(core::mem::size_of::<I2cRegisters>(), 0x2C);
        assert_eq!(I2C1_BASE.addr(), 0x4000_5400);
        assert_eq!(I2C2_BASE.addr(), 0x4000_5800);
        assert_eq!(I2C3_BASE.addr(), 0x4000_5C00);
    }

    #[test]
    fn seven_bit_read_transfer() {
        let cr2 = InMemoryRegister::<u32, CR2::Register>::new(0);
        cr2.write(
            CR2::SADD.val(0x48 << 1)
                + CR2::RD_WRN::Read
                + CR2::NBYTES.val(2)
                + CR2::AUTOEND::SET
                + CR2::START::SET,
        );
        assert_eq!(cr2.get(), 0x90 | (1 << 10) | (2 << 16) | (1 << 25) | (1 << 13));
    }

    #[test]
    fn timing_fields() {
        // 100 kHz at 16 MHz I2CCLK, from the reference manual timing table.
        let timingr = InMemoryRegister::<u32, TIMINGR::Register>::new(0);
        timingr.write(
            TIMINGR::PRESC.val(3)
                + TIMINGR::SCLDEL.val(4)
                + TIMINGR::SDADEL.val(2)
                + TIMINGR::SCLH.val(0x0F)
                + TIMINGR::SCLL.val(0x13),
        );
        assert_eq!(timingr.get(), 0x3042_0F13);
    }

    #[test]
    fn clear_flags_align_with_status() {
        assert_eq!(ICR::NACKCF.shift, ISR::NACKF.shift);
        assert_eq!(ICR::STOPCF.shift, ISR::STOPF.shift);
        assert_eq!(ICR::ARLOCF.shift, ISR::ARLO.shift);
    }
}
