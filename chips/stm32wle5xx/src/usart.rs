// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Universal synchronous/asynchronous receiver transmitters (USART1,
//! USART2) and the low-power UART (LPUART1).
//!
//! LPUART1 shares the register layout but implements a subset of the
//! fields: no synchronous, smartcard, IrDA or LIN modes, no receiver
//! timeout, and a 20-bit `BRR`. Bit names follow the FIFO-enabled naming
//! where the two differ (`RXNE` is `RXFNE` with `FIFOEN` set).

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::{APB1PERIPH_BASE, APB2PERIPH_BASE};
use crate::static_ref::StaticRef;

register_structs! {
    pub UsartRegisters {
        /// Control register 1
        (0x000 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// Control register 2
        (0x004 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// Control register 3
        (0x008 => pub cr3: ReadWrite<u32, CR3::Register>),
        /// Baud rate register
        (0x00C => pub brr: ReadWrite<u32, BRR::Register>),
        /// Guard time and prescaler register
        (0x010 => pub gtpr: ReadWrite<u32, GTPR::Register>),
        /// Receiver timeout register
        (0x014 => pub rtor: ReadWrite<u32, RTOR::Register>),
        /// Request register
        (0x018 => pub rqr: WriteOnly<u32, RQR::Register>),
        /// Interrupt and status register
        (0x01C => pub isr: ReadOnly<u32, ISR::Register>),
        /// Interrupt flag clear register
        (0x020 => pub icr: WriteOnly<u32, ICR::Register>),
        /// Receive data register
        (0x024 => pub rdr: ReadOnly<u32, DATA::Register>),
        /// Transmit data register
        (0x028 => pub tdr: ReadWrite<u32, DATA::Register>),
        /// Prescaler register
        (0x02C => pub presc: ReadWrite<u32, PRESC::Register>),
        (0x030 => @END),
    }
}

register_bitfields![u32,
    pub CR1 [
        /// RXFIFO full interrupt enable
        RXFFIE OFFSET(31) NUMBITS(1) [],
        /// TXFIFO empty interrupt enable
        TXFEIE OFFSET(30) NUMBITS(1) [],
        /// FIFO mode enable
        FIFOEN OFFSET(29) NUMBITS(1) [],
        /// Word length bit 1
        M1 OFFSET(28) NUMBITS(1) [],
        /// End of block interrupt enable
        EOBIE OFFSET(27) NUMBITS(1) [],
        /// Receiver timeout interrupt enable
        RTOIE OFFSET(26) NUMBITS(1) [],
        /// Driver enable assertion time
        DEAT OFFSET(21) NUMBITS(5) [],
        /// Driver enable deassertion time
        DEDT OFFSET(16) NUMBITS(5) [],
        /// Oversampling mode
        OVER8 OFFSET(15) NUMBITS(1) [
            Oversampling16 = 0,
            Oversampling8 = 1
        ],
        /// Character match interrupt enable
        CMIE OFFSET(14) NUMBITS(1) [],
        /// Mute mode enable
        MME OFFSET(13) NUMBITS(1) [],
        /// Word length bit 0
        M0 OFFSET(12) NUMBITS(1) [],
        /// Receiver wakeup method
        WAKE OFFSET(11) NUMBITS(1) [
            IdleLine = 0,
            AddressMark = 1
        ],
        /// Parity control enable
        PCE OFFSET(10) NUMBITS(1) [],
        /// Parity selection
        PS OFFSET(9) NUMBITS(1) [
            Even = 0,
            Odd = 1
        ],
        /// PE interrupt enable
        PEIE OFFSET(8) NUMBITS(1) [],
        /// TXFIFO not full / TX empty interrupt enable
        TXFNFIE OFFSET(7) NUMBITS(1) [],
        /// Transmission complete interrupt enable
        TCIE OFFSET(6) NUMBITS(1) [],
        /// RXFIFO not empty / RX not empty interrupt enable
        RXFNEIE OFFSET(5) NUMBITS(1) [],
        /// IDLE interrupt enable
        IDLEIE OFFSET(4) NUMBITS(1) [],
        /// Transmitter enable
        TE OFFSET(3) NUMBITS(1) [],
        /// Receiver enable
        RE OFFSET(2) NUMBITS(1) [],
        /// Enable in low-power mode
        UESM OFFSET(1) NUMBITS(1) [],
        /// Enable
        UE OFFSET(0) NUMBITS(1) []
    ],
    pub CR2 [
        /// Address of the USART node
        ADD OFFSET(24) NUMBITS(8) [],
        /// Receiver timeout enable
        RTOEN OFFSET(23) NUMBITS(1) [],
        /// Auto baud rate mode
        ABRMOD OFFSET(21) NUMBITS(2) [],
        /// Auto baud rate enable
        ABREN OFFSET(20) NUMBITS(1) [],
        /// Most significant bit first
        MSBFIRST OFFSET(19) NUMBITS(1) [],
        /// Binary data inversion
        DATAINV OFFSET(18) NUMBITS(1) [],
        /// TX pin active level inversion
        TXINV OFFSET(17) NUMBITS(1) [],
        /// RX pin active level inversion
        RXINV OFFSET(16) NUMBITS(1) [],
        /// Swap TX/RX pins
        SWAP OFFSET(15) NUMBITS(1) [],
        /// LIN mode enable
        LINEN OFFSET(14) NUMBITS(1) [],
        /// Stop bits
        STOP OFFSET(12) NUMBITS(2) [
            Stop1 = 0b00,
            Stop0_5 = 0b01,
            Stop2 = 0b10,
            Stop1_5 = 0b11
        ],
        /// Clock enable
        CLKEN OFFSET(11) NUMBITS(1) [],
        /// Clock polarity
        CPOL OFFSET(10) NUMBITS(1) [],
        /// Clock phase
        CPHA OFFSET(9) NUMBITS(1) [],
        /// Last bit clock pulse
        LBCL OFFSET(8) NUMBITS(1) [],
        /// LIN break detection interrupt enable
        LBDIE OFFSET(6) NUMBITS(1) [],
        /// LIN break detection length
        LBDL OFFSET(5) NUMBITS(1) [],
        /// 7-bit address detection
        ADDM7 OFFSET(4) NUMBITS(1) [],
        /// NSS pin ignored in target mode
        DIS_NSS OFFSET(3) NUMBITS(1) [],
        /// Synchronous target mode enable
        SLVEN OFFSET(0) NUMBITS(1) []
    ],
    pub CR3 [
        /// TXFIFO threshold configuration
        TXFTCFG OFFSET(29) NUMBITS(3) [
            Eighth = 0b000,
            Quarter = 0b001,
            Half = 0b010,
            ThreeQuarters = 0b011,
            SevenEighths = 0b100,
            Full = 0b101
        ],
        /// RXFIFO threshold interrupt enable
        RXFTIE OFFSET(28) NUMBITS(1) [],
        /// RXFIFO threshold configuration
        RXFTCFG OFFSET(25) NUMBITS(3) [
            Eighth = 0b000,
            Quarter = 0b001,
            Half = 0b010,
            ThreeQuarters = 0b011,
            SevenEighths = 0b100,
            Full = 0b101
        ],
        /// Transmission complete before guard time interrupt enable
        TCBGTIE OFFSET(24) NUMBITS(1) [],
        /// TXFIFO threshold interrupt enable
        TXFTIE OFFSET(23) NUMBITS(1) [],
        /// Wakeup from low-power mode interrupt enable
        WUFIE OFFSET(22) NUMBITS(1) [],
        /// Wakeup from low-power mode interrupt flag selection
        WUS OFFSET(20) NUMBITS(2) [
            AddressMatch = 0b00,
            StartBit = 0b10,
            RxneOrRxfne = 0b11
        ],
        /// Smartcard auto-retry count
        SCARCNT OFFSET(17) NUMBITS(3) [],
        /// Driver enable polarity selection
        DEP OFFSET(15) NUMBITS(1) [],
        /// Driver enable mode
        DEM OFFSET(14) NUMBITS(1) [],
        /// DMA disable on reception error
        DDRE OFFSET(13) NUMBITS(1) [],
        /// Overrun disable
        OVRDIS OFFSET(12) NUMBITS(1) [],
        /// One sample bit method enable
        ONEBIT OFFSET(11) NUMBITS(1) [],
        /// CTS interrupt enable
        CTSIE OFFSET(10) NUMBITS(1) [],
        /// CTS enable
        CTSE OFFSET(9) NUMBITS(1) [],
        /// RTS enable
        RTSE OFFSET(8) NUMBITS(1) [],
        /// DMA enable transmitter
        DMAT OFFSET(7) NUMBITS(1) [],
        /// DMA enable receiver
        DMAR OFFSET(6) NUMBITS(1) [],
        /// Smartcard mode enable
        SCEN OFFSET(5) NUMBITS(1) [],
        /// Smartcard NACK enable
        NACK OFFSET(4) NUMBITS(1) [],
        /// Half-duplex selection
        HDSEL OFFSET(3) NUMBITS(1) [],
        /// IrDA low-power
        IRLP OFFSET(2) NUMBITS(1) [],
        /// IrDA mode enable
        IREN OFFSET(1) NUMBITS(1) [],
        /// Error interrupt enable
        EIE OFFSET(0) NUMBITS(1) []
    ],
    /// 16 bits on USART, 20 bits on LPUART
    pub BRR [
        BRR OFFSET(0) NUMBITS(20) []
    ],
    pub GTPR [
        /// Guard time value
        GT OFFSET(8) NUMBITS(8) [],
        /// Prescaler value
        PSC OFFSET(0) NUMBITS(8) []
    ],
    pub RTOR [
        /// Block length
        BLEN OFFSET(24) NUMBITS(8) [],
        /// Receiver timeout value
        RTO OFFSET(0) NUMBITS(24) []
    ],
    pub RQR [
        /// Transmit data flush request
        TXFRQ OFFSET(4) NUMBITS(1) [],
        /// Receive data flush request
        RXFRQ OFFSET(3) NUMBITS(1) [],
        /// Mute mode request
        MMRQ OFFSET(2) NUMBITS(1) [],
        /// Send break request
        SBKRQ OFFSET(1) NUMBITS(1) [],
        /// Auto baud rate request
        ABRRQ OFFSET(0) NUMBITS(1) []
    ],
    pub ISR [
        /// TXFIFO threshold flag
        TXFT OFFSET(27) NUMBITS(1) [],
        /// RXFIFO threshold flag
        RXFT OFFSET(26) NUMBITS(1) [],
        /// Transmission complete before guard time flag
        TCBGT OFFSET(25) NUMBITS(1) [],
        /// RXFIFO full
        RXFF OFFSET(24) NUMBITS(1) [],
        /// TXFIFO empty
        TXFE OFFSET(23) NUMBITS(1) [],
        /// Receive enable acknowledge flag
        REACK OFFSET(22) NUMBITS(1) [],
        /// Transmit enable acknowledge flag
        TEACK OFFSET(21) NUMBITS(1) [],
        /// Wakeup from low-power mode flag
        WUF OFFSET(20) NUMBITS(1) [],
        /// Receiver wakeup from mute mode
        RWU OFFSET(19) NUMBITS(1) [],
        /// Send break flag
        SBKF OFFSET(18) NUMBITS(1) [],
        /// Character match flag
        CMF OFFSET(17) NUMBITS(1) [],
        /// Busy flag
        BUSY OFFSET(16) NUMBITS(1) [],
        /// Auto baud rate flag
        ABRF OFFSET(15) NUMBITS(1) [],
        /// Auto baud rate error
        ABRE OFFSET(14) NUMBITS(1) [],
        /// SPI target underrun error flag
        UDR OFFSET(13) NUMBITS(1) [],
        /// End of block flag
        EOBF OFFSET(12) NUMBITS(1) [],
        /// Receiver timeout
        RTOF OFFSET(11) NUMBITS(1) [],
        /// CTS flag
        CTS OFFSET(10) NUMBITS(1) [],
        /// CTS interrupt flag
        CTSIF OFFSET(9) NUMBITS(1) [],
        /// LIN break detection flag
        LBDF OFFSET(8) NUMBITS(1) [],
        /// TXFIFO not full / transmit data register empty
        TXFNF OFFSET(7) NUMBITS(1) [],
        /// Transmission complete
        TC OFFSET(6) NUMBITS(1) [],
        /// RXFIFO not empty / read data register not empty
        RXFNE OFFSET(5) NUMBITS(1) [],
        /// Idle line detected
        IDLE OFFSET(4) NUMBITS(1) [],
        /// Overrun error
        ORE OFFSET(3) NUMBITS(1) [],
        /// Noise detection flag
        NE OFFSET(2) NUMBITS(1) [],
        /// Framing error
        FE OFFSET(1) NUMBITS(1) [],
        /// Parity error
        PE OFFSET(0) NUMBITS(1) []
    ],
    pub ICR [
        WUCF OFFSET(20) NUMBITS(1) [],
        CMCF OFFSET(17) NUMBITS(1) [],
        UDRCF OFFSET(13) NUMBITS(1) [],
        EOBCF OFFSET(12) NUMBITS(1) [],
        RTOCF OFFSET(11) NUMBITS(1) [],
        CTSCF OFFSET(9) NUMBITS(1) [],
        LBDCF OFFSET(8) NUMBITS(1) [],
        TCBGTCF OFFSET(7) NUMBITS(1) [],
        TCCF OFFSET(6) NUMBITS(1) [],
        TXFECF OFFSET(5) NUMBITS(1) [],
        IDLECF OFFSET(4) NUMBITS(1) [],
        ORECF OFFSET(3) NUMBITS(1) [],
        NECF OFFSET(2) NUMBITS(1) [],
        FECF OFFSET(1) NUMBITS(1) [],
        PECF OFFSET(0) NUMBITS(1) []
    ],
    pub DATA [
        DATA OFFSET(0) NUMBITS(9) []
    ],
    pub PRESC [
        /// Clock prescaler
        PRESCALER OFFSET(0) NUMBITS(4) [
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

pub const USART1_BASE: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new((APB2PERIPH_BASE + 0x3800) as *const UsartRegisters) };
pub const USART2_BASE: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new((APB1PERIPH_BASE + 0x4400) as *const UsartRegisters) };
pub const LPUART1_BASE: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new((APB1PERIPH_BASE + 0x8000) as *const UsartRegisters) };

/// Smallest `USARTDIV` a USART accepts.
pub const USART_BRR_MIN: u32 = 16;
/// Largest `USARTDIV` a USART accepts (`BRR` is 16 bits wide on USART1/2).
pub const USART_BRR_MAX: u32 = 0xFFFF;
/// Valid `BRR` range of LPUART1.
pub const LPUART_BRR_MIN: u32 = 0x300;
pub const LPUART_BRR_MAX: u32 = 0xF_FFFF;

/// Rounded `clock / baud`, `None` when `baud` is zero or the result is
/// outside `min..=max`.
const fn divide_checked(clock: u64, baud: u32, min: u32, max: u32) -> Option<u32> {
    if baud == 0 {
        return None;
    }
    let div = (clock + baud as u64 / 2) / baud as u64;
    if div < min as u64 || div > max as u64 {
        None
    } else {
        Some(div as u32)
    }
}

/// `BRR` value for a USART with 16x oversampling.
pub const fn usart_brr(kernel_clock_hz: u32, baud: u32) -> Option<u32> {
    divide_checked(kernel_clock_hz as u64, baud, USART_BRR_MIN, USART_BRR_MAX)
}

/// `BRR` value for a USART with 8x oversampling: the low nibble holds
/// `USARTDIV[3:0] >> 1`.
pub const fn usart_brr_over8(kernel_clock_hz: u32, baud: u32) -> Option<u32> {
    match divide_checked(
        2 * kernel_clock_hz as u64,
        baud,
        USART_BRR_MIN,
        USART_BRR_MAX,
    ) {
        Some(div) => Some((div & !0xF) | ((div & 0xF) >> 1)),
        None => None,
    }
}

/// `BRR` value for LPUART1.
pub const fn lpuart_brr(kernel_clock_hz: u32, baud: u32) -> Option<u32> {
    divide_checked(
        256 * kernel_clock_hz as u64,
        baud,
        LPUART_BRR_MIN,
        LPUART_BRR_MAX,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(UsartRegisters, isr), 0x1C);
        assert_eq!(offset_of!(UsartRegisters, rdr), 0x24);
        assert_eq!(offset_of!(UsartRegisters, presc), 0x2C);
        assert_eq!(size_of::<UsartRegisters>(), 0x30);
    }

    #[test]
    fn instance_bases() {
        assert_eq!(USART1_BASE.addr(), 0x4001_3800);
        assert_eq!(USART2_BASE.addr(), 0x4000_4400);
        assert_eq!(LPUART1_BASE.addr(), 0x4000_8000);
    }

    #[test]
    fn baud_rate_divisors() {
        assert_eq!(usart_brr(48_000_000, 115_200), Some(417));
        assert_eq!(usart_brr(16_000_000, 9_600), Some(1667));
        // USARTDIV = 833 = 0x341 -> BRR = 0x340 | (0x1 >> 1)
        assert_eq!(usart_brr_over8(48_000_000, 115_200), Some(0x340));
        assert_eq!(lpuart_brr(32_768, 9_600), Some(874));
        assert!(lpuart_brr(48_000_000, 115_200).is_some_and(|brr| brr <= BRR::BRR.mask));
    }

    #[test]
    fn zero_baud_has_no_divisor() {
        assert_eq!(usart_brr(16_000_000, 0), None);
        assert_eq!(usart_brr_over8(16_000_000, 0), None);
        assert_eq!(lpuart_brr(16_000_000, 0), None);
    }

    #[test]
    fn usart_divisor_limits() {
        // Baud equal to clock / 16 is the fastest rate.
        assert_eq!(usart_brr(16_000_000, 1_000_000), Some(USART_BRR_MIN));
        assert_eq!(usart_brr(16_000_000, 2_000_000), None);
        assert_eq!(usart_brr(48_000_000, 300), None);
        assert_eq!(usart_brr(u32::MAX, u32::MAX / 16), Some(USART_BRR_MIN));
        assert_eq!(usart_brr_over8(16_000_000, 2_000_000), Some(USART_BRR_MIN));
        assert_eq!(usart_brr_over8(16_000_000, 4_000_000), None);
    }

    #[test]
    fn lpuart_divisor_limits() {
        // 256 * 48 MHz / 1 does not fit the 20-bit register.
        assert_eq!(lpuart_brr(48_000_000, 1), None);
        assert_eq!(lpuart_brr(32_768, 32_768), None);
        assert_eq!(lpuart_brr(3_000, 1_000), Some(LPUART_BRR_MIN));
        assert_eq!(lpuart_brr(4_096, 1), None);
        assert_eq!(lpuart_brr(4_095, 1), Some(0xF_FF00));
    }

    #[test]
    fn eight_n_one() {
        let cr1 = InMemoryRegister::<u32, CR1::Register>::new(0);
        cr1.write(CR1::UE::SET + CR1::TE::SET + CR1::RE::SET + CR1::FIFOEN::SET);
        assert_eq!(cr1.get(), 1 | (1 << 3) | (1 << 2) | (1 << 29));
        assert!(!cr1.is_set(CR1::M0) && !cr1.is_set(CR1::M1));
    }

    #[test]
    fn clear_flags_align_with_status() {
        assert_eq!(ICR::ORECF.shift, ISR::ORE.shift);
        assert_eq!(ICR::TCCF.shift, ISR::TC.shift);
        assert_eq!(ICR::WUCF.shift, ISR::WUF.shift);
    }
}
