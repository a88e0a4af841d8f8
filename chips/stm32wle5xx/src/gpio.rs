// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! General-purpose I/O ports.
//!
//! All four ports share one layout. Port A, B and C have 16 pins; port H only
//! exposes PH3 on the package.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::AHB2PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    /// General-purpose I/Os
    pub GpioRegisters {
        /// GPIO port mode register
        (0x000 => pub moder: ReadWrite<u32, MODER::Register>),
        /// GPIO port output type register
        (0x004 => pub otyper: ReadWrite<u32, OTYPER::Register>),
        /// GPIO port output speed register
        (0x008 => pub ospeedr: ReadWrite<u32, OSPEEDR::Register>),
        /// GPIO port pull-up/pull-down register
        (0x00C => pub pupdr: ReadWrite<u32, PUPDR::Register>),
        /// GPIO port input data register
        (0x010 => pub idr: ReadOnly<u32, IDR::Register>),
        /// GPIO port output data register
        (0x014 => pub odr: ReadWrite<u32, ODR::Register>),
        /// GPIO port bit set/reset register
        (0x018 => pub bsrr: WriteOnly<u32, BSRR::Register>),
        /// GPIO port configuration lock register
        (0x01C => pub lckr: ReadWrite<u32, LCKR::Register>),
        /// GPIO alternate function low register
        (0x020 => pub afrl: ReadWrite<u32, AFRL::Register>),
        /// GPIO alternate function high register
        (0x024 => pub afrh: ReadWrite<u32, AFRH::Register>),
        /// GPIO port bit reset register
        (0x028 => pub brr: WriteOnly<u32, BRR::Register>),
        (0x02C => @END),
    }
}

register_bitfields![u32,
    pub MODER [
        MODE0 OFFSET(0) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ],
        MODE1 OFFSET(2) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ],
        MODE2 OFFSET(4) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ],
        MODE3 OFFSET(6) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ],
        MODE4 OFFSET(8) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ],
        MODE5 OFFSET(10) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ],
        MODE6 OFFSET(12) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ],
        MODE7 OFFSET(14) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ],
        MODE8 OFFSET(16) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ],
        MODE9 OFFSET(18) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ],
        MODE10 OFFSET(20) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ],
        MODE11 OFFSET(22) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ],
        MODE12 OFFSET(24) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ],
        MODE13 OFFSET(26) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ],
        MODE14 OFFSET(28) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ],
        MODE15 OFFSET(30) NUMBITS(2) [
            Input = 0b00,
            Output = 0b01,
            AlternateFunction = 0b10,
            Analog = 0b11
        ]
    ],
    pub OTYPER [
        OT0 OFFSET(0) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT1 OFFSET(1) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT2 OFFSET(2) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT3 OFFSET(3) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT4 OFFSET(4) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT5 OFFSET(5) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT6 OFFSET(6) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT7 OFFSET(7) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT8 OFFSET(8) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT9 OFFSET(9) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT10 OFFSET(10) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT11 OFFSET(11) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT12 OFFSET(12) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT13 OFFSET(13) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT14 OFFSET(14) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT15 OFFSET(15) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ]
    ],
    pub OSPEEDR [
        OSPEED0 OFFSET(0) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ],
        OSPEED1 OFFSET(2) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ],
        OSPEED2 OFFSET(4) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ],
        OSPEED3 OFFSET(6) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ],
        OSPEED4 OFFSET(8) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ],
        OSPEED5 OFFSET(10) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ],
        OSPEED6 OFFSET(12) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ],
        OSPEED7 OFFSET(14) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ],
        OSPEED8 OFFSET(16) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ],
        OSPEED9 OFFSET(18) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ],
        OSPEED10 OFFSET(20) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ],
        OSPEED11 OFFSET(22) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ],
        OSPEED12 OFFSET(24) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ],
        OSPEED13 OFFSET(26) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ],
        OSPEED14 OFFSET(28) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ],
        OSPEED15 OFFSET(30) NUMBITS(2) [
            Low = 0b00,
            Medium = 0b01,
            Fast = 0b10,
            High = 0b11
        ]
    ],
    pub PUPDR [
        PUPD0 OFFSET(0) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ],
        PUPD1 OFFSET(2) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ],
        PUPD2 OFFSET(4) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ],
        PUPD3 OFFSET(6) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ],
        PUPD4 OFFSET(8) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ],
        PUPD5 OFFSET(10) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ],
        PUPD6 OFFSET(12) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ],
        PUPD7 OFFSET(14) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ],
        PUPD8 OFFSET(16) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ],
        PUPD9 OFFSET(18) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ],
        PUPD10 OFFSET(20) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ],
        PUPD11 OFFSET(22) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ],
        PUPD12 OFFSET(24) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ],
        PUPD13 OFFSET(26) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ],
        PUPD14 OFFSET(28) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ],
        PUPD15 OFFSET(30) NUMBITS(2) [
            NoPull = 0b00,
            PullUp = 0b01,
            PullDown = 0b10
        ]
    ],
    pub IDR [
        ID0 OFFSET(0) NUMBITS(1) [],
        ID1 OFFSET(1) NUMBITS(1) [],
        ID2 OFFSET(2) NUMBITS(1) [],
        ID3 OFFSET(3) NUMBITS(1) [],
        ID4 OFFSET(4) NUMBITS(1) [],
        ID5 OFFSET(5) NUMBITS(1) [],
        ID6 OFFSET(6) NUMBITS(1) [],
        ID7 OFFSET(7) NUMBITS(1) [],
        ID8 OFFSET(8) NUMBITS(1) [],
        ID9 OFFSET(9) NUMBITS(1) [],
        ID10 OFFSET(10) NUMBITS(1) [],
        ID11 OFFSET(11) NUMBITS(1) [],
        ID12 OFFSET(12) NUMBITS(1) [],
        ID13 OFFSET(13) NUMBITS(1) [],
        ID14 OFFSET(14) NUMBITS(1) [],
        ID15 OFFSET(15) NUMBITS(1) []
    ],
    pub ODR [
        OD0 OFFSET(0) NUMBITS(1) [],
        OD1 OFFSET(1) NUMBITS(1) [],
        OD2 OFFSET(2) NUMBITS(1) [],
        OD3 OFFSET(3) NUMBITS(1) [],
        OD4 OFFSET(4) NUMBITS(1) [],
        OD5 OFFSET(5) NUMBITS(1) [],
        OD6 OFFSET(6) NUMBITS(1) [],
        OD7 OFFSET(7) NUMBITS(1) [],
        OD8 OFFSET(8) NUMBITS(1) [],
        OD9 OFFSET(9) NUMBITS(1) [],
        OD10 OFFSET(10) NUMBITS(1) [],
        OD11 OFFSET(11) NUMBITS(1) [],
        OD12 OFFSET(12) NUMBITS(1) [],
        OD13 OFFSET(13) NUMBITS(1) [],
        OD14 OFFSET(14) NUMBITS(1) [],
        OD15 OFFSET(15) NUMBITS(1) []
    ],
    pub BSRR [
        BR0 OFFSET(16) NUMBITS(1) [],
        BR1 OFFSET(17) NUMBITS(1) [],
        BR2 OFFSET(18) NUMBITS(1) [],
        BR3 OFFSET(19) NUMBITS(1) [],
        BR4 OFFSET(20) NUMBITS(1) [],
        BR5 OFFSET(21) NUMBITS(1) [],
        BR6 OFFSET(22) NUMBITS(1) [],
        BR7 OFFSET(23) NUMBITS(1) [],
        BR8 OFFSET(24) NUMBITS(1) [],
        BR9 OFFSET(25) NUMBITS(1) [],
        BR10 OFFSET(26) NUMBITS(1) [],
        BR11 OFFSET(27) NUMBITS(1) [],
        BR12 OFFSET(28) NUMBITS(1) [],
        BR13 OFFSET(29) NUMBITS(1) [],
        BR14 OFFSET(30) NUMBITS(1) [],
        BR15 OFFSET(31) NUMBITS(1) [],
        BS0 OFFSET(0) NUMBITS(1) [],
        BS1 OFFSET(1) NUMBITS(1) [],
        BS2 OFFSET(2) NUMBITS(1) [],
        BS3 OFFSET(3) NUMBITS(1) [],
        BS4 OFFSET(4) NUMBITS(1) [],
        BS5 OFFSET(5) NUMBITS(1) [],
        BS6 OFFSET(6) NUMBITS(1) [],
        BS7 OFFSET(7) NUMBITS(1) [],
        BS8 OFFSET(8) NUMBITS(1) [],
        BS9 OFFSET(9) NUMBITS(1) [],
        BS10 OFFSET(10) NUMBITS(1) [],
        BS11 OFFSET(11) NUMBITS(1) [],
        BS12 OFFSET(12) NUMBITS(1) [],
        BS13 OFFSET(13) NUMBITS(1) [],
        BS14 OFFSET(14) NUMBITS(1) [],
        BS15 OFFSET(15) NUMBITS(1) []
    ],
    pub LCKR [
        /// Lock key
        LCKK OFFSET(16) NUMBITS(1) [],
        LCK0 OFFSET(0) NUMBITS(1) [],
        LCK1 OFFSET(1) NUMBITS(1) [],
        LCK2 OFFSET(2) NUMBITS(1) [],
        LCK3 OFFSET(3) NUMBITS(1) [],
        LCK4 OFFSET(4) NUMBITS(1) [],
        LCK5 OFFSET(5) NUMBITS(1) [],
        LCK6 OFFSET(6) NUMBITS(1) [],
        LCK7 OFFSET(7) NUMBITS(1) [],
        LCK8 OFFSET(8) NUMBITS(1) [],
        LCK9 OFFSET(9) NUMBITS(1) [],
        LCK10 OFFSET(10) NUMBITS(1) [],
        LCK11 OFFSET(11) NUMBITS(1) [],
        LCK12 OFFSET(12) NUMBITS(1) [],
        LCK13 OFFSET(13) NUMBITS(1) [],
        LCK14 OFFSET(14) NUMBITS(1) [],
        LCK15 OFFSET(15) NUMBITS(1) []
    ],
    pub AFRL [
        AFSEL0 OFFSET(0) NUMBITS(4) [],
        AFSEL1 OFFSET(4) NUMBITS(4) [],
        AFSEL2 OFFSET(8) NUMBITS(4) [],
        AFSEL3 OFFSET(12) NUMBITS(4) [],
        AFSEL4 OFFSET(16) NUMBITS(4) [],
        AFSEL5 OFFSET(20) NUMBITS(4) [],
        AFSEL6 OFFSET(24) NUMBITS(4) [],
        AFSEL7 OFFSET(28) NUMBITS(4) []
    ],
    pub AFRH [
        AFSEL0 OFFSET(0) NUMBITS(4) [],
        AFSEL1 OFFSET(4) NUMBITS(4) [],
        AFSEL2 OFFSET(8) NUMBITS(4) [],
        AFSEL3 OFFSET(12) NUMBITS(4) [],
        AFSEL4 OFFSET(16) NUMBITS(4) [],
        AFSEL5 OFFSET(20) NUMBITS(4) [],
        AFSEL6 OFFSET(24) NUMBITS(4) [],
        AFSEL7 OFFSET(28) NUMBITS(4) []
    ],
    pub BRR [
        BR0 OFFSET(0) NUMBITS(1) [],
        BR1 OFFSET(1) NUMBITS(1) [],
        BR2 OFFSET(2) NUMBITS(1) [],
        BR3 OFFSET(3) NUMBITS(1) [],
        BR4 OFFSET(4) NUMBITS(1) [],
        BR5 OFFSET(5) NUMBITS(1) [],
        BR6 OFFSET(6) NUMBITS(1) [],
        BR7 OFFSET(7) NUMBITS(1) [],
        BR8 OFFSET(8) NUMBITS(1) [],
        BR9 OFFSET(9) NUMBITS(1) [],
        BR10 OFFSET(10) NUMBITS(1) [],
        BR11 OFFSET(11) NUMBITS(1) [],
        BR12 OFFSET(12) NUMBITS(1) [],
        BR13 OFFSET(13) NUMBITS(1) [],
        BR14 OFFSET(14) NUMBITS(1) [],
        BR15 OFFSET(15) NUMBITS(1) []
    ]
];

pub const GPIOA_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(AHB2PERIPH_BASE as *const GpioRegisters) };
pub const GPIOB_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new((AHB2PERIPH_BASE + 0x0400) as *const GpioRegisters) };
pub const GPIOC_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new((AHB2PERIPH_BASE + 0x0800) as *const GpioRegisters) };
pub const GPIOH_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new((AHB2PERIPH_BASE + 0x1C00) as *const GpioRegisters) };

/// Alternate function numbers written to `AFSELx`.
pub mod af {
    pub const SYSTEM: u32 = 0;
    pub const TIM1_TIM2_LPTIM1: u32 = 1;
    pub const TIM1_TIM2: u32 = 2;
    pub const SPI2S2_TIM1_LPTIM3: u32 = 3;
    pub const I2C1_I2C2_I2C3: u32 = 4;
    pub const SPI1_SPI2S2: u32 = 5;
    pub const RF_BUSY_IRQ: u32 = 6;
    pub const USART1_USART2: u32 = 7;
    pub const LPUART1: u32 = 8;
    pub const COMP_DEBUG: u32 = 12;
    pub const RF_DEBUG: u32 = 13;
    pub const TIM2_TIM16_TIM17_LPTIM2: u32 = 14;
    pub const EVENTOUT: u32 = 15;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn port_bases() {
        assert_eq!(size_of::<GpioRegisters>(), 0x2C);
        assert_eq!(GPIOA_BASE.addr(), 0x4800_0000);
        assert_eq!(GPIOB_BASE.addr(), 0x4800_0400);
        assert_eq!(GPIOC_BASE.addr(), 0x4800_0800);
        assert_eq!(GPIOH_BASE.addr(), 0x4800_1C00);
    }

    #[test]
    fn mode_fields_are_two_bits_per_pin() {
        assert_eq!(MODER::MODE7.shift, 14);
        assert_eq!(MODER::MODE15.mask, 0b11);
        // PA13/PA14 reset to alternate function (SWD), the rest to analog.
        let moder = InMemoryRegister::<u32, MODER::Register>::new(0xABFF_FFFF);
        assert_eq!(
            moder.read_as_enum::<MODER::MODE13::Value>(MODER::MODE13),
            Some(MODER::MODE13::Value::AlternateFunction)
        );
        moder.modify(MODER::MODE5::Output);
        assert_eq!(moder.read(MODER::MODE5), 0b01);
    }

    #[test]
    fn bit_set_reset_halves() {
        let bsrr = InMemoryRegister::<u32, BSRR::Register>::new(0);
        bsrr.write(BSRR::BS3::SET + BSRR::BR4::SET);
        assert_eq!(bsrr.get(), (1 << 3) | (1 << 20));
    }

    #[test]
    fn alternate_function_nibbles() {
        let afrh = InMemoryRegister::<u32, AFRH::Register>::new(0);
        // PB8 (AFSEL0 of AFRH) as I2C1_SCL.
        afrh.write(AFRH::AFSEL0.val(af::I2C1_I2C2_I2C3));
        assert_eq!(afrh.get(), 4);
        assert_eq!(AFRL::AFSEL7.shift, 28);
    }
}
