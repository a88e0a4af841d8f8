// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Reset and clock control (RCC).

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::AHB3PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    /// Reset and clock control
    pub RccRegisters {
        /// Clock control register
        (0x000 => pub cr: ReadWrite<u32, CR::Register>),
        /// Internal clock sources calibration register
        (0x004 => pub icscr: ReadWrite<u32, ICSCR::Register>),
        /// Clock configuration register
        (0x008 => pub cfgr: ReadWrite<u32, CFGR::Register>),
        /// PLL configuration register
        (0x00C => pub pllcfgr: ReadWrite<u32, PLLCFGR::Register>),
        (0x010 => _reserved0),
        /// Clock interrupt enable register
        (0x018 => pub cier: ReadWrite<u32, CIER::Register>),
        /// Clock interrupt flag register
        (0x01C => pub cifr: ReadOnly<u32, CIFR::Register>),
        /// Clock interrupt clear register
        (0x020 => pub cicr: WriteOnly<u32, CICR::Register>),
        (0x024 => _reserved1),
        /// AHB1 peripheral reset register
        (0x028 => pub ahb1rstr: ReadWrite<u32, AHB1RSTR::Register>),
        /// AHB2 peripheral reset register
        (0x02C => pub ahb2rstr: ReadWrite<u32, AHB2RSTR::Register>),
        /// AHB3 peripheral reset register
        (0x030 => pub ahb3rstr: ReadWrite<u32, AHB3RSTR::Register>),
        (0x034 => _reserved2),
        /// APB1 peripheral reset register 1
        (0x038 => pub apb1rstr1: ReadWrite<u32, APB1RSTR1::Register>),
        /// APB1 peripheral reset register 2
        (0x03C => pub apb1rstr2: ReadWrite<u32, APB1RSTR2::Register>),
        /// APB2 peripheral reset register
        (0x040 => pub apb2rstr: ReadWrite<u32, APB2RSTR::Register>),
        /// APB3 peripheral reset register
        (0x044 => pub apb3rstr: ReadWrite<u32, APB3RSTR::Register>),
        /// AHB1 peripheral clock enable register
        (0x048 => pub ahb1enr: ReadWrite<u32, AHB1ENR::Register>),
        /// AHB2 peripheral clock enable register
        (0x04C => pub ahb2enr: ReadWrite<u32, AHB2ENR::Register>),
        /// AHB3 peripheral clock enable register
        (0x050 => pub ahb3enr: ReadWrite<u32, AHB3ENR::Register>),
        (0x054 => _reserved3),
        /// APB1 peripheral clock enable register 1
        (0x058 => pub apb1enr1: ReadWrite<u32, APB1ENR1::Register>),
        /// APB1 peripheral clock enable register 2
        (0x05C => pub apb1enr2: ReadWrite<u32, APB1ENR2::Register>),
        /// APB2 peripheral clock enable register
        (0x060 => pub apb2enr: ReadWrite<u32, APB2ENR::Register>),
        /// APB3 peripheral clock enable register
        (0x064 => pub apb3enr: ReadWrite<u32, APB3ENR::Register>),
        /// AHB1 peripheral clocks enable in Sleep and Stop modes register
        (0x068 => pub ahb1smenr: ReadWrite<u32, AHB1SMENR::Register>),
        /// AHB2 peripheral clocks enable in Sleep and Stop modes register
        (0x06C => pub ahb2smenr: ReadWrite<u32, AHB2SMENR::Register>),
        /// AHB3 peripheral clocks enable in Sleep and Stop modes register
        (0x070 => pub ahb3smenr: ReadWrite<u32, AHB3SMENR::Register>),
        (0x074 => _reserved4),
        /// APB1 peripheral clocks enable in Sleep and Stop modes register 1
        (0x078 => pub apb1smenr1: ReadWrite<u32, APB1SMENR1::Register>),
        /// APB1 peripheral clocks enable in Sleep and Stop modes register 2
        (0x07C => pub apb1smenr2: ReadWrite<u32, APB1SMENR2::Register>),
        /// APB2 peripheral clocks enable in Sleep and Stop modes register
        (0x080 => pub apb2smenr: ReadWrite<u32, APB2SMENR::Register>),
        /// APB3 peripheral clock enable in Sleep and Stop modes register
        (0x084 => pub apb3smenr: ReadWrite<u32, APB3SMENR::Register>),
        /// Peripherals independent clock configuration register
        (0x088 => pub ccipr: ReadWrite<u32, CCIPR::Register>),
        (0x08C => _reserved5),
        /// Backup domain control register
        (0x090 => pub bdcr: ReadWrite<u32, BDCR::Register>),
        /// Control/status register
        (0x094 => pub csr: ReadWrite<u32, CSR::Register>),
        (0x098 => _reserved6),
        /// Extended clock recovery register
        (0x108 => pub extcfgr: ReadWrite<u32, EXTCFGR::Register>),
        (0x10C => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// PLL clock ready flag
        PLLRDY OFFSET(25) NUMBITS(1) [],
        /// Main PLL enable
        PLLON OFFSET(24) NUMBITS(1) [],
        /// HSE32 VDDTCXO output on package pin PB0-VDDTCXO
        HSEBYPPWR OFFSET(21) NUMBITS(1) [],
        /// HSE32 SYSCLK prescaler
        HSEPRE OFFSET(20) NUMBITS(1) [
            Div1 = 0,
            Div2 = 1
        ],
        /// HSE32 clock security system enable
        CSSON OFFSET(19) NUMBITS(1) [],
        /// HSE32 clock ready flag
        HSERDY OFFSET(17) NUMBITS(1) [],
        /// HSE32 clock enable
        HSEON OFFSET(16) NUMBITS(1) [],
        /// HSI16 kernel clock ready flag for peripherals requests
        HSIKERDY OFFSET(12) NUMBITS(1) [],
        /// HSI16 automatic start from Stop
        HSIASFS OFFSET(11) NUMBITS(1) [],
        /// HSI16 clock ready flag
        HSIRDY OFFSET(10) NUMBITS(1) [],
        /// HSI16 always enable for peripheral kernel clocks
        HSIKERON OFFSET(9) NUMBITS(1) [],
        /// HSI16 clock enable
        HSION OFFSET(8) NUMBITS(1) [],
        /// MSI clock ranges
        MSIRANGE OFFSET(4) NUMBITS(4) [
            Range100K = 0,
            Range200K = 1,
            Range400K = 2,
            Range800K = 3,
            Range1M = 4,
            Range2M = 5,
            Range4M = 6,
            Range8M = 7,
            Range16M = 8,
            Range24M = 9,
            Range32M = 10,
            Range48M = 11
        ],
        /// MSI clock range selection
        MSIRGSEL OFFSET(3) NUMBITS(1) [
            FromCsr = 0,
            FromCr = 1
        ],
        /// MSI clock PLL-mode enable
        MSIPLLEN OFFSET(2) NUMBITS(1) [],
        /// MSI clock ready flag
        MSIRDY OFFSET(1) NUMBITS(1) [],
        /// MSI clock enable
        MSION OFFSET(0) NUMBITS(1) []
    ],
    pub ICSCR [
        /// HSI16 clock trimming
        HSITRIM OFFSET(24) NUMBITS(7) [],
        /// HSI16 clock calibration
        HSICAL OFFSET(16) NUMBITS(8) [],
        /// MSI clock trimming
        MSITRIM OFFSET(8) NUMBITS(8) [],
        /// MSI clock calibration
        MSICAL OFFSET(0) NUMBITS(8) []
    ],
    pub CFGR [
        /// Microcontroller clock output prescaler
        MCOPRE OFFSET(28) NUMBITS(3) [
            Div1 = 0,
            Div2 = 1,
            Div4 = 2,
            Div8 = 3,
            Div16 = 4
        ],
        /// Microcontroller clock output
        MCOSEL OFFSET(24) NUMBITS(4) [
            Disabled = 0b0000,
            Sysclk = 0b0001,
            Msi = 0b0010,
            Hsi16 = 0b0011,
            Hse32 = 0b0100,
            PllR = 0b0101,
            Lsi = 0b0110,
            Lse = 0b1000,
            PllP = 0b1101,
            PllQ = 0b1110
        ],
        /// PCLK2 prescaler flag
        PPRE2F OFFSET(18) NUMBITS(1) [],
        /// PCLK1 prescaler flag
        PPRE1F OFFSET(17) NUMBITS(1) [],
        /// HCLK1 prescaler flag
        HPREF OFFSET(16) NUMBITS(1) [],
        /// Wakeup from Stop and CSS backup clock selection
        STOPWUCK OFFSET(15) NUMBITS(1) [
            Msi = 0,
            Hsi16 = 1
        ],
        /// APB2 prescaler
        PPRE2 OFFSET(11) NUMBITS(3) [
            Div1 = 0b000,
            Div2 = 0b100,
            Div4 = 0b101,
            Div8 = 0b110,
            Div16 = 0b111
        ],
        /// APB1 prescaler
        PPRE1 OFFSET(8) NUMBITS(3) [
            Div1 = 0b000,
            Div2 = 0b100,
            Div4 = 0b101,
            Div8 = 0b110,
            Div16 = 0b111
        ],
        /// HCLK1 prescaler
        HPRE OFFSET(4) NUMBITS(4) [
            Div1 = 0b0000,
            Div3 = 0b0001,
            Div5 = 0b0010,
            Div6 = 0b0101,
            Div10 = 0b0110,
            Div32 = 0b0111,
            Div2 = 0b1000,
            Div4 = 0b1001,
            Div8 = 0b1010,
            Div16 = 0b1011,
            Div64 = 0b1100,
            Div128 = 0b1101,
            Div256 = 0b1110,
            Div512 = 0b1111
        ],
        /// System clock switch status
        SWS OFFSET(2) NUMBITS(2) [
            Msi = 0b00,
            Hsi16 = 0b01,
            Hse32 = 0b10,
            Pll = 0b11
        ],
        /// System clock switch
        SW OFFSET(0) NUMBITS(2) [
            Msi = 0b00,
            Hsi16 = 0b01,
            Hse32 = 0b10,
            Pll = 0b11
        ]
    ],
    pub PLLCFGR [
        /// Main PLL division factor for PLLRCLK
        PLLR OFFSET(29) NUMBITS(3) [],
        /// Main PLL PLLRCLK output enable
        PLLREN OFFSET(28) NUMBITS(1) [],
        /// Main PLL division factor for PLLQCLK
        PLLQ OFFSET(25) NUMBITS(3) [],
        /// Main PLL PLLQCLK output enable
        PLLQEN OFFSET(24) NUMBITS(1) [],
        /// Main PLL division factor for PLLPCLK
        PLLP OFFSET(17) NUMBITS(5) [],
        /// Main PLL PLLPCLK output enable
        PLLPEN OFFSET(16) NUMBITS(1) [],
        /// Main PLL multiplication factor for VCO
        PLLN OFFSET(8) NUMBITS(7) [],
        /// Division factor M for the PLL input clock
        PLLM OFFSET(4) NUMBITS(3) [],
        /// Main PLL entry clock source
        PLLSRC OFFSET(0) NUMBITS(2) [
            NoClock = 0b00,
            Msi = 0b01,
            Hsi16 = 0b10,
            Hse32 = 0b11
        ]
    ],
    pub CIER [
        /// PLL ready interrupt enable
        PLLRDYIE OFFSET(5) NUMBITS(1) [],
        /// HSE32 ready interrupt enable
        HSERDYIE OFFSET(4) NUMBITS(1) [],
        /// HSI16 ready interrupt enable
        HSIRDYIE OFFSET(3) NUMBITS(1) [],
        /// MSI ready interrupt enable
        MSIRDYIE OFFSET(2) NUMBITS(1) [],
        /// LSE ready interrupt enable
        LSERDYIE OFFSET(1) NUMBITS(1) [],
        /// LSI ready interrupt enable
        LSIRDYIE OFFSET(0) NUMBITS(1) []
    ],
    pub CIFR [
        /// LSE clock security system interrupt flag
        LSECSSF OFFSET(9) NUMBITS(1) [],
        /// HSE32 clock security system interrupt flag
        CSSF OFFSET(8) NUMBITS(1) [],
        /// PLL ready interrupt flag
        PLLRDYF OFFSET(5) NUMBITS(1) [],
        /// HSE32 ready interrupt flag
        HSERDYF OFFSET(4) NUMBITS(1) [],
        /// HSI16 ready interrupt flag
        HSIRDYF OFFSET(3) NUMBITS(1) [],
        /// MSI ready interrupt flag
        MSIRDYF OFFSET(2) NUMBITS(1) [],
        /// LSE ready interrupt flag
        LSERDYF OFFSET(1) NUMBITS(1) [],
        /// LSI ready interrupt flag
        LSIRDYF OFFSET(0) NUMBITS(1) []
    ],
    pub CICR [
        LSECSSC OFFSET(9) NUMBITS(1) [],
        CSSC OFFSET(8) NUMBITS(1) [],
        PLLRDYC OFFSET(5) NUMBITS(1) [],
        HSERDYC OFFSET(4) NUMBITS(1) [],
        HSIRDYC OFFSET(3) NUMBITS(1) [],
        MSIRDYC OFFSET(2) NUMBITS(1) [],
        LSERDYC OFFSET(1) NUMBITS(1) [],
        LSIRDYC OFFSET(0) NUMBITS(1) []
    ],
    pub AHB1RSTR [
        CRCRST OFFSET(12) NUMBITS(1) [],
        DMAMUX1RST OFFSET(2) NUMBITS(1) [],
        DMA2RST OFFSET(1) NUMBITS(1) [],
        DMA1RST OFFSET(0) NUMBITS(1) []
    ],
    pub AHB2RSTR [
        GPIOHRST OFFSET(7) NUMBITS(1) [],
        GPIOCRST OFFSET(2) NUMBITS(1) [],
        GPIOBRST OFFSET(1) NUMBITS(1) [],
        GPIOARST OFFSET(0) NUMBITS(1) []
    ],
    pub AHB3RSTR [
        FLASHRST OFFSET(25) NUMBITS(1) [],
        HSEMRST OFFSET(19) NUMBITS(1) [],
        RNGRST OFFSET(18) NUMBITS(1) [],
        AESRST OFFSET(17) NUMBITS(1) [],
        PKARST OFFSET(16) NUMBITS(1) []
    ],
    pub APB1RSTR1 [
        LPTIM1RST OFFSET(31) NUMBITS(1) [],
        DACRST OFFSET(29) NUMBITS(1) [],
        I2C3RST OFFSET(23) NUMBITS(1) [],
        I2C2RST OFFSET(22) NUMBITS(1) [],
        I2C1RST OFFSET(21) NUMBITS(1) [],
        USART2RST OFFSET(17) NUMBITS(1) [],
        SPI2RST OFFSET(14) NUMBITS(1) [],
        TIM2RST OFFSET(0) NUMBITS(1) []
    ],
    pub APB1RSTR2 [
        LPTIM3RST OFFSET(6) NUMBITS(1) [],
        LPTIM2RST OFFSET(5) NUMBITS(1) [],
        LPUART1RST OFFSET(0) NUMBITS(1) []
    ],
    pub APB2RSTR [
        TIM17RST OFFSET(18) NUMBITS(1) [],
        TIM16RST OFFSET(17) NUMBITS(1) [],
        USART1RST OFFSET(14) NUMBITS(1) [],
        SPI1RST OFFSET(12) NUMBITS(1) [],
        TIM1RST OFFSET(11) NUMBITS(1) [],
        ADCRST OFFSET(9) NUMBITS(1) []
    ],
    pub APB3RSTR [
        SUBGHZSPIRST OFFSET(0) NUMBITS(1) []
    ],
    pub AHB1ENR [
        CRCEN OFFSET(12) NUMBITS(1) [],
        DMAMUX1EN OFFSET(2) NUMBITS(1) [],
        DMA2EN OFFSET(1) NUMBITS(1) [],
        DMA1EN OFFSET(0) NUMBITS(1) []
    ],
    pub AHB2ENR [
        GPIOHEN OFFSET(7) NUMBITS(1) [],
        GPIOCEN OFFSET(2) NUMBITS(1) [],
        GPIOBEN OFFSET(1) NUMBITS(1) [],
        GPIOAEN OFFSET(0) NUMBITS(1) []
    ],
    pub AHB3ENR [
        FLASHEN OFFSET(25) NUMBITS(1) [],
        HSEMEN OFFSET(19) NUMBITS(1) [],
        RNGEN OFFSET(18) NUMBITS(1) [],
        AESEN OFFSET(17) NUMBITS(1) [],
        PKAEN OFFSET(16) NUMBITS(1) []
    ],
    pub APB1ENR1 [
        LPTIM1EN OFFSET(31) NUMBITS(1) [],
        DACEN OFFSET(29) NUMBITS(1) [],
        I2C3EN OFFSET(23) NUMBITS(1) [],
        I2C2EN OFFSET(22) NUMBITS(1) [],
        I2C1EN OFFSET(21) NUMBITS(1) [],
        USART2EN OFFSET(17) NUMBITS(1) [],
        SPI2EN OFFSET(14) NUMBITS(1) [],
        WWDGEN OFFSET(11) NUMBITS(1) [],
        RTCAPBEN OFFSET(10) NUMBITS(1) [],
        TIM2EN OFFSET(0) NUMBITS(1) []
    ],
    pub APB1ENR2 [
        LPTIM3EN OFFSET(6) NUMBITS(1) [],
        LPTIM2EN OFFSET(5) NUMBITS(1) [],
        LPUART1EN OFFSET(0) NUMBITS(1) []
    ],
    pub APB2ENR [
        TIM17EN OFFSET(18) NUMBITS(1) [],
        TIM16EN OFFSET(17) NUMBITS(1) [],
        USART1EN OFFSET(14) NUMBITS(1) [],
        SPI1EN OFFSET(12) NUMBITS(1) [],
        TIM1EN OFFSET(11) NUMBITS(1) [],
        ADCEN OFFSET(9) NUMBITS(1) []
    ],
    pub APB3ENR [
        SUBGHZSPIEN OFFSET(0) NUMBITS(1) []
    ],
    pub AHB1SMENR [
        CRCSMEN OFFSET(12) NUMBITS(1) [],
        DMAMUX1SMEN OFFSET(2) NUMBITS(1) [],
        DMA2SMEN OFFSET(1) NUMBITS(1) [],
        DMA1SMEN OFFSET(0) NUMBITS(1) []
    ],
    pub AHB2SMENR [
        GPIOHSMEN OFFSET(7) NUMBITS(1) [],
        GPIOCSMEN OFFSET(2) NUMBITS(1) [],
        GPIOBSMEN OFFSET(1) NUMBITS(1) [],
        GPIOASMEN OFFSET(0) NUMBITS(1) []
    ],
    pub AHB3SMENR [
        FLASHSMEN OFFSET(25) NUMBITS(1) [],
        SRAM2SMEN OFFSET(24) NUMBITS(1) [],
        SRAM1SMEN OFFSET(23) NUMBITS(1) [],
        RNGSMEN OFFSET(18) NUMBITS(1) [],
        AESSMEN OFFSET(17) NUMBITS(1) [],
        PKASMEN OFFSET(16) NUMBITS(1) []
    ],
    pub APB1SMENR1 [
        LPTIM1SMEN OFFSET(31) NUMBITS(1) [],
        DACSMEN OFFSET(29) NUMBITS(1) [],
        I2C3SMEN OFFSET(23) NUMBITS(1) [],
        I2C2SMEN OFFSET(22) NUMBITS(1) [],
        I2C1SMEN OFFSET(21) NUMBITS(1) [],
        USART2SMEN OFFSET(17) NUMBITS(1) [],
        SPI2SMEN OFFSET(14) NUMBITS(1) [],
        WWDGSMEN OFFSET(11) NUMBITS(1) [],
        RTCAPBSMEN OFFSET(10) NUMBITS(1) [],
        TIM2SMEN OFFSET(0) NUMBITS(1) []
    ],
    pub APB1SMENR2 [
        LPTIM3SMEN OFFSET(6) NUMBITS(1) [],
        LPTIM2SMEN OFFSET(5) NUMBITS(1) [],
        LPUART1SMEN OFFSET(0) NUMBITS(1) []
    ],
    pub APB2SMENR [
        TIM17SMEN OFFSET(18) NUMBITS(1) [],
        TIM16SMEN OFFSET(17) NUMBITS(1) [],
        USART1SMEN OFFSET(14) NUMBITS(1) [],
        SPI1SMEN OFFSET(12) NUMBITS(1) [],
        TIM1SMEN OFFSET(11) NUMBITS(1) [],
        ADCSMEN OFFSET(9) NUMBITS(1) []
    ],
    pub APB3SMENR [
        SUBGHZSPISMEN OFFSET(0) NUMBITS(1) []
    ],
    pub CCIPR [
        /// RNG clock source selection
        RNGSEL OFFSET(30) NUMBITS(2) [
            PllQ = 0b00,
            Lsi = 0b01,
            Lse = 0b10,
            Msi = 0b11
        ],
        /// ADC clock source selection
        ADCSEL OFFSET(28) NUMBITS(2) [
            NoClock = 0b00,
            Hsi16 = 0b01,
            PllP = 0b10,
            Sysclk = 0b11
        ],
        /// Low-power timer 3 clock source selection
        LPTIM3SEL OFFSET(22) NUMBITS(2) [
            Pclk = 0b00,
            Lsi = 0b01,
            Hsi16 = 0b10,
            Lse = 0b11
        ],
        /// Low-power timer 2 clock source selection
        LPTIM2SEL OFFSET(20) NUMBITS(2) [
            Pclk = 0b00,
            Lsi = 0b01,
            Hsi16 = 0b10,
            Lse = 0b11
        ],
        /// Low-power timer 1 clock source selection
        LPTIM1SEL OFFSET(18) NUMBITS(2) [
            Pclk = 0b00,
            Lsi = 0b01,
            Hsi16 = 0b10,
            Lse = 0b11
        ],
        /// I2C3 clock source selection
        I2C3SEL OFFSET(16) NUMBITS(2) [
            Pclk = 0b00,
            Sysclk = 0b01,
            Hsi16 = 0b10
        ],
        /// I2C2 clock source selection
        I2C2SEL OFFSET(14) NUMBITS(2) [
            Pclk = 0b00,
            Sysclk = 0b01,
            Hsi16 = 0b10
        ],
        /// I2C1 clock source selection
        I2C1SEL OFFSET(12) NUMBITS(2) [
            Pclk = 0b00,
            Sysclk = 0b01,
            Hsi16 = 0b10
        ],
        /// LPUART1 clock source selection
        LPUART1SEL OFFSET(10) NUMBITS(2) [
            Pclk = 0b00,
            Sysclk = 0b01,
            Hsi16 = 0b10,
            Lse = 0b11
        ],
        /// SPI2S2 I2S clock source selection
        SPI2S2SEL OFFSET(8) NUMBITS(2) [
            PllQ = 0b01,
            Hsi16 = 0b10,
            External = 0b11
        ],
        /// USART2 clock source selection
        USART2SEL OFFSET(2) NUMBITS(2) [
            Pclk = 0b00,
            Sysclk = 0b01,
            Hsi16 = 0b10,
            Lse = 0b11
        ],
        /// USART1 clock source selection
        USART1SEL OFFSET(0) NUMBITS(2) [
            Pclk = 0b00,
            Sysclk = 0b01,
            Hsi16 = 0b10,
            Lse = 0b11
        ]
    ],
    pub BDCR [
        /// Low-speed clock output selection
        LSCOSEL OFFSET(25) NUMBITS(1) [
            Lsi = 0,
            Lse = 1
        ],
        /// Low-speed clock output enable
        LSCOEN OFFSET(24) NUMBITS(1) [],
        /// Backup domain software reset
        BDRST OFFSET(16) NUMBITS(1) [],
        /// RTC clock enable
        RTCEN OFFSET(15) NUMBITS(1) [],
        /// LSE system clock ready
        LSESYSRDY OFFSET(11) NUMBITS(1) [],
        /// RTC clock source selection
        RTCSEL OFFSET(8) NUMBITS(2) [
            NoClock = 0b00,
            Lse = 0b01,
            Lsi = 0b10,
            HseDiv32 = 0b11
        ],
        /// LSE system clock enable
        LSESYSEN OFFSET(7) NUMBITS(1) [],
        /// CSS on LSE failure detection
        LSECSSD OFFSET(6) NUMBITS(1) [],
        /// CSS on LSE enable
        LSECSSON OFFSET(5) NUMBITS(1) [],
        /// LSE oscillator drive capability
        LSEDRV OFFSET(3) NUMBITS(2) [
            Low = 0b00,
            MediumLow = 0b01,
            MediumHigh = 0b10,
            High = 0b11
        ],
        /// LSE oscillator bypass
        LSEBYP OFFSET(2) NUMBITS(1) [],
        /// LSE oscillator ready
        LSERDY OFFSET(1) NUMBITS(1) [],
        /// LSE oscillator enable
        LSEON OFFSET(0) NUMBITS(1) []
    ],
    pub CSR [
        /// Low-power reset flag
        LPWRRSTF OFFSET(31) NUMBITS(1) [],
        /// Window watchdog reset flag
        WWDGRSTF OFFSET(30) NUMBITS(1) [],
        /// Independent window watchdog reset flag
        IWDGRSTF OFFSET(29) NUMBITS(1) [],
        /// Software reset flag
        SFTRSTF OFFSET(28) NUMBITS(1) [],
        /// BOR flag
        BORRSTF OFFSET(27) NUMBITS(1) [],
        /// Pin reset flag
        PINRSTF OFFSET(26) NUMBITS(1) [],
        /// Option byte loader reset flag
        OBLRSTF OFFSET(25) NUMBITS(1) [],
        /// Radio illegal access flag
        RFILARSTF OFFSET(24) NUMBITS(1) [],
        /// Remove reset flag
        RMVF OFFSET(23) NUMBITS(1) [],
        /// Radio reset
        RFRST OFFSET(15) NUMBITS(1) [],
        /// Radio in reset status flag
        RFRSTF OFFSET(14) NUMBITS(1) [],
        /// MSI clock ranges after Standby
        MSISRANGE OFFSET(8) NUMBITS(4) [
            Range1M = 4,
            Range2M = 5,
            Range4M = 6,
            Range8M = 7
        ],
        /// LSI frequency prescaler
        LSIPRE OFFSET(4) NUMBITS(1) [
            Div1 = 0,
            Div128 = 1
        ],
        /// LSI oscillator ready
        LSIRDY OFFSET(1) NUMBITS(1) [],
        /// LSI oscillator enable
        LSION OFFSET(0) NUMBITS(1) []
    ],
    pub EXTCFGR [
        /// HCLK3 shared prescaler flag
        SHDHPREF OFFSET(16) NUMBITS(1) [],
        /// HCLK3 shared prescaler (AHB3, flash and SRAM1/2)
        SHDHPRE OFFSET(0) NUMBITS(4) [
            Div1 = 0b0000,
            Div3 = 0b0001,
            Div5 = 0b0010,
            Div6 = 0b0101,
            Div10 = 0b0110,
            Div32 = 0b0111,
            Div2 = 0b1000,
            Div4 = 0b1001,
            Div8 = 0b1010,
            Div16 = 0b1011,
            Div64 = 0b1100,
            Div128 = 0b1101,
            Div256 = 0b1110,
            Div512 = 0b1111
        ]
    ]
];

pub const RCC_BASE: StaticRef<RccRegisters> =
    unsafe { StaticRef::new(AHB3PERIPH_BASE as *const RccRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(RccRegisters, cier), 0x18);
        assert_eq!(offset_of!(RccRegisters, ahb1rstr), 0x28);
        assert_eq!(offset_of!(RccRegisters, apb1rstr1), 0x38);
        assert_eq!(offset_of!(RccRegisters, ahb1enr), 0x48);
        assert_eq!(offset_of!(RccRegisters, apb1enr1), 0x58);
        assert_eq!(offset_of!(RccRegisters, apb3smenr), 0x84);
        assert_eq!(offset_of!(RccRegisters, bdcr), 0x90);
        assert_eq!(offset_of!(RccRegisters, extcfgr), 0x108);
        assert_eq!(size_of::<RccRegisters>(), 0x10C);
        assert_eq!(RCC_BASE.addr(), 0x5800_0000);
    }

    #[test]
    fn enable_bits_match_reset_bits() {
        assert_eq!(APB1ENR1::USART2EN.shift, APB1RSTR1::USART2RST.shift);
        assert_eq!(APB2ENR::SPI1EN.shift, APB2RSTR::SPI1RST.shift);
        assert_eq!(AHB3ENR::AESEN.shift, AHB3SMENR::AESSMEN.shift);
        assert_eq!(APB1ENR1::LPTIM1EN.mask << APB1ENR1::LPTIM1EN.shift, 1 << 31);
    }

    #[test]
    fn system_clock_switch() {
        let cfgr = InMemoryRegister::<u32, CFGR::Register>::new(0);
        cfgr.write(CFGR::SW::Hse32 + CFGR::PPRE1::Div2 + CFGR::HPRE::Div4);
        assert_eq!(cfgr.get(), (0b10 << 0) | (0b100 << 8) | (0b1001 << 4));
        assert_eq!(
            cfgr.read_as_enum::<CFGR::SW::Value>(CFGR::SW),
            Some(CFGR::SW::Value::Hse32)
        );
    }

    #[test]
    fn pll_configuration_fields() {
        let pllcfgr = InMemoryRegister::<u32, PLLCFGR::Register>::new(0x0000_1000);
        pllcfgr.modify(PLLCFGR::PLLSRC::Hse32 + PLLCFGR::PLLN.val(6) + PLLCFGR::PLLREN::SET);
        assert_eq!(pllcfgr.read(PLLCFGR::PLLN), 6);
        assert_eq!(pllcfgr.read(PLLCFGR::PLLSRC), 0b11);
        assert!(pllcfgr.is_set(PLLCFGR::PLLREN));
        assert!(!pllcfgr.is_set(PLLCFGR::PLLQEN));
    }

    #[test]
    fn msi_range_encoding() {
        let cr = InMemoryRegister::<u32, CR::Register>::new(0);
        cr.write(CR::MSIRANGE::Range48M + CR::MSIRGSEL::FromCr + CR::MSION::SET);
        assert_eq!(cr.get(), (11 << 4) | (1 << 3) | 1);
    }
}
