// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Device interrupt lines and Cortex-M4 core configuration.

use core::fmt;

/// Number of priority bits implemented in the NVIC.
pub const NVIC_PRIO_BITS: u8 = 4;
/// The core includes the ARMv7-M memory protection unit.
pub const MPU_PRESENT: bool = true;
/// The STM32WL Cortex-M4 is built without the floating point unit.
pub const FPU_PRESENT: bool = false;
/// SysTick is the standard ARM implementation.
pub const VENDOR_SYSTICK_CONFIG: bool = false;

/// Number of device interrupt vectors following the 16 system exceptions.
pub const NUM_INTERRUPTS: u16 = 62;

/// Position of each peripheral interrupt in the vector table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum Interrupt {
    WWDG = 0,
    PVD_PVM = 1,
    TAMP_STAMP_LSECSS_SSRU = 2,
    RTC_WKUP = 3,
    FLASH = 4,
    RCC = 5,
    EXTI0 = 6,
    EXTI1 = 7,
    EXTI2 = 8,
    EXTI3 = 9,
    EXTI4 = 10,
    DMA1_CH1 = 11,
    DMA1_CH2 = 12,
    DMA1_CH3 = 13,
    DMA1_CH4 = 14,
    DMA1_CH5 = 15,
    DMA1_CH6 = 16,
    DMA1_CH7 = 17,
    ADC = 18,
    DAC = 19,
    // 20 reserved
    COMP = 21,
    EXTI9_5 = 22,
    TIM1_BRK = 23,
    TIM1_UP = 24,
    TIM1_TRG_COM = 25,
    TIM1_CC = 26,
    TIM2 = 27,
    TIM16 = 28,
    TIM17 = 29,
    I2C1_EV = 30,
    I2C1_ER = 31,
    I2C2_EV = 32,
    I2C2_ER = 33,
    SPI1 = 34,
    SPI2S2 = 35,
    USART1 = 36,
    USART2 = 37,
    LPUART1 = 38,
    LPTIM1 = 39,
    LPTIM2 = 40,
    EXTI15_10 = 41,
    RTC_ALARM = 42,
    LPTIM3 = 43,
    SUBGHZ_SPI = 44,
    // 45, 46 reserved
    HSEM = 47,
    I2C3_EV = 48,
    I2C3_ER = 49,
    SUBGHZ_RADIO = 50,
    AES = 51,
    RNG = 52,
    PKA = 53,
    DMA2_CH1 = 54,
    DMA2_CH2 = 55,
    DMA2_CH3 = 56,
    DMA2_CH4 = 57,
    DMA2_CH5 = 58,
    DMA2_CH6 = 59,
    DMA2_CH7 = 60,
    DMAMUX1_OVR = 61,
}

/// Every line, in vector order.
pub const INTERRUPTS: [Interrupt; 59] = {
    use Interrupt::*;
    [
        WWDG,
        PVD_PVM,
        TAMP_STAMP_LSECSS_SSRU,
        RTC_WKUP,
        FLASH,
        RCC,
        EXTI0,
        EXTI1,
        EXTI2,
        EXTI3,
        EXTI4,
        DMA1_CH1,
        DMA1_CH2,
        DMA1_CH3,
        DMA1_CH4,
        DMA1_CH5,
        DMA1_CH6,
        DMA1_CH7,
        ADC,
        DAC,
        COMP,
        EXTI9_5,
        TIM1_BRK,
        TIM1_UP,
        TIM1_TRG_COM,
        TIM1_CC,
        TIM2,
        TIM16,
        TIM17,
        I2C1_EV,
        I2C1_ER,
        I2C2_EV,
        I2C2_ER,
        SPI1,
        SPI2S2,
        USART1,
        USART2,
        LPUART1,
        LPTIM1,
        LPTIM2,
        EXTI15_10,
        RTC_ALARM,
        LPTIM3,
        SUBGHZ_SPI,
        HSEM,
        I2C3_EV,
        I2C3_ER,
        SUBGHZ_RADIO,
        AES,
        RNG,
        PKA,
        DMA2_CH1,
        DMA2_CH2,
        DMA2_CH3,
        DMA2_CH4,
        DMA2_CH5,
        DMA2_CH6,
        DMA2_CH7,
        DMAMUX1_OVR,
    ]
};

impl Interrupt {
    /// Vector number, counted from the first device interrupt.
    #[inline]
    pub const fn number(self) -> u16 {
        self as u16
    }
}

/// Returned when a vector number is reserved or past the end of the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidInterrupt(pub u16);

impl fmt::Display for InvalidInterrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no STM32WLE5 interrupt at vector {}", self.0)
    }
}

impl TryFrom<u16> for Interrupt {
    type Error = InvalidInterrupt;

    fn try_from(number: u16) -> Result<Self, Self::Error> {
        INTERRUPTS
            .iter()
            .copied()
            .find(|irq| irq.number() == number)
            .ok_or(InvalidInterrupt(number))
    }
}

// SAFETY: every discriminant is a valid device vector below `NUM_INTERRUPTS`.
unsafe impl cortex_m::interrupt::InterruptNumber for Interrupt {
    #[inline(always)]
    fn number(self) -> u16 {
        self as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_in_range() {
        for pair in INTERRUPTS.windows(2) {
            assert!(pair[0].number() < pair[1].number());
        }
        assert!(INTERRUPTS.iter().all(|irq| irq.number() < NUM_INTERRUPTS));
    }

    #[test]
    fn round_trips_known_lines() {
        assert_eq!(Interrupt::try_from(0u16), Ok(Interrupt::WWDG));
        assert_eq!(Interrupt::try_from(50u16), Ok(Interrupt::SUBGHZ_RADIO));
        assert_eq!(Interrupt::try_from(61u16), Ok(Interrupt::DMAMUX1_OVR));
        assert_eq!(Interrupt::USART2.number(), 37);
    }

    #[test]
    fn rejects_reserved_and_out_of_range() {
        assert_eq!(Interrupt::try_from(20u16), Err(InvalidInterrupt(20)));
        assert_eq!(Interrupt::try_from(45u16), Err(InvalidInterrupt(45)));
        assert_eq!(Interrupt::try_from(46u16), Err(InvalidInterrupt(46)));
        assert_eq!(Interrupt::try_from(62u16), Err(InvalidInterrupt(62)));
    }

    #[test]
    fn cortex_m_number_matches() {
        use cortex_m::interrupt::InterruptNumber;
        assert_eq!(InterruptNumber::number(Interrupt::AES), 51);
    }
}
