// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Singleton holding every peripheral instance of the chip.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::static_ref::StaticRef;
use crate::{
    adc, aes, comp, crc, dac, dbgmcu, dma, dmamux, exti, flash, gpio, hsem, i2c, iwdg, lptim, pka,
    pwr, rcc, rng, rtc, spi, syscfg, tamp, tim1, tim16, tim2, usart, vrefbuf, wwdg,
};

static TAKEN: AtomicBool = AtomicBool::new(false);

/// One handle per peripheral instance.
///
/// Handles are `Copy`; owning the `Peripherals` value is what marks the
/// code allowed to configure the hardware.
pub struct Peripherals {
    pub adc: StaticRef<adc::AdcRegisters>,
    pub aes: StaticRef<aes::AesRegisters>,
    pub comp: StaticRef<comp::CompRegisters>,
    pub crc: StaticRef<crc::CrcRegisters>,
    pub dac: StaticRef<dac::DacRegisters>,
    pub dbgmcu: StaticRef<dbgmcu::DbgmcuRegisters>,
    pub dma1: StaticRef<dma::DmaRegisters>,
    pub dma2: StaticRef<dma::DmaRegisters>,
    pub dmamux1: StaticRef<dmamux::DmamuxRegisters>,
    pub exti: StaticRef<exti::ExtiRegisters>,
    pub flash: StaticRef<flash::FlashRegisters>,
    pub gpioa: StaticRef<gpio::GpioRegisters>,
    pub gpiob: StaticRef<gpio::GpioRegisters>,
    pub gpioc: StaticRef<gpio::GpioRegisters>,
    pub gpioh: StaticRef<gpio::GpioRegisters>,
    pub hsem: StaticRef<hsem::HsemRegisters>,
    pub i2c1: StaticRef<i2c::I2cRegisters>,
    pub i2c2: StaticRef<i2c::I2cRegisters>,
    pub i2c3: StaticRef<i2c::I2cRegisters>,
    pub iwdg: StaticRef<iwdg::IwdgRegisters>,
    pub lptim1: StaticRef<lptim::LptimRegisters>,
    pub lptim2: StaticRef<lptim::LptimRegisters>,
    pub lptim3: StaticRef<lptim::LptimRegisters>,
    pub lpuart1: StaticRef<usart::UsartRegisters>,
    pub pka: StaticRef<pka::PkaRegisters>,
    pub pwr: StaticRef<pwr::PwrRegisters>,
    pub rcc: StaticRef<rcc::RccRegisters>,
    pub rng: StaticRef<rng::RngRegisters>,
    pub rtc: StaticRef<rtc::RtcRegisters>,
    pub spi1: StaticRef<spi::SpiRegisters>,
    pub spi2: StaticRef<spi::SpiRegisters>,
    pub subghzspi: StaticRef<spi::SpiRegisters>,
    pub syscfg: StaticRef<syscfg::SyscfgRegisters>,
    pub tamp: StaticRef<tamp::TampRegisters>,
    pub tim1: StaticRef<tim1::Tim1Registers>,
    pub tim2: StaticRef<tim2::Tim2Registers>,
    pub tim16: StaticRef<tim16::Tim16Registers>,
    pub tim17: StaticRef<tim16::Tim16Registers>,
    pub usart1: StaticRef<usart::UsartRegisters>,
    pub usart2: StaticRef<usart::UsartRegisters>,
    pub vrefbuf: StaticRef<vrefbuf::VrefbufRegisters>,
    pub wwdg: StaticRef<wwdg::WwdgRegisters>,
}

impl Peripherals {
    /// Returns the peripherals the first time it is called, `None` after.
    pub fn take() -> Option<Self> {
        if TAKEN
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
        {
            Some(unsafe { Self::steal() })
        } else {
            None
        }
    }

    /// Unchecked version of [`Peripherals::take`].
    ///
    /// ## Safety
    ///
    /// The caller must make sure no other code is configuring the same
    /// peripherals through another `Peripherals` value.
    pub unsafe fn steal() -> Self {
        Peripherals {
            adc: adc::ADC_BASE,
            aes: aes::AES_BASE,
            comp: comp::COMP_BASE,
            crc: crc::CRC_BASE,
            dac: dac::DAC_BASE,
            dbgmcu: dbgmcu::DBGMCU_BASE,
            dma1: dma::DMA1_BASE,
            dma2: dma::DMA2_BASE,
            dmamux1: dmamux::DMAMUX1_BASE,
            exti: exti::EXTI_BASE,
            flash: flash::FLASH_BASE,
            gpioa: gpio::GPIOA_BASE,
            gpiob: gpio::GPIOB_BASE,
            gpioc: gpio::GPIOC_BASE,
            gpioh: gpio::GPIOH_BASE,
            hsem: hsem::HSEM_BASE,
            i2c1: i2c::I2C1_BASE,
            i2c2: i2c::I2C2_BASE,
            i2c3: i2c::I2C3_BASE,
            iwdg: iwdg::IWDG_BASE,
            lptim1: lptim::LPTIM1_BASE,
            lptim2: lptim::LPTIM2_BASE,
            lptim3: lptim::LPTIM3_BASE,
            lpuart1: usart::LPUART1_BASE,
            pka: pka::PKA_BASE,
            pwr: pwr::PWR_BASE,
            rcc: rcc::RCC_BASE,
            rng: rng::RNG_BASE,
            rtc: rtc::RTC_BASE,
            spi1: spi::SPI1_BASE,
            spi2: spi::SPI2_BASE,
            subghzspi: spi::SUBGHZSPI_BASE,
            syscfg: syscfg::SYSCFG_BASE,
            tamp: tamp::TAMP_BASE,
            tim1: tim1::TIM1_BASE,
            tim2: tim2::TIM2_BASE,
            tim16: tim16::TIM16_BASE,
            tim17: tim16::TIM17_BASE,
            usart1: usart::USART1_BASE,
            usart2: usart::USART2_BASE,
            vrefbuf: vrefbuf::VREFBUF_BASE,
            wwdg: wwdg::WWDG_BASE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_map::{peripheral_bus, Bus};

    #[test]
    fn take_succeeds_once() {
        let p = Peripherals::take();
        assert!(p.is_some());
        assert!(Peripherals::take().is_none());
        assert!(Peripherals::take().is_none());
    }

    #[test]
    fn handles_sit_on_their_bus() {
        let p = unsafe { Peripherals::steal() };
        assert_eq!(peripheral_bus(p.tim2.addr()), Some(Bus::Apb1));
        assert_eq!(peripheral_bus(p.lpuart1.addr()), Some(Bus::Apb1));
        assert_eq!(peripheral_bus(p.usart1.addr()), Some(Bus::Apb2));
        assert_eq!(peripheral_bus(p.adc.addr()), Some(Bus::Apb2));
        assert_eq!(peripheral_bus(p.dmamux1.addr()), Some(Bus::Ahb1));
        assert_eq!(peripheral_bus(p.gpioh.addr()), Some(Bus::Ahb2));
        assert_eq!(peripheral_bus(p.flash.addr()), Some(Bus::Ahb3));
        assert_eq!(peripheral_bus(p.subghzspi.addr()), Some(Bus::Apb3));
        assert_eq!(peripheral_bus(p.dbgmcu.addr()), None);
    }
}
