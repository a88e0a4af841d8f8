// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! STM32WLE5JC: 256 KiB flash, 64 KiB SRAM, UFQFPN48.

#![no_std]

#[cfg(test)]
extern crate std;

pub use stm32wle5xx::{
    adc, aes, comp, crc, dac, dbgmcu, dma, dmamux, exti, flash, gpio, hsem, i2c, iwdg, lptim,
    memory_map, nvic, pka, pwr, rcc, rng, rtc, signature, spi, syscfg, tamp, tim1, tim16, tim2,
    usart, vrefbuf, wwdg, Interrupt, Peripherals, StaticRef,
};

pub mod chip_specs;

pub use crate::chip_specs::Stm32wle5jcSpecs;
