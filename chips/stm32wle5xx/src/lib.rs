// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Register definitions for the STM32WLE5xx MCU family.
//!
//! Every on-chip peripheral is described as a `register_structs!` block whose
//! field offsets are checked against the reference manual (RM0461) at compile
//! time, a set of `register_bitfields!` giving the position and width of each
//! control and status field, and one `StaticRef` constant per instance at its
//! physical base address.
//!
//! Nothing in this crate touches hardware on its own. Drivers dereference the
//! `*_BASE` constants (or the handles in [`Peripherals`]) and use the
//! `tock_registers::interfaces` traits to read and write:
//!
//! ```rust,ignore
//! use tock_registers::interfaces::ReadWriteable;
//! use stm32wle5xx::rcc::{AHB2ENR, RCC_BASE};
//!
//! RCC_BASE.ahb2enr.modify(AHB2ENR::GPIOAEN::SET);
//! ```
//!
//! Part crates (for example `stm32wle5jc`) supply the memory sizes that differ
//! between package and flash variants through [`chip_specific::ChipSpecs`].

#![no_std]
#![crate_name = "stm32wle5xx"]
#![crate_type = "rlib"]
// `rcc` and `rtc` declare enough registers in `register_structs!` to need a
// deeper recursion limit than the default to fully expand.
#![recursion_limit = "256"]

#[cfg(test)]
extern crate std;

pub mod chip_specific;
pub mod memory_map;
pub mod nvic;
pub mod peripherals;
pub mod signature;

mod static_ref;
pub use crate::static_ref::StaticRef;

pub use crate::nvic::Interrupt;
pub use crate::peripherals::Peripherals;

// Peripherals
pub mod adc;
pub mod aes;
pub mod comp;
pub mod crc;
pub mod dac;
pub mod dbgmcu;
pub mod dma;
pub mod dmamux;
pub mod exti;
pub mod flash;
pub mod gpio;
pub mod hsem;
pub mod i2c;
pub mod iwdg;
pub mod lptim;
pub mod pka;
pub mod pwr;
pub mod rcc;
pub mod rng;
pub mod rtc;
pub mod spi;
pub mod syscfg;
pub mod tamp;
pub mod tim1;
pub mod tim16;
pub mod tim2;
pub mod usart;
pub mod vrefbuf;
pub mod wwdg;
