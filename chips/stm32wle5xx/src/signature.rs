// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Device electronic signature and factory calibration data.
//!
//! These words are programmed by ST into the engineering area of system
//! flash. The readers below are `unsafe` because they dereference fixed
//! addresses that only exist on the target.

use core::fmt;
use core::ptr;

use tock_registers::interfaces::Readable;
use tock_registers::LocalRegisterCopy;

use crate::dbgmcu::IDCODE;

/// 96-bit unique device identifier, three words.
pub const UID96_ADDR: usize = 0x1FFF_7590;
/// 64-bit unique device identifier (IEEE EUI-64), two words.
pub const UID64_ADDR: usize = 0x1FFF_7580;
/// Flash memory size in KiB, low half-word.
pub const FLASH_SIZE_ADDR: usize = 0x1FFF_75E0;
/// Package data register.
pub const PACKAGE_ADDR: usize = 0x1FFF_7500;

/// Temperature sensor raw value at [`TS_CAL1_TEMP`], VDDA = 3.3 V.
pub const TS_CAL1_ADDR: usize = 0x1FFF_75A8;
/// Temperature sensor raw value at [`TS_CAL2_TEMP`], VDDA = 3.3 V.
pub const TS_CAL2_ADDR: usize = 0x1FFF_75C8;
/// Internal reference voltage raw value, VDDA = 3.3 V.
pub const VREFINT_CAL_ADDR: usize = 0x1FFF_75AA;

pub const TS_CAL1_TEMP: i32 = 30;
pub const TS_CAL2_TEMP: i32 = 130;
/// VDDA during factory calibration, in millivolts.
pub const VDDA_CALIB_MV: u32 = 3300;

/// `DBGMCU_IDCODE.DEV_ID` of the STM32WL family.
pub const DEV_ID: u16 = 0x497;

/// Reads the 96-bit unique ID, lowest word first.
///
/// ## Safety
///
/// Only valid on the target, where the engineering area is mapped.
pub unsafe fn read_uid96() -> [u32; 3] {
    let base = UID96_ADDR as *const u32;
    [
        ptr::read_volatile(base),
        ptr::read_volatile(base.add(1)),
        ptr::read_volatile(base.add(2)),
    ]
}

/// Reads the 64-bit unique ID.
///
/// ## Safety
///
/// Only valid on the target, where the engineering area is mapped.
pub unsafe fn read_uid64() -> u64 {
    let base = UID64_ADDR as *const u32;
    let devnum = ptr::read_volatile(base);
    let company_and_device = ptr::read_volatile(base.add(1));
    Uid64::from_words(devnum, company_and_device).0
}

/// Reads the flash size, in KiB.
///
/// ## Safety
///
/// Only valid on the target, where the engineering area is mapped.
pub unsafe fn read_flash_size_kib() -> u16 {
    (ptr::read_volatile(FLASH_SIZE_ADDR as *const u32) & 0xFFFF) as u16
}

/// Reads and decodes the package field.
///
/// ## Safety
///
/// Only valid on the target, where the engineering area is mapped.
pub unsafe fn read_package() -> Result<Package, InvalidPackage> {
    Package::try_from(ptr::read_volatile(PACKAGE_ADDR as *const u32))
}

/// Reads the temperature sensor and VREFINT calibration values.
///
/// ## Safety
///
/// Only valid on the target, where the engineering area is mapped.
pub unsafe fn read_calibration() -> Calibration {
    Calibration {
        ts_cal1: ptr::read_volatile(TS_CAL1_ADDR as *const u16),
        ts_cal2: ptr::read_volatile(TS_CAL2_ADDR as *const u16),
        vrefint_cal: ptr::read_volatile(VREFINT_CAL_ADDR as *const u16),
    }
}

/// 64-bit unique ID.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Uid64(pub u64);

impl Uid64 {
    /// Combines the two words as stored: `DEVNUM` first, then the company
    /// and device ID word.
    pub const fn from_words(devnum: u32, company_and_device: u32) -> Uid64 {
        Uid64(((company_and_device as u64) << 32) | devnum as u64)
    }

    pub const fn devnum(&self) -> u32 {
        self.0 as u32
    }

    /// ST company ID (`0x0080E1`).
    pub const fn company_id(&self) -> u32 {
        (self.0 >> 40) as u32
    }

    pub const fn device_id(&self) -> u8 {
        (self.0 >> 32) as u8
    }
}

/// Package the die is bonded in.
///
/// Discriminants are the `PKG[4:0]` codes of the RM0461 package data
/// register (`PKG`, at [`PACKAGE_ADDR`] in the device electronic signature):
///
/// | `PKG[4:0]` | Package  |
/// |------------|----------|
/// | `00000`    | UFBGA73  |
/// | `01010`    | UFQFPN48 |
/// | `10001`    | WLCSP59  |
///
/// All other codes are reserved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Package {
    Ufbga73 = 0b00000,
    Ufqfpn48 = 0b01010,
    Wlcsp59 = 0b10001,
}

impl Package {
    pub const fn pin_count(self) -> u8 {
        match self {
            Package::Ufbga73 => 73,
            Package::Ufqfpn48 => 48,
            Package::Wlcsp59 => 59,
        }
    }
}

/// Package field holding an encoding not used by any STM32WLE5 part.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidPackage(pub u8);

impl fmt::Display for InvalidPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown package code {:#07b}", self.0)
    }
}

impl TryFrom<u32> for Package {
    type Error = InvalidPackage;

    /// Decodes bits [4:0] of the package data register.
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let code = (value & 0x1F) as u8;
        match code {
            0b00000 => Ok(Package::Ufbga73),
            0b01010 => Ok(Package::Ufqfpn48),
            0b10001 => Ok(Package::Wlcsp59),
            _ => Err(InvalidPackage(code)),
        }
    }
}

/// Decoded `DBGMCU_IDCODE`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId {
    pub dev_id: u16,
    pub rev_id: u16,
}

/// `IDCODE` of a device outside the STM32WL family.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownDevice(pub u16);

impl fmt::Display for UnknownDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected DEV_ID {:#05x}", self.0)
    }
}

impl DeviceId {
    /// Splits an `IDCODE` value without checking the device family.
    pub fn from_idcode(idcode: u32) -> DeviceId {
        let reg = LocalRegisterCopy::<u32, IDCODE::Register>::new(idcode);
        DeviceId {
            dev_id: reg.read(IDCODE::DEV_ID) as u16,
            rev_id: reg.read(IDCODE::REV_ID) as u16,
        }
    }

    /// Reads `DBGMCU_IDCODE` through [`crate::dbgmcu::DBGMCU_BASE`].
    ///
    /// ## Safety
    ///
    /// Only valid on the target.
    pub unsafe fn read() -> Result<DeviceId, UnknownDevice> {
        DeviceId::try_from(crate::dbgmcu::DBGMCU_BASE.idcode.get())
    }
}

impl TryFrom<u32> for DeviceId {
    type Error = UnknownDevice;

    fn try_from(idcode: u32) -> Result<Self, Self::Error> {
        let id = DeviceId::from_idcode(idcode);
        if id.dev_id == DEV_ID {
            Ok(id)
        } else {
            Err(UnknownDevice(id.dev_id))
        }
    }
}

/// Factory calibration words.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub ts_cal1: u16,
    pub ts_cal2: u16,
    pub vrefint_cal: u16,
}

impl Calibration {
    /// VDDA in millivolts from a raw VREFINT conversion (12-bit, right
    /// aligned). Returns `None` for a zero sample.
    pub fn vdda_mv(&self, vrefint_sample: u16) -> Option<u32> {
        if vrefint_sample == 0 {
            return None;
        }
        Some(VDDA_CALIB_MV * u32::from(self.vrefint_cal) / u32::from(vrefint_sample))
    }

    /// Temperature in degrees Celsius from a raw sensor conversion taken
    /// at VDDA = [`VDDA_CALIB_MV`]. Returns `None` if the calibration
    /// points are equal.
    pub fn temperature_c(&self, ts_sample: u16) -> Option<i32> {
        let cal1 = i32::from(self.ts_cal1);
        let cal2 = i32::from(self.ts_cal2);
        if cal1 == cal2 {
            return None;
        }
        Some(
            (TS_CAL2_TEMP - TS_CAL1_TEMP) * (i32::from(ts_sample) - cal1) / (cal2 - cal1)
                + TS_CAL1_TEMP,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_map::ENGI_BYTES_BASE;

    #[test]
    fn signature_addresses_are_in_engineering_area() {
        for addr in [UID96_ADDR, UID64_ADDR, FLASH_SIZE_ADDR, PACKAGE_ADDR, TS_CAL1_ADDR] {
            assert!(addr >= ENGI_BYTES_BASE && addr < ENGI_BYTES_BASE + 0x400);
        }
    }

    #[test]
    fn package_decoding() {
        assert_eq!(Package::try_from(0x0A), Ok(Package::Ufqfpn48));
        assert_eq!(Package::try_from(0x11), Ok(Package::Wlcsp59));
        assert_eq!(Package::try_from(0x00), Ok(Package::Ufbga73));
        // Upper bits are ignored.
        assert_eq!(Package::try_from(0xFFFF_FFEA), Ok(Package::Ufqfpn48));
        assert_eq!(Package::try_from(0x03), Err(InvalidPackage(0x03)));
        assert_eq!(Package::Ufqfpn48.pin_count(), 48);
    }

    #[test]
    fn package_codes_decode_to_their_variant() {
        for package in [Package::Ufbga73, Package::Ufqfpn48, Package::Wlcsp59] {
            assert_eq!(Package::try_from(package as u32), Ok(package));
        }
        // Every code other than the three bonded packages is reserved.
        let valid = (0u32..32).filter(|&code| Package::try_from(code).is_ok()).count();
        assert_eq!(valid, 3);
    }

    #[test]
    fn idcode_decoding() {
        let id = DeviceId::try_from(0x1001_6497).unwrap();
        assert_eq!(id.dev_id, DEV_ID);
        assert_eq!(id.rev_id, 0x1001);
        assert_eq!(DeviceId::try_from(0x1000_6415), Err(UnknownDevice(0x415)));
        assert_eq!(DeviceId::from_idcode(0x1000_6415).rev_id, 0x1000);
    }

    #[test]
    fn uid64_fields() {
        let uid = Uid64::from_words(0x1234_5678, 0x0080_E115);
        assert_eq!(uid.devnum(), 0x1234_5678);
        assert_eq!(uid.company_id(), 0x0080E1);
        assert_eq!(uid.device_id(), 0x15);
    }

    #[test]
    fn calibration_math() {
        let cal = Calibration {
            ts_cal1: 1000,
            ts_cal2: 1400,
            vrefint_cal: 1500,
        };
        assert_eq!(cal.vdda_mv(1500), Some(3300));
        assert_eq!(cal.vdda_mv(1650), Some(3000));
        assert_eq!(cal.vdda_mv(0), None);
        assert_eq!(cal.temperature_c(1000), Some(30));
        assert_eq!(cal.temperature_c(1400), Some(130));
        assert_eq!(cal.temperature_c(1200), Some(80));

        let flat = Calibration {
            ts_cal1: 7,
            ts_cal2: 7,
            vrefint_cal: 0,
        };
        assert_eq!(flat.temperature_c(7), None);
    }
}
