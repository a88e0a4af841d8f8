// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Hardware semaphore (HSEM), 16 semaphores.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::AHB3PERIPH_BASE;
use crate::static_ref::StaticRef;

pub const SEMAPHORES: usize = 16;

/// `COREID` of CPU1.
pub const CPU1_COREID: u32 = 0x4;

register_structs! {
    pub HsemRegisters {
        /// Semaphore registers, two-step lock on write
        (0x000 => pub r: [ReadWrite<u32, R::Register>; SEMAPHORES]),
        (0x040 => _reserved0),
        /// Semaphore read lock registers, one-step lock on read
        (0x080 => pub rlr: [ReadOnly<u32, R::Register>; SEMAPHORES]),
        (0x0C0 => _reserved1),
        /// Interrupt enable register
        (0x100 => pub c1ier: ReadWrite<u32>),
        /// Interrupt clear register
        (0x104 => pub c1icr: WriteOnly<u32>),
        /// Interrupt status register
        (0x108 => pub c1isr: ReadOnly<u32>),
        /// Masked interrupt status register
        (0x10C => pub c1misr: ReadOnly<u32>),
        (0x110 => _reserved2),
        /// Clear register
        (0x140 => pub cr: WriteOnly<u32, CR::Register>),
        /// Clear semaphore key register
        (0x144 => pub keyr: ReadWrite<u32, KEYR::Register>),
        (0x148 => @END),
    }
}

register_bitfields![u32,
    pub R [
        /// Lock indication
        LOCK OFFSET(31) NUMBITS(1) [],
        /// Semaphore core ID
        COREID OFFSET(8) NUMBITS(4) [],
        /// Semaphore process ID
        PROCID OFFSET(0) NUMBITS(8) []
    ],
    pub CR [
        /// Semaphore clear key
        KEY OFFSET(16) NUMBITS(16) [],
        /// Core ID of the semaphores to clear
        COREID OFFSET(8) NUMBITS(4) []
    ],
    pub KEYR [
        /// Semaphore clear key
        KEY OFFSET(16) NUMBITS(16) []
    ]
];

pub const HSEM_BASE: StaticRef<HsemRegisters> =
    unsafe { StaticRef::new((AHB3PERIPH_BASE + 0x1400) as *const HsemRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(HsemRegisters, rlr), 0x80);
        assert_eq!(offset_of!(HsemRegisters, c1ier), 0x100);
        assert_eq!(offset_of!(HsemRegisters, c1misr), 0x10C);
        assert_eq!(offset_of!(HsemRegisters, cr), 0x140);
        assert_eq!(size_of::<HsemRegisters>(), 0x148);
        assert_eq!(HSEM_BASE.addr(), 0x5800_1400);
    }

    #[test]
    fn two_step_lock_word() {
        let r = InMemoryRegister::<u32, R::Register>::new(0);
        r.write(R::LOCK::SET + R::COREID.val(CPU1_COREID) + R::PROCID.val(3));
        assert_eq!(r.get(), 0x8000_0403);
        assert_eq!(r.read(R::COREID), CPU1_COREID);
    }
}
