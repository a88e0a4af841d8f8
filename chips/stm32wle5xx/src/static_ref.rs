// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Wrapper type for safe pointers to static memory.
//!
//! This is the crate's own copy of `kernel::utilities::StaticRef`, so the
//! register definitions build without the Tock kernel crate. It is re-exported
//! as [`crate::StaticRef`].

use core::ops::Deref;

/// A pointer to statically allocated mutable data such as memory mapped I/O
/// registers.
///
/// This is a simple wrapper around a raw pointer that encapsulates an unsafe
/// dereference in a safe manner. It serves the role of creating a `&'static T`
/// given a raw address and acts similarly to `extern` definitions, except
/// `StaticRef` is subject to module and crate boundaries, while `extern`
/// definitions can be imported anywhere.
#[derive(Debug)]
pub struct StaticRef<T> {
    ptr: *const T,
}

impl<T> StaticRef<T> {
    /// Create a new `StaticRef` from a raw pointer
    ///
    /// ## Safety
    ///
    /// Callers must pass in a reference to statically allocated memory which
    /// does not overlap with other values.
    pub const unsafe fn new(ptr: *const T) -> StaticRef<T> {
        StaticRef { ptr }
    }

    /// The physical address this reference points at.
    pub fn addr(&self) -> usize {
        self.ptr as usize
    }

    pub const fn as_ptr(&self) -> *const T {
        self.ptr
    }
}

impl<T> Clone for StaticRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StaticRef<T> {}

impl<T> PartialEq for StaticRef<T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.ptr, other.ptr)
    }
}

impl<T> Deref for StaticRef<T> {
    type Target = T;
    fn deref(&self) -> &T {
        unsafe { &*self.ptr }
    }
}

#[cfg(test)]
mod tests {
    use super::StaticRef;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn deref_reaches_the_pointee() {
        let reg: &'static InMemoryRegister<u32> =
            &*std::boxed::Box::leak(std::boxed::Box::new(InMemoryRegister::new(0x5a)));
        let handle = unsafe { StaticRef::new(reg as *const InMemoryRegister<u32>) };

        assert_eq!(handle.get(), 0x5a);
        handle.set(0xa5);
        assert_eq!(reg.get(), 0xa5);
        assert_eq!(handle.addr(), reg as *const _ as usize);
    }

    #[test]
    fn copies_compare_equal() {
        let a: StaticRef<u32> = unsafe { StaticRef::new(0x4000_0000 as *const u32) };
        let b = a;
        assert!(a == b);
        assert_eq!(b.addr(), 0x4000_0000);
    }

    #[test]
    fn crate_root_reexport_is_the_same_type() {
        let local: StaticRef<u32> = unsafe { StaticRef::new(0x5800_0000 as *const u32) };
        let root: crate::StaticRef<u32> = local;
        assert_eq!(root.addr(), crate::memory_map::AHB3PERIPH_BASE);
    }
}
