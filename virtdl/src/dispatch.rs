// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

use crate::{Library, Version};

/// Position of a function in its API's function table. Also the index of its
/// symbol slot in the [`Registry`](crate::Registry).
pub type FunctionId = usize;

/// How a native return value signals failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Failure {
    /// Any value below zero.
    Negative,
    /// A null pointer.
    Null,
    /// Zero, for unsigned results.
    Zero,
    /// The function cannot fail, or reports failure some other way.
    Never,
}

/// Static description of one wrapped native function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub library: Library,
    pub since: Version,
    pub failure: Failure,
}

impl FunctionSpec {
    /// Whether the function may be called against `version`.
    pub fn available_in(&self, version: Version) -> bool {
        version >= self.since
    }
}

/// A value a native function can return.
///
/// `SENTINEL` is what a wrapper returns when the call never happened.
pub trait NativeReturn: Copy {
    const SENTINEL: Self;

    fn is_failure(&self, failure: Failure) -> bool;
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl NativeReturn for $ty {
                const SENTINEL: Self = -1;

                fn is_failure(&self, failure: Failure) -> bool {
                    match failure {
                        Failure::Negative => *self < 0,
                        Failure::Zero => *self == 0,
                        Failure::Null | Failure::Never => false,
                    }
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl NativeReturn for $ty {
                const SENTINEL: Self = 0;

                fn is_failure(&self, failure: Failure) -> bool {
                    match failure {
                        Failure::Zero => *self == 0,
                        Failure::Negative | Failure::Null | Failure::Never => false,
                    }
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl<T> NativeReturn for *mut T {
    const SENTINEL: Self = std::ptr::null_mut();

    fn is_failure(&self, failure: Failure) -> bool {
        failure == Failure::Null && self.is_null()
    }
}

impl<T> NativeReturn for *const T {
    const SENTINEL: Self = std::ptr::null();

    fn is_failure(&self, failure: Failure) -> bool {
        failure == Failure::Null && self.is_null()
    }
}

impl NativeReturn for () {
    const SENTINEL: Self = ();

    fn is_failure(&self, _failure: Failure) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    #[test]
    fn test_available_in() {
        let spec = FunctionSpec {
            name: "virDomainGetLaunchSecurityInfo",
            library: Library::Libvirt,
            since: Version::new(4, 5, 0),
            failure: Failure::Negative,
        };
        assert!(spec.available_in(Version::new(4, 5, 0)));
        assert!(spec.available_in(Version::new(11, 2, 0)));
        assert!(!spec.available_in(Version::new(4, 4, 9)));
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(<i32 as NativeReturn>::SENTINEL, -1);
        assert_eq!(<i64 as NativeReturn>::SENTINEL, -1);
        assert_eq!(<u32 as NativeReturn>::SENTINEL, 0);
        assert!(<*mut u8 as NativeReturn>::SENTINEL.is_null());
        assert!(<*const u8 as NativeReturn>::SENTINEL.is_null());
    }

    #[test]
    fn test_failure_shapes() {
        assert!((-1i32).is_failure(Failure::Negative));
        assert!(!0i32.is_failure(Failure::Negative));
        assert!(!(-1i32).is_failure(Failure::Never));
        assert!(0u32.is_failure(Failure::Zero));
        assert!(!7u64.is_failure(Failure::Zero));
        assert!(ptr::null_mut::<u8>().is_failure(Failure::Null));
        assert!(!ptr::null_mut::<u8>().is_failure(Failure::Never));
        assert!(!().is_failure(Failure::Never));
    }
}
