// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

//! Backends turning a library name into a handle and a symbol name into an
//! address.
//!
//! [`DynamicLoader`] goes through the platform loader at runtime,
//! [`StaticLoader`] answers from a table of link-time references. The
//! registry treats both the same way.

use std::{ffi::c_void, mem, ptr};

use dlopen2::raw;
use tracing::trace;

use crate::{Library, error::LoaderError};

/// Address of a resolved symbol. May be null when the export itself is null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSymbol(*const c_void);

// The address refers to code or data of a library that is never closed.
unsafe impl Send for RawSymbol {}
unsafe impl Sync for RawSymbol {}

impl RawSymbol {
    pub const fn new(address: *const c_void) -> Self {
        Self(address)
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }

    /// Reinterpret the address as a function pointer.
    ///
    /// # Safety
    ///
    /// `F` must be an `extern "C"` function pointer type matching the
    /// symbol's real signature, and the address must be non-null.
    pub unsafe fn cast<F: Copy>(self) -> F {
        assert_eq!(mem::size_of::<F>(), mem::size_of::<*const c_void>());
        unsafe { mem::transmute_copy(&self.0) }
    }
}

/// Opens native libraries.
pub trait Loader: Send + Sync {
    fn open(&self, library: Library, soname: &str) -> Result<Box<dyn LibraryHandle>, LoaderError>;
}

/// An opened native library.
pub trait LibraryHandle: Send + Sync {
    /// Look up `symbol`. A null address without a loader error is a
    /// successful lookup.
    fn resolve(&self, symbol: &str) -> Result<RawSymbol, LoaderError>;
}

/// Loads libraries with `dlopen` and resolves symbols with `dlsym`.
///
/// Opened libraries are never closed, so resolved addresses stay valid after
/// the registry holding them is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct DynamicLoader;

impl Loader for DynamicLoader {
    fn open(&self, library: Library, soname: &str) -> Result<Box<dyn LibraryHandle>, LoaderError> {
        trace!(%library, soname, "dlopen");
        let handle = raw::Library::open(soname)?;
        Ok(Box::new(DynamicHandle(Box::leak(Box::new(handle)))))
    }
}

struct DynamicHandle(&'static raw::Library);

impl LibraryHandle for DynamicHandle {
    fn resolve(&self, symbol: &str) -> Result<RawSymbol, LoaderError> {
        // dlerror, not the returned address, decides whether the lookup failed.
        match unsafe { self.0.symbol::<*const c_void>(symbol) } {
            Ok(address) => Ok(RawSymbol::new(address)),
            Err(dlopen2::Error::NullSymbol) => Ok(RawSymbol::new(ptr::null())),
            Err(err) => Err(err.into()),
        }
    }
}

/// Lookup function generated alongside a statically linked API.
pub type StaticLookup = fn(Library, &str) -> Option<RawSymbol>;

/// Resolves symbols from a table of link-time references.
///
/// Opening always succeeds: the libraries were bound by the linker.
#[derive(Debug, Clone, Copy)]
pub struct StaticLoader {
    lookup: StaticLookup,
}

impl StaticLoader {
    pub const fn new(lookup: StaticLookup) -> Self {
        Self { lookup }
    }
}

impl Loader for StaticLoader {
    fn open(&self, library: Library, _soname: &str) -> Result<Box<dyn LibraryHandle>, LoaderError> {
        Ok(Box::new(StaticHandle {
            library,
            lookup: self.lookup,
        }))
    }
}

struct StaticHandle {
    library: Library,
    lookup: StaticLookup,
}

impl LibraryHandle for StaticHandle {
    fn resolve(&self, symbol: &str) -> Result<RawSymbol, LoaderError> {
        (self.lookup)(self.library, symbol).ok_or_else(|| {
            LoaderError::new(format!("{symbol} is not linked into {}", self.library))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::c_int;

    use super::*;

    extern "C" fn answer() -> i32 {
        42
    }

    fn lookup(library: Library, name: &str) -> Option<RawSymbol> {
        match (library, name) {
            (Library::Libvirt, "answer") => Some(RawSymbol::new(answer as *const c_void)),
            _ => None,
        }
    }

    #[test]
    fn test_static_loader_resolves_linked_symbols() {
        let handle = StaticLoader::new(lookup).open(Library::Libvirt, "ignored").unwrap();
        let symbol = handle.resolve("answer").unwrap();
        let answer: extern "C" fn() -> i32 = unsafe { symbol.cast() };
        assert_eq!(answer(), 42);
    }

    #[test]
    fn test_static_loader_scopes_symbols_to_library() {
        let handle = StaticLoader::new(lookup).open(Library::LibvirtQemu, "ignored").unwrap();
        let err = handle.resolve("answer").err().unwrap();
        assert_eq!(err.to_string(), "answer is not linked into libvirt-qemu");
    }

    #[test]
    fn test_dynamic_loader_reports_missing_library() {
        let err = DynamicLoader
            .open(Library::Libvirt, "libvirtdl-does-not-exist.so.0")
            .err()
            .unwrap();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_raw_symbol_null() {
        assert!(RawSymbol::new(ptr::null()).is_null());
    }

    #[test]
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    fn test_dynamic_loader_resolves_system_symbols() {
        let handle = DynamicLoader.open(Library::Libvirt, "libc.so.6").unwrap();

        let symbol = handle.resolve("getpid").unwrap();
        assert!(!symbol.is_null());
        let getpid: unsafe extern "C" fn() -> c_int = unsafe { symbol.cast() };
        assert_eq!(unsafe { getpid() } as u32, std::process::id());

        let err = handle.resolve("virtdl_missing_symbol").unwrap_err();
        assert!(err.to_string().contains("undefined symbol: virtdl_missing_symbol"), "{err}");
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_dynamic_loader_never_closes_libraries() {
        let mapped = |stem: &str| {
            std::fs::read_to_string("/proc/self/maps")
                .unwrap()
                .lines()
                .any(|line| line.contains(stem))
        };
        // Any library the test binary does not already map will do.
        let candidates = ["libbz2.so.1", "libresolv.so.2", "libutil.so.1", "libanl.so.1"];
        let Some((soname, stem)) = candidates
            .iter()
            .map(|soname| (*soname, &soname[..soname.find(".so").unwrap() + 3]))
            .find(|(_, stem)| !mapped(stem))
        else {
            return;
        };
        let Ok(handle) = DynamicLoader.open(Library::Libvirt, soname) else {
            return;
        };
        assert!(mapped(stem));

        drop(handle);
        assert!(mapped(stem), "{soname} was unloaded with its handle");
    }
}
