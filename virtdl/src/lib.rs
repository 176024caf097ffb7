// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

//! Call libvirt without linking against it.
//!
//! Every libvirt function is exposed as a method of [`VirtApi`]. The first
//! call of a method opens the library the function belongs to and resolves
//! its symbol; later calls reuse both. Calls that cannot reach the native
//! function, or whose native return value signals failure, fill the
//! caller's [`ErrorRecord`].

extern crate self as virtdl;

mod api;
mod config;
mod dispatch;
mod error;
pub mod ffi;
mod library;
mod loader;
mod registry;
mod version;

pub use api::VirtApi;
pub use config::{Config, ConfigError, TARGET_VERSION_ENV};
pub use dispatch::{Failure, FunctionId, FunctionSpec, NativeReturn};
pub use error::{Error, ErrorLevel, ErrorRecord, LoaderError, Result, UNKNOWN_CAUSE};
pub use library::{Library, OpenState, SymbolState};
pub use loader::{DynamicLoader, LibraryHandle, Loader, RawSymbol, StaticLoader, StaticLookup};
pub use registry::{LAST_ERROR_SYMBOL, Registry};
pub use version::{ParseVersionError, Version};
pub use virtdl_proc_macro::virt_api;
