// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

use std::{ffi::CStr, fmt};

use crate::{Library, Version, ffi};

pub type Result<T> = std::result::Result<T, Error>;

/// Message used when a native call failed without leaving a last error,
/// matching libvirt's own generic failure text.
pub const UNKNOWN_CAUSE: &str = "An error occurred, but the cause is unknown";

/// Severity of an [`ErrorRecord`], mirroring `virErrorLevel`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorLevel {
    #[default]
    None,
    Warning,
    Error,
}

impl ErrorLevel {
    pub fn from_raw(level: ffi::c_int) -> Self {
        match level {
            ffi::VIR_ERR_NONE => ErrorLevel::None,
            ffi::VIR_ERR_WARNING => ErrorLevel::Warning,
            _ => ErrorLevel::Error,
        }
    }
}

/// Caller-owned description of the last failure.
///
/// Wrappers reset the record before writing to it and leave it alone when
/// the call succeeds.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ErrorRecord {
    pub code: i32,
    pub domain: i32,
    pub message: Option<String>,
    pub level: ErrorLevel,
}

impl ErrorRecord {
    /// An internal error in no particular domain, as libvirt reports
    /// failures that never reached the library.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ffi::VIR_ERR_INTERNAL_ERROR,
            domain: ffi::VIR_FROM_NONE,
            message: Some(message.into()),
            level: ErrorLevel::Error,
        }
    }

    /// Copy a native `virError`.
    ///
    /// # Safety
    ///
    /// `raw.message`, when non-null, must point to a NUL-terminated string.
    pub unsafe fn from_raw(raw: &ffi::virError) -> Self {
        let message = (!raw.message.is_null())
            .then(|| unsafe { CStr::from_ptr(raw.message) }.to_string_lossy().into_owned());
        Self {
            code: raw.code,
            domain: raw.domain,
            message,
            level: ErrorLevel::from_raw(raw.level),
        }
    }

    pub fn is_set(&self) -> bool {
        self.code != ffi::VIR_ERR_OK
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => write!(f, "libvirt error code {} (domain {})", self.code, self.domain),
        }
    }
}

/// Diagnostic text reported by the platform loader.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct LoaderError(String);

impl LoaderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<dlopen2::Error> for LoaderError {
    fn from(err: dlopen2::Error) -> Self {
        Self(err.to_string())
    }
}

/// Why a wrapped call did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Function {function} not available prior to libvirt version {since}")]
    Unavailable {
        function: &'static str,
        since: Version,
    },
    #[error("Failed to open {library}: {reason}")]
    LibraryOpen {
        library: Library,
        reason: LoaderError,
    },
    #[error("Failed to load {function}: {reason}")]
    SymbolResolve {
        function: &'static str,
        reason: LoaderError,
    },
    #[error("{0}")]
    Native(ErrorRecord),
}

impl Error {
    /// Overwrite `record` with this error.
    pub fn write_to(&self, record: &mut ErrorRecord) {
        *record = ErrorRecord::from(self);
    }
}

impl From<&Error> for ErrorRecord {
    fn from(err: &Error) -> Self {
        match err {
            Error::Native(record) => record.clone(),
            other => ErrorRecord::internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    fn raw_error(message: &CStr) -> ffi::virError {
        ffi::virError {
            code: 42,
            domain: 10,
            message: message.as_ptr().cast_mut(),
            level: ffi::VIR_ERR_WARNING,
            conn: ptr::null_mut(),
            dom: ptr::null_mut(),
            str1: ptr::null_mut(),
            str2: ptr::null_mut(),
            str3: ptr::null_mut(),
            int1: 0,
            int2: 0,
            net: ptr::null_mut(),
        }
    }

    #[test]
    fn test_from_raw() {
        let raw = raw_error(c"Domain not found");
        let record = unsafe { ErrorRecord::from_raw(&raw) };
        assert_eq!(record.code, 42);
        assert_eq!(record.domain, 10);
        assert_eq!(record.message.as_deref(), Some("Domain not found"));
        assert_eq!(record.level, ErrorLevel::Warning);
        assert!(record.is_set());
    }

    #[test]
    fn test_from_raw_without_message() {
        let mut raw = raw_error(c"");
        raw.message = ptr::null_mut();
        let record = unsafe { ErrorRecord::from_raw(&raw) };
        assert_eq!(record.message, None);
        assert_eq!(record.to_string(), "libvirt error code 42 (domain 10)");
    }

    #[test]
    fn test_unavailable_message() {
        let err = Error::Unavailable {
            function: "virConnectBaselineCPU",
            since: Version::new(0, 7, 7),
        };
        assert_eq!(
            err.to_string(),
            "Function virConnectBaselineCPU not available prior to libvirt version 0.7.7"
        );
    }

    #[test]
    fn test_write_to_replaces_stale_content() {
        let mut record = ErrorRecord {
            code: 55,
            domain: 20,
            message: Some("stale".into()),
            level: ErrorLevel::Warning,
        };
        let err = Error::LibraryOpen {
            library: Library::LibvirtLxc,
            reason: LoaderError::new("libvirt-lxc.so.0: cannot open shared object file"),
        };
        err.write_to(&mut record);

        assert_eq!(record.code, ffi::VIR_ERR_INTERNAL_ERROR);
        assert_eq!(record.domain, ffi::VIR_FROM_NONE);
        assert_eq!(record.level, ErrorLevel::Error);
        assert_eq!(
            record.message.as_deref(),
            Some("Failed to open libvirt-lxc: libvirt-lxc.so.0: cannot open shared object file")
        );
    }
}
