// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

//! Registry configuration.
//!
//! The target version decides which wrappers are gated out; it is fixed for
//! the lifetime of a registry. Defaults can be overridden from the
//! environment:
//! - `VIRTDL_TARGET_VERSION`: `major.minor.micro`, defaults to [`Version::BUILD`].
//! - `VIRTDL_LIBVIRT_SONAME`, `VIRTDL_LIBVIRT_LXC_SONAME`,
//!   `VIRTDL_LIBVIRT_QEMU_SONAME`, `VIRTDL_LIBVIRT_ADMIN_SONAME`: shared
//!   object names handed to the dynamic loader.

use crate::{Library, Version, version::ParseVersionError};

pub const TARGET_VERSION_ENV: &str = "VIRTDL_TARGET_VERSION";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    InvalidVersion {
        var: &'static str,
        source: ParseVersionError,
    },
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    target_version: Version,
    sonames: [String; Library::COUNT],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_version: Version::BUILD,
            sonames: Library::ALL.map(|library| library.soname().to_owned()),
        }
    }
}

impl Config {
    /// Default configuration with any overrides found in the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var_os(var))
    }

    fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<std::ffi::OsString>,
    ) -> Result<Self, ConfigError> {
        let read = |var: &'static str| -> Result<Option<String>, ConfigError> {
            lookup(var)
                .map(|value| value.into_string().map_err(|_| ConfigError::NotUnicode { var }))
                .transpose()
        };

        let mut config = Self::default();
        if let Some(value) = read(TARGET_VERSION_ENV)? {
            let version = value.parse().map_err(|source| ConfigError::InvalidVersion {
                var: TARGET_VERSION_ENV,
                source,
            })?;
            config = config.with_target_version(version);
        }
        for library in Library::ALL {
            if let Some(soname) = read(library.soname_env())? {
                config = config.with_soname(library, soname);
            }
        }
        Ok(config)
    }

    pub fn with_target_version(mut self, version: Version) -> Self {
        self.target_version = version;
        self
    }

    pub fn with_soname(mut self, library: Library, soname: impl Into<String>) -> Self {
        self.sonames[library.index()] = soname.into();
        self
    }

    pub fn target_version(&self) -> Version {
        self.target_version
    }

    pub fn soname(&self, library: Library) -> &str {
        &self.sonames[library.index()]
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, ffi::OsString};

    use super::*;

    fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<OsString> {
        let vars: HashMap<_, _> = vars.iter().map(|(k, v)| (*k, OsString::from(v))).collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.target_version(), Version::BUILD);
        assert_eq!(config.soname(Library::Libvirt), "libvirt.so.0");
        assert_eq!(config.soname(Library::LibvirtAdmin), "libvirt-admin.so.0");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (TARGET_VERSION_ENV, "5.0.0"),
            ("VIRTDL_LIBVIRT_QEMU_SONAME", "/opt/libvirt/lib/libvirt-qemu.so"),
        ]))
        .unwrap();
        assert_eq!(config.target_version(), Version::new(5, 0, 0));
        assert_eq!(config.soname(Library::LibvirtQemu), "/opt/libvirt/lib/libvirt-qemu.so");
        assert_eq!(config.soname(Library::Libvirt), "libvirt.so.0");
    }

    #[test]
    fn test_invalid_version() {
        let err = Config::from_lookup(lookup(&[(TARGET_VERSION_ENV, "latest")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVersion { var: TARGET_VERSION_ENV, .. }));
    }
}
