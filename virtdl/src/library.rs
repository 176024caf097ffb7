// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// The native libraries a wrapper can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Library {
    Libvirt,
    LibvirtLxc,
    LibvirtQemu,
    LibvirtAdmin,
}

impl Library {
    pub const COUNT: usize = 4;

    pub const ALL: [Library; Library::COUNT] = [
        Library::Libvirt,
        Library::LibvirtLxc,
        Library::LibvirtQemu,
        Library::LibvirtAdmin,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Library::Libvirt => "libvirt",
            Library::LibvirtLxc => "libvirt-lxc",
            Library::LibvirtQemu => "libvirt-qemu",
            Library::LibvirtAdmin => "libvirt-admin",
        }
    }

    /// Well-known shared object name passed to the platform loader.
    pub const fn soname(self) -> &'static str {
        match self {
            Library::Libvirt => "libvirt.so.0",
            Library::LibvirtLxc => "libvirt-lxc.so.0",
            Library::LibvirtQemu => "libvirt-qemu.so.0",
            Library::LibvirtAdmin => "libvirt-admin.so.0",
        }
    }

    /// Environment variable overriding [`Library::soname`].
    pub const fn soname_env(self) -> &'static str {
        match self {
            Library::Libvirt => "VIRTDL_LIBVIRT_SONAME",
            Library::LibvirtLxc => "VIRTDL_LIBVIRT_LXC_SONAME",
            Library::LibvirtQemu => "VIRTDL_LIBVIRT_QEMU_SONAME",
            Library::LibvirtAdmin => "VIRTDL_LIBVIRT_ADMIN_SONAME",
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a library handle has been opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenState {
    NotAttempted,
    Opened,
    Failed,
}

/// Whether a wrapper's symbol has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolState {
    Unresolved,
    Resolved,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_dense() {
        for (position, library) in Library::ALL.iter().enumerate() {
            assert_eq!(library.index(), position);
        }
    }

    #[test]
    fn test_sonames() {
        assert_eq!(Library::Libvirt.soname(), "libvirt.so.0");
        assert_eq!(Library::LibvirtQemu.soname(), "libvirt-qemu.so.0");
        assert_eq!(Library::LibvirtLxc.to_string(), "libvirt-lxc");
    }
}
