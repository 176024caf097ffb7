// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

// Container namespace helpers from libvirt-lxc.

#[library(LibvirtLxc, link = "virt-lxc")]
unsafe extern "C" {
    #[since(2, 0, 0)]
    pub fn virDomainLxcEnterCGroup(domain: virDomainPtr, flags: c_uint) -> c_int;

    #[since(1, 0, 2)]
    pub fn virDomainLxcEnterNamespace(
        domain: virDomainPtr,
        nfdlist: c_uint,
        fdlist: *mut c_int,
        noldfdlist: *mut c_uint,
        oldfdlist: *mut *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 0, 4)]
    pub fn virDomainLxcEnterSecurityLabel(
        model: virSecurityModelPtr,
        label: virSecurityLabelPtr,
        oldlabel: virSecurityLabelPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virDomainLxcOpenNamespace(
        domain: virDomainPtr,
        fdlist: *mut *mut c_int,
        flags: c_uint,
    ) -> c_int;
}
