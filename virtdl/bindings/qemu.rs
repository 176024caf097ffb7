// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

// QEMU monitor and guest agent passthrough from libvirt-qemu.

#[library(LibvirtQemu, link = "virt-qemu")]
unsafe extern "C" {
    #[since(1, 2, 3)]
    pub fn virConnectDomainQemuMonitorEventDeregister(
        conn: virConnectPtr,
        callback_id: c_int,
    ) -> c_int;

    #[since(1, 2, 3)]
    pub fn virConnectDomainQemuMonitorEventRegister(
        conn: virConnectPtr,
        dom: virDomainPtr,
        event: *const c_char,
        cb: virConnectDomainQemuMonitorEventCallback,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int;

    #[since(0, 10, 0)]
    pub fn virDomainQemuAgentCommand(
        domain: virDomainPtr,
        cmd: *const c_char,
        timeout: c_int,
        flags: c_uint,
    ) -> *mut c_char;

    #[since(0, 9, 4)]
    pub fn virDomainQemuAttach(
        conn: virConnectPtr,
        pid_value: c_uint,
        flags: c_uint,
    ) -> virDomainPtr;

    #[since(0, 8, 3)]
    pub fn virDomainQemuMonitorCommand(
        domain: virDomainPtr,
        cmd: *const c_char,
        result: *mut *mut c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(8, 2, 0)]
    pub fn virDomainQemuMonitorCommandWithFiles(
        domain: virDomainPtr,
        cmd: *const c_char,
        ninfiles: c_uint,
        infiles: *mut c_int,
        noutfiles: *mut c_uint,
        outfiles: *mut *mut c_int,
        result: *mut *mut c_char,
        flags: c_uint,
    ) -> c_int;
}
