// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

// Host network interface functions.

#[library(Libvirt, link = "virt")]
unsafe extern "C" {
    #[since(0, 10, 2)]
    pub fn virConnectListAllInterfaces(
        conn: virConnectPtr,
        ifaces: *mut *mut virInterfacePtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 7, 0)]
    pub fn virConnectListDefinedInterfaces(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int;

    #[since(0, 6, 4)]
    pub fn virConnectListInterfaces(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int;

    #[since(0, 7, 0)]
    pub fn virConnectNumOfDefinedInterfaces(conn: virConnectPtr) -> c_int;

    #[since(0, 6, 4)]
    pub fn virConnectNumOfInterfaces(conn: virConnectPtr) -> c_int;

    #[since(0, 9, 2)]
    pub fn virInterfaceChangeBegin(conn: virConnectPtr, flags: c_uint) -> c_int;

    #[since(0, 9, 2)]
    pub fn virInterfaceChangeCommit(conn: virConnectPtr, flags: c_uint) -> c_int;

    #[since(0, 9, 2)]
    pub fn virInterfaceChangeRollback(conn: virConnectPtr, flags: c_uint) -> c_int;

    #[since(0, 6, 4)]
    pub fn virInterfaceCreate(iface: virInterfacePtr, flags: c_uint) -> c_int;

    #[since(0, 6, 4)]
    pub fn virInterfaceDefineXML(
        conn: virConnectPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> virInterfacePtr;

    #[since(0, 6, 4)]
    pub fn virInterfaceDestroy(iface: virInterfacePtr, flags: c_uint) -> c_int;

    #[since(0, 6, 4)]
    pub fn virInterfaceFree(iface: virInterfacePtr) -> c_int;

    #[since(0, 6, 4)]
    pub fn virInterfaceGetConnect(iface: virInterfacePtr) -> virConnectPtr;

    #[since(0, 6, 4)]
    pub fn virInterfaceGetMACString(iface: virInterfacePtr) -> *const c_char;

    #[since(0, 6, 4)]
    pub fn virInterfaceGetName(iface: virInterfacePtr) -> *const c_char;

    #[since(0, 6, 4)]
    pub fn virInterfaceGetXMLDesc(iface: virInterfacePtr, flags: c_uint) -> *mut c_char;

    #[since(0, 7, 3)]
    pub fn virInterfaceIsActive(iface: virInterfacePtr) -> c_int;

    #[since(0, 6, 4)]
    pub fn virInterfaceLookupByMACString(
        conn: virConnectPtr,
        macstr: *const c_char,
    ) -> virInterfacePtr;

    #[since(0, 6, 4)]
    pub fn virInterfaceLookupByName(conn: virConnectPtr, name: *const c_char) -> virInterfacePtr;

    #[since(0, 6, 4)]
    pub fn virInterfaceRef(iface: virInterfacePtr) -> c_int;

    #[since(0, 6, 4)]
    pub fn virInterfaceUndefine(iface: virInterfacePtr) -> c_int;
}
