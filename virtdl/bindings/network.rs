// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

// Virtual network and network port functions.

#[library(Libvirt, link = "virt")]
unsafe extern "C" {
    #[since(0, 10, 2)]
    pub fn virConnectListAllNetworks(
        conn: virConnectPtr,
        nets: *mut *mut virNetworkPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 2, 0)]
    pub fn virConnectListDefinedNetworks(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int;

    #[since(0, 2, 0)]
    pub fn virConnectListNetworks(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int;

    #[since(1, 2, 1)]
    pub fn virConnectNetworkEventDeregisterAny(conn: virConnectPtr, callback_id: c_int) -> c_int;

    #[since(1, 2, 1)]
    pub fn virConnectNetworkEventRegisterAny(
        conn: virConnectPtr,
        net: virNetworkPtr,
        event_id: c_int,
        cb: virConnectNetworkEventGenericCallback,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int;

    #[since(0, 2, 0)]
    pub fn virConnectNumOfDefinedNetworks(conn: virConnectPtr) -> c_int;

    #[since(0, 2, 0)]
    pub fn virConnectNumOfNetworks(conn: virConnectPtr) -> c_int;

    #[since(0, 2, 0)]
    pub fn virNetworkCreate(network: virNetworkPtr) -> c_int;

    #[since(0, 2, 0)]
    pub fn virNetworkCreateXML(conn: virConnectPtr, xml_desc: *const c_char) -> virNetworkPtr;

    #[since(7, 8, 0)]
    pub fn virNetworkCreateXMLFlags(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virNetworkPtr;

    #[since(1, 2, 6)]
    pub fn virNetworkDHCPLeaseFree(lease: virNetworkDHCPLeasePtr);

    #[since(0, 2, 0)]
    pub fn virNetworkDefineXML(conn: virConnectPtr, xml: *const c_char) -> virNetworkPtr;

    #[since(7, 7, 0)]
    pub fn virNetworkDefineXMLFlags(
        conn: virConnectPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> virNetworkPtr;

    #[since(0, 2, 0)]
    pub fn virNetworkDestroy(network: virNetworkPtr) -> c_int;

    #[since(0, 2, 0)]
    pub fn virNetworkFree(network: virNetworkPtr) -> c_int;

    #[since(0, 2, 1)]
    pub fn virNetworkGetAutostart(network: virNetworkPtr, autostart: *mut c_int) -> c_int;

    #[since(0, 2, 0)]
    pub fn virNetworkGetBridgeName(network: virNetworkPtr) -> *mut c_char;

    #[since(0, 3, 0)]
    pub fn virNetworkGetConnect(net: virNetworkPtr) -> virConnectPtr;

    #[since(1, 2, 6)]
    pub fn virNetworkGetDHCPLeases(
        network: virNetworkPtr,
        mac: *const c_char,
        leases: *mut *mut virNetworkDHCPLeasePtr,
        flags: c_uint,
    ) -> c_int;

    #[since(9, 7, 0)]
    pub fn virNetworkGetMetadata(
        network: virNetworkPtr,
        type_: c_int,
        uri: *const c_char,
        flags: c_uint,
    ) -> *mut c_char;

    #[since(0, 2, 0)]
    pub fn virNetworkGetName(network: virNetworkPtr) -> *const c_char;

    #[since(0, 2, 0)]
    pub fn virNetworkGetUUID(network: virNetworkPtr, uuid: *mut c_uchar) -> c_int;

    #[since(0, 2, 0)]
    pub fn virNetworkGetUUIDString(network: virNetworkPtr, buf: *mut c_char) -> c_int;

    #[since(0, 2, 0)]
    pub fn virNetworkGetXMLDesc(network: virNetworkPtr, flags: c_uint) -> *mut c_char;

    #[since(0, 7, 3)]
    pub fn virNetworkIsActive(net: virNetworkPtr) -> c_int;

    #[since(0, 7, 3)]
    pub fn virNetworkIsPersistent(net: virNetworkPtr) -> c_int;

    #[since(5, 5, 0)]
    pub fn virNetworkListAllPorts(
        network: virNetworkPtr,
        ports: *mut *mut virNetworkPortPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 2, 0)]
    pub fn virNetworkLookupByName(conn: virConnectPtr, name: *const c_char) -> virNetworkPtr;

    #[since(0, 2, 0)]
    pub fn virNetworkLookupByUUID(conn: virConnectPtr, uuid: *const c_uchar) -> virNetworkPtr;

    #[since(0, 2, 0)]
    pub fn virNetworkLookupByUUIDString(
        conn: virConnectPtr,
        uuidstr: *const c_char,
    ) -> virNetworkPtr;

    #[since(5, 5, 0)]
    pub fn virNetworkPortCreateXML(
        net: virNetworkPtr,
        xmldesc: *const c_char,
        flags: c_uint,
    ) -> virNetworkPortPtr;

    #[since(5, 5, 0)]
    pub fn virNetworkPortDelete(port: virNetworkPortPtr, flags: c_uint) -> c_int;

    #[since(5, 5, 0)]
    pub fn virNetworkPortFree(port: virNetworkPortPtr) -> c_int;

    #[since(5, 5, 0)]
    pub fn virNetworkPortGetNetwork(port: virNetworkPortPtr) -> virNetworkPtr;

    #[since(5, 5, 0)]
    pub fn virNetworkPortGetParameters(
        port: virNetworkPortPtr,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(5, 5, 0)]
    pub fn virNetworkPortGetUUID(port: virNetworkPortPtr, uuid: *mut c_uchar) -> c_int;

    #[since(5, 5, 0)]
    pub fn virNetworkPortGetUUIDString(port: virNetworkPortPtr, buf: *mut c_char) -> c_int;

    #[since(5, 5, 0)]
    pub fn virNetworkPortGetXMLDesc(port: virNetworkPortPtr, flags: c_uint) -> *mut c_char;

    #[since(5, 5, 0)]
    pub fn virNetworkPortLookupByUUID(
        net: virNetworkPtr,
        uuid: *const c_uchar,
    ) -> virNetworkPortPtr;

    #[since(5, 5, 0)]
    pub fn virNetworkPortLookupByUUIDString(
        net: virNetworkPtr,
        uuidstr: *const c_char,
    ) -> virNetworkPortPtr;

    #[since(5, 5, 0)]
    pub fn virNetworkPortRef(port: virNetworkPortPtr) -> c_int;

    #[since(5, 5, 0)]
    pub fn virNetworkPortSetParameters(
        port: virNetworkPortPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 6, 0)]
    pub fn virNetworkRef(network: virNetworkPtr) -> c_int;

    #[since(0, 2, 1)]
    pub fn virNetworkSetAutostart(network: virNetworkPtr, autostart: c_int) -> c_int;

    #[since(9, 7, 0)]
    pub fn virNetworkSetMetadata(
        network: virNetworkPtr,
        type_: c_int,
        metadata: *const c_char,
        key: *const c_char,
        uri: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 2, 0)]
    pub fn virNetworkUndefine(network: virNetworkPtr) -> c_int;

    #[since(0, 10, 2)]
    pub fn virNetworkUpdate(
        network: virNetworkPtr,
        command: c_uint,
        section: c_uint,
        parent_index: c_int,
        xml: *const c_char,
        flags: c_uint,
    ) -> c_int;
}
