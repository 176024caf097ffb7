// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

// Host device enumeration, detach and mediated device functions.

#[library(Libvirt, link = "virt")]
unsafe extern "C" {
    #[since(0, 10, 2)]
    pub fn virConnectListAllNodeDevices(
        conn: virConnectPtr,
        devices: *mut *mut virNodeDevicePtr,
        flags: c_uint,
    ) -> c_int;

    #[since(2, 2, 0)]
    pub fn virConnectNodeDeviceEventDeregisterAny(conn: virConnectPtr, callback_id: c_int) -> c_int;

    #[since(2, 2, 0)]
    pub fn virConnectNodeDeviceEventRegisterAny(
        conn: virConnectPtr,
        dev: virNodeDevicePtr,
        event_id: c_int,
        cb: virConnectNodeDeviceEventGenericCallback,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int;

    #[since(7, 3, 0)]
    pub fn virNodeDeviceCreate(dev: virNodeDevicePtr, flags: c_uint) -> c_int;

    #[since(0, 6, 3)]
    pub fn virNodeDeviceCreateXML(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virNodeDevicePtr;

    #[since(7, 3, 0)]
    pub fn virNodeDeviceDefineXML(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virNodeDevicePtr;

    #[since(0, 6, 3)]
    pub fn virNodeDeviceDestroy(dev: virNodeDevicePtr) -> c_int;

    #[since(1, 0, 5)]
    pub fn virNodeDeviceDetachFlags(
        dev: virNodeDevicePtr,
        driver_name: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 6, 1)]
    pub fn virNodeDeviceDettach(dev: virNodeDevicePtr) -> c_int;

    #[since(0, 5, 0)]
    pub fn virNodeDeviceFree(dev: virNodeDevicePtr) -> c_int;

    #[since(7, 8, 0)]
    pub fn virNodeDeviceGetAutostart(dev: virNodeDevicePtr, autostart: *mut c_int) -> c_int;

    #[since(0, 5, 0)]
    pub fn virNodeDeviceGetName(dev: virNodeDevicePtr) -> *const c_char;

    #[since(0, 5, 0)]
    pub fn virNodeDeviceGetParent(dev: virNodeDevicePtr) -> *const c_char;

    #[since(0, 5, 0)]
    pub fn virNodeDeviceGetXMLDesc(dev: virNodeDevicePtr, flags: c_uint) -> *mut c_char;

    #[since(7, 8, 0)]
    pub fn virNodeDeviceIsActive(dev: virNodeDevicePtr) -> c_int;

    #[since(7, 8, 0)]
    pub fn virNodeDeviceIsPersistent(dev: virNodeDevicePtr) -> c_int;

    #[since(0, 5, 0)]
    pub fn virNodeDeviceListCaps(
        dev: virNodeDevicePtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int;

    #[since(0, 5, 0)]
    pub fn virNodeDeviceLookupByName(conn: virConnectPtr, name: *const c_char) -> virNodeDevicePtr;

    #[since(1, 0, 3)]
    pub fn virNodeDeviceLookupSCSIHostByWWN(
        conn: virConnectPtr,
        wwnn: *const c_char,
        wwpn: *const c_char,
        flags: c_uint,
    ) -> virNodeDevicePtr;

    #[since(0, 5, 0)]
    pub fn virNodeDeviceNumOfCaps(dev: virNodeDevicePtr) -> c_int;

    #[since(0, 6, 1)]
    pub fn virNodeDeviceReAttach(dev: virNodeDevicePtr) -> c_int;

    #[since(0, 6, 0)]
    pub fn virNodeDeviceRef(dev: virNodeDevicePtr) -> c_int;

    #[since(0, 6, 1)]
    pub fn virNodeDeviceReset(dev: virNodeDevicePtr) -> c_int;

    #[since(7, 8, 0)]
    pub fn virNodeDeviceSetAutostart(dev: virNodeDevicePtr, autostart: c_int) -> c_int;

    #[since(7, 3, 0)]
    pub fn virNodeDeviceUndefine(dev: virNodeDevicePtr, flags: c_uint) -> c_int;

    #[since(10, 1, 0)]
    pub fn virNodeDeviceUpdate(
        dev: virNodeDevicePtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 5, 0)]
    pub fn virNodeListDevices(
        conn: virConnectPtr,
        cap: *const c_char,
        names: *mut *mut c_char,
        maxnames: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 5, 0)]
    pub fn virNodeNumOfDevices(conn: virConnectPtr, cap: *const c_char, flags: c_uint) -> c_int;
}
