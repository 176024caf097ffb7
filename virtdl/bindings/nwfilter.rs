// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

// Network filter and filter binding functions.

#[library(Libvirt, link = "virt")]
unsafe extern "C" {
    #[since(4, 5, 0)]
    pub fn virConnectListAllNWFilterBindings(
        conn: virConnectPtr,
        bindings: *mut *mut virNWFilterBindingPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 10, 2)]
    pub fn virConnectListAllNWFilters(
        conn: virConnectPtr,
        filters: *mut *mut virNWFilterPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 8, 0)]
    pub fn virConnectListNWFilters(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int;

    #[since(0, 8, 0)]
    pub fn virConnectNumOfNWFilters(conn: virConnectPtr) -> c_int;

    #[since(4, 5, 0)]
    pub fn virNWFilterBindingCreateXML(
        conn: virConnectPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> virNWFilterBindingPtr;

    #[since(4, 5, 0)]
    pub fn virNWFilterBindingDelete(binding: virNWFilterBindingPtr) -> c_int;

    #[since(4, 5, 0)]
    pub fn virNWFilterBindingFree(binding: virNWFilterBindingPtr) -> c_int;

    #[since(4, 5, 0)]
    pub fn virNWFilterBindingGetFilterName(binding: virNWFilterBindingPtr) -> *const c_char;

    #[since(4, 5, 0)]
    pub fn virNWFilterBindingGetPortDev(binding: virNWFilterBindingPtr) -> *const c_char;

    #[since(4, 5, 0)]
    pub fn virNWFilterBindingGetXMLDesc(
        binding: virNWFilterBindingPtr,
        flags: c_uint,
    ) -> *mut c_char;

    #[since(4, 5, 0)]
    pub fn virNWFilterBindingLookupByPortDev(
        conn: virConnectPtr,
        portdev: *const c_char,
    ) -> virNWFilterBindingPtr;

    #[since(4, 5, 0)]
    pub fn virNWFilterBindingRef(binding: virNWFilterBindingPtr) -> c_int;

    #[since(0, 8, 0)]
    pub fn virNWFilterDefineXML(conn: virConnectPtr, xml_desc: *const c_char) -> virNWFilterPtr;

    #[since(7, 7, 0)]
    pub fn virNWFilterDefineXMLFlags(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virNWFilterPtr;

    #[since(0, 8, 0)]
    pub fn virNWFilterFree(nwfilter: virNWFilterPtr) -> c_int;

    #[since(0, 8, 0)]
    pub fn virNWFilterGetName(nwfilter: virNWFilterPtr) -> *const c_char;

    #[since(0, 8, 0)]
    pub fn virNWFilterGetUUID(nwfilter: virNWFilterPtr, uuid: *mut c_uchar) -> c_int;

    #[since(0, 8, 0)]
    pub fn virNWFilterGetUUIDString(nwfilter: virNWFilterPtr, buf: *mut c_char) -> c_int;

    #[since(0, 8, 0)]
    pub fn virNWFilterGetXMLDesc(nwfilter: virNWFilterPtr, flags: c_uint) -> *mut c_char;

    #[since(0, 8, 0)]
    pub fn virNWFilterLookupByName(conn: virConnectPtr, name: *const c_char) -> virNWFilterPtr;

    #[since(0, 8, 0)]
    pub fn virNWFilterLookupByUUID(conn: virConnectPtr, uuid: *const c_uchar) -> virNWFilterPtr;

    #[since(0, 8, 0)]
    pub fn virNWFilterLookupByUUIDString(
        conn: virConnectPtr,
        uuidstr: *const c_char,
    ) -> virNWFilterPtr;

    #[since(0, 8, 0)]
    pub fn virNWFilterRef(nwfilter: virNWFilterPtr) -> c_int;

    #[since(0, 8, 0)]
    pub fn virNWFilterUndefine(nwfilter: virNWFilterPtr) -> c_int;
}
