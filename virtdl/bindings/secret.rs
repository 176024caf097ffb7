// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

// Secret storage functions.

#[library(Libvirt, link = "virt")]
unsafe extern "C" {
    #[since(0, 10, 2)]
    pub fn virConnectListAllSecrets(
        conn: virConnectPtr,
        secrets: *mut *mut virSecretPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 7, 1)]
    pub fn virConnectListSecrets(
        conn: virConnectPtr,
        uuids: *mut *mut c_char,
        maxuuids: c_int,
    ) -> c_int;

    #[since(0, 7, 1)]
    pub fn virConnectNumOfSecrets(conn: virConnectPtr) -> c_int;

    #[since(3, 0, 0)]
    pub fn virConnectSecretEventDeregisterAny(conn: virConnectPtr, callback_id: c_int) -> c_int;

    #[since(3, 0, 0)]
    pub fn virConnectSecretEventRegisterAny(
        conn: virConnectPtr,
        secret: virSecretPtr,
        event_id: c_int,
        cb: virConnectSecretEventGenericCallback,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int;

    #[since(0, 7, 1)]
    pub fn virSecretDefineXML(
        conn: virConnectPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> virSecretPtr;

    #[since(0, 7, 1)]
    pub fn virSecretFree(secret: virSecretPtr) -> c_int;

    #[since(0, 7, 1)]
    pub fn virSecretGetConnect(secret: virSecretPtr) -> virConnectPtr;

    #[since(0, 7, 1)]
    pub fn virSecretGetUUID(secret: virSecretPtr, uuid: *mut c_uchar) -> c_int;

    #[since(0, 7, 1)]
    pub fn virSecretGetUUIDString(secret: virSecretPtr, buf: *mut c_char) -> c_int;

    #[since(0, 7, 1)]
    pub fn virSecretGetUsageID(secret: virSecretPtr) -> *const c_char;

    #[since(0, 7, 1)]
    pub fn virSecretGetUsageType(secret: virSecretPtr) -> c_int;

    #[since(0, 7, 1)]
    pub fn virSecretGetValue(
        secret: virSecretPtr,
        value_size: *mut usize,
        flags: c_uint,
    ) -> *mut c_uchar;

    #[since(0, 7, 1)]
    pub fn virSecretGetXMLDesc(secret: virSecretPtr, flags: c_uint) -> *mut c_char;

    #[since(0, 7, 1)]
    pub fn virSecretLookupByUUID(conn: virConnectPtr, uuid: *const c_uchar) -> virSecretPtr;

    #[since(0, 7, 1)]
    pub fn virSecretLookupByUUIDString(conn: virConnectPtr, uuidstr: *const c_char) -> virSecretPtr;

    #[since(0, 7, 1)]
    pub fn virSecretLookupByUsage(
        conn: virConnectPtr,
        usage_type: c_int,
        usage_id: *const c_char,
    ) -> virSecretPtr;

    #[since(0, 7, 1)]
    pub fn virSecretRef(secret: virSecretPtr) -> c_int;

    #[since(0, 7, 1)]
    pub fn virSecretSetValue(
        secret: virSecretPtr,
        value: *const c_uchar,
        value_size: usize,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 7, 1)]
    pub fn virSecretUndefine(secret: virSecretPtr) -> c_int;
}
