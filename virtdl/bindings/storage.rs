// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

// Storage pool and volume functions.

#[library(Libvirt, link = "virt")]
unsafe extern "C" {
    #[since(0, 4, 5)]
    pub fn virConnectFindStoragePoolSources(
        conn: virConnectPtr,
        type_: *const c_char,
        src_spec: *const c_char,
        flags: c_uint,
    ) -> *mut c_char;

    #[since(5, 2, 0)]
    pub fn virConnectGetStoragePoolCapabilities(conn: virConnectPtr, flags: c_uint) -> *mut c_char;

    #[since(0, 10, 2)]
    pub fn virConnectListAllStoragePools(
        conn: virConnectPtr,
        pools: *mut *mut virStoragePoolPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 4, 1)]
    pub fn virConnectListDefinedStoragePools(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int;

    #[since(0, 4, 1)]
    pub fn virConnectListStoragePools(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int;

    #[since(0, 4, 1)]
    pub fn virConnectNumOfDefinedStoragePools(conn: virConnectPtr) -> c_int;

    #[since(0, 4, 1)]
    pub fn virConnectNumOfStoragePools(conn: virConnectPtr) -> c_int;

    #[since(2, 0, 0)]
    pub fn virConnectStoragePoolEventDeregisterAny(
        conn: virConnectPtr,
        callback_id: c_int,
    ) -> c_int;

    #[since(2, 0, 0)]
    pub fn virConnectStoragePoolEventRegisterAny(
        conn: virConnectPtr,
        pool: virStoragePoolPtr,
        event_id: c_int,
        cb: virConnectStoragePoolEventGenericCallback,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStoragePoolBuild(pool: virStoragePoolPtr, flags: c_uint) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStoragePoolCreate(pool: virStoragePoolPtr, flags: c_uint) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStoragePoolCreateXML(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virStoragePoolPtr;

    #[since(0, 4, 1)]
    pub fn virStoragePoolDefineXML(
        conn: virConnectPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> virStoragePoolPtr;

    #[since(0, 4, 1)]
    pub fn virStoragePoolDelete(pool: virStoragePoolPtr, flags: c_uint) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStoragePoolDestroy(pool: virStoragePoolPtr) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStoragePoolFree(pool: virStoragePoolPtr) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStoragePoolGetAutostart(pool: virStoragePoolPtr, autostart: *mut c_int) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStoragePoolGetConnect(pool: virStoragePoolPtr) -> virConnectPtr;

    #[since(0, 4, 1)]
    pub fn virStoragePoolGetInfo(pool: virStoragePoolPtr, info: virStoragePoolInfoPtr) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStoragePoolGetName(pool: virStoragePoolPtr) -> *const c_char;

    #[since(0, 4, 1)]
    pub fn virStoragePoolGetUUID(pool: virStoragePoolPtr, uuid: *mut c_uchar) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStoragePoolGetUUIDString(pool: virStoragePoolPtr, buf: *mut c_char) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStoragePoolGetXMLDesc(pool: virStoragePoolPtr, flags: c_uint) -> *mut c_char;

    #[since(0, 7, 3)]
    pub fn virStoragePoolIsActive(pool: virStoragePoolPtr) -> c_int;

    #[since(0, 7, 3)]
    pub fn virStoragePoolIsPersistent(pool: virStoragePoolPtr) -> c_int;

    #[since(0, 10, 2)]
    pub fn virStoragePoolListAllVolumes(
        pool: virStoragePoolPtr,
        vols: *mut *mut virStorageVolPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStoragePoolListVolumes(
        pool: virStoragePoolPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStoragePoolLookupByName(
        conn: virConnectPtr,
        name: *const c_char,
    ) -> virStoragePoolPtr;

    #[since(4, 1, 0)]
    pub fn virStoragePoolLookupByTargetPath(
        conn: virConnectPtr,
        path: *const c_char,
    ) -> virStoragePoolPtr;

    #[since(0, 4, 1)]
    pub fn virStoragePoolLookupByUUID(
        conn: virConnectPtr,
        uuid: *const c_uchar,
    ) -> virStoragePoolPtr;

    #[since(0, 4, 1)]
    pub fn virStoragePoolLookupByUUIDString(
        conn: virConnectPtr,
        uuidstr: *const c_char,
    ) -> virStoragePoolPtr;

    #[since(0, 4, 1)]
    pub fn virStoragePoolLookupByVolume(vol: virStorageVolPtr) -> virStoragePoolPtr;

    #[since(0, 4, 1)]
    pub fn virStoragePoolNumOfVolumes(pool: virStoragePoolPtr) -> c_int;

    #[since(0, 6, 0)]
    pub fn virStoragePoolRef(pool: virStoragePoolPtr) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStoragePoolRefresh(pool: virStoragePoolPtr, flags: c_uint) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStoragePoolSetAutostart(pool: virStoragePoolPtr, autostart: c_int) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStoragePoolUndefine(pool: virStoragePoolPtr) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStorageVolCreateXML(
        pool: virStoragePoolPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virStorageVolPtr;

    #[since(0, 6, 4)]
    pub fn virStorageVolCreateXMLFrom(
        pool: virStoragePoolPtr,
        xml_desc: *const c_char,
        clonevol: virStorageVolPtr,
        flags: c_uint,
    ) -> virStorageVolPtr;

    #[since(0, 4, 1)]
    pub fn virStorageVolDelete(vol: virStorageVolPtr, flags: c_uint) -> c_int;

    #[since(0, 9, 0)]
    pub fn virStorageVolDownload(
        vol: virStorageVolPtr,
        stream: virStreamPtr,
        offset: c_ulonglong,
        length: c_ulonglong,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStorageVolFree(vol: virStorageVolPtr) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStorageVolGetConnect(vol: virStorageVolPtr) -> virConnectPtr;

    #[since(0, 4, 1)]
    pub fn virStorageVolGetInfo(vol: virStorageVolPtr, info: virStorageVolInfoPtr) -> c_int;

    #[since(3, 0, 0)]
    pub fn virStorageVolGetInfoFlags(
        vol: virStorageVolPtr,
        info: virStorageVolInfoPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 4, 1)]
    pub fn virStorageVolGetKey(vol: virStorageVolPtr) -> *const c_char;

    #[since(0, 4, 1)]
    pub fn virStorageVolGetName(vol: virStorageVolPtr) -> *const c_char;

    #[since(0, 4, 1)]
    pub fn virStorageVolGetPath(vol: virStorageVolPtr) -> *mut c_char;

    #[since(0, 4, 1)]
    pub fn virStorageVolGetXMLDesc(vol: virStorageVolPtr, flags: c_uint) -> *mut c_char;

    #[since(0, 4, 1)]
    pub fn virStorageVolLookupByKey(conn: virConnectPtr, key: *const c_char) -> virStorageVolPtr;

    #[since(0, 4, 1)]
    pub fn virStorageVolLookupByName(
        pool: virStoragePoolPtr,
        name: *const c_char,
    ) -> virStorageVolPtr;

    #[since(0, 4, 1)]
    pub fn virStorageVolLookupByPath(conn: virConnectPtr, path: *const c_char) -> virStorageVolPtr;

    #[since(0, 6, 0)]
    pub fn virStorageVolRef(vol: virStorageVolPtr) -> c_int;

    #[since(0, 9, 10)]
    pub fn virStorageVolResize(
        vol: virStorageVolPtr,
        capacity: c_ulonglong,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 0)]
    pub fn virStorageVolUpload(
        vol: virStorageVolPtr,
        stream: virStreamPtr,
        offset: c_ulonglong,
        length: c_ulonglong,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 8, 0)]
    pub fn virStorageVolWipe(vol: virStorageVolPtr, flags: c_uint) -> c_int;

    #[since(0, 9, 10)]
    pub fn virStorageVolWipePattern(
        vol: virStorageVolPtr,
        algorithm: c_uint,
        flags: c_uint,
    ) -> c_int;
}
