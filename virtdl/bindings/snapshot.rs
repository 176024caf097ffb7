// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

// Domain snapshot functions.

#[library(Libvirt, link = "virt")]
unsafe extern "C" {
    #[since(0, 8, 0)]
    pub fn virDomainHasCurrentSnapshot(domain: virDomainPtr, flags: c_uint) -> c_int;

    #[since(0, 9, 13)]
    pub fn virDomainListAllSnapshots(
        domain: virDomainPtr,
        snaps: *mut *mut virDomainSnapshotPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 8, 0)]
    pub fn virDomainRevertToSnapshot(snapshot: virDomainSnapshotPtr, flags: c_uint) -> c_int;

    #[since(0, 8, 0)]
    pub fn virDomainSnapshotCreateXML(
        domain: virDomainPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virDomainSnapshotPtr;

    #[since(0, 8, 0)]
    pub fn virDomainSnapshotCurrent(domain: virDomainPtr, flags: c_uint) -> virDomainSnapshotPtr;

    #[since(0, 8, 0)]
    pub fn virDomainSnapshotDelete(snapshot: virDomainSnapshotPtr, flags: c_uint) -> c_int;

    #[since(0, 8, 0)]
    pub fn virDomainSnapshotFree(snapshot: virDomainSnapshotPtr) -> c_int;

    #[since(0, 9, 5)]
    pub fn virDomainSnapshotGetConnect(snapshot: virDomainSnapshotPtr) -> virConnectPtr;

    #[since(0, 9, 5)]
    pub fn virDomainSnapshotGetDomain(snapshot: virDomainSnapshotPtr) -> virDomainPtr;

    #[since(0, 9, 5)]
    pub fn virDomainSnapshotGetName(snapshot: virDomainSnapshotPtr) -> *const c_char;

    #[since(0, 9, 7)]
    pub fn virDomainSnapshotGetParent(
        snapshot: virDomainSnapshotPtr,
        flags: c_uint,
    ) -> virDomainSnapshotPtr;

    #[since(0, 8, 0)]
    pub fn virDomainSnapshotGetXMLDesc(
        snapshot: virDomainSnapshotPtr,
        flags: c_uint,
    ) -> *mut c_char;

    #[since(0, 9, 13)]
    pub fn virDomainSnapshotHasMetadata(snapshot: virDomainSnapshotPtr, flags: c_uint) -> c_int;

    #[since(0, 9, 13)]
    pub fn virDomainSnapshotIsCurrent(snapshot: virDomainSnapshotPtr, flags: c_uint) -> c_int;

    #[since(0, 9, 13)]
    pub fn virDomainSnapshotListAllChildren(
        snapshot: virDomainSnapshotPtr,
        snaps: *mut *mut virDomainSnapshotPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 7)]
    pub fn virDomainSnapshotListChildrenNames(
        snapshot: virDomainSnapshotPtr,
        names: *mut *mut c_char,
        nameslen: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 8, 0)]
    pub fn virDomainSnapshotListNames(
        domain: virDomainPtr,
        names: *mut *mut c_char,
        nameslen: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 8, 0)]
    pub fn virDomainSnapshotLookupByName(
        domain: virDomainPtr,
        name: *const c_char,
        flags: c_uint,
    ) -> virDomainSnapshotPtr;

    #[since(0, 8, 0)]
    pub fn virDomainSnapshotNum(domain: virDomainPtr, flags: c_uint) -> c_int;

    #[since(0, 9, 7)]
    pub fn virDomainSnapshotNumChildren(snapshot: virDomainSnapshotPtr, flags: c_uint) -> c_int;

    #[since(0, 9, 13)]
    pub fn virDomainSnapshotRef(snapshot: virDomainSnapshotPtr) -> c_int;
}
