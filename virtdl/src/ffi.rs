// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

//! C types appearing in the wrapped signatures.
//!
//! Objects and info structures are only ever passed through by pointer, so
//! they are declared opaque here. `virError` is the exception: the dispatch
//! layer reads it to fill an [`ErrorRecord`](crate::ErrorRecord).

#![allow(non_camel_case_types)]

pub use std::ffi::{
    c_char, c_double, c_int, c_longlong, c_uchar, c_uint, c_ulong, c_ulonglong, c_void,
};

macro_rules! opaque {
    ($($name:ident => $ptr:ident),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _data: [u8; 0],
                _marker: core::marker::PhantomData<(*mut u8, core::marker::PhantomPinned)>,
            }

            pub type $ptr = *mut $name;
        )*
    };
}

opaque! {
    virConnect => virConnectPtr,
    virConnectAuth => virConnectAuthPtr,
    virDomain => virDomainPtr,
    virNetwork => virNetworkPtr,
    virNetworkPort => virNetworkPortPtr,
    virInterface => virInterfacePtr,
    virNodeDevice => virNodeDevicePtr,
    virNWFilter => virNWFilterPtr,
    virNWFilterBinding => virNWFilterBindingPtr,
    virSecret => virSecretPtr,
    virDomainSnapshot => virDomainSnapshotPtr,
    virStoragePool => virStoragePoolPtr,
    virStorageVol => virStorageVolPtr,
    virStream => virStreamPtr,
    virTypedParameter => virTypedParameterPtr,
    virSecurityLabel => virSecurityLabelPtr,
    virSecurityModel => virSecurityModelPtr,
    virDomainInfo => virDomainInfoPtr,
    virDomainBlockInfo => virDomainBlockInfoPtr,
    virDomainBlockJobInfo => virDomainBlockJobInfoPtr,
    virDomainBlockStatsStruct => virDomainBlockStatsPtr,
    virDomainControlInfo => virDomainControlInfoPtr,
    virDomainDiskError => virDomainDiskErrorPtr,
    virDomainFSInfo => virDomainFSInfoPtr,
    virDomainIOThreadInfo => virDomainIOThreadInfoPtr,
    virDomainInterface => virDomainInterfacePtr,
    virDomainInterfaceStatsStruct => virDomainInterfaceStatsPtr,
    virDomainJobInfo => virDomainJobInfoPtr,
    virDomainMemoryStatStruct => virDomainMemoryStatPtr,
    virDomainStatsRecord => virDomainStatsRecordPtr,
    virNetworkDHCPLease => virNetworkDHCPLeasePtr,
    virNodeCPUStats => virNodeCPUStatsPtr,
    virNodeInfo => virNodeInfoPtr,
    virNodeMemoryStats => virNodeMemoryStatsPtr,
    virStoragePoolInfo => virStoragePoolInfoPtr,
    virStorageVolInfo => virStorageVolInfoPtr,
    virVcpuInfo => virVcpuInfoPtr,
    virAdmConnect => virAdmConnectPtr,
    virAdmServer => virAdmServerPtr,
    virAdmClient => virAdmClientPtr,
}

pub type virFreeCallback = Option<unsafe extern "C" fn(opaque: *mut c_void)>;

pub type virConnectCloseFunc =
    Option<unsafe extern "C" fn(conn: virConnectPtr, reason: c_int, opaque: *mut c_void)>;

pub type virAdmConnectCloseFunc =
    Option<unsafe extern "C" fn(conn: virAdmConnectPtr, reason: c_int, opaque: *mut c_void)>;

pub type virConnectDomainEventCallback = Option<
    unsafe extern "C" fn(
        conn: virConnectPtr,
        dom: virDomainPtr,
        event: c_int,
        detail: c_int,
        opaque: *mut c_void,
    ) -> c_int,
>;

pub type virConnectDomainEventGenericCallback =
    Option<unsafe extern "C" fn(conn: virConnectPtr, dom: virDomainPtr, opaque: *mut c_void)>;

pub type virConnectNetworkEventGenericCallback =
    Option<unsafe extern "C" fn(conn: virConnectPtr, net: virNetworkPtr, opaque: *mut c_void)>;

pub type virConnectStoragePoolEventGenericCallback = Option<
    unsafe extern "C" fn(conn: virConnectPtr, pool: virStoragePoolPtr, opaque: *mut c_void),
>;

pub type virConnectNodeDeviceEventGenericCallback =
    Option<unsafe extern "C" fn(conn: virConnectPtr, dev: virNodeDevicePtr, opaque: *mut c_void)>;

pub type virConnectSecretEventGenericCallback =
    Option<unsafe extern "C" fn(conn: virConnectPtr, secret: virSecretPtr, opaque: *mut c_void)>;

pub type virStreamEventCallback =
    Option<unsafe extern "C" fn(stream: virStreamPtr, events: c_int, opaque: *mut c_void)>;

pub type virStreamSinkFunc = Option<
    unsafe extern "C" fn(
        st: virStreamPtr,
        data: *const c_char,
        nbytes: usize,
        opaque: *mut c_void,
    ) -> c_int,
>;

pub type virStreamSourceFunc = Option<
    unsafe extern "C" fn(
        st: virStreamPtr,
        data: *mut c_char,
        nbytes: usize,
        opaque: *mut c_void,
    ) -> c_int,
>;

pub type virStreamSinkHoleFunc = Option<
    unsafe extern "C" fn(st: virStreamPtr, length: c_longlong, opaque: *mut c_void) -> c_int,
>;

pub type virStreamSourceHoleFunc = Option<
    unsafe extern "C" fn(
        st: virStreamPtr,
        in_data: *mut c_int,
        length: *mut c_longlong,
        opaque: *mut c_void,
    ) -> c_int,
>;

pub type virStreamSourceSkipFunc = Option<
    unsafe extern "C" fn(st: virStreamPtr, length: c_longlong, opaque: *mut c_void) -> c_int,
>;

pub type virConnectDomainQemuMonitorEventCallback = Option<
    unsafe extern "C" fn(
        conn: virConnectPtr,
        dom: virDomainPtr,
        event: *const c_char,
        seconds: c_longlong,
        micros: c_uint,
        details: *const c_char,
        opaque: *mut c_void,
    ),
>;

/// `virErrorLevel`
pub const VIR_ERR_NONE: c_int = 0;
pub const VIR_ERR_WARNING: c_int = 1;
pub const VIR_ERR_ERROR: c_int = 2;

/// `virErrorNumber` used for locally synthesized errors.
pub const VIR_ERR_OK: c_int = 0;
pub const VIR_ERR_INTERNAL_ERROR: c_int = 1;

/// `virErrorDomain` used for locally synthesized errors.
pub const VIR_FROM_NONE: c_int = 0;

/// `struct _virError` as laid out by libvirt.
#[repr(C)]
#[derive(Debug)]
pub struct virError {
    pub code: c_int,
    pub domain: c_int,
    pub message: *mut c_char,
    pub level: c_int,
    pub conn: virConnectPtr,
    pub dom: virDomainPtr,
    pub str1: *mut c_char,
    pub str2: *mut c_char,
    pub str3: *mut c_char,
    pub int1: c_int,
    pub int2: c_int,
    pub net: virNetworkPtr,
}

pub type virErrorPtr = *mut virError;
