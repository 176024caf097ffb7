// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

// Connection, node and capability functions.

#[library(Libvirt, link = "virt")]
unsafe extern "C" {
    #[since(0, 7, 7)]
    pub fn virConnectBaselineCPU(
        conn: virConnectPtr,
        xml_cpus: *mut *const c_char,
        ncpus: c_uint,
        flags: c_uint,
    ) -> *mut c_char;

    #[since(4, 4, 0)]
    pub fn virConnectBaselineHypervisorCPU(
        conn: virConnectPtr,
        emulator: *const c_char,
        arch: *const c_char,
        machine: *const c_char,
        virttype: *const c_char,
        xml_cpus: *mut *const c_char,
        ncpus: c_uint,
        flags: c_uint,
    ) -> *mut c_char;

    #[since(0, 0, 3)]
    pub fn virConnectClose(conn: virConnectPtr) -> c_int;

    #[since(0, 7, 5)]
    pub fn virConnectCompareCPU(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(4, 4, 0)]
    pub fn virConnectCompareHypervisorCPU(
        conn: virConnectPtr,
        emulator: *const c_char,
        arch: *const c_char,
        machine: *const c_char,
        virttype: *const c_char,
        xml_cpu: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 1, 3)]
    pub fn virConnectGetCPUModelNames(
        conn: virConnectPtr,
        arch: *const c_char,
        models: *mut *mut *mut c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 2, 1)]
    pub fn virConnectGetCapabilities(conn: virConnectPtr) -> *mut c_char;

    #[since(0, 3, 0)]
    pub fn virConnectGetHostname(conn: virConnectPtr) -> *mut c_char;

    #[since(0, 7, 3)]
    pub fn virConnectGetLibVersion(conn: virConnectPtr, lib_ver: *mut c_ulong) -> c_int;

    #[since(0, 2, 1)]
    pub fn virConnectGetMaxVcpus(conn: virConnectPtr, type_: *const c_char) -> c_int;

    #[since(0, 8, 8)]
    pub fn virConnectGetSysinfo(conn: virConnectPtr, flags: c_uint) -> *mut c_char;

    #[since(0, 0, 3)]
    pub fn virConnectGetType(conn: virConnectPtr) -> *const c_char;

    #[since(0, 3, 0)]
    pub fn virConnectGetURI(conn: virConnectPtr) -> *mut c_char;

    #[since(0, 0, 3)]
    pub fn virConnectGetVersion(conn: virConnectPtr, hv_ver: *mut c_ulong) -> c_int;

    #[since(0, 9, 8)]
    pub fn virConnectIsAlive(conn: virConnectPtr) -> c_int;

    #[since(0, 7, 3)]
    pub fn virConnectIsEncrypted(conn: virConnectPtr) -> c_int;

    #[since(0, 7, 3)]
    pub fn virConnectIsSecure(conn: virConnectPtr) -> c_int;

    #[since(0, 0, 3)]
    pub fn virConnectOpen(name: *const c_char) -> virConnectPtr;

    #[since(0, 4, 0)]
    pub fn virConnectOpenAuth(
        name: *const c_char,
        auth: virConnectAuthPtr,
        flags: c_uint,
    ) -> virConnectPtr;

    #[since(0, 0, 3)]
    pub fn virConnectOpenReadOnly(name: *const c_char) -> virConnectPtr;

    #[since(0, 6, 0)]
    pub fn virConnectRef(conn: virConnectPtr) -> c_int;

    #[since(0, 10, 0)]
    pub fn virConnectRegisterCloseCallback(
        conn: virConnectPtr,
        cb: virConnectCloseFunc,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int;

    #[since(5, 8, 0)]
    pub fn virConnectSetIdentity(
        conn: virConnectPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 8)]
    pub fn virConnectSetKeepAlive(conn: virConnectPtr, interval: c_int, count: c_uint) -> c_int;

    #[since(0, 10, 0)]
    pub fn virConnectUnregisterCloseCallback(conn: virConnectPtr, cb: virConnectCloseFunc) -> c_int;

    #[since(0, 0, 3)]
    pub fn virGetVersion(
        lib_ver: *mut c_ulong,
        type_: *const c_char,
        type_ver: *mut c_ulong,
    ) -> c_int;

    #[since(0, 1, 0)]
    pub fn virInitialize() -> c_int;

    #[since(1, 2, 9)]
    pub fn virNodeAllocPages(
        conn: virConnectPtr,
        npages: c_uint,
        page_sizes: *mut c_uint,
        page_counts: *mut c_ulonglong,
        start_cell: c_int,
        cell_count: c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 0, 0)]
    pub fn virNodeGetCPUMap(
        conn: virConnectPtr,
        cpumap: *mut *mut c_uchar,
        online: *mut c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 3)]
    pub fn virNodeGetCPUStats(
        conn: virConnectPtr,
        cpu_num: c_int,
        params: virNodeCPUStatsPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 3, 3)]
    pub fn virNodeGetCellsFreeMemory(
        conn: virConnectPtr,
        free_mems: *mut c_ulonglong,
        start_cell: c_int,
        max_cells: c_int,
    ) -> c_int;

    #[since(0, 3, 3)]
    pub fn virNodeGetFreeMemory(conn: virConnectPtr) -> c_ulonglong;

    #[since(1, 2, 6)]
    pub fn virNodeGetFreePages(
        conn: virConnectPtr,
        npages: c_uint,
        pages: *mut c_uint,
        start_cell: c_int,
        cell_count: c_uint,
        counts: *mut c_ulonglong,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 1, 0)]
    pub fn virNodeGetInfo(conn: virConnectPtr, info: virNodeInfoPtr) -> c_int;

    #[since(0, 10, 2)]
    pub fn virNodeGetMemoryParameters(
        conn: virConnectPtr,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 3)]
    pub fn virNodeGetMemoryStats(
        conn: virConnectPtr,
        cell_num: c_int,
        params: virNodeMemoryStatsPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(4, 5, 0)]
    pub fn virNodeGetSEVInfo(
        conn: virConnectPtr,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 6, 1)]
    pub fn virNodeGetSecurityModel(conn: virConnectPtr, secmodel: virSecurityModelPtr) -> c_int;

    #[since(0, 10, 2)]
    pub fn virNodeSetMemoryParameters(
        conn: virConnectPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 8)]
    pub fn virNodeSuspendForDuration(
        conn: virConnectPtr,
        target: c_uint,
        duration: c_ulonglong,
        flags: c_uint,
    ) -> c_int;
}
