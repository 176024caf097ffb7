// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

// Domain lifecycle, device and job functions.

#[library(Libvirt, link = "virt")]
unsafe extern "C" {
    #[since(0, 5, 0)]
    pub fn virConnectDomainEventDeregister(
        conn: virConnectPtr,
        cb: virConnectDomainEventCallback,
    ) -> c_int;

    #[since(0, 8, 0)]
    pub fn virConnectDomainEventDeregisterAny(conn: virConnectPtr, callback_id: c_int) -> c_int;

    #[since(0, 5, 0)]
    pub fn virConnectDomainEventRegister(
        conn: virConnectPtr,
        cb: virConnectDomainEventCallback,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int;

    #[since(0, 8, 0)]
    pub fn virConnectDomainEventRegisterAny(
        conn: virConnectPtr,
        dom: virDomainPtr,
        event_id: c_int,
        cb: virConnectDomainEventGenericCallback,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int;

    #[since(0, 6, 4)]
    pub fn virConnectDomainXMLFromNative(
        conn: virConnectPtr,
        native_format: *const c_char,
        native_config: *const c_char,
        flags: c_uint,
    ) -> *mut c_char;

    #[since(0, 6, 4)]
    pub fn virConnectDomainXMLToNative(
        conn: virConnectPtr,
        native_format: *const c_char,
        domain_xml: *const c_char,
        flags: c_uint,
    ) -> *mut c_char;

    #[since(1, 2, 8)]
    pub fn virConnectGetAllDomainStats(
        conn: virConnectPtr,
        stats: c_uint,
        ret_stats: *mut *mut virDomainStatsRecordPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 2, 7)]
    pub fn virConnectGetDomainCapabilities(
        conn: virConnectPtr,
        emulatorbin: *const c_char,
        arch: *const c_char,
        machine: *const c_char,
        virttype: *const c_char,
        flags: c_uint,
    ) -> *mut c_char;

    #[since(0, 9, 13)]
    pub fn virConnectListAllDomains(
        conn: virConnectPtr,
        domains: *mut *mut virDomainPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 1, 1)]
    pub fn virConnectListDefinedDomains(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int;

    #[since(0, 0, 3)]
    pub fn virConnectListDomains(conn: virConnectPtr, ids: *mut c_int, maxids: c_int) -> c_int;

    #[since(0, 1, 5)]
    pub fn virConnectNumOfDefinedDomains(conn: virConnectPtr) -> c_int;

    #[since(0, 0, 3)]
    pub fn virConnectNumOfDomains(conn: virConnectPtr) -> c_int;

    #[since(0, 7, 7)]
    pub fn virDomainAbortJob(domain: virDomainPtr) -> c_int;

    #[since(8, 5, 0)]
    pub fn virDomainAbortJobFlags(domain: virDomainPtr, flags: c_uint) -> c_int;

    #[since(1, 2, 15)]
    pub fn virDomainAddIOThread(domain: virDomainPtr, iothread_id: c_uint, flags: c_uint) -> c_int;

    #[since(5, 10, 0)]
    pub fn virDomainAgentSetResponseTimeout(
        domain: virDomainPtr,
        timeout: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 1, 9)]
    pub fn virDomainAttachDevice(domain: virDomainPtr, xml: *const c_char) -> c_int;

    #[since(0, 7, 7)]
    pub fn virDomainAttachDeviceFlags(
        domain: virDomainPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(6, 10, 0)]
    pub fn virDomainAuthorizedSSHKeysGet(
        domain: virDomainPtr,
        user: *const c_char,
        keys: *mut *mut *mut c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(6, 10, 0)]
    pub fn virDomainAuthorizedSSHKeysSet(
        domain: virDomainPtr,
        user: *const c_char,
        keys: *mut *const c_char,
        nkeys: c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(6, 0, 0)]
    pub fn virDomainBackupBegin(
        domain: virDomainPtr,
        backup_xml: *const c_char,
        checkpoint_xml: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(6, 0, 0)]
    pub fn virDomainBackupGetXMLDesc(domain: virDomainPtr, flags: c_uint) -> *mut c_char;

    #[since(0, 10, 2)]
    pub fn virDomainBlockCommit(
        dom: virDomainPtr,
        disk: *const c_char,
        base: *const c_char,
        top: *const c_char,
        bandwidth: c_ulong,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 2, 8)]
    pub fn virDomainBlockCopy(
        dom: virDomainPtr,
        disk: *const c_char,
        destxml: *const c_char,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 4)]
    pub fn virDomainBlockJobAbort(dom: virDomainPtr, disk: *const c_char, flags: c_uint) -> c_int;

    #[since(0, 9, 4)]
    pub fn virDomainBlockJobSetSpeed(
        dom: virDomainPtr,
        disk: *const c_char,
        bandwidth: c_ulong,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 4, 2)]
    pub fn virDomainBlockPeek(
        dom: virDomainPtr,
        disk: *const c_char,
        offset: c_ulonglong,
        size: usize,
        buffer: *mut c_void,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 4)]
    pub fn virDomainBlockPull(
        dom: virDomainPtr,
        disk: *const c_char,
        bandwidth: c_ulong,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 10)]
    pub fn virDomainBlockRebase(
        dom: virDomainPtr,
        disk: *const c_char,
        base: *const c_char,
        bandwidth: c_ulong,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 8)]
    pub fn virDomainBlockResize(
        dom: virDomainPtr,
        disk: *const c_char,
        size: c_ulonglong,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 3, 2)]
    pub fn virDomainBlockStats(
        dom: virDomainPtr,
        disk: *const c_char,
        stats: virDomainBlockStatsPtr,
        size: usize,
    ) -> c_int;

    #[since(0, 9, 5)]
    pub fn virDomainBlockStatsFlags(
        dom: virDomainPtr,
        disk: *const c_char,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 1, 9)]
    pub fn virDomainCoreDump(domain: virDomainPtr, to: *const c_char, flags: c_uint) -> c_int;

    #[since(1, 2, 3)]
    pub fn virDomainCoreDumpWithFormat(
        domain: virDomainPtr,
        to: *const c_char,
        dumpformat: c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 1, 1)]
    pub fn virDomainCreate(domain: virDomainPtr) -> c_int;

    #[since(0, 0, 3)]
    pub fn virDomainCreateLinux(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virDomainPtr;

    #[since(1, 1, 1)]
    pub fn virDomainCreateWithFiles(
        domain: virDomainPtr,
        nfiles: c_uint,
        files: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 8, 2)]
    pub fn virDomainCreateWithFlags(domain: virDomainPtr, flags: c_uint) -> c_int;

    #[since(0, 5, 0)]
    pub fn virDomainCreateXML(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virDomainPtr;

    #[since(1, 1, 1)]
    pub fn virDomainCreateXMLWithFiles(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        nfiles: c_uint,
        files: *mut c_int,
        flags: c_uint,
    ) -> virDomainPtr;

    #[since(0, 1, 1)]
    pub fn virDomainDefineXML(conn: virConnectPtr, xml: *const c_char) -> virDomainPtr;

    #[since(1, 2, 12)]
    pub fn virDomainDefineXMLFlags(
        conn: virConnectPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> virDomainPtr;

    #[since(1, 2, 15)]
    pub fn virDomainDelIOThread(domain: virDomainPtr, iothread_id: c_uint, flags: c_uint) -> c_int;

    #[since(11, 2, 0)]
    pub fn virDomainDelThrottleGroup(
        dom: virDomainPtr,
        group: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 0, 3)]
    pub fn virDomainDestroy(domain: virDomainPtr) -> c_int;

    #[since(0, 9, 4)]
    pub fn virDomainDestroyFlags(domain: virDomainPtr, flags: c_uint) -> c_int;

    #[since(0, 1, 9)]
    pub fn virDomainDetachDevice(domain: virDomainPtr, xml: *const c_char) -> c_int;

    #[since(4, 4, 0)]
    pub fn virDomainDetachDeviceAlias(
        domain: virDomainPtr,
        alias: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 7, 7)]
    pub fn virDomainDetachDeviceFlags(
        domain: virDomainPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(9, 0, 0)]
    pub fn virDomainFDAssociate(
        domain: virDomainPtr,
        name: *const c_char,
        nfds: c_uint,
        fds: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 2, 5)]
    pub fn virDomainFSFreeze(
        dom: virDomainPtr,
        mountpoints: *mut *const c_char,
        nmountpoints: c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 2, 11)]
    pub fn virDomainFSInfoFree(info: virDomainFSInfoPtr);

    #[since(1, 2, 5)]
    pub fn virDomainFSThaw(
        dom: virDomainPtr,
        mountpoints: *mut *const c_char,
        nmountpoints: c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 0, 1)]
    pub fn virDomainFSTrim(
        dom: virDomainPtr,
        mount_point: *const c_char,
        minimum: c_ulonglong,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 0, 3)]
    pub fn virDomainFree(domain: virDomainPtr) -> c_int;

    #[since(0, 2, 1)]
    pub fn virDomainGetAutostart(domain: virDomainPtr, autostart: *mut c_int) -> c_int;

    #[since(11, 2, 0)]
    pub fn virDomainGetAutostartOnce(domain: virDomainPtr, autostart: *mut c_int) -> c_int;

    #[since(0, 9, 0)]
    pub fn virDomainGetBlkioParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 8, 1)]
    pub fn virDomainGetBlockInfo(
        domain: virDomainPtr,
        disk: *const c_char,
        info: virDomainBlockInfoPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 8)]
    pub fn virDomainGetBlockIoTune(
        dom: virDomainPtr,
        disk: *const c_char,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 4)]
    pub fn virDomainGetBlockJobInfo(
        dom: virDomainPtr,
        disk: *const c_char,
        info: virDomainBlockJobInfoPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 10)]
    pub fn virDomainGetCPUStats(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_uint,
        start_cpu: c_int,
        ncpus: c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 3, 0)]
    pub fn virDomainGetConnect(dom: virDomainPtr) -> virConnectPtr;

    #[since(0, 9, 3)]
    pub fn virDomainGetControlInfo(
        domain: virDomainPtr,
        info: virDomainControlInfoPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 10)]
    pub fn virDomainGetDiskErrors(
        dom: virDomainPtr,
        errors: virDomainDiskErrorPtr,
        maxerrors: c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 10, 0)]
    pub fn virDomainGetEmulatorPinInfo(
        domain: virDomainPtr,
        cpumap: *mut c_uchar,
        maplen: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 2, 11)]
    pub fn virDomainGetFSInfo(
        dom: virDomainPtr,
        info: *mut *mut virDomainFSInfoPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(5, 7, 0)]
    pub fn virDomainGetGuestInfo(
        domain: virDomainPtr,
        types: c_uint,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(2, 0, 0)]
    pub fn virDomainGetGuestVcpus(
        domain: virDomainPtr,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 10, 0)]
    pub fn virDomainGetHostname(domain: virDomainPtr, flags: c_uint) -> *mut c_char;

    #[since(0, 0, 3)]
    pub fn virDomainGetID(domain: virDomainPtr) -> c_uint;

    #[since(1, 2, 14)]
    pub fn virDomainGetIOThreadInfo(
        dom: virDomainPtr,
        info: *mut *mut virDomainIOThreadInfoPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 0, 3)]
    pub fn virDomainGetInfo(domain: virDomainPtr, info: virDomainInfoPtr) -> c_int;

    #[since(0, 9, 9)]
    pub fn virDomainGetInterfaceParameters(
        domain: virDomainPtr,
        device: *const c_char,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 7, 7)]
    pub fn virDomainGetJobInfo(domain: virDomainPtr, info: virDomainJobInfoPtr) -> c_int;

    #[since(1, 0, 3)]
    pub fn virDomainGetJobStats(
        domain: virDomainPtr,
        type_: *mut c_int,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(4, 5, 0)]
    pub fn virDomainGetLaunchSecurityInfo(
        domain: virDomainPtr,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 0, 3)]
    pub fn virDomainGetMaxMemory(domain: virDomainPtr) -> c_ulong;

    #[since(0, 2, 1)]
    pub fn virDomainGetMaxVcpus(domain: virDomainPtr) -> c_int;

    #[since(0, 8, 5)]
    pub fn virDomainGetMemoryParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(7, 1, 0)]
    pub fn virDomainGetMessages(
        domain: virDomainPtr,
        msgs: *mut *mut *mut c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 10)]
    pub fn virDomainGetMetadata(
        domain: virDomainPtr,
        type_: c_int,
        uri: *const c_char,
        flags: c_uint,
    ) -> *mut c_char;

    #[since(0, 0, 3)]
    pub fn virDomainGetName(domain: virDomainPtr) -> *const c_char;

    #[since(0, 9, 9)]
    pub fn virDomainGetNumaParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 0, 3)]
    pub fn virDomainGetOSType(domain: virDomainPtr) -> *mut c_char;

    #[since(1, 3, 3)]
    pub fn virDomainGetPerfEvents(
        domain: virDomainPtr,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 2, 3)]
    pub fn virDomainGetSchedulerParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
    ) -> c_int;

    #[since(0, 9, 2)]
    pub fn virDomainGetSchedulerParametersFlags(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 2, 3)]
    pub fn virDomainGetSchedulerType(domain: virDomainPtr, nparams: *mut c_int) -> *mut c_char;

    #[since(0, 6, 1)]
    pub fn virDomainGetSecurityLabel(domain: virDomainPtr, seclabel: virSecurityLabelPtr) -> c_int;

    #[since(0, 10, 0)]
    pub fn virDomainGetSecurityLabelList(
        domain: virDomainPtr,
        seclabels: *mut virSecurityLabelPtr,
    ) -> c_int;

    #[since(0, 9, 2)]
    pub fn virDomainGetState(
        domain: virDomainPtr,
        state: *mut c_int,
        reason: *mut c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 2, 5)]
    pub fn virDomainGetTime(
        dom: virDomainPtr,
        seconds: *mut c_longlong,
        nseconds: *mut c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 0, 5)]
    pub fn virDomainGetUUID(domain: virDomainPtr, uuid: *mut c_uchar) -> c_int;

    #[since(0, 1, 1)]
    pub fn virDomainGetUUIDString(domain: virDomainPtr, buf: *mut c_char) -> c_int;

    #[since(0, 9, 3)]
    pub fn virDomainGetVcpuPinInfo(
        domain: virDomainPtr,
        ncpumaps: c_int,
        cpumaps: *mut c_uchar,
        maplen: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 1, 4)]
    pub fn virDomainGetVcpus(
        domain: virDomainPtr,
        info: virVcpuInfoPtr,
        maxinfo: c_int,
        cpumaps: *mut c_uchar,
        maplen: c_int,
    ) -> c_int;

    #[since(0, 8, 5)]
    pub fn virDomainGetVcpusFlags(domain: virDomainPtr, flags: c_uint) -> c_int;

    #[since(0, 0, 3)]
    pub fn virDomainGetXMLDesc(domain: virDomainPtr, flags: c_uint) -> *mut c_char;

    #[since(10, 2, 0)]
    pub fn virDomainGraphicsReload(domain: virDomainPtr, type_: c_uint, flags: c_uint) -> c_int;

    #[since(0, 8, 0)]
    pub fn virDomainHasManagedSaveImage(dom: virDomainPtr, flags: c_uint) -> c_int;

    #[since(1, 2, 14)]
    pub fn virDomainIOThreadInfoFree(info: virDomainIOThreadInfoPtr);

    #[since(0, 9, 2)]
    pub fn virDomainInjectNMI(domain: virDomainPtr, flags: c_uint) -> c_int;

    #[since(1, 2, 14)]
    pub fn virDomainInterfaceAddresses(
        dom: virDomainPtr,
        ifaces: *mut *mut virDomainInterfacePtr,
        source: c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 2, 14)]
    pub fn virDomainInterfaceFree(iface: virDomainInterfacePtr);

    #[since(0, 3, 2)]
    pub fn virDomainInterfaceStats(
        dom: virDomainPtr,
        device: *const c_char,
        stats: virDomainInterfaceStatsPtr,
        size: usize,
    ) -> c_int;

    #[since(0, 7, 3)]
    pub fn virDomainIsActive(dom: virDomainPtr) -> c_int;

    #[since(0, 7, 3)]
    pub fn virDomainIsPersistent(dom: virDomainPtr) -> c_int;

    #[since(0, 8, 6)]
    pub fn virDomainIsUpdated(dom: virDomainPtr) -> c_int;

    #[since(1, 2, 8)]
    pub fn virDomainListGetStats(
        doms: *mut virDomainPtr,
        stats: c_uint,
        ret_stats: *mut *mut virDomainStatsRecordPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 0, 3)]
    pub fn virDomainLookupByID(conn: virConnectPtr, id: c_int) -> virDomainPtr;

    #[since(0, 0, 3)]
    pub fn virDomainLookupByName(conn: virConnectPtr, name: *const c_char) -> virDomainPtr;

    #[since(0, 0, 5)]
    pub fn virDomainLookupByUUID(conn: virConnectPtr, uuid: *const c_uchar) -> virDomainPtr;

    #[since(0, 1, 1)]
    pub fn virDomainLookupByUUIDString(conn: virConnectPtr, uuidstr: *const c_char) -> virDomainPtr;

    #[since(0, 8, 0)]
    pub fn virDomainManagedSave(dom: virDomainPtr, flags: c_uint) -> c_int;

    #[since(3, 7, 0)]
    pub fn virDomainManagedSaveDefineXML(
        domain: virDomainPtr,
        dxml: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(3, 7, 0)]
    pub fn virDomainManagedSaveGetXMLDesc(domain: virDomainPtr, flags: c_uint) -> *mut c_char;

    #[since(0, 8, 0)]
    pub fn virDomainManagedSaveRemove(dom: virDomainPtr, flags: c_uint) -> c_int;

    #[since(0, 4, 2)]
    pub fn virDomainMemoryPeek(
        dom: virDomainPtr,
        start: c_ulonglong,
        size: usize,
        buffer: *mut c_void,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 7, 5)]
    pub fn virDomainMemoryStats(
        dom: virDomainPtr,
        stats: virDomainMemoryStatPtr,
        nr_stats: c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 3, 2)]
    pub fn virDomainMigrate(
        domain: virDomainPtr,
        dconn: virConnectPtr,
        flags: c_ulong,
        dname: *const c_char,
        uri: *const c_char,
        bandwidth: c_ulong,
    ) -> virDomainPtr;

    #[since(0, 9, 2)]
    pub fn virDomainMigrate2(
        domain: virDomainPtr,
        dconn: virConnectPtr,
        dxml: *const c_char,
        flags: c_ulong,
        dname: *const c_char,
        uri: *const c_char,
        bandwidth: c_ulong,
    ) -> virDomainPtr;

    #[since(1, 1, 0)]
    pub fn virDomainMigrate3(
        domain: virDomainPtr,
        dconn: virConnectPtr,
        params: virTypedParameterPtr,
        nparams: c_uint,
        flags: c_uint,
    ) -> virDomainPtr;

    #[since(1, 0, 3)]
    pub fn virDomainMigrateGetCompressionCache(
        domain: virDomainPtr,
        cache_size: *mut c_ulonglong,
        flags: c_uint,
    ) -> c_int;

    #[since(3, 7, 0)]
    pub fn virDomainMigrateGetMaxDowntime(
        domain: virDomainPtr,
        downtime: *mut c_ulonglong,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 5)]
    pub fn virDomainMigrateGetMaxSpeed(
        domain: virDomainPtr,
        bandwidth: *mut c_ulong,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 0, 3)]
    pub fn virDomainMigrateSetCompressionCache(
        domain: virDomainPtr,
        cache_size: c_ulonglong,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 8, 0)]
    pub fn virDomainMigrateSetMaxDowntime(
        domain: virDomainPtr,
        downtime: c_ulonglong,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 0)]
    pub fn virDomainMigrateSetMaxSpeed(
        domain: virDomainPtr,
        bandwidth: c_ulong,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 3, 3)]
    pub fn virDomainMigrateStartPostCopy(domain: virDomainPtr, flags: c_uint) -> c_int;

    #[since(0, 7, 2)]
    pub fn virDomainMigrateToURI(
        domain: virDomainPtr,
        duri: *const c_char,
        flags: c_ulong,
        dname: *const c_char,
        bandwidth: c_ulong,
    ) -> c_int;

    #[since(0, 9, 2)]
    pub fn virDomainMigrateToURI2(
        domain: virDomainPtr,
        dconnuri: *const c_char,
        miguri: *const c_char,
        dxml: *const c_char,
        flags: c_ulong,
        dname: *const c_char,
        bandwidth: c_ulong,
    ) -> c_int;

    #[since(1, 1, 0)]
    pub fn virDomainMigrateToURI3(
        domain: virDomainPtr,
        dconnuri: *const c_char,
        params: virTypedParameterPtr,
        nparams: c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virDomainOpenChannel(
        dom: virDomainPtr,
        name: *const c_char,
        st: virStreamPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 8, 6)]
    pub fn virDomainOpenConsole(
        dom: virDomainPtr,
        dev_name: *const c_char,
        st: virStreamPtr,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 7)]
    pub fn virDomainOpenGraphics(dom: virDomainPtr, idx: c_uint, fd: c_int, flags: c_uint) -> c_int;

    #[since(1, 2, 8)]
    pub fn virDomainOpenGraphicsFD(dom: virDomainPtr, idx: c_uint, flags: c_uint) -> c_int;

    #[since(0, 9, 10)]
    pub fn virDomainPMSuspendForDuration(
        dom: virDomainPtr,
        target: c_uint,
        duration: c_ulonglong,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 11)]
    pub fn virDomainPMWakeup(dom: virDomainPtr, flags: c_uint) -> c_int;

    #[since(0, 10, 0)]
    pub fn virDomainPinEmulator(
        domain: virDomainPtr,
        cpumap: *mut c_uchar,
        maplen: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 2, 14)]
    pub fn virDomainPinIOThread(
        domain: virDomainPtr,
        iothread_id: c_uint,
        cpumap: *mut c_uchar,
        maplen: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 1, 4)]
    pub fn virDomainPinVcpu(
        domain: virDomainPtr,
        vcpu: c_uint,
        cpumap: *mut c_uchar,
        maplen: c_int,
    ) -> c_int;

    #[since(0, 9, 3)]
    pub fn virDomainPinVcpuFlags(
        domain: virDomainPtr,
        vcpu: c_uint,
        cpumap: *mut c_uchar,
        maplen: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 1, 0)]
    pub fn virDomainReboot(domain: virDomainPtr, flags: c_uint) -> c_int;

    #[since(0, 6, 0)]
    pub fn virDomainRef(domain: virDomainPtr) -> c_int;

    #[since(1, 2, 19)]
    pub fn virDomainRename(dom: virDomainPtr, new_name: *const c_char, flags: c_uint) -> c_int;

    #[since(0, 9, 7)]
    pub fn virDomainReset(domain: virDomainPtr, flags: c_uint) -> c_int;

    #[since(0, 0, 3)]
    pub fn virDomainRestore(conn: virConnectPtr, from: *const c_char) -> c_int;

    #[since(0, 9, 4)]
    pub fn virDomainRestoreFlags(
        conn: virConnectPtr,
        from: *const c_char,
        dxml: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(8, 4, 0)]
    pub fn virDomainRestoreParams(
        conn: virConnectPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 0, 3)]
    pub fn virDomainResume(domain: virDomainPtr) -> c_int;

    #[since(0, 0, 3)]
    pub fn virDomainSave(domain: virDomainPtr, to: *const c_char) -> c_int;

    #[since(0, 9, 4)]
    pub fn virDomainSaveFlags(
        domain: virDomainPtr,
        to: *const c_char,
        dxml: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 4)]
    pub fn virDomainSaveImageDefineXML(
        conn: virConnectPtr,
        file: *const c_char,
        dxml: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 4)]
    pub fn virDomainSaveImageGetXMLDesc(
        conn: virConnectPtr,
        file: *const c_char,
        flags: c_uint,
    ) -> *mut c_char;

    #[since(8, 4, 0)]
    pub fn virDomainSaveParams(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 2)]
    pub fn virDomainScreenshot(
        domain: virDomainPtr,
        stream: virStreamPtr,
        screen: c_uint,
        flags: c_uint,
    ) -> *mut c_char;

    #[since(0, 9, 3)]
    pub fn virDomainSendKey(
        domain: virDomainPtr,
        codeset: c_uint,
        holdtime: c_uint,
        keycodes: *mut c_uint,
        nkeycodes: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 0, 1)]
    pub fn virDomainSendProcessSignal(
        domain: virDomainPtr,
        pid_value: c_longlong,
        signum: c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 2, 1)]
    pub fn virDomainSetAutostart(domain: virDomainPtr, autostart: c_int) -> c_int;

    #[since(11, 2, 0)]
    pub fn virDomainSetAutostartOnce(domain: virDomainPtr, autostart: c_int) -> c_int;

    #[since(0, 9, 0)]
    pub fn virDomainSetBlkioParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 8)]
    pub fn virDomainSetBlockIoTune(
        dom: virDomainPtr,
        disk: *const c_char,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(3, 1, 0)]
    pub fn virDomainSetBlockThreshold(
        domain: virDomainPtr,
        dev: *const c_char,
        threshold: c_ulonglong,
        flags: c_uint,
    ) -> c_int;

    #[since(2, 0, 0)]
    pub fn virDomainSetGuestVcpus(
        domain: virDomainPtr,
        cpumap: *const c_char,
        state: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(4, 10, 0)]
    pub fn virDomainSetIOThreadParams(
        domain: virDomainPtr,
        iothread_id: c_uint,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 9)]
    pub fn virDomainSetInterfaceParameters(
        domain: virDomainPtr,
        device: *const c_char,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(8, 0, 0)]
    pub fn virDomainSetLaunchSecurityState(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(3, 9, 0)]
    pub fn virDomainSetLifecycleAction(
        domain: virDomainPtr,
        type_: c_uint,
        action: c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 0, 3)]
    pub fn virDomainSetMaxMemory(domain: virDomainPtr, memory: c_ulong) -> c_int;

    #[since(0, 1, 1)]
    pub fn virDomainSetMemory(domain: virDomainPtr, memory: c_ulong) -> c_int;

    #[since(0, 9, 0)]
    pub fn virDomainSetMemoryFlags(domain: virDomainPtr, memory: c_ulong, flags: c_uint) -> c_int;

    #[since(0, 8, 5)]
    pub fn virDomainSetMemoryParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 1, 1)]
    pub fn virDomainSetMemoryStatsPeriod(
        domain: virDomainPtr,
        period: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 10)]
    pub fn virDomainSetMetadata(
        domain: virDomainPtr,
        type_: c_int,
        metadata: *const c_char,
        key: *const c_char,
        uri: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 9, 9)]
    pub fn virDomainSetNumaParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 3, 3)]
    pub fn virDomainSetPerfEvents(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 2, 3)]
    pub fn virDomainSetSchedulerParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
    ) -> c_int;

    #[since(0, 9, 2)]
    pub fn virDomainSetSchedulerParametersFlags(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(11, 2, 0)]
    pub fn virDomainSetThrottleGroup(
        dom: virDomainPtr,
        group: *const c_char,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 2, 5)]
    pub fn virDomainSetTime(
        dom: virDomainPtr,
        seconds: c_longlong,
        nseconds: c_uint,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 2, 16)]
    pub fn virDomainSetUserPassword(
        dom: virDomainPtr,
        user: *const c_char,
        password: *const c_char,
        flags: c_uint,
    ) -> c_int;

    #[since(3, 1, 0)]
    pub fn virDomainSetVcpu(
        domain: virDomainPtr,
        vcpumap: *const c_char,
        state: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(0, 1, 4)]
    pub fn virDomainSetVcpus(domain: virDomainPtr, nvcpus: c_uint) -> c_int;

    #[since(0, 8, 5)]
    pub fn virDomainSetVcpusFlags(domain: virDomainPtr, nvcpus: c_uint, flags: c_uint) -> c_int;

    #[since(0, 0, 3)]
    pub fn virDomainShutdown(domain: virDomainPtr) -> c_int;

    #[since(0, 9, 10)]
    pub fn virDomainShutdownFlags(domain: virDomainPtr, flags: c_uint) -> c_int;

    #[since(7, 2, 0)]
    pub fn virDomainStartDirtyRateCalc(
        domain: virDomainPtr,
        seconds: c_int,
        flags: c_uint,
    ) -> c_int;

    #[since(1, 2, 8)]
    pub fn virDomainStatsRecordListFree(stats: *mut virDomainStatsRecordPtr);

    #[since(0, 0, 3)]
    pub fn virDomainSuspend(domain: virDomainPtr) -> c_int;

    #[since(0, 1, 1)]
    pub fn virDomainUndefine(domain: virDomainPtr) -> c_int;

    #[since(0, 9, 4)]
    pub fn virDomainUndefineFlags(domain: virDomainPtr, flags: c_uint) -> c_int;

    #[since(0, 8, 0)]
    pub fn virDomainUpdateDeviceFlags(
        domain: virDomainPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> c_int;
}
