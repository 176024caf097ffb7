// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

// Data streams used by upload, download and console functions.

#[library(Libvirt, link = "virt")]
unsafe extern "C" {
    #[since(0, 7, 2)]
    pub fn virStreamAbort(stream: virStreamPtr) -> c_int;

    #[since(0, 7, 2)]
    pub fn virStreamEventAddCallback(
        stream: virStreamPtr,
        events: c_int,
        cb: virStreamEventCallback,
        opaque: *mut c_void,
        ff: virFreeCallback,
    ) -> c_int;

    #[since(0, 7, 2)]
    pub fn virStreamEventRemoveCallback(stream: virStreamPtr) -> c_int;

    #[since(0, 7, 2)]
    pub fn virStreamEventUpdateCallback(stream: virStreamPtr, events: c_int) -> c_int;

    #[since(0, 7, 2)]
    pub fn virStreamFinish(stream: virStreamPtr) -> c_int;

    #[since(0, 7, 2)]
    pub fn virStreamFree(stream: virStreamPtr) -> c_int;

    #[since(0, 7, 2)]
    pub fn virStreamNew(conn: virConnectPtr, flags: c_uint) -> virStreamPtr;

    #[since(0, 7, 2)]
    pub fn virStreamRecv(stream: virStreamPtr, data: *mut c_char, nbytes: usize) -> c_int;

    #[since(0, 7, 2)]
    pub fn virStreamRecvAll(
        stream: virStreamPtr,
        handler: virStreamSinkFunc,
        opaque: *mut c_void,
    ) -> c_int;

    #[since(3, 4, 0)]
    pub fn virStreamRecvFlags(
        stream: virStreamPtr,
        data: *mut c_char,
        nbytes: usize,
        flags: c_uint,
    ) -> c_int;

    #[since(3, 4, 0)]
    pub fn virStreamRecvHole(stream: virStreamPtr, length: *mut c_longlong, flags: c_uint) -> c_int;

    #[since(0, 7, 2)]
    pub fn virStreamRef(stream: virStreamPtr) -> c_int;

    #[since(0, 7, 2)]
    pub fn virStreamSend(stream: virStreamPtr, data: *const c_char, nbytes: usize) -> c_int;

    #[since(0, 7, 2)]
    pub fn virStreamSendAll(
        stream: virStreamPtr,
        handler: virStreamSourceFunc,
        opaque: *mut c_void,
    ) -> c_int;

    #[since(3, 4, 0)]
    pub fn virStreamSendHole(stream: virStreamPtr, length: c_longlong, flags: c_uint) -> c_int;

    #[since(3, 4, 0)]
    pub fn virStreamSparseRecvAll(
        stream: virStreamPtr,
        handler: virStreamSinkFunc,
        hole_handler: virStreamSinkHoleFunc,
        opaque: *mut c_void,
    ) -> c_int;

    #[since(3, 4, 0)]
    pub fn virStreamSparseSendAll(
        stream: virStreamPtr,
        handler: virStreamSourceFunc,
        hole_handler: virStreamSourceHoleFunc,
        skip_handler: virStreamSourceSkipFunc,
        opaque: *mut c_void,
    ) -> c_int;
}
