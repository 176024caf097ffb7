// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

// Last-error accessors. These read or reset the error state themselves, so
// their wrappers never copy the last error into the caller's record.

#[library(Libvirt, link = "virt")]
unsafe extern "C" {
    #[since(0, 1, 0)]
    #[error_accessor]
    pub fn virConnCopyLastError(conn: virConnectPtr, to: virErrorPtr) -> c_int;

    #[since(0, 1, 0)]
    #[error_accessor]
    pub fn virConnGetLastError(conn: virConnectPtr) -> virErrorPtr;

    #[since(0, 1, 0)]
    #[error_accessor]
    pub fn virConnResetLastError(conn: virConnectPtr);

    #[since(0, 1, 0)]
    #[error_accessor]
    pub fn virCopyLastError(to: virErrorPtr) -> c_int;

    #[since(0, 6, 1)]
    #[error_accessor]
    pub fn virFreeError(error: virErrorPtr);

    #[since(0, 1, 0)]
    #[error_accessor]
    pub fn virGetLastError() -> virErrorPtr;

    #[since(4, 5, 0)]
    #[error_accessor]
    pub fn virGetLastErrorCode() -> c_int;

    #[since(4, 5, 0)]
    #[error_accessor]
    pub fn virGetLastErrorDomain() -> c_int;

    #[since(1, 0, 6)]
    #[error_accessor]
    pub fn virGetLastErrorMessage() -> *const c_char;

    #[since(0, 1, 0)]
    #[error_accessor]
    pub fn virResetError(error: virErrorPtr);

    #[since(0, 1, 0)]
    #[error_accessor]
    pub fn virResetLastError();

    #[since(0, 6, 1)]
    #[error_accessor]
    pub fn virSaveLastError() -> virErrorPtr;
}
