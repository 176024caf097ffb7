// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

// Typed parameter helpers shared by every object family.

#[library(Libvirt, link = "virt")]
unsafe extern "C" {
    #[since(1, 0, 2)]
    pub fn virTypedParamsAddBoolean(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        value: c_int,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virTypedParamsAddDouble(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        value: c_double,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virTypedParamsAddFromString(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        type_: c_int,
        value: *const c_char,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virTypedParamsAddInt(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        value: c_int,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virTypedParamsAddLLong(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        value: c_longlong,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virTypedParamsAddString(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        value: *const c_char,
    ) -> c_int;

    #[since(1, 2, 17)]
    pub fn virTypedParamsAddStringList(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        values: *mut *const c_char,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virTypedParamsAddUInt(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        value: c_uint,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virTypedParamsAddULLong(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        value: c_ulonglong,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virTypedParamsClear(params: virTypedParameterPtr, nparams: c_int);

    #[since(1, 0, 2)]
    pub fn virTypedParamsFree(params: virTypedParameterPtr, nparams: c_int);

    #[since(1, 0, 2)]
    pub fn virTypedParamsGet(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
    ) -> virTypedParameterPtr;

    #[since(1, 0, 2)]
    pub fn virTypedParamsGetBoolean(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
        value: *mut c_int,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virTypedParamsGetDouble(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
        value: *mut c_double,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virTypedParamsGetInt(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
        value: *mut c_int,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virTypedParamsGetLLong(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
        value: *mut c_longlong,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virTypedParamsGetString(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
        value: *mut *const c_char,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virTypedParamsGetUInt(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
        value: *mut c_uint,
    ) -> c_int;

    #[since(1, 0, 2)]
    pub fn virTypedParamsGetULLong(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
        value: *mut c_ulonglong,
    ) -> c_int;
}
