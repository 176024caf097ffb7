// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod dlopen;
mod input;

/// Generate a dispatch API struct from `unsafe extern "C"` declarations.
///
/// Every public function becomes an `unsafe fn` method on the struct that
/// reaches the native symbol through a `virtdl::Registry`.
#[proc_macro]
pub fn virt_api(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as input::ApiInput);
    dlopen::generate_api(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
