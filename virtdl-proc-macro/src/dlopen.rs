// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::Ident;

use crate::input::{ApiInput, Declaration, ERROR_PARAM, bindings_get_functions, read_bindings};

/// Generate the API struct from the declarations found in the macro input
/// and in the included declaration files.
/// It will have the form of
///
/// ```text
/// pub struct VirtApi {
///     registry: virtdl::Registry,
/// }
///
/// impl VirtApi {
///     pub const FUNCTIONS: &[virtdl::FunctionSpec] = &[...];
///
///     pub unsafe fn connect_close(&self, conn: virConnectPtr, err: &mut ErrorRecord) -> c_int;
///     ...
/// }
/// ```
///
/// Each wrapper owns the registry slot at its index in `FUNCTIONS`.
pub fn generate_api(input: ApiInput) -> syn::Result<TokenStream> {
    let mut declarations = vec![];
    let mut tracked = vec![];

    for path in &input.includes {
        let (full, file) = read_bindings(path)?;
        tracked.push(full.display().to_string());
        declarations.extend(bindings_get_functions(file.items)?);
    }
    declarations.extend(bindings_get_functions(input.items)?);

    let syn::ItemStruct { attrs, vis, ident, .. } = &input.api;
    let specs = declarations.iter().map(function_spec);
    let methods = declarations
        .iter()
        .enumerate()
        .map(|(index, declaration)| wrapper_method(index, declaration));
    let linked = if input.static_link {
        static_table(ident, &declarations)?
    } else {
        TokenStream::new()
    };

    Ok(quote! {
        const _: &[&str] = &[#(include_str!(#tracked)),*];

        #(#attrs)*
        #vis struct #ident {
            registry: ::virtdl::Registry,
        }

        impl #ident {
            /// Every wrapped function, indexed by its registry slot.
            pub const FUNCTIONS: &'static [::virtdl::FunctionSpec] = &[#(#specs),*];

            pub fn new(
                loader: ::std::sync::Arc<dyn ::virtdl::Loader>,
                config: ::virtdl::Config,
            ) -> Self {
                Self {
                    registry: ::virtdl::Registry::new(loader, config, Self::FUNCTIONS),
                }
            }

            pub fn registry(&self) -> &::virtdl::Registry {
                &self.registry
            }

            #(#methods)*
        }

        #linked
    })
}

fn function_spec(declaration: &Declaration) -> TokenStream {
    let name = declaration.native_name();
    let library = &declaration.library;
    let [major, minor, micro] = declaration.since;
    let failure = declaration.failure.variant();

    quote! {
        ::virtdl::FunctionSpec {
            name: #name,
            library: ::virtdl::Library::#library,
            since: ::virtdl::Version::new(#major, #minor, #micro),
            failure: ::virtdl::Failure::#failure,
        }
    }
}

fn wrapper_method(index: usize, declaration: &Declaration) -> TokenStream {
    let native = declaration.native_name();
    let method = format_ident!("{}", convert_to_method_name(&native));
    let output = &declaration.func.sig.output;
    let (names, types): (Vec<_>, Vec<_>) = declaration.arguments().unzip();
    let err = Ident::new(ERROR_PARAM, Span::call_site());
    // Locals of the generated body must not clash with argument names.
    let native_ty = Ident::new("Native", Span::mixed_site());
    let native = Ident::new("native", Span::mixed_site());
    let call = Ident::new("call", Span::mixed_site());
    let docs = &declaration.docs;
    let [major, minor, micro] = declaration.since;
    let summary = format!(" Calls `{native}`, available since libvirt {major}.{minor}.{micro}.");

    quote! {
        #(#docs)*
        #[doc = #summary]
        ///
        /// # Safety
        ///
        /// The arguments are handed to the native function unchanged and must
        /// satisfy its contract.
        #[allow(clippy::too_many_arguments)]
        pub unsafe fn #method(
            &self,
            #(#names: #types,)*
            #err: &mut ::virtdl::ErrorRecord,
        ) #output {
            type #native_ty = unsafe extern "C" fn(#(#types),*) #output;
            let #call = move |#native: #native_ty| unsafe { #native(#(#names),*) };
            unsafe { self.registry.dispatch(#index, #err, #call) }
        }
    }
}

/// Emit link-time declarations plus a lookup table so the registry can run
/// against a statically linked libvirt with the same wrappers.
fn static_table(api: &Ident, declarations: &[Declaration]) -> syn::Result<TokenStream> {
    let module = format_ident!("__{}_linked", to_snake_case(&api.to_string()));

    let mut groups: Vec<(String, Vec<&Declaration>)> = vec![];
    for declaration in declarations {
        let Some(link) = &declaration.link else {
            return Err(syn::Error::new_spanned(
                &declaration.func.sig.ident,
                "#[static_link] requires `link = \"...\"` on #[library(...)]",
            ));
        };
        let link = link.value();
        match groups.iter_mut().find(|(name, _)| *name == link) {
            Some((_, members)) => members.push(declaration),
            None => groups.push((link, vec![declaration])),
        }
    }

    let blocks = groups.iter().map(|(link, members)| {
        let functions = members.iter().map(|declaration| {
            let sig = &declaration.func.sig;
            quote! { pub #sig; }
        });
        quote! {
            #[link(name = #link)]
            unsafe extern "C" {
                #(#functions)*
            }
        }
    });

    let arms = declarations.iter().map(|declaration| {
        let library = &declaration.library;
        let ident = &declaration.func.sig.ident;
        let name = declaration.native_name();
        quote! {
            (::virtdl::Library::#library, #name) => #module::#ident as *const ::std::ffi::c_void,
        }
    });

    Ok(quote! {
        #[cfg(feature = "static-link")]
        #[allow(non_snake_case, clippy::too_many_arguments)]
        mod #module {
            use super::*;

            #(#blocks)*
        }

        #[cfg(feature = "static-link")]
        impl #api {
            /// Loader resolving every wrapped function through link-time references.
            pub fn static_loader() -> ::virtdl::StaticLoader {
                ::virtdl::StaticLoader::new(Self::linked_symbol)
            }

            fn linked_symbol(
                library: ::virtdl::Library,
                name: &str,
            ) -> ::std::option::Option<::virtdl::RawSymbol> {
                let address = match (library, name) {
                    #(#arms)*
                    _ => return None,
                };
                Some(::virtdl::RawSymbol::new(address))
            }
        }
    })
}

/// Convert the function name to the method name by removing the "vir" prefix and changing
/// CamelCase to snake_case
fn convert_to_method_name(func_name: &str) -> String {
    to_snake_case(func_name.strip_prefix("vir").unwrap_or(func_name))
}

/// Convert a CamelCase string to snake_case, keeping acronyms together
/// (`GetCPUStats` becomes `get_cpu_stats`, `xmlCPUs` becomes `xml_cpus`).
fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let after = chars.get(i + 2).copied();
            let plural = next == Some('s') && !after.is_some_and(char::is_lowercase);
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => {
                    next.is_some_and(char::is_lowercase) && !plural
                }
                _ => false,
            };
            if boundary {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ApiInput;

    #[test]
    fn test_get_method_name() {
        assert_eq!(convert_to_method_name("virConnectClose"), "connect_close");
        assert_eq!(convert_to_method_name("virNodeGetCPUStats"), "node_get_cpu_stats");
        assert_eq!(convert_to_method_name("virDomainGetIOThreadInfo"), "domain_get_io_thread_info");
        assert_eq!(convert_to_method_name("virDomainMigrateToURI3"), "domain_migrate_to_uri3");
        assert_eq!(convert_to_method_name("virConnectListAllNWFilters"), "connect_list_all_nw_filters");
        assert_eq!(convert_to_method_name("virAdmConnectOpen"), "adm_connect_open");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("xmlCPUs"), "xml_cpus");
        assert_eq!(to_snake_case("VirtApi"), "virt_api");
        assert_eq!(to_snake_case("flags"), "flags");
    }

    #[test]
    fn test_generate_api() {
        let input: ApiInput = syn::parse_str(
            r#"
            pub struct FakeApi;

            #[library(Libvirt)]
            unsafe extern "C" {
                #[since(0, 0, 3)]
                pub fn virConnectClose(conn: virConnectPtr) -> c_int;

                #[since(0, 1, 0)]
                #[error_accessor]
                pub fn virResetLastError();
            }
            "#,
        )
        .unwrap();
        let tokens = generate_api(input).unwrap().to_string();

        assert!(tokens.contains("pub unsafe fn connect_close"));
        assert!(tokens.contains("pub unsafe fn reset_last_error"));
        assert!(tokens.contains("Failure :: Negative"));
        assert!(tokens.contains("Failure :: Never"));
        assert!(!tokens.contains("static_loader"));
    }

    #[test]
    fn test_static_link_requires_link_name() {
        let input: ApiInput = syn::parse_str(
            r#"
            #[static_link]
            pub struct FakeApi;

            #[library(Libvirt)]
            unsafe extern "C" {
                #[since(0, 0, 3)]
                pub fn virConnectClose(conn: virConnectPtr) -> c_int;
            }
            "#,
        )
        .unwrap();
        let err = generate_api(input).err().unwrap();
        assert!(err.to_string().contains("link"));
    }

    #[test]
    fn test_static_link_table() {
        let input: ApiInput = syn::parse_str(
            r#"
            #[static_link]
            pub struct FakeApi;

            #[library(LibvirtQemu, link = "virt-qemu")]
            unsafe extern "C" {
                #[since(0, 8, 3)]
                pub fn virDomainQemuMonitorCommand(
                    domain: virDomainPtr,
                    cmd: *const c_char,
                    result: *mut *mut c_char,
                    flags: c_uint,
                ) -> c_int;
            }
            "#,
        )
        .unwrap();
        let tokens = generate_api(input).unwrap().to_string();

        assert!(tokens.contains("mod __fake_api_linked"));
        assert!(tokens.contains("\"virt-qemu\""));
        assert!(tokens.contains("pub fn static_loader"));
    }
}
