// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use syn::{
    Attribute, FnArg, ForeignItem, ForeignItemFn, Ident, Item, ItemStruct, LitInt, LitStr, Pat,
    ReturnType, Token, Type, Visibility,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

/// Name of the out parameter appended to every generated wrapper.
pub const ERROR_PARAM: &str = "err";

/// The body of `virt_api!`.
///
/// ```ignore
/// virt_api! {
///     #[static_link]
///     pub struct VirtApi;
///
///     include!("bindings/host.rs");
///
///     #[library(Libvirt, link = "virt")]
///     unsafe extern "C" {
///         #[since(0, 0, 3)]
///         pub fn virConnectClose(conn: virConnectPtr) -> c_int;
///     }
/// }
/// ```
pub struct ApiInput {
    pub api: ItemStruct,
    pub static_link: bool,
    pub includes: Vec<LitStr>,
    pub items: Vec<Item>,
}

impl Parse for ApiInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let file: syn::File = input.parse()?;

        let mut api = None;
        let mut includes = vec![];
        let mut items = vec![];

        for item in file.items {
            match item {
                Item::Struct(mut item) => {
                    if api.is_some() {
                        return Err(syn::Error::new_spanned(
                            &item.ident,
                            "virt_api! accepts a single struct",
                        ));
                    }
                    let before = item.attrs.len();
                    item.attrs.retain(|attr| !attr.path().is_ident("static_link"));
                    let static_link = item.attrs.len() != before;
                    api = Some((item, static_link));
                }
                Item::Macro(item) if item.mac.path.is_ident("include") => {
                    includes.push(item.mac.parse_body::<LitStr>()?);
                }
                item @ Item::ForeignMod(_) => items.push(item),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected a struct, include!(\"...\") or an extern block",
                    ));
                }
            }
        }

        let Some((api, static_link)) = api else {
            return Err(input.error("virt_api! requires a `struct` naming the generated API"));
        };
        if !matches!(api.fields, syn::Fields::Unit) {
            return Err(syn::Error::new_spanned(&api.fields, "the API struct must be a unit struct"));
        }

        Ok(Self { api, static_link, includes, items })
    }
}

/// What a native return value looks like when the call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureShape {
    Negative,
    Null,
    Zero,
    Never,
}

impl FailureShape {
    pub fn variant(self) -> Ident {
        let name = match self {
            Self::Negative => "Negative",
            Self::Null => "Null",
            Self::Zero => "Zero",
            Self::Never => "Never",
        };
        Ident::new(name, proc_macro2::Span::call_site())
    }
}

/// One public foreign function with its dispatch metadata.
pub struct Declaration {
    pub library: Ident,
    pub link: Option<LitStr>,
    pub func: ForeignItemFn,
    pub since: [u32; 3],
    pub failure: FailureShape,
    pub docs: Vec<Attribute>,
}

impl Declaration {
    pub fn native_name(&self) -> String {
        self.func.sig.ident.to_string()
    }

    pub fn arguments(&self) -> impl Iterator<Item = (&Ident, &Type)> {
        self.func.sig.inputs.iter().filter_map(|arg| match arg {
            FnArg::Typed(arg) => match arg.pat.as_ref() {
                Pat::Ident(pat) => Some((&pat.ident, arg.ty.as_ref())),
                _ => None,
            },
            FnArg::Receiver(_) => None,
        })
    }
}

struct LibraryAttr {
    library: Ident,
    link: Option<LitStr>,
}

impl Parse for LibraryAttr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let library = input.parse()?;
        let mut link = None;
        if input.parse::<Option<Token![,]>>()?.is_some() {
            let key: Ident = input.parse()?;
            if key != "link" {
                return Err(syn::Error::new_spanned(key, "expected `link = \"...\"`"));
            }
            input.parse::<Token![=]>()?;
            link = Some(input.parse()?);
        }
        Ok(Self { library, link })
    }
}

/// Read and parse a declaration file relative to the invoking crate.
pub fn read_bindings(path: &LitStr) -> syn::Result<(PathBuf, syn::File)> {
    let root = std::env::var("CARGO_MANIFEST_DIR")
        .map_err(|_| syn::Error::new(path.span(), "CARGO_MANIFEST_DIR is not set"))?;
    let full = Path::new(&root).join(path.value());
    let content = std::fs::read_to_string(&full).map_err(|e| {
        syn::Error::new(path.span(), format!("failed to read {}: {e}", full.display()))
    })?;
    let file = syn::parse_file(&content).map_err(|e| {
        syn::Error::new(path.span(), format!("failed to parse {}: {e}", full.display()))
    })?;
    Ok((full, file))
}

/// Extract all public foreign functions from the extern blocks in `items`.
pub fn bindings_get_functions(items: Vec<Item>) -> syn::Result<Vec<Declaration>> {
    let mut functions = vec![];

    for item in items {
        let Item::ForeignMod(extern_block) = item else {
            continue;
        };
        let attr = library_attr(&extern_block.attrs, &extern_block.abi)?;
        for foreign_item in extern_block.items {
            if let ForeignItem::Fn(func) = foreign_item
                && let Visibility::Public(_) = func.vis
            {
                functions.push(declaration(&attr, func)?);
            }
        }
    }
    Ok(functions)
}

fn library_attr(attrs: &[Attribute], abi: &syn::Abi) -> syn::Result<LibraryAttr> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident("library"))
        .ok_or_else(|| syn::Error::new_spanned(abi, "extern block is missing #[library(...)]"))?
        .parse_args()
}

fn declaration(attr: &LibraryAttr, mut func: ForeignItemFn) -> syn::Result<Declaration> {
    let mut since = None;
    let mut error_accessor = false;
    let mut docs = vec![];

    for item_attr in std::mem::take(&mut func.attrs) {
        if item_attr.path().is_ident("since") {
            since = Some(parse_since(&item_attr)?);
        } else if item_attr.path().is_ident("error_accessor") {
            error_accessor = true;
        } else if item_attr.path().is_ident("doc") {
            docs.push(item_attr);
        } else {
            return Err(syn::Error::new_spanned(item_attr, "unsupported attribute"));
        }
    }

    let since = since.ok_or_else(|| {
        syn::Error::new_spanned(&func.sig.ident, "missing #[since(major, minor, micro)]")
    })?;
    check_arguments(&func)?;

    let failure = if error_accessor {
        FailureShape::Never
    } else {
        failure_shape(&func.sig.output)
    };

    Ok(Declaration {
        library: attr.library.clone(),
        link: attr.link.clone(),
        func,
        since,
        failure,
        docs,
    })
}

fn parse_since(attr: &Attribute) -> syn::Result<[u32; 3]> {
    let parts = attr.parse_args_with(Punctuated::<LitInt, Token![,]>::parse_terminated)?;
    let parts = parts
        .iter()
        .map(LitInt::base10_parse::<u32>)
        .collect::<syn::Result<Vec<_>>>()?;
    match parts.as_slice() {
        [major, minor, micro] => Ok([*major, *minor, *micro]),
        _ => Err(syn::Error::new_spanned(attr, "expected #[since(major, minor, micro)]")),
    }
}

fn check_arguments(func: &ForeignItemFn) -> syn::Result<()> {
    if let Some(variadic) = &func.sig.variadic {
        return Err(syn::Error::new_spanned(variadic, "variadic functions cannot be wrapped"));
    }
    for arg in &func.sig.inputs {
        let FnArg::Typed(arg) = arg else {
            return Err(syn::Error::new_spanned(arg, "unexpected receiver"));
        };
        match arg.pat.as_ref() {
            Pat::Ident(pat) if pat.ident == ERROR_PARAM => {
                return Err(syn::Error::new_spanned(
                    &pat.ident,
                    "`err` is reserved for the error record",
                ));
            }
            Pat::Ident(_) => {}
            other => {
                return Err(syn::Error::new_spanned(other, "arguments must be plain identifiers"));
            }
        }
    }
    Ok(())
}

/// Pointers fail with NULL, unsigned integers with zero and everything else
/// with a negative value. `void` functions have no failure shape.
pub fn failure_shape(output: &ReturnType) -> FailureShape {
    let ty = match output {
        ReturnType::Default => return FailureShape::Never,
        ReturnType::Type(_, ty) => ty.as_ref(),
    };
    match ty {
        Type::Ptr(_) => FailureShape::Null,
        Type::Tuple(tuple) if tuple.elems.is_empty() => FailureShape::Never,
        Type::Path(path) => {
            let Some(last) = path.path.segments.last() else {
                return FailureShape::Negative;
            };
            let name = last.ident.to_string();
            if name.ends_with("Ptr") {
                FailureShape::Null
            } else if is_unsigned(&name) {
                FailureShape::Zero
            } else {
                FailureShape::Negative
            }
        }
        _ => FailureShape::Negative,
    }
}

fn is_unsigned(name: &str) -> bool {
    matches!(
        name,
        "c_uchar" | "c_ushort" | "c_uint" | "c_ulong" | "c_ulonglong"
            | "u8" | "u16" | "u32" | "u64" | "u128" | "usize"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_items(content: &str) -> Vec<Item> {
        syn::parse_file(content).unwrap().items
    }

    #[test]
    fn test_bindings_get_functions() {
        let content = r#"
        fn dont_include_me();

        #[library(Libvirt, link = "virt")]
        unsafe extern "C" {
            #[since(0, 0, 3)]
            pub fn include_me() -> c_int;
            fn extern_but_not_pub();
        }
        #[library(LibvirtQemu)]
        extern "C" {
            #[since(0, 8, 3)]
            pub fn include_me2(dom: virDomainPtr) -> *mut c_char;
            fn extern_but_not_pub2();
        }
        "#;

        let functions = bindings_get_functions(parse_items(content)).unwrap();
        assert_eq!(functions.len(), 2);
        assert_eq!(functions[0].func.sig.ident, "include_me");
        assert_eq!(functions[0].library, "Libvirt");
        assert_eq!(functions[0].link.as_ref().unwrap().value(), "virt");
        assert_eq!(functions[0].since, [0, 0, 3]);
        assert_eq!(functions[1].func.sig.ident, "include_me2");
        assert_eq!(functions[1].library, "LibvirtQemu");
        assert!(functions[1].link.is_none());
        assert_eq!(functions[1].failure, FailureShape::Null);
    }

    #[test]
    fn test_missing_library_attribute() {
        let content = r#"
        unsafe extern "C" {
            #[since(1, 0, 0)]
            pub fn orphan() -> c_int;
        }
        "#;
        let err = bindings_get_functions(parse_items(content)).err().unwrap();
        assert!(err.to_string().contains("#[library"));
    }

    #[test]
    fn test_missing_since() {
        let content = r#"
        #[library(Libvirt)]
        unsafe extern "C" {
            pub fn undated() -> c_int;
        }
        "#;
        let err = bindings_get_functions(parse_items(content)).err().unwrap();
        assert!(err.to_string().contains("since"));
    }

    #[test]
    fn test_reserved_err_argument() {
        let content = r#"
        #[library(Libvirt)]
        unsafe extern "C" {
            #[since(0, 6, 1)]
            pub fn virFreeError(err: virErrorPtr);
        }
        "#;
        let err = bindings_get_functions(parse_items(content)).err().unwrap();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn test_error_accessor_never_fails() {
        let content = r#"
        #[library(Libvirt)]
        unsafe extern "C" {
            /// Thread-local last error.
            #[since(0, 1, 0)]
            #[error_accessor]
            pub fn virGetLastError() -> virErrorPtr;
        }
        "#;
        let functions = bindings_get_functions(parse_items(content)).unwrap();
        assert_eq!(functions[0].failure, FailureShape::Never);
        assert_eq!(functions[0].docs.len(), 1);
    }

    #[test]
    fn test_failure_shape() {
        let shape = |ret: &str| {
            let sig: syn::Signature = syn::parse_str(&format!("fn f() {ret}")).unwrap();
            failure_shape(&sig.output)
        };
        assert_eq!(shape("-> c_int"), FailureShape::Negative);
        assert_eq!(shape("-> c_longlong"), FailureShape::Negative);
        assert_eq!(shape("-> c_uint"), FailureShape::Zero);
        assert_eq!(shape("-> c_ulonglong"), FailureShape::Zero);
        assert_eq!(shape("-> *const c_char"), FailureShape::Null);
        assert_eq!(shape("-> virDomainPtr"), FailureShape::Null);
        assert_eq!(shape(""), FailureShape::Never);
    }

    #[test]
    fn test_parse_api_input() {
        let input: ApiInput = syn::parse_str(
            r#"
            #[static_link]
            pub struct VirtApi;

            include!("bindings/host.rs");

            #[library(Libvirt)]
            unsafe extern "C" {
                #[since(0, 0, 3)]
                pub fn virConnectClose(conn: virConnectPtr) -> c_int;
            }
            "#,
        )
        .unwrap();
        assert_eq!(input.api.ident, "VirtApi");
        assert!(input.static_link);
        assert!(input.api.attrs.is_empty());
        assert_eq!(input.includes[0].value(), "bindings/host.rs");
        assert_eq!(input.items.len(), 1);
    }

    #[test]
    fn test_parse_api_input_requires_struct() {
        let input = syn::parse_str::<ApiInput>(r#"include!("bindings/host.rs");"#);
        assert!(input.is_err());
    }
}
