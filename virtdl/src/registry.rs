// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

//! Library handles and symbol slots shared by every wrapper of an API.
//!
//! Each library is opened at most once and each wrapped function resolved at
//! most once per registry. Both outcomes are kept for the lifetime of the
//! registry, failures included: a library that could not be opened is never
//! retried.

use std::sync::{Arc, OnceLock};

use tracing::{debug, trace, warn};

use crate::{
    Config, Error, ErrorRecord, FunctionId, FunctionSpec, Library, LibraryHandle, Loader,
    LoaderError, NativeReturn, OpenState, RawSymbol, SymbolState, error::UNKNOWN_CAUSE, ffi,
};

/// Native function used to enrich error records after a failed call.
pub const LAST_ERROR_SYMBOL: &str = "virGetLastError";

type GetLastError = unsafe extern "C" fn() -> ffi::virErrorPtr;

type OpenSlot = OnceLock<Result<Box<dyn LibraryHandle>, LoaderError>>;
type SymbolSlot = OnceLock<Result<RawSymbol, LoaderError>>;

pub struct Registry {
    loader: Arc<dyn Loader>,
    config: Config,
    functions: &'static [FunctionSpec],
    libraries: [OpenSlot; Library::COUNT],
    symbols: Box<[SymbolSlot]>,
    last_error: SymbolSlot,
}

impl Registry {
    /// Create a registry with one empty symbol slot per entry of `functions`.
    pub fn new(loader: Arc<dyn Loader>, config: Config, functions: &'static [FunctionSpec]) -> Self {
        Self {
            loader,
            config,
            functions,
            libraries: [const { OnceLock::new() }; Library::COUNT],
            symbols: functions.iter().map(|_| OnceLock::new()).collect(),
            last_error: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn functions(&self) -> &'static [FunctionSpec] {
        self.functions
    }

    /// Slot of the function exported as `name`, if this registry wraps it.
    pub fn function_id(&self, name: &str) -> Option<FunctionId> {
        self.functions.iter().position(|spec| spec.name == name)
    }

    pub fn open_state(&self, library: Library) -> OpenState {
        match self.libraries[library.index()].get() {
            None => OpenState::NotAttempted,
            Some(Ok(_)) => OpenState::Opened,
            Some(Err(_)) => OpenState::Failed,
        }
    }

    /// # Panics
    ///
    /// If `id` is not a slot of this registry.
    pub fn symbol_state(&self, id: FunctionId) -> SymbolState {
        match self.symbols[id].get() {
            None => SymbolState::Unresolved,
            Some(Ok(_)) => SymbolState::Resolved,
            Some(Err(_)) => SymbolState::Failed,
        }
    }

    /// Open `library` on first use and return the cached outcome afterwards.
    pub fn acquire(&self, library: Library) -> Result<&dyn LibraryHandle, Error> {
        let opened = self.libraries[library.index()].get_or_init(|| {
            let soname = self.config.soname(library);
            let opened = self.loader.open(library, soname);
            match &opened {
                Ok(_) => debug!(%library, soname, "opened library"),
                Err(err) => warn!(%library, soname, %err, "failed to open library"),
            }
            opened
        });
        match opened {
            Ok(handle) => Ok(handle.as_ref()),
            Err(reason) => Err(Error::LibraryOpen {
                library,
                reason: reason.clone(),
            }),
        }
    }

    /// Look up the symbol of function `id`, opening its library if needed.
    ///
    /// The address may be null if the library exports a null symbol.
    ///
    /// # Panics
    ///
    /// If `id` is not a slot of this registry.
    pub fn resolve(&self, id: FunctionId) -> Result<RawSymbol, Error> {
        let spec = &self.functions[id];
        let handle = self.acquire(spec.library)?;
        let resolved = self.symbols[id].get_or_init(|| {
            let resolved = handle.resolve(spec.name);
            match &resolved {
                Ok(_) => debug!(function = spec.name, library = %spec.library, "resolved symbol"),
                Err(err) => warn!(function = spec.name, %err, "failed to resolve symbol"),
            }
            resolved
        });
        resolved.clone().map_err(|reason| Error::SymbolResolve {
            function: spec.name,
            reason,
        })
    }

    /// Everything a call to function `id` needs short of the call itself:
    /// the version gate, the library and the symbol.
    ///
    /// # Panics
    ///
    /// If `id` is not a slot of this registry.
    pub fn prepare(&self, id: FunctionId) -> Result<RawSymbol, Error> {
        let spec = &self.functions[id];
        let target = self.config.target_version();
        if !spec.available_in(target) {
            trace!(function = spec.name, since = %spec.since, %target, "function gated out");
            return Err(Error::Unavailable {
                function: spec.name,
                since: spec.since,
            });
        }

        let symbol = self.resolve(id)?;
        if symbol.is_null() {
            return Err(Error::SymbolResolve {
                function: spec.name,
                reason: LoaderError::new("symbol address is null"),
            });
        }
        Ok(symbol)
    }

    /// Call function `id` and report failures as [`Error`].
    ///
    /// # Safety
    ///
    /// `F` must be the function pointer type of the native function and
    /// `call` must satisfy its contract.
    pub unsafe fn invoke<F: Copy, R: NativeReturn>(
        &self,
        id: FunctionId,
        call: impl FnOnce(F) -> R,
    ) -> Result<R, Error> {
        let symbol = self.prepare(id)?;
        let ret = call(unsafe { symbol.cast::<F>() });
        if ret.is_failure(self.functions[id].failure) {
            return Err(Error::Native(self.last_error()));
        }
        Ok(ret)
    }

    /// Call function `id`, writing failures to `err`.
    ///
    /// Returns the native return value, or the sentinel of `R` when the
    /// function could not be called. `err` is left untouched on success.
    ///
    /// # Safety
    ///
    /// Same as [`Registry::invoke`].
    pub unsafe fn dispatch<F: Copy, R: NativeReturn>(
        &self,
        id: FunctionId,
        err: &mut ErrorRecord,
        call: impl FnOnce(F) -> R,
    ) -> R {
        let symbol = match self.prepare(id) {
            Ok(symbol) => symbol,
            Err(error) => {
                error.write_to(err);
                return R::SENTINEL;
            }
        };
        let ret = call(unsafe { symbol.cast::<F>() });
        if ret.is_failure(self.functions[id].failure) {
            *err = self.last_error();
        }
        ret
    }

    /// Copy of the calling thread's native last error.
    pub fn last_error(&self) -> ErrorRecord {
        let Some(get_last_error) = self.get_last_error() else {
            return ErrorRecord::internal(UNKNOWN_CAUSE);
        };
        let raw = unsafe { get_last_error() };
        if raw.is_null() {
            return ErrorRecord::internal(UNKNOWN_CAUSE);
        }
        let record = unsafe { ErrorRecord::from_raw(&*raw) };
        if record.is_set() {
            record
        } else {
            ErrorRecord::internal(UNKNOWN_CAUSE)
        }
    }

    fn get_last_error(&self) -> Option<GetLastError> {
        let handle = self.acquire(Library::Libvirt).ok()?;
        let symbol = self
            .last_error
            .get_or_init(|| handle.resolve(LAST_ERROR_SYMBOL))
            .as_ref()
            .ok()
            .filter(|symbol| !symbol.is_null())?;
        Some(unsafe { symbol.cast() })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        ffi::{c_char, c_int, c_void},
        ptr,
        sync::{
            Barrier,
            atomic::{AtomicUsize, Ordering},
        },
        thread,
    };

    use super::*;
    use crate::{ErrorLevel, Failure, Version};

    const ADD: FunctionId = 0;
    const FAIL: FunctionId = 1;
    const FUTURE: FunctionId = 2;
    const QEMU: FunctionId = 3;
    const MISSING: FunctionId = 4;
    const NULL: FunctionId = 5;

    const FUNCTIONS: &[FunctionSpec] = &[
        spec("fakeAdd", Library::Libvirt, 1),
        spec("fakeFail", Library::Libvirt, 1),
        spec("fakeFuture", Library::Libvirt, 99),
        spec("fakeQemu", Library::LibvirtQemu, 1),
        spec("fakeMissing", Library::Libvirt, 1),
        spec("fakeNull", Library::Libvirt, 1),
    ];

    const fn spec(name: &'static str, library: Library, major: u32) -> FunctionSpec {
        FunctionSpec {
            name,
            library,
            since: Version::new(major, 0, 0),
            failure: Failure::Negative,
        }
    }

    type Add = unsafe extern "C" fn(c_int, c_int) -> c_int;
    type NoArgs = unsafe extern "C" fn() -> c_int;

    extern "C" fn fake_add(a: c_int, b: c_int) -> c_int {
        a + b
    }

    extern "C" fn fake_fail() -> c_int {
        -7
    }

    extern "C" fn fake_get_last_error() -> ffi::virErrorPtr {
        Box::into_raw(Box::new(ffi::virError {
            code: 42,
            domain: 10,
            message: c"Domain not found".as_ptr().cast_mut(),
            level: ffi::VIR_ERR_ERROR,
            conn: ptr::null_mut(),
            dom: ptr::null_mut(),
            str1: ptr::null_mut(),
            str2: ptr::null_mut(),
            str3: ptr::null_mut(),
            int1: 0,
            int2: 0,
            net: ptr::null_mut(),
        }))
    }

    extern "C" fn fake_no_last_error() -> ffi::virErrorPtr {
        ptr::null_mut()
    }

    #[derive(Default)]
    struct Counters {
        opens: AtomicUsize,
        lookups: AtomicUsize,
    }

    struct FakeLoader {
        counters: Arc<Counters>,
        broken: Option<Library>,
        get_last_error: GetLastError,
    }

    impl FakeLoader {
        fn new() -> Self {
            Self {
                counters: Arc::default(),
                broken: None,
                get_last_error: fake_get_last_error,
            }
        }
    }

    impl Loader for FakeLoader {
        fn open(&self, library: Library, soname: &str) -> Result<Box<dyn LibraryHandle>, LoaderError> {
            self.counters.opens.fetch_add(1, Ordering::SeqCst);
            if self.broken == Some(library) {
                return Err(LoaderError::new(format!("{soname}: cannot open shared object file")));
            }
            Ok(Box::new(FakeHandle {
                counters: self.counters.clone(),
                get_last_error: self.get_last_error,
            }))
        }
    }

    struct FakeHandle {
        counters: Arc<Counters>,
        get_last_error: GetLastError,
    }

    impl LibraryHandle for FakeHandle {
        fn resolve(&self, symbol: &str) -> Result<RawSymbol, LoaderError> {
            let address = match symbol {
                LAST_ERROR_SYMBOL => return Ok(RawSymbol::new(self.get_last_error as *const c_void)),
                "fakeAdd" | "fakeQemu" => fake_add as *const c_void,
                "fakeFail" => fake_fail as *const c_void,
                "fakeNull" => ptr::null(),
                _ => return Err(LoaderError::new(format!("undefined symbol: {symbol}"))),
            };
            self.counters.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(RawSymbol::new(address))
        }
    }

    fn registry(loader: FakeLoader, target: Version) -> (Registry, Arc<Counters>) {
        let counters = loader.counters.clone();
        let config = Config::default().with_target_version(target);
        (Registry::new(Arc::new(loader), config, FUNCTIONS), counters)
    }

    fn add(registry: &Registry, id: FunctionId, err: &mut ErrorRecord) -> c_int {
        unsafe { registry.dispatch(id, err, |add: Add| add(2, 3)) }
    }

    fn no_args(registry: &Registry, id: FunctionId, err: &mut ErrorRecord) -> c_int {
        unsafe { registry.dispatch(id, err, |f: NoArgs| f()) }
    }

    #[test]
    fn test_repeated_calls_open_and_resolve_once() {
        let (registry, counters) = registry(FakeLoader::new(), Version::BUILD);
        let mut err = ErrorRecord::default();

        for _ in 0..3 {
            assert_eq!(add(&registry, ADD, &mut err), 5);
        }

        assert_eq!(counters.opens.load(Ordering::SeqCst), 1);
        assert_eq!(counters.lookups.load(Ordering::SeqCst), 1);
        assert_eq!(registry.symbol_state(ADD), SymbolState::Resolved);
        assert!(!err.is_set());
    }

    #[test]
    fn test_success_leaves_record_untouched() {
        let (registry, _) = registry(FakeLoader::new(), Version::BUILD);
        let mut err = ErrorRecord {
            code: 9,
            domain: 3,
            message: Some("from an earlier call".into()),
            level: ErrorLevel::Warning,
        };
        let before = err.clone();

        assert_eq!(add(&registry, ADD, &mut err), 5);
        assert_eq!(err, before);
    }

    #[test]
    fn test_open_failure_is_sticky() {
        let loader = FakeLoader {
            broken: Some(Library::Libvirt),
            ..FakeLoader::new()
        };
        let (registry, counters) = registry(loader, Version::BUILD);

        for id in [ADD, FAIL, ADD] {
            let mut err = ErrorRecord::default();
            assert_eq!(no_args(&registry, id, &mut err), -1);
            assert_eq!(err.code, ffi::VIR_ERR_INTERNAL_ERROR);
            assert_eq!(
                err.message.as_deref(),
                Some("Failed to open libvirt: libvirt.so.0: cannot open shared object file")
            );
        }

        assert_eq!(counters.opens.load(Ordering::SeqCst), 1);
        assert_eq!(registry.open_state(Library::Libvirt), OpenState::Failed);
        assert_eq!(registry.symbol_state(ADD), SymbolState::Unresolved);
    }

    #[test]
    fn test_open_failure_is_scoped_to_library() {
        let loader = FakeLoader {
            broken: Some(Library::LibvirtQemu),
            ..FakeLoader::new()
        };
        let (registry, _) = registry(loader, Version::BUILD);
        let mut err = ErrorRecord::default();

        assert_eq!(add(&registry, QEMU, &mut err), -1);
        assert_eq!(add(&registry, ADD, &mut ErrorRecord::default()), 5);
        assert_eq!(registry.open_state(Library::Libvirt), OpenState::Opened);
        assert_eq!(registry.open_state(Library::LibvirtQemu), OpenState::Failed);
    }

    #[test]
    fn test_gated_call_never_touches_loader() {
        let (registry, counters) = registry(FakeLoader::new(), Version::new(5, 0, 0));
        let mut err = ErrorRecord::default();

        assert_eq!(no_args(&registry, FUTURE, &mut err), -1);
        assert_eq!(
            err.message.as_deref(),
            Some("Function fakeFuture not available prior to libvirt version 99.0.0")
        );
        assert_eq!(err.level, ErrorLevel::Error);
        assert_eq!(counters.opens.load(Ordering::SeqCst), 0);
        assert_eq!(registry.open_state(Library::Libvirt), OpenState::NotAttempted);
        assert_eq!(registry.symbol_state(FUTURE), SymbolState::Unresolved);
    }

    #[test]
    fn test_gate_applies_per_function() {
        let (registry, _) = registry(FakeLoader::new(), Version::new(5, 0, 0));
        let mut err = ErrorRecord::default();

        assert_eq!(add(&registry, ADD, &mut err), 5);
        assert_eq!(no_args(&registry, FUTURE, &mut err), -1);
        assert_eq!(registry.symbol_state(ADD), SymbolState::Resolved);
        assert_eq!(registry.symbol_state(FUTURE), SymbolState::Unresolved);
    }

    #[test]
    fn test_native_failure_copies_last_error() {
        let (registry, _) = registry(FakeLoader::new(), Version::BUILD);
        let mut err = ErrorRecord::internal("stale");

        assert_eq!(no_args(&registry, FAIL, &mut err), -7);
        assert_eq!(err.code, 42);
        assert_eq!(err.domain, 10);
        assert_eq!(err.message.as_deref(), Some("Domain not found"));
    }

    #[test]
    fn test_native_failure_without_last_error() {
        let loader = FakeLoader {
            get_last_error: fake_no_last_error,
            ..FakeLoader::new()
        };
        let (registry, _) = registry(loader, Version::BUILD);
        let mut err = ErrorRecord::default();

        assert_eq!(no_args(&registry, FAIL, &mut err), -7);
        assert_eq!(err, ErrorRecord::internal(UNKNOWN_CAUSE));
    }

    #[test]
    fn test_resolve_failure_is_sticky() {
        let (registry, counters) = registry(FakeLoader::new(), Version::BUILD);

        for _ in 0..2 {
            let mut err = ErrorRecord::default();
            assert_eq!(no_args(&registry, MISSING, &mut err), -1);
            assert_eq!(
                err.message.as_deref(),
                Some("Failed to load fakeMissing: undefined symbol: fakeMissing")
            );
        }
        assert_eq!(registry.symbol_state(MISSING), SymbolState::Failed);
        assert_eq!(counters.lookups.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_null_symbol_is_not_called() {
        let (registry, _) = registry(FakeLoader::new(), Version::BUILD);

        assert!(registry.resolve(NULL).unwrap().is_null());
        let err = registry.prepare(NULL).unwrap_err();
        assert!(matches!(err, Error::SymbolResolve { function: "fakeNull", .. }));
        assert_eq!(registry.symbol_state(NULL), SymbolState::Resolved);
    }

    #[test]
    fn test_invoke() {
        let (registry, _) = registry(FakeLoader::new(), Version::BUILD);

        let sum = unsafe { registry.invoke(ADD, |add: Add| add(20, 22)) };
        assert_eq!(sum, Ok(42));

        let failed = unsafe { registry.invoke(FAIL, |f: NoArgs| f()) };
        let Err(Error::Native(record)) = failed else {
            panic!("expected a native error, got {failed:?}");
        };
        assert_eq!(record.code, 42);
    }

    #[test]
    fn test_concurrent_first_use_resolves_once() {
        const THREADS: usize = 8;
        let (registry, counters) = registry(FakeLoader::new(), Version::BUILD);
        let barrier = Barrier::new(THREADS);

        let symbols: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        registry.prepare(ADD)
                    })
                })
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        assert!(symbols.iter().all(|symbol| *symbol == symbols[0]));
        assert_eq!(counters.opens.load(Ordering::SeqCst), 1);
        assert_eq!(counters.lookups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_function_id() {
        let (registry, _) = registry(FakeLoader::new(), Version::BUILD);
        assert_eq!(registry.function_id("fakeQemu"), Some(QEMU));
        assert_eq!(registry.function_id("virConnectOpen"), None);
    }

    #[test]
    fn test_returns_pointer_sentinel() {
        let (registry, _) = registry(FakeLoader::new(), Version::new(5, 0, 0));
        let mut err = ErrorRecord::default();

        type Lookup = unsafe extern "C" fn() -> *mut c_char;
        let ret = unsafe { registry.dispatch(FUTURE, &mut err, |f: Lookup| f()) };
        assert!(ret.is_null());
        assert!(err.is_set());
    }
}
