// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

use std::{
    cell::Cell,
    ffi::{c_char, c_int, c_uint, c_ulonglong, c_void},
    ptr,
    sync::{
        Arc, Barrier,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use virtdl::{
    Config, ErrorLevel, ErrorRecord, Failure, Library, LibraryHandle, Loader, LoaderError,
    OpenState, RawSymbol, SymbolState, UNKNOWN_CAUSE, Version,
    ffi::{self, virErrorPtr},
    virt_api,
};

virt_api! {
    pub struct FakeApi;

    #[library(Libvirt)]
    unsafe extern "C" {
        /// Reads the state of domain `id`, failing for negative ids.
        #[since(1, 0, 0)]
        pub fn fakeDomainGetState(id: c_int) -> c_int;

        #[since(1, 0, 0)]
        pub fn fakeDomainGetName(id: c_int) -> *mut c_char;

        #[since(1, 0, 0)]
        pub fn fakeNodeGetFreeMemory() -> c_ulonglong;

        #[since(99, 0, 0)]
        pub fn fakeFutureCall(flags: c_uint) -> c_int;

        #[since(0, 1, 0)]
        #[error_accessor]
        pub fn virGetLastError() -> virErrorPtr;
    }

    #[library(LibvirtQemu)]
    unsafe extern "C" {
        #[since(1, 0, 0)]
        pub fn fakeQemuCommand(cmd: *const c_char) -> c_int;
    }
}

thread_local! {
    static LAST_ERROR_CODE: Cell<c_int> = const { Cell::new(0) };
}

extern "C" fn fake_domain_get_state(id: c_int) -> c_int {
    if id < 0 {
        LAST_ERROR_CODE.set(42);
        return -1;
    }
    id * 10
}

extern "C" fn fake_domain_get_name(id: c_int) -> *mut c_char {
    if id < 0 {
        LAST_ERROR_CODE.set(43);
        return ptr::null_mut();
    }
    c"guest".as_ptr().cast_mut()
}

extern "C" fn fake_node_get_free_memory() -> c_ulonglong {
    0
}

extern "C" fn fake_qemu_command(_cmd: *const c_char) -> c_int {
    0
}

extern "C" fn fake_get_last_error() -> virErrorPtr {
    let code = LAST_ERROR_CODE.get();
    if code == 0 {
        return ptr::null_mut();
    }
    Box::into_raw(Box::new(ffi::virError {
        code,
        domain: 10,
        message: c"Domain not found: no domain with matching id".as_ptr().cast_mut(),
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

#[derive(Default)]
struct Counters {
    opens: AtomicUsize,
    lookups: AtomicUsize,
}

#[derive(Default)]
struct FakeLoader {
    counters: Arc<Counters>,
    broken: Vec<Library>,
}

impl Loader for FakeLoader {
    fn open(&self, library: Library, soname: &str) -> Result<Box<dyn LibraryHandle>, LoaderError> {
        self.counters.opens.fetch_add(1, Ordering::SeqCst);
        if self.broken.contains(&library) {
            return Err(LoaderError::new(format!("{soname}: cannot open shared object file")));
        }
        Ok(Box::new(FakeLibrary {
            library,
            counters: self.counters.clone(),
        }))
    }
}

struct FakeLibrary {
    library: Library,
    counters: Arc<Counters>,
}

impl LibraryHandle for FakeLibrary {
    fn resolve(&self, symbol: &str) -> Result<RawSymbol, LoaderError> {
        self.counters.lookups.fetch_add(1, Ordering::SeqCst);
        let address = match (self.library, symbol) {
            (Library::Libvirt, "fakeDomainGetState") => fake_domain_get_state as *const c_void,
            (Library::Libvirt, "fakeDomainGetName") => fake_domain_get_name as *const c_void,
            (Library::Libvirt, "fakeNodeGetFreeMemory") => fake_node_get_free_memory as *const c_void,
            (Library::Libvirt, "virGetLastError") => fake_get_last_error as *const c_void,
            (Library::LibvirtQemu, "fakeQemuCommand") => fake_qemu_command as *const c_void,
            _ => return Err(LoaderError::new(format!("undefined symbol: {symbol}"))),
        };
        Ok(RawSymbol::new(address))
    }
}

fn fake_api(loader: FakeLoader, target: Version) -> (FakeApi, Arc<Counters>) {
    let counters = loader.counters.clone();
    let config = Config::default().with_target_version(target);
    (FakeApi::new(Arc::new(loader), config), counters)
}

fn id(api: &FakeApi, name: &str) -> usize {
    api.registry().function_id(name).unwrap()
}

#[test]
fn test_function_table() {
    let names: Vec<_> = FakeApi::FUNCTIONS.iter().map(|spec| spec.name).collect();
    assert_eq!(
        names,
        [
            "fakeDomainGetState",
            "fakeDomainGetName",
            "fakeNodeGetFreeMemory",
            "fakeFutureCall",
            "virGetLastError",
            "fakeQemuCommand",
        ]
    );
    assert_eq!(FakeApi::FUNCTIONS[1].failure, Failure::Null);
    assert_eq!(FakeApi::FUNCTIONS[2].failure, Failure::Zero);
    assert_eq!(FakeApi::FUNCTIONS[4].failure, Failure::Never);
    assert_eq!(FakeApi::FUNCTIONS[5].library, Library::LibvirtQemu);
}

#[test]
fn test_wrapper_forwards_arguments_and_result() {
    let (api, counters) = fake_api(FakeLoader::default(), Version::BUILD);
    let mut err = ErrorRecord::default();

    for domain in 0..3 {
        assert_eq!(unsafe { api.fake_domain_get_state(domain, &mut err) }, domain * 10);
    }

    assert!(!err.is_set());
    assert_eq!(counters.opens.load(Ordering::SeqCst), 1);
    assert_eq!(counters.lookups.load(Ordering::SeqCst), 1);
}

#[test]
fn test_negative_return_copies_last_error() {
    let (api, _) = fake_api(FakeLoader::default(), Version::BUILD);
    let mut err = ErrorRecord::internal("left over from another call");

    assert_eq!(unsafe { api.fake_domain_get_state(-1, &mut err) }, -1);

    assert_eq!(err.code, 42);
    assert_eq!(err.domain, 10);
    assert_eq!(err.level, ErrorLevel::Error);
    assert_eq!(
        err.message.as_deref(),
        Some("Domain not found: no domain with matching id")
    );
}

#[test]
fn test_null_return_copies_last_error() {
    let (api, _) = fake_api(FakeLoader::default(), Version::BUILD);
    let mut err = ErrorRecord::default();

    assert!(unsafe { api.fake_domain_get_name(-1, &mut err) }.is_null());
    assert_eq!(err.code, 43);

    let mut err = ErrorRecord::default();
    assert!(!unsafe { api.fake_domain_get_name(1, &mut err) }.is_null());
    assert!(!err.is_set());
}

#[test]
fn test_zero_return_without_native_error() {
    let (api, _) = fake_api(FakeLoader::default(), Version::BUILD);
    let mut err = ErrorRecord::default();

    assert_eq!(unsafe { api.fake_node_get_free_memory(&mut err) }, 0);
    assert_eq!(err, ErrorRecord::internal(UNKNOWN_CAUSE));
}

#[test]
fn test_error_accessor_does_not_enrich() {
    let (api, _) = fake_api(FakeLoader::default(), Version::BUILD);
    let mut err = ErrorRecord::default();

    assert!(unsafe { api.get_last_error(&mut err) }.is_null());
    assert_eq!(err, ErrorRecord::default());
}

#[test]
fn test_version_gate() {
    let (api, counters) = fake_api(FakeLoader::default(), Version::new(5, 0, 0));
    let mut err = ErrorRecord::default();

    assert_eq!(unsafe { api.fake_future_call(0, &mut err) }, -1);
    assert_eq!(
        err.message.as_deref(),
        Some("Function fakeFutureCall not available prior to libvirt version 99.0.0")
    );
    assert_eq!(counters.opens.load(Ordering::SeqCst), 0);
    assert_eq!(api.registry().open_state(Library::Libvirt), OpenState::NotAttempted);

    let mut err = ErrorRecord::default();
    assert_eq!(unsafe { api.fake_domain_get_state(4, &mut err) }, 40);
    assert_eq!(api.registry().open_state(Library::Libvirt), OpenState::Opened);
    assert_eq!(
        api.registry().symbol_state(id(&api, "fakeFutureCall")),
        SymbolState::Unresolved
    );
}

#[test]
fn test_open_failure_is_sticky() {
    let loader = FakeLoader {
        broken: vec![Library::Libvirt],
        ..FakeLoader::default()
    };
    let (api, counters) = fake_api(loader, Version::BUILD);

    for _ in 0..3 {
        let mut err = ErrorRecord::default();
        assert_eq!(unsafe { api.fake_domain_get_state(1, &mut err) }, -1);
        assert!(unsafe { api.fake_domain_get_name(1, &mut err) }.is_null());
        assert_eq!(
            err.message.as_deref(),
            Some("Failed to open libvirt: libvirt.so.0: cannot open shared object file")
        );
    }

    assert_eq!(counters.opens.load(Ordering::SeqCst), 1);
    assert_eq!(counters.lookups.load(Ordering::SeqCst), 0);
}

#[test]
fn test_satellite_library_failure_is_isolated() {
    let loader = FakeLoader {
        broken: vec![Library::LibvirtQemu],
        ..FakeLoader::default()
    };
    let (api, _) = fake_api(loader, Version::BUILD);
    let mut err = ErrorRecord::default();

    assert_eq!(unsafe { api.fake_qemu_command(c"query-status".as_ptr(), &mut err) }, -1);
    assert!(err.is_set());

    let mut err = ErrorRecord::default();
    assert_eq!(unsafe { api.fake_domain_get_state(2, &mut err) }, 20);
    assert!(!err.is_set());
}

#[test]
fn test_custom_soname_reaches_loader() {
    let loader = FakeLoader {
        broken: vec![Library::LibvirtQemu],
        ..FakeLoader::default()
    };
    let counters = loader.counters.clone();
    let config = Config::default().with_soname(Library::LibvirtQemu, "/opt/libvirt/libvirt-qemu.so");
    let api = FakeApi::new(Arc::new(loader), config);
    let mut err = ErrorRecord::default();

    unsafe { api.fake_qemu_command(ptr::null(), &mut err) };

    assert_eq!(
        err.message.as_deref(),
        Some("Failed to open libvirt-qemu: /opt/libvirt/libvirt-qemu.so: cannot open shared object file")
    );
    assert_eq!(counters.opens.load(Ordering::SeqCst), 1);
}

#[test]
fn test_concurrent_callers_share_one_lookup() {
    const THREADS: usize = 8;
    let (api, counters) = fake_api(FakeLoader::default(), Version::BUILD);
    let barrier = Barrier::new(THREADS);

    thread::scope(|scope| {
        for domain in 0..THREADS as c_int {
            let api = &api;
            let barrier = &barrier;
            scope.spawn(move || {
                let mut err = ErrorRecord::default();
                barrier.wait();
                assert_eq!(unsafe { api.fake_domain_get_state(domain, &mut err) }, domain * 10);
            });
        }
    });

    assert_eq!(counters.opens.load(Ordering::SeqCst), 1);
    assert_eq!(counters.lookups.load(Ordering::SeqCst), 1);
}
