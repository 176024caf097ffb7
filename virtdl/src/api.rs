// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

use std::sync::{Arc, OnceLock};

use tracing::warn;

use crate::{Config, Loader, ffi::*};

crate::virt_api! {
    #[static_link]
    pub struct VirtApi;

    include!("bindings/error.rs");
    include!("bindings/common.rs");
    include!("bindings/host.rs");
    include!("bindings/domain.rs");
    include!("bindings/network.rs");
    include!("bindings/storage.rs");
    include!("bindings/stream.rs");
    include!("bindings/interface.rs");
    include!("bindings/nodedev.rs");
    include!("bindings/nwfilter.rs");
    include!("bindings/secret.rs");
    include!("bindings/snapshot.rs");
    include!("bindings/lxc.rs");
    include!("bindings/qemu.rs");
    include!("bindings/admin.rs");
}

impl VirtApi {
    /// The process-wide API, created on first use and never torn down.
    ///
    /// Configuration comes from the environment (see [`Config::from_env`]).
    /// An invalid environment is reported once and the defaults are used.
    pub fn global() -> &'static VirtApi {
        static GLOBAL: OnceLock<VirtApi> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let config = Config::from_env().unwrap_or_else(|err| {
                warn!(%err, "ignoring libvirt loader configuration from the environment");
                Config::default()
            });
            VirtApi::new(Self::default_loader(), config)
        })
    }

    /// Loader used by [`VirtApi::global`]: link-time references with the
    /// `static-link` feature, `dlopen` otherwise.
    pub fn default_loader() -> Arc<dyn Loader> {
        #[cfg(feature = "static-link")]
        {
            Arc::new(Self::static_loader())
        }
        #[cfg(not(feature = "static-link"))]
        {
            Arc::new(crate::DynamicLoader)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{Failure, Library, Version};

    fn spec(name: &str) -> &'static crate::FunctionSpec {
        VirtApi::FUNCTIONS
            .iter()
            .find(|spec| spec.name == name)
            .unwrap_or_else(|| panic!("{name} is not wrapped"))
    }

    #[test]
    fn test_function_names_are_unique() {
        let mut names = HashSet::new();
        for spec in VirtApi::FUNCTIONS {
            assert!(names.insert(spec.name), "{} is wrapped twice", spec.name);
        }
    }

    #[test]
    fn test_minimum_versions() {
        assert_eq!(spec("virConnectOpen").since, Version::new(0, 0, 3));
        assert_eq!(spec("virDomainQemuMonitorCommand").library, Library::LibvirtQemu);
        assert_eq!(spec("virDomainLxcOpenNamespace").library, Library::LibvirtLxc);
        assert_eq!(spec("virAdmConnectOpen").library, Library::LibvirtAdmin);
        assert_eq!(spec("virNodeDeviceUpdate").since, Version::new(10, 1, 0));
        assert_eq!(spec("virStreamSparseSendAll").since, Version::new(3, 4, 0));
        assert!(VirtApi::FUNCTIONS.iter().all(|spec| spec.since <= Version::BUILD));
    }

    #[test]
    fn test_failure_shapes() {
        assert_eq!(spec("virConnectClose").failure, Failure::Negative);
        assert_eq!(spec("virConnectOpen").failure, Failure::Null);
        assert_eq!(spec("virConnectGetHostname").failure, Failure::Null);
        assert_eq!(spec("virGetLastError").failure, Failure::Never);
        assert_eq!(spec("virResetLastError").failure, Failure::Never);
        assert_eq!(spec("virSecretGetValue").failure, Failure::Null);
        assert_eq!(spec("virSecretGetUUIDString").failure, Failure::Negative);
        assert_eq!(spec("virDomainSnapshotCurrent").failure, Failure::Null);
    }

    #[test]
    fn test_every_object_family_is_wrapped() {
        for name in [
            "virInterfaceChangeBegin",
            "virNodeDeviceDetachFlags",
            "virNWFilterBindingCreateXML",
            "virSecretLookupByUsage",
            "virDomainSnapshotListAllChildren",
            "virStreamRecvAll",
            "virStreamEventAddCallback",
        ] {
            assert_eq!(spec(name).library, Library::Libvirt);
        }
        assert_eq!(VirtApi::FUNCTIONS.len(), 543);
    }

    #[test]
    fn test_gated_wrapper_reports_version() {
        let config = Config::default().with_target_version(Version::new(0, 0, 1));
        let api = VirtApi::new(Arc::new(crate::DynamicLoader), config);
        let mut err = crate::ErrorRecord::default();

        let conn = unsafe { api.connect_open(std::ptr::null(), &mut err) };

        assert!(conn.is_null());
        assert_eq!(
            err.message.as_deref(),
            Some("Function virConnectOpen not available prior to libvirt version 0.0.3")
        );
        assert_eq!(
            api.registry().open_state(Library::Libvirt),
            crate::OpenState::NotAttempted
        );
    }
}
