// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

//! Report which wrapped functions the installed libvirt provides.
//!
//! ```text
//! cargo run --example probe -- --missing-only --library libvirt-qemu
//! ```

use std::{ffi::c_ulong, ptr};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use virtdl::{Config, Error, ErrorRecord, Library, TARGET_VERSION_ENV, Version, VirtApi};

#[derive(Debug, Parser)]
#[command(version, about = "Probe the installed libvirt libraries")]
struct Args {
    /// Treat functions newer than this version as unavailable.
    #[arg(long, env = TARGET_VERSION_ENV, default_value_t = Version::BUILD)]
    target_version: Version,

    /// Shared object to load instead of libvirt.so.0.
    #[arg(long)]
    libvirt: Option<String>,

    /// Only probe functions of this library (libvirt, libvirt-lxc,
    /// libvirt-qemu or libvirt-admin).
    #[arg(long, value_parser = parse_library)]
    library: Option<Library>,

    /// Only list functions that cannot be called.
    #[arg(long)]
    missing_only: bool,
}

fn parse_library(name: &str) -> Result<Library, String> {
    Library::ALL
        .into_iter()
        .find(|library| library.name() == name)
        .ok_or_else(|| format!("unknown library {name:?}"))
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

fn main() {
    setup_logging();
    let args = Args::parse();

    let mut config = Config::default().with_target_version(args.target_version);
    if let Some(soname) = &args.libvirt {
        config = config.with_soname(Library::Libvirt, soname);
    }
    let api = VirtApi::new(VirtApi::default_loader(), config);

    let mut err = ErrorRecord::default();
    let mut lib_ver: c_ulong = 0;
    if unsafe { api.get_version(&mut lib_ver, ptr::null(), ptr::null_mut(), &mut err) } == 0 {
        println!("libvirt {}", Version::from_number(lib_ver as u64));
    } else {
        println!("libvirt version unknown: {err}");
    }

    let registry = api.registry();
    println!("target version {}", registry.config().target_version());
    let (mut available, mut missing) = (0, 0);
    for (id, spec) in registry.functions().iter().enumerate() {
        if args.library.is_some_and(|library| library != spec.library) {
            continue;
        }
        match registry.prepare(id) {
            Ok(_) => {
                available += 1;
                if !args.missing_only {
                    println!("  ok       {:<48} {}", spec.name, spec.library);
                }
            }
            Err(Error::Unavailable { .. }) => {
                missing += 1;
                println!("  gated    {:<48} since {}", spec.name, spec.since);
            }
            Err(err) => {
                missing += 1;
                println!("  missing  {:<48} {err}", spec.name);
            }
        }
    }

    println!("{available} available, {missing} unavailable");
    for library in Library::ALL {
        println!("{library}: {:?}", registry.open_state(library));
    }
}
