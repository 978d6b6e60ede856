//! Manifold registry CLI.
//!
//! Walks a manifest directory, applies load policies, and reports what was
//! indexed together with every accumulated error.

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use manifold_registry::{config, Index};

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = std::env::args().skip(1);
    let Some(dir) = args.next() else {
        eprintln!("usage: manifold-registry <manifest-dir> [policy-file]");
        return ExitCode::FAILURE;
    };

    let policies = match args.next() {
        Some(path) => {
            let set = match config::load_from_file(Path::new(&path)) {
                Ok(set) => set,
                Err(e) => {
                    eprintln!("{path}: {e}");
                    return ExitCode::FAILURE;
                }
            };
            match set.compile() {
                Ok(policies) => policies,
                Err(e) => {
                    eprintln!("{path}: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        None => Vec::new(),
    };

    let mut index = Index::new();
    let errs = index.load(Path::new(&dir), &policies);

    println!(
        "{} kinds, {} resources, {} templates, {} repositories",
        index.kind_count(),
        index.resource_count(),
        index.template_count(),
        index.repository_count()
    );

    if errs.is_empty() {
        ExitCode::SUCCESS
    } else {
        for e in &errs {
            eprintln!("{e}");
        }
        ExitCode::FAILURE
    }
}
