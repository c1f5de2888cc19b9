//! Batch documentation over a small Go module tree

use gopherdoc::{
    core::{discover_package_dirs, ParallelWalker, Walker},
    error::ErrorSeverity,
    models::config::{OutputFormat, Settings},
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A module with three packages, a broken one, and directories that must be skipped
fn module() -> TempDir {
    let root = TempDir::new().unwrap();
    let p = root.path();

    write(&p.join("go.mod"), "module example.com/shop\n\ngo 1.22\n");
    write(
        &p.join("shop.go"),
        "// Package shop sells things.\npackage shop\n\n// Version of the shop.\nconst Version = \"1.0\"\n",
    );
    write(
        &p.join("cart/cart.go"),
        "package cart\n\n// Cart holds items.\ntype Cart struct {\n\tItems []string\n}\n\n// Add puts an item in the cart.\nfunc (c *Cart) Add(item string) {}\n",
    );
    write(&p.join("cart/cart_test.go"), "package cart\n\nfunc TestAdd() {}\n");
    write(
        &p.join("internal/price/price.go"),
        "package price\n\nfunc total(xs ...int) int { return 0 }\n",
    );
    write(&p.join("broken/broken.go"), "package broken\n\nvar x = \n");
    write(&p.join("vendor/dep/dep.go"), "package dep\n");
    write(&p.join("testdata/sample.go"), "package sample\n");
    write(&p.join("e2e_test/e2e.go"), "package e2e\n");
    write(&p.join("mocks/mock.go"), "package mocks\n");
    write(&p.join("assets/logo.txt"), "logo\n");

    root
}

fn settings(root: &TempDir, out: &TempDir) -> Settings {
    Settings {
        scan_path: root.path().to_path_buf(),
        output_dir: out.path().to_path_buf(),
        exclude_patterns: vec!["mocks".to_string()],
        ..Default::default()
    }
}

#[test]
fn test_discovery() {
    let root = module();
    let out = TempDir::new().unwrap();

    let discovery = discover_package_dirs(&settings(&root, &out)).unwrap();
    let found: Vec<_> = discovery
        .dirs
        .iter()
        .map(|d| d.strip_prefix(root.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();

    assert_eq!(found, vec!["", "broken", "cart", "internal/price"]);
}

#[test]
fn test_sequential_batch() {
    let root = module();
    let out = TempDir::new().unwrap();

    let report = Walker::new(settings(&root, &out)).run().unwrap();

    let names: Vec<_> = report.packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["shop", "cart", "price"]);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].severity, ErrorSeverity::Error);
    assert!(report.errors[0].path.ends_with("broken"));
    assert_eq!(report.worst_severity(), Some(ErrorSeverity::Error));

    for file in ["shop.md", "cart.md", "price.md"] {
        assert!(out.path().join(file).is_file(), "{} missing", file);
    }
    assert!(!out.path().join("dep.md").exists());
    assert!(!out.path().join("mocks.md").exists());
}

#[test]
fn test_parallel_batch_matches_sequential() {
    let root = module();
    let out_seq = TempDir::new().unwrap();
    let out_par = TempDir::new().unwrap();

    let sequential = Walker::new(settings(&root, &out_seq)).run().unwrap();
    let parallel = ParallelWalker::new(Settings {
        jobs: Some(3),
        ..settings(&root, &out_par)
    })
    .run()
    .unwrap();

    let summary = |r: &gopherdoc::BatchReport| {
        r.packages
            .iter()
            .map(|p| (p.name.clone(), p.functions, p.types, p.exported))
            .collect::<Vec<_>>()
    };
    assert_eq!(summary(&sequential), summary(&parallel));
    assert_eq!(sequential.errors.len(), parallel.errors.len());
    assert_eq!(sequential.directories_scanned, parallel.directories_scanned);

    for file in ["shop.md", "cart.md", "price.md"] {
        assert_eq!(
            fs::read_to_string(out_seq.path().join(file)).unwrap(),
            fs::read_to_string(out_par.path().join(file)).unwrap()
        );
    }
}

#[test]
fn test_single_package_and_json() {
    let root = module();
    let out = TempDir::new().unwrap();

    let report = Walker::new(Settings {
        package: Some("cart".to_string()),
        output_format: OutputFormat::Json,
        ..settings(&root, &out)
    })
    .run()
    .unwrap();

    assert_eq!(report.packages.len(), 1);
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("cart.json")).unwrap()).unwrap();
    assert_eq!(json["name"], "cart");
    assert_eq!(json["types"][0]["name"], "Cart");
    assert_eq!(json["types"][0]["kind"], "struct");
    assert_eq!(json["types"][0]["methods"][0], "Add");
    assert_eq!(json["functions"][0]["receiver"], "Cart");
}

#[test]
fn test_include_test_files_adds_test_declarations() {
    let root = module();
    let out = TempDir::new().unwrap();

    let report = Walker::new(Settings {
        package: Some("cart".to_string()),
        include_test_files: true,
        ..settings(&root, &out)
    })
    .run()
    .unwrap();

    // cart_test.go declares package cart, so it joins the package when included
    assert_eq!(report.packages[0].functions, 2);
}
