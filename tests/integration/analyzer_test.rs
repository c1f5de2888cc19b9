//! Package analysis over real Go sources written to a temporary directory

use gopherdoc::{
    core::{function_signature, PackageAnalyser},
    error::DocError,
    models::package::TypeKind,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const KV_GO: &str = r#"// Package kv is a tiny in-memory key/value store.
//
// Usage:
//
//	s := kv.New()
//	s.Put("a", "1")
//
// Values are copied on write.
package kv

import (
	"errors"
	"sync"
)

// ErrMissing is returned when a key is absent.
var ErrMissing = errors.New("kv: missing key")

// Limits for stored values.
const (
	MaxKey, MaxValue = 64, 1024
	MinKey, MinValue = 1
)

// Store holds the data.
type Store struct {
	mu   sync.Mutex
	data map[string]string `json:"data"`
	// Hits counts lookups.
	Hits int
	Reader
}

// Reader reads values.
type Reader interface {
	Get(key string) (string, error)
}

// New creates a store.
func New() *Store { return &Store{} }

// Get returns the value for key.
//
// Example:
//     v, err := s.Get("a")
func (s *Store) Get(key string) (string, error) {
	return "", nil
}

func (s *Store) put(key, value string) {}
"#;

const HTTP_GO: &str = r#"package kv

import (
	"net/http"
	"sync"
)

// Handler serves the store over HTTP.
func Handler(s *Store) http.Handler { return nil }
"#;

const KV_TEST_GO: &str = r#"package kv_test

import "testing"

func TestGet(t *testing.T) {}
"#;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn kv_package() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "kv.go", KV_GO);
    write(dir.path(), "http.go", HTTP_GO);
    write(dir.path(), "kv_test.go", KV_TEST_GO);
    dir
}

#[test]
fn test_package_header() {
    let dir = kv_package();
    let pkg = PackageAnalyser::go(false).analyse_package(dir.path()).unwrap();

    assert_eq!(pkg.name, "kv");
    assert_eq!(pkg.path, dir.path());
    assert!(pkg.description.starts_with("Package kv is a tiny in-memory key/value store."));
    assert!(pkg.description.ends_with("Values are copied on write."));
    assert_eq!(
        pkg.imports.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["errors", "net/http", "sync"]
    );

    assert_eq!(pkg.examples.len(), 1);
    assert_eq!(pkg.examples[0].name, "Example");
    assert_eq!(pkg.examples[0].code, "s := kv.New()\ns.Put(\"a\", \"1\")\n");
}

#[test]
fn test_functions_and_methods() {
    let dir = kv_package();
    let pkg = PackageAnalyser::go(false).analyse_package(dir.path()).unwrap();

    let names: Vec<_> = pkg.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Handler", "New", "Get", "put"]);
    assert!(pkg.find_function("TestGet", None).is_none());

    let new = pkg.find_function("New", None).unwrap();
    assert_eq!(new.signature, "func New() *Store");
    assert!(new.is_exported);
    assert!(!new.is_method);

    let get = pkg.find_function("Get", Some("Store")).unwrap();
    assert_eq!(get.signature, "func (s *Store) Get(key string) (string, error)");
    assert!(get.is_method);
    assert_eq!(get.parameters.len(), 1);
    assert_eq!(get.parameters[0].name, "key");
    assert_eq!(get.returns.len(), 2);
    assert_eq!(get.examples, vec!["v, err := s.Get(\"a\")\n".to_string()]);

    let put = pkg.find_function("put", Some("Store")).unwrap();
    assert!(!put.is_exported);
    assert_eq!(put.signature, "func (s *Store) put(key string, value string)");

    let store = pkg.find_type("Store").unwrap();
    assert_eq!(store.methods, vec!["Get".to_string(), "put".to_string()]);
    for method in &store.methods {
        assert!(pkg.find_function(method, Some("Store")).is_some());
    }
}

#[test]
fn test_types_and_fields() {
    let dir = kv_package();
    let pkg = PackageAnalyser::go(false).analyse_package(dir.path()).unwrap();

    let store = pkg.find_type("Store").unwrap();
    assert_eq!(store.kind, TypeKind::Struct);
    assert_eq!(store.description, "Store holds the data.");

    let fields: Vec<_> = store
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.type_text.as_str()))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("mu", "sync.Mutex"),
            ("data", "map[string]string"),
            ("Hits", "int"),
            ("", "Reader"),
        ]
    );
    assert!(store.fields[1].tag.contains("json:\"data\""));
    assert_eq!(store.fields[2].description, "Hits counts lookups.");
    assert!(store.fields[3].is_embedded());

    let reader = pkg.find_type("Reader").unwrap();
    assert_eq!(reader.kind, TypeKind::Interface);
    assert!(reader.fields.is_empty());
}

#[test]
fn test_constant_and_variable_groups() {
    let dir = kv_package();
    let pkg = PackageAnalyser::go(false).analyse_package(dir.path()).unwrap();

    let constants: Vec<_> = pkg
        .constants
        .iter()
        .map(|c| (c.name.as_str(), c.value.as_deref()))
        .collect();
    assert_eq!(
        constants,
        vec![
            ("MaxKey", Some("64")),
            ("MaxValue", Some("1024")),
            ("MinKey", Some("1")),
            ("MinValue", None),
        ]
    );
    assert!(pkg
        .constants
        .iter()
        .all(|c| c.description == "Limits for stored values."));

    assert_eq!(pkg.variables.len(), 1);
    assert_eq!(pkg.variables[0].name, "ErrMissing");
    assert_eq!(pkg.variables[0].description, "ErrMissing is returned when a key is absent.");
}

#[test]
fn test_analysis_is_deterministic() {
    let dir = kv_package();
    let analyser = PackageAnalyser::go(false);

    let first = analyser.analyse_package(dir.path()).unwrap();
    let second = analyser.analyse_package(dir.path()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_test_only_directory_has_no_package() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "kv_test.go", KV_TEST_GO);

    let err = PackageAnalyser::go(false).analyse_package(dir.path()).unwrap_err();
    assert!(matches!(err, DocError::NoPackageFound { .. }));

    let empty = TempDir::new().unwrap();
    let err = PackageAnalyser::go(true).analyse_package(empty.path()).unwrap_err();
    assert!(matches!(err, DocError::NoPackageFound { .. }));
}

#[test]
fn test_syntax_error_fails_the_directory() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "ok.go", "package broken\n\nfunc Fine() {}\n");
    write(dir.path(), "zz.go", "package broken\n\nfunc Broken( {\n");

    match PackageAnalyser::go(false).analyse_package(dir.path()).unwrap_err() {
        DocError::Load { path, message, .. } => {
            assert!(path.ends_with("zz.go"));
            assert!(message.starts_with("syntax error at line"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_signature_is_pure() {
    use gopherdoc::models::syntax::{FieldGroup, FuncDecl, FuncType, TypeExpr};

    let decl = FuncDecl {
        name: "Copy".to_string(),
        ty: Some(FuncType {
            params: vec![
                FieldGroup::named("dst", TypeExpr::qualified("io", "Writer")),
                FieldGroup::named("src", TypeExpr::qualified("io", "Reader")),
            ],
            results: Some(vec![
                FieldGroup::anonymous(TypeExpr::ident("int64")),
                FieldGroup::anonymous(TypeExpr::ident("error")),
            ]),
        }),
        doc: String::new(),
        receiver: None,
    };

    let first = function_signature(&decl);
    assert_eq!(first, "func Copy(dst io.Writer, src io.Reader) (int64, error)");
    assert_eq!(function_signature(&decl), first);
}
