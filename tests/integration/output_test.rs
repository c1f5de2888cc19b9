//! Rendering analysed packages and writing documents

use gopherdoc::{
    core::{DocGenerator, PackageAnalyser},
    enhance::{enhance_package, Enhancer, GENERATED_EXAMPLE_NAME},
    error::{DocError, Result},
    models::package::{FunctionInfo, PackageInfo, TypeInfo},
    output::{create_renderer, MarkdownRenderer, Renderer},
    OutputFormat,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const GEO_GO: &str = r#"// Package geo does geometry.
package geo

// Pi is close enough.
const Pi = 3.14

const epsilon = 1e-9

// Point is a position on the plane.
type Point struct {
	X, Y float64 `json:"x"`
	label string
}

type Angle float64

// Dist measures the distance between two points.
//
// Example:
//	d := geo.Dist(a, b)
func Dist(a, b Point) float64 { return 0 }

func (p Point) String() string { return "" }

func normalize(p *Point) {}
"#;

fn analysed() -> (TempDir, PackageInfo) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("geo.go"), GEO_GO).unwrap();
    let pkg = PackageAnalyser::go(false).analyse_package(dir.path()).unwrap();
    (dir, pkg)
}

#[test]
fn test_markdown_public_view() {
    let (_dir, pkg) = analysed();
    let text = MarkdownRenderer::new(false).render(&pkg).unwrap();

    assert!(text.starts_with("# geo\n"));
    assert!(text.contains("Package geo does geometry."));
    assert!(text.contains("## API Reference"));
    assert!(text.contains("func Dist(a Point, b Point) float64"));
    assert!(text.contains("d := geo.Dist(a, b)"));
    assert!(text.contains("#### Point.String"));
    assert!(text.contains("type Point struct"));
    assert!(text.contains("| `Pi` |"));

    assert!(!text.contains("normalize"));
    assert!(!text.contains("epsilon"));
}

#[test]
fn test_markdown_private_view() {
    let (_dir, pkg) = analysed();
    let text = MarkdownRenderer::new(true).render(&pkg).unwrap();

    assert!(text.contains("func normalize(p *Point)"));
    assert!(text.contains("epsilon"));
}

#[test]
fn test_json_view_keeps_everything() {
    let (_dir, pkg) = analysed();
    let text = create_renderer(OutputFormat::Json, false).render(&pkg).unwrap();
    let parsed: PackageInfo = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed, pkg);
    assert!(parsed.find_function("normalize", None).is_some());

    let point = parsed.find_type("Point").unwrap();
    let names: Vec<_> = point.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["X", "Y", "label"]);
    assert_eq!(point.fields[0].tag, point.fields[1].tag);
}

struct Writer;

impl Enhancer for Writer {
    fn package_description(&self, pkg: &PackageInfo) -> Result<Option<String>> {
        Ok(Some(format!("Package {} provides planar geometry helpers for callers.", pkg.name)))
    }
    fn function_description(&self, func: &FunctionInfo) -> Result<Option<String>> {
        Ok(Some(format!("{} does its job well and quickly.", func.name)))
    }
    fn type_description(&self, _ty: &TypeInfo) -> Result<Option<String>> {
        Err(DocError::config_error("service unavailable"))
    }
    fn package_example(&self, _pkg: &PackageInfo) -> Result<Option<String>> {
        Ok(Some("p := geo.Point{X: 1}".to_string()))
    }
    fn function_example(&self, func: &FunctionInfo, _pkg: &PackageInfo) -> Result<Option<String>> {
        Ok(Some(format!("geo.{}()", func.name)))
    }
}

#[test]
fn test_enhancement_only_fills_gaps() {
    let (_dir, mut pkg) = analysed();
    let stats = enhance_package(&mut pkg, &Writer, true);

    assert_eq!(pkg.description, "Package geo provides planar geometry helpers for callers.");
    assert_eq!(pkg.examples.len(), 1);
    assert_eq!(pkg.examples[0].name, GENERATED_EXAMPLE_NAME);

    // Long enough already
    let dist = pkg.find_function("Dist", None).unwrap();
    assert_eq!(dist.description, "Dist measures the distance between two points.");
    assert_eq!(dist.examples, vec!["d := geo.Dist(a, b)\n".to_string()]);

    let normalize = pkg.find_function("normalize", None).unwrap();
    assert!(normalize.examples.is_empty());

    assert_eq!(pkg.find_type("Point").unwrap().description, "Point is a position on the plane.");
    // The type service failed, so Angle keeps its empty description
    assert_eq!(pkg.find_type("Angle").unwrap().description, "");
    assert_eq!(stats.failures, 1);
}

#[test]
fn test_generator_writes_named_files() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(src.path().join("geo.go"), GEO_GO).unwrap();

    for (format, file) in [(OutputFormat::Markdown, "geo.md"), (OutputFormat::Json, "geo.json")] {
        let generator = DocGenerator::new(
            PackageAnalyser::go(false),
            create_renderer(format, false),
            out.path().join("nested"),
        );
        let documented = generator.generate(src.path()).unwrap();
        assert_eq!(documented.output, out.path().join("nested").join(file));
        assert!(Path::new(&documented.output).is_file());
    }
}
