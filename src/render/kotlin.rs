//! Kotlin source for the `Versions` and `Libs` objects.
//!
//! Each property is laid out in Rust as a list of already indented lines;
//! tera only frames them into the object with its header comment.

use serde::Serialize;
use tera::{Context as TeraContext, Tera};

use super::{KotlinOptions, sorted_for_render};
use crate::constants::{GRADLE_LATEST_VERSION, MAX_INLINE_COMMENT_WIDTH};
use crate::core::DepsymError;
use crate::models::NamedDependency;
use crate::resolver::ResolvedSet;

/// Frame shared by both generated objects.
const OBJECT_TEMPLATE: &str = r#"/**
{% for line in header %} *{% if line %} {{ line }}{% endif %}
{% endfor %} */
object {{ object }} {
{% for property in properties %}{% if not loop.first %}
{% endif %}{% for line in property %}{{ line }}
{% endfor %}{% endfor %}}
"#;

#[derive(Debug, Serialize)]
struct ObjectView<'a> {
    object: &'a str,
    header: Vec<String>,
    properties: Vec<Vec<String>>,
}

fn versions_header() -> Vec<String> {
    vec![
        "Generated by depsym".to_string(),
        String::new(),
        "Find which updates are available by running".to_string(),
        "    `$ depsym generate`".to_string(),
        "This will only update the comments.".to_string(),
        String::new(),
        "YOU are responsible for updating manually the dependency version.".to_string(),
    ]
}

fn libs_header() -> Vec<String> {
    vec![
        "Generated by depsym".to_string(),
        String::new(),
        "Update this file with".to_string(),
        "  `$ depsym generate`".to_string(),
    ]
}

/// Kotlin string literal for `value`.
pub fn kotlin_string(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '$' => literal.push_str("${'$'}"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

fn kdoc(indent: &str, lines: &[String]) -> Vec<String> {
    let mut doc = vec![format!("{indent}/**")];
    doc.extend(lines.iter().map(|line| format!("{indent} * {line}")));
    doc.push(format!("{indent} */"));
    doc
}

/// Trailing comment of a version property, if any.
fn version_comment(dependency: &NamedDependency) -> Option<String> {
    if !dependency.record.has_version() {
        return Some("// No version to track".to_string());
    }
    dependency.record.newer_version().map(|newer| format!("// available: {}", kotlin_string(newer)))
}

fn version_property(dependency: &NamedDependency, indent: &str) -> Vec<String> {
    let name = &dependency.symbol_name;
    let version = &dependency.record.version;
    let declaration = format!("{indent}const val {name}: String = {}", kotlin_string(version));

    match version_comment(dependency) {
        None => vec![declaration],
        Some(comment) if comment.len() + name.len() + version.len() > MAX_INLINE_COMMENT_WIDTH => {
            vec![declaration, format!("{indent}{indent}{comment}")]
        }
        Some(comment) => vec![format!("{declaration} {comment}")],
    }
}

/// `gradleLatestVersion`: the latest known build-tool version, documented with the running one.
fn build_tool_property(dependency: &NamedDependency, indent: &str) -> Vec<String> {
    let running = &dependency.record.version;
    let latest = dependency.record.newer_version().unwrap_or(running);

    let mut lines = kdoc(
        indent,
        &[
            format!("Current version: {}", kotlin_string(running)),
            format!("Update with `./gradlew wrapper --gradle-version {latest}`"),
        ],
    );
    lines.push(format!("{indent}const val {GRADLE_LATEST_VERSION}: String = {}", kotlin_string(latest)));
    lines
}

fn library_property(dependency: &NamedDependency, options: &KotlinOptions) -> Vec<String> {
    let indent = options.indent.as_str();
    let record = &dependency.record;

    let mut lines = match &record.project_url {
        Some(url) => kdoc(indent, std::slice::from_ref(url)),
        None => Vec::new(),
    };

    let value = if record.has_version() {
        format!(
            "{} + {}.{}",
            kotlin_string(&format!("{}:", record.coordinate())),
            options.versions_name,
            dependency.symbol_name
        )
    } else {
        kotlin_string(&record.coordinate())
    };
    lines.push(format!("{indent}const val {}: String = {value}", dependency.coordinate_symbol_name));
    lines
}

fn render_object(object: &str, header: Vec<String>, properties: Vec<Vec<String>>) -> Result<String, DepsymError> {
    let view = ObjectView {
        object,
        header,
        properties,
    };
    let context = TeraContext::from_serialize(&view).map_err(|e| DepsymError::TemplateError {
        template: object.to_string(),
        reason: e.to_string(),
    })?;

    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.render_str(OBJECT_TEMPLATE, &context).map_err(|e| DepsymError::TemplateError {
        template: object.to_string(),
        reason: e.to_string(),
    })
}

/// Source of the `Versions` object: one property per distinct version symbol.
///
/// # Errors
///
/// [`DepsymError::TemplateError`] if rendering fails.
pub fn render_versions(resolved: &ResolvedSet, options: &KotlinOptions) -> Result<String, DepsymError> {
    let (build_tool, dependencies): (Vec<&NamedDependency>, Vec<&NamedDependency>) =
        resolved.distinct_versions().partition(|d| d.record.is_build_tool());

    let mut properties: Vec<Vec<String>> =
        sorted_for_render(dependencies, options.order_by, |d| d.symbol_name.as_str())
            .into_iter()
            .map(|d| version_property(d, &options.indent))
            .collect();
    properties.extend(build_tool.into_iter().map(|d| build_tool_property(d, &options.indent)));

    render_object(&options.versions_name, versions_header(), properties)
}

/// Source of the `Libs` object: one property per coordinate.
///
/// # Errors
///
/// [`DepsymError::TemplateError`] if rendering fails.
pub fn render_libs(resolved: &ResolvedSet, options: &KotlinOptions) -> Result<String, DepsymError> {
    let dependencies: Vec<&NamedDependency> = resolved.iter().filter(|d| !d.record.is_build_tool()).collect();

    let properties = sorted_for_render(dependencies, options.order_by, |d| d.coordinate_symbol_name.as_str())
        .into_iter()
        .map(|d| library_property(d, options))
        .collect();

    render_object(&options.libs_name, libs_header(), properties)
}
