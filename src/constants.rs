//! Global constants used throughout the depsym codebase.
//!
//! Default file locations, reserved markers of the generated properties block,
//! and the built-in naming tables live here so the magic strings are
//! discoverable in one place.

/// Default location of the dependency-updates JSON report.
pub const DEFAULT_REPORT_PATH: &str = "build/dependencyUpdates/report.json";

/// Project configuration file name.
pub const CONFIG_FILE_NAME: &str = "depsym.toml";

/// Default object name of the library-coordinate table.
pub const DEFAULT_LIBS: &str = "Libs";

/// Default object name of the version table.
pub const DEFAULT_VERSIONS: &str = "Versions";

/// Default indentation of generated Kotlin.
pub const DEFAULT_INDENT: &str = "    ";

/// Default directory receiving the Kotlin tables.
pub const DEFAULT_BUILDSRC_DIR: &str = "buildSrc";

/// Default target of the properties merge.
pub const DEFAULT_PROPERTIES_FILE: &str = "gradle.properties";

/// Version sentinel meaning "no version to track".
pub const NO_VERSION: &str = "none";

/// Group of the synthetic build-tool record.
pub const BUILD_TOOL_GROUP: &str = "org.gradle";

/// Module name (and generated symbol) of the synthetic build-tool record.
pub const GRADLE_LATEST_VERSION: &str = "gradleLatestVersion";

/// Module suffix identifying build plugins in the report.
pub const PLUGIN_MARKER_SUFFIX: &str = ".gradle.plugin";

/// Module names too generic to be used as symbols on their own.
///
/// A dependency whose module matches one of these always uses the
/// group+module form.
pub const MEANINGLESS_NAMES: &[&str] = &[
    "common",
    "core",
    "testing",
    "runtime",
    "extensions",
    "compiler",
    "migration",
    "db",
    "rules",
    "runner",
    "monitor",
    "loader",
    "media",
    "print",
    "io",
    "collection",
    "gradle",
    "android",
];

/// Built-in virtual groups as `(label, group, module prefix)`.
pub const DEFAULT_VIRTUAL_GROUPS: &[(&str, &str, &str)] = &[
    ("org.jetbrains.kotlinx.kotlinx-coroutines", "org.jetbrains.kotlinx", "kotlinx-coroutines"),
    ("org.jetbrains.kotlinx.kotlinx-serialization", "org.jetbrains.kotlinx", "kotlinx-serialization"),
];

/// First line of the generated properties block.
pub const PROPERTIES_START_MARKER: &str = "# Dependencies and Plugin versions with their available updates";

/// Header lines opening the generated properties block, marker first.
pub const PROPERTIES_HEADER: &[&str] = &[
    PROPERTIES_START_MARKER,
    "# Generated by $ depsym properties",
    "# You can edit the rest of the file, it will be kept intact",
];

/// Header lines written by earlier releases; still recognized and removed.
pub const LEGACY_PROPERTIES_LINES: &[&str] = &["# Plugin versions"];

/// Inline marker of an update annotation line.
pub const AVAILABLE_MARKER: &str = "# available=";

/// Line prefixes owned by the generator.
pub const GENERATED_LINE_PREFIXES: &[&str] = &["version.", "plugin."];

/// Line width after which the update comment moves to its own line.
pub const MAX_INLINE_COMMENT_WIDTH: usize = 70;

/// `.gitignore` written into a fresh buildSrc directory.
pub const INITIAL_GITIGNORE: &str = ".gradle/\nbuild/\n";

/// `build.gradle.kts` written into a fresh buildSrc directory.
pub const INITIAL_BUILD_GRADLE_KTS: &str = "plugins {\n    `kotlin-dsl`\n}\nrepositories {\n    mavenCentral()\n}\n";
