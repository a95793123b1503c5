use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::path::Path;

pub const DEFAULT_COLOR: &str = "#ededed";

/// Bucket key for files without an extension.
pub const NO_EXTENSION: &str = "(none)";

const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("Python", "#3572A5"),
    ("Rust", "#dea584"),
    ("JavaScript", "#f1e05a"),
    ("TypeScript", "#2b7489"),
    ("C++", "#f34b7d"),
    ("C++ Header", "#f34b7d"),
    ("C", "#555555"),
    ("C Header", "#555555"),
    ("Java", "#b07219"),
    ("Go", "#00ADD8"),
    ("Ruby", "#701516"),
    ("PHP", "#4F5D95"),
    ("Dart", "#00B4AB"),
    ("Swift", "#F05138"),
    ("Kotlin", "#A97BFF"),
    ("Zig", "#ec915c"),
    ("Lua", "#000080"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Vue", "#2c3e50"),
    ("Svelte", "#ff3e00"),
    ("SCSS", "#c6538c"),
    ("GLSL", "#5686a5"),
    ("WGSL", "#3b8686"),
    ("HLSL", "#a5a510"),
    ("Cuda", "#3A4E3A"),
    ("ShaderLab", "#222c37"),
    ("WebAssembly", "#04133b"),
    ("Shell", "#89e051"),
    ("Dockerfile", "#384d54"),
    ("Makefile", "#427819"),
    ("CMake", "#064f8d"),
    ("YAML", "#cb171e"),
    ("TOML", "#9c4221"),
    ("JSON", "#292929"),
    ("HCL", "#844FBA"),
    ("Awk", "#c30e9b"),
    ("Markdown", "#083fa1"),
    ("TeX", "#3D6117"),
    ("XML", "#0060ac"),
    ("reStructuredText", "#141F1F"),
    ("Perl", "#0298c3"),
    ("Assembly", "#6E4C13"),
    ("Julia", "#a270ba"),
    ("R", "#198CE7"),
];

// Keys are lowercase and carry no leading dot.
const EXTENSIONS: &[(&str, &str)] = &[
    ("rs", "Rust"),
    ("c", "C"),
    ("h", "C Header"),
    ("cpp", "C++"),
    ("cxx", "C++"),
    ("cc", "C++"),
    ("hpp", "C++ Header"),
    ("zig", "Zig"),
    ("go", "Go"),
    ("wat", "WebAssembly"),
    ("s", "Assembly"),
    ("asm", "Assembly"),
    ("py", "Python"),
    ("pyw", "Python"),
    ("rb", "Ruby"),
    ("lua", "Lua"),
    ("pl", "Perl"),
    ("pm", "Perl"),
    ("awk", "Awk"),
    ("jl", "Julia"),
    ("r", "R"),
    ("js", "JavaScript"),
    ("mjs", "JavaScript"),
    ("cjs", "JavaScript"),
    ("ts", "TypeScript"),
    ("tsx", "TypeScript"),
    ("jsx", "JavaScript"),
    ("html", "HTML"),
    ("htm", "HTML"),
    ("css", "CSS"),
    ("scss", "SCSS"),
    ("sass", "Sass"),
    ("less", "Less"),
    ("php", "PHP"),
    ("java", "Java"),
    ("kt", "Kotlin"),
    ("swift", "Swift"),
    ("dart", "Dart"),
    ("vue", "Vue"),
    ("svelte", "Svelte"),
    ("glsl", "GLSL"),
    ("vert", "GLSL"),
    ("frag", "GLSL"),
    ("geom", "GLSL"),
    ("comp", "GLSL"),
    ("wgsl", "WGSL"),
    ("hlsl", "HLSL"),
    ("shader", "ShaderLab"),
    ("cu", "Cuda"),
    ("cuh", "Cuda"),
    ("sh", "Shell"),
    ("bash", "Shell"),
    ("zsh", "Shell"),
    ("yaml", "YAML"),
    ("yml", "YAML"),
    ("json", "JSON"),
    ("toml", "TOML"),
    ("xml", "XML"),
    ("cmake", "CMake"),
    ("dockerfile", "Dockerfile"),
    ("tf", "HCL"),
    ("md", "Markdown"),
    ("markdown", "Markdown"),
    ("tex", "TeX"),
    ("rst", "reStructuredText"),
];

const SPECIAL_FILENAMES: &[(&str, &str)] = &[
    ("Dockerfile", "Dockerfile"),
    ("CMakeLists.txt", "CMake"),
    ("Makefile", "Makefile"),
    ("Gnumakefile", "Makefile"),
    ("Jenkinsfile", "Groovy"),
    ("Rakefile", "Ruby"),
    ("Gemfile", "Ruby"),
    ("Cargo.toml", "TOML"),
    ("package.json", "JSON"),
    ("requirements.txt", "Pip Requirements"),
];

// Text formats that git does not treat as binary but that are data, not code.
const IGNORED_EXTENSIONS: &[&str] = &[
    "svg", "csv", "tsv", "psv", "lock", "log", "map", "snap", "sum", "ipynb", "geojson",
    "pbxproj", "plist", "storyboard", "xib", "resx", "po", "pot", "xliff", "pem", "crt",
    "key", "obj", "mtl", "ply", "stl", "gltf", "dat", "patch", "diff", "orig", "bak",
];

const IGNORED_PATH_PATTERNS: &[&str] = &[
    "node_modules/",
    "venv/",
    "target/",
    ".git/",
    "dist/",
    "build/",
    "vendor/",
    "__pycache__/",
    ".idea/",
    ".vscode/",
    "coverage/",
    "jquery",
    ".min.js",
    ".min.css",
];

static COLOR_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LANGUAGE_COLORS.iter().copied().collect());
static EXTENSION_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| EXTENSIONS.iter().copied().collect());
static FILENAME_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SPECIAL_FILENAMES.iter().copied().collect());
static IGNORED_EXTENSION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| IGNORED_EXTENSIONS.iter().copied().collect());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Vendored, generated or dependency content.
    ExcludedPath,
    /// Known data format; counted nowhere.
    IgnoredExtension,
    Language(&'static str),
    /// Lowercased extension, or [`NO_EXTENSION`].
    Unclassified(String),
}

pub fn is_excluded_path(path: &str) -> bool {
    IGNORED_PATH_PATTERNS.iter().any(|pattern| path.contains(pattern))
}

pub fn classify(path: &str) -> Classification {
    if is_excluded_path(path) {
        return Classification::ExcludedPath;
    }

    let file = Path::new(path);
    let filename = file.file_name().and_then(|s| s.to_str()).unwrap_or(path);
    let extension = file
        .extension()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase());

    if let Some(ext) = extension.as_deref() {
        if IGNORED_EXTENSION_SET.contains(ext) {
            return Classification::IgnoredExtension;
        }
    }

    if let Some(language) = FILENAME_TABLE.get(filename) {
        return Classification::Language(*language);
    }

    match extension {
        Some(ext) => match EXTENSION_TABLE.get(ext.as_str()) {
            Some(language) => Classification::Language(*language),
            None => Classification::Unclassified(ext),
        },
        None => Classification::Unclassified(NO_EXTENSION.to_string()),
    }
}

pub fn color_for(language: &str) -> &'static str {
    COLOR_TABLE.get(language).copied().unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_override_wins_over_extension() {
        assert_eq!(classify("CMakeLists.txt"), Classification::Language("CMake"));
        assert_eq!(classify("tools/CMakeLists.txt"), Classification::Language("CMake"));
        assert_eq!(classify("Cargo.toml"), Classification::Language("TOML"));
        assert_eq!(classify("docker/Dockerfile"), Classification::Language("Dockerfile"));
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(classify("src/main.RS"), Classification::Language("Rust"));
        assert_eq!(classify("lib/app.Py"), Classification::Language("Python"));
    }

    #[test]
    fn unknown_extension_goes_to_unclassified_bucket() {
        assert_eq!(
            classify("data/thing.xyz"),
            Classification::Unclassified("xyz".to_string())
        );
        assert_eq!(
            classify("LICENSE"),
            Classification::Unclassified(NO_EXTENSION.to_string())
        );
        // leading-dot files have no extension
        assert_eq!(
            classify(".bashrc"),
            Classification::Unclassified(NO_EXTENSION.to_string())
        );
    }

    #[test]
    fn trailing_dot_counts_as_no_extension() {
        assert_eq!(
            classify("scripts/name."),
            Classification::Unclassified(NO_EXTENSION.to_string())
        );
    }

    #[test]
    fn ignored_extensions_are_not_unclassified() {
        assert_eq!(classify("assets/logo.svg"), Classification::IgnoredExtension);
        assert_eq!(classify("Cargo.lock"), Classification::IgnoredExtension);
        assert_eq!(classify("data/Table.CSV"), Classification::IgnoredExtension);
    }

    #[test]
    fn excluded_paths_match_anywhere() {
        assert_eq!(classify("web/node_modules/react/index.js"), Classification::ExcludedPath);
        assert_eq!(classify("node_modules/x.js"), Classification::ExcludedPath);
        assert_eq!(classify("static/jquery-3.1.js"), Classification::ExcludedPath);
        assert_eq!(classify("app.min.js"), Classification::ExcludedPath);
        // substring match, not segment match
        assert_eq!(classify("mybuild/main.c"), Classification::ExcludedPath);
    }

    #[test]
    fn colors_fall_back_to_default() {
        assert_eq!(color_for("Rust"), "#dea584");
        assert_eq!(color_for("Sass"), DEFAULT_COLOR);
        assert_eq!(color_for("Pip Requirements"), DEFAULT_COLOR);
    }

    #[test]
    fn every_extension_key_is_lowercase() {
        for (ext, _) in EXTENSIONS {
            assert_eq!(*ext, ext.to_lowercase());
            assert!(!ext.starts_with('.'));
        }
        for ext in IGNORED_EXTENSIONS {
            assert!(!EXTENSION_TABLE.contains_key(ext), "{ext} is both ignored and classified");
        }
    }
}
