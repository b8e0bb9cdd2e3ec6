/*!
 * Utility functions and built-in tables for skukozh
 */

use std::path::Path;

use once_cell::sync::Lazy;

/// Name of the intermediate file-list artifact written by `find`
pub const FILE_LIST_NAME: &str = "skukozh_file_list.txt";

/// Name of the concatenated result artifact written by `gen`
pub const RESULT_NAME: &str = "skukozh_result.txt";

/// Well-known vendor/build directory names excluded by default
pub static IGNORED_DIRS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "node_modules",
        "vendor",
        "dist",
        "build",
        ".git",
        ".svn",
        ".hg",
        "bower_components",
        "target",
        "bin",
        "obj",
    ]
});

/// Well-known binary-format extensions excluded by default
pub static BINARY_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Images
        ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".ico", ".svg", ".webp",
        // Audio
        ".mp3", ".wav", ".ogg", ".flac", ".aac", ".m4a",
        // Video
        ".mp4", ".avi", ".mov", ".wmv", ".flv", ".mkv", ".webm",
        // Archives
        ".zip", ".tar", ".gz", ".rar", ".7z", ".jar", ".war",
        // Binaries
        ".exe", ".dll", ".so", ".dylib", ".bin", ".dat",
        // Other binary formats
        ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx",
    ]
});

/// Common text extensions used as the allow-list when none is given
pub static TEXT_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Programming languages
        ".go", ".py", ".js", ".ts", ".java", ".c", ".cpp", ".h", ".hpp", ".cs", ".php", ".rb",
        ".rs", ".swift",
        // Web
        ".html", ".htm", ".css", ".scss", ".sass", ".less", ".jsx", ".tsx", ".vue", ".svelte",
        // Config files
        ".json", ".yaml", ".yml", ".toml", ".xml", ".ini", ".env",
        // Documentation
        ".md", ".txt", ".rst", ".adoc",
        // Shell scripts
        ".sh", ".bash", ".zsh", ".fish", ".bat", ".cmd", ".ps1",
    ]
});

/// Check if a file or directory name is hidden (starts with `.`)
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Case-insensitive membership test against a name table
pub fn contains_ignore_case(table: &[&str], name: &str) -> bool {
    table.iter().any(|entry| entry.eq_ignore_ascii_case(name))
}

/// Lowercase extension of a file name, dot included (`"main.RS"` -> `".rs"`).
/// A name without a dot yields the empty string.
pub fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) => name[idx..].to_ascii_lowercase(),
        None => String::new(),
    }
}

/// Render a path with `/` separators regardless of host conventions
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
