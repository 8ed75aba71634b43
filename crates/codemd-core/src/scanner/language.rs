//! Language detection for fenced code blocks

use std::path::Path;

/// Languages with a known fence tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Html,
    Css,
    Java,
    C,
    Cpp,
    CSharp,
    Ruby,
    Go,
    Php,
    Rust,
    Json,
    Xml,
    Bash,
    Batch,
    Markdown,
    Yaml,
}

impl Language {
    /// Detect language from file extension (without the leading dot)
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" => Some(Self::Python),
            "js" | "jsx" => Some(Self::JavaScript),
            "ts" | "tsx" => Some(Self::TypeScript),
            "html" => Some(Self::Html),
            "css" => Some(Self::Css),
            "java" => Some(Self::Java),
            "c" => Some(Self::C),
            "cpp" => Some(Self::Cpp),
            "cs" => Some(Self::CSharp),
            "rb" => Some(Self::Ruby),
            "go" => Some(Self::Go),
            "php" => Some(Self::Php),
            "rs" => Some(Self::Rust),
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            "sh" => Some(Self::Bash),
            "bat" => Some(Self::Batch),
            "md" => Some(Self::Markdown),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Detect language from file path
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Fence tag for a path, empty when the extension is unknown
    #[must_use]
    pub fn fence_tag(path: &Path) -> &'static str {
        Self::from_path(path).map_or("", Self::as_str)
    }

    /// Identifier written after the opening fence
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Html => "html",
            Self::Css => "css",
            Self::Java => "java",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::CSharp => "csharp",
            Self::Ruby => "ruby",
            Self::Go => "go",
            Self::Php => "php",
            Self::Rust => "rust",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Bash => "bash",
            Self::Batch => "batch",
            Self::Markdown => "markdown",
            Self::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
