use relative_path::{RelativePath, RelativePathBuf};

/// Which collection a document belongs to, from its top-level directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Post,
    Page,
    Other,
}

impl ContentKind {
    pub const POSTS_DIR: &'static str = "posts";
    pub const PAGES_DIR: &'static str = "pages";

    fn of(path: &RelativePath) -> Self {
        match path.components().next().map(|c| c.as_str()) {
            Some(Self::POSTS_DIR) if path.components().count() > 1 => ContentKind::Post,
            Some(Self::PAGES_DIR) if path.components().count() > 1 => ContentKind::Page,
            _ => ContentKind::Other,
        }
    }
}

/// A markdown document in the content directory, addressed by its path
/// relative to the content root.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownFile {
    relative_path: RelativePathBuf,
    display_name: String,
    slug: String,
    kind: ContentKind,
}

impl MarkdownFile {
    pub const EXTENSION: &'static str = "md";

    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = relative_path
            .file_stem()
            .filter(|stem| !stem.is_empty())
            .unwrap_or("Untitled")
            .to_string();
        let slug = relative_path
            .as_str()
            .strip_suffix(".md")
            .unwrap_or(relative_path.as_str())
            .to_string();
        let kind = ContentKind::of(&relative_path);

        Self {
            relative_path,
            display_name,
            slug,
            kind,
        }
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without the `.md` extension.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Relative path without the extension, e.g. `posts/hello-world`.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }
}

impl From<RelativePathBuf> for MarkdownFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for MarkdownFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
