//! File categorisation based on file extensions.
//!
//! Categories form a fixed, process-wide table constructed once at compile
//! time. Declaration order is the classification order: the first category
//! whose extension set contains a file's extension wins, and [`Others`]
//! stays last so it is only reached when nothing specific matched.
//!
//! [`Others`]: FileCategory::Others

use serde::Serialize;

/// Longest extension (including the leading dot) any category claims.
/// Anything longer is `Others` without walking the table.
const MAX_EXT_LEN: usize = 16;

/// Broad file categories for grouping scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FileCategory {
    Images,
    Videos,
    Audio,
    Documents,
    Archives,
    Code,
    /// Catch-all for extensions no other category claims. Must stay the
    /// last variant — classification and stats indexing rely on it.
    Others,
}

impl FileCategory {
    /// Every category in classification order, `Others` last.
    pub const ALL: [FileCategory; 7] = [
        FileCategory::Images,
        FileCategory::Videos,
        FileCategory::Audio,
        FileCategory::Documents,
        FileCategory::Archives,
        FileCategory::Code,
        FileCategory::Others,
    ];

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Images => "Images",
            Self::Videos => "Videos",
            Self::Audio => "Audio",
            Self::Documents => "Documents",
            Self::Archives => "Archives",
            Self::Code => "Code",
            Self::Others => "Others",
        }
    }

    /// Extensions claimed by this category — lowercase, with leading dot.
    /// Sets are disjoint across categories.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Images => &[
                ".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg", ".bmp", ".ico", ".tiff",
                ".raw", ".heic",
            ],
            Self::Videos => &[".mp4", ".mov", ".avi", ".mkv", ".webm", ".wmv", ".flv", ".m4v"],
            Self::Audio => &[".mp3", ".wav", ".flac", ".aac", ".ogg", ".wma", ".m4a"],
            Self::Documents => &[
                ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".txt", ".rtf",
                ".odt",
            ],
            Self::Archives => &[
                ".zip", ".rar", ".7z", ".tar", ".gz", ".bz2", ".xz", ".dmg", ".iso",
            ],
            Self::Code => &[
                ".cs", ".js", ".ts", ".py", ".java", ".html", ".css", ".json", ".xml", ".yaml",
                ".md", ".sh", ".sql",
            ],
            Self::Others => &[],
        }
    }

    /// Icon a frontend can show next to the category.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Images => "📷",
            Self::Videos => "🎬",
            Self::Audio => "🎵",
            Self::Documents => "📄",
            Self::Archives => "📦",
            Self::Code => "💻",
            Self::Others => "❓",
        }
    }

    /// Accent colour associated with the category (hex RGB).
    pub fn colour(self) -> &'static str {
        match self {
            Self::Images => "#E91E63",
            Self::Videos => "#9C27B0",
            Self::Audio => "#673AB7",
            Self::Documents => "#2196F3",
            Self::Archives => "#FF9800",
            Self::Code => "#4CAF50",
            Self::Others => "#607D8B",
        }
    }
}

/// Classify a file extension (leading dot, any case) into a category.
///
/// Total and deterministic: every input, including the empty string, maps
/// to exactly one category. Extensions no category claims fall back to
/// [`FileCategory::Others`].
///
/// Zero-heap-allocation hot path: the extension is lowercased into a
/// fixed-size stack buffer rather than a `String`.
pub fn classify(extension: &str) -> FileCategory {
    let bytes = extension.as_bytes();
    if bytes.len() > MAX_EXT_LEN {
        return FileCategory::Others;
    }

    // Lowercase into a stack buffer. ASCII-only lowering keeps the bytes
    // valid UTF-8.
    let mut lower = [0u8; MAX_EXT_LEN];
    for (dst, &src) in lower.iter_mut().zip(bytes.iter()) {
        *dst = src.to_ascii_lowercase();
    }
    let ext = match std::str::from_utf8(&lower[..bytes.len()]) {
        Ok(s) => s,
        Err(_) => return FileCategory::Others,
    };

    for category in FileCategory::ALL {
        if category.extensions().contains(&ext) {
            return category;
        }
    }
    FileCategory::Others
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_known_image_extensions() {
        for ext in &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".tiff", ".heic"] {
            assert_eq!(
                classify(ext),
                FileCategory::Images,
                "expected Images for {ext}"
            );
        }
    }

    #[test]
    fn classify_known_document_extensions() {
        for ext in &[".pdf", ".docx", ".txt", ".odt"] {
            assert_eq!(
                classify(ext),
                FileCategory::Documents,
                "expected Documents for {ext}"
            );
        }
    }

    #[test]
    fn classify_known_archive_extensions() {
        for ext in &[".zip", ".rar", ".7z", ".tar", ".gz", ".iso"] {
            assert_eq!(
                classify(ext),
                FileCategory::Archives,
                "expected Archives for {ext}"
            );
        }
    }

    #[test]
    fn classify_unknown_extension_returns_others() {
        assert_eq!(classify(".xyz"), FileCategory::Others);
        assert_eq!(classify(".rs"), FileCategory::Others);
        assert_eq!(classify(""), FileCategory::Others);
    }

    /// Extension matching must be case-insensitive so ".JPG" == ".jpg".
    #[test]
    fn classify_case_insensitive() {
        assert_eq!(classify(".JPG"), FileCategory::Images);
        assert_eq!(classify(".Pdf"), FileCategory::Documents);
        assert_eq!(classify(".ZIP"), FileCategory::Archives);
    }

    /// Extensions longer than the stack buffer can never match a table
    /// entry and must classify as Others without panicking.
    #[test]
    fn classify_oversized_extension() {
        assert_eq!(
            classify(".averylongmadeupextension"),
            FileCategory::Others
        );
    }

    /// Stats accumulation indexes `ALL` by discriminant, so the table
    /// order and the enum declaration order must agree.
    #[test]
    fn all_table_matches_discriminants() {
        for (i, category) in FileCategory::ALL.iter().enumerate() {
            assert_eq!(*category as usize, i);
        }
        assert_eq!(FileCategory::ALL.last(), Some(&FileCategory::Others));
    }
}
