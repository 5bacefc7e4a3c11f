//! File selection state behind the upload zone.
//!
//! Previews are read asynchronously, so each selection gets a generation
//! number and a preview is only applied if it belongs to the current one.

use crate::types::{FileInfo, FileLike};

/// Currently selected file and its preview.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection<F> {
    file: Option<F>,
    preview: Option<String>,
    generation: u64,
}

impl<F> Default for Selection<F> {
    fn default() -> Self {
        Self {
            file: None,
            preview: None,
            generation: 0,
        }
    }
}

/// Handle for a pending preview read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewToken(u64);

impl<F: FileLike> Selection<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self) -> Option<FileInfo> {
        self.file.as_ref().map(FileLike::info)
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.file.is_none()
    }

    /// Take the first of `files`, replacing the current selection.
    ///
    /// An empty list leaves the selection untouched and returns `None`.
    /// Otherwise returns the accepted file and, for images, a token for the
    /// preview read.
    pub fn accept<I>(&mut self, files: I) -> Option<(F, Option<PreviewToken>)>
    where
        I: IntoIterator<Item = F>,
    {
        let file = files.into_iter().next()?;
        self.generation += 1;
        self.preview = None;
        let token = file.info().is_image().then_some(PreviewToken(self.generation));
        self.file = Some(file.clone());
        Some((file, token))
    }

    /// Store a finished preview. Returns `false` if the selection moved on.
    pub fn set_preview(&mut self, token: PreviewToken, data_url: String) -> bool {
        if self.file.is_none() || token.0 != self.generation {
            return false;
        }
        self.preview = Some(data_url);
        true
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.file = None;
        self.preview = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(name: &str) -> FileInfo {
        FileInfo::new(name, 2048, "image/png")
    }

    #[test]
    fn test_empty_drop_is_noop() {
        let mut sel = Selection::new();
        assert!(sel.accept(vec![png("photo.png")]).is_some());
        assert!(sel.accept(Vec::<FileInfo>::new()).is_none());
        assert_eq!(sel.info().unwrap().name, "photo.png");
    }

    #[test]
    fn test_first_file_wins() {
        let mut sel = Selection::new();
        let (file, _) = sel.accept(vec![png("a.png"), png("b.png")]).unwrap();
        assert_eq!(file.name, "a.png");
    }

    #[test]
    fn test_replace_discards_old_preview() {
        let mut sel = Selection::new();
        let (_, first) = sel.accept(vec![png("old.png")]).unwrap();
        assert!(sel.set_preview(first.unwrap(), "data:old".into()));

        let (_, second) = sel.accept(vec![png("new.png")]).unwrap();
        assert!(sel.preview().is_none());
        assert!(!sel.set_preview(first.unwrap(), "data:old-late".into()));
        assert!(sel.set_preview(second.unwrap(), "data:new".into()));
        assert_eq!(sel.preview(), Some("data:new"));
        assert_eq!(sel.info().unwrap().name, "new.png");
    }

    #[test]
    fn test_non_image_has_no_preview() {
        let mut sel = Selection::new();
        let (file, token) = sel
            .accept(vec![FileInfo::new("notes.txt", 10, "text/plain")])
            .unwrap();
        assert_eq!(file.name, "notes.txt");
        assert!(token.is_none());
        assert!(!sel.is_empty());
    }

    #[test]
    fn test_clear_drops_pending_preview() {
        let mut sel = Selection::new();
        let (_, token) = sel.accept(vec![png("photo.png")]).unwrap();
        sel.clear();
        assert!(sel.is_empty());
        assert!(!sel.set_preview(token.unwrap(), "data:late".into()));
        assert!(sel.preview().is_none());
    }
}
