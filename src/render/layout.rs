//! Vertical layout for the paginated document.
//!
//! All measurements are PDF points with the origin at the bottom-left of the
//! page, so the cursor moves downwards by decreasing `y`.

/// US Letter height.
pub const LETTER_HEIGHT_PT: f32 = 792.0;
pub const LETTER_WIDTH_PT: f32 = 612.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Entry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub y: f32,
    pub text: String,
    pub style: LineStyle,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page_height: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    /// Space between the title line and the first entry.
    pub title_gap: f32,
    pub line_height: f32,
    pub max_entries: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        PageLayout {
            page_height: LETTER_HEIGHT_PT,
            top_margin: 40.0,
            bottom_margin: 40.0,
            title_gap: 30.0,
            line_height: 20.0,
            max_entries: 20,
        }
    }
}

impl PageLayout {
    /// Cursor position at the top of a fresh page.
    pub fn top(&self) -> f32 {
        self.page_height - self.top_margin
    }

    /// Place the title on the first page, then up to `max_entries` entries.
    ///
    /// After each entry the cursor moves down one line; once it falls below
    /// the bottom margin the next entry opens a new page at [`Self::top`].
    /// A page is only opened when there is an entry to put on it.
    pub fn paginate(&self, title: &str, entries: &[String]) -> Vec<Page> {
        let mut pages = Vec::new();
        let mut page = Page::default();
        let mut y = self.top();

        page.lines.push(PlacedLine {
            y,
            text: title.to_string(),
            style: LineStyle::Title,
        });
        y -= self.title_gap;

        for entry in entries.iter().take(self.max_entries) {
            if y < self.bottom_margin {
                pages.push(std::mem::take(&mut page));
                y = self.top();
            }
            page.lines.push(PlacedLine {
                y,
                text: entry.clone(),
                style: LineStyle::Entry,
            });
            y -= self.line_height;
        }

        pages.push(page);
        pages
    }
}
