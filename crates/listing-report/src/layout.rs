//! Page layout for listings.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner of
//! the page. Text widths are estimated from an average Helvetica advance,
//! which is enough to wrap descriptions and centre short codes.

use std::mem;

use crate::ListingDocument;

pub const PT_PER_CM: f32 = 72.0 / 2.54;

/// Average Helvetica glyph advance as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    /// Space above the table frame reserved for the running title.
    pub title_band: f32,
    pub title_font_size: f32,
    pub body_font_size: f32,
    pub leading: f32,
    pub cell_padding_x: f32,
    pub cell_padding_y: f32,
    pub code_column: f32,
    pub category_column: f32,
}

impl Default for PageGeometry {
    /// US Letter.
    fn default() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin_left: 70.0,
            margin_right: 70.0,
            margin_top: 20.0,
            margin_bottom: 42.0,
            title_band: 2.0 * PT_PER_CM,
            title_font_size: 18.0,
            body_font_size: 10.0,
            leading: 12.0,
            cell_padding_x: 6.0,
            cell_padding_y: 3.0,
            code_column: 70.0,
            category_column: 50.0,
        }
    }
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn frame_top(&self) -> f32 {
        self.height - self.margin_top - self.title_band
    }

    pub fn frame_bottom(&self) -> f32 {
        self.margin_bottom
    }

    pub fn title_baseline(&self) -> f32 {
        self.height - self.margin_top - self.title_font_size
    }

    /// Code, description and category column widths.
    pub fn column_widths(&self) -> [f32; 3] {
        [
            self.code_column,
            self.content_width() - self.code_column - self.category_column,
            self.category_column,
        ]
    }

    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * AVG_GLYPH_WIDTH
    }

    fn chars_per_line(&self, column_width: f32) -> usize {
        let usable = column_width - 2.0 * self.cell_padding_x;
        let per_char = self.body_font_size * AVG_GLYPH_WIDTH;
        (usable / per_char).floor().max(1.0) as usize
    }
}

/// A table row with wrapped cell text.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: [Vec<String>; 3],
    pub height: f32,
    pub is_header: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRow {
    /// Y coordinate of the row's top edge.
    pub top: f32,
    pub row: TableRow,
}

impl PlacedRow {
    pub fn bottom(&self) -> f32 {
        self.top - self.row.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub x: f32,
    pub baseline: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub rows: Vec<PlacedRow>,
    pub footer: Option<PlacedText>,
}

impl PageLayout {
    pub fn body_rows(&self) -> impl Iterator<Item = &PlacedRow> {
        self.rows.iter().filter(|placed| !placed.row.is_header)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingLayout {
    /// Running title drawn on every page.
    pub title: String,
    pub columns: [f32; 3],
    pub pages: Vec<PageLayout>,
}

/// Wrap `text` to at most `max_chars` characters per line.
///
/// Explicit newlines always break. A line's leading whitespace is kept and
/// repeated on its continuation lines, so indented hints stay indented.
/// Words longer than the line are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let body = raw.trim_start();
        let indent = &raw[..raw.len() - body.len()];
        if body.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let width = max_chars.saturating_sub(indent.chars().count()).max(1);
        let mut current = String::new();
        for word in body.split_whitespace() {
            let mut word = word;
            while word.chars().count() > width {
                if !current.is_empty() {
                    lines.push(format!("{indent}{current}"));
                    current.clear();
                }
                let split = word
                    .char_indices()
                    .nth(width)
                    .map_or(word.len(), |(idx, _)| idx);
                lines.push(format!("{indent}{}", &word[..split]));
                word = &word[split..];
            }
            if word.is_empty() {
                continue;
            }
            let current_len = current.chars().count();
            if current_len > 0 && current_len + 1 + word.chars().count() > width {
                lines.push(format!("{indent}{current}"));
                current.clear();
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(format!("{indent}{current}"));
        }
    }
    lines
}

fn build_row(cells: &[String; 3], limits: [usize; 3], geometry: &PageGeometry, is_header: bool) -> TableRow {
    let wrapped = [
        wrap_text(&cells[0], limits[0]),
        wrap_text(&cells[1], limits[1]),
        wrap_text(&cells[2], limits[2]),
    ];
    let line_count = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);
    TableRow {
        height: line_count as f32 * geometry.leading + 2.0 * geometry.cell_padding_y,
        cells: wrapped,
        is_header,
    }
}

/// Lay out a listing into pages.
///
/// The header row opens every page. A body row that does not fit below the
/// previous one starts a new page; a row taller than a whole frame is placed
/// alone and may overrun the bottom margin. The generation line follows the
/// last row, on a fresh page when it does not fit.
pub fn layout_listing(document: &ListingDocument<'_>, geometry: &PageGeometry) -> ListingLayout {
    let columns = geometry.column_widths();
    let limits = columns.map(|width| geometry.chars_per_line(width));
    let header = build_row(&document.header_row(), limits, geometry, true);
    let frame_top = geometry.frame_top();
    let frame_bottom = geometry.frame_bottom();

    let mut pages = Vec::new();
    let mut page = PageLayout::default();
    page.rows.push(PlacedRow {
        top: frame_top,
        row: header.clone(),
    });
    let mut cursor = frame_top - header.height;
    let mut body_on_page = 0usize;

    for cells in document.body_rows() {
        let row = build_row(&cells, limits, geometry, false);
        if body_on_page > 0 && cursor - row.height < frame_bottom {
            pages.push(mem::take(&mut page));
            page.rows.push(PlacedRow {
                top: frame_top,
                row: header.clone(),
            });
            cursor = frame_top - header.height;
            body_on_page = 0;
        }
        let height = row.height;
        page.rows.push(PlacedRow { top: cursor, row });
        cursor -= height;
        body_on_page += 1;
    }

    if cursor - geometry.leading < frame_bottom {
        pages.push(mem::take(&mut page));
        cursor = frame_top;
    }
    page.footer = Some(PlacedText {
        x: geometry.margin_left,
        baseline: cursor - geometry.leading,
        text: document.generated_line(),
    });
    pages.push(page);

    ListingLayout {
        title: document.surgeon.display_title(),
        columns,
        pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use listing_model::{EntrySource, MergedEntry, Surgeon};

    fn surgeon() -> Surgeon {
        Surgeon {
            key: "S1".to_string(),
            last_name: "Smith".to_string(),
            first_name: "Ann".to_string(),
            service_line: "Cardiology".to_string(),
        }
    }

    fn entries(count: usize) -> Vec<MergedEntry> {
        (0..count)
            .map(|idx| MergedEntry {
                procedure_code: format!("P{idx}"),
                description: format!("Procedure {idx}"),
                category: "1".to_string(),
                source: EntrySource::SurgeonCard,
            })
            .collect()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn wraps_on_newlines_and_keeps_indent() {
        let lines = wrap_text("Foo\n    Use sparingly", 60);
        assert_eq!(lines, vec!["Foo", "    Use sparingly"]);
    }

    #[test]
    fn wraps_long_lines_on_words() {
        let lines = wrap_text("alpha beta gamma delta", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn continuation_lines_repeat_indent() {
        let lines = wrap_text("  one two three", 9);
        assert_eq!(lines, vec!["  one two", "  three"]);
    }

    #[test]
    fn splits_words_longer_than_line() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn empty_text_is_one_blank_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn short_listing_fits_one_page() {
        let surgeon = surgeon();
        let entries = entries(3);
        let document = ListingDocument {
            surgeon: &surgeon,
            entries: &entries,
            generated_on: date(),
        };
        let layout = layout_listing(&document, &PageGeometry::default());

        assert_eq!(layout.title, "Smith, Ann - Cardiology");
        assert_eq!(layout.pages.len(), 1);
        let page = &layout.pages[0];
        assert!(page.rows[0].row.is_header);
        assert_eq!(page.rows[0].row.cells[1], vec!["DESCRIPTION for Smith"]);
        assert_eq!(page.rows[0].row.cells[0], vec!["CODE"]);
        assert_eq!(page.rows[0].row.cells[2], vec!["DPC"]);
        assert_eq!(page.body_rows().count(), 3);
        let footer = page.footer.as_ref().expect("footer");
        assert_eq!(footer.text, "Report generated: 2024-03-05");
        assert!(footer.baseline < page.rows[3].bottom());
    }

    #[test]
    fn long_listing_repeats_header_per_page() {
        let surgeon = surgeon();
        let entries = entries(150);
        let document = ListingDocument {
            surgeon: &surgeon,
            entries: &entries,
            generated_on: date(),
        };
        let geometry = PageGeometry::default();
        let layout = layout_listing(&document, &geometry);

        assert!(layout.pages.len() > 1);
        let mut codes = Vec::new();
        for page in &layout.pages {
            if page.rows.is_empty() {
                continue;
            }
            assert!(page.rows[0].row.is_header);
            assert_eq!(page.rows[0].top, geometry.frame_top());
            for placed in page.body_rows() {
                assert!(placed.bottom() >= geometry.frame_bottom());
                codes.push(placed.row.cells[0][0].clone());
            }
        }
        let expected: Vec<String> = (0..150).map(|idx| format!("P{idx}")).collect();
        assert_eq!(codes, expected);
        assert!(layout.pages.last().and_then(|p| p.footer.as_ref()).is_some());
        assert!(layout.pages[..layout.pages.len() - 1]
            .iter()
            .all(|p| p.footer.is_none()));
    }

    #[test]
    fn hinted_rows_are_taller() {
        let surgeon = surgeon();
        let mut entries = entries(2);
        entries[1].description = "Foo\n    Use sparingly".to_string();
        let document = ListingDocument {
            surgeon: &surgeon,
            entries: &entries,
            generated_on: date(),
        };
        let layout = layout_listing(&document, &PageGeometry::default());
        let rows: Vec<&PlacedRow> = layout.pages[0].body_rows().collect();

        assert_eq!(rows[1].row.cells[1].len(), 2);
        assert!(rows[1].row.height > rows[0].row.height);
        assert_eq!(rows[1].top, rows[0].bottom());
    }
}
