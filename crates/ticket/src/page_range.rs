use std::collections::BTreeSet;

use thiserror::Error;

/// Inclusive, 1-based span of document pages. Open-ended ranges ("5-") keep
/// `to` at `u32::MAX` until clamped against a page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpan {
    pub from: u32,
    pub to: u32,
}

/// Reasons a page-range string fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRangeError {
    #[error("empty range token")]
    EmptyToken,
    #[error("invalid page number `{0}`")]
    InvalidNumber(String),
    #[error("page numbers start at 1")]
    ZeroPage,
    #[error("descending range {from}-{to}")]
    Descending { from: u32, to: u32 },
}

/// Page-range setting, kept as the raw text the user typed. An empty string
/// selects every page.
#[derive(Debug, Clone, Default)]
pub struct PageRangeItem {
    value: String,
}

impl PageRangeItem {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn update_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Spans described by the text, or `None` when it is malformed. An empty
    /// text yields an empty list, meaning the whole document.
    pub fn spans(&self) -> Option<Vec<PageSpan>> {
        parse_page_ranges(&self.value).ok()
    }

    /// Spans clamped to the document: open ends are closed at `page_count`
    /// and spans starting past the document are dropped. Malformed text
    /// yields no spans; empty text yields the whole document.
    pub fn document_spans(&self, page_count: u32) -> Vec<PageSpan> {
        let Ok(spans) = parse_page_ranges(&self.value) else {
            return Vec::new();
        };
        if spans.is_empty() {
            if page_count == 0 {
                return Vec::new();
            }
            return vec![PageSpan {
                from: 1,
                to: page_count,
            }];
        }
        spans
            .into_iter()
            .filter(|span| span.from <= page_count)
            .map(|span| PageSpan {
                from: span.from,
                to: span.to.min(page_count),
            })
            .collect()
    }

    /// Ascending set of page numbers selected within the document.
    pub fn page_number_set(&self, page_count: u32) -> Vec<u32> {
        let mut pages = BTreeSet::new();
        for span in self.document_spans(page_count) {
            pages.extend(span.from..=span.to);
        }
        pages.into_iter().collect()
    }

    /// Whether the text parses and every span starts within the document.
    /// A page count of zero means the count is not yet known, so only the
    /// syntax is checked.
    pub fn is_valid(&self, page_count: u32) -> bool {
        match parse_page_ranges(&self.value) {
            Ok(spans) => {
                page_count == 0 || spans.iter().all(|span| span.from <= page_count)
            }
            Err(_) => false,
        }
    }
}

fn parse_page_ranges(text: &str) -> Result<Vec<PageSpan>, PageRangeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut spans = Vec::new();
    for token in trimmed.split(',') {
        let token = token.trim();
        if token.is_empty() {
            return Err(PageRangeError::EmptyToken);
        }
        let span = match token.split_once('-') {
            None => {
                let page = parse_page_number(token)?;
                PageSpan {
                    from: page,
                    to: page,
                }
            }
            Some((from, to)) => {
                let from = parse_page_number(from.trim())?;
                let to = if to.trim().is_empty() {
                    u32::MAX
                } else {
                    parse_page_number(to.trim())?
                };
                if to < from {
                    return Err(PageRangeError::Descending { from, to });
                }
                PageSpan { from, to }
            }
        };
        spans.push(span);
    }
    Ok(spans)
}

fn parse_page_number(token: &str) -> Result<u32, PageRangeError> {
    let page: u32 = token
        .parse()
        .map_err(|_| PageRangeError::InvalidNumber(token.to_string()))?;
    if page == 0 {
        return Err(PageRangeError::ZeroPage);
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str) -> PageRangeItem {
        let mut item = PageRangeItem::default();
        item.update_value(text);
        item
    }

    #[test]
    fn empty_text_selects_every_page() {
        let range = item("  ");
        assert_eq!(range.spans(), Some(Vec::new()));
        assert_eq!(
            range.document_spans(5),
            vec![PageSpan { from: 1, to: 5 }]
        );
        assert!(range.is_valid(5));
    }

    #[test]
    fn parses_singles_ranges_and_open_ends() {
        let range = item("1-3, 5, 7-");
        assert_eq!(
            range.spans(),
            Some(vec![
                PageSpan { from: 1, to: 3 },
                PageSpan { from: 5, to: 5 },
                PageSpan { from: 7, to: u32::MAX },
            ])
        );
        assert_eq!(
            range.document_spans(10),
            vec![
                PageSpan { from: 1, to: 3 },
                PageSpan { from: 5, to: 5 },
                PageSpan { from: 7, to: 10 },
            ]
        );
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        for bad in ["a", "1-3-5", "0", "1,,2", "4-2", "-3", "1.5"] {
            assert!(item(bad).spans().is_none(), "{bad:?} should not parse");
            assert!(!item(bad).is_valid(10), "{bad:?} should be invalid");
        }
    }

    #[test]
    fn descending_range_reports_its_bounds() {
        assert_eq!(
            parse_page_ranges("4-2"),
            Err(PageRangeError::Descending { from: 4, to: 2 })
        );
    }

    #[test]
    fn spans_past_the_document_invalidate_the_range() {
        let range = item("2-4");
        assert!(range.is_valid(4));
        assert!(!range.is_valid(1));
        // Unknown page count: only syntax is checked.
        assert!(range.is_valid(0));
        assert!(range.document_spans(1).is_empty());
    }

    #[test]
    fn page_number_set_merges_overlaps() {
        let range = item("1-3, 2-4, 8");
        assert_eq!(range.page_number_set(10), vec![1, 2, 3, 4, 8]);
    }
}
