//! Pagination window resolver.
//!
//! Given a page count, the current page and a sibling radius, produces the
//! ordered list of buttons a pagination control should render: the first and
//! last page are always present, the current page is surrounded by
//! `num_siblings` pages on each side, and omitted runs collapse into an
//! ellipsis. An ellipsis always hides at least two pages; a lone hidden page is
//! shown instead.

use serde::{Serialize, Serializer};
use thiserror::Error;

pub const ELLIPSIS_LABEL: &str = "...";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageButton {
    /// Zero-based page index.
    Page(usize),
    Ellipsis,
}

impl PageButton {
    pub fn page(&self) -> Option<usize> {
        match self {
            Self::Page(index) => Some(*index),
            Self::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }

    /// Display label for the button. Page numbers are shifted by one when
    /// `one_based` is set.
    pub fn label(&self, one_based: bool) -> String {
        match self {
            Self::Page(index) if one_based => (index + 1).to_string(),
            Self::Page(index) => index.to_string(),
            Self::Ellipsis => ELLIPSIS_LABEL.to_string(),
        }
    }
}

impl Serialize for PageButton {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(index) => serializer.serialize_u64(*index as u64),
            Self::Ellipsis => serializer.serialize_str(ELLIPSIS_LABEL),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    #[error("page index {page_index} is out of range for {num_pages} pages")]
    PageIndexOutOfRange { page_index: usize, num_pages: usize },
}

/// Maximum number of buttons a window renders: first, last, current, two
/// ellipses and `2 * num_siblings` siblings.
pub fn button_budget(num_siblings: usize) -> usize {
    num_siblings.saturating_mul(2).saturating_add(5)
}

/// Compute the buttons for a pagination control.
///
/// Returns every page when `num_pages` fits in [`button_budget`]. Otherwise
/// the result starts at page `0`, ends at page `num_pages - 1`, and always
/// holds exactly `2 * num_siblings + 1` consecutive pages around the
/// (edge-clamped) current page.
///
/// An empty page set yields an empty list. A `page_index` outside
/// `0..num_pages` is rejected.
pub fn compute_pagination_window(
    num_pages: usize,
    page_index: usize,
    num_siblings: usize,
) -> Result<Vec<PageButton>, WindowError> {
    if num_pages == 0 {
        return Ok(Vec::new());
    }
    if page_index >= num_pages {
        return Err(WindowError::PageIndexOutOfRange {
            page_index,
            num_pages,
        });
    }

    let num_buttons = button_budget(num_siblings);
    if num_pages <= num_buttons {
        return Ok((0..num_pages).map(PageButton::Page).collect());
    }

    // num_pages >= 2 * num_siblings + 6 from here on, so none of the edge
    // arithmetic below can underflow.
    let left_edge = 2 + num_siblings;
    let right_edge = num_pages - 3 - num_siblings;

    let mut buttons = Vec::with_capacity(num_buttons);
    buttons.push(PageButton::Page(0));

    let mut center = page_index;
    let mut include_next_to_last = false;
    if center <= left_edge {
        buttons.push(PageButton::Page(1));
        center = left_edge;
    } else {
        buttons.push(PageButton::Ellipsis);
        if center >= right_edge {
            center = right_edge;
            include_next_to_last = true;
        }
    }

    buttons.extend((center - num_siblings..=center + num_siblings).map(PageButton::Page));

    if include_next_to_last {
        buttons.push(PageButton::Page(num_pages - 2));
    } else {
        buttons.push(PageButton::Ellipsis);
    }
    buttons.push(PageButton::Page(num_pages - 1));

    Ok(buttons)
}

pub fn format_buttons(buttons: &[PageButton], one_based: bool) -> String {
    let labels = buttons
        .iter()
        .map(|b| b.label(one_based))
        .collect::<Vec<_>>();
    format!("[{}]", labels.join(", "))
}
