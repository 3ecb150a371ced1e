use proptest::prelude::*;

use crate::output::{self, OutputFormat};
use crate::window::{button_budget, compute_pagination_window, format_buttons, PageButton};

fn window_labels(num_pages: usize, page_index: usize, num_siblings: usize) -> String {
    let buttons = compute_pagination_window(num_pages, page_index, num_siblings).unwrap();
    format_buttons(&buttons, true)
}

#[test]
fn small_page_count_shows_every_page() {
    assert_eq!(window_labels(7, 0, 3), "[1, 2, 3, 4, 5, 6, 7]");
}

#[test]
fn eight_pages_one_sibling_at_start() {
    assert_eq!(window_labels(8, 0, 1), "[1, 2, 3, 4, 5, ..., 8]");
}

#[test]
fn eight_pages_one_sibling_near_end() {
    assert_eq!(window_labels(8, 4, 1), "[1, ..., 4, 5, 6, 7, 8]");
}

#[test]
fn twelve_pages_two_siblings_at_start() {
    assert_eq!(window_labels(12, 0, 2), "[1, 2, 3, 4, 5, 6, 7, ..., 12]");
}

#[test]
fn twelve_pages_two_siblings_in_middle() {
    assert_eq!(window_labels(12, 5, 2), "[1, ..., 4, 5, 6, 7, 8, ..., 12]");
}

#[test]
fn twelve_pages_two_siblings_reaching_right_edge() {
    assert_eq!(window_labels(12, 7, 2), "[1, ..., 6, 7, 8, 9, 10, 11, 12]");
}

#[test]
fn last_page_keeps_full_sibling_window() {
    assert_eq!(window_labels(12, 11, 2), "[1, ..., 6, 7, 8, 9, 10, 11, 12]");
}

#[test]
fn left_edge_boundary_switches_to_ellipsis() {
    // 2 + num_siblings is the last index that keeps page 1 explicit
    assert_eq!(window_labels(20, 3, 1), "[1, 2, 3, 4, 5, ..., 20]");
    assert_eq!(window_labels(20, 4, 1), "[1, ..., 4, 5, 6, ..., 20]");
}

#[test]
fn zero_based_window_values() {
    let buttons = compute_pagination_window(8, 4, 1).unwrap();
    assert_eq!(
        buttons,
        vec![
            PageButton::Page(0),
            PageButton::Ellipsis,
            PageButton::Page(3),
            PageButton::Page(4),
            PageButton::Page(5),
            PageButton::Page(6),
            PageButton::Page(7),
        ]
    );
}

#[test]
fn page_selection_accepts_lists_and_ranges() {
    let pages = crate::utils::parse_page_selection("1, 4-6 ,5,12", 12, true).unwrap();
    assert_eq!(pages, vec![0, 3, 4, 5, 11]);
    let pages = crate::utils::parse_page_selection("0-2", 3, false).unwrap();
    assert_eq!(pages, vec![0, 1, 2]);
    let pages = crate::utils::parse_page_selection("ALL", 4, true).unwrap();
    assert_eq!(pages, vec![0, 1, 2, 3]);
}

#[test]
fn page_selection_rejects_invalid() {
    assert!(crate::utils::parse_page_selection("", 5, true).is_err());
    assert!(crate::utils::parse_page_selection(",", 5, true).is_err());
    assert!(crate::utils::parse_page_selection("0", 5, true).is_err());
    assert!(crate::utils::parse_page_selection("5", 5, false).is_err());
    assert!(crate::utils::parse_page_selection("4-2", 5, true).is_err());
    assert!(crate::utils::parse_page_selection("two", 5, true).is_err());
    assert!(crate::utils::parse_page_selection("-3", 5, true).is_err());
}

#[test]
fn page_selection_is_bounded() {
    let max = crate::utils::MAX_SELECTION;
    assert!(crate::utils::parse_page_selection("all", usize::MAX, true).is_err());
    assert!(crate::utils::parse_page_selection("all", max + 1, false).is_err());
    assert_eq!(
        crate::utils::parse_page_selection("all", max, false)
            .unwrap()
            .len(),
        max
    );
    let wide = format!("0-{}", usize::MAX - 1);
    assert!(crate::utils::parse_page_selection(&wide, usize::MAX, false).is_err());
    let split = format!("0-{},{}-{}", max / 2 - 1, max / 2, max);
    assert!(crate::utils::parse_page_selection(&split, max + 10, false).is_err());
}

#[test]
fn page_selection_on_empty_page_set_is_empty() {
    assert!(crate::utils::parse_page_selection("1", 0, true).unwrap().is_empty());
    assert!(crate::utils::parse_page_selection("3-9", 0, false).unwrap().is_empty());
    assert!(crate::utils::parse_page_selection("all", 0, true).unwrap().is_empty());
    assert!(crate::utils::parse_page_selection("0", 0, true).is_err());
}

#[test]
fn output_format_parsing() {
    assert_eq!(OutputFormat::parse(" JSON "), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::parse("txt"), Some(OutputFormat::Text));
    assert_eq!(OutputFormat::parse("html"), None);
    assert_eq!(
        output::infer_format_from_path("windows.XML"),
        Some(OutputFormat::Xml)
    );
    assert_eq!(output::infer_format_from_path("windows"), None);
}

#[test]
fn json_record_carries_buttons_and_labels() {
    let buttons = compute_pagination_window(8, 0, 1).unwrap();
    let record = output::build_record(8, 0, 1, &buttons, true);
    let value: serde_json::Value =
        serde_json::from_slice(&output::render_json(&[record])).unwrap();
    assert_eq!(value[0]["num_pages"], 8);
    assert_eq!(value[0]["buttons"], serde_json::json!([0, 1, 2, 3, 4, "...", 7]));
    assert_eq!(
        value[0]["labels"],
        serde_json::json!(["1", "2", "3", "4", "5", "...", "8"])
    );
}

#[test]
fn xml_marks_ellipsis_separately() {
    let buttons = compute_pagination_window(8, 4, 1).unwrap();
    let record = output::build_record(8, 4, 1, &buttons, true);
    let xml = String::from_utf8(output::render_xml(&[record])).unwrap();
    assert!(xml.contains("<window num_pages=\"8\" page_index=\"4\" num_siblings=\"1\">"));
    assert!(xml.contains("<page index=\"0\">1</page>"));
    assert!(xml.contains("<ellipsis/>"));
    assert!(xml.trim_end().ends_with("</windows>"));
}

#[test]
fn summary_line_uses_display_base() {
    let buttons = compute_pagination_window(12, 5, 2).unwrap();
    let record = output::build_record(12, 5, 2, &buttons, true);
    assert_eq!(
        output::summary_line(&record, true),
        "page 6 of 12 -> [1, ..., 4, 5, 6, 7, 8, ..., 12]"
    );
}

fn window_inputs() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..200, 0usize..8).prop_flat_map(|(num_pages, num_siblings)| {
        (Just(num_pages), 0..num_pages, Just(num_siblings))
    })
}

proptest! {
    #[test]
    fn window_starts_and_ends_at_edges((num_pages, page_index, num_siblings) in window_inputs()) {
        let buttons = compute_pagination_window(num_pages, page_index, num_siblings).unwrap();
        prop_assert_eq!(buttons.first(), Some(&PageButton::Page(0)));
        if num_pages > 1 {
            prop_assert_eq!(buttons.last(), Some(&PageButton::Page(num_pages - 1)));
        }
    }

    #[test]
    fn pages_ascend_and_ellipses_hide_two_or_more((num_pages, page_index, num_siblings) in window_inputs()) {
        let buttons = compute_pagination_window(num_pages, page_index, num_siblings).unwrap();
        let pages: Vec<usize> = buttons.iter().filter_map(PageButton::page).collect();
        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));

        for (i, button) in buttons.iter().enumerate() {
            if !button.is_ellipsis() {
                continue;
            }
            prop_assert!(i > 0 && i + 1 < buttons.len());
            let left = buttons[i - 1].page();
            let right = buttons[i + 1].page();
            prop_assert!(left.is_some() && right.is_some());
            let (left, right) = (left.unwrap(), right.unwrap());
            prop_assert!(right - left - 1 >= 2);
        }

        for pair in buttons.windows(2) {
            if let (Some(a), Some(b)) = (pair[0].page(), pair[1].page()) {
                prop_assert_eq!(b, a + 1);
            }
        }
    }

    #[test]
    fn window_size_matches_budget((num_pages, page_index, num_siblings) in window_inputs()) {
        let buttons = compute_pagination_window(num_pages, page_index, num_siblings).unwrap();
        let budget = button_budget(num_siblings);
        if num_pages <= budget {
            let expected: Vec<PageButton> = (0..num_pages).map(PageButton::Page).collect();
            prop_assert_eq!(buttons, expected);
        } else {
            prop_assert_eq!(buttons.len(), budget);
        }
    }

    #[test]
    fn current_page_is_always_shown((num_pages, page_index, num_siblings) in window_inputs()) {
        let buttons = compute_pagination_window(num_pages, page_index, num_siblings).unwrap();
        prop_assert!(buttons.contains(&PageButton::Page(page_index)));
    }

    #[test]
    fn repeated_calls_agree((num_pages, page_index, num_siblings) in window_inputs()) {
        let first = compute_pagination_window(num_pages, page_index, num_siblings);
        let second = compute_pagination_window(num_pages, page_index, num_siblings);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_page_is_rejected(num_pages in 1usize..200, extra in 0usize..50, num_siblings in 0usize..8) {
        prop_assert!(compute_pagination_window(num_pages, num_pages + extra, num_siblings).is_err());
    }
}
