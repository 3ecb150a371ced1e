use std::collections::HashSet;

use crate::paging;

/// Upper bound on the number of pages a single selection may expand to.
pub const MAX_SELECTION: usize = 10_000;

fn parse_index(raw: &str, one_based: bool) -> Result<usize, String> {
    let item = raw.trim();
    if one_based {
        return paging::parse_one_based_page(item)
            .ok_or_else(|| format!("invalid page number '{item}', pages start at 1"));
    }
    item.parse::<usize>()
        .map_err(|_| format!("invalid page number '{item}'"))
}

/// Parse a page selection into zero-based indices: `all`, a single page, a
/// comma list, or inclusive `A-B` ranges (e.g. `1,4-6,12`). Numbers are read
/// one-based when `one_based` is set. Duplicates are dropped, first occurrence
/// wins. An empty page set selects nothing, whatever was asked for.
pub fn parse_page_selection(
    value: &str,
    num_pages: usize,
    one_based: bool,
) -> Result<Vec<usize>, String> {
    let raw = value.trim();
    if raw.is_empty() {
        return Err("page selection is empty".to_string());
    }
    if raw.eq_ignore_ascii_case("all") {
        if num_pages > MAX_SELECTION {
            return Err(format!(
                "'all' selects {num_pages} pages, at most {MAX_SELECTION} are allowed"
            ));
        }
        return Ok((0..num_pages).collect());
    }

    let mut out: Vec<usize> = Vec::new();
    let mut seen: HashSet<usize> = HashSet::new();
    let mut visited: usize = 0;
    for part in raw.split(',') {
        let item = part.trim();
        if item.is_empty() {
            continue;
        }
        let (start, end) = match item.split_once('-') {
            Some((a, b)) => (parse_index(a, one_based)?, parse_index(b, one_based)?),
            None => {
                let index = parse_index(item, one_based)?;
                (index, index)
            }
        };
        if start > end {
            return Err(format!("invalid range '{item}', start must not exceed end"));
        }
        if num_pages == 0 {
            continue;
        }
        if end >= num_pages {
            return Err(format!("page '{item}' is out of range for {num_pages} pages"));
        }
        // end < num_pages, so the span cannot overflow
        let span = end - start + 1;
        if span > MAX_SELECTION - visited {
            return Err(format!(
                "selection exceeds {MAX_SELECTION} pages at '{item}'"
            ));
        }
        visited += span;
        for index in start..=end {
            if seen.insert(index) {
                out.push(index);
            }
        }
    }

    if out.is_empty() && num_pages > 0 {
        return Err("page selection is empty".to_string());
    }
    Ok(out)
}
