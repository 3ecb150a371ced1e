use serde::Serialize;

use crate::window::{self, PageButton};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Xml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".xml") {
        return Some(OutputFormat::Xml);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

#[derive(Clone, Debug, Serialize)]
pub struct WindowRecord {
    pub num_pages: usize,
    pub page_index: usize,
    pub num_siblings: usize,
    pub buttons: Vec<PageButton>,
    pub labels: Vec<String>,
}

pub fn build_record(
    num_pages: usize,
    page_index: usize,
    num_siblings: usize,
    buttons: &[PageButton],
    one_based: bool,
) -> WindowRecord {
    WindowRecord {
        num_pages,
        page_index,
        num_siblings,
        buttons: buttons.to_vec(),
        labels: buttons.iter().map(|b| b.label(one_based)).collect(),
    }
}

pub fn render_text(records: &[WindowRecord]) -> Vec<u8> {
    let mut out = String::new();
    for r in records {
        out.push('[');
        out.push_str(&r.labels.join(", "));
        out.push_str("]\n");
    }
    out.into_bytes()
}

pub fn render_json(records: &[WindowRecord]) -> Vec<u8> {
    serde_json::to_vec_pretty(records).unwrap_or_else(|_| b"[]\n".to_vec())
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn render_xml(records: &[WindowRecord]) -> Vec<u8> {
    let mut out = String::new();
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.push('\n');
    out.push_str("<windows>\n");
    for r in records {
        out.push_str(&format!(
            "  <window num_pages=\"{}\" page_index=\"{}\" num_siblings=\"{}\">\n",
            r.num_pages, r.page_index, r.num_siblings
        ));
        for (button, label) in r.buttons.iter().zip(&r.labels) {
            match button.page() {
                Some(index) => out.push_str(&format!(
                    "    <page index=\"{index}\">{}</page>\n",
                    escape_xml(label)
                )),
                None => out.push_str("    <ellipsis/>\n"),
            }
        }
        out.push_str("  </window>\n");
    }
    out.push_str("</windows>\n");
    out.into_bytes()
}

pub fn render(format: OutputFormat, records: &[WindowRecord]) -> Vec<u8> {
    match format {
        OutputFormat::Text => render_text(records),
        OutputFormat::Json => render_json(records),
        OutputFormat::Xml => render_xml(records),
    }
}

pub fn summary_line(record: &WindowRecord, one_based: bool) -> String {
    let shown = if one_based {
        record.page_index + 1
    } else {
        record.page_index
    };
    format!(
        "page {shown} of {} -> {}",
        record.num_pages,
        window::format_buttons(&record.buttons, one_based)
    )
}
