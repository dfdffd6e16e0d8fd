//! Export of the page table to CSV and the browser download
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, Document, Element, HtmlAnchorElement, Url};

use super::dom;
use super::error::PageError;

/// Contents of an on-page table: header cells and body rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Serializes the table: one line per row, every cell quoted, lines
    /// joined with `\n` and no trailing newline.
    pub fn to_csv(&self) -> String {
        std::iter::once(&self.headers)
            .chain(self.rows.iter())
            .map(|row| csv_line(row))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn csv_line(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| quote_cell(cell))
        .collect::<Vec<_>>()
        .join(",")
}

/// Wraps a cell in quotes, doubling the quotes inside it
fn quote_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Reads `thead th` and `tbody tr > td` text of a table element.
pub fn read_table(table: &Element) -> CsvTable {
    let headers = dom::query_all_in(table, "thead th")
        .iter()
        .map(dom::trimmed_text)
        .collect();
    let rows = dom::query_all_in(table, "tbody tr")
        .iter()
        .map(|tr| {
            dom::query_all_in(tr, "td")
                .iter()
                .map(dom::trimmed_text)
                .collect()
        })
        .collect();
    CsvTable { headers, rows }
}

/// First table of the document, if any.
pub fn read_first_table(document: &Document) -> Option<CsvTable> {
    dom::query_one(document, "table").map(|table| read_table(&table))
}

/// Destination of an exported CSV file
pub trait CsvDownload {
    fn download(&self, content: &str, filename: &str) -> Result<(), PageError>;
}

/// Browser download through a Blob object URL
struct BlobDownload<'a> {
    document: &'a Document,
}

impl CsvDownload for BlobDownload<'_> {
    fn download(&self, content: &str, filename: &str) -> Result<(), PageError> {
        let blob = create_csv_blob(content)?;
        download_blob(self.document, &blob, filename)
    }
}

/// `filename` unless blank, otherwise `default`.
pub fn resolve_filename<'a>(filename: Option<&'a str>, default: &'a str) -> &'a str {
    filename
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(default)
}

/// Hands `table` to `sink` as CSV; `Ok(false)` without touching the sink
/// when there is no table.
pub fn export_table<D: CsvDownload>(
    table: Option<&CsvTable>,
    filename: &str,
    sink: &D,
) -> Result<bool, PageError> {
    let Some(table) = table else {
        log::debug!("No table on the page, nothing to export");
        return Ok(false);
    };
    sink.download(&table.to_csv(), filename)?;
    log::debug!("Exported {} rows to {}", table.rows.len(), filename);
    Ok(true)
}

/// Exports the first table of the page as `filename` (the configured default
/// when `None`).
///
/// Returns `Ok(false)` without downloading anything when the page has no
/// table.
pub fn export_table_to_csv(filename: Option<&str>) -> Result<bool, PageError> {
    let document = dom::document()?;
    let table = read_first_table(&document);
    let filename = resolve_filename(filename, &crate::config::get().default_export_filename);
    export_table(table.as_ref(), filename, &BlobDownload { document: &document })
}

/// Wraps the CSV text in a `text/csv` Blob
fn create_csv_blob(content: &str) -> Result<Blob, PageError> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| PageError::js("Failed to create blob", e))
}

/// Downloads `blob` as `filename` and releases its object URL
fn download_blob(document: &Document, blob: &Blob, filename: &str) -> Result<(), PageError> {
    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| PageError::js("Failed to create object URL", e))?;

    // The URL is released whatever happens to the anchor
    let clicked = click_download_link(document, &url, filename);
    Url::revoke_object_url(&url).map_err(|e| PageError::js("Failed to revoke URL", e))?;
    clicked
}

fn click_download_link(document: &Document, url: &str, filename: &str) -> Result<(), PageError> {
    let anchor = document
        .create_element("a")
        .map_err(|e| PageError::js("Failed to create anchor", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| PageError::js("Failed to cast to anchor", e.into()))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("visibility", "hidden")
        .map_err(|e| PageError::js("Failed to set style", e))?;

    let body = document.body().ok_or(PageError::NoBody)?;
    body.append_child(&anchor)
        .map_err(|e| PageError::js("Failed to append anchor", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| PageError::js("Failed to remove anchor", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[derive(Default)]
    struct RecordingDownload {
        files: RefCell<Vec<(String, String)>>,
    }

    impl CsvDownload for RecordingDownload {
        fn download(&self, content: &str, filename: &str) -> Result<(), PageError> {
            self.files
                .borrow_mut()
                .push((filename.to_string(), content.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_missing_table_produces_no_file() {
        let sink = RecordingDownload::default();
        let exported = export_table(None, "export.csv", &sink).unwrap();
        assert!(!exported);
        assert!(sink.files.borrow().is_empty());
    }

    #[test]
    fn test_table_is_downloaded_once() {
        let sink = RecordingDownload::default();
        let t = table(&["id"], &[&["1"], &["2"]]);
        assert!(export_table(Some(&t), "products.csv", &sink).unwrap());
        assert_eq!(
            *sink.files.borrow(),
            vec![("products.csv".to_string(), "\"id\"\n\"1\"\n\"2\"".to_string())]
        );
    }

    #[test]
    fn test_resolve_filename() {
        assert_eq!(resolve_filename(None, "export.csv"), "export.csv");
        assert_eq!(resolve_filename(Some("  "), "export.csv"), "export.csv");
        assert_eq!(resolve_filename(Some("sales.csv"), "export.csv"), "sales.csv");
    }

    #[test]
    fn test_every_cell_is_quoted() {
        let t = table(
            &["المنتج", "الكمية"],
            &[&["بلوك", "120"], &["رمل", "3.5"]],
        );
        assert_eq!(
            t.to_csv(),
            "\"المنتج\",\"الكمية\"\n\"بلوك\",\"120\"\n\"رمل\",\"3.5\""
        );
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let t = table(&["Name \"short\""], &[&["12\" pipe"]]);
        let csv = t.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "\"Name \"\"short\"\"\"");
        assert_eq!(lines[1], "\"12\"\" pipe\"");
    }

    #[test]
    fn test_commas_stay_inside_quotes() {
        let t = table(&["a,b"], &[]);
        assert_eq!(t.to_csv(), "\"a,b\"");
    }

    #[test]
    fn test_empty_body_and_empty_rows() {
        let t = table(&["id", "name"], &[&[]]);
        assert_eq!(t.to_csv(), "\"id\",\"name\"\n");
        assert_eq!(CsvTable::default().to_csv(), "");
    }
}
