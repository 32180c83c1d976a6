//! Export of the currently loaded page to an `.xlsx` download.
//!
//! Only the rows on screen are exported, never the full result set. Building
//! the file is pure; only [`export_current_page`] touches the browser.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::xlsx::{build_workbook, ExportError, XLSX_MIME};

/// Types that can be written as spreadsheet rows
pub trait ExcelExportable {
    /// Column headers, in export order
    fn headers() -> Vec<&'static str>;

    /// Cell values aligned with [`ExcelExportable::headers`]
    fn to_excel_row(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Nothing loaded; no file produced
    Skipped,
    Downloaded(String),
}

#[derive(Debug)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// `{Entity}_Page_{n}.xlsx`
pub fn page_filename(entity_tag: &str, page: u32) -> String {
    format!("{}_Page_{}.xlsx", entity_tag, page)
}

/// Builds the workbook for one page, or `None` when the page is empty.
pub fn prepare_page_export<T: ExcelExportable>(
    rows: &[T],
    entity_tag: &str,
    sheet_name: &str,
    page: u32,
) -> Result<Option<ExportFile>, ExportError> {
    if rows.is_empty() {
        return Ok(None);
    }
    let data: Vec<Vec<String>> = rows.iter().map(ExcelExportable::to_excel_row).collect();
    let bytes = build_workbook(sheet_name, &T::headers(), &data)?;
    Ok(Some(ExportFile {
        filename: page_filename(entity_tag, page),
        bytes,
    }))
}

/// Exports the loaded page and starts the browser download.
pub fn export_current_page<T: ExcelExportable>(
    rows: &[T],
    entity_tag: &str,
    sheet_name: &str,
    page: u32,
) -> Result<ExportOutcome, String> {
    let file = prepare_page_export(rows, entity_tag, sheet_name, page)
        .map_err(|e| format!("Failed to build workbook: {}", e))?;
    let Some(file) = file else {
        log::debug!("Export skipped: page {} of {} has no rows", page, entity_tag);
        return Ok(ExportOutcome::Skipped);
    };

    let blob = create_blob(&file.bytes, XLSX_MIME)?;
    download_blob(&blob, &file.filename)?;
    log::info!("Exported {} rows to {}", rows.len(), file.filename);
    Ok(ExportOutcome::Downloaded(file.filename))
}

fn create_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Triggers the download through a temporary anchor element
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    struct Branch {
        name: &'static str,
        city: Option<&'static str>,
    }

    impl ExcelExportable for Branch {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "City"]
        }

        fn to_excel_row(&self) -> Vec<String> {
            vec![self.name.to_string(), self.city.unwrap_or_default().to_string()]
        }
    }

    fn sheet(bytes: &[u8]) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name("xl/worksheets/sheet1.xml").unwrap();
        let mut out = String::new();
        file.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_page_filename() {
        assert_eq!(page_filename("ATM", 3), "ATM_Page_3.xlsx");
        assert_eq!(page_filename("CollegeDunia", 1), "CollegeDunia_Page_1.xlsx");
    }

    #[test]
    fn test_empty_page_produces_no_file() {
        let rows: Vec<Branch> = Vec::new();
        assert!(prepare_page_export(&rows, "ATM", "ATM_Data", 1).unwrap().is_none());
        assert_eq!(
            export_current_page(&rows, "ATM", "ATM_Data", 1),
            Ok(ExportOutcome::Skipped)
        );
    }

    #[test]
    fn test_export_contains_exactly_the_loaded_rows() {
        let rows = vec![
            Branch { name: "Camp", city: Some("Pune") },
            Branch { name: "Karol Bagh", city: None },
            Branch { name: "Andheri", city: Some("Mumbai") },
        ];
        let file = prepare_page_export(&rows, "Bank", "Bank_Data", 2)
            .unwrap()
            .unwrap();
        assert_eq!(file.filename, "Bank_Page_2.xlsx");

        let xml = sheet(&file.bytes);
        assert_eq!(xml.matches("<row ").count(), rows.len() + 1);
        assert!(xml.contains(">Karol Bagh<"));
        assert!(xml.contains(">Mumbai<"));
    }
}
