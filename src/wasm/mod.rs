//! WASM bindings for the pagination engine
//!
//! The browser owns the real layout, so the host reports the settled content
//! height after each commit and receives style updates through a callback.
//! Structured data crosses the bridge as JSON strings.

use crate::document::{Block, Caret, Document, PageBreakMarker};
use crate::error::PaginationError;
use crate::reflow::{PaginatorConfig, ReflowCoordinator};
use crate::surface::{RenderSurface, SurfaceStyle};
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Surface whose height is reported by the page and whose style is pushed
/// back to it
pub struct HostSurface {
    reported_height: f32,
    style: SurfaceStyle,
    on_style: Option<js_sys::Function>,
}

impl HostSurface {
    fn new() -> Self {
        Self {
            reported_height: 0.0,
            style: SurfaceStyle {
                width: 0.0,
                min_height: 0.0,
                margin: 0.0,
            },
            on_style: None,
        }
    }
}

impl RenderSurface for HostSurface {
    fn rendered_height(&self) -> f32 {
        self.reported_height
    }

    fn set_style(&mut self, style: SurfaceStyle) {
        self.style = style;
        let Some(callback) = &self.on_style else {
            return;
        };
        match serde_json::to_string(&style) {
            Ok(json) => {
                if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                    log::warn!("style callback failed: {err:?}");
                }
            }
            Err(err) => log::warn!("could not encode surface style: {err}"),
        }
    }

    fn style(&self) -> SurfaceStyle {
        self.style
    }
}

fn to_js(err: PaginationError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::warn!("could not encode value for JS: {err}");
        "null".to_string()
    })
}

/// WASM-exposed paginator wrapper
#[wasm_bindgen]
pub struct WasmPaginator {
    inner: ReflowCoordinator<Document, HostSurface>,
}

#[wasm_bindgen]
impl WasmPaginator {
    /// Create a paginator with the default configuration (A4, grow-only)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmPaginator, JsValue> {
        Self::build(PaginatorConfig::default())
    }

    /// Create a paginator from a JSON config object
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<WasmPaginator, JsValue> {
        let config = PaginatorConfig::from_json(json)
            .map_err(|err| JsValue::from_str(&format!("invalid config: {err}")))?;
        Self::build(config)
    }

    fn build(config: PaginatorConfig) -> Result<WasmPaginator, JsValue> {
        let inner = ReflowCoordinator::new(Document::new(), HostSurface::new(), config).map_err(to_js)?;
        Ok(Self { inner })
    }

    /// Register a callback receiving the surface style JSON on every change.
    /// The current style is delivered immediately.
    #[wasm_bindgen(js_name = onStyleChanged)]
    pub fn on_style_changed(&mut self, callback: js_sys::Function) {
        let surface = self.inner.surface_mut();
        surface.on_style = Some(callback);
        let current = surface.style();
        surface.set_style(current);
    }

    /// Record the settled height of the editor content
    #[wasm_bindgen(js_name = reportRenderedHeight)]
    pub fn report_rendered_height(&mut self, height: f32) {
        self.inner.surface_mut().reported_height = height;
    }

    /// Insert text at current caret position
    #[wasm_bindgen(js_name = insertText)]
    pub fn insert_text(&mut self, text: &str) -> Result<(), JsValue> {
        self.inner.document_mut().insert_text(text).map_err(to_js)
    }

    /// Append an empty paragraph at the end of the document and move the
    /// caret into it
    #[wasm_bindgen(js_name = insertParagraph)]
    pub fn insert_paragraph(&mut self) {
        let doc = self.inner.document_mut();
        doc.push_block(Block::paragraph(""));
        doc.move_caret_to_end();
    }

    #[wasm_bindgen(js_name = setCaret)]
    pub fn set_caret(&mut self, block: usize, offset: usize) {
        self.inner.document_mut().set_caret(Caret::new(block, offset));
    }

    /// Content was committed; returns the page count
    #[wasm_bindgen(js_name = onContentChanged)]
    pub fn on_content_changed(&mut self) -> Result<usize, JsValue> {
        self.inner.on_content_changed().map(|r| r.page_count).map_err(to_js)
    }

    /// Content was deleted; returns the page count
    #[wasm_bindgen(js_name = onContentShrunk)]
    pub fn on_content_shrunk(&mut self) -> Result<usize, JsValue> {
        self.inner.on_content_shrunk().map(|r| r.page_count).map_err(to_js)
    }

    /// Switch page size by name; returns the page count
    #[wasm_bindgen(js_name = selectGeometry)]
    pub fn select_geometry(&mut self, name: &str) -> Result<usize, JsValue> {
        self.inner.select_geometry(name).map(|r| r.page_count).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setHeaderEnabled)]
    pub fn set_header_enabled(&mut self, enabled: bool) -> Result<usize, JsValue> {
        self.inner.set_header_enabled(enabled).map(|r| r.page_count).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setFooterEnabled)]
    pub fn set_footer_enabled(&mut self, enabled: bool) -> Result<usize, JsValue> {
        self.inner.set_footer_enabled(enabled).map(|r| r.page_count).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setHeaderText)]
    pub fn set_header_text(&mut self, text: &str) {
        self.inner.set_header_text(text);
    }

    #[wasm_bindgen(js_name = setFooterText)]
    pub fn set_footer_text(&mut self, text: &str) {
        self.inner.set_footer_text(text);
    }

    /// Insert a page break at the caret; returns its block index
    #[wasm_bindgen(js_name = requestPageBreak)]
    pub fn request_page_break(&mut self) -> Result<usize, JsValue> {
        self.inner.request_manual_page_break().map_err(to_js)
    }

    /// Handle a key press; returns whether it was consumed
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str, primary_modifier: bool) -> Result<bool, JsValue> {
        if !PageBreakMarker::is_shortcut(key, primary_modifier) {
            return Ok(false);
        }
        self.request_page_break()?;
        Ok(true)
    }

    /// Get page count
    #[wasm_bindgen(js_name = getPageCount)]
    pub fn get_page_count(&self) -> usize {
        self.inner.page_count()
    }

    /// Pagination state as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        to_json(&self.inner.state())
    }

    /// Available page sizes as JSON, in menu order
    #[wasm_bindgen(js_name = getGeometries)]
    pub fn get_geometries(&self) -> String {
        to_json(&self.inner.registry().list())
    }

    #[wasm_bindgen(js_name = getSurfaceStyle)]
    pub fn get_surface_style(&self) -> String {
        to_json(&self.inner.surface().style())
    }

    /// Inline CSS for the editor element
    #[wasm_bindgen(js_name = getSurfaceCss)]
    pub fn get_surface_css(&self) -> String {
        self.inner.surface().style().to_css()
    }

    /// Page frames as JSON
    #[wasm_bindgen(js_name = getPageFrames)]
    pub fn get_page_frames(&self) -> String {
        to_json(&self.inner.page_frames())
    }

    /// HTML for a page-break marker
    #[wasm_bindgen(js_name = pageBreakHtml)]
    pub fn page_break_html() -> String {
        PageBreakMarker::to_html(&[])
    }

    /// Get full document text
    #[wasm_bindgen(js_name = getText)]
    pub fn get_text(&self) -> String {
        self.inner.document().text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentModel;

    fn paginator() -> WasmPaginator {
        WasmPaginator::build(PaginatorConfig::default()).unwrap_or_else(|_| panic!("mount failed"))
    }

    #[test]
    fn test_reported_height_drives_pages() {
        let mut p = paginator();
        p.insert_text("Hello").unwrap_or_else(|_| panic!("insert failed"));
        p.report_rendered_height(2200.0);
        assert_eq!(p.on_content_changed().unwrap_or_default(), 3);
        assert_eq!(p.get_page_count(), 3);
        assert_eq!(p.select_geometry("Legal").unwrap_or_default(), 2);
        assert_eq!(
            p.get_surface_css(),
            "padding-left:0px; padding-right:0px; min-height:1344px; width:816px;"
        );
    }

    #[test]
    fn test_state_json() {
        let mut p = paginator();
        p.set_header_text("Draft");
        p.set_header_enabled(true).unwrap_or_default();
        let state: serde_json::Value = serde_json::from_str(&p.get_state()).unwrap();
        assert_eq!(state["pageCount"], 1);
        assert_eq!(state["headerEnabled"], true);
        assert_eq!(state["headerText"], "Draft");
        assert_eq!(state["geometry"]["name"], "A4");
    }

    #[test]
    fn test_geometries_json() {
        let p = paginator();
        let list: serde_json::Value = serde_json::from_str(&p.get_geometries()).unwrap();
        assert_eq!(list.as_array().map(|a| a.len()), Some(6));
        assert_eq!(list[4]["name"], "Legal");
        assert_eq!(list[4]["height"], 1344.0);
    }

    #[test]
    fn test_insert_paragraph_appends() {
        let mut p = paginator();
        p.insert_text("one").unwrap_or_else(|_| panic!("insert failed"));
        p.insert_paragraph();
        p.insert_text("two").unwrap_or_else(|_| panic!("insert failed"));

        p.set_caret(0, 0);
        p.insert_paragraph();
        assert_eq!(p.get_text(), "one\ntwo\n");
        assert_eq!(p.inner.document().caret(), Caret::new(2, 0));
    }

    #[test]
    fn test_shortcut_inserts_break() {
        let mut p = paginator();
        p.insert_text("Intro").unwrap_or_else(|_| panic!("insert failed"));
        assert!(!p.handle_key("a", true).unwrap_or(true));
        assert!(p.handle_key("Enter", true).unwrap_or(false));
        assert_eq!(p.inner.document().marker_count(), 1);
        // Page count waits for the content event
        assert_eq!(p.get_page_count(), 1);
    }
}
