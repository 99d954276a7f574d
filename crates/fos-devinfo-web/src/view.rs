//! DOM table view.
//!
//! Builds the widget skeleton once; each render replaces the table
//! body and the per-row copy handlers.

use crate::clipboard::WebClipboard;
use anyhow::{anyhow, Result};
use fos_devinfo::{copy_text, TableModel, TableView};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

const ROW_CLASS: &str = "odd:bg-white even:bg-gray-100 align-top";
const KEY_CELL_CLASS: &str = "px-3 py-2 align-top font-medium w-1/3";
const VALUE_CELL_CLASS: &str = "px-3 py-2 align-top break-words max-w-xl";
const COPY_CELL_CLASS: &str = "px-3 py-2 text-center";
const BUTTON_CLASS: &str = "px-2 py-1 rounded border text-sm hover:bg-gray-100";
const HEADER_CLASSES: [&str; 3] = ["px-3 py-2 text-left", "px-3 py-2 text-left", "px-3 py-2"];

fn js(err: JsValue) -> anyhow::Error {
    anyhow!("DOM error: {:?}", err)
}

fn element(document: &Document, tag: &str, class: &str) -> Result<Element> {
    let el = document.create_element(tag).map_err(js)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

fn append(parent: &Element, child: &Element) -> Result<()> {
    parent.append_child(child).map_err(js)?;
    Ok(())
}

/// Three-column table rendered into a container element.
pub struct DomTableView {
    document: Document,
    root: Element,
    title: Element,
    caption: Element,
    header_row: Element,
    body: Element,
    clipboard: Rc<WebClipboard>,
    handlers: RefCell<Vec<Closure<dyn FnMut()>>>,
}

impl DomTableView {
    /// Build the skeleton and append it to `container`.
    pub fn new(document: Document, container: &Element, clipboard: WebClipboard) -> Result<Self> {
        let root = element(&document, "div", "p-4")?;

        let heading = element(&document, "div", "mb-2 flex items-center justify-between")?;
        let title = element(&document, "h3", "text-xl font-semibold")?;
        let caption = element(&document, "div", "text-sm text-muted-foreground")?;
        append(&heading, &title)?;
        append(&heading, &caption)?;
        append(&root, &heading)?;

        let frame = element(&document, "div", "overflow-auto rounded-lg border")?;
        let table = element(&document, "table", "w-full table-fixed text-sm")?;
        let head = element(&document, "thead", "")?;
        let header_row = element(&document, "tr", "bg-gray-50")?;
        let body = element(&document, "tbody", "")?;
        append(&head, &header_row)?;
        append(&table, &head)?;
        append(&table, &body)?;
        append(&frame, &table)?;
        append(&root, &frame)?;

        append(container, &root)?;

        Ok(Self {
            document,
            root,
            title,
            caption,
            header_row,
            body,
            clipboard: Rc::new(clipboard),
            handlers: RefCell::new(Vec::new()),
        })
    }

    fn copy_handler(&self, value: String) -> Closure<dyn FnMut()> {
        let clipboard = self.clipboard.clone();
        Closure::<dyn FnMut()>::new(move || {
            let clipboard = clipboard.clone();
            let value = value.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = copy_text(&*clipboard, &value).await;
                debug!("copy finished: {:?}", outcome);
            });
        })
    }

    fn try_render(&self, table: &TableModel) -> Result<()> {
        self.title.set_text_content(Some(table.title.as_str()));
        self.caption.set_text_content(Some(table.caption.as_str()));

        self.header_row.set_inner_html("");
        for (text, class) in table.headers.into_iter().zip(HEADER_CLASSES) {
            let th = element(&self.document, "th", class)?;
            th.set_text_content(Some(text));
            append(&self.header_row, &th)?;
        }

        let mut handlers = Vec::with_capacity(table.rows.len());
        self.body.set_inner_html("");
        for row in &table.rows {
            let tr = element(&self.document, "tr", ROW_CLASS)?;
            tr.set_attribute("data-key", &row.key).map_err(js)?;

            let key = element(&self.document, "td", KEY_CELL_CLASS)?;
            key.set_text_content(Some(row.key.as_str()));
            let value = element(&self.document, "td", VALUE_CELL_CLASS)?;
            value.set_text_content(Some(row.value.as_str()));

            let cell = element(&self.document, "td", COPY_CELL_CLASS)?;
            let button = element(&self.document, "button", BUTTON_CLASS)?;
            button.set_attribute("type", "button").map_err(js)?;
            button.set_attribute("title", &row.copy_title).map_err(js)?;
            button.set_text_content(Some(table.copy_label.as_str()));

            let handler = self.copy_handler(row.value.clone());
            button
                .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
                .map_err(js)?;
            handlers.push(handler);

            append(&cell, &button)?;
            append(&tr, &key)?;
            append(&tr, &value)?;
            append(&tr, &cell)?;
            append(&self.body, &tr)?;
        }

        // Old buttons are gone with the old body, so their handlers can go too
        *self.handlers.borrow_mut() = handlers;
        Ok(())
    }

    /// Remove the widget from the document.
    pub fn detach(&self) {
        self.root.remove();
        self.handlers.borrow_mut().clear();
    }
}

impl TableView for DomTableView {
    fn render(&self, table: &TableModel) {
        if let Err(e) = self.try_render(table) {
            warn!("failed to render device info table: {}", e);
        }
    }
}
