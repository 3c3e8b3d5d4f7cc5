//! Printable report rendering plus the blob download/print plumbing.
//!
//! The artifact is a complete styled HTML document wrapped as a `text/html`
//! blob; it renders and prints faithfully, but is not a real PDF byte
//! stream.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::date_utils;
use crate::shared::list_core::{value_text, Column, Row};

/// Optional per-column value formatters, applied before the `-` placeholder.
pub type Formatters = HashMap<&'static str, fn(&Value) -> String>;

/// Formatter for `created_at`-style columns: ISO date -> es-ES short form.
pub fn date_formatter(value: &Value) -> String {
    date_utils::short_date(value.as_str().unwrap_or(""))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn cell_value(row: &Row, column: &Column, formatters: &Formatters) -> String {
    let raw = row.get(column.key).cloned().unwrap_or(Value::Null);
    let text = match formatters.get(column.key) {
        Some(format) => format(&raw),
        None => value_text(&raw),
    };
    if text.trim().is_empty() {
        "-".to_string()
    } else {
        escape_html(&text)
    }
}

/// Render the complete report document for `rows` under `columns`.
/// Deterministic: the generation date is an argument, not read from a clock.
pub fn render_document(
    title: &str,
    rows: &[Row],
    columns: &[Column],
    formatters: &Formatters,
    generated_on: NaiveDate,
) -> String {
    let mut head_cells = String::new();
    for column in columns {
        head_cells.push_str(&format!("<th>{}</th>", escape_html(column.label)));
    }

    let mut body_rows = String::new();
    for row in rows {
        body_rows.push_str("<tr>");
        for column in columns {
            body_rows.push_str(&format!("<td>{}</td>", cell_value(row, column, formatters)));
        }
        body_rows.push_str("</tr>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 20px; color: #333; }}
    .header {{ text-align: center; margin-bottom: 30px; border-bottom: 2px solid #009ece; padding-bottom: 20px; }}
    .header h1 {{ color: #009ece; margin: 0; font-size: 24px; }}
    .header p {{ margin: 5px 0; color: #666; }}
    table {{ width: 100%; border-collapse: collapse; margin-top: 20px; }}
    th, td {{ border: 1px solid #ddd; padding: 12px; text-align: left; }}
    th {{ background-color: #f8f9fa; font-weight: bold; color: #333; }}
    tr:nth-child(even) {{ background-color: #f9f9f9; }}
    .footer {{ margin-top: 30px; text-align: center; font-size: 12px; color: #666; border-top: 1px solid #ddd; padding-top: 20px; }}
    @media print {{ body {{ margin: 0; }} .header {{ break-after: avoid; }} }}
  </style>
</head>
<body>
  <div class="header">
    <h1>{title}</h1>
    <p>Generado el {generated}</p>
    <p>Total de registros: {count}</p>
  </div>
  <table>
    <thead>
      <tr>{head_cells}</tr>
    </thead>
    <tbody>
{body_rows}    </tbody>
  </table>
  <div class="footer">
    <p>Documento generado automáticamente por el sistema de gestión</p>
  </div>
</body>
</html>
"#,
        title = escape_html(title),
        generated = date_utils::spanish_long_date(generated_on),
        count = rows.len(),
        head_cells = head_cells,
        body_rows = body_rows,
    )
}

/// Suggested artifact filename: "Gestión de Despacho" -> "gestión-de-despacho-2024-03-15.pdf".
pub fn filename_for(title: &str, date: NaiveDate) -> String {
    let slug = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{}-{}.pdf", slug, date.format("%Y-%m-%d"))
}

/// Wrap the rendered document as a blob and return its object URL.
pub fn create_document_url(html: &str) -> Result<String, String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(html));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/html;charset=utf-8");

    let blob = Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("No se pudo crear el blob: {:?}", e))?;
    Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("No se pudo crear la URL del documento: {:?}", e))
}

pub fn revoke_document_url(url: &str) {
    let _ = Url::revoke_object_url(url);
}

/// Download the artifact through a temporary anchor element.
pub fn download_document(url: &str, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("{:?}", e))?;
    anchor.set_href(url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("{:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor).map_err(|e| format!("{:?}", e))?;
    anchor.click();
    body.remove_child(&anchor).map_err(|e| format!("{:?}", e))?;
    Ok(())
}

/// Open the artifact in a new window and print it once it has loaded.
pub fn print_document(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let print_window = window
        .open_with_url_and_target(url, "_blank")
        .map_err(|e| format!("{:?}", e))?
        .ok_or("El navegador bloqueó la ventana de impresión")?;

    let target = print_window.clone();
    let on_load = Closure::wrap(Box::new(move || {
        let _ = target.print();
    }) as Box<dyn FnMut()>);
    print_window
        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
        .map_err(|e| format!("{:?}", e))?;
    // The window outlives this call; keep the listener alive.
    on_load.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_core::row_from_value;
    use serde_json::json;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("product", "Producto"),
            Column::new("input_quantity", "Cantidad"),
            Column::new("created_at", "Fecha de Creación"),
        ]
    }

    fn a_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn zero_records_still_render_a_valid_document() {
        let html = render_document("Gestión de Despacho", &[], &columns(), &Formatters::new(), a_date());
        assert!(html.contains("<h1>Gestión de Despacho</h1>"));
        assert!(html.contains("Total de registros: 0"));
        assert!(html.contains("Generado el 15 de marzo de 2024"));
        assert!(!html.contains("<td>"));
    }

    #[test]
    fn rows_render_in_column_order_with_dash_placeholders() {
        let rows = vec![row_from_value(json!({
            "product": "Arroz",
            "input_quantity": 12,
            "created_at": null,
        }))];
        let html = render_document("Inventario", &rows, &columns(), &Formatters::new(), a_date());
        assert!(html.contains("<td>Arroz</td><td>12</td><td>-</td>"));
    }

    #[test]
    fn formatters_run_before_placeholder_substitution() {
        let rows = vec![row_from_value(json!({
            "product": "Arroz",
            "input_quantity": 12,
            "created_at": "2024-03-05",
        }))];
        let mut formatters = Formatters::new();
        formatters.insert("created_at", date_formatter as fn(&Value) -> String);
        let html = render_document("Inventario", &rows, &columns(), &formatters, a_date());
        assert!(html.contains("<td>5/3/2024</td>"));
    }

    #[test]
    fn markup_in_record_values_is_escaped() {
        let rows = vec![row_from_value(json!({
            "product": "<script>alert(1)</script>",
            "input_quantity": 1,
            "created_at": "2024-03-05",
        }))];
        let html = render_document("Inventario", &rows, &columns(), &Formatters::new(), a_date());
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn filename_is_a_dated_slug() {
        assert_eq!(
            filename_for("Gestión de Despacho", a_date()),
            "gestión-de-despacho-2024-03-15.pdf"
        );
    }
}
