use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };

    let rendered = match serde_json::to_value(value)? {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let headers = column_order(&items);
            let rows = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|header| map.get(header).map_or_else(|| "-".into(), cell))
                        .collect()
                })
                .collect::<Vec<Vec<String>>>();
            let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
            table::render(&header_refs, &rows, options)
        }
        Value::Array(items) => {
            let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
            table::render(&["value"], &rows, options)
        }
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect::<Vec<_>>();
            table::render(&["field", "value"], &rows, options)
        }
        scalar => table::render(&["value"], &[vec![cell(&scalar)]], options),
    };
    Ok(rendered)
}

/// Union of all keys, `id` first and the rest in key order.
fn column_order(items: &[Value]) -> Vec<String> {
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    headers.sort_by_key(|header| (header != "id", header.clone()));
    headers
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        nested => serde_json::to_string(nested).unwrap_or_else(|_| String::from("<invalid>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        weight_kg: Option<f64>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&Row { id: "ani-1", weight_kg: Some(420.5) }, OutputFormat::Json)
            .expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "ani-1");
        assert_eq!(parsed["weight_kg"], 420.5);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&vec![Row { id: "ani-1", weight_kg: None }], OutputFormat::Raw)
            .expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn empty_list_is_reported_as_no_rows() {
        let rows: Vec<Row> = Vec::new();
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn list_table_keeps_field_order_and_marks_nulls() {
        let rows = vec![
            Row { id: "ani-1", weight_kg: Some(420.5) },
            Row { id: "ani-2", weight_kg: None },
        ];
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("id"));
        assert!(lines[0].contains("weight_kg"));
        assert!(lines[3].starts_with("ani-2"));
        assert!(lines[3].trim_end().ends_with('-'));
    }
}
