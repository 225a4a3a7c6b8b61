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

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Responses are objects; the first array field (the records) becomes the
/// table body and the remaining scalar fields are printed above it.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let mut summary = Vec::new();
            let mut body = None;
            for (key, value) in map {
                match value {
                    Value::Array(items) if body.is_none() => body = Some(items),
                    other => summary.push(vec![key, value_to_cell(&other)]),
                }
            }

            let mut sections = Vec::new();
            if !summary.is_empty() {
                sections.push(table::render_entity_table(
                    &["key", "value"],
                    &summary,
                    table_options(),
                ));
            }
            if let Some(items) = body {
                sections.push(render_array_table(&items));
            }
            Ok(sections.join("\n\n"))
        }
        scalar => Ok(table::render_entity_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            table_options(),
        )),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, table_options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    // `id` then `name` lead; everything else is alphabetical.
    headers.sort_by_key(|header| (lead_rank(header), header.clone()));

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, table_options())
}

fn lead_rank(header: &str) -> u8 {
    match header {
        "id" => 0,
        "name" => 1,
        _ => 2,
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.replace('\n', " "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{render, table::render_entity_table};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        name: &'static str,
        category: Option<&'static str>,
    }

    #[derive(Serialize)]
    struct Listing {
        kind: &'static str,
        total: usize,
        records: Vec<Row>,
    }

    fn listing() -> Listing {
        Listing {
            kind: "biomarkers",
            total: 2,
            records: vec![
                Row {
                    id: "1-alt",
                    name: "ALT",
                    category: Some("Liver"),
                },
                Row {
                    id: "2-vitamin-d",
                    name: "Vitamin D",
                    category: None,
                },
            ],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&listing(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["records"][1]["id"], "2-vitamin-d");
        assert_eq!(parsed["total"], 2);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&listing(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_puts_records_in_columns() {
        let out = render(&listing(), OutputFormat::Table).expect("table render should work");
        assert!(out.contains("biomarkers"));
        let record_header = out
            .lines()
            .find(|line| line.starts_with("id"))
            .expect("records table header");
        assert!(record_header.find("name") < record_header.find("category"));
        assert!(record_header.starts_with("id"));
        assert!(out.contains("Vitamin D"));
    }

    #[test]
    fn empty_records_render_placeholder() {
        #[derive(Serialize)]
        struct Empty {
            records: Vec<Row>,
        }
        let out = render(&Empty { records: vec![] }, OutputFormat::Table).unwrap();
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["kind", "status", "count"];
        let rows = vec![
            vec!["symptoms".to_string(), "failed".to_string(), "0".to_string()],
            vec![
                "biomarkers".to_string(),
                "extracted".to_string(),
                "1204".to_string(),
            ],
        ];

        let table = render_entity_table(
            &headers,
            &rows,
            super::table::TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("status"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[3].ends_with("1204"));
    }
}
