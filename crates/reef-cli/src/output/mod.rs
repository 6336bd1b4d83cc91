use reef_core::entities::CompatibilityReport;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a compatibility report: a findings table in table mode, the whole
/// report otherwise.
pub fn output_report(report: &CompatibilityReport, format: OutputFormat) -> anyhow::Result<()> {
    if format != OutputFormat::Table {
        return output(report, format);
    }
    println!("{}", render_report_table(report));
    Ok(())
}

/// Print several named sections; table mode renders each one on its own.
pub fn output_sections(sections: &[(&str, Value)], format: OutputFormat) -> anyhow::Result<()> {
    if format != OutputFormat::Table {
        let object: serde_json::Map<String, Value> = sections
            .iter()
            .map(|(name, value)| ((*name).to_string(), value.clone()))
            .collect();
        return output(&object, format);
    }
    for (name, value) in sections {
        println!("{name}:\n{}\n", render_value_table(value)?);
    }
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_report_table(report: &CompatibilityReport) -> String {
    let mut out = format!("overall: {}", report.overall_level);
    if !report.unknown_species.is_empty() {
        out.push_str(&format!("\nunknown: {}", report.unknown_species.join(", ")));
    }
    if report.results.is_empty() {
        out.push_str("\n(no findings)");
        return out;
    }

    let rows: Vec<Vec<String>> = report
        .results
        .iter()
        .map(|finding| {
            vec![
                finding.level.to_string(),
                finding.rule.to_string(),
                finding.species_a.clone(),
                finding.species_b.clone().unwrap_or_else(|| "-".to_string()),
                finding.description_key.clone(),
            ]
        })
        .collect();
    let headers = ["level", "rule", "species", "target", "message"];
    out.push('\n');
    out.push_str(&table::render_table(&headers, &rows, options()));
    out
}

fn render_value_table(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_array_table(items)),
        Value::Object(map) => {
            let mut entries = map.iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, options()))
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(scalar)]],
            options(),
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
        return table::render_table(&["value"], &rows, options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
