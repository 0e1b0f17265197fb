use serbench_core::RunReport;

/// Byte count in binary units, exact below 1 KB.
pub fn human_bytes(n: usize) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut v = n as f64;
    let mut unit = 0;
    while v >= 1024.0 && unit < UNITS.len() - 1 {
        v /= 1024.0;
        unit += 1;
    }
    match unit {
        0 => format!("{n} B"),
        _ => format!("{v:.2} {}", UNITS[unit]),
    }
}

/// Ratio to two decimals, with a trailing `*` when compression expanded the payload.
fn ratio_cell(ratio: f64) -> String {
    let flag = if ratio < 1.0 { "*" } else { "" };
    format!("{ratio:.2}x{flag}")
}

fn table_row(cells: [&str; 8]) -> String {
    format!(
        "  {:<8} {:>8}  {:>12} {:>12} {:>8}  {:>12} {:>12} {:>8}",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5], cells[6], cells[7]
    )
}

/// Human-readable table, one row per measurement.
pub fn render_table(report: &RunReport) -> String {
    let mut lines = vec![
        format!("  text codec   : {}", report.text_codec),
        format!("  binary codec : {}", report.binary_codec),
        format!(
            "  compressor   : {} ({})",
            report.compressor, report.compressor_settings
        ),
        String::new(),
        table_row([
            "shape", "records", "text", "text+comp", "ratio", "binary", "binary+comp", "ratio",
        ]),
        format!("  {}", "-".repeat(92)),
    ];

    for m in &report.results {
        lines.push(table_row([
            m.shape.label(),
            &m.num_records.to_string(),
            &human_bytes(m.text_size),
            &human_bytes(m.text_compressed_size),
            &ratio_cell(m.text_ratio),
            &human_bytes(m.binary_size),
            &human_bytes(m.binary_compressed_size),
            &ratio_cell(m.binary_ratio),
        ]));
    }

    if report.results.iter().any(|m| !m.expanded().is_empty()) {
        lines.push(String::new());
        lines.push("  * compressed output is larger than its input".to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// CSV with a header row; sizes in raw bytes.
pub fn render_csv(report: &RunReport) -> String {
    let mut out = String::from(
        "data_type,num_records,json_size,binary_size,json_compressed_size,\
         binary_compressed_size,json_compression_ratio,binary_compression_ratio\n",
    );
    for m in &report.results {
        out.push_str(&format!(
            "{},{},{},{},{},{},{:.6},{:.6}\n",
            m.shape.label(),
            m.num_records,
            m.text_size,
            m.binary_size,
            m.text_compressed_size,
            m.binary_compressed_size,
            m.text_ratio,
            m.binary_ratio,
        ));
    }
    out
}

pub fn render_json(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
