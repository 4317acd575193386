//! HTML report generation
//!
//! Renders the batch as a self-contained dashboard page: a stats row for the
//! whole run, then one card per input with the confidence gauge, narrative
//! summary, vertical bar chart, donut, and horizontal bar chart. Everything
//! is static SVG/CSS computed from the derived series — no script, no
//! external assets.

use crate::classification::EmotionLabel;
use crate::report::{AnalysisRecord, Summary};
use std::io::{self, Write};

// Gauge geometry from the dashboard's r=45 circle (2*pi*45, rounded)
const GAUGE_CIRCUMFERENCE: f64 = 283.0;

// Donut slice radius chosen so the circumference is exactly 100 units,
// matching the pie series' percent-of-100 offset convention
const DONUT_RADIUS: f64 = 15.915;

const STYLE: &str = r#"
        :root {
            --bg: #0d1117;
            --card: #161b22;
            --border: #30363d;
            --text: #e6edf3;
            --dim: #7d8590;
            --accent: #58a6ff;
            --error: #6e7681;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
            background: var(--bg);
            color: var(--text);
            line-height: 1.5;
        }
        .container { max-width: 1200px; margin: 0 auto; padding: 2rem; }

        .header {
            display: flex;
            align-items: baseline;
            gap: 1rem;
            margin-bottom: 2rem;
            padding-bottom: 1rem;
            border-bottom: 1px solid var(--border);
        }
        .logo {
            font-size: 2.5rem;
            font-weight: 800;
            background: linear-gradient(135deg, var(--accent), #a371f7);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .subtitle { color: var(--dim); font-size: 1rem; }

        .stats {
            display: grid;
            grid-template-columns: repeat(8, 1fr);
            gap: 0.75rem;
            margin-bottom: 2rem;
        }
        .stat {
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 1rem;
            text-align: center;
        }
        .stat-value { font-size: 2rem; font-weight: 700; line-height: 1; }
        .stat-label { color: var(--dim); font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.05em; margin-top: 0.5rem; }

        .record {
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 1.5rem;
            margin-bottom: 1.5rem;
        }
        .record h2 { font-size: 1.1rem; margin-bottom: 0.25rem; }
        .record .path { color: var(--dim); font-size: 0.8rem; margin-bottom: 1rem; word-break: break-all; }
        .record .load-error { color: var(--error); font-size: 0.9rem; margin-bottom: 1rem; }
        .row { display: flex; flex-wrap: wrap; gap: 2rem; align-items: flex-start; }
        .panel { flex: 1; min-width: 260px; }
        .panel h3 { font-size: 0.875rem; color: var(--dim); text-transform: uppercase; letter-spacing: 0.05em; margin-bottom: 0.75rem; }

        .gauge { display: block; margin: 0 auto; }
        .gauge-value { font-size: 0.65rem; font-weight: 700; fill: var(--text); }
        .gauge-label { font-size: 0.3rem; fill: var(--dim); }
        .gauge-level { text-align: center; color: var(--dim); font-size: 0.875rem; margin-top: 0.5rem; }

        .sentence {
            background: var(--bg);
            border: 1px solid var(--border);
            border-radius: 8px;
            padding: 1rem;
            font-size: 1rem;
        }

        .bars { display: flex; align-items: flex-end; gap: 0.5rem; height: 160px; }
        .bar-col { flex: 1; display: flex; flex-direction: column; justify-content: flex-end; height: 100%; text-align: center; }
        .bar-fill { border-radius: 4px 4px 0 0; min-height: 1px; }
        .bar-name { color: var(--dim); font-size: 0.7rem; margin-top: 0.25rem; }
        .bar-value { font-size: 0.7rem; color: var(--accent); }

        .hbar-row { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.4rem; }
        .hbar-name { width: 4.5rem; color: var(--dim); font-size: 0.8rem; text-align: right; }
        .hbar-track { flex: 1; background: var(--bg); border-radius: 4px; height: 14px; }
        .hbar-fill { height: 100%; border-radius: 4px; }
        .hbar-value { width: 4rem; font-size: 0.75rem; color: var(--dim); }

        .donut-wrap { display: flex; align-items: center; gap: 1.5rem; }
        .legend-item { display: flex; align-items: center; gap: 0.5rem; font-size: 0.8rem; margin-bottom: 0.3rem; }
        .legend-swatch { width: 10px; height: 10px; border-radius: 50%; }
        .legend-name { color: var(--dim); }
        .legend-value { color: var(--accent); font-weight: 600; }

        .footer { color: var(--dim); font-size: 0.8rem; text-align: center; margin-top: 2rem; }
"#;

pub fn write<W: Write>(writer: &mut W, records: &[AnalysisRecord]) -> io::Result<()> {
    let summary = Summary::from_records(records);

    // Sort by confidence descending so the strongest results lead the page
    let mut sorted: Vec<&AnalysisRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        b.analytics
            .confidence_percent
            .total_cmp(&a.analytics.confidence_percent)
    });

    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html lang=\"en\">")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "    <meta charset=\"UTF-8\">")?;
    writeln!(
        writer,
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )?;
    writeln!(writer, "    <title>Emoscope Analysis Report</title>")?;
    writeln!(writer, "    <style>{}</style>", STYLE)?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;
    writeln!(writer, "<div class=\"container\">")?;
    writeln!(
        writer,
        "    <div class=\"header\"><span class=\"logo\">Emoscope</span><span class=\"subtitle\">speech emotion analysis report</span></div>"
    )?;

    write_stats(writer, &summary)?;

    for record in sorted {
        write_record(writer, record)?;
    }

    writeln!(
        writer,
        "    <div class=\"footer\">{} result(s) analyzed</div>",
        summary.total
    )?;
    writeln!(writer, "</div>")?;
    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")
}

fn write_stats<W: Write>(writer: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(writer, "    <div class=\"stats\">")?;
    for label in EmotionLabel::ALL {
        writeln!(
            writer,
            "        <div class=\"stat\"><div class=\"stat-value\" style=\"color: {}\">{}</div><div class=\"stat-label\">{}</div></div>",
            crate::analytics::color_for(label.as_str()),
            summary.dominant(label),
            label
        )?;
    }
    writeln!(
        writer,
        "        <div class=\"stat\"><div class=\"stat-value\" style=\"color: var(--error)\">{}</div><div class=\"stat-label\">errors</div></div>",
        summary.errors
    )?;
    writeln!(writer, "    </div>")
}

fn write_record<W: Write>(writer: &mut W, record: &AnalysisRecord) -> io::Result<()> {
    let analytics = &record.analytics;

    writeln!(writer, "    <div class=\"record\">")?;
    writeln!(writer, "        <h2>{}</h2>", escape(&record.file_name))?;
    writeln!(
        writer,
        "        <div class=\"path\">{}</div>",
        escape(&record.file_path)
    )?;
    if let Some(ref error) = record.error {
        writeln!(
            writer,
            "        <div class=\"load-error\">Could not load result ({}); showing fallback values.</div>",
            escape(error)
        )?;
    }

    writeln!(writer, "        <div class=\"row\">")?;

    // Confidence gauge
    writeln!(writer, "        <div class=\"panel\">")?;
    writeln!(writer, "            <h3>Confidence Score</h3>")?;
    write_gauge(writer, analytics.confidence_percent)?;
    writeln!(
        writer,
        "            <div class=\"gauge-level\">Confidence level: <strong>{}</strong></div>",
        escape(&analytics.confidence_level)
    )?;
    writeln!(writer, "        </div>")?;

    // Narrative summary
    writeln!(writer, "        <div class=\"panel\">")?;
    writeln!(writer, "            <h3>Emotion Summary</h3>")?;
    writeln!(
        writer,
        "            <p class=\"sentence\">{}</p>",
        escape(&analytics.summary_sentence)
    )?;
    writeln!(writer, "        </div>")?;

    writeln!(writer, "        </div>")?;
    writeln!(writer, "        <div class=\"row\">")?;

    // Vertical bar chart
    writeln!(writer, "        <div class=\"panel\">")?;
    writeln!(writer, "            <h3>Emotion Distribution</h3>")?;
    writeln!(writer, "            <div class=\"bars\">")?;
    for entry in &analytics.bar_series {
        writeln!(
            writer,
            "                <div class=\"bar-col\"><div class=\"bar-fill\" style=\"height: {:.2}%; background: {}\"></div><div class=\"bar-name\">{}</div><div class=\"bar-value\">{:.2}%</div></div>",
            entry.value.clamp(0.0, 100.0),
            entry.fill,
            entry.name,
            entry.value
        )?;
    }
    writeln!(writer, "            </div>")?;
    writeln!(writer, "        </div>")?;

    // Donut with legend
    writeln!(writer, "        <div class=\"panel\">")?;
    writeln!(writer, "            <h3>Emotion Breakdown</h3>")?;
    writeln!(writer, "            <div class=\"donut-wrap\">")?;
    write_donut(writer, analytics)?;
    writeln!(writer, "            <div>")?;
    for slice in &analytics.pie_series {
        writeln!(
            writer,
            "                <div class=\"legend-item\"><span class=\"legend-swatch\" style=\"background: {}\"></span><span class=\"legend-name\">{}</span><span class=\"legend-value\">{:.2}%</span></div>",
            slice.fill, slice.name, slice.value
        )?;
    }
    writeln!(writer, "            </div>")?;
    writeln!(writer, "            </div>")?;
    writeln!(writer, "        </div>")?;

    // Horizontal bar chart, most intense first
    writeln!(writer, "        <div class=\"panel\">")?;
    writeln!(writer, "            <h3>Ranked Intensity</h3>")?;
    for entry in &analytics.horizontal_bar_series {
        writeln!(
            writer,
            "            <div class=\"hbar-row\"><span class=\"hbar-name\">{}</span><div class=\"hbar-track\"><div class=\"hbar-fill\" style=\"width: {:.2}%; background: {}\"></div></div><span class=\"hbar-value\">{:.2}%</span></div>",
            entry.name,
            entry.value.clamp(0.0, 100.0),
            entry.fill,
            entry.value
        )?;
    }
    writeln!(writer, "        </div>")?;

    writeln!(writer, "        </div>")?;
    writeln!(writer, "    </div>")
}

/// Circular gauge: a 283-unit ring filled proportionally to the percentage.
fn write_gauge<W: Write>(writer: &mut W, percent: f64) -> io::Result<()> {
    let offset = GAUGE_CIRCUMFERENCE - (percent / 100.0) * GAUGE_CIRCUMFERENCE;

    writeln!(
        writer,
        "            <svg class=\"gauge\" width=\"160\" height=\"160\" viewBox=\"0 0 100 100\">"
    )?;
    writeln!(
        writer,
        "                <circle cx=\"50\" cy=\"50\" r=\"45\" fill=\"none\" stroke=\"var(--border)\" stroke-width=\"10\"/>"
    )?;
    writeln!(
        writer,
        "                <circle cx=\"50\" cy=\"50\" r=\"45\" fill=\"none\" stroke=\"var(--accent)\" stroke-width=\"10\" stroke-linecap=\"round\" stroke-dasharray=\"{}\" stroke-dashoffset=\"{:.1}\" transform=\"rotate(-90 50 50)\"/>",
        GAUGE_CIRCUMFERENCE, offset
    )?;
    writeln!(
        writer,
        "                <text x=\"50\" y=\"50\" text-anchor=\"middle\" class=\"gauge-value\">{:.0}%</text>",
        percent
    )?;
    writeln!(
        writer,
        "                <text x=\"50\" y=\"62\" text-anchor=\"middle\" class=\"gauge-label\">Accuracy</text>"
    )?;
    writeln!(writer, "            </svg>")
}

/// Donut built directly from the pie series: each slice is a circle stroke
/// spanning `value` dash units with the slice's cumulative offset. The center
/// shows the primary emotion.
fn write_donut<W: Write>(
    writer: &mut W,
    analytics: &crate::analytics::DerivedAnalytics,
) -> io::Result<()> {
    writeln!(
        writer,
        "            <svg width=\"180\" height=\"180\" viewBox=\"0 0 100 100\">"
    )?;
    for slice in &analytics.pie_series {
        writeln!(
            writer,
            "                <circle cx=\"50\" cy=\"50\" r=\"{}\" fill=\"transparent\" stroke=\"{}\" stroke-width=\"14\" stroke-dasharray=\"{:.2} 100\" stroke-dashoffset=\"{:.2}\" transform=\"rotate(-90 50 50)\"/>",
            DONUT_RADIUS, slice.fill, slice.value, slice.offset
        )?;
    }
    writeln!(
        writer,
        "                <text x=\"50\" y=\"48\" text-anchor=\"middle\" style=\"font-size: 0.28rem; fill: var(--dim)\">Top Emotion</text>"
    )?;
    writeln!(
        writer,
        "                <text x=\"50\" y=\"58\" text-anchor=\"middle\" style=\"font-size: 0.4rem; font-weight: 600; fill: var(--text)\">{}</text>",
        analytics.primary
    )?;
    writeln!(writer, "            </svg>")
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
