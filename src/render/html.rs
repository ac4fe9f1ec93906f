use crate::report::ReportData;

/// Render a self-contained HTML report (data embedded as JSON).
///
/// The template is filled with `replace` rather than `format!()` since the
/// embedded JS is full of `{}` from template literals.
pub fn render_html_report(data: &ReportData) -> anyhow::Result<String> {
    // "</" inside a JSON string would end the script element early.
    let json = serde_json::to_string(data)?.replace("</", "<\\/");

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Job Time Sets</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  .container { display: flex; height: calc(100vh - 58px); }
  .sidebar { width: 240px; border-right: 1px solid #ddd; padding: 12px; overflow: auto; }
  .main { flex: 1; padding: 12px; overflow: auto; }
  .details { width: 360px; border-left: 1px solid #ddd; padding: 12px; overflow: auto; }

  .summary { display: flex; gap: 16px; flex-wrap: wrap; font-size: 14px; color: #333; }
  .pill { padding: 4px 8px; border: 1px solid #ddd; border-radius: 999px; background: #fafafa; }

  .source { cursor: pointer; user-select: none; padding: 2px 4px; border-radius: 4px; }
  .source:hover { background: #f3f3f3; }
  .source.selected { background: #e9f2ff; border: 1px solid #cfe3ff; }
  .muted { color: #777; font-size: 12px; }

  .tabs { display: flex; gap: 4px; border-bottom: 1px solid #ddd; margin-bottom: 8px; }
  .tab { padding: 6px 10px; cursor: pointer; border: 1px solid transparent; border-bottom: none; }
  .tab.active { border-color: #ddd; background: white; border-radius: 6px 6px 0 0; }

  .bar-row { display: flex; align-items: center; gap: 8px; cursor: pointer; padding: 1px 0; }
  .bar-row:hover { background: #f7f7f7; }
  .bar-label { width: 220px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; font-size: 13px; }
  .bar { height: 14px; border-radius: 2px; }
  .bar-value { font-size: 12px; font-variant-numeric: tabular-nums; color: #555; }

  table { border-collapse: collapse; width: 100%; margin-top: 8px; }
  th, td { border-bottom: 1px solid #eee; padding: 6px 8px; text-align: left; font-size: 13px; }
  code { font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; font-size: 13px; }
</style>
</head>
<body>
<header>
  <div class="summary" id="summary"></div>
</header>

<div class="container">
  <div class="sidebar">
    <div class="muted">Data Source</div>
    <div id="sources"></div>
  </div>

  <div class="main">
    <div class="tabs" id="tabs"></div>
    <div style="display:flex; gap: 8px; margin-bottom: 8px;">
      <button id="zoomIn" style="padding: 6px 10px;">Zoom in</button>
      <button id="zoomOut" style="padding: 6px 10px;">Zoom out</button>
      <span class="muted" id="window"></span>
    </div>
    <div id="chart"></div>
  </div>

  <div class="details">
    <div class="muted">Item Properties</div>
    <table><tbody id="props"></tbody></table>
  </div>
</div>

<script>
// Embedded report data (JSON object literal)
const DATA = __DATA__;

const state = {
  source: null,
  variation: 0,
  width: DATA.viewport.initial_points,
  selectedJob: null
};

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;")
    .replaceAll("'", "&#39;");
}

function currentSeries() {
  const src = DATA.data_sources.find(d => d.name === state.source);
  if (!src || !src.series.length) return null;
  return src.series[Math.min(state.variation, src.series.length - 1)];
}

function renderSummary() {
  const t = DATA.totals;
  document.getElementById("summary").innerHTML = `
    <span class="pill"><b>${escapeHtml(DATA.title)}</b></span>
    <span class="pill">jobs: <b>${t.jobs}</b></span>
    <span class="pill">data sources: <b>${t.data_sources}</b></span>
    <span class="pill">measurements: <b>${t.measurements}</b></span>
  `;
}

function renderSources() {
  const root = document.getElementById("sources");
  root.innerHTML = "";
  for (const src of DATA.data_sources) {
    const row = document.createElement("div");
    row.className = "source" + (state.source === src.name ? " selected" : "");
    row.textContent = src.name;
    row.onclick = () => selectSource(src.name);
    root.appendChild(row);
  }
}

function renderTabs() {
  const root = document.getElementById("tabs");
  root.innerHTML = "";
  const src = DATA.data_sources.find(d => d.name === state.source);
  if (!src) return;
  src.series.forEach((s, i) => {
    const tab = document.createElement("div");
    tab.className = "tab" + (i === state.variation ? " active" : "");
    tab.textContent = s.variation;
    tab.onclick = () => {
      state.variation = i;
      state.width = DATA.viewport.initial_points;
      renderTabs();
      renderChart();
    };
    root.appendChild(tab);
  });
}

function renderChart() {
  const root = document.getElementById("chart");
  root.innerHTML = "";
  const series = currentSeries();
  if (!series) return;

  const count = Math.max(1, Math.min(series.points.length, Math.round(state.width)));
  const visible = series.points.slice(0, count);
  const max = visible.reduce((m, p) => Math.max(m, p.value), 0) || 1;

  document.getElementById("window").textContent =
    `showing ${visible.length} of ${series.points.length}`;

  for (const p of visible) {
    const row = document.createElement("div");
    row.className = "bar-row";
    row.title = p.tooltip;
    row.onclick = () => selectJob(p.job_id);
    const pct = Math.max(0, (p.value / max) * 100);
    row.innerHTML = `
      <span class="bar-label">${escapeHtml(p.label)}</span>
      <span class="bar" style="width:${pct}%; max-width: 60%; background:${p.color}"></span>
      <span class="bar-value">${p.value}</span>
    `;
    root.appendChild(row);
  }
}

function selectJob(id) {
  state.selectedJob = id;
  const body = document.getElementById("props");
  body.innerHTML = "";
  for (const line of DATA.jobs[id] || []) {
    const tr = document.createElement("tr");
    tr.innerHTML = `<td><code>${escapeHtml(line)}</code></td>`;
    body.appendChild(tr);
  }
}

function selectSource(name) {
  state.source = name;
  state.variation = 0;
  state.width = DATA.viewport.initial_points;
  renderSources();
  renderTabs();
  renderChart();
}

function zoom(factor) {
  state.width = Math.max(0, state.width * factor);
  renderChart();
}

document.getElementById("zoomIn").onclick = () => zoom(DATA.viewport.zoom_in);
document.getElementById("zoomOut").onclick = () => zoom(DATA.viewport.zoom_out);

renderSummary();
renderSources();
if (DATA.data_sources.length) selectSource(DATA.data_sources[0].name);
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace("__DATA__", &json))
}
