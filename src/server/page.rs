//! The single dashboard page. Charts arrive as SVG from `/api/dashboard`.

pub fn index_html() -> String {
    r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>AI Salary Dashboard</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 0; color: #222; }
    header { padding: 16px 24px; border-bottom: 1px solid #ddd; }
    h1 { margin: 0; font-size: 1.6rem; }
    .layout { display: flex; gap: 24px; padding: 0 24px 24px; }
    aside { width: 260px; flex-shrink: 0; padding-top: 16px; }
    aside h2 { font-size: 1.1rem; }
    label { display: block; margin: 12px 0 4px; font-weight: 600; }
    select { width: 100%; padding: 6px; box-sizing: border-box; }
    select[multiple] { min-height: 220px; }
    .levels label { font-weight: normal; margin: 4px 0; }
    .link-btn { background: none; border: none; color: #2E86C1; cursor: pointer; padding: 0; margin-right: 8px; }
    main { flex: 1; min-width: 0; }
    .row { display: flex; gap: 16px; align-items: flex-start; }
    .chart { flex: 3; min-width: 0; }
    .card { flex: 1; padding: 20px; background: #f8f8f8; border-radius: 12px; text-align: center; margin-top: 48px; }
    .card h2 { color: #006400; }
    .error { background: #fdecea; color: #a12622; border: 1px solid #f5c2c0; padding: 12px; border-radius: 8px; margin: 16px 0; display: none; }
    .meta { color: #666; font-size: 0.9rem; }
  </style>
</head>
<body>
  <header><h1>AI/ML Salary Insights Dashboard</h1></header>
  <div class="layout">
    <aside>
      <h2>Filters</h2>
      <label for="year">Select Year</label>
      <select id="year"></select>

      <label for="countries">Employee Country</label>
      <div>
        <button type="button" class="link-btn" id="countries-all">All</button>
        <button type="button" class="link-btn" id="countries-none">None</button>
      </div>
      <select id="countries" multiple></select>

      <label>Experience Level</label>
      <div class="levels" id="levels"></div>
    </aside>

    <main>
      <div class="error" id="error"></div>
      <p class="meta" id="meta"></p>

      <h3>Salary Trend by Experience Level</h3>
      <div id="trend-chart"></div>

      <h3>Top 10 Highest Paying Job Titles</h3>
      <div class="row">
        <div class="chart" id="job-chart"></div>
        <div class="card" id="top-card">
          <h3>Highest Paid Job</h3>
          <h4 id="top-job">&ndash;</h4>
          <h2 id="top-salary">&ndash;</h2>
          <p>Median Salary (USD)</p>
        </div>
      </div>

      <h3>Country-wise Median Salary</h3>
      <div id="country-chart"></div>
    </main>
  </div>

  <script>
    const yearEl = document.getElementById('year');
    const countriesEl = document.getElementById('countries');
    const levelsEl = document.getElementById('levels');
    const errorEl = document.getElementById('error');
    const metaEl = document.getElementById('meta');

    function showError(message) {
      errorEl.textContent = message;
      errorEl.style.display = 'block';
      ['trend-chart', 'job-chart', 'country-chart'].forEach(id => {
        document.getElementById(id).innerHTML = '';
      });
    }

    function clearError() {
      errorEl.textContent = '';
      errorEl.style.display = 'none';
    }

    async function fetchJson(path, options) {
      const response = await fetch(path, options);
      const payload = await response.json().catch(() => ({}));
      if (!response.ok) {
        throw new Error(payload.message || ('HTTP ' + response.status));
      }
      return payload;
    }

    function currentRequest() {
      return {
        year: Number(yearEl.value),
        countries: Array.from(countriesEl.selectedOptions).map(o => o.value),
        levels: Array.from(levelsEl.querySelectorAll('input:checked')).map(i => i.value),
      };
    }

    async function refresh() {
      try {
        const view = await fetchJson('/api/dashboard', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(currentRequest()),
        });
        clearError();
        metaEl.textContent = view.filtered_rows + ' of ' + view.total_rows + ' records match the current filters';
        document.getElementById('trend-chart').innerHTML = view.trend_chart.svg || '';
        document.getElementById('job-chart').innerHTML = view.job_title_chart.svg || '';
        document.getElementById('country-chart').innerHTML = view.country_chart.svg || '';
        const card = view.highest_paid;
        document.getElementById('top-job').textContent = card ? card.job_title : 'No data';
        document.getElementById('top-salary').textContent = card ? card.formatted_salary : '–';
      } catch (err) {
        showError(err.message);
      }
    }

    async function init() {
      try {
        const filters = await fetchJson('/api/filters');
        const options = filters.options;
        const defaults = filters.defaults;
        options.years.forEach(year => {
          const opt = new Option(String(year), String(year), false, year === defaults.year);
          yearEl.add(opt);
        });
        options.countries.forEach(name => {
          countriesEl.add(new Option(name, name, true, true));
        });
        options.experience_levels.forEach(level => {
          const label = document.createElement('label');
          const input = document.createElement('input');
          input.type = 'checkbox';
          input.value = level.code;
          input.checked = true;
          input.addEventListener('change', refresh);
          label.appendChild(input);
          label.appendChild(document.createTextNode(' ' + level.code + ' (' + level.label + ')'));
          levelsEl.appendChild(label);
        });
        yearEl.addEventListener('change', refresh);
        countriesEl.addEventListener('change', refresh);
        document.getElementById('countries-all').addEventListener('click', () => {
          Array.from(countriesEl.options).forEach(o => { o.selected = true; });
          refresh();
        });
        document.getElementById('countries-none').addEventListener('click', () => {
          Array.from(countriesEl.options).forEach(o => { o.selected = false; });
          refresh();
        });
        await refresh();
      } catch (err) {
        showError(err.message);
      }
    }

    init();
  </script>
</body>
</html>
"#
    .to_string()
}
