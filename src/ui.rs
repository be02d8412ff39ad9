use crate::models::{Mood, SummaryResponse};

/// Activity tags offered on the page. The store accepts any tag.
pub const ACTIVITIES: [(&str, &str); 10] = [
    ("exercise", "Exercise"),
    ("work", "Work"),
    ("social", "Social"),
    ("family", "Family"),
    ("hobbies", "Hobbies"),
    ("sleep", "Good sleep"),
    ("reading", "Reading"),
    ("outdoors", "Outdoors"),
    ("music", "Music"),
    ("travel", "Travel"),
];

pub fn render_index(date: &str, summary: &SummaryResponse) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{TOTAL}}", &summary.total_days.to_string())
        .replace("{{AVG}}", &summary.average_mood)
        .replace("{{STREAK}}", &summary.streak.to_string())
        .replace("{{BEST}}", &summary.best_mood)
        .replace("{{MOODS}}", &mood_cards())
        .replace("{{ACTIVITIES}}", &activity_tags())
}

fn mood_cards() -> String {
    Mood::ALL
        .iter()
        .map(|mood| {
            let key = mood.label().to_lowercase();
            format!(
                r#"<button class="mood-card" type="button" data-mood="{key}"><span class="emoji">{}</span><span>{}</span></button>"#,
                emoji(*mood),
                mood.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn activity_tags() -> String {
    ACTIVITIES
        .iter()
        .map(|(key, label)| {
            format!(r#"<button class="activity-item" type="button" data-activity="{key}">{label}</button>"#)
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}

fn emoji(mood: Mood) -> &'static str {
    match mood {
        Mood::Excellent => "😊",
        Mood::Good => "🙂",
        Mood::Okay => "😐",
        Mood::Bad => "😔",
        Mood::Terrible => "😢",
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600&display=swap');

    :root {
      --bg-1: #eef2fb;
      --bg-2: #c9d6ff;
      --ink: #2b2a33;
      --accent: #6c63ff;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
      --excellent: #4CAF50;
      --good: #8BC34A;
      --okay: #FFC107;
      --bad: #FF9800;
      --terrible: #F44336;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e2e8ff 60%, #f4f6fd 100%);
      color: var(--ink);
      font-family: "Poppins", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 0;
      color: #5f5c67;
      font-size: 1rem;
    }

    .moods {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(120px, 1fr));
      gap: 12px;
    }

    .mood-card {
      background: white;
      border: 2px solid transparent;
      border-radius: 18px;
      padding: 16px 10px;
      display: grid;
      gap: 6px;
      justify-items: center;
      cursor: pointer;
      font: inherit;
      transition: transform 150ms ease, border-color 150ms ease;
    }

    .mood-card .emoji {
      font-size: 2rem;
    }

    .mood-card.selected {
      border-color: var(--accent);
      transform: translateY(-2px);
    }

    .details {
      display: none;
      gap: 16px;
    }

    .details.open {
      display: grid;
    }

    .activities {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .activity-item {
      border: 1px solid rgba(47, 72, 88, 0.15);
      background: white;
      border-radius: 999px;
      padding: 8px 14px;
      font: inherit;
      font-size: 0.9rem;
      cursor: pointer;
    }

    .activity-item.selected {
      background: var(--accent);
      border-color: var(--accent);
      color: white;
    }

    textarea {
      width: 100%;
      min-height: 90px;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.15);
      padding: 12px;
      font: inherit;
      resize: vertical;
    }

    .btn {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      color: white;
      background: var(--accent);
      box-shadow: 0 10px 24px rgba(108, 99, 255, 0.3);
    }

    .btn.secondary {
      background: var(--accent-2);
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .btn:active {
      transform: scale(0.98);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #chart {
      width: 100%;
      height: 240px;
      display: block;
    }

    .chart-axis {
      stroke: #ccc;
      stroke-width: 1;
    }

    .chart-label {
      fill: #555;
      font-size: 12px;
    }

    .history {
      display: grid;
      gap: 12px;
    }

    .history-item {
      background: white;
      border-radius: 16px;
      padding: 14px 16px;
      display: flex;
      gap: 14px;
      align-items: flex-start;
    }

    .history-emoji {
      font-size: 1.8rem;
    }

    .history-date {
      font-size: 0.85rem;
      color: #8b857d;
    }

    .history-mood {
      font-weight: 600;
    }

    .history-notes,
    .history-activities {
      font-size: 0.9rem;
      color: #5f5c67;
    }

    .empty-state {
      text-align: center;
      color: #6f6a75;
      padding: 24px;
    }

    .data-actions {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .btn {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Mood Tracker</h1>
      <p class="subtitle">How are you feeling today, <span id="today">{{DATE}}</span>?</p>
    </header>

    <section class="moods">
        {{MOODS}}
    </section>

    <section class="details" id="details">
      <div>
        <h2>What did you do today?</h2>
        <div class="activities">
          {{ACTIVITIES}}
        </div>
      </div>
      <textarea id="notes" placeholder="Anything worth remembering?"></textarea>
      <button class="btn" id="save-btn" type="button">Save mood</button>
    </section>

    <div class="status" id="status"></div>

    <section class="panel">
      <div class="stat">
        <span class="label">Days tracked</span>
        <span id="total-days" class="value">{{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Average mood</span>
        <span id="avg-mood" class="value">{{AVG}}</span>
      </div>
      <div class="stat">
        <span class="label">Streak</span>
        <span id="streak" class="value">{{STREAK}}</span>
      </div>
      <div class="stat">
        <span class="label">Best mood</span>
        <span id="best-mood" class="value">{{BEST}}</span>
      </div>
    </section>

    <section>
      <h2>Last 7 entries</h2>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 600 240" aria-label="Mood chart" role="img"></svg>
      </div>
    </section>

    <section>
      <h2>Recent history</h2>
      <div class="history" id="history"></div>
    </section>

    <section class="data-actions">
      <button class="btn secondary" id="export-btn" type="button">Export data</button>
      <button class="btn secondary" id="import-btn" type="button">Import data</button>
      <input type="file" id="import-file" accept="application/json,.json" hidden />
    </section>
  </main>

  <script>
    const EMOJI = { excellent: '😊', good: '🙂', okay: '😐', bad: '😔', terrible: '😢' };
    const COLORS = {
      excellent: '#4CAF50',
      good: '#8BC34A',
      okay: '#FFC107',
      bad: '#FF9800',
      terrible: '#F44336'
    };

    const detailsEl = document.getElementById('details');
    const notesEl = document.getElementById('notes');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const historyEl = document.getElementById('history');
    const importFileEl = document.getElementById('import-file');
    const moodCards = Array.from(document.querySelectorAll('.mood-card'));
    const activityItems = Array.from(document.querySelectorAll('.activity-item'));

    let selectedMood = null;
    let selectedActivities = [];

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const selectMood = (mood) => {
      selectedMood = mood;
      moodCards.forEach((card) => card.classList.toggle('selected', card.dataset.mood === mood));
      detailsEl.classList.add('open');
    };

    const setActivities = (activities) => {
      selectedActivities = [...activities];
      activityItems.forEach((item) =>
        item.classList.toggle('selected', selectedActivities.includes(item.dataset.activity))
      );
    };

    const toggleActivity = (activity) => {
      if (selectedActivities.includes(activity)) {
        setActivities(selectedActivities.filter((a) => a !== activity));
      } else {
        setActivities([...selectedActivities, activity]);
      }
    };

    const renderStats = (summary) => {
      document.getElementById('total-days').textContent = summary.total_days;
      document.getElementById('avg-mood').textContent = summary.average_mood;
      document.getElementById('streak').textContent = summary.streak;
      document.getElementById('best-mood').textContent = summary.best_mood;
    };

    const svgEl = (name, attrs, text) => {
      const el = document.createElementNS('http://www.w3.org/2000/svg', name);
      Object.entries(attrs).forEach(([key, value]) => el.setAttribute(key, value));
      if (text !== undefined) {
        el.textContent = text;
      }
      return el;
    };

    const renderChart = (points) => {
      chartEl.replaceChildren();
      const width = 600;
      const height = 240;
      const padding = 40;

      if (!points.length) {
        chartEl.appendChild(
          svgEl('text', { class: 'chart-label', x: width / 2, y: height / 2, 'text-anchor': 'middle' }, 'No data to display')
        );
        return;
      }

      const chartWidth = width - padding * 2;
      const chartHeight = height - padding * 2;
      const barWidth = chartWidth / points.length;

      points.forEach((point, index) => {
        const barHeight = (point.value / 5) * chartHeight;
        const x = padding + index * barWidth;
        const y = height - padding - barHeight;
        chartEl.appendChild(
          svgEl('rect', { x: x + 5, y, width: Math.max(barWidth - 10, 2), height: barHeight, rx: 6, fill: COLORS[point.mood] })
        );
        chartEl.appendChild(
          svgEl('text', { class: 'chart-label', x: x + barWidth / 2, y: height - 12, 'text-anchor': 'middle' }, point.label)
        );
      });

      chartEl.appendChild(
        svgEl('path', {
          class: 'chart-axis',
          fill: 'none',
          d: `M ${padding} ${padding} L ${padding} ${height - padding} L ${width - padding} ${height - padding}`
        })
      );
    };

    const renderHistory = (items) => {
      historyEl.replaceChildren();
      if (!items.length) {
        const empty = document.createElement('div');
        empty.className = 'empty-state';
        empty.textContent = 'No mood entries yet. Start tracking your mood to see your history here!';
        historyEl.appendChild(empty);
        return;
      }

      [...items].reverse().forEach((item) => {
        const row = document.createElement('div');
        row.className = 'history-item';

        const emoji = document.createElement('div');
        emoji.className = 'history-emoji';
        emoji.textContent = EMOJI[item.mood];

        const content = document.createElement('div');
        const date = document.createElement('div');
        date.className = 'history-date';
        date.textContent = item.label;
        const mood = document.createElement('div');
        mood.className = 'history-mood';
        mood.textContent = item.mood_label;
        content.append(date, mood);

        if (item.activities.length) {
          const activities = document.createElement('div');
          activities.className = 'history-activities';
          activities.textContent = item.activities.join(', ');
          content.appendChild(activities);
        }
        if (item.notes) {
          const notes = document.createElement('div');
          notes.className = 'history-notes';
          notes.textContent = item.notes;
          content.appendChild(notes);
        }

        row.append(emoji, content);
        historyEl.appendChild(row);
      });
    };

    const renderSummary = (summary) => {
      renderStats(summary);
      renderChart(summary.weekly_chart);
      renderHistory(summary.history);
    };

    const loadToday = async () => {
      const res = await fetch('/api/today');
      if (!res.ok) {
        throw new Error('Unable to load today');
      }
      const data = await res.json();
      if (data.entry) {
        selectMood(data.entry.mood);
        setActivities(data.entry.activities);
        notesEl.value = data.entry.notes;
      }
    };

    const loadStats = async () => {
      const res = await fetch('/api/stats');
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      renderSummary(await res.json());
    };

    const resetForm = () => {
      selectedMood = null;
      setActivities([]);
      moodCards.forEach((card) => card.classList.remove('selected'));
      notesEl.value = '';
      detailsEl.classList.remove('open');
    };

    const save = async () => {
      if (!selectedMood) {
        setStatus('Please select a mood first!', 'error');
        return;
      }
      setStatus('Saving...', 'info');
      const res = await fetch('/api/mood', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          mood: selectedMood,
          activities: selectedActivities,
          notes: notesEl.value.trim()
        })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      const data = await res.json();
      renderSummary(data.summary);
      resetForm();
      setStatus('Mood saved!', 'ok');
      setTimeout(() => setStatus('', ''), 2000);
    };

    const exportData = () => {
      window.location.href = '/api/export';
    };

    const importData = async (file) => {
      const res = await fetch('/api/import', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: await file.text()
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Import failed');
      }
      const data = await res.json();
      await Promise.all([loadStats(), loadToday()]);
      setStatus(`Imported ${data.imported} entries.`, 'ok');
    };

    moodCards.forEach((card) => card.addEventListener('click', () => selectMood(card.dataset.mood)));
    activityItems.forEach((item) => item.addEventListener('click', () => toggleActivity(item.dataset.activity)));
    document.getElementById('save-btn').addEventListener('click', () => {
      save().catch((err) => setStatus(err.message, 'error'));
    });
    document.getElementById('export-btn').addEventListener('click', exportData);
    document.getElementById('import-btn').addEventListener('click', () => importFileEl.click());
    importFileEl.addEventListener('change', (event) => {
      const file = event.target.files[0];
      if (file) {
        importData(file).catch((err) => setStatus(err.message, 'error'));
      }
      event.target.value = '';
    });

    Promise.all([loadStats(), loadToday()]).catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
