//! Dashboard HTML: folder navigation, list pane, reading pane and the
//! import/export panel. The page renders the folder list server-side and
//! drives everything else through the JSON endpoints.

use crate::{app::AppState, models::email::folder::Folder, util::html_escape};
use axum::{extract::State, response::Html};

pub async fn ui_index(State(state): State<AppState>) -> Html<String> {
  let mailbox = state.mailbox.lock().await;
  let counts = mailbox.unread_counts();

  let mut nav = String::new();
  for folder in Folder::NAVIGABLE.iter() {
    let count = counts.get(folder);
    let badge = if count > 0 {
      format!("<span class=\"badge\">{count}</span>")
    } else {
      String::new()
    };
    nav.push_str(&format!(
      "<button class=\"folder{active}\" data-folder=\"{name}\" onclick=\"switchFolder('{name}')\"><span>{name}</span>{badge}</button>",
      active = if folder == mailbox.folder() { " active" } else { "" },
      name = html_escape(folder.as_str()),
    ));
  }

  let template = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>MockMail</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 0; }
    header { display:flex; justify-content:space-between; align-items:center; padding:.75rem 1rem; border-bottom:1px solid #ddd; }
    header h1 { font-size:1.1rem; margin:0; }
    .pill { margin-left:.5rem; font-size:12px; border:1px solid #ddd; border-radius:999px; padding:.1rem .5rem; color:#555; }
    main { display:flex; height: calc(100vh - 58px); }
    aside { width: 14rem; border-right:1px solid #ddd; padding:.75rem; }
    .folder { display:flex; justify-content:space-between; width:100%; padding:.5rem .75rem; border:0; background:none; border-radius:8px; cursor:pointer; }
    .folder.active, .folder:hover { background:#f3f4f6; }
    .badge { background:#e0e7ff; color:#4f46e5; border-radius:999px; padding:0 .45rem; font-size:12px; font-weight:600; }
    #list { width: 26rem; border-right:1px solid #ddd; overflow-y:auto; }
    .item { padding:.6rem .8rem; border-bottom:1px solid #eee; cursor:pointer; }
    .item.selected { background:#eef2ff; }
    .item.unread .subject { font-weight:700; }
    .snippet { color:#666; font-size:13px; }
    .tag { background:#eef2ff; color:#4f46e5; border-radius:999px; padding:.05rem .45rem; font-size:11px; margin-right:.25rem; }
    #pane { flex:1; padding:1rem 1.5rem; overflow-y:auto; }
    #pane iframe { width:100%; height:70vh; border:0; }
    .actions button, header button { margin-right:.4rem; }
    #modal { display:none; position:fixed; inset:0; background:rgba(0,0,0,.35); }
    #modal .box { background:#fff; margin:5vh auto; width:min(900px, 92vw); padding:1rem; border-radius:10px; }
    #json { width:100%; height:55vh; font-family: ui-monospace, Menlo, Consolas, monospace; font-size:12px; }
    .empty { color:#888; padding:1rem; }
  </style>
  <script>
    let state = null;

    function esc(s) {
      return String(s).replace(/&/g, '&amp;').replace(/</g, '&lt;').replace(/>/g, '&gt;').replace(/"/g, '&quot;').replace(/'/g, '&#39;');
    }
    function when(iso) {
      const d = new Date(iso);
      return isNaN(d) ? iso : d.toLocaleString();
    }
    async function call(method, url, body) {
      const opts = { method: method, headers: {} };
      if (body !== undefined) {
        opts.headers['Content-Type'] = 'application/json';
        opts.body = JSON.stringify(body);
      }
      const res = await fetch(url, opts);
      if (!res.ok) throw new Error(await res.text());
      return res.json();
    }
    function render(view) {
      state = view;
      document.querySelectorAll('.folder').forEach(function (b) {
        const name = b.dataset.folder;
        b.classList.toggle('active', name === view.folder);
        const n = view.counts[name] || 0;
        b.innerHTML = '<span>' + esc(name) + '</span>' + (n > 0 ? '<span class="badge">' + n + '</span>' : '');
      });
      const list = document.getElementById('list');
      if (!view.messages.length) {
        list.innerHTML = '<div class="empty">No messages</div>';
      } else {
        list.innerHTML = view.messages.map(function (m) {
          const cls = 'item' + (m.unread ? ' unread' : '') + (m.id === view.selectedId ? ' selected' : '');
          const tags = m.tags.map(function (t) { return '<span class="tag">' + esc(t) + '</span>'; }).join('');
          return '<div class="' + cls + '" data-id="' + esc(m.id) + '">' +
            '<div>' + (m.starred ? '★ ' : '') + esc(m.from.name) + ' · <small>' + esc(when(m.date)) + '</small></div>' +
            '<div class="subject">' + esc(m.subject) + (m.attachmentCount ? ' 📎' : '') + '</div>' +
            '<div class="snippet">' + esc(m.snippet) + '</div><div>' + tags + '</div></div>';
        }).join('');
      }
      renderPane();
    }
    function renderPane() {
      const pane = document.getElementById('pane');
      const id = state.selectedId;
      if (!id) { pane.innerHTML = '<div class="empty">Nothing selected</div>'; return; }
      const inTrash = state.folder === 'Trash';
      pane.innerHTML = '<div class="actions">' +
        '<button onclick="act(\'star\')">Star</button>' +
        '<button onclick="markUnread()">Mark unread</button>' +
        '<button onclick="act(\'move\', {folder: \'Archive\'})">Archive</button>' +
        (inTrash ? '<button onclick="act(\'restore\')">Restore</button>' : '<button onclick="act(\'delete\')">Delete</button>') +
        '</div><iframe src="/messages/' + encodeURIComponent(id) + '/html"></iframe>';
    }
    async function refresh() { render(await call('GET', '/view')); }
    async function switchFolder(name) { render(await call('PUT', '/view', { folder: name })); }
    async function search(q) { render(await call('PUT', '/view', { query: q })); }
    async function openMessage(id) { render(await call('POST', '/messages/' + encodeURIComponent(id) + '/open')); }
    async function act(action, body) {
      render(await call('POST', '/messages/' + encodeURIComponent(state.selectedId) + '/' + action, body));
    }
    async function markUnread() { await act('read', { unread: true }); }
    async function openModal() {
      const res = await fetch('/scenario');
      document.getElementById('json').value = await res.text();
      document.getElementById('modal').style.display = 'block';
    }
    function closeModal() { document.getElementById('modal').style.display = 'none'; }
    async function importJson() {
      const res = await fetch('/scenario', { method: 'POST', body: document.getElementById('json').value });
      const out = await res.json();
      if (!res.ok) { alert(out.error); return; }
      closeModal();
      render(out.view);
    }
    async function resetSample() {
      closeModal();
      render(await call('POST', '/scenario/reset'));
    }
    window.addEventListener('load', function () {
      document.getElementById('list').addEventListener('click', function (ev) {
        const item = ev.target.closest('.item');
        if (item) openMessage(item.dataset.id);
      });
      refresh();
    });
  </script>
</head>
<body>
  <header>
    <div><h1 style="display:inline">MockMail</h1><span class="pill">Teaching Tool</span></div>
    <div>
      <input id="q" placeholder="Search subject, sender, tags..." oninput="search(this.value)" />
      <button onclick="openModal()">Import / Export</button>
      <button onclick="resetSample()">Reset sample</button>
    </div>
  </header>
  <main>
    <aside>
      <button disabled>Compose (disabled)</button>
      <nav>__NAV__</nav>
    </aside>
    <section id="list"></section>
    <section id="pane"></section>
  </main>
  <div id="modal">
    <div class="box">
      <h3>Import / Export scenario</h3>
      <textarea id="json"></textarea>
      <p>
        <button onclick="importJson()">Import</button>
        <a href="/scenario" download><button>Export</button></a>
        <button onclick="resetSample()">Reset sample</button>
        <button onclick="closeModal()">Close</button>
      </p>
    </div>
  </div>
</body>
</html>
"#;
  Html(template.replace("__NAV__", &nav))
}
