//! CSS for the studio page.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
:root {
    --accent: #667eea;
    --accent-dark: #764ba2;
    --bg-soft: #f8f9ff;
    --fg: #333;
    --muted: #666;
    --border: #e0e0e0;
    --ok-bg: #e8f7ee;
    --ok-fg: #1e7b46;
    --err-bg: #fee;
    --err-fg: #c33;
}

* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Ubuntu, sans-serif;
    background: linear-gradient(135deg, var(--accent) 0%, var(--accent-dark) 100%);
    min-height: 100vh;
    padding: 20px;
    color: var(--fg);
}

.container {
    background: white;
    border-radius: 20px;
    box-shadow: 0 20px 60px rgba(0,0,0,0.3);
    max-width: 1000px;
    margin: 0 auto;
    padding: 32px;
}

h1 { margin-bottom: 6px; }
.subtitle { color: var(--muted); margin-bottom: 24px; font-size: 0.9em; }

/* Tabs */
.tabs { display: flex; gap: 8px; border-bottom: 2px solid var(--border); margin-bottom: 24px; flex-wrap: wrap; }
.tab-btn {
    background: none;
    border: none;
    padding: 10px 18px;
    font-size: 1em;
    color: var(--muted);
    cursor: pointer;
    border-bottom: 3px solid transparent;
    text-decoration: none;
}
.tab-btn.active { color: var(--accent); border-bottom-color: var(--accent); font-weight: 600; }
.tab-content { display: none; }
.tab-content.active { display: block; }

/* Feature cards */
.feature-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 20px; }
.feature-card { background: var(--bg-soft); border-radius: 12px; padding: 20px; }
.feature-card h3 { color: var(--accent); margin-bottom: 12px; }
.field { margin-bottom: 12px; }
.field label { display: block; font-size: 0.85em; color: var(--muted); margin-bottom: 4px; }
.field input[type="text"], .field select { width: 100%; padding: 8px; border: 1px solid var(--border); border-radius: 6px; }

.btn {
    background: var(--accent);
    color: white;
    border: none;
    padding: 10px 20px;
    border-radius: 8px;
    cursor: pointer;
    font-weight: 600;
}
.btn:disabled { background: #b8bfe8; cursor: not-allowed; }

/* Gallery */
.template-gallery { display: grid; grid-template-columns: repeat(auto-fill, minmax(120px, 1fr)); gap: 12px; margin-bottom: 20px; }
.category-title { grid-column: 1 / -1; color: var(--accent); margin-top: 10px; }
.template-item { border: 3px solid transparent; border-radius: 10px; overflow: hidden; cursor: pointer; text-align: center; }
.template-item img { width: 100%; height: 120px; object-fit: cover; display: block; }
.template-item.selected { border-color: var(--accent); box-shadow: 0 0 0 2px var(--accent-dark); }
.template-name { font-size: 0.8em; padding: 4px; }
.face-preview img { max-width: 160px; border-radius: 8px; margin-top: 8px; }

/* Results */
.result { margin-top: 16px; }
.result img { max-width: 100%; border-radius: 10px; margin-top: 10px; display: block; }
.success { background: var(--ok-bg); color: var(--ok-fg); padding: 10px; border-radius: 8px; }
.error { background: var(--err-bg); color: var(--err-fg); padding: 10px; border-radius: 8px; }
.download-btn {
    display: inline-block;
    margin-top: 10px;
    padding: 10px;
    background: var(--accent);
    color: white;
    text-decoration: none;
    border-radius: 5px;
}

/* Loading overlay */
.loading {
    display: none;
    position: fixed;
    inset: 0;
    background: rgba(255,255,255,0.7);
    align-items: center;
    justify-content: center;
    flex-direction: column;
    z-index: 100;
}
.loading.show { display: flex; }
.spinner {
    border: 4px solid #f3f3f3;
    border-top: 4px solid var(--accent);
    border-radius: 50%;
    width: 50px;
    height: 50px;
    animation: spin 1s linear infinite;
    margin-bottom: 12px;
}
@keyframes spin { 0% { transform: rotate(0deg); } 100% { transform: rotate(360deg); } }
"#;
