//! Global CSS styles for Cardsmith.
//!
//! Light studio chrome: gray page, white panels, indigo accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --surface-page: #f3f4f6;
  --surface-panel: #ffffff;
  --surface-border: #d1d5db;

  /* ACCENT */
  --indigo: #1e3a8a;
  --indigo-bright: #2563eb;
  --indigo-soft: #eff6ff;

  /* TEXT */
  --text-primary: #111827;
  --text-secondary: #6b7280;
  --text-muted: #9ca3af;

  /* SEMANTIC */
  --danger: #dc2626;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--surface-page);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Studio Layout === */
.studio {
  padding: 2rem;
  min-height: 100vh;
}

.studio__columns {
  max-width: 72rem;
  margin: 0 auto;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 2rem;
  align-items: start;
}

.studio__editor-column {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.studio__preview-column {
  display: flex;
  flex-direction: column;
  align-items: center;
  position: sticky;
  top: 2rem;
}

.studio__preview-label {
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.2em;
  font-size: 0.875rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

/* === Banner === */
.studio-banner {
  background: linear-gradient(to right, var(--indigo), var(--indigo-bright));
  padding: 1.5rem;
  border-radius: 1rem;
  color: #ffffff;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.studio-banner__title {
  font-size: 1.875rem;
  font-weight: 700;
}

.studio-banner__tagline {
  opacity: 0.9;
}

/* === Editor Panel === */
.editor-panel {
  background: var(--surface-panel);
  padding: 1.5rem;
  border-radius: 0.75rem;
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.editor-panel__title {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.editor-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.editor-field {
  display: flex;
  flex-direction: column;
}

.editor-field__label {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
  margin-bottom: 0.25rem;
}

.editor-field__input {
  width: 100%;
  border: 1px solid var(--surface-border);
  border-radius: 0.375rem;
  padding: 0.5rem;
  font-size: 0.9375rem;
  font-family: var(--font-sans);
  color: var(--text-primary);
  background: var(--surface-panel);
  transition: border-color var(--transition-fast);
}

.editor-field__input:focus {
  outline: none;
  border-color: var(--indigo-bright);
}

.editor-field__hint {
  font-size: 0.75rem;
  color: var(--text-muted);
  margin-top: 0.25rem;
}

.editor-languages {
  display: flex;
  gap: 0.5rem;
}

/* === Portrait Upload === */
.portrait-upload {
  display: flex;
  flex-direction: column;
}

.portrait-upload__btn {
  align-self: flex-start;
  padding: 0.5rem 1rem;
  border: 0;
  border-radius: 9999px;
  background: var(--indigo-soft);
  color: var(--indigo-bright);
  font-size: 0.875rem;
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.portrait-upload__btn:hover {
  background: #dbeafe;
}

.portrait-upload__btn:disabled {
  opacity: 0.6;
  cursor: wait;
}

.portrait-upload__error {
  margin-top: 0.5rem;
  font-size: 0.8125rem;
  color: var(--danger);
}

/* === Experience List === */
.experience-list__header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 0.5rem;
}

.experience-list__add {
  font-size: 0.75rem;
  background: var(--indigo-soft);
  color: var(--indigo-bright);
  border: 0;
  padding: 0.25rem 0.5rem;
  border-radius: 0.25rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.experience-list__add:hover {
  background: #dbeafe;
}

.experience-list__rows {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  max-height: 10rem;
  overflow-y: auto;
}

.experience-row {
  display: flex;
  gap: 0.5rem;
  align-items: center;
}

.experience-row__input {
  width: 50%;
  border: 1px solid var(--surface-border);
  border-radius: 0.375rem;
  padding: 0.25rem 0.5rem;
  font-size: 0.875rem;
  font-family: var(--font-sans);
}

.experience-row__input:focus {
  outline: none;
  border-color: var(--indigo-bright);
}

.experience-row__remove {
  border: 0;
  background: none;
  color: var(--danger);
  font-size: 1.125rem;
  line-height: 1;
  cursor: pointer;
}

.experience-row__remove:hover {
  color: #991b1b;
}

/* === Download Button === */
.btn-download {
  width: 100%;
  background: #000000;
  color: #ffffff;
  padding: 1rem;
  border: 0;
  border-radius: 0.75rem;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  cursor: pointer;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  transition: background var(--transition-normal);
}

.btn-download:hover {
  background: #1f2937;
}

/* === Card Preview === */
.card-preview {
  transition: transform var(--transition-normal);
}

.card-preview:hover {
  transform: scale(1.02);
}

.card-preview svg {
  display: block;
  border-radius: 18px;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.15);
}
"#;
