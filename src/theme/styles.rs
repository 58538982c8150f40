//! Global CSS styles for Prompt All About It.
//!
//! Injected once per launch by the App component. Includes the `.sr-only`
//! utility the screen-reader live region depends on.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* CANOPY (Backgrounds) */
  --canopy-dark: #0c1510;
  --canopy: #121f17;
  --canopy-border: #1f3328;

  /* LEAF (Actions, Accents) */
  --leaf: #3e8e5a;
  --leaf-bright: #5fc97f;
  --leaf-glow: rgba(95, 201, 127, 0.3);

  /* SUN (Titles, Highlights) */
  --sun: #e8c766;
  --sun-glow: rgba(232, 199, 102, 0.25);

  /* TEXT */
  --text-primary: #f2f5f0;
  --text-secondary: rgba(242, 245, 240, 0.72);
  --text-muted: rgba(242, 245, 240, 0.5);

  /* SEMANTIC */
  --error: #e05d5d;
  --success: #5fc97f;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', Helvetica, sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

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
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--canopy-dark);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  color: var(--sun);
  text-shadow: 0 0 24px var(--sun-glow);
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  color: var(--leaf-bright);
  margin-bottom: 1rem;
}

.tagline {
  font-size: var(--text-lg);
  color: var(--text-secondary);
  margin: 1rem 0 2rem;
}

.body-text {
  max-width: 42rem;
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.accent-term {
  color: var(--leaf-bright);
  font-weight: 600;
}

/* === Header & Navigation === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: var(--canopy);
  border-bottom: 1px solid var(--canopy-border);
}

.nav-inner {
  max-width: 64rem;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  color: var(--sun);
  white-space: nowrap;
}

.nav-menu {
  display: flex;
  align-items: center;
  gap: 1.25rem;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  font-size: var(--text-sm);
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--leaf-bright);
}

/* Hamburger toggle, shown on narrow windows */
.hamburger {
  display: none;
  flex-direction: column;
  gap: 4px;
  background: none;
  border: none;
  padding: 0.5rem;
  cursor: pointer;
}

.hamburger-bar {
  width: 22px;
  height: 2px;
  background: var(--text-primary);
  transition: background var(--transition-fast);
}

.hamburger:hover .hamburger-bar {
  background: var(--leaf-bright);
}

@media (max-width: 768px) {
  .hamburger {
    display: flex;
  }

  .nav-menu {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    align-items: stretch;
    gap: 0;
    background: var(--canopy);
    border-bottom: 1px solid var(--canopy-border);
    padding: 0.5rem 0;
  }

  .nav-menu.active {
    display: flex;
  }

  .nav-menu .nav-link {
    padding: 0.75rem 1.5rem;
  }
}

/* === Hero === */
.hero {
  max-width: 64rem;
  margin: 0 auto;
  padding: 6rem 1.5rem 4rem;
  text-align: center;
}

/* === Sections === */
.content-section {
  max-width: 64rem;
  margin: 0 auto;
  padding: 3rem 1.5rem;
  border-top: 1px solid var(--canopy-border);
}

.tip-list {
  list-style: none;
  max-width: 42rem;
}

.tip-item {
  padding: 0.75rem 1rem;
  margin-bottom: 0.5rem;
  border-left: 2px solid var(--leaf);
  background: var(--canopy);
  color: var(--text-secondary);
}

.tip-item strong {
  color: var(--text-primary);
}

/* === Buttons === */
.btn {
  display: inline-block;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  padding: 0.65rem 1.5rem;
  border-radius: 4px;
  border: 1px solid var(--leaf);
  background: transparent;
  color: var(--leaf-bright);
  text-decoration: none;
  cursor: pointer;
  transition: box-shadow var(--transition-fast), opacity var(--transition-fast);
}

.btn:hover {
  box-shadow: 0 0 12px var(--leaf-glow);
}

.btn-primary {
  background: var(--leaf);
  color: var(--canopy-dark);
  font-weight: 600;
}

.btn-hero {
  font-size: var(--text-lg);
  padding: 0.85rem 2.25rem;
}

.btn-ghost {
  border-color: var(--canopy-border);
  color: var(--text-secondary);
}

/* Transient sending presentation */
.btn-busy {
  opacity: 0.7;
}

.icon-btn {
  background: none;
  border: none;
  cursor: pointer;
  color: var(--text-primary);
}

/* === Contact Form === */
.contact-form {
  max-width: 34rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.3rem;
}

.input-label {
  font-size: var(--text-sm);
  color: var(--text-primary);
}

.input-hint {
  color: var(--text-muted);
  font-style: italic;
}

.input-field {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  background: var(--canopy);
  color: var(--text-primary);
  border: 1px solid var(--canopy-border);
  border-radius: 4px;
  padding: 0.55rem 0.75rem;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--leaf);
  box-shadow: 0 0 8px var(--leaf-glow);
}

.input-field::placeholder {
  color: var(--text-muted);
  font-style: italic;
}

.textarea {
  resize: vertical;
}

.error-message {
  min-height: 1.2em;
  font-size: var(--text-sm);
  color: var(--error);
}

.success-message {
  max-width: 34rem;
  padding: 1.5rem;
  border: 1px solid var(--success);
  border-radius: 4px;
  background: var(--canopy);
}

.success-message h3 {
  color: var(--success);
  margin-bottom: 0.5rem;
}

.success-message p {
  color: var(--text-secondary);
}

/* === Footer === */
.site-footer {
  border-top: 1px solid var(--canopy-border);
  padding: 2rem 1.5rem;
  text-align: center;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Screen-reader-only utility === */
.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border: 0;
}
"#;
