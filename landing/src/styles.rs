//! Site stylesheet.
//!
//! Colors come from `Theme::HEPLINK` as CSS custom properties; everything
//! below only refers to `var(--…)`.

use heplink_core::Theme;

/// Layout, components and motion. Expects the theme's `:root` block first.
pub const SITE_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }

html, body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: Inter, system-ui, -apple-system, "Segoe UI", Helvetica, Arial, sans-serif;
    -webkit-font-smoothing: antialiased;
}

a { color: inherit; text-decoration: none; }

.app { min-height: 100vh; position: relative; }

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 16px;
}
@media (min-width: 640px) { .container { padding: 0 24px; } }
@media (min-width: 1024px) { .container { padding: 0 32px; } }

.section { padding-top: 80px; padding-bottom: 80px; }
.section-tight { padding-top: 64px; padding-bottom: 64px; }
.border-top { border-top: 1px solid var(--border); }
.border-y { border-top: 1px solid var(--border); border-bottom: 1px solid var(--border); }

.heading {
    margin: 0;
    font-size: 30px;
    font-weight: 700;
    letter-spacing: -0.02em;
    color: var(--text);
}
@media (min-width: 640px) { .heading { font-size: 36px; } }

.lead { margin-top: 12px; color: var(--sub); }
.eyebrow {
    font-size: 11px;
    text-transform: uppercase;
    letter-spacing: 0.16em;
    color: #a1a1aa;
}
.muted { color: #a1a1aa; }
.dim { color: #71717a; }

.card {
    position: relative;
    border: 1px solid var(--border);
    background: var(--card);
    border-radius: 16px;
    transition: border-color .2s ease, transform .25s ease;
}
.card::after {
    content: "";
    position: absolute;
    inset: 0;
    border-radius: 16px;
    pointer-events: none;
    box-shadow: 0 0 0 1px transparent;
    transition: box-shadow .2s ease;
}
.card:hover { border-color: rgba(255, 0, 0, .6); }
.card:hover::after { box-shadow: 0 0 0 1px rgba(255, 0, 0, .3); }
.card-lift:hover { transform: translateY(-4px) rotateX(.6deg) rotateY(.6deg); }
.card-tilt { transform-style: preserve-3d; overflow: hidden; }
.card-tilt:hover { transform: translateY(-6px) rotateX(1.2deg) rotateY(-1.2deg); }

.grid { display: grid; gap: 24px; }
@media (min-width: 640px) { .grid-sm-2 { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 768px) { .grid-md-2 { grid-template-columns: repeat(2, 1fr); } .grid-md-3 { grid-template-columns: repeat(3, 1fr); } }
@media (min-width: 1024px) { .grid-lg-2 { grid-template-columns: repeat(2, 1fr); } .grid-lg-4 { grid-template-columns: repeat(4, 1fr); } }
.items-center { align-items: center; }

/* ---- Motion ---- */
@keyframes fade-up {
    from { opacity: 0; transform: translateY(12px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes page-in {
    from { opacity: 0; transform: translateY(8px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes sheet-in {
    from { opacity: 0; transform: translateY(-16px); }
    to { opacity: 1; transform: translateY(0); }
}
.fade-in { animation: fade-up .6s ease both; }
.tab-in { animation: fade-up .35s ease both; }
.page-transition { animation: page-in .45s ease both; }
.magnetic { display: inline-block; will-change: transform; }
.magnetic-link { display: inline-block; }

/* ---- Buttons ---- */
.btn {
    height: 40px;
    padding: 0 20px;
    border-radius: 12px;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    line-height: 1;
    font: inherit;
    font-size: 15px;
    cursor: pointer;
    border: 1px solid transparent;
    transition: transform .2s cubic-bezier(.34, 1.56, .64, 1), background-color .2s ease, box-shadow .2s ease;
}
.btn:hover { transform: translateY(-2px) scale(1.02); }
.btn-accent {
    background: var(--accent);
    color: #fff;
    box-shadow: 0 10px 26px -12px rgba(255, 0, 0, .8);
}
.btn-light { background: #fff; color: #000; border-color: #e4e4e7; }
.btn-light:hover { background: #f4f4f5; }
.btn-outline { background: transparent; color: #fff; border-color: #3f3f46; }
.btn-outline:hover { background: #18181b; box-shadow: 0 8px 24px -12px rgba(255, 0, 0, .45); }
.ghost-link { display: inline-flex; align-items: center; height: 32px; color: var(--accent); }

/* ---- Cursor ---- */
.cursor-dot {
    position: fixed;
    top: 0;
    left: 0;
    width: 10px;
    height: 10px;
    border-radius: 50%;
    background: #fff;
    pointer-events: none;
    z-index: 100;
    mix-blend-mode: difference;
    transition: width .15s ease, height .15s ease;
}
.cursor-dot.pointer { width: 18px; height: 18px; margin: -4px 0 0 -4px; }
@media (hover: none) { .cursor-dot { display: none; } }

/* ---- Navbar ---- */
.navbar {
    position: sticky;
    top: 0;
    z-index: 40;
    background: rgba(0, 0, 0, .8);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid var(--border);
}
@supports (backdrop-filter: blur(8px)) { .navbar { background: rgba(0, 0, 0, .6); } }
.navbar-inner {
    padding-top: 16px;
    padding-bottom: 16px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.logo { display: flex; align-items: center; gap: 8px; }
.logo img { height: 28px; width: auto; }
.logo-text { color: #fff; font-weight: 700; line-height: 1; }
.nav-links { display: none; align-items: center; gap: 28px; font-size: 15px; }
.nav-link { color: var(--sub); transition: color .15s ease; }
.nav-link:hover { color: #fff; }
.nav-cta { display: none; }
.hamburger {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 40px;
    height: 40px;
    border-radius: 8px;
    border: 1px solid #3f3f46;
    background: transparent;
    color: #fff;
    cursor: pointer;
}
@media (min-width: 768px) {
    .nav-links { display: flex; }
    .nav-cta { display: block; }
    .hamburger { display: none; }
}
.sheet-backdrop {
    position: fixed;
    inset: 0;
    z-index: 50;
    background: rgba(0, 0, 0, .7);
    animation: page-in .25s ease both;
}
.sheet {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    padding: 16px;
    background: #000;
    border-bottom: 1px solid var(--border);
    animation: sheet-in .25s ease both;
}
.sheet-links { display: flex; flex-direction: column; gap: 16px; font-size: 18px; }

/* ---- Hero ---- */
.hero {
    position: relative;
    overflow: hidden;
    border-bottom: 1px solid var(--border);
    background-size: cover;
    background-position: center;
}
.hero-shade { position: absolute; inset: 0; background: rgba(0, 0, 0, .55); }
.hero-body { position: relative; z-index: 10; padding-top: 96px; padding-bottom: 96px; }
@media (min-width: 640px) { .hero-body { padding-top: 128px; padding-bottom: 128px; } }
.hero-copy { max-width: 820px; }
.hero-kicker {
    margin: 0;
    font-size: 12px;
    font-weight: 500;
    text-transform: uppercase;
    letter-spacing: .18em;
    color: var(--sub);
}
.hero-title {
    margin: 16px 0 0;
    font-size: 36px;
    line-height: 1.05;
    font-weight: 700;
    letter-spacing: -0.02em;
}
@media (min-width: 640px) { .hero-title { font-size: 54px; } }
.hero-accent {
    background-image: linear-gradient(90deg, #fff, var(--accent-light));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.hero-sub { margin-top: 20px; font-size: 18px; line-height: 28px; color: #e4e4e7; max-width: 672px; }
.actions { margin-top: 32px; display: flex; align-items: center; gap: 12px; flex-wrap: wrap; }

/* ---- Services ---- */
.service { padding: 24px; height: 100%; }
.service-title { display: flex; align-items: center; gap: 8px; font-size: 15px; font-weight: 600; }
.service-icon { width: 20px; height: 20px; color: var(--sub); }
.service-desc { margin-top: 8px; font-size: 14px; color: #a1a1aa; }

/* ---- Approach ---- */
.approach-head { display: flex; align-items: center; justify-content: space-between; gap: 16px; }
.tabs { display: flex; gap: 8px; overflow-x: auto; padding: 4px; margin: 0 -4px; }
.tab {
    flex-shrink: 0;
    white-space: nowrap;
    padding: 0 12px;
    height: 36px;
    border-radius: 8px;
    border: 1px solid #3f3f46;
    background: #18181b;
    color: var(--sub);
    font: inherit;
    font-size: 12px;
    cursor: pointer;
}
@media (min-width: 640px) { .tab { font-size: 14px; } }
.tab.active { border-color: #ef4444; color: #fff; }
.tab-panel { margin-top: 24px; padding: 24px; }
.tab-title { font-size: 14px; text-transform: uppercase; letter-spacing: .16em; color: #a1a1aa; }
.tab-body { margin-top: 8px; font-size: 18px; line-height: 28px; color: #e4e4e7; }

/* ---- Work & insights ---- */
.section-head { display: flex; align-items: flex-end; justify-content: space-between; gap: 24px; }
.hide-mobile { display: none; }
@media (min-width: 640px) { .hide-mobile { display: inline-block; } }
.media { position: relative; background: #18181b; }
.media-tall { height: 224px; }
.media-short { height: 176px; }
.media img { width: 100%; height: 100%; object-fit: cover; display: block; }
.card-body { padding: 20px; }
.card-title { margin-top: 4px; font-size: 20px; line-height: 1.35; font-weight: 600; color: #fff; }
.card-text { margin-top: 8px; font-size: 14px; color: var(--sub); }

/* ---- Community ---- */
.pulse-form { margin-top: 24px; display: flex; gap: 12px; }
.input {
    width: 100%;
    border: 1px solid #3f3f46;
    border-radius: 12px;
    padding: 8px 12px;
    background: #18181b;
    color: #fff;
    font: inherit;
    outline: none;
}
.input::placeholder { color: #71717a; }
.input:focus { box-shadow: 0 0 0 2px rgba(255, 102, 102, .6); }
.pulse-form .input { max-width: 384px; }
.pulse-card { padding: 24px; }
.pulse-list { margin-top: 16px; padding-left: 20px; font-size: 14px; color: var(--sub); }
.pulse-list li + li { margin-top: 12px; }

/* ---- Careers & contact ---- */
.stats { display: grid; gap: 24px; text-align: center; }
@media (min-width: 640px) { .stats { grid-template-columns: repeat(3, 1fr); } }
.stat-value { font-size: 30px; font-weight: 700; color: #fff; }
.stat-label { font-size: 14px; color: #a1a1aa; }
.contact-form { display: flex; flex-direction: column; gap: 16px; }
.contact-form .btn { align-self: flex-start; }
.mailbox-label { font-size: 14px; color: #a1a1aa; }
.mailbox-address { font-weight: 500; color: #fff; }

/* ---- Footer ---- */
.footer { border-top: 1px solid var(--border); }
.footer-grid { padding-top: 40px; padding-bottom: 40px; font-size: 14px; }
.footer-grid ul { list-style: none; margin: 12px 0 0; padding: 0; }
.footer-grid li + li { margin-top: 8px; }
.footer-grid a:hover { text-decoration: underline; }
.footer-legal { padding-bottom: 32px; text-align: center; font-size: 12px; color: #71717a; }
"#;

/// Theme variables followed by [`SITE_CSS`].
pub fn site_css() -> String {
    format!("{}{}", Theme::HEPLINK.css_variables(), SITE_CSS)
}
