//! Global stylesheet for the landing page.

pub const LANDING_CSS: &str = r#"
:root {
	--bg: #0a0b1e;
	--turquoise-400: #40e0d0;
	--turquoise-500: #2dd4bf;
	--blue-500: #3b82f6;
	--purple-500: #a855f7;
	--muted: #9ca3af;
}

* { box-sizing: border-box; }

body {
	margin: 0;
	background: var(--bg);
	color: #fff;
	font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
}

.landing { position: relative; min-height: 100vh; overflow: hidden; }
.container { position: relative; z-index: 10; max-width: 80rem; margin: 0 auto; padding: 0 2rem; }
.container.narrow { max-width: 56rem; text-align: center; }

.gradient-text {
	background: linear-gradient(to right, var(--turquoise-400), var(--blue-500), var(--purple-500));
	-webkit-background-clip: text;
	background-clip: text;
	color: transparent;
}
.accent { color: var(--turquoise-400); }
.block { display: block; }
.muted { color: var(--muted); }
.lead { font-size: 1.25rem; color: var(--muted); max-width: 42rem; margin: 0 auto 3rem; }

.btn {
	border: 0; color: #fff; cursor: pointer; font: inherit;
	transition: opacity 0.3s, background 0.3s, transform 0.3s;
}
.btn-gradient {
	background: linear-gradient(to right, var(--turquoise-500), var(--blue-500));
	padding: 1rem 2rem; border-radius: 0.75rem;
}
.btn-gradient:hover { opacity: 0.9; }
.btn-pill { padding: 0.5rem 1.5rem; border-radius: 9999px; }
.btn-muted { background: rgba(255, 255, 255, 0.1); padding: 1rem 2rem; border-radius: 0.75rem; }
.btn-muted:hover { background: rgba(255, 255, 255, 0.2); }
.btn-icon { display: inline-flex; align-items: center; gap: 0.5rem; }
.btn-large { padding: 1.5rem 3rem; font-size: 1.25rem; font-weight: 600; }
.btn-large:hover { transform: scale(1.05); }

.nav {
	position: fixed; width: 100%; z-index: 50;
	background: rgba(10, 11, 30, 0.8);
	backdrop-filter: blur(24px);
	border-bottom: 1px solid rgba(45, 212, 191, 0.2);
}
.nav-inner { display: flex; align-items: center; justify-content: space-between; height: 5rem; }
.brand { display: flex; align-items: center; gap: 0.75rem; }
.brand .icon { font-size: 2rem; color: var(--turquoise-400); }
.brand-name { font-size: 1.5rem; font-weight: 700; }

.hero { position: relative; padding: 10rem 0 5rem; }
.hero-copy { text-align: center; max-width: 56rem; margin: 0 auto; }
.hero h1 { font-size: 4.5rem; font-weight: 700; margin: 0 0 2rem; line-height: 1.1; }
.hero-actions { display: flex; flex-wrap: wrap; justify-content: center; gap: 1.5rem; }
.floating { position: absolute; font-size: 3.5rem; }
.float-a { top: 25%; left: 25%; color: rgba(45, 212, 191, 0.3); }
.float-b { top: 33%; right: 25%; color: rgba(59, 130, 246, 0.3); }
.float-c { bottom: 25%; left: 33%; color: rgba(168, 85, 247, 0.3); }

.section-wash {
	position: absolute; inset: 0;
	background: linear-gradient(to bottom, rgba(19, 78, 74, 0.2), transparent);
}
.features, .preview, .cta { position: relative; padding: 5rem 0; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 2rem; }
.card {
	padding: 1.5rem; border-radius: 1rem;
	background: rgba(255, 255, 255, 0.05);
	backdrop-filter: blur(24px);
	border: 1px solid rgba(45, 212, 191, 0.2);
	transition: border-color 0.3s;
}
.card:hover { border-color: rgba(45, 212, 191, 0.4); }
.card h3 { font-size: 1.25rem; font-weight: 600; margin: 0 0 0.5rem; }
.card-icon {
	display: inline-block; padding: 0.75rem; margin-bottom: 1rem; border-radius: 0.75rem;
	background: linear-gradient(to right, rgba(45, 212, 191, 0.2), rgba(59, 130, 246, 0.2));
	color: var(--turquoise-400); font-size: 2.5rem; line-height: 1;
}

.preview-panel {
	position: relative; overflow: hidden;
	display: flex; flex-wrap: wrap; gap: 3rem; align-items: center;
	padding: 2rem; border-radius: 1.5rem;
	background:
		radial-gradient(circle at 30% 30%, rgba(64, 224, 208, 0.1), transparent),
		linear-gradient(to right, #111827, #1f2937);
}
.preview-column { flex: 1 1 20rem; }
.preview h2 { font-size: 2.25rem; font-weight: 700; }
.points { list-style: none; padding: 0; margin: 0; color: #d1d5db; }
.points li { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; }
.dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: var(--turquoise-400); }
.terminal {
	background: #1f2937; border-radius: 0.75rem; padding: 1.5rem;
	border: 1px solid rgba(45, 212, 191, 0.2);
}
.terminal-lights { display: flex; gap: 0.5rem; margin-bottom: 1rem; }
.light { width: 0.75rem; height: 0.75rem; border-radius: 9999px; }
.light.red { background: #ef4444; }
.light.yellow { background: #eab308; }
.light.green { background: #22c55e; }
.terminal pre { margin: 0; font-size: 0.875rem; color: #d1d5db; }

.cta h2 { font-size: 3rem; font-weight: 700; margin-bottom: 2rem; }

@keyframes float {
	0%, 100% { transform: translateY(0px); }
	50% { transform: translateY(-20px); }
}
.animate-float { animation: float 6s ease-in-out infinite; }
.animate-float-delay { animation: float 6s ease-in-out infinite; animation-delay: 2s; }
"#;
