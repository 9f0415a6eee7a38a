//! Global CSS styles for Seed Bloom.
//!
//! Dawn entry card, moonlit garden. Keyframes for every looping or one-shot
//! animation the garden toggles by class live here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* DAWN (Entry) */
  --dawn-top: #f7efe3;
  --dawn-bottom: #e6d5c0;

  /* NIGHT (Garden) */
  --night-top: #041a10;
  --night-bottom: #062617;

  /* LEAF GREEN (Growth) */
  --leaf: #5fbf82;
  --leaf-deep: #2f7a4c;

  /* PETAL */
  --petal: #fdf6f0;
  --petal-edge: #f2d7e0;

  /* GOLD (Seed, Centre) */
  --gold: #d4a574;
  --gold-glow: rgba(212, 165, 116, 0.45);

  /* TEXT */
  --text-ink: #3b2f2a;
  --text-moon: #f5f1ea;
  --text-muted: rgba(245, 241, 234, 0.65);

  /* Typography */
  --font-title: 'Cormorant Garamond', Georgia, serif;
  --font-body: 'Lora', 'Crimson Text', Georgia, serif;

  /* Transitions */
  --transition-fast: 300ms ease;
  --transition-card: 400ms ease;
  --transition-slow: 800ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: var(--font-body);
  color: var(--text-ink);
  -webkit-font-smoothing: antialiased;
}

/* === Backdrop === */
.backdrop {
  position: fixed;
  inset: 0;
  z-index: -1;
  transition: background var(--transition-slow);
}

.backdrop.dawn {
  background: linear-gradient(135deg, var(--dawn-top) 0%, var(--dawn-bottom) 100%);
}

.backdrop.night {
  background: linear-gradient(135deg, var(--night-top) 0%, var(--night-bottom) 100%);
}

/* === Loading Screen === */
.loading-screen {
  position: fixed;
  inset: 0;
  z-index: 2000;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  background: var(--dawn-top);
  transition: opacity 600ms ease, visibility 600ms ease;
}

.loading-screen.hidden {
  opacity: 0;
  visibility: hidden;
}

.loading-seed {
  width: 18px;
  height: 26px;
  border-radius: 50% 50% 50% 50% / 60% 60% 40% 40%;
  background: var(--gold);
  animation: seedBob 1.2s ease-in-out infinite;
}

.loading-text {
  font-style: italic;
  color: var(--text-ink);
  opacity: 0.7;
}

/* === Entry Card === */
.entry-card {
  position: absolute;
  top: 50%;
  left: 50%;
  width: min(90vw, 420px);
  transform: translate(-50%, -50%);
  padding: 2.5rem 2rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.25rem;
  text-align: center;
  background: rgba(255, 255, 255, 0.55);
  border-radius: 24px;
  box-shadow: 0 12px 40px rgba(59, 47, 42, 0.12);
  transition: opacity var(--transition-card), transform var(--transition-card);
}

.entry-card.receding {
  opacity: 0;
  transform: translate(-50%, calc(-50% - 30px)) scale(0.9);
}

.entry-card.hidden {
  display: none;
}

.card-title {
  font-family: var(--font-title);
  font-size: 2.4rem;
  font-weight: 400;
  letter-spacing: 0.04em;
}

.card-subtitle {
  font-style: italic;
  opacity: 0.75;
}

.name-input {
  width: 100%;
  padding: 0.8rem 1rem;
  font-family: var(--font-body);
  font-size: 1.1rem;
  text-align: center;
  color: var(--text-ink);
  background: rgba(255, 255, 255, 0.8);
  border: 1px solid rgba(59, 47, 42, 0.15);
  border-radius: 12px;
  outline: none;
  transition: border-color var(--transition-fast);
}

.name-input:focus {
  border-color: var(--gold);
}

.name-input.shake-a {
  animation: shakeA 0.5s;
  border-color: #c96a6a;
}

.name-input.shake-b {
  animation: shakeB 0.5s;
  border-color: #c96a6a;
}

.btn-plant {
  padding: 0.75rem 2rem;
  font-family: var(--font-body);
  font-size: 1rem;
  color: var(--text-moon);
  background: var(--leaf-deep);
  border: none;
  border-radius: 999px;
  cursor: pointer;
  transition: transform var(--transition-fast), background var(--transition-fast);
}

.btn-plant:hover {
  background: var(--leaf);
  transform: translateY(-1px);
}

/* === Garden === */
.garden {
  position: relative;
  height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  color: var(--text-moon);
  opacity: 1;
  transition: opacity var(--transition-slow);
}

.garden.hidden {
  visibility: hidden;
  opacity: 0;
}

.prompt {
  font-style: italic;
  color: var(--text-muted);
  transition: opacity var(--transition-fast), transform var(--transition-fast);
}

.prompt.fading {
  opacity: 0;
  transform: translateY(-20px);
}

/* === Flower === */
.flower {
  position: relative;
  width: 220px;
  height: 220px;
}

.petal {
  position: absolute;
  top: 50%;
  left: 50%;
  width: 70px;
  height: 100px;
  margin: -100px 0 0 -35px;
  transform-origin: 50% 100%;
  transform: rotate(var(--rotation));
  background: radial-gradient(ellipse at 50% 30%, var(--petal) 0%, var(--petal-edge) 100%);
  border-radius: 50% 50% 50% 50% / 60% 60% 40% 40%;
  cursor: pointer;
  outline: none;
  transition: filter var(--transition-fast);
}

.petal:hover,
.petal:focus-visible {
  filter: brightness(1.08) drop-shadow(0 0 10px rgba(255, 255, 255, 0.6));
}

.center {
  position: absolute;
  top: 50%;
  left: 50%;
  width: 56px;
  height: 56px;
  transform: translate(-50%, -50%);
  border-radius: 50%;
  background: radial-gradient(circle, #f3c98b 0%, var(--gold) 100%);
  box-shadow: 0 0 24px var(--gold-glow);
  cursor: pointer;
}

.center.pulse-a {
  animation: pulseA 0.6s ease;
}

.center.pulse-b {
  animation: pulseB 0.6s ease;
}

/* === Seed & Stem === */
.seed-container {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.seed {
  position: relative;
  min-width: 40px;
  padding: 0.4rem 0.9rem;
  border-radius: 999px;
  background: var(--gold);
  color: var(--text-ink);
  font-family: var(--font-title);
  transition: transform 1.5s ease, opacity 1.5s ease;
}

.seed.planting {
  transform: translateY(24px) scale(0.85);
  opacity: 0.85;
}

.seed-name {
  white-space: nowrap;
}

.stem-container {
  position: relative;
  width: 6px;
  height: 0;
  transition: height 2s ease-out;
}

.stem-container.growing {
  height: 90px;
}

.stem {
  position: absolute;
  bottom: 0;
  width: 100%;
  height: 0;
  border-radius: 3px;
  background: linear-gradient(to top, var(--leaf-deep), var(--leaf));
  transition: height 2s ease-out;
}

.stem.grow {
  height: 100%;
}

.leaf {
  position: absolute;
  top: 40%;
  width: 26px;
  height: 12px;
  border-radius: 0 100% 0 100%;
  background: var(--leaf);
  opacity: 0;
  transform: rotate(var(--rotation));
  transition: opacity 1s ease 1.2s;
  animation: leafSway 4s ease-in-out infinite;
}

.leaf.left {
  right: 4px;
}

.leaf.right {
  left: 4px;
}

.stem-container.growing .leaf {
  opacity: 1;
}

/* === Message === */
.message {
  max-width: min(90vw, 560px);
  min-height: 5rem;
  padding: 0 1rem;
  font-size: 1.15rem;
  line-height: 1.7;
  text-align: center;
  color: var(--text-moon);
  opacity: 0;
  transform: translateY(10px);
  transition: opacity 500ms ease, transform 500ms ease, text-shadow 600ms ease;
}

.message.show {
  opacity: 1;
  transform: translateY(0);
}

/* === Particles === */
.particles {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

.particle {
  position: absolute;
  bottom: -10px;
  width: 4px;
  height: 4px;
  border-radius: 50%;
  background: rgba(255, 244, 214, 0.8);
  box-shadow: 0 0 6px rgba(255, 244, 214, 0.6);
  animation-name: drift;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

/* === Sparkles === */
.sparkles {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 1000;
}

.sparkle {
  position: fixed;
  width: 4px;
  height: 4px;
  border-radius: 50%;
  pointer-events: none;
}

/* === Keyframes === */
@keyframes shakeA {
  0%, 100% { transform: translateX(0); }
  25% { transform: translateX(-10px); }
  75% { transform: translateX(10px); }
}

@keyframes shakeB {
  0%, 100% { transform: translateX(0); }
  25% { transform: translateX(-10px); }
  75% { transform: translateX(10px); }
}

@keyframes pulseA {
  0%, 100% { transform: translate(-50%, -50%) scale(1); }
  50% { transform: translate(-50%, -50%) scale(1.15); }
}

@keyframes pulseB {
  0%, 100% { transform: translate(-50%, -50%) scale(1); }
  50% { transform: translate(-50%, -50%) scale(1.15); }
}

@keyframes leafSway {
  0%, 100% { transform: rotate(var(--rotation)) translateY(0); }
  50% { transform: rotate(var(--rotation)) translateY(-3px); }
}

@keyframes drift {
  0% { transform: translateY(0); opacity: 0; }
  10% { opacity: 1; }
  90% { opacity: 1; }
  100% { transform: translateY(-105vh); opacity: 0; }
}

@keyframes seedBob {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-6px); }
}

/* === Reduced Motion === */
@media (prefers-reduced-motion: reduce) {
  .particle,
  .leaf,
  .loading-seed {
    animation: none;
  }
}
"#;
