//! Static markup and styles for the card.

pub const HEART_SVG: &str = r#"<svg viewBox="0 0 24 24" fill="currentColor"><path d="M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z"/></svg>"#;

pub const CHECK_SVG: &str = r#"<svg class="calendar-icon" viewBox="0 0 24 24" fill="currentColor"><path d="M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z"/></svg>"#;

pub const CALENDAR_SVG: &str = r#"<svg class="calendar-icon" viewBox="0 0 24 24" fill="currentColor"><path d="M19 3h-1V1h-2v2H8V1H6v2H5c-1.11 0-1.99.9-1.99 2L3 19c0 1.1.89 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zm0 16H5V8h14v11zM9 10H7v2h2v-2zm4 0h-2v2h2v-2zm4 0h-2v2h2v-2zm-8 4H7v2h2v-2zm4 0h-2v2h2v-2zm4 0h-2v2h2v-2z"/></svg>"#;

pub const STYLE: &str = r#"
.app { position:fixed; inset:0; overflow:hidden; font-family:'Nunito','Segoe UI',sans-serif; background:linear-gradient(160deg,#ffe4ee 0%,#ffc8dd 55%,#f7a1c0 100%); color:#7a1f44; }
.page-container { position:relative; width:100%; height:100%; display:flex; align-items:center; justify-content:center; }
.no-button-boundary { position:absolute; left:50%; top:50%; width:min(100%,420px); height:min(100%,760px); transform:translate(-50%,-50%); pointer-events:none; }
.hearts-background { position:absolute; inset:0; pointer-events:none; overflow:hidden; }
.floating-heart { position:absolute; bottom:-60px; color:rgba(255,107,157,0.35); animation:vc-float 12s linear infinite; }
@keyframes vc-float { from { transform:translateY(0) rotate(0deg); } to { transform:translateY(-120vh) rotate(30deg); } }
.content-wrapper, .success-content { position:relative; z-index:2; display:flex; flex-direction:column; align-items:center; gap:20px; text-align:center; padding:24px; }
.heart-icon svg { width:72px; height:72px; color:#ff6b9d; }
.question-title, .success-title { font-size:clamp(28px,6vw,48px); margin:0; }
.intro { animation:vc-pop 0.8s cubic-bezier(0.34,1.56,0.64,1) both; }
.intro-late { animation:vc-rise 0.6s ease-out 0.3s both; }
@keyframes vc-pop { from { transform:scale(0.5); opacity:0; } to { transform:scale(1); opacity:1; } }
@keyframes vc-rise { from { transform:translateY(50px); opacity:0; } to { transform:translateY(0); opacity:1; } }
.buttons-container { display:flex; gap:24px; align-items:center; justify-content:center; min-height:56px; }
.btn { border:none; border-radius:999px; padding:14px 28px; font-size:18px; font-weight:700; cursor:pointer; display:inline-flex; align-items:center; gap:8px; }
.btn-yes { background:#ff6b9d; color:#fff; transition:transform 0.15s ease; }
.btn-yes.pressed { transform:scale(1.2); }
.btn-yes .btn-icon svg { width:18px; height:18px; }
.btn-no { background:#fff; color:#7a1f44; }
.btn-no-teleport { position:absolute; z-index:5; }
.no-button-spacer { width:96px; height:48px; }
.confetti-canvas { position:fixed; inset:0; pointer-events:none; z-index:1; }
.celebration-gif { width:180px; border-radius:16px; }
.heart-divider svg { width:20px; height:20px; margin:0 4px; color:#ff6b9d; }
.calendar-btn { border:none; border-radius:12px; padding:12px 20px; font-size:16px; background:#fff; color:#7a1f44; cursor:pointer; display:inline-flex; align-items:center; gap:8px; }
.calendar-btn.added { background:#7bd389; color:#fff; cursor:default; }
.calendar-icon { width:20px; height:20px; }
"#;
