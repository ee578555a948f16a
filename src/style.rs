//! Embedded stylesheet for the panel and its notifications. Injected once as
//! a `<style>` node at startup.

pub(crate) const PANEL_CSS: &str = r#"
#control-panel {
  position: fixed;
  top: 20px;
  left: 20px;
  background: rgba(255, 255, 255, 0.98);
  border-radius: 12px;
  box-shadow: 0 8px 32px rgba(0, 0, 0, 0.15);
  z-index: 10000;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  font-size: 14px;
  min-width: 280px;
  max-width: 320px;
  backdrop-filter: blur(10px);
  border: 1px solid rgba(255, 255, 255, 0.3);
  transition: all 0.3s ease;
}

.panel-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 14px 16px;
  border-bottom: 2px solid #f0f0f0;
  cursor: move;
  user-select: none;
}

.panel-title {
  font-weight: 700;
  color: #333;
  font-size: 15px;
}

.panel-toggle {
  background: none;
  border: none;
  font-size: 18px;
  cursor: pointer;
  padding: 4px 8px;
  border-radius: 6px;
  transition: all 0.2s;
}

.panel-toggle:hover {
  background: rgba(0, 0, 0, 0.08);
  transform: rotate(90deg);
}

.panel-content {
  padding: 16px;
  max-height: 600px;
  overflow-y: auto;
  animation: slideDown 0.3s ease;
}

.panel-content.collapsed {
  display: none;
}

@keyframes slideDown {
  from { opacity: 0; transform: translateY(-10px); }
  to { opacity: 1; transform: translateY(0); }
}

.panel-section {
  margin-bottom: 18px;
  padding-bottom: 16px;
  border-bottom: 1px solid #f0f0f0;
}

.panel-section:last-child {
  border-bottom: none;
  margin-bottom: 0;
  padding-bottom: 0;
}

.section-title {
  margin: 0 0 10px 0;
  font-size: 13px;
  font-weight: 600;
  color: #555;
  text-transform: uppercase;
  letter-spacing: 0.5px;
}

.panel-select {
  width: 100%;
  padding: 8px 12px;
  border: 2px solid #e0e0e0;
  border-radius: 6px;
  font-size: 13px;
  background: white;
  color: #333;
  cursor: pointer;
  transition: all 0.2s;
  font-weight: 500;
}

.panel-select:hover,
.panel-select:focus {
  outline: none;
  border-color: #2563eb;
  box-shadow: 0 0 0 3px rgba(37, 99, 235, 0.1);
}

.theme-buttons {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 8px;
}

.theme-btn {
  padding: 8px 12px;
  border: 2px solid #e0e0e0;
  background: white;
  border-radius: 6px;
  cursor: pointer;
  font-size: 13px;
  font-weight: 600;
  transition: all 0.2s;
  color: #555;
}

.theme-btn:hover {
  border-color: #2563eb;
  background: #f0f7ff;
}

.theme-btn.active {
  background: #2563eb;
  color: white;
  border-color: #2563eb;
  box-shadow: 0 4px 12px rgba(37, 99, 235, 0.3);
}

.opacity-control {
  display: flex;
  align-items: center;
  gap: 12px;
}

.slider {
  flex: 1;
  height: 6px;
  border-radius: 3px;
  background: #e0e0e0;
  outline: none;
  -webkit-appearance: none;
  appearance: none;
}

.slider::-webkit-slider-thumb {
  -webkit-appearance: none;
  appearance: none;
  width: 18px;
  height: 18px;
  border-radius: 50%;
  background: #2563eb;
  cursor: pointer;
  box-shadow: 0 2px 6px rgba(37, 99, 235, 0.4);
}

.slider::-moz-range-thumb {
  width: 18px;
  height: 18px;
  border-radius: 50%;
  background: #2563eb;
  cursor: pointer;
  border: none;
  box-shadow: 0 2px 6px rgba(37, 99, 235, 0.4);
}

.opacity-display {
  min-width: 45px;
  text-align: right;
  font-weight: 600;
  color: #2563eb;
  font-size: 13px;
}

.button-group {
  display: flex;
  flex-direction: column;
  gap: 8px;
}

.panel-btn {
  padding: 10px 12px;
  border: 2px solid #e0e0e0;
  background: white;
  border-radius: 6px;
  cursor: pointer;
  font-size: 13px;
  font-weight: 600;
  color: #333;
  transition: all 0.2s;
}

.panel-btn:hover {
  border-color: #2563eb;
  background: #f0f7ff;
  color: #2563eb;
}

.panel-btn.danger {
  color: #dc2626;
  border-color: #fecaca;
}

.panel-btn.danger:hover {
  background: #fef2f2;
  border-color: #dc2626;
}

.shortcuts {
  background: #f9fafb;
  border-radius: 6px;
  margin: -16px -16px 0 -16px;
  padding: 12px 16px;
}

.shortcut-list {
  display: flex;
  flex-direction: column;
  gap: 8px;
}

.shortcut-item {
  display: flex;
  align-items: center;
  gap: 10px;
  font-size: 12px;
  color: #666;
}

.shortcut-item kbd {
  background: white;
  border: 1px solid #d1d5db;
  border-radius: 4px;
  padding: 3px 8px;
  font-family: 'Monaco', 'Courier New', monospace;
  font-size: 11px;
  font-weight: 600;
  color: #333;
  min-width: 30px;
  text-align: center;
}

body.dark-theme #control-panel {
  background: rgba(30, 41, 59, 0.98);
  border-color: rgba(255, 255, 255, 0.1);
}

body.dark-theme .panel-header {
  border-bottom-color: #334155;
}

body.dark-theme .panel-title {
  color: #e2e8f0;
}

body.dark-theme .panel-section {
  border-bottom-color: #334155;
}

body.dark-theme .section-title {
  color: #cbd5e1;
}

body.dark-theme .panel-select,
body.dark-theme .panel-btn {
  background: #1e293b;
  color: #e2e8f0;
  border-color: #475569;
}

body.dark-theme .panel-select:hover,
body.dark-theme .panel-btn:hover {
  background: #334155;
  border-color: #60a5fa;
}

body.dark-theme .theme-btn {
  background: #1e293b;
  color: #cbd5e1;
  border-color: #475569;
}

body.dark-theme .theme-btn.active {
  background: #3b82f6;
  border-color: #3b82f6;
}

body.dark-theme .shortcuts {
  background: #1e293b;
}

body.dark-theme .shortcut-item {
  color: #94a3b8;
}

body.dark-theme .shortcut-item kbd {
  background: #0f172a;
  border-color: #475569;
  color: #cbd5e1;
}

@keyframes fadeInOut {
  0% { opacity: 0; transform: translate(-50%, -50%) scale(0.9); }
  10% { opacity: 1; transform: translate(-50%, -50%) scale(1); }
  90% { opacity: 1; transform: translate(-50%, -50%) scale(1); }
  100% { opacity: 0; transform: translate(-50%, -50%) scale(0.9); }
}

@media (max-width: 768px) {
  #control-panel {
    top: 10px;
    left: 10px;
    right: 10px;
    max-width: none;
    min-width: auto;
  }
}
"#;

pub(crate) const NOTIFICATION_STYLE: &str = "\
position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); \
background: rgba(0, 0, 0, 0.85); color: white; padding: 14px 28px; \
border-radius: 8px; z-index: 10001; font-size: 14px; font-weight: 500; \
backdrop-filter: blur(10px); box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3); \
animation: fadeInOut 2s ease-in-out;";
