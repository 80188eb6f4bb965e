//! Embedded stylesheet. Kept free of `<`, `>` and `&` so it survives text
//! escaping inside `<style>`.

pub const APP_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; background: #f5f7fb; color: #1f2933; }
.navbar { background: #1e3a8a; color: #fff; }
.nav-container { max-width: 1100px; margin: 0 auto; padding: 14px 20px; display: flex; align-items: center; justify-content: space-between; }
.logo { color: #fff; font-weight: 700; font-size: 20px; text-decoration: none; }
.nav-links a { color: #c7d2fe; margin-left: 18px; text-decoration: none; }
.nav-links a.active { color: #fff; font-weight: 600; border-bottom: 2px solid #fff; }
.container { max-width: 1100px; margin: 24px auto; padding: 0 20px; }
.page-title { font-size: 26px; margin-bottom: 18px; }
.card { background: #fff; border-radius: 10px; padding: 22px; margin-bottom: 22px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08); }
.form-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; }
.form-group { display: flex; flex-direction: column; gap: 6px; margin-bottom: 14px; font-weight: 500; }
.form-group input, .form-group select { padding: 9px 11px; border: 1px solid #cbd5e1; border-radius: 6px; font-size: 15px; }
.form-help { color: #64748b; font-size: 13px; }
.required { color: #dc2626; }
.radio-group { display: flex; gap: 18px; font-weight: 400; }
.btn { display: inline-block; padding: 9px 16px; border-radius: 6px; border: none; cursor: pointer; font-size: 15px; text-decoration: none; }
.btn-primary { background: #2563eb; color: #fff; }
.btn-secondary { background: #e2e8f0; color: #1f2933; }
.btn-danger { background: #dc2626; color: #fff; }
.btn-sm { padding: 5px 10px; font-size: 13px; }
.btn[disabled] { opacity: 0.6; cursor: not-allowed; }
.alert { padding: 11px 14px; border-radius: 6px; margin-bottom: 14px; white-space: pre-line; }
.alert-error { background: #fee2e2; color: #991b1b; }
.alert-success { background: #dcfce7; color: #166534; }
.alert-info { background: #e0e7ff; color: #3730a3; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 10px; border-bottom: 1px solid #e2e8f0; }
.badge { background: #e0e7ff; color: #3730a3; padding: 2px 8px; border-radius: 10px; font-size: 13px; }
.status-badge { padding: 2px 10px; border-radius: 10px; font-size: 13px; }
.status-present { background: #dcfce7; color: #166534; }
.status-absent { background: #fee2e2; color: #991b1b; }
.empty-state, .loading { text-align: center; color: #64748b; padding: 26px 0; }
.employee-info { margin-bottom: 12px; }
.text-muted { color: #64748b; }
.text-success { color: #166534; }
.text-danger { color: #991b1b; }
.attendance-summary { margin-top: 12px; }
.hero { text-align: center; padding: 30px 0; }
.hero-subtitle { color: #475569; font-size: 17px; }
.features-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 20px; margin-top: 26px; }
.feature-card { background: #fff; border-radius: 10px; padding: 24px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08); }
.feature-icon { font-size: 34px; }
.stats { display: flex; justify-content: center; gap: 28px; margin-top: 22px; color: #334155; }
.footer { text-align: center; color: #94a3b8; padding: 20px 0 30px; font-size: 13px; }
"#;
