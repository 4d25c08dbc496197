// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin panel: seller and plan overview.
//!
//! The admin gate is applied in routes/mod.rs.

use crate::models::{PlanId, PlanTable, Seller};
use crate::services::plan_policy;
use crate::AppState;
use axum::{extract::State, response::Html, routing::get, Router};
use chrono::{DateTime, Utc};
use std::fmt::Write as _;
use std::sync::Arc;

/// Admin routes (require the admin password).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/admin", get(admin_panel))
}

const PANEL_SCRIPT: &str = r#"<script>
  document.addEventListener('click', e => {
    const btn = e.target.closest('button[data-plan]');
    if (!btn) return;
    fetch('/api/create-payment', {
      method: 'POST',
      body: JSON.stringify({ email: btn.dataset.email, plan: btn.dataset.plan }),
      headers: { 'Content-Type': 'application/json' }
    })
      .then(r => r.json())
      .then(d => { if (d.url) window.location.href = d.url; else if (d.error) alert(d.error); });
  });
</script>"#;

/// Render the seller table.
async fn admin_panel(State(state): State<Arc<AppState>>) -> Html<String> {
    let store = state.store.lock().await;
    tracing::info!(sellers = store.sellers().len(), "Rendering admin panel");
    Html(render_panel(store.sellers(), &state.plans, Utc::now()))
}

fn render_panel(sellers: &[Seller], plans: &PlanTable, now: DateTime<Utc>) -> String {
    let mut html = String::from(
        "<html><head><meta charset=\"utf-8\"><title>FitMirror Admin</title></head><body>\
         <h2>Control panel</h2>\
         <table border=\"1\"><tr><th>Email</th><th>Plan</th><th>Items</th>\
         <th>Status</th><th>Actions</th></tr>",
    );

    for seller in sellers {
        let plan_name = seller
            .current_plan
            .map(|p| plans.get(p).name)
            .unwrap_or("Expired");
        let status = match plan_policy::evaluate(Some(seller), plans, now) {
            s if s.active => format!("active ({})", s.plan.unwrap_or(PlanId::Trial)),
            _ => "inactive".to_string(),
        };
        let email = escape_html(&seller.email);

        let _ = write!(
            html,
            "<tr><td>{email}</td><td>{plan_name}</td><td>{items}</td><td>{status}</td><td>",
            items = seller.items_count,
        );
        for plan in PlanId::PAID {
            let _ = write!(
                html,
                "<button data-email=\"{email}\" data-plan=\"{plan}\">{price} \u{20bd}</button> ",
                price = format_price(plans.get(plan).price_rub),
            );
        }
        html.push_str("</td></tr>");
    }

    html.push_str("</table>");
    html.push_str(PANEL_SCRIPT);
    html.push_str("</body></html>");
    html
}

/// "15000" -> "15 000".
fn format_price(rub: u32) -> String {
    let digits = rub.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
