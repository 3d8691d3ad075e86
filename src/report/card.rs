//! Decorative HTML summary card.
//!
//! The card is presentation only: it shows a policy name and a fault count
//! taken from a finished run.

use serde::{Deserialize, Serialize};

use crate::policy::PolicySelector;
use crate::sim::Simulation;

/// Name and fault count shown on the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCard {
    pub name: String,
    pub faults: usize,
}

impl SummaryCard {
    /// Card for `run`.
    pub fn new(run: &Simulation) -> Self {
        Self {
            name: run.policy().name().to_string(),
            faults: run.faults(),
        }
    }

    /// Pick the run to feature: the selected policy, or the first result
    /// when every policy ran.
    ///
    /// Returns None when there are no results.
    pub fn select(selector: PolicySelector, results: &[Simulation]) -> Option<Self> {
        let featured = match selector {
            PolicySelector::One(policy) => results.iter().find(|r| r.policy() == policy),
            PolicySelector::All => results.first(),
        };
        featured.map(Self::new)
    }

    /// Render as a self-contained HTML fragment.
    pub fn to_html(&self) -> String {
        format!(
            concat!(
                r#"<div style="display:flex;justify-content:center;margin-top:18px;">"#,
                r#"<div class="card"><div class="glass">"#,
                r#"<h2 class="title">{name} Algorithm</h2>"#,
                r#"<p class="sub">Page Faults</p>"#,
                r#"<p class="count">{faults}</p>"#,
                "</div></div></div>\n<style>{style}</style>\n"
            ),
            name = escape_html(&self.name),
            faults = self.faults,
            style = CARD_STYLE,
        )
    }
}

const CARD_STYLE: &str = "\
.card{width:320px;height:180px;border-radius:16px;position:relative;overflow:hidden;padding:18px;\
background:linear-gradient(135deg,rgba(255,255,255,0.06),rgba(255,255,255,0.02));\
box-shadow:0 8px 30px rgba(2,6,23,0.6)}\
.card::before,.card::after{content:\"\";position:absolute;width:220px;height:220px;filter:blur(18px);\
background:radial-gradient(circle at 30% 30%,rgba(255,115,135,0.18),transparent 30%),\
radial-gradient(circle at 70% 70%,rgba(120,99,255,0.14),transparent 30%);\
animation:float 6s ease-in-out infinite;opacity:0.9}\
.card::before{top:-40px;left:-60px}\
.card::after{bottom:-40px;right:-60px;animation-delay:3s}\
@keyframes float{0%{transform:translateY(0) rotate(0)}50%{transform:translateY(-12px) rotate(6deg)}\
100%{transform:translateY(0) rotate(0)}}\
.glass{position:relative;z-index:2;color:white;height:100%;display:flex;flex-direction:column;\
justify-content:center;align-items:center;text-align:center;font-family:\"Segoe UI\",Roboto,Arial,sans-serif}\
.title{margin:0;font-size:20px;letter-spacing:0.6px;text-transform:uppercase}\
.sub{margin:6px 0 2px 0;color:#e6e6e6;opacity:0.8}\
.count{margin:4px 0 0 0;font-size:46px;font-weight:700}";

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
