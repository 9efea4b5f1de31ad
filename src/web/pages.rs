//! Server-rendered HTML pages.

use crate::scoring::RiskVerdict;

/// Result panel shown under the analysis form after a submission.
#[derive(Debug, Clone)]
pub struct ResultView<'a> {
    pub patient_name: Option<&'a str>,
    pub verdict: &'a RiskVerdict,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Nav {
    Dashboard,
    Analysis,
    Education,
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
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

fn layout(active: Nav, title: &str, body: &str) -> String {
    let link = |nav: Nav, href: &str, label: &str| {
        let class = if nav == active { "nav-link active" } else { "nav-link" };
        format!(r#"<a class="{class}" href="{href}">{label}</a>"#)
    };
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | StrokeRisk</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
</head>
<body>
<nav class="navbar navbar-expand bg-body-tertiary mb-4"><div class="container">
<span class="navbar-brand">StrokeRisk</span>
<div class="navbar-nav">{dashboard}{analysis}{education}</div>
</div></nav>
<main class="container">
{body}
</main>
</body>
</html>
"#,
        title = escape_html(title),
        dashboard = link(Nav::Dashboard, "/", "Dashboard"),
        analysis = link(Nav::Analysis, "/analysis", "Analysis"),
        education = link(Nav::Education, "/education", "Education"),
    )
}

/// Landing page explaining the project and stroke.
pub fn dashboard() -> String {
    layout(
        Nav::Dashboard,
        "Dashboard",
        r#"<h1>Stroke risk screening</h1>
<p class="lead">A stroke happens when blood supply to part of the brain is interrupted or
reduced. Early recognition of risk factors such as hypertension, heart disease, high blood
glucose and smoking helps prevent it.</p>
<p>This tool combines a machine learning model trained on clinical records with known
risk factors to give a quick indication. It is not a diagnosis.</p>
<a class="btn btn-primary" href="/analysis">Start an analysis</a>"#,
    )
}

/// Education page on recognizing and preventing stroke.
pub fn education() -> String {
    layout(
        Nav::Education,
        "Education",
        r#"<h1>Recognize a stroke: BE FAST</h1>
<ul>
<li><strong>Face</strong> drooping on one side</li>
<li><strong>Arm</strong> weakness or numbness</li>
<li><strong>Speech</strong> slurred or strange</li>
<li><strong>Time</strong> to call emergency services immediately</li>
</ul>
<h2>Prevention</h2>
<ul>
<li>Keep blood pressure and blood glucose under control</li>
<li>Stop smoking</li>
<li>Exercise regularly and keep a healthy weight</li>
<li>Have regular check-ups if you have heart disease</li>
</ul>"#,
    )
}

/// Analysis form, optionally followed by the result of a submission.
pub fn analysis(result: Option<&ResultView<'_>>) -> String {
    let mut body = String::from(ANALYSIS_FORM);
    if let Some(result) = result {
        let verdict = result.verdict;
        let heading = match result.patient_name {
            Some(name) => format!("Result for {}", escape_html(name)),
            None => "Result".to_string(),
        };
        body.push_str(&format!(
            r#"
<div class="alert alert-{style} mt-4" role="alert" data-label="{label}">
<h4 class="alert-heading">{icon} {heading}: {label}</h4>
<p class="display-6" data-score>{score}</p>
<p class="mb-0">{message}</p>
</div>"#,
            style = verdict.style.as_str(),
            label = verdict.label.as_str(),
            icon = verdict.icon,
            score = verdict.percent_display(),
            message = escape_html(&verdict.message),
        ));
    }
    layout(Nav::Analysis, "Analysis", &body)
}

const ANALYSIS_FORM: &str = r#"<h1>Risk analysis</h1>
<form method="post" action="/predict" class="row g-3">
<div class="col-md-6"><label class="form-label" for="name">Patient name</label>
<input class="form-control" id="name" name="name"></div>
<div class="col-md-6"><label class="form-label" for="age">Age</label>
<input class="form-control" id="age" name="age" type="number" step="any" min="0" required></div>
<div class="col-md-6"><label class="form-label" for="glucose_level">Average glucose level (mg/dL)</label>
<input class="form-control" id="glucose_level" name="glucose_level" type="number" step="any" min="0" required></div>
<div class="col-md-6"><label class="form-label" for="bmi">BMI</label>
<input class="form-control" id="bmi" name="bmi" type="number" step="any" min="0" required></div>
<div class="col-md-6"><label class="form-label" for="hypertension">Hypertension</label>
<select class="form-select" id="hypertension" name="hypertension"><option value="0">No</option><option value="1">Yes</option></select></div>
<div class="col-md-6"><label class="form-label" for="heart_disease">Heart disease</label>
<select class="form-select" id="heart_disease" name="heart_disease"><option value="0">No</option><option value="1">Yes</option></select></div>
<div class="col-md-6"><label class="form-label" for="gender">Gender</label>
<select class="form-select" id="gender" name="gender"><option value="Male">Male</option><option value="Female">Female</option><option value="Other">Other</option></select></div>
<div class="col-md-6"><label class="form-label" for="smoking_status">Smoking status</label>
<select class="form-select" id="smoking_status" name="smoking_status">
<option value="never smoked">Never smoked</option><option value="formerly smoked">Formerly smoked</option>
<option value="smokes">Smokes</option><option value="Unknown">Unknown</option></select></div>
<div class="col-12"><button class="btn btn-primary" type="submit">Analyze</button></div>
</form>"#;
