use chrono::NaiveDate;

// Bare opening tags as emitted by pulldown-cmark, and their styled versions.
const STYLED_TAGS: [(&str, &str); 4] = [
    ("<h3>", r#"<h3 class="subsection-title">"#),
    (
        "<ol>",
        r#"<ol style="margin: 1rem 0; margin-left: 2rem; line-height: 1.8;">"#,
    ),
    ("<ul>", r#"<ul style="margin: 1rem 0; list-style: none;">"#),
    ("<li>", r#"<li style="padding: 0.5rem 0;">"#),
];

pub(super) const CONTENT_INDENT: &str = "            ";

/// Adds the site's presentation attributes to headings and lists.
pub(super) fn style_html(html: &str) -> String {
    STYLED_TAGS
        .iter()
        .fold(html.to_string(), |acc, (bare, styled)| acc.replace(bare, styled))
}

/// `2025-03-07` -> `07 MARCH 2025`
pub(super) fn format_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string().to_uppercase()
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest, so `k8s-cluster` becomes `K8S-Cluster`.
pub(super) fn title_case(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                res.extend(c.to_lowercase());
            } else {
                res.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            res.push(c);
            in_word = false;
        }
    }
    res
}

/// Prefixes every line with `indent`, except lines inside a `<pre>` block
/// whose whitespace is significant.
pub(super) fn indent_html(html: &str, indent: &str) -> String {
    let mut in_pre = false;
    html.split('\n')
        .map(|line| {
            let out = if in_pre || line.is_empty() {
                line.to_string()
            } else {
                format!("{indent}{line}")
            };
            match (line.rfind("<pre"), line.rfind("</pre>")) {
                (Some(open), Some(close)) => in_pre = open > close,
                (Some(_), None) => in_pre = true,
                (None, Some(_)) => in_pre = false,
                (None, None) => {}
            }
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}
