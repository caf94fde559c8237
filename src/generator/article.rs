use maud::{html, PreEscaped};

use super::{
    data::ArticleMetadata,
    utils::{indent_html, title_case, CONTENT_INDENT},
};

const FOOTER_TAG_SEPARATOR: &str = "\n            ";

/// Wraps a post's processed HTML in its article markup.
///
/// Title and tags come from trusted post sources and are inserted as is.
pub(super) fn render_article(meta: &ArticleMetadata, content: &str) -> String {
    let content = indent_html(content, CONTENT_INDENT);

    html! {
        (PreEscaped(format!("<!-- Post: {} -->\n", meta.id)))
        article.blog-post id=(meta.id) {
            div.post-header {
                div.post-meta {
                    span.post-date { (meta.display_date()) }
                    span.meta-divider { "•" }
                    span.post-tag { (PreEscaped(meta.primary_tag())) }
                }
                h2.post-title { (PreEscaped(&meta.title)) }
            }
            div.post-content {
                "\n" (PreEscaped(content)) "\n"
            }
            div.post-footer {
                @for (i, tag) in meta.tags.iter().enumerate() {
                    @if i > 0 {
                        (PreEscaped(FOOTER_TAG_SEPARATOR))
                    }
                    span.post-tag { (PreEscaped(title_case(tag))) }
                }
            }
        }
    }
    .into()
}
