use super::data::Post;

const PAGE_TEMPLATE: &str = include_str!("../../template/blog.html");
const POSTS_MARKER: &str = "<!-- posts -->";

/// Places the post fragments, in the given order, into the page shell.
pub(super) fn render_page(posts: &[Post]) -> String {
    let posts_html = posts
        .iter()
        .map(|post| post.fragment.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    PAGE_TEMPLATE.replacen(POSTS_MARKER, &posts_html, 1)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::generator::data::ArticleMetadata;

    fn post(file_name: &str, fragment: &str) -> Post {
        Post {
            meta: ArticleMetadata {
                id: "2025-01-01".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                title: "T".to_string(),
                tags: vec![],
            },
            fragment: fragment.to_string(),
            file_name: file_name.to_string(),
        }
    }

    #[test]
    fn template_has_exactly_one_marker() {
        assert_eq!(PAGE_TEMPLATE.matches(POSTS_MARKER).count(), 1);
    }

    #[test]
    fn fragments_are_joined_in_order() {
        let page = render_page(&[post("b.md", "<p>second</p>"), post("a.md", "<p>first</p>")]);

        assert!(page.starts_with("<!doctype html>"));
        assert!(page.contains(
            "<section class=\"blog-posts\">\n<p>second</p>\n<p>first</p>\n      </section>"
        ));
        assert!(!page.contains(POSTS_MARKER));
    }

    #[test]
    fn empty_page_keeps_the_shell() {
        let page = render_page(&[]);

        assert!(page.contains("<section class=\"blog-posts\">\n\n      </section>"));
        assert!(page.contains("<script src=\"js/dystopia.js\"></script>"));
        assert!(page.contains("<link rel=\"stylesheet\" href=\"css/dystopia.css\" />"));
    }
}
