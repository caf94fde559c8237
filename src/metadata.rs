//! Front matter of a post: the `---` delimited block of `key: value` lines at
//! the top of a markdown file.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::{Regex, RegexBuilder};

// pandoc-style metadata block followed by the body
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\A---\s*\n(.*?)\n---\s*\n(.*)")
        .dot_matches_new_line(true)
        .build()
        .expect("front matter pattern must compile")
});

const TAGS_KEY: &str = "tags";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MetaValue {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Metadata {
    entries: BTreeMap<String, MetaValue>,
}

impl Metadata {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain string value of `key`. `None` when absent or list-valued.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(MetaValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// The `tags` list, empty when the post declares none.
    pub fn tags(&self) -> &[String] {
        match self.entries.get(TAGS_KEY) {
            Some(MetaValue::List(tags)) => tags,
            _ => &[],
        }
    }

    fn insert_line(&mut self, line: &str) {
        let Some((key, value)) = line.split_once(':') else {
            return;
        };
        let key = key.trim();
        let value = value.trim();

        let value = if key == TAGS_KEY {
            MetaValue::List(parse_tag_list(value))
        } else {
            MetaValue::Text(value.to_string())
        };
        self.entries.insert(key.to_string(), value);
    }
}

/// Splits `content` into its front matter and the markdown body after it.
///
/// Content without a well-formed block is returned untouched as the body,
/// along with empty metadata.
pub(crate) fn parse_front_matter(content: &str) -> (Metadata, &str) {
    let Some(caps) = HEADER_PATTERN.captures(content) else {
        return (Metadata::default(), content);
    };

    let mut metadata = Metadata::default();
    for line in caps[1].split('\n') {
        metadata.insert_line(line);
    }

    let body = caps.get(2).map_or("", |m| m.as_str());
    (metadata, body)
}

/// `[a, "b", 'c']` -> `["a", "b", "c"]`
fn parse_tag_list(value: &str) -> Vec<String> {
    let inner = value.strip_prefix('[').unwrap_or(value);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    inner
        .split(',')
        .map(|token| strip_quotes(token.trim()).trim().to_string())
        .collect()
}

fn strip_quotes(s: &str) -> &str {
    const PAIRS: [(char, char); 4] = [('"', '"'), ('\'', '\''), ('“', '”'), ('‘', '’')];

    for (open, close) in PAIRS {
        if let Some(inner) = s.strip_prefix(open).and_then(|s| s.strip_suffix(close)) {
            return inner;
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_body() {
        let input = "---\ndate: 2025-03-07\ntitle: Rebuilding the lab\n---\n# Hello\n\nWorld\n";
        let (meta, body) = parse_front_matter(input);

        assert_eq!(meta.get("date"), Some("2025-03-07"));
        assert_eq!(meta.get("title"), Some("Rebuilding the lab"));
        assert_eq!(body, "# Hello\n\nWorld\n");
    }

    #[test]
    fn body_is_left_untouched() {
        let body = "Some *markdown*\n\n---\n\nwith a rule: and colons\n\n\n";
        let input = format!("---\ntitle: x\n---\n{body}");
        let (_, parsed) = parse_front_matter(&input);

        assert_eq!(parsed, body);
    }

    #[test]
    fn missing_block_yields_empty_metadata() {
        let input = "# Just a post\n\ntitle: not metadata\n";
        let (meta, body) = parse_front_matter(input);

        assert!(meta.is_empty());
        assert_eq!(body, input);
    }

    #[test]
    fn unclosed_block_is_treated_as_body() {
        let input = "---\ntitle: Dangling\ndate: 2025-01-01\n# body\n";
        let (meta, body) = parse_front_matter(input);

        assert!(meta.is_empty());
        assert_eq!(body, input);
    }

    #[test]
    fn splits_on_first_colon_only() {
        let (meta, _) = parse_front_matter("---\ntitle:  Re: ssh tunnels  \n---\n");

        assert_eq!(meta.get("title"), Some("Re: ssh tunnels"));
    }

    #[test]
    fn lines_without_colon_are_ignored() {
        let (meta, _) = parse_front_matter("---\njust some words\ntitle: ok\n---\nbody");

        assert_eq!(meta.get("title"), Some("ok"));
        assert_eq!(meta.get("just some words"), None);
    }

    #[test]
    fn tags_are_unbracketed_and_unquoted() {
        let (meta, _) = parse_front_matter("---\ntags: [a, \"b\", 'c ']\n---\n");

        assert_eq!(meta.tags(), ["a", "b", "c"]);
    }

    #[test]
    fn curly_quotes_are_stripped() {
        let (meta, _) = parse_front_matter("---\ntags: [“homelab”, ‘security’]\n---\n");

        assert_eq!(meta.tags(), ["homelab", "security"]);
    }

    #[test]
    fn tags_without_brackets() {
        let (meta, _) = parse_front_matter("---\ntags: networking, vpn\n---\n");

        assert_eq!(meta.tags(), ["networking", "vpn"]);
    }

    #[test]
    fn empty_tag_list_keeps_one_empty_tag() {
        let (meta, _) = parse_front_matter("---\ntitle: t\ntags: []\n---\n");

        assert_eq!(meta.tags(), [""]);
    }

    #[test]
    fn empty_tokens_are_kept() {
        let (meta, _) = parse_front_matter("---\ntags: [a,,b]\n---\n");

        assert_eq!(meta.tags(), ["a", "", "b"]);
    }

    #[test]
    fn absent_tags_default_to_empty() {
        let (meta, _) = parse_front_matter("---\ntitle: t\n---\n");

        assert!(meta.tags().is_empty());
        assert_eq!(meta.get("tags"), None);
    }

    #[test]
    fn later_duplicate_key_wins() {
        let (meta, _) = parse_front_matter("---\ntitle: first\ntitle: second\n---\n");

        assert_eq!(meta.get("title"), Some("second"));
    }
}
