use std::sync::LazyLock;

use maud::html;
use pulldown_cmark::{html as cmark_html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use syntect::{
    html::{ClassStyle, ClassedHTMLGenerator},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_DEFINITION_LIST);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    options
}

/// A code block collected from the event stream.
struct CodeBlock {
    lang: Option<String>,
    code: String,
}

impl CodeBlock {
    fn new(kind: &CodeBlockKind) -> Self {
        let lang = match kind {
            CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_string),
            CodeBlockKind::Indented => None,
        };
        Self {
            lang,
            code: String::new(),
        }
    }

    fn render(&self) -> anyhow::Result<String> {
        let mut res = String::from("<div class=\"codehilite\"><pre><code");
        if let Some(lang) = &self.lang {
            res.push_str(" class=\"language-");
            res.push_str(&html! { (lang) }.into_string());
            res.push('"');
        }
        res.push('>');

        let syntax = self
            .lang
            .as_deref()
            .and_then(|lang| SYNTAX_SET.find_syntax_by_token(lang));
        match syntax {
            Some(syntax) => res.push_str(&highlight(&self.code, syntax)?),
            // render without syntax highlighting
            None => res.push_str(&html! { (self.code) }.into_string()),
        }

        res.push_str("</code></pre></div>\n");
        Ok(res)
    }
}

fn highlight(code: &str, syntax: &SyntaxReference) -> anyhow::Result<String> {
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, ClassStyle::Spaced);
    for line in LinesWithEndings::from(code) {
        generator.parse_html_for_line_which_includes_newline(line)?;
    }
    Ok(generator.finalize())
}

/// Renders a post body to HTML.
///
/// Code blocks are wrapped in `div.codehilite`. When the fence names a
/// language syntect knows, the code is split into classed token spans for
/// the site stylesheet; otherwise it is emitted as escaped plain text.
pub(crate) fn render_markdown(body: &str) -> anyhow::Result<String> {
    let mut events = vec![];
    let mut block: Option<CodeBlock> = None;

    for event in Parser::new_ext(body, options()) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => block = Some(CodeBlock::new(&kind)),
            Event::End(TagEnd::CodeBlock) => {
                if let Some(block) = block.take() {
                    events.push(Event::Html(block.render()?.into()));
                }
            }
            Event::Text(text) => match block.as_mut() {
                Some(block) => block.code.push_str(&text),
                None => events.push(Event::Text(text)),
            },
            _ => events.push(event),
        }
    }

    let mut body_html = String::new();
    cmark_html::push_html(&mut body_html, events.into_iter());
    Ok(body_html)
}
