use std::{
    fs::{self, Permissions},
    io::Write,
    path::Path,
};

use anyhow::Context as _;
use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::{context::Context, metadata::parse_front_matter, renderer::render_markdown};

use self::{
    article::render_article,
    data::{ArticleMetadata, Post},
    page::render_page,
    utils::style_html,
};

mod article;
pub(crate) mod data;
mod page;
mod utils;

const MARKDOWN_EXTENSION: &str = "md";
const README: &str = "README.md";

fn preprocess_file(path: &Path, file_name: String) -> anyhow::Result<Post> {
    let content = fs::read_to_string(path)?;
    let (metadata, body) = parse_front_matter(&content);
    if metadata.is_empty() {
        warn!("{file_name}: no front matter block found");
    }

    let meta = ArticleMetadata::from_metadata(&metadata)?;
    let html = style_html(&render_markdown(body)?);
    let fragment = render_article(&meta, &html);

    Ok(Post {
        meta,
        fragment,
        file_name,
    })
}

fn is_post_file(path: &Path, file_name: &str) -> bool {
    path.is_file()
        && !file_name.starts_with('.')
        && file_name != README
        && path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION)
}

/// Reads and renders every post in the post directory, newest first.
///
/// The first post that cannot be read or rendered fails the whole load.
pub(crate) fn load_posts(ctx: &Context) -> anyhow::Result<Vec<Post>> {
    info!("Loading posts from {:?}", ctx.post_dir);

    let mut entries = vec![];
    for entry in fs::read_dir(&ctx.post_dir)
        .with_context(|| format!("while reading {:?}", ctx.post_dir))?
    {
        let entry = entry?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().to_string();
        if is_post_file(&path, &file_name) {
            entries.push((path, file_name));
        } else {
            debug!("Skipping {file_name}");
        }
    }

    // newest first, so the first broken post reported is the newest one
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    let mut posts = vec![];
    for (path, file_name) in entries {
        debug!("Rendering {file_name}");
        let post = preprocess_file(&path, file_name)
            .with_context(|| format!("while preprocessing {:?}", path))?;
        posts.push(post);
    }

    Ok(posts)
}

/// Renders the page for `posts` and replaces `ctx.out_file` with it.
pub(crate) fn generate(ctx: &Context, posts: &[Post]) -> anyhow::Result<()> {
    let html = render_page(posts);
    write_page(&ctx.out_file, &html)
        .with_context(|| format!("while writing {:?}", ctx.out_file))?;
    info!("Wrote {} bytes to {:?}", html.len(), ctx.out_file);
    Ok(())
}

// The page goes to a temporary file next to the target first, so an
// interrupted build never leaves a truncated output behind.
fn write_page(out_file: &Path, html: &str) -> anyhow::Result<()> {
    let dir = match out_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(html.as_bytes())?;

    let permissions = fs::metadata(out_file)
        .map(|meta| meta.permissions())
        .ok()
        .or_else(default_permissions);
    if let Some(permissions) = permissions {
        tmp.as_file().set_permissions(permissions)?;
    }

    tmp.persist(out_file)?;
    Ok(())
}

// NamedTempFile is created owner-only; published pages should be world-readable.
#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}
