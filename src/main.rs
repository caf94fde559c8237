use std::path::PathBuf;

use anyhow::bail;
use clap::{command, value_parser, Arg};
use context::Context;

mod context;
mod generator;
mod metadata;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .about("Builds a single blog page from markdown posts")
        .after_help("Run without arguments to read `posts/` and write `blog.html`.")
        .args(&[
            Arg::new("post_dir")
                .help("Directory of markdown posts (optional, defaults to `posts`)")
                .value_parser(value_parser!(PathBuf))
                .default_value("posts"),
            Arg::new("out_file")
                .help("Path of the generated page (optional, defaults to `blog.html`). An existing file is replaced.")
                .value_parser(value_parser!(PathBuf))
                .default_value("blog.html"),
        ])
        .get_matches();

    let post_dir: &PathBuf = matches
        .get_one("post_dir")
        .expect("post_dir has a default value");
    if !post_dir.is_dir() {
        bail!("post_dir must be a directory.");
    }
    let out_file: &PathBuf = matches
        .get_one("out_file")
        .expect("out_file has a default value");
    if out_file.is_dir() {
        bail!("out_file must not be a directory.");
    }

    let ctx = Context::new(post_dir.to_owned(), out_file.to_owned());

    println!("🔨 Building blog from markdown posts...");
    let posts = generator::load_posts(&ctx)?;
    println!("✓ Loaded {} posts", posts.len());

    generator::generate(&ctx, &posts)?;
    println!(
        "✓ Generated {} with {} posts",
        ctx.out_file.display(),
        posts.len()
    );

    println!("\nPosts included:");
    for post in &posts {
        println!("  - {}: {}", post.meta.id, post.meta.title);
    }
    println!("\n✅ Build complete!");

    Ok(())
}
