use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use quill_core::build_articles;
use std::path::Path;
use crate::config::QuillConfig;

/// Arguments shared by every command that formats articles
pub fn add_article_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("theme")
                .short('t')
                .long("theme")
                .value_name("THEME")
                .help("Theme: elegant, dark, blue, pink or minimal")
        )
        .arg(
            Arg::new("template")
                .long("template")
                .value_name("FILE")
                .help("Article template to use instead of the built-in one")
        )
        .arg(
            Arg::new("escape_inline")
                .long("escape-inline")
                .help("Escape raw HTML in paragraph, list and quote text")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file")
                .default_value("./quill.toml")
        )
}

pub fn make_subcommand() -> Command {
    add_article_args(Command::new("build"))
        .about("Format every markdown file in a directory")
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_name("DIR")
                .help("Source directory containing markdown files")
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Output directory for generated HTML")
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    // Load cascading configuration
    let config = QuillConfig::load(args)?;
    let build_config = config.build_config();

    let source_dir = Path::new(&build_config.source);
    let output_dir = Path::new(&build_config.output);

    let articles = build_articles(source_dir, output_dir, &config.article_options())?;

    println!("Built {} article(s) in {}", articles.len(), output_dir.display());

    Ok(())
}
