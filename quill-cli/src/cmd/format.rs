use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use quill_core::format_file;
use crate::cmd::build::add_article_args;
use crate::config::QuillConfig;

pub fn make_subcommand() -> Command {
    add_article_args(Command::new("format"))
        .about("Format one markdown file as a themed HTML article")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Markdown file to format")
                .required(true)
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .help("Where to write the HTML")
                .required(true)
        )
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TITLE")
                .help("Article title (defaults to the first `# ` heading)")
        )
        .arg(
            Arg::new("cover")
                .long("cover")
                .value_name("URL")
                .help("Cover image shown above the title")
        )
        .arg(
            Arg::new("image")
                .short('i')
                .long("image")
                .value_name("URL")
                .help("Gallery image appended after the article (repeatable)")
                .action(ArgAction::Append)
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = QuillConfig::load(args)?;

    let mut options = config.article_options();
    options.title = args.get_one::<String>("title").cloned();

    let input = args.get_one::<String>("input").context("missing INPUT")?;
    let output = args.get_one::<String>("output").context("missing OUTPUT")?;

    let article = format_file(input, output, &options)?;

    println!(
        "Formatted \"{}\" ({} theme, {} characters) into {}",
        article.title, article.theme_name, article.char_count, output
    );

    Ok(())
}
