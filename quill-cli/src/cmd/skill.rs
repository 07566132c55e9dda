use anyhow::Result;
use clap::{ArgMatches, Command};
use quill_core::{ArticleResponse, SkillError, run_article_skill};
use std::io::Read;
use crate::cmd::build::add_article_args;
use crate::config::QuillConfig;

pub fn make_subcommand() -> Command {
    add_article_args(Command::new("skill"))
        .about("Read a JSON article request on stdin, write a JSON response on stdout")
}

/// Always prints a response; failures are reported inside it.
pub fn execute(args: &ArgMatches) -> Result<()> {
    let mut payload = String::new();
    let response = std::io::stdin()
        .read_to_string(&mut payload)
        .map_err(anyhow::Error::from)
        .and_then(|_| respond(args, &payload))
        .unwrap_or_else(|err| {
            ArticleResponse::failed(&SkillError::ProcessingFailure(format!("{err:#}")))
        });

    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}

fn respond(args: &ArgMatches, payload: &str) -> Result<ArticleResponse> {
    let config = QuillConfig::load(args)?;
    Ok(run_article_skill(payload, &config.article_options()))
}
