use anyhow::{anyhow, Result};
use cssnest_parser::parser_config::ParserConfig;
use cssnest_parser::testing::tokenize_source;
use cssnest_parser::token::{tokens_from_json, Token};
use cssnest_parser::walker::Walker;
use cssnest_shared::source::{Highlight, SourceRef};
use simple_logger::SimpleLogger;
use std::fs;

fn main() -> Result<()> {
    let matches = clap::Command::new("Cssnest parser")
        .version("0.1.0")
        .arg(
            clap::Arg::new("file")
                .help("The css file to parse")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::new("tokens")
                .help("JSON token file produced by an external tokenizer for the css file")
                .long("tokens")
                .short('t'),
        )
        .arg(
            clap::Arg::new("print-tokens")
                .help("Just print the tokens")
                .long("print-tokens")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("json")
                .help("Display the AST as JSON")
                .long("json")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("quiet")
                .help("Don't display AST")
                .long("quiet")
                .short('q')
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-color")
                .help("Don't use colors in error messages")
                .long("no-color")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("max-depth")
                .help("Maximum number of nested blocks")
                .long("max-depth")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            clap::Arg::new("debug")
                .help("Enable debug logging")
                .short('d')
                .long("debug")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let debug = matches.get_flag("debug");
    let quiet = matches.get_flag("quiet");
    let json = matches.get_flag("json");
    let no_color = matches.get_flag("no-color");
    let print_tokens = matches.get_flag("print-tokens");
    let file = matches
        .get_one::<String>("file")
        .ok_or_else(|| anyhow!("no file given"))?;

    if debug {
        SimpleLogger::new().with_level(log::LevelFilter::Trace).init()?;
    }

    let css = fs::read_to_string(file)?;
    let source = SourceRef::with_name(file.as_str(), css);

    let tokens: Vec<Token> = match matches.get_one::<String>("tokens") {
        Some(token_file) => tokens_from_json(&fs::read_to_string(token_file)?, &source)?,
        None => tokenize_source(&source),
    };

    if print_tokens {
        for token in &tokens {
            println!("{:?} {:?} @{}", token.token_type, token.source, token.index);
        }
        return Ok(());
    }

    let mut config = ParserConfig {
        source: Some(file.clone()),
        ..Default::default()
    };
    if let Some(max_depth) = matches.get_one::<usize>("max-depth") {
        config.max_nesting_depth = *max_depth;
    }

    let ast = match cssnest_parser::parse_with_config(&tokens, &config) {
        Ok(ast) => ast,
        Err(err) => {
            let highlight = if no_color {
                Highlight::Plain
            } else {
                Highlight::Ansi
            };
            eprintln!("{}", err.render(highlight));
            return Err(anyhow!("could not parse {}", file));
        }
    };

    if quiet {
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&ast)?);
    } else {
        Walker::new(&ast).walk_stdout();
    }

    Ok(())
}
