use std::sync::{Arc, OnceLock};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use regex::Regex;
use tracing_subscriber::EnvFilter;

use verse_explorer::canon::{find_book, parse_reference};
use verse_explorer::context::ContextService;
use verse_explorer::models::{BibleVerse, VerseAddress};
use verse_explorer::scripture_api::ScriptureClient;
use verse_explorer::verses::{Direction, VerseService};
use verse_explorer::{AppConfig, VerseLocator};

#[derive(Parser, Debug)]
#[command(name = "verse")]
#[command(about = "Look up Bible verses by reference or global verse number")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the address of a global verse number
    Locate { number: i64 },
    /// Print the global number span of a chapter
    Range { book: String, chapter: u32 },
    /// Fetch a verse by reference, e.g. `verse show John 3:16`
    Show {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Fetch a uniformly random verse
    Random {
        #[arg(long)]
        book: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Fetch the verse after a reference
    Next {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
        #[arg(long)]
        translation: Option<String>,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    #[arg(long)]
    translation: Option<String>,
    /// Also ask Gemini for a short note on the verse
    #[arg(long, default_value_t = false)]
    context: bool,
    #[arg(long)]
    persona: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = AppConfig::from_env();
    let locator = Arc::new(VerseLocator::standard()?);

    match cli.command {
        Command::Locate { number } => {
            let address = locator.try_locate(number)?;
            println!("{number} => {}", display_reference(&address));
        }
        Command::Range { book, chapter } => {
            let spec = find_book(&book).with_context(|| format!("unknown book '{book}'"))?;
            let span = locator
                .range(spec.id, chapter)
                .with_context(|| format!("{} has no chapter {chapter}", spec.name))?;
            println!(
                "{} {chapter}: {}-{} ({} verses)",
                spec.name,
                span.start,
                span.end,
                span.verse_count()
            );
        }
        Command::Show { reference, output } => {
            let address = parse_cli_reference(&reference)?;
            let service = verse_service(&config, locator);
            let translation = translation_or_default(&config, output.translation.as_deref());
            let verse = service.fetch(translation, &address).await?;
            print_verse(&verse);
            print_context(&config, &verse, &output).await?;
        }
        Command::Random { book, output } => {
            let service = verse_service(&config, locator);
            let translation = translation_or_default(&config, output.translation.as_deref());
            let verse = service.random(translation, book.as_deref()).await?;
            print_verse(&verse);
            print_context(&config, &verse, &output).await?;
        }
        Command::Next {
            reference,
            translation,
        } => {
            let address = parse_cli_reference(&reference)?;
            let service = verse_service(&config, locator);
            let translation = translation_or_default(&config, translation.as_deref());
            let verse = service
                .neighbor(translation, &address, Direction::Next)
                .await?;
            print_verse(&verse);
        }
    }

    Ok(())
}

fn verse_service(config: &AppConfig, locator: Arc<VerseLocator>) -> VerseService {
    let scripture = ScriptureClient::new(
        config.scripture.base_url.clone(),
        config.scripture.api_key.clone(),
    );
    VerseService::new(locator, scripture)
}

fn translation_or_default<'a>(config: &'a AppConfig, requested: Option<&'a str>) -> &'a str {
    requested.unwrap_or(&config.scripture.default_translation)
}

fn parse_cli_reference(words: &[String]) -> Result<VerseAddress> {
    let reference = words.join(" ");
    parse_reference(&reference)
        .ok_or_else(|| anyhow!("could not parse reference '{reference}' (expected e.g. John 3:16)"))
}

fn display_reference(address: &VerseAddress) -> String {
    match find_book(&address.book) {
        Some(book) => format!("{} {}:{}", book.name, address.chapter, address.verse),
        None => address.to_string(),
    }
}

fn print_verse(verse: &BibleVerse) {
    println!(
        "{} ({})\n{}",
        display_reference(&verse.address()),
        verse.translation,
        strip_tags(&verse.text)
    );
}

async fn print_context(config: &AppConfig, verse: &BibleVerse, output: &OutputArgs) -> Result<()> {
    if !output.context {
        return Ok(());
    }

    let book = find_book(&verse.book).with_context(|| format!("unknown book '{}'", verse.book))?;
    let context = ContextService::from_config(&config.gemini);
    let response = context
        .explain(book, verse.chapter, verse.verse, output.persona.as_deref())
        .await?;

    match response.persona {
        Some(persona) => println!("\n[{persona}] {}", response.text),
        None => println!("\n{}", response.text),
    }
    Ok(())
}

/// API.Bible returns verse content as HTML; the terminal wants plain text.
fn strip_tags(html: &str) -> String {
    static TAGS: OnceLock<Option<Regex>> = OnceLock::new();
    match TAGS.get_or_init(|| Regex::new(r"<[^>]*>").ok()) {
        Some(tags) => tags.replace_all(html, "").trim().to_string(),
        None => html.trim().to_string(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
