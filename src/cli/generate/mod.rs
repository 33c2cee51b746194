//! Generate command - one-shot recipe generation from the terminal

use clap::Args;

use crate::config::AppConfig;
use crate::domain::recipe::DEFAULT_WORD_COUNT;
use crate::domain::{JokeSelector, RecipeGenerator, RecipeRequest, RecipeService};
use crate::infrastructure::llm::ProviderFactory;
use crate::infrastructure::logging;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Recipe topic
    #[arg(long)]
    pub topic: String,

    /// Approximate word count for the recipe (100-1000)
    #[arg(long, default_value_t = DEFAULT_WORD_COUNT)]
    pub word_count: u32,
}

/// Generate one recipe and print it to stdout. The joke goes to stderr so
/// piped output stays clean.
pub async fn run(args: GenerateArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let request = RecipeRequest::new(&args.topic, args.word_count)?;

    let provider = ProviderFactory::from_env()?;
    let generator = RecipeGenerator::new(provider, config.generation);

    eprintln!(
        "While I work on your recipe, here's a joke for you:\n{}\n",
        JokeSelector::new().select()
    );

    let response = generator.generate(&request).await?;
    println!("{}", response.text);

    Ok(())
}
