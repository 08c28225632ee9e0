//! Asna CLI - console and browser chat for the Asna conversational agent.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use asna_agent::{AGENT_NAME, GeminiResponder, Matcher, Responder, Rule, builtin_rules};

mod repl;
mod server;

/// Asna CLI - a minimal conversational agent.
///
/// Two interchangeable response strategies:
///   - a rule-based intent matcher (default)
///   - the Gemini API (--gemini)
///
/// Both are available from the console (repl) and from a browser chat UI
/// (serve).
#[derive(Parser)]
#[command(name = "asna")]
#[command(about = "Asna conversational agent")]
#[command(version)]
pub struct Cli {
    /// Verbose output (debug-level tracing)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive console chat
    Repl(StrategyArgs),
    /// Serve the browser chat UI
    Serve(ServeArgs),
    /// Run the canned demo exchanges through the matcher
    Demo(RulesArg),
}

/// Response strategy selection, shared by `repl` and `serve`.
#[derive(Args)]
pub struct StrategyArgs {
    /// Use the Gemini remote-model strategy instead of the pattern matcher
    #[arg(long)]
    pub gemini: bool,

    /// Gemini API key (falls back to the GEMINI_API_KEY env var)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Gemini model name
    #[arg(long, default_value = asna_agent::DEFAULT_MODEL)]
    pub model: String,

    #[command(flatten)]
    pub rules: RulesArg,
}

#[derive(Args)]
pub struct RulesArg {
    /// Rule table file (YAML or JSON), replaces the built-in rules
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Listen address (HOST:PORT, or :PORT for all interfaces)
    #[arg(long, default_value = "127.0.0.1:5000")]
    pub addr: String,

    #[command(flatten)]
    pub strategy: StrategyArgs,
}

impl StrategyArgs {
    /// Builds the configured response strategy.
    pub fn build_responder(&self) -> Result<Arc<dyn Responder>> {
        if self.gemini {
            let api_key = match &self.api_key {
                Some(key) => key.clone(),
                None => std::env::var("GEMINI_API_KEY")
                    .context("--gemini requires --api-key or the GEMINI_API_KEY env var")?,
            };
            let client = asna_gemini::Client::new(api_key)?;
            Ok(Arc::new(GeminiResponder::with_model(client, &self.model)))
        } else {
            let matcher = Matcher::compile(&self.rules.load()?)?;
            Ok(Arc::new(matcher))
        }
    }
}

impl RulesArg {
    /// Loads the rule table from `--rules`, or returns the built-in one.
    pub fn load(&self) -> Result<Vec<Rule>> {
        match &self.rules {
            Some(path) => load_rules(path),
            None => Ok(builtin_rules()),
        }
    }
}

/// Loads a rule table from a YAML or JSON file, by extension.
fn load_rules(path: &Path) -> Result<Vec<Rule>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rules file {}", path.display()))?;

    let rules: Vec<Rule> = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&data)
            .with_context(|| format!("failed to parse {} as JSON rules", path.display()))?,
        _ => serde_yaml::from_str(&data)
            .with_context(|| format!("failed to parse {} as YAML rules", path.display()))?,
    };

    if rules.is_empty() {
        bail!("rules file {} contains no rules", path.display());
    }
    Ok(rules)
}

/// Demo inputs exercising every built-in intent plus the fallback.
const DEMO_INPUTS: &[&str] = &[
    "Hello!",
    "What's your name?",
    "How are you doing?",
    "Can you help me?",
    "What's the weather like?",
    "Goodbye!",
];

fn demo(args: &RulesArg) -> Result<()> {
    let matcher = Matcher::compile(&args.load()?)?;

    for input in DEMO_INPUTS {
        println!("You: {input}");
        println!("{AGENT_NAME}: {}\n", matcher.respond(input));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match &cli.command {
        Commands::Repl(args) => repl::run(args.build_responder()?).await,
        Commands::Serve(args) => server::run(&args.addr, args.strategy.build_responder()?).await,
        Commands::Demo(args) => demo(args),
    }
}
