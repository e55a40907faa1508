use application::rag_service::RagService;
use clap::{ArgAction, Parser};
use domain::conventions::DEFAULT_QUESTION;
use domain::models::Query;
use infrastructure::config::Config;
use shared::telemetry::init_tracing;
use shared::types::Result;
use std::io::Write;
use tracing::info;

/// Answer one question from a Qdrant collection with a hosted chat model.
#[derive(Parser, Debug)]
#[command(name = "rag_query")]
#[command(about = "Retrieval-augmented answer to a single question", long_about = None)]
pub struct Cli {
    /// Collection to search (overrides QDRANT_COLLECTION)
    #[arg(long)]
    pub collection: Option<String>,

    /// Number of passages to retrieve (overrides RETRIEVAL_LIMIT)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// Log pipeline progress to stderr
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Question to ask; the built-in question is used when empty
    #[arg(value_parser, trailing_var_arg = true)]
    pub question: Vec<String>,
}

impl Cli {
    pub fn question_text(&self) -> String {
        let joined = self.question.join(" ");
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            DEFAULT_QUESTION.to_string()
        } else {
            trimmed.to_string()
        }
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(collection) = &self.collection {
            config.collection = collection.clone();
        }
        if let Some(limit) = self.limit {
            config.retrieval_limit = limit;
        }
    }
}

#[derive(Default)]
pub struct CliApp;

impl CliApp {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, cli: Cli) -> Result<()> {
        init_tracing(if cli.verbose { "info" } else { "warn" });

        let mut config = Config::load()?;
        cli.apply_overrides(&mut config);
        let service = RagService::from_config(&config);

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.execute(&service, &cli.question_text(), &mut out).await
    }

    /// Run the pipeline once and write the completion alone to `out`.
    pub async fn execute(
        &self,
        service: &RagService,
        question: &str,
        out: &mut dyn Write,
    ) -> Result<()> {
        let query = Query::new(question);
        info!(query = %query, "running query");
        let answer = service.answer(&query).await?;
        writeln!(out, "{}", answer.completion)?;
        out.flush()?;
        Ok(())
    }
}
