use anyhow::{bail, Context};
use domain::conventions::{DEFAULT_RETRIEVAL_LIMIT, EMBEDDING_DIMENSION};
use domain::error::RagError;
use domain::session::Role;
use dotenvy::dotenv;
use shared::types::Result;
use shared::utils::{env_opt, env_or, env_parse};

pub const DEFAULT_EMBEDDING_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_EMBEDDING_MODEL: &str = "nomic-embed-text";
pub const DEFAULT_QDRANT_URL: &str = "http://localhost:6333";
pub const DEFAULT_COLLECTION: &str = "knowledge_repo_768";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "meta-llama/Llama-3.2-1B-Instruct";

#[derive(Debug, Clone)]
pub struct Config {
    pub embedding_base_url: String,
    pub embedding_model: String,
    pub embedding_dimension: usize,
    pub qdrant_url: String,
    pub qdrant_api_key: Option<String>,
    pub collection: String,
    pub retrieval_limit: u64,
    pub score_threshold: Option<f32>,
    pub openai_base_url: String,
    pub openai_api_key: String,
    pub chat_model: String,
    pub instruction_role: Role,
}

impl Config {
    /// Read `.env` (if any) and the process environment.
    pub fn load() -> Result<Self> {
        dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self> {
        let openai_api_key =
            env_opt("OPENAI_API_KEY").ok_or(RagError::MissingConfig("OPENAI_API_KEY"))?;
        let instruction_role = match env_or("CHAT_INSTRUCTION_ROLE", "developer")
            .parse::<Role>()
            .context("invalid value for CHAT_INSTRUCTION_ROLE")?
        {
            role @ (Role::Developer | Role::System) => role,
            other => bail!("CHAT_INSTRUCTION_ROLE must be developer or system, got {other:?}"),
        };

        Ok(Self {
            embedding_base_url: env_or("EMBEDDING_BASE_URL", DEFAULT_EMBEDDING_BASE_URL),
            embedding_model: env_or("EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
            embedding_dimension: env_parse("EMBEDDING_DIMENSION")?.unwrap_or(EMBEDDING_DIMENSION),
            qdrant_url: env_or("QDRANT_URL", DEFAULT_QDRANT_URL),
            qdrant_api_key: env_opt("QDRANT_API_KEY"),
            collection: env_or("QDRANT_COLLECTION", DEFAULT_COLLECTION),
            retrieval_limit: env_parse("RETRIEVAL_LIMIT")?.unwrap_or(DEFAULT_RETRIEVAL_LIMIT),
            score_threshold: env_parse("QDRANT_SCORE_THRESHOLD")?,
            openai_base_url: env_or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            openai_api_key,
            chat_model: env_or("CHAT_MODEL", DEFAULT_CHAT_MODEL),
            instruction_role,
        })
    }
}
