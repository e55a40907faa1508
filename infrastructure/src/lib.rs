pub mod chat_client;
pub mod config;
pub mod embedder;
mod http;
pub mod ollama_client;
pub mod qdrant_client;
pub mod search;
