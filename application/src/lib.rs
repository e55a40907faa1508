pub mod rag_service;
