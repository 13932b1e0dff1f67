//! Example: plan and chunk a text file
//! Run with: cargo run --bin plan_document -- <file> [overrides.json]

use chunkwise::analysis::analyze_document;
use chunkwise::planner::ChunkingOverrides;
use chunkwise::text_splitters::AdaptiveChunker;
use chunkwise::{DocumentProcessor, Error, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or_else(|| {
        Error::Validation("usage: plan_document <file> [overrides.json]".to_string())
    })?;

    let overrides: Option<ChunkingOverrides> = match args.next() {
        Some(overrides_path) => Some(serde_json::from_str(&std::fs::read_to_string(
            overrides_path,
        )?)?),
        None => None,
    };

    let content = std::fs::read_to_string(&path)?;
    let characteristics = analyze_document(&content);

    let (doc, config) = DocumentProcessor::new().process_document(
        &content,
        &path,
        "text",
        overrides.as_ref(),
        &AdaptiveChunker::new(),
    )?;

    let chunks: Vec<_> = doc
        .chunks
        .iter()
        .map(|chunk| {
            serde_json::json!({
                "index": chunk.index,
                "chars": chunk.char_count,
                "span": [chunk.start, chunk.end],
                "keywords": chunk.keywords,
            })
        })
        .collect();

    let report = serde_json::json!({
        "document_id": doc.id,
        "characteristics": characteristics,
        "config": config,
        "metadata": doc.metadata,
        "chunks": chunks,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
