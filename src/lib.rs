pub mod analysis;
pub mod error;
pub mod planner;
pub mod processor;
pub mod schema;
pub mod text_splitters;
pub mod traits;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub use processor::{plan_document, DocumentProcessor};

/// Re-exports for common types
pub mod prelude {
    pub use crate::analysis::{
        analyze_document, DocumentCategory, DocumentCharacteristics, DocumentStructureType,
    };
    pub use crate::error::Error;
    pub use crate::planner::{
        adaptive_chunking_strategy, ChunkingConfig, ChunkingOverrides, ChunkingStrategy,
    };
    pub use crate::processor::{plan_document, DocumentProcessor};
    pub use crate::schema::*;
    pub use crate::text_splitters::AdaptiveChunker;
    pub use crate::traits::*;
    pub use crate::Result;
}
