pub mod adaptive;
pub mod character;
pub mod chunk;
pub mod keywords;

pub use adaptive::AdaptiveChunker;
pub use character::CharacterTextSplitter;
pub use chunk::ChunkSize;
pub use keywords::extract_keywords;
