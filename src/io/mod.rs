/*!
# IO utilities

Sentence corpus loading ([CorpusReader]) and chunked saving of accepted sentences ([ChunkWriter]).
!*/
mod chunks;
mod reader;

pub use chunks::{
    ChunkWriter, Record, RecordFormat, DEFAULT_CHUNK_SIZE, DOMAIN, RATIONALE, SOURCE_URL,
};
pub use reader::{CorpusReader, Line, DEFAULT_COLUMN};
