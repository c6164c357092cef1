pub mod lexicon;
pub mod quiz;
pub mod session;
pub mod srs;
pub mod store;
pub mod word;

pub use lexicon::{Lexicon, PartnerPools};
pub use quiz::{generate, Question, QuestionKind, QuizMode};
pub use session::{Session, Verdict};
pub use srs::{
    apply_grade, merge_record, ExportDocument, ReviewRecord, ReviewStore, Srs, WordStatus,
    EXPORT_VERSION, STORE_KEY,
};
pub use store::{KeyValueStore, MemoryStore, StoreError, StoreResult};
pub use word::{Connotation, PartOfSpeech, WordEntry};
