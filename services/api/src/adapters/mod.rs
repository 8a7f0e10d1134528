pub mod enhance_llm;
pub mod enhance_mock;
pub mod store;

pub use enhance_llm::OpenAiEnhanceAdapter;
pub use enhance_mock::MockEnhanceAdapter;
pub use store::JsonFileStore;
