//! Content metadata: categories of items describing lessons, labs and landing pages.
//!
//! A metadata document is a JSON object whose keys are category names and whose
//! values are ordered lists of [`Item`] records:
//!
//! ```json
//! {
//!   "GA_Lesson_Examples": [
//!     {
//!       "topic": "Build an Express App",
//!       "file_type": "lesson",
//!       "learning_objectives": ["Create routes", "Render views"],
//!       "content_metrics": { "word_count": 1200, "text_to_code_ratio": 0.6 }
//!     }
//!   ]
//! }
//! ```
//!
//! Field defaults are resolved once, by the accessors on [`Item`].

pub mod store;
pub mod types;

pub use store::{Category, MetadataDocument};
pub use types::{
    ContentMetrics, Item, Metrics, COURSE_LANDING, DEFAULT_FILE_TYPE, NUMBER_OF_DIAGRAMS,
    NUMBER_OF_IMAGES, TEXT_TO_CODE_RATIO, UNNAMED, WORD_COUNT,
};
