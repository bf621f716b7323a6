pub mod keyword;

pub use keyword::{classify, KEYWORD_SEPARATOR};
