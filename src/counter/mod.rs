mod chars;

pub use chars::{CharCounter, count_chars};
