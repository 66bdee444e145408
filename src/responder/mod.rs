pub mod engine;
pub mod pack;
pub mod rules;

pub use engine::{classify, respond};
pub use pack::{Domain, Language, ResponsePack, Topic};
pub use rules::{KeywordRule, RULES};
