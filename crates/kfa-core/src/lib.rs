pub mod dict;
pub mod phoneme;
pub mod settings;
pub mod speech;
pub mod translate;
pub mod unicode;
pub mod words;
