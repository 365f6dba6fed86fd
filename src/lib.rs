pub mod http;
pub mod letters;
