pub mod paapi;
pub mod product;

pub use paapi::*;
pub use product::*;
