pub mod dotenv;

pub use dotenv::DotenvParser;
