pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::RequestLoader;
pub use schema::Source;
pub use validator::SourceValidator;
