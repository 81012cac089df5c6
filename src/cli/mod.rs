pub mod args;
pub mod render;
pub mod session;

pub use args::Args;
pub use render::Render;
pub use session::Session;
