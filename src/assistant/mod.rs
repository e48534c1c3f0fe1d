mod keyword;
mod prompt;
mod relay;

pub use keyword::*;
pub use prompt::*;
pub use relay::*;
