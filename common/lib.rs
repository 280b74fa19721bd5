mod form;
mod options;
mod predict;

pub use self::form::*;
pub use self::options::*;
pub use self::predict::*;
