mod form;
mod select_field;

pub use self::form::*;
pub use self::select_field::*;
