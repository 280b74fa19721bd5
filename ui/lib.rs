mod button;
mod form;
mod util;
mod window;

pub use self::button::*;
pub use self::form::*;
pub use self::util::*;
pub use self::window::*;
