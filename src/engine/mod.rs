mod stroke;
pub use stroke::*;

mod session;
pub use session::*;
