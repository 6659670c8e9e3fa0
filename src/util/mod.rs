mod result_ext;
pub use result_ext::*;

mod deferred;
pub use deferred::*;
