mod path;
pub use path::*;

mod stroke;
pub use stroke::*;
