pub mod metric;
pub mod radar;
pub mod showcase;

pub use metric::*;
pub use radar::*;
pub use showcase::*;
