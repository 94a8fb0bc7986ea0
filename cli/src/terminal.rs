pub mod console;
pub mod logging;
pub mod print;
