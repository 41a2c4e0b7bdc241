//! different utility modules used throughout the project
/// terminal and file logging setup (simplelog)
pub mod logger;
/// methods offered to the user, their input prompts and a text driven runner
pub mod method_table;
/// parse task document with structure like "task method: bisection function: x - 2 ... settings loglevel: info" and run it
pub mod task_parser;
