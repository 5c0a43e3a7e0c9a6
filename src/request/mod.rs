// Request description, geo tables, browser scripting, and wire compilation.

pub mod browser;
pub mod compiler;
pub mod geo;
pub mod options;
