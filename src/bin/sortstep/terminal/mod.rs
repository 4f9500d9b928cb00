mod capabilities;

pub use capabilities::{ColorLevel, TerminalCapabilities};
