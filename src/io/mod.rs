pub mod output;
pub mod real;
pub mod traits;

// Re-export I/O traits for convenient access
pub use output::{create_writer, JsonWriter, OutputWriter, ScoreReport};
pub use real::{LsblkLister, SmartctlProvider, StdinSelector};
pub use traits::{DeviceSelector, DiskLister, ReportProvider};
