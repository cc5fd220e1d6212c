//! Delimited dataset I/O for the rescale pipeline.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{IngestError, Result};
pub use reader::{DataRow, DelimitedReader};
pub use writer::DelimitedWriter;
