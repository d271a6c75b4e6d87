//! diffcheck Assert - non-panicking checks that explain mismatches
//!
//! Every check writes its failure report to a [`TestSink`] and marks the sink
//! failed, then returns `false` so the caller can carry on. Only the fatal
//! variants stop a check sequence, by returning [`Abort`].
//!
//! ```
//! use diffcheck_assert::{Checker, TestSink, WriterSink};
//!
//! let mut sink = WriterSink::new(Vec::new());
//! let mut check = Checker::new(&mut sink).without_position();
//! check.equal("v", 1, 2);
//! drop(check);
//!
//! assert!(sink.failed());
//! let out = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(out, "v is expected to be \"2\", but got \"1\"\n");
//! ```

pub mod checks;
pub mod config;
pub mod position;
pub mod sink;

pub use checks::{Abort, Checker};
pub use config::AssertConfig;
pub use position::Position;
pub use sink::{TestSink, WriterSink};
