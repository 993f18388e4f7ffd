//! Tidyline - adaptively aligned status lines for iterative processes.
//!
//! Tidyline de-clutters the messy output strings produced by loops that
//! print evolving numbers, such as model fitting. Each named field carries
//! a message template with a single `{...}` substitution site; the writer
//! remembers the widest value each field has rendered and pads every later
//! value out to that width, so columns stay aligned across prints:
//!
//! ```text
//!     Iteration: 1 ‖ value: 1.000000 ‖ delta: 0.000000
//!     Iteration: 11 ‖ value: -12.403241 ‖ delta: -9.203241
//!     Iteration: 21 ‖ value:   5.209824 ‖ delta: 17.613065
//! ```
//!
//! It supports:
//!
//! - Integer (`d`) and fixed-point float (`f`) fields, with optional
//!   minimum width and float precision: `{:d}`, `{:5d}`, `{:.2f}`,
//!   `{:7.3f}`
//! - A monotone width ratchet: a field widened by one value never narrows
//! - A configurable separator between fields, `" ‖ "` by default
//! - Construction from pairs, prepared definitions, or a JSON object
//!
//! # Quick Start
//!
//! ```rust
//! use tidyline::{LineWriter, Values};
//!
//! let mut writer = LineWriter::with_fields([
//!     ("iter", "iter {:3d}"),
//!     ("loss", "loss {:.3f}"),
//! ])?;
//!
//! // values can arrive in any order; output follows registration order
//! let line = writer.format(&Values::new().set("loss", 0.25).set("iter", 7))?;
//! assert_eq!(line, "iter   7 ‖ loss 0.250");
//!
//! // a wide value raises the field's width for every later call
//! let line = writer.format(&Values::new().set("iter", 12345).set("loss", 0.25))?;
//! assert_eq!(line, "iter 12345 ‖ loss 0.250");
//!
//! let line = writer.format(&Values::new().set("iter", 8).set("loss", 0.25))?;
//! assert_eq!(line, "iter     8 ‖ loss 0.250");
//! # Ok::<(), tidyline::WriterError>(())
//! ```
//!
//! # Message Syntax
//!
//! A message is literal text with exactly one substitution site. The
//! pattern between the braces is `:` + optional minimum width + optional
//! `.`-prefixed precision + a type tag:
//!
//! | Pattern | Meaning |
//! |---------|---------|
//! | `{:d}` | integer, no minimum width |
//! | `{:5d}` | integer, at least 5 columns |
//! | `{:f}` | float, 6 decimal digits |
//! | `{:.2f}` | float, 2 decimal digits |
//! | `{:7.2f}` | float, 2 decimal digits, at least 7 columns |
//!
//! Precision is only legal on float fields, and every render call must
//! supply a value for every registered field. All formatting is
//! locale-free.
//!
//! # Concurrency
//!
//! Rendering mutates the width marks, so [`LineWriter::format`] takes
//! `&mut self`; wrap the writer in a lock if it must be shared across
//! threads.

mod error;
mod field;
mod pattern;
mod value;
mod writer;

pub use error::{Result, WriterError};
pub use field::Field;
pub use pattern::{compose, decompose, validate, Kind};
pub use value::{Number, Values};
pub use writer::{FieldDef, LineWriter, DEFAULT_SEPARATOR};
