//! Parsing of vector graphics path data.
//!
//! This crate reads the compact path description mini-language used by the
//! `d` attribute of SVG `<path>` elements and emits each command through a
//! [`PathSink`]. Two sinks are provided:
//!
//! - [`NormalizingSink`] reduces the path to absolute move, line, cubic
//!   and arc commands, collected as [`PathCommand`]s. This is what
//!   [`parse`] uses.
//! - [`DrawingSink`] draws the path on a canvas-like [`DrawTarget`],
//!   converting elliptical arcs to center parameterization along the way.
//!
//! Parsing is best effort. Unknown command letters are skipped along with
//! their arguments, and commands with an incomplete trailing group of
//! arguments are reported as [`ArityError`]s and skipped. Anything else
//! that is not a finite number stops the parse with an [`Error`].
//!
//! # Example
//!
//! ```
//! use path_data::PathCommand;
//!
//! let commands = path_data::parse("M 0 0 L 10 0 10 10 Z").unwrap();
//! assert_eq!(
//!     commands,
//!     [
//!         PathCommand::Move { x: 0.0, y: 0.0 },
//!         PathCommand::Line { x: 10.0, y: 0.0 },
//!         PathCommand::Line { x: 10.0, y: 10.0 },
//!         PathCommand::Line { x: 0.0, y: 0.0 },
//!     ]
//! );
//! ```
//!
//! Drawing into a [`kurbo::BezPath`] (requires the `kurbo` feature):
//!
//! ```
//! # #[cfg(feature = "kurbo")] {
//! use path_data::DrawingSink;
//!
//! let mut path = kurbo::BezPath::new();
//! path_data::parse_with("M 0 0 A 5 5 0 0 1 10 0", &mut DrawingSink::new(&mut path)).unwrap();
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

extern crate alloc;

mod arc;
mod command;
mod dispatch;
mod draw;
mod error;
mod normalize;
mod sink;
mod state;
mod target;
mod tokenize;

use alloc::vec::Vec;

pub use arc::CenterArc;
pub use command::Command;
pub use dispatch::{dispatch, dispatch_letter};
pub use draw::DrawingSink;
pub use error::{ArityError, Error};
pub use normalize::{NormalizingSink, PathCommand};
pub use sink::PathSink;
pub use state::{PathState, Point};
pub use target::{DrawCommand, DrawTarget, NullTarget};
pub use tokenize::{segments, Args, Segment, Segments};

/// Parses path data into a sequence of normalized commands.
///
/// This uses a [`NormalizingSink`]. Argument groups that are missing values
/// are logged and skipped; use [`parse_with`] to receive them.
pub fn parse(data: &str) -> Result<Vec<PathCommand>, Error> {
    let mut sink = NormalizingSink::new();
    parse_with(data, &mut sink)?;
    Ok(sink.into_commands())
}

/// Parses path data, emitting each command to the given sink.
///
/// The sink is initialized before the first command. On success, returns
/// the incomplete argument groups that were skipped.
///
/// An [`Error`] stops the parse at the offending segment. Commands from
/// earlier segments have already been emitted to the sink.
pub fn parse_with<S>(data: &str, sink: &mut S) -> Result<Vec<ArityError>, Error>
where
    S: PathSink + ?Sized,
{
    sink.init();
    let mut arity_errors = Vec::new();
    let mut args = Vec::new();
    for segment in segments(data) {
        args.clear();
        for arg in segment.args() {
            args.push(arg?);
        }
        if let Err(e) = dispatch(sink, segment.command(), &args) {
            log::warn!("{e}");
            arity_errors.push(e);
        }
    }
    Ok(arity_errors)
}
