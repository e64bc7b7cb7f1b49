//! Text export format for solved mazes.
//!
//! A document is:
//!
//! ```text
//! 9515          one line per grid row, one hex digit per cell
//! AC3E          (the cell's wall mask, blocked cells always F)
//!
//! 0,0           entry x,y
//! 3,1           exit x,y
//! EESEN...      one move letter per path step
//! ```
//!
//! [`encode`] and [`write_solution`] produce it; [`decode`] parses it back
//! into a [`DecodedMaze`] whose [`verify`](DecodedMaze::verify) replays the
//! moves against the decoded walls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::{encode, encode_rows};
pub use error::ExportError;
pub use reader::{decode, DecodedMaze};
pub use writer::{save, write_solution};
