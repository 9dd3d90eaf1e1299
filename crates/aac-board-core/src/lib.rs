//! # aac-board-core
//!
//! Core mapping engine for a two-level AAC (augmentative and alternative
//! communication) board: top-level categories, each holding image→text
//! entries, persisted in a line-oriented text file. Surrounding UI code
//! drives the [`Navigator`] with `select`/`add_item`/`reset` and renders
//! whatever [`Navigator::list_locations`] returns; this crate does no
//! rendering and no input handling.
//!
//! ```no_run
//! use aac_board_core::Navigator;
//!
//! let mut navigator = Navigator::from_file("board.txt");
//! navigator.select("one")?;           // enter category "one", no speech
//! let text = navigator.select("a")?;  // speak the text behind image "a"
//! # Ok::<(), aac_board_core::AacBoardError>(())
//! ```

pub mod assoc;
pub mod category;
pub mod config;
pub mod error;
pub mod navigator;

pub use assoc::{AssocMap, MapKey};
pub use category::Category;
pub use config::Config;
pub use error::{AacBoardError, Result};
pub use navigator::{Cursor, Navigator};
