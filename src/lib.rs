//! # LaziComb - Lazy Sequence Combinator Library
//!
//! A lazy iterable combinator library built around immutable sequences and
//! cheap, independent cursors.
//!
//! LaziComb provides composable, type-safe sequence transformers that can be
//! stacked to build complex pipelines from simple building blocks. The
//! library emphasizes:
//!
//! - **Zero panics**: All exhaustion and argument errors are handled through
//!   `Result` types
//! - **Pull-based laziness**: Nothing upstream is computed until a cursor is
//!   pulled, so infinite sequences compose freely
//! - **Cursor independence**: Every `cursor()` call starts a fresh traversal;
//!   sequences are reusable cursor factories
//! - **Composability**: Small combinators stack into larger pipelines through
//!   constructor functions or extension-trait methods

pub mod batch;
pub mod comprehension;
pub mod conjoin;
pub mod construct;
pub mod cursor;
pub mod cycle;
pub mod drop;
pub mod each;
pub mod equate;
pub mod error;
pub mod filter;
pub mod flat_map;
pub mod index;
pub mod items;
pub mod map;
pub mod partition;
pub mod product;
pub mod reject;
pub mod repeat;
pub mod repeatedly;
pub mod rest;
pub mod sequence;
pub mod slice;
pub mod take;
pub mod zip;

pub use cursor::Cursor;
pub use error::LazicombError;
pub use items::{Items, empty, items};
pub use repeat::{repeat, repeat_times};
pub use repeatedly::repeatedly;
pub use sequence::{SeqIter, Sequence};

pub use batch::BatchExt;
pub use comprehension::comprehension;
pub use conjoin::ConjoinExt;
pub use construct::ConstructExt;
pub use cycle::CycleExt;
pub use drop::DropExt;
pub use each::EachExt;
pub use equate::EquateExt;
pub use filter::FilterExt;
pub use flat_map::FlatMapExt;
pub use index::IndexExt;
pub use map::MapExt;
pub use partition::{PartitionExt, partition};
pub use product::{ProductExt, cartesian_product, product_all};
pub use reject::RejectExt;
pub use rest::{RestExt, nth_rest, rest};
pub use slice::SliceExt;
pub use take::TakeExt;
pub use zip::{ZipExt, zip, zip_all};
