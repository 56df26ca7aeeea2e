//! # Seq Core
//!
//! `seq-core` defines a pull-based sequence protocol. A [`Sequence`] hands
//! out one element per [`Sequence::pull`] call and tells the caller, through
//! [`Step`], whether more elements may follow.
//!
//! On top of the protocol the crate provides:
//!
//! - adapters that reshape any sequence: [`Limit`], [`Filter`] and [`Skip`],
//!   reachable through [`SequenceExt`];
//! - [`count`], which drains a sequence and reports how many elements it
//!   produced;
//! - [`Iter`], a bridge to `std` iterators;
//! - [`IterSeq`], which turns any iterator into a sequence;
//! - [`BurnMap`], a fixed-capacity set that draws unique values from a
//!   sequence.
//!
//! Producers share two small capability structs, [`StatusTracker`] and
//! [`Position`], which they hold as fields and delegate to.

pub mod adapters;
pub mod burn_map;
pub mod sequence;
pub mod source;
pub mod tracking;

pub use adapters::{Filter, Limit, Skip};
pub use burn_map::BurnMap;
pub use sequence::{
    count, Iter, LastStatus, Sequence, SequenceExt, Status, Step,
};
pub use source::IterSeq;
pub use tracking::{Position, StatusTracker};

pub use seq_error::{Result, SeqError};
