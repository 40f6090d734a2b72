//! Filter stages
//!
//! Each filter owns its upstream stage as a `Box<dyn TokenStream>` and
//! pulls from it on demand. Filters clear their own buffers before
//! forwarding `reset`, `reopen` and `close` upstream.

mod alnum;
mod compound;
mod dedup;
mod ngram;
mod shingle;
mod stem;
mod stop;

pub use alnum::AlnumSegmentFilter;
pub use compound::CompoundSplitFilter;
pub use dedup::DeduplicateFilter;
pub use ngram::EdgeNgramFilter;
pub use shingle::ShingleFilter;
pub use stem::{StemFilter, StemWithOriginalFilter};
pub use stop::{stop_set, StopFilter, StopSet};
