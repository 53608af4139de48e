//! Document head reconciliation.
//!
//! Views declare [`PageMetadata`]; the [`HeadSynchronizer`] turns it into a
//! keyed [`HeadState`], diffs it against what was applied before and applies
//! the resulting [`HeadMutation`]s. Templates render the returned
//! [`HeadSnapshot`].

mod metadata;
mod state;
mod sync;

pub use metadata::{
    ArticleTimestamps, DEFAULT_DESCRIPTION, NO_INDEX, OgType, PageMetadata, TwitterCard,
};
pub use state::{HeadKey, HeadMutation, HeadState, MetaAttr, plan};
pub use sync::{DEFAULT_TITLE, HeadSnapshot, HeadSynchronizer, MetaTag, SiteIdentity};
