mod config;
mod driver;
mod lookahead;
mod variants;

pub use config::{
    EhcConfig, LookaheadKind, DEFAULT_BACKTRACK_BUDGET, DEFAULT_MAX_QUEUE_SIZE,
    LEGACY_BACKTRACK_BUDGET, LEGACY_MAX_QUEUE_SIZE,
};
pub use driver::EhcSearch;
pub use lookahead::LookaheadResult;
pub use variants::{
    adapted_ehc, classic_ehc, db_adapted_ehc, depthbound_ehc, episodic_ehc, guided_ehc, hb_ehc,
    super_ehc, SearchVariantName,
};
