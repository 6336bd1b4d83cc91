use reef_compat::{Evaluator, TraitIndex};
use reef_config::ReefConfig;

/// Everything a command handler needs once configuration and the trait
/// dataset are loaded.
pub struct AppContext {
    pub config: ReefConfig,
    pub index: &'static TraitIndex,
}

impl AppContext {
    pub const fn new(config: ReefConfig, index: &'static TraitIndex) -> Self {
        Self { config, index }
    }

    pub const fn evaluator(&self) -> Evaluator<'static> {
        Evaluator::new(self.index)
    }
}
