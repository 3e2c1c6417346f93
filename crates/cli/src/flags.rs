use clap::ValueEnum;
use grounded_embedder::EmbedderMode;

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum EmbedModeFlag {
    Http,
    Hash,
}

impl EmbedModeFlag {
    pub(crate) const fn as_domain(self) -> EmbedderMode {
        match self {
            EmbedModeFlag::Http => EmbedderMode::Http,
            EmbedModeFlag::Hash => EmbedderMode::Hash,
        }
    }
}
