use clap::ValueEnum;
use strum::{Display, EnumIter};

/// Output layout of a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Template {
    /// Compact Markdown for a pull request comment
    #[default]
    GithubSmall,

    /// The render context as JSON
    Json,
}
