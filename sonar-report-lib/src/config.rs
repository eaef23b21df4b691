use crate::reports::Template;
use camino::Utf8PathBuf;
use core::fmt::{self, Debug, Formatter};

/// Resolved settings for one report run.
///
/// Built once from the command line and never modified afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Key of the project on the analysis server
    pub project_key: String,

    /// Base URL of the analysis server
    pub host: String,

    /// Token sent as a bearer credential
    pub token: String,

    /// Where the rendered report is written
    pub output: Utf8PathBuf,

    pub template: Template,

    /// Pull request to report on; empty for a whole-project report
    pub pull_request: String,
}

impl Config {
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        !self.pull_request.is_empty()
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("project_key", &self.project_key)
            .field("host", &self.host)
            .field("token", &"<redacted>")
            .field("output", &self.output)
            .field("template", &self.template)
            .field("pull_request", &self.pull_request)
            .finish()
    }
}
