use crate::{QueryCompiler, SearchMessageOptions, SearchMessageParams};
use search_cancel::{CancellationToken, SearchVersions};
use tracing::info;

/// One search box. A search that is overtaken by a newer one started from the
/// same session yields nothing.
pub struct SearchSession {
    compiler: QueryCompiler,
    versions: SearchVersions,
}

impl SearchSession {
    pub fn new(compiler: QueryCompiler) -> Self {
        Self {
            compiler,
            versions: SearchVersions::new(),
        }
    }

    pub fn compiler(&self) -> &QueryCompiler {
        &self.compiler
    }

    pub fn versions(&self) -> &SearchVersions {
        &self.versions
    }

    pub async fn search(
        &self,
        query: &str,
        options: SearchMessageOptions,
    ) -> Option<SearchMessageParams> {
        let token = self.versions.issue();
        self.run(query, options, token).await
    }

    /// Like [`Self::search`] with a version numbered by the host, e.g. a
    /// request id that only grows.
    pub async fn search_versioned(
        &self,
        query: &str,
        options: SearchMessageOptions,
        version: u64,
    ) -> Option<SearchMessageParams> {
        let token = self.versions.begin(version);
        self.run(query, options, token).await
    }

    async fn run(
        &self,
        query: &str,
        options: SearchMessageOptions,
        token: CancellationToken,
    ) -> Option<SearchMessageParams> {
        let parsed = self.compiler.parse_query(query).await;
        if token.is_cancelled() {
            info!("Search {} was superseded", token.version());
            return None;
        }
        Some(parsed.to_params(options))
    }
}
