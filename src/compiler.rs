use crate::{CompilerConfig, Directory, ReadyGate, SearchMessageQuery};
use channel_tree::ChannelTree;
use futures_util::future::join_all;
use search_syntax::{
    extract, is_plain_word, parse_date, parse_message_ref, tokenize, AttrFlag, DateContext,
    Extracted, ExtractedFilter, Filter, FilterKind, MediaFlag, Term, UserId, CHANNEL_SIGIL,
    USER_SIGIL,
};
use std::sync::Arc;
use tracing::debug;

/// Turns search box text into a [`SearchMessageQuery`].
///
/// Compiling never fails: tokens that cannot be resolved are dropped and the
/// rest of the query still applies.
pub struct QueryCompiler {
    directory: Arc<dyn Directory>,
    gate: ReadyGate,
    dates: DateContext,
}

impl QueryCompiler {
    pub fn new(directory: Arc<dyn Directory>, gate: ReadyGate) -> Self {
        Self::with_config(directory, gate, CompilerConfig::default())
    }

    pub fn with_config(directory: Arc<dyn Directory>, gate: ReadyGate, config: CompilerConfig) -> Self {
        Self {
            directory,
            gate,
            dates: config.date_context(),
        }
    }

    /// Channel tree snapshot, once the directory is ready.
    pub async fn channels(&self) -> Arc<ChannelTree> {
        self.gate.wait().await;
        self.directory.channels()
    }

    pub async fn parse_query(&self, query: &str) -> SearchMessageQuery {
        self.parse_terms(query)
            .await
            .into_iter()
            .map(SearchMessageQuery::from)
            .fold(SearchMessageQuery::default(), SearchMessageQuery::merge)
    }

    /// Compiled terms in token order, dropped tokens left out.
    pub async fn parse_terms(&self, query: &str) -> Vec<Term> {
        self.gate.wait().await;
        let channels = self.directory.channels();
        let compiled = join_all(
            tokenize(query).map(|token| self.compile_with(token, &channels)),
        )
        .await;
        compiled.into_iter().flatten().collect()
    }

    /// Compiles a single token. `None` means the token was dropped.
    pub async fn compile(&self, token: &str) -> Option<Term> {
        self.gate.wait().await;
        let channels = self.directory.channels();
        self.compile_with(token, &channels).await
    }

    async fn compile_with(&self, token: &str, channels: &ChannelTree) -> Option<Term> {
        if is_plain_word(token) {
            return Some(Term::Word(token.to_string()));
        }
        let extracted = match extract(token) {
            Extracted::Plain(word) => return Some(Term::Word(word.to_string())),
            Extracted::Filter(extracted) => extracted,
        };
        let kind = extracted.kind;
        let filter = self.parse_filter(extracted, channels).await;
        if filter.is_none() {
            debug!("Dropped {} token {:?}", kind, token);
        }
        filter.map(Term::Filter)
    }

    async fn parse_filter(
        &self,
        extracted: ExtractedFilter<'_>,
        channels: &ChannelTree,
    ) -> Option<Filter> {
        let ExtractedFilter {
            kind,
            body,
            negate,
            raw,
        } = extracted;
        let raw = raw.to_string();
        let filter = match kind {
            FilterKind::After => Filter::After {
                raw,
                value: parse_date(body, &self.dates)?,
            },
            FilterKind::Before => Filter::Before {
                raw,
                value: parse_date(body, &self.dates)?,
            },
            FilterKind::In => Filter::In {
                raw,
                value: channels.path_to_id(strip_sigil(body, CHANNEL_SIGIL))?,
            },
            FilterKind::To => Filter::To {
                raw,
                value: self.user_or_group(strip_sigil(body, USER_SIGIL)).await?,
            },
            FilterKind::From => Filter::From {
                raw,
                value: self.user(strip_sigil(body, USER_SIGIL)).await?,
            },
            FilterKind::Citation => Filter::Citation {
                raw,
                value: parse_message_ref(body)?,
            },
            FilterKind::AttrFlag => Filter::AttrFlag {
                raw,
                value: AttrFlag::from_body(body)?,
                negate,
            },
            FilterKind::MediaFlag => Filter::MediaFlag {
                raw,
                value: MediaFlag::from_body(body)?,
                negate,
            },
        };
        Some(filter)
    }

    async fn user(&self, name: &str) -> Option<UserId> {
        if name.is_empty() {
            return None;
        }
        self.directory.find_user(name).await
    }

    async fn user_or_group(&self, name: &str) -> Option<UserId> {
        if name.is_empty() {
            return None;
        }
        match self.directory.find_user(name).await {
            Some(id) => Some(id),
            None => self.directory.find_group(name).await,
        }
    }
}

fn strip_sigil(body: &str, sigil: char) -> &str {
    body.strip_prefix(sigil).unwrap_or(body)
}
