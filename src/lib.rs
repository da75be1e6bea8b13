//! Compiles the text typed into a chat search box into the positional
//! parameters of the message search endpoint.
//!
//! ```
//! use message_search::{
//!     ready_gate, InMemoryDirectory, QueryCompiler, SearchMessageOptions,
//! };
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (signal, gate) = ready_gate();
//! let compiler = QueryCompiler::new(Arc::new(InMemoryDirectory::new()), gate);
//! signal.mark_ready();
//!
//! let query = compiler.parse_query("hello has:image world").await;
//! assert_eq!(query.word.as_deref(), Some("hello world"));
//! assert_eq!(query.has_image, Some(true));
//! let params = query.to_params(SearchMessageOptions::default());
//! assert_eq!(params.query_pairs().len(), 2);
//! # }
//! ```
mod compiler;
mod config;
pub mod consts;
mod directory;
mod gate;
mod params;
mod query;
mod session;

pub use compiler::QueryCompiler;
pub use config::CompilerConfig;
pub use directory::{Directory, DirectorySnapshot, GroupEntry, InMemoryDirectory, UserEntry};
pub use gate::{ready_gate, ReadyGate, ReadySignal};
pub use params::{
    ParseSortKeyError, SearchMessageOptions, SearchMessageParams, SearchMessageSortKey,
    SEARCH_PARAM_NAMES,
};
pub use query::SearchMessageQuery;
pub use session::SearchSession;

pub use channel_tree::{ChannelMatcher, ChannelNode, ChannelTree};
pub use search_syntax::{to_iso_string, ChannelId, Filter, FilterKind, MessageId, Term, UserId};
