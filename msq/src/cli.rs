use clap::Parser;
use message_search::SearchMessageSortKey;
use std::path::PathBuf;

#[derive(Parser)]
pub struct Cli {
    /// JSON snapshot with the channels, users and groups queries resolve against.
    #[clap(long)]
    pub directory: PathBuf,
    #[clap(long)]
    pub limit: Option<u32>,
    #[clap(long)]
    pub offset: Option<u32>,
    /// One of createdAt, -createdAt, updatedAt, -updatedAt.
    #[clap(long)]
    pub sort: Option<SearchMessageSortKey>,
    /// IANA time zone civil dates are read in. Defaults to $MSEARCH_TZ, then UTC.
    #[clap(long)]
    pub tz: Option<String>,
    #[clap(long, default_value = "false")]
    /// Print the compiled terms instead of the search parameters.
    pub explain: bool,
    #[clap(long, default_value = "false", conflicts_with = "explain")]
    /// Treat every line as a channel path query and print the matches.
    pub channels: bool,
}
