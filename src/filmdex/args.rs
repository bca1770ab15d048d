use clap::{Args, Parser, Subcommand};
use filmdex::model::ViewMode;
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("FILMDEX_BUILD"), ")");

#[derive(Parser, Debug)]
#[command(name = "filmdex", version = VERSION)]
#[command(about = "Search, sort and filter a movie catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON dataset to load instead of the configured or bundled catalog
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Query options shared by `list` and `search`.
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Only show movies whose title, director, producer or year contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order: titleAsc, titleDesc, yearAsc, yearDesc
    #[arg(long)]
    pub sort: Option<String>,

    /// Check a director in the director filter (repeatable)
    #[arg(long, value_name = "NAME")]
    pub director: Vec<String>,

    /// Check a producer in the producer filter (repeatable)
    #[arg(long, value_name = "NAME")]
    pub producer: Vec<String>,

    /// Check a value in any filter, as ATTRIBUTE=VALUE (repeatable)
    #[arg(long, value_name = "ATTRIBUTE=VALUE")]
    pub filter: Vec<String>,

    /// Layout: grid or list
    #[arg(long)]
    pub view: Option<ViewMode>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List movies (the default command)
    #[command(alias = "ls")]
    List(QueryArgs),

    /// Search movies by title, director, producer or year
    Search {
        /// Text to look for
        term: String,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Show the options of an attribute filter
    Options {
        /// Attribute name (director, producer, title, year)
        attribute: String,
    },

    /// Interactive session reading one action per line from stdin
    Shell,

    /// Get or set configuration
    Config {
        /// Configuration key (default-sort, default-view, filters, dataset)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_query() {
        let cli = Cli::parse_from([
            "filmdex",
            "ls",
            "--sort",
            "yearDesc",
            "--director",
            "Isao Takahata",
            "--director",
            "Hayao Miyazaki",
            "--view",
            "list",
        ]);
        let Some(Commands::List(query)) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(query.sort.as_deref(), Some("yearDesc"));
        assert_eq!(query.director.len(), 2);
        assert_eq!(query.view, Some(ViewMode::List));
    }

    #[test]
    fn rejects_unknown_view() {
        assert!(Cli::try_parse_from(["filmdex", "list", "--view", "table"]).is_err());
    }

    #[test]
    fn search_takes_query_flags() {
        let cli = Cli::parse_from(["filmdex", "search", "castle", "--producer", "P1"]);
        let Some(Commands::Search { term, query }) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(term, "castle");
        assert_eq!(query.producer, vec!["P1"]);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["filmdex", "shell", "--data", "movies.json", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.data, Some(PathBuf::from("movies.json")));
    }
}
