use ua_cli::grid::{SortDirection, ViewMode};
use ua_cli::user_forms::MainChoices;

use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum UserCommands {
    /// Page through users with the data grid
    Search {
        /// Zero-based page index
        #[arg(long)]
        page: Option<usize>,

        /// Rows per page: 5, 10, 25, 50 or 100
        #[arg(long)]
        rows: Option<usize>,

        /// Sort column id (e.g. name, mainEmail)
        #[arg(long)]
        sort: Option<String>,

        /// Sort direction
        #[arg(long, value_parser = parse_direction)]
        order: Option<SortDirection>,

        /// Free-text filter on name, nickname, CPF and e-mails
        #[arg(long)]
        search: Option<String>,

        /// Group the table by this column
        #[arg(long, conflicts_with = "ungroup")]
        group: Option<String>,

        /// Clear a stored grouping
        #[arg(long)]
        ungroup: bool,

        /// grid or card
        #[arg(long, value_parser = parse_view)]
        view: Option<ViewMode>,

        /// Viewport width in pixels, used for the card layout
        #[arg(long)]
        width: Option<u32>,

        /// Show or hide a column (repeatable)
        #[arg(long = "toggle-column")]
        toggle_columns: Vec<String>,

        /// Print raw rows instead of formatted cells
        #[arg(long)]
        raw: bool,
    },

    /// Get a user by ID
    Get {
        id: i64,

        /// Skip e-mails
        #[arg(long)]
        no_email: bool,

        /// Skip telephones
        #[arg(long)]
        no_telephone: bool,

        /// Skip addresses
        #[arg(long)]
        no_address: bool,

        /// Print the editable form instead of the stored record
        #[arg(long, conflicts_with_all = ["no_email", "no_telephone", "no_address"])]
        form: bool,
    },

    /// Create a user from a form JSON file
    Create {
        form: PathBuf,

        #[command(flatten)]
        main: MainArgs,
    },

    /// Update a user from a form JSON file (only the changes are sent)
    Update {
        id: i64,
        form: PathBuf,

        #[command(flatten)]
        main: MainArgs,
    },

    /// Delete a user
    Delete { id: i64 },
}

/// Zero-based positions in the form's collections
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct MainArgs {
    /// Flag this e-mail as main
    #[arg(long)]
    main_email: Option<usize>,

    /// Flag this telephone as main
    #[arg(long)]
    main_telephone: Option<usize>,

    /// Flag this address as main
    #[arg(long)]
    main_address: Option<usize>,
}

impl From<MainArgs> for MainChoices {
    fn from(args: MainArgs) -> Self {
        MainChoices {
            email: args.main_email,
            telephone: args.main_telephone,
            address: args.main_address,
        }
    }
}

fn parse_direction(value: &str) -> Result<SortDirection, String> {
    match value.to_lowercase().as_str() {
        "asc" => Ok(SortDirection::Asc),
        "desc" => Ok(SortDirection::Desc),
        other => Err(format!("expected asc or desc, got '{}'", other)),
    }
}

fn parse_view(value: &str) -> Result<ViewMode, String> {
    value.parse()
}
