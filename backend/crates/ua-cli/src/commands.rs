use crate::user_commands::UserCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// User operations
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Look an address up by CEP through the server proxy
    Cep {
        /// 8 digits, punctuation allowed (e.g. 01310-100)
        code: String,
    },
}
