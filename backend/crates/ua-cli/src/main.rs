//! ua - user administration CLI
//!
//! # Examples
//!
//! ```bash
//! # Second page of users, 25 per page, sorted by name
//! ua users search --page 1 --rows 25 --sort name --pretty
//!
//! # Edit a user through its form
//! ua users get 42 --form > user.json
//! ua users update 42 user.json --main-email 1
//!
//! # Address lookup
//! ua cep 01310-100
//! ```

mod cli;
mod commands;
mod user_commands;

use crate::{cli::Cli, commands::Commands, user_commands::UserCommands};

use ua_cli::grid::{DataGrid, FilePreferenceStore};
use ua_cli::user_grid::{GridActions, PREFERENCES_FILENAME, drive_grid, user_grid_options};
use ua_cli::client::USERS_SEARCH_PATH;
use ua_cli::{CliClientResult, Client, ClientError, logger, user_forms};
use ua_config::Config;
use ua_core::{UserIncludes, UserMapper, UserValidator, ValidationLimits};

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::initialize(cli.verbose);

    let config = match Config::load().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.client.server_url.clone());

    let client = match Client::new(
        &server_url,
        Duration::from_secs(config.client.timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(cli.command, &client, &config).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(ClientError::Core { source }) => {
            eprintln!("Error: {}", source);
            if let ua_core::CoreError::Fields { errors, .. } = &source {
                for error in errors {
                    eprintln!("  {}", error);
                }
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, client: &Client, config: &Config) -> CliClientResult<Value> {
    let mapper = UserMapper::new(&config.uploads.base_url, &config.uploads.path);
    let validator = UserValidator::new(ValidationLimits {
        max_name_length: config.validation.max_name_length,
        min_password_length: config.validation.min_password_length,
        max_collection_size: config.validation.max_collection_size,
    });

    match command {
        Commands::Users { action } => match action {
            UserCommands::Search {
                page,
                rows,
                sort,
                order,
                search,
                group,
                ungroup,
                view,
                width,
                toggle_columns,
                raw,
            } => {
                let preferences_path = Config::config_dir()?.join(PREFERENCES_FILENAME);
                let options = user_grid_options(&config.grid);
                let fetcher = client.row_fetcher(
                    USERS_SEARCH_PATH,
                    &options.entity_name,
                );
                let grid = DataGrid::mount(
                    options,
                    Arc::new(fetcher),
                    Arc::new(FilePreferenceStore::new(preferences_path)),
                );

                let actions = GridActions {
                    view,
                    group,
                    ungroup,
                    rows,
                    sort,
                    order,
                    search,
                    page,
                    toggle_columns,
                    width,
                };
                let snapshot = drive_grid(&grid, &actions).await;

                let mut value = serde_json::to_value(&snapshot)?;
                if !raw {
                    value["rows"] = snapshot.display_rows(grid.options());
                }
                Ok(value)
            }
            UserCommands::Get {
                id,
                no_email,
                no_telephone,
                no_address,
                form,
            } => {
                if form {
                    let form = user_forms::fetch_form(client, id, &mapper).await?;
                    return Ok(serde_json::to_value(form)?);
                }
                let includes = UserIncludes {
                    email: !no_email,
                    telephone: !no_telephone,
                    address: !no_address,
                };
                client.get_user(id, includes).await
            }
            UserCommands::Create { form, main } => {
                let mut form = user_forms::read_form(&form)?;
                user_forms::choose_main(&mut form, main.into())?;
                user_forms::create_from_form(client, &form, &mapper, &validator).await
            }
            UserCommands::Update { id, form, main } => {
                let mut form = user_forms::read_form(&form)?;
                user_forms::choose_main(&mut form, main.into())?;
                user_forms::update_from_form(client, id, &form, &mapper, &validator).await
            }
            UserCommands::Delete { id } => client.delete_user(id).await,
        },

        Commands::Cep { code } => client.lookup_cep(&code).await,
    }
}
