//! outcome CLI
//!
//! Builds responses from the command line and reports how they classify.

use clap::{Parser, Subcommand, ValueEnum};
use outcome::{Response, Status};
use tracing_subscriber::{fmt, EnvFilter};

/// outcome CLI
#[derive(Parser, Debug)]
#[command(name = "outcome-cli")]
#[command(about = "Build and inspect operation responses")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a response with one of the named factories
    Make {
        /// Which factory to use
        kind: Kind,

        /// Error message (error factories only)
        #[arg(short, long)]
        message: Option<String>,

        /// Status code (`error` and `success` only)
        #[arg(short, long, allow_negative_numbers = true)]
        code: Option<i32>,

        /// Description (`skipped` only)
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Show the named status and success flag for a raw code
    Classify {
        /// The status code
        #[arg(allow_negative_numbers = true, allow_hyphen_values = true)]
        code: i32,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Error,
    NotFound,
    BadRequest,
    InvalidCredentials,
    UnprocessableEntity,
    InternalServerError,
    Success,
    Created,
    Modified,
    Removed,
    Ignored,
    Skipped,
}

impl Kind {
    fn takes_message(self) -> bool {
        matches!(
            self,
            Kind::Error
                | Kind::NotFound
                | Kind::BadRequest
                | Kind::InvalidCredentials
                | Kind::UnprocessableEntity
                | Kind::InternalServerError
        )
    }

    fn takes_code(self) -> bool {
        matches!(self, Kind::Error | Kind::Success)
    }

    fn takes_description(self) -> bool {
        matches!(self, Kind::Skipped)
    }
}

fn warn_unused_options(
    kind: Kind,
    message: Option<&str>,
    code: Option<i32>,
    description: Option<&str>,
) {
    if message.is_some() && !kind.takes_message() {
        tracing::warn!("--message does not apply to {:?}, ignoring it", kind);
    }
    if code.is_some() && !kind.takes_code() {
        tracing::warn!("--code does not apply to {:?}, ignoring it", kind);
    }
    if description.is_some() && !kind.takes_description() {
        tracing::warn!("--description does not apply to {:?}, ignoring it", kind);
    }
}

fn build(
    kind: Kind,
    message: Option<&str>,
    code: Option<i32>,
    description: Option<&str>,
) -> Response {
    warn_unused_options(kind, message, code, description);

    match kind {
        Kind::Error => Response::error(message, code.unwrap_or(Response::BAD_REQUEST)),
        Kind::NotFound => Response::not_found(message),
        Kind::BadRequest => Response::bad_request(message),
        Kind::InvalidCredentials => Response::invalid_credentials(message),
        Kind::UnprocessableEntity => Response::unprocessable_entity(message),
        Kind::InternalServerError => Response::internal_server_error(message),
        Kind::Success => Response::success(code.unwrap_or(Response::UPDATED)),
        Kind::Created => Response::created(),
        Kind::Modified => Response::modified(),
        Kind::Removed => Response::removed(),
        Kind::Ignored => Response::ignored(),
        Kind::Skipped => Response::skipped(description),
    }
}

fn status_label(code: i32) -> String {
    match Status::try_from(code) {
        Ok(status) => status.name().to_string(),
        Err(e) => {
            tracing::debug!("{}", e);
            "-".to_string()
        }
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,outcome=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!("outcome-cli v{}", outcome::VERSION);

    match args.command {
        Commands::Make {
            kind,
            message,
            code,
            description,
        } => {
            let response = build(kind, message.as_deref(), code, description.as_deref());

            println!("status:      {}", response.status_code());
            println!("name:        {}", status_label(response.status_code()));
            println!("successful:  {}", response.is_successful());
            println!("description: {}", response.description().unwrap_or("-"));
            println!("errors:      {}", response.errors().len());
            for error in response.errors() {
                println!("  - {}", error);
            }

            if let Err(e) = response.into_result() {
                tracing::info!("{}", e);
                std::process::exit(1);
            }
        }
        Commands::Classify { code } => {
            println!("name:        {}", status_label(code));
            println!("successful:  {}", Response::with_status_code(code).is_successful());
        }
    }
}
