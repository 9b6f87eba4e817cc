//! CLI argument parsing and action dispatch.
//!
//! The cluster manager calls the agent with exactly one action argument and
//! passes everything else through `OCF_RESKEY_*` variables.

use clap::{Parser, ValueEnum};
use tracing::Instrument;

use crate::app::AppContext;
use crate::application::ports::{ProcessReaper, StorageDriver};
use crate::commands;
use crate::commands::usage::USAGE;
use crate::domain::{AgentError, OcfStatus};

/// OCF resource agent for ZFS pools
#[derive(Parser)]
#[command(name = "zpool-agent", version, disable_help_subcommand = true)]
pub struct Cli {
    /// start | stop | status | monitor | validate-all | meta-data | usage
    #[arg(value_name = "ACTION", num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<String>,
}

/// Actions understood by the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    Start,
    Stop,
    #[value(alias = "status")]
    Monitor,
    ValidateAll,
    MetaData,
    Usage,
}

impl Cli {
    /// The single action named on the command line.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::BadInvocation`] unless exactly one argument was
    /// given, and [`AgentError::UnknownVerb`] if it is not an action.
    pub fn action(&self) -> Result<Action, AgentError> {
        let [verb] = self.args.as_slice() else {
            return Err(AgentError::BadInvocation(self.args.len()));
        };
        Action::from_str(verb, false).map_err(|_| AgentError::UnknownVerb(verb.clone()))
    }

    /// Execute the action and return the status to exit with.
    pub async fn run(self) -> OcfStatus {
        let action = match self.action() {
            Ok(action) => action,
            Err(e) => {
                eprintln!("{USAGE}");
                return e.status();
            }
        };
        match action {
            Action::MetaData => return commands::meta_data::run(),
            Action::Usage => return commands::usage::run(),
            _ => {}
        }

        let app = match AppContext::from_env() {
            Ok(app) => app,
            Err(e) => return e.status(),
        };
        crate::infra::logging::init(app.config.debug_enabled());
        let span = crate::infra::logging::pool_span(app.config.pool.as_deref().unwrap_or(""));
        dispatch(action, &app).instrument(span).await
    }
}

/// Route an action to its command handler.
pub async fn dispatch<D: StorageDriver, P: ProcessReaper>(
    action: Action,
    app: &AppContext<D, P>,
) -> OcfStatus {
    tracing::debug!(?action, "invoked");
    match action {
        Action::Start => commands::start::run(app).await,
        Action::Stop => commands::stop::run(app).await,
        Action::Monitor => commands::monitor::run(app).await,
        Action::ValidateAll => commands::validate::run(app).await,
        Action::MetaData => commands::meta_data::run(),
        Action::Usage => commands::usage::run(),
    }
}
