//! listkeeper: shopping lists, to-do lists and ordered to-do lists
//!
//! The engine lives in `listkeeper_core` and is re-exported here. This crate
//! adds what an application needs around it:
//!
//! - [`AppState`] / [`AppAction`] / [`reducer`]: lists plus settings, loading
//!   and sync bookkeeping
//! - [`storage`]: the persisted [`Document`](storage::Document), file and
//!   memory backends
//! - [`cloud`]: the optional sync endpoint
//! - [`Runtime`]: runs the effects the reducer declares as background tasks
//! - [`intents`]: validated form input to engine actions
//! - [`Config`] and [`logging`]
//!
//! # Example
//!
//! ```no_run
//! use listkeeper::prelude::*;
//!
//! # async fn run() -> listkeeper::Result<()> {
//! let config = Config::load("listkeeper.json")?;
//! listkeeper::logging::init(&config);
//!
//! let mut runtime = Runtime::from_config(&config)?;
//! runtime.dispatch(AppAction::StorageLoad)?;
//! runtime.next().await?;
//!
//! let action = intents::add_list(&runtime.state().settings, "Groceries", ListType::Shopping)?;
//! runtime.dispatch(AppAction::Edit(action))?;
//! runtime.flush().await?;
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod cloud;
pub mod config;
pub mod effect;
pub mod error;
pub mod intents;
pub mod logging;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod storage;
pub mod tasks;

pub use listkeeper_core::*;

pub use action::AppAction;
pub use cloud::{CloudClient, CloudReply};
pub use config::{CloudConfig, Config};
pub use effect::Effect;
pub use error::{Error, Result};
pub use reducer::reducer;
pub use runtime::Runtime;
pub use state::{AppState, Settings};
pub use storage::{Document, JsonFileStorage, MemoryStorage, Storage};
pub use tasks::{TaskKey, TaskManager};

pub mod prelude {
    pub use listkeeper_core::prelude::*;

    pub use crate::action::AppAction;
    pub use crate::config::Config;
    pub use crate::effect::Effect;
    pub use crate::intents;
    pub use crate::runtime::Runtime;
    pub use crate::state::{AppState, Settings};
    pub use crate::storage::{Document, JsonFileStorage, MemoryStorage, Storage};
}
