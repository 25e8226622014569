//! Application layer use cases for the `wifi` tool.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure rules in `wifi-core`) and the infrastructure (child processes, files,
//! the terminal).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil one user goal (e.g., "pick a
//!   network from a menu, connect to it, and remember its password").
//! - **Depend on abstractions** (the traits in [`ports`]) rather than on
//!   `nmcli` or the file system, so every branch can be unit-tested.
//! - **Report** through the [`Reporter`](ports::Reporter) port and return an
//!   [`Outcome`](outcome::Outcome) or an [`AppError`](outcome::AppError) that
//!   the binary turns into an exit code.
//!
//! # Sub-modules
//!
//! - **`ports`**              – The traits and error types shared by all use cases.
//! - **`outcome`**            – How a finished command ended.
//! - **`radio`**              – `on`, `off`, `status`.
//! - **`list_networks`**      – `list`, `list --verbose`, `list --saved`.
//! - **`connect_network`**    – `connect`: menu, password prompt, autosave.
//! - **`disconnect_network`** – `disconnect [--forget]`.
//! - **`manage_saved`**       – `save` and `forget`.
//! - **`manage_config`**      – `config get` / `config set`.
//! - **`dispatch`**           – Routes a parsed [`Command`](dispatch::Command)
//!   to the right use case.

pub mod connect_network;
pub mod disconnect_network;
pub mod dispatch;
pub mod list_networks;
pub mod manage_config;
pub mod manage_saved;
pub mod outcome;
pub mod ports;
pub mod radio;
