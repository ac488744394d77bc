//! Sluice - fetch secrets once, hand them to your application.
//!
//! A one-shot launcher: it reads a secret bundle from a secret manager,
//! optionally writes it to a file, projects selected fields into
//! environment variables, and launches the application with that
//! environment.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # One launcher run (default command)
//! │   ├── check         # Validate configuration, print the plan
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # SLUICE_LA_* launcher settings
//!     ├── env           # Run-scoped environment snapshot
//!     ├── provider/     # Secret backends
//!     │   ├── mod       # SecretFetcher trait, SLUICE_SM_* settings
//!     │   ├── vault     # HashiCorp Vault KV v2
//!     │   ├── file      # Local JSON file
//!     │   └── command   # Any command printing JSON
//!     ├── bundle        # Secret bundle and fetch-once cache
//!     ├── materialize   # Output file writer
//!     ├── directive     # field,ENV_NAME parsing and naming policy
//!     ├── projector     # Directive resolution and injection
//!     ├── launcher      # Child process launch
//!     └── redact        # Secret redaction for logs
//! ```
//!
//! # Example
//!
//! ```bash
//! export SLUICE_SM_PROVIDER=vault
//! export SLUICE_SM_KEY=app1
//! export SLUICE_SM_VAULT_ADDR=http://local-vault-server:8200
//! export SLUICE_SM_VAULT_USER=myuser
//! export SLUICE_SM_VAULT_PASS=mypassword
//! export SLUICE_LA_OUT_FILE=./config/config.json
//! export SLUICE_LA_ENV_READ_AND_SET_1="first-secret,APP_SECRET_1"
//! export SLUICE_LA_ENV_READ_AND_SET_2="second-secret,APP_SECRET_2"
//! export SLUICE_LA_CMD_APP="node server.js"
//! sluice
//! ```

pub mod cli;
pub mod core;
pub mod error;
