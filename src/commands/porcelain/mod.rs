//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `rm`: Remove files from the working tree and the index
//! - `commit`: Record the staged state as a new commit
//! - `status`: Show working tree status
//! - `ls_files`: List tracked files
//! - `config`: Read or set the commit author
//! - `log`: Show commit history
//! - `branch`: Create or list branches
//! - `checkout`: Switch branches
//! - `stash`: Shelve uncommitted work

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod config;
pub mod init;
pub mod log;
pub mod ls_files;
pub mod rm;
pub mod stash;
pub mod status;
