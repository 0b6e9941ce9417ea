//! Command builder and program registry
//!
//! Uses the clap builder API so commands can be declared at runtime.

pub mod arguments;
pub mod builder;
pub mod options;
pub mod output;
pub mod program;

pub use arguments::ArgumentSpec;
pub use builder::{
    build_and_bind, build_base_command, build_with_args_and_config, build_with_config,
    build_with_positional_args, BoundCommand, Handler, Invocation,
};
pub use options::StandardOptions;
pub use program::{ParsedCommand, Program};
