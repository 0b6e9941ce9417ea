//! Positional argument declarations
//!
//! An `ArgumentSpec` describes one positional argument; builders append
//! them to a command in the order supplied.

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction};

/// Declaration of one positional argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    name: String,
    description: Option<String>,
    required: bool,
    default: Option<String>,
    choices: Vec<String>,
    variadic: bool,
}

impl ArgumentSpec {
    /// A required positional argument
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            required: true,
            default: None,
            choices: Vec::new(),
            variadic: false,
        }
    }

    /// An optional positional argument
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name)
        }
    }

    /// Help text shown in usage
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Value used when the argument is omitted; makes the argument optional
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self.required = false;
        self
    }

    /// Restrict accepted values
    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    /// Accept one or more values; only meaningful for the last argument
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// Convert to a clap positional argument
    pub fn to_arg(&self) -> Arg {
        let mut arg = Arg::new(self.name.clone())
            .value_name(self.name.clone())
            .required(self.required);

        if let Some(description) = &self.description {
            arg = arg.help(description.clone());
        }

        if let Some(default) = &self.default {
            arg = arg.default_value(default.clone());
        }

        if !self.choices.is_empty() {
            arg = arg.value_parser(PossibleValuesParser::new(self.choices.clone()));
        }

        if self.variadic {
            arg.num_args(1..).action(ArgAction::Append)
        } else {
            arg.action(ArgAction::Set)
        }
    }
}
