//! Privilege mode: run privileged commands directly or through a helper.
//!
//! The resolved `Elevation` is an explicit value handed to every mutating
//! operation. Pure functions only.

use serde::Serialize;

use crate::domain::error::PrivilegeError;

/// How privileged commands are executed for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "helper", rename_all = "snake_case")]
pub enum Elevation {
    /// Effective UID is already 0.
    Direct,
    /// Every privileged command is prefixed with the named helper.
    Helper(String),
}

impl Elevation {
    /// Decide the privilege mode.
    ///
    /// Superuser wins. Otherwise the helper is used if it is available.
    ///
    /// # Errors
    ///
    /// Returns `PrivilegeError::Unavailable` when the process is not root and
    /// the helper cannot be found.
    pub fn resolve(
        is_superuser: bool,
        helper: &str,
        helper_available: bool,
    ) -> Result<Self, PrivilegeError> {
        if is_superuser {
            Ok(Self::Direct)
        } else if helper_available {
            Ok(Self::Helper(helper.to_owned()))
        } else {
            Err(PrivilegeError::Unavailable {
                helper: helper.to_owned(),
            })
        }
    }

    /// Build the argv for a privileged invocation of `program`.
    #[must_use]
    pub fn wrap<'a>(&'a self, program: &'a str, args: &[&'a str]) -> (&'a str, Vec<&'a str>) {
        match self {
            Self::Direct => (program, args.to_vec()),
            Self::Helper(helper) => {
                let mut argv = Vec::with_capacity(args.len() + 1);
                argv.push(program);
                argv.extend_from_slice(args);
                (helper.as_str(), argv)
            }
        }
    }

    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Direct => "running as root".to_owned(),
            Self::Helper(helper) => format!("elevating privileged commands with {helper}"),
        }
    }
}
