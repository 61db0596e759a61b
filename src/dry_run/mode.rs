use crate::{
    constants::flags,
    store::{is_truthy, Values},
};

/// Which simulation, if any, a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DryRunMode {
    #[default]
    Off,
    /// Only `appName` (plus `formNumber` for forms) must be supplied.
    Interactive,
    /// The full strict required-field set must be supplied.
    NonInteractive,
}

impl DryRunMode {
    /// Reads the dry-run flags from raw options.
    ///
    /// The interactive flag wins when several are given; the generic
    /// `dryRun` flag means non-interactive.
    pub fn from_options(options: &Values) -> Self {
        let set = |key: &str| options.get(key).is_some_and(is_truthy);
        if set(flags::DRY_RUN_INTERACTIVE) {
            DryRunMode::Interactive
        } else if set(flags::DRY_RUN_NON_INTERACTIVE) || set(flags::DRY_RUN) {
            DryRunMode::NonInteractive
        } else {
            DryRunMode::Off
        }
    }

    pub fn is_active(self) -> bool {
        self != DryRunMode::Off
    }

    /// Rewrites the flags in `options` so exactly one explicit mode flag remains.
    pub fn normalize(self, options: &mut Values) {
        options.shift_remove(flags::DRY_RUN);
        options.shift_remove(flags::DRY_RUN_INTERACTIVE);
        options.shift_remove(flags::DRY_RUN_NON_INTERACTIVE);
        match self {
            DryRunMode::Off => {}
            DryRunMode::Interactive => {
                options.insert(flags::DRY_RUN_INTERACTIVE.to_string(), true.into());
            }
            DryRunMode::NonInteractive => {
                options.insert(flags::DRY_RUN_NON_INTERACTIVE.to_string(), true.into());
            }
        }
    }
}
