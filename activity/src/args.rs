use clap::Parser;

/// Options handed over by the activity shell.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct ActivityArgs {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Start with sharing already enabled
    #[arg(long)]
    pub shared: bool,
}

impl ActivityArgs {
    /// Parses a handle string such as `#-vv&--seed=7`.
    pub fn from_handle(handle: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(handle.split(['#', '&']))
    }

    pub fn log_level(&self) -> Option<log::Level> {
        self.verbose.log_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_handle_uses_defaults() {
        let args = ActivityArgs::from_handle("").unwrap();

        assert_eq!(args.seed, None);
        assert!(!args.shared);
        assert_eq!(args.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn handle_options_are_parsed() {
        let args = ActivityArgs::from_handle("#-vv&--seed=7&--shared").unwrap();

        assert_eq!(args.seed, Some(7));
        assert!(args.shared);
        assert_eq!(args.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn bad_seed_is_an_error() {
        assert!(ActivityArgs::from_handle("#--seed=cookie").is_err());
    }
}
