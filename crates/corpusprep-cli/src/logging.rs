use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, default_value = None)]
    verbose: Option<u8>,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// The stderrlog verbosity, from `-v` flags or `default`.
    fn level(
        &self,
        default: u8,
    ) -> stderrlog::LogLevelNum {
        let level = if let Some(verbose) = self.verbose
            && verbose > 0
        {
            default.saturating_add(verbose)
        } else {
            default
        };

        match level {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        }
    }

    /// Install the stderr logger.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.level(default))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct TestArgs {
        #[clap(flatten)]
        logging: LogArgs,
    }

    #[test]
    fn test_levels() {
        let args = TestArgs::parse_from(["test"]);
        assert!(matches!(args.logging.level(3), stderrlog::LogLevelNum::Info));

        let args = TestArgs::parse_from(["test", "-v"]);
        assert!(matches!(args.logging.level(3), stderrlog::LogLevelNum::Debug));

        let args = TestArgs::parse_from(["test", "-vvv", "--ts", "-q"]);
        assert!(matches!(args.logging.level(3), stderrlog::LogLevelNum::Trace));
        assert!(args.logging.ts);
        assert!(args.logging.quiet);
    }
}
