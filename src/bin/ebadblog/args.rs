use std::env;
use std::io::Write;
use std::path;

use anyhow::Context as _;

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _ebadblog.yml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<ebadblog_config::Config> {
        let config = if let Some(config_path) = self.config.as_deref() {
            ebadblog_config::Config::from_file(config_path)
                .with_context(|| format!("Error reading config file {}", config_path.display()))?
        } else {
            let cwd = env::current_dir().context("Failed to read the current directory")?;
            ebadblog_config::Config::from_cwd(cwd)?
        };
        Ok(config)
    }

    /// Load the config and resolve it against the process environment.
    pub(crate) fn resolve(&self) -> Result<ebadblog_config::SiteConfig> {
        let config = self.load_config()?;
        let env = ebadblog_config::Environment::from_process();
        log::trace!("Captured {} environment variables", env.len());
        let site = config
            .resolve(&env)
            .context("Failed to resolve the site configuration")?;
        Ok(site)
    }
}

pub(crate) fn init_logging(level: Option<log::Level>) {
    if let Some(level) = level {
        let mut builder = env_logger::Builder::new();

        builder.filter(None, level.to_level_filter());

        if level == log::Level::Trace {
            builder.format_timestamp_secs();
        } else {
            builder.format(|f, record| {
                writeln!(
                    f,
                    "[{}] {}",
                    record.level().to_string().to_lowercase(),
                    record.args()
                )
            });
        }

        builder.init();
    }
}
