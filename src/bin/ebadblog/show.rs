use crate::args;
use crate::error::Result;

/// Print the resolved site configuration
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
#[group(id = "ShowConfigArgs")]
pub(crate) struct ConfigArgs {
    #[command(flatten, next_help_heading = "CONFIG")]
    config: args::ConfigArgs,
}

impl ConfigArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let site = self.config.resolve()?;
        print!("{site}");
        Ok(())
    }
}

/// Print the base URL absolute links are generated against
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct UrlArgs {
    #[command(flatten, next_help_heading = "CONFIG")]
    config: args::ConfigArgs,
}

impl UrlArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let site = self.config.resolve()?;
        log::info!("Using {}", site.deployment);
        println!("{}", site.site_url);
        Ok(())
    }
}
