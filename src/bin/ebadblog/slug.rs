use crate::args;
use crate::error::Result;

/// Print the URL slug for each title
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct SlugArgs {
    /// Content titles
    #[arg(required = true)]
    titles: Vec<String>,

    #[command(flatten, next_help_heading = "CONFIG")]
    config: args::ConfigArgs,
}

impl SlugArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let site = self.config.resolve()?;
        for title in &self.titles {
            let slug = site.slugify(title);
            if slug.is_empty() {
                log::warn!("{title:?} has no characters usable in a slug");
            }
            println!("{slug}");
        }
        Ok(())
    }
}
