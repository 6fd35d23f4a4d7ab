/// Reads through to whatever [`Configuration`](crate::config::structs::configuration::Configuration)
/// was last installed with `Configuration::install`, at lookup time.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstalledConfiguration;
