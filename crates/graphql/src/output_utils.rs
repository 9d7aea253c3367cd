pub(crate) const GREEN_CHECK: &str = "✓";
pub(crate) const RED_X: &str = "✗";

/// How a command renders its findings on stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    #[default]
    Text,
}
