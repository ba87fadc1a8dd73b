use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "mathpanel")]
#[command(about = "Convert a saved math panel HTML file to LaTeX")]
#[command(version)]
pub struct Cli {
    /// HTML file to read
    pub input: PathBuf,

    /// LaTeX file to write
    pub output: PathBuf,

    /// Wrap the output in a compilable article preamble
    #[arg(long)]
    pub standalone: bool,

    /// Use custom config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
