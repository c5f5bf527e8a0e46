use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "noor",
    version,
    about = "نور الهداية — Arabic assistant chat in the terminal, powered by Gemini"
)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<String>,
    /// Model identifier override
    #[arg(long)]
    pub model: Option<String>,
    /// System instruction override
    #[arg(long)]
    pub system: Option<String>,
    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,
}
