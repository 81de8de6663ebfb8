use clap::builder::BoolishValueParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ffscript")]
#[command(
    author,
    version,
    about = "Generate a script that runs ffmpeg over every video in a directory"
)]
pub struct Cli {
    /// Directory to scan (defaults to the current directory)
    pub dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// ffmpeg arguments placed between the input and output file [default: -codec copy]
    #[arg(long, allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Output extension, without the leading dot [default: mp4]
    #[arg(long)]
    pub out: Option<String>,

    /// Scan subdirectories too; an explicit value needs `=`, as in --recursive=false
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub recursive: Option<bool>,

    /// Delete each source file after its command ran; an explicit value needs `=`, as in --delete-source=true
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub delete_source: Option<bool>,

    /// Script flavor: powershell, batch, bash or text [default: powershell]
    #[arg(long)]
    pub script_type: Option<String>,

    /// Pipe separated list of source extensions, e.g. "mkv|avi"
    #[arg(long)]
    pub extensions: Option<String>,

    /// Case-insensitive pattern of file names to skip
    #[arg(long, allow_hyphen_values = true)]
    pub exclude: Option<String>,

    /// ffmpeg binary written into each command [default: ffmpeg]
    #[arg(long)]
    pub ffmpeg: Option<String>,

    /// Base name of the generated script [default: run-ffmpeg]
    #[arg(long)]
    pub script_name: Option<String>,

    /// Print the script instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}
