use clap::Parser;

#[derive(Parser)]
#[command(name = "lincolnshire-processor")]
#[command(about = "OpenCL-accelerated per-station temperature statistics")]
#[command(version)]
pub struct Cli {
    #[arg(
        short = 'p',
        long = "platform",
        default_value_t = 0,
        help = "Select OpenCL platform index"
    )]
    pub platform: usize,

    #[arg(
        short = 'd',
        long = "device",
        default_value_t = 0,
        help = "Select OpenCL device index"
    )]
    pub device: usize,

    #[arg(
        short = 'l',
        long = "list",
        help = "List available platforms and devices, then continue"
    )]
    pub list: bool,

    #[arg(long, help = "Enable verbose logging")]
    pub verbose: bool,
}
