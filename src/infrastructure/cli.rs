use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["bbstui"]);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["bbstui", "--tick-rate", "1.5", "--frame-rate", "10"]);
        assert_eq!(cli.tick_rate, 1.5);
        assert_eq!(cli.frame_rate, 10.0);
    }
}
