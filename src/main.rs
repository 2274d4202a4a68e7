//! lifx-color: set the color and brightness of LIFX bulbs from the command line.

use clap::Parser;
use lifx_color::{LifxApi, LogSink, SurfTransport, DEFAULT_API_URL};
use log::LevelFilter;
use smol::block_on;
use std::io::Write;

#[derive(Parser)]
#[command(
    name = "lifx-color",
    version,
    about = "Set the color of LIFX lights through the LIFX HTTP API"
)]
struct Args {
    /// LIFX API access token
    #[arg(short, long)]
    token: String,

    /// Color to set, e.g. "red", "#ff0000" or "hue:120 saturation:1.0"
    #[arg(short, long)]
    color: String,

    /// Brightness from 0.0 to 1.0
    #[arg(short, long, default_value = "1.0")]
    brightness: String,

    /// Only change the lights in this group
    #[arg(short, long)]
    group: Option<String>,

    /// Also log raw API responses
    #[arg(short, long)]
    verbose: bool,

    #[arg(long, hide = true, default_value = DEFAULT_API_URL)]
    api_url: String,
}

fn stdout_logger(verbose: bool) -> env_logger::Logger {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {:>20}:{:<5} - {}",
                buf.timestamp(),
                record.level(),
                record.module_path().unwrap_or_default(),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .build()
}

fn main() {
    let args = Args::parse();

    let sink = LogSink::new(stdout_logger(args.verbose));
    let api = LifxApi::with_transport(&args.token, SurfTransport::new(), sink.clone())
        .with_base_url(&args.api_url);

    let result = block_on(api.set_color(&args.color, &args.brightness, args.group.as_deref()));
    sink.flush();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_defaults_to_full() {
        let args = Args::try_parse_from(["lifx-color", "-t", "x", "-c", "red"]).unwrap();
        assert_eq!(args.brightness, "1.0");
        assert_eq!(args.group, None);
        assert!(!args.verbose);
        assert_eq!(args.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn short_flags_parse() {
        let args = Args::try_parse_from([
            "lifx-color", "-t", "abc123", "-c", "#ff0000", "-b", "0.5", "-g", "kitchen", "-v",
        ])
        .unwrap();
        assert_eq!(args.token, "abc123");
        assert_eq!(args.color, "#ff0000");
        assert_eq!(args.brightness, "0.5");
        assert_eq!(args.group.as_deref(), Some("kitchen"));
        assert!(args.verbose);
    }

    #[test]
    fn brightness_is_not_reformatted() {
        let args =
            Args::try_parse_from(["lifx-color", "-t", "x", "-c", "red", "-b", "0.50"]).unwrap();
        assert_eq!(args.brightness, "0.50");
    }

    #[test]
    fn token_and_color_are_required() {
        assert!(Args::try_parse_from(["lifx-color", "-c", "red"]).is_err());
        assert!(Args::try_parse_from(["lifx-color", "-t", "x"]).is_err());
    }
}
