use std::path::PathBuf;

use clap::Parser;

use firwav::config::FilterConfig;
use firwav::error::FirError;
use firwav::processing::apply_filter_with_config;
use firwav::signal_processing::{FilterType, WindowType};
use firwav::wav::{read_wav, save_wav};

#[derive(Parser, Debug)]
#[command(name = "firwav")]
#[command(about = "Apply a windowed-sinc FIR filter to a PCM WAV file", long_about = None)]
struct Args {
    /// Input WAV file
    input: Option<PathBuf>,

    /// Filter type: -lowpass or -highpass (anything else means lowpass)
    #[arg(allow_hyphen_values = true)]
    filter_type: Option<FilterType>,

    /// Cut-off frequency in Hz
    cutoff_hz: Option<u32>,

    /// Filter length (even values are promoted to the next odd length)
    filter_length: Option<usize>,

    /// Window: -rectangular, -hamming, -hanning, or -blackman
    #[arg(allow_hyphen_values = true)]
    window: Option<WindowType>,

    /// Output WAV file
    #[arg(short, long, default_value = "output.wav")]
    output: PathBuf,
}

impl Args {
    /// Positional arguments are all-or-nothing: with none, the documented
    /// defaults apply; with all five, they are used as given. A partial list
    /// is rejected rather than silently mixed with defaults.
    fn into_config(self) -> Result<FilterConfig, FirError> {
        match (
            self.input,
            self.filter_type,
            self.cutoff_hz,
            self.filter_length,
            self.window,
        ) {
            (None, None, None, None, None) => Ok(FilterConfig {
                output: self.output,
                ..Default::default()
            }),
            (Some(input), Some(filter_type), Some(cutoff_hz), Some(filter_length), Some(window)) => {
                Ok(FilterConfig {
                    input,
                    filter_type,
                    cutoff_hz,
                    filter_length,
                    window,
                    output: self.output,
                })
            }
            _ => Err(FirError::InvalidArgument(
                "expected either no positional arguments or all five: \
                 <input> <filter_type> <cutoff_hz> <filter_length> <window>"
                    .into(),
            )),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Args::parse().into_config()?;
    config.validate()?;

    let audio = read_wav(&config.input)?;
    println!("====== WAV Input File Info ======");
    println!("Sample Rate: {}Hz", audio.sample_rate);
    println!("No of samples: {}", audio.sample_count());

    let filtered = apply_filter_with_config(&audio, &config)?;

    println!("====== WAV Output File Info ======");
    println!("Sample Rate: {}Hz", filtered.sample_rate);
    println!("No of samples: {}", filtered.sample_count());

    save_wav(&config.output, &filtered)?;
    log::info!("wrote {}", config.output.display());

    Ok(())
}
