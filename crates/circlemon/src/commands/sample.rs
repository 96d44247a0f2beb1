use clap::Args;

#[derive(Args)]
pub struct SampleArgs {
    /// Number of samples to print
    #[arg(short, long, default_value_t = 5)]
    pub count: u32,
    /// Print each sample as a JSON object
    #[arg(long)]
    pub json: bool,
}

/// Prints `count` samples one second apart, using the same sampler and
/// presenter as the widget.
#[cfg(windows)]
pub fn execute(args: &SampleArgs) {
    use std::thread;
    use std::time::Duration;

    use circlemon_core::Sampler;
    use circlemon_core::gauge::{Palette, present};
    use circlemon_windows::SystemCounters;

    let mut sampler = Sampler::new(SystemCounters::new());
    let palette = Palette::default();

    for _ in 0..args.count {
        // CPU usage is a delta, so every reading needs an interval first.
        thread::sleep(Duration::from_secs(1));
        let sample = sampler.sample();

        if args.json {
            match serde_json::to_string(&sample) {
                Ok(line) => println!("{line}"),
                Err(e) => eprintln!("Error: {e}"),
            }
            continue;
        }

        let p = present(&sample, &palette);
        println!(
            "{:<14} {:>5.1}°  {:<9} | {:<13} {:>5.1}°  {:<9} | {}",
            p.cpu_text,
            p.outer.arc.angle,
            format!("{:?}", p.outer.level),
            p.ram_text,
            p.inner.arc.angle,
            format!("{:?}", p.inner.level),
            p.detail,
        );
    }
}

#[cfg(not(windows))]
pub fn execute(_args: &SampleArgs) {
    super::unsupported_platform();
}
