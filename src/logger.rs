use chrono::Local;
use env_logger::{Builder, Env};
use std::io::Write;

/// Info by default, debug when verbose. `RUST_LOG` wins over both.
pub fn init(verbose: bool) {
    let default_level = if verbose { "info,jobscrape=debug" } else { "info" };

    Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}
