//! Binary entrypoint for iconmeta

fn main() {
    if let Err(err) = iconmeta_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
