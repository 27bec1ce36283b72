use formkit_core::code::{ClockSource, RollingCodeGenerator};
use formkit_core::config::FormkitConfig;
use formkit_core::error::CoreResult;
use formkit_core::sanitize::clean_form_values_with;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: formkit sanitize <path/to/form.json>\n       formkit code <seed> [lifetime_secs]";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match args[1].as_str() {
        "sanitize" => sanitize_file(&args[2], &config),
        "code" => {
            let lifetime = match args.get(3).map(|s| s.parse::<i64>()) {
                None => config.code.lifetime_secs,
                Some(Ok(l)) => l,
                Some(Err(_)) => {
                    eprintln!("invalid lifetime_secs: {}", args[3]);
                    std::process::exit(2);
                }
            };
            print_code(&args[2], lifetime)
        }
        other => {
            eprintln!("unknown command: {}\n{}", other, USAGE);
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("formkit error: {}", e);
        std::process::exit(1);
    }
}

fn load_config() -> CoreResult<FormkitConfig> {
    match std::env::var_os("FORMKIT_CONFIG") {
        Some(path) => {
            tracing::info!(path = ?path, "loading config");
            FormkitConfig::from_path(std::path::Path::new(&path))
        }
        None => Ok(FormkitConfig::default()),
    }
}

fn sanitize_file(path: &str, config: &FormkitConfig) -> CoreResult<()> {
    let raw = std::fs::read_to_string(path)?;
    let data: serde_json::Value = serde_json::from_str(&raw)?;
    let cleaned = clean_form_values_with(&data, &config.sanitize)?;
    println!("{}", serde_json::to_string_pretty(&cleaned)?);
    Ok(())
}

fn print_code(seed: &str, lifetime_secs: i64) -> CoreResult<()> {
    let generator = RollingCodeGenerator::new(lifetime_secs, ClockSource::System)?;
    println!("{} (rotates in {}s)", generator.code(seed), generator.expires_in());
    Ok(())
}
