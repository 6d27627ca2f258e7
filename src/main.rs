#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = if std::env::args_os().count() <= 1 {
        citra::ui::run(None)
    } else {
        citra::run_cli()
    };

    if let Err(error) = result {
        log::error!("{error}");
        eprintln!("{error}");
        std::process::exit(1);
    }
}
