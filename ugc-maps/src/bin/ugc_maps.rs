use clap::Parser;
use ugc_maps::app::UgcApp;

fn main() {
    env_logger::init();
    let args = UgcApp::parse();
    match args.op.run() {
        Ok(summaries) => {
            for summary in summaries {
                println!("{summary}");
            }
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
