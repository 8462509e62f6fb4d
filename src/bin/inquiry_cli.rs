use inquiry_core::{cli, init};

fn main() {
    init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = cli::run(&args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
