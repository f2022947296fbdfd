fn main() {
    if let Err(e) = ops_by_hive::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
