fn main() {
    if let Err(e) = passfoto::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
