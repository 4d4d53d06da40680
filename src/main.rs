fn main() {
    if let Err(err) = qrschema::run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
